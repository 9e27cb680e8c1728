//! Fetching stream bytes to disk.

use crate::error::Result;
use crate::model::Stream;
use async_trait::async_trait;
use futures_util::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Fetches the bytes of a selected stream to a destination path.
#[async_trait]
pub trait StreamDownloader: Send + Sync {
    /// Downloads `stream` to `destination`, overwriting any existing file.
    async fn download(&self, stream: &Stream, destination: &Path) -> Result<()>;
}

/// Downloader that streams the HTTP response body straight to disk.
#[derive(Debug, Clone, Default)]
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    /// Creates a downloader with its own HTTP client.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StreamDownloader for HttpDownloader {
    async fn download(&self, stream: &Stream, destination: &Path) -> Result<()> {
        log::debug!("Downloading {} to {}", stream.url, destination.display());

        let response = self
            .client
            .get(&stream.url)
            .send()
            .await?
            .error_for_status()?;

        let mut file = tokio::fs::File::create(destination).await?;
        let mut body = response.bytes_stream();

        while let Some(chunk) = body.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        Ok(())
    }
}
