//! Resolution of video and playlist IDs against the hosting service.
//!
//! The production resolver shells out to the `yt-dlp` executable with
//! `--dump-json` and maps the returned JSON onto the crate's models. Anything
//! that needs a resolver in tests implements the [`Resolver`] trait instead of
//! talking to the network.

use crate::error::{Error, Result};
use crate::model::{Playlist, Stream, StreamKind, Video};
use crate::process::run_command;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

/// Maps host identifiers to display metadata and available streams.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Fetches the title and stream list of a single video.
    async fn fetch_video(&self, id: &str) -> Result<Video>;

    /// Fetches the title and ordered member video IDs of a playlist.
    async fn fetch_playlist(&self, id: &str) -> Result<Playlist>;
}

/// Resolver backed by the `yt-dlp` executable.
#[derive(Debug, Clone)]
pub struct YtDlpResolver {
    executable: PathBuf,
}

impl YtDlpResolver {
    /// Creates a resolver invoking the given `yt-dlp` binary.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

#[async_trait]
impl Resolver for YtDlpResolver {
    async fn fetch_video(&self, id: &str) -> Result<Video> {
        let url = format!("https://www.youtube.com/watch?v={id}");
        let args = vec![
            "--no-progress".to_string(),
            "--dump-json".to_string(),
            url,
        ];

        let output = run_command(&self.executable, &args)
            .await
            .map_err(|e| Error::Resolve(id.to_string(), e.to_string()))?;

        let raw: RawVideo = serde_json::from_str(&output.stdout)?;
        Ok(raw.into_video())
    }

    async fn fetch_playlist(&self, id: &str) -> Result<Playlist> {
        let url = format!("https://www.youtube.com/playlist?list={id}");
        let args = vec![
            "--no-progress".to_string(),
            "--flat-playlist".to_string(),
            "--dump-single-json".to_string(),
            url,
        ];

        let output = run_command(&self.executable, &args)
            .await
            .map_err(|e| Error::Resolve(id.to_string(), e.to_string()))?;

        let raw: RawPlaylist = serde_json::from_str(&output.stdout)?;
        Ok(Playlist {
            id: raw.id,
            title: raw.title,
            video_ids: raw.entries.into_iter().map(|entry| entry.id).collect(),
        })
    }
}

/// The subset of `yt-dlp --dump-json` output this crate consumes.
#[derive(Debug, Deserialize)]
struct RawVideo {
    id: String,
    title: String,
    #[serde(default)]
    formats: Vec<RawFormat>,
}

#[derive(Debug, Deserialize)]
struct RawFormat {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    ext: Option<String>,
    /// Audio bitrate in kbit/s.
    #[serde(default)]
    abr: Option<f64>,
    #[serde(default)]
    acodec: Option<String>,
    #[serde(default)]
    vcodec: Option<String>,
    #[serde(default)]
    height: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawPlaylist {
    id: String,
    title: String,
    #[serde(default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    id: String,
}

impl RawVideo {
    fn into_video(self) -> Video {
        let streams = self
            .formats
            .into_iter()
            .filter_map(RawFormat::into_stream)
            .collect();

        Video {
            id: self.id,
            title: self.title,
            streams,
        }
    }
}

impl RawFormat {
    /// Maps a format onto a stream, or None for formats the pipeline cannot
    /// use: no direct URL, or video without an audio track.
    fn into_stream(self) -> Option<Stream> {
        let url = self.url?;
        let has_audio = self.acodec.as_deref().is_some_and(|codec| codec != "none");
        let has_video = self.vcodec.as_deref().is_some_and(|codec| codec != "none");

        let kind = match (has_audio, has_video) {
            (true, false) => StreamKind::AudioOnly {
                bitrate: (self.abr.unwrap_or(0.0) * 1000.0) as u64,
            },
            (true, true) => StreamKind::Muxed {
                quality: self.height.unwrap_or(0),
            },
            _ => return None,
        };

        Some(Stream {
            kind,
            container: self.ext.unwrap_or_else(|| "bin".to_string()),
            url,
        })
    }
}
