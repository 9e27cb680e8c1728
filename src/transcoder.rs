//! Audio extraction through an external encoder.

use crate::error::{Error, Result};
use crate::process::run_command;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Extracts and re-encodes the audio track of a downloaded file.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Encodes `input` into an audio file at `output`, overwriting any
    /// existing file of that name.
    async fn encode(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Transcoder that invokes an `ffmpeg` binary.
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    executable: PathBuf,
}

impl FfmpegTranscoder {
    /// Creates a transcoder invoking the given `ffmpeg` binary.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn encode(&self, input: &Path, output: &Path) -> Result<()> {
        // -q:a 0 asks for the encoder's best VBR audio quality, -map a drops
        // any video track, -y overwrites an existing output file.
        let args = vec![
            "-i".to_string(),
            input.to_string_lossy().into_owned(),
            "-q:a".to_string(),
            "0".to_string(),
            "-map".to_string(),
            "a".to_string(),
            output.to_string_lossy().into_owned(),
            "-y".to_string(),
        ];

        run_command(&self.executable, &args)
            .await
            .map_err(|e| Error::Transcode(e.to_string()))?;

        Ok(())
    }
}
