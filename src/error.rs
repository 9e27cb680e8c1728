//! The errors that can occur.

use thiserror::Error;

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The possible errors that can occur.
#[derive(Debug, Error)]
pub enum Error {
    /// An error occurred while interacting with the file system.
    #[error("An IO error occurred: {0}")]
    Io(#[from] std::io::Error),
    /// An error occurred while downloading a stream.
    #[error("An error occurred while downloading: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// An error occurred while parsing resolver output.
    #[error("An error occurred while parsing JSON: {0}")]
    Serde(#[from] serde_json::Error),
    /// An error occurred while reading or writing tags.
    #[error("An error occurred while writing tags: {0}")]
    Tag(#[from] lofty::error::LoftyError),

    /// The input matched neither an ID nor a URL shape.
    #[error("Unrecognized URL or ID: [{0}]")]
    UnrecognizedInput(String),
    /// The resolver could not return data for an ID.
    #[error("Failed to resolve [{0}]: {1}")]
    Resolve(String, String),
    /// A video exposes neither audio-only nor muxed streams.
    #[error("No applicable media streams found for this video")]
    NoStream,
    /// An external command could not be run or exited with a failure status.
    #[error("Failed to execute command: {0}")]
    Command(String),
    /// The external encoder failed.
    #[error("Transcoding failed: {0}")]
    Transcode(String),
}
