//! The models used to represent resolved videos, playlists and their streams.

use crate::error::{Error, Result};
use std::fmt;

/// A resolved video: its host identifier, display title and available streams.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    /// The ID of the video.
    pub id: String,
    /// The display title of the video, free text.
    pub title: String,
    /// The downloadable streams, in the resolver's listing order.
    pub streams: Vec<Stream>,
}

/// A single downloadable media stream of a video.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    /// Whether the stream is audio-only or muxed, with its quality metric.
    pub kind: StreamKind,
    /// The container tag, e.g. "webm" or "m4a", used to derive the file extension.
    pub container: String,
    /// The direct download URL.
    pub url: String,
}

/// The two stream shapes a video exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// An audio track only, ranked by bitrate in bits per second.
    AudioOnly {
        /// The audio bitrate in bits per second.
        bitrate: u64,
    },
    /// Combined audio and video, ranked by a coarse quality value.
    Muxed {
        /// The video quality rank, e.g. the frame height in pixels.
        quality: u32,
    },
}

/// A resolved playlist with its member video IDs in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// The ID of the playlist.
    pub id: String,
    /// The display title of the playlist.
    pub title: String,
    /// The member video IDs, in listing order.
    pub video_ids: Vec<String>,
}

/// Artist and title fields derived from a display title.
///
/// Derived, not authoritative: both fields may be empty when the title does
/// not follow the `<artist> - <title>` shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFields {
    pub artist: String,
    pub title: String,
}

impl Video {
    /// Picks the stream to download.
    ///
    /// If any audio-only stream exists, the one with the highest bitrate wins;
    /// otherwise the muxed stream with the highest quality rank wins. Ties go
    /// to the stream listed last. Audio-only is preferred so no video bytes
    /// are downloaded just to be thrown away by the encoder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoStream`] if the video has no streams of either kind.
    pub fn best_audio_stream(&self) -> Result<&Stream> {
        let best_audio = self
            .streams
            .iter()
            .filter_map(|stream| match stream.kind {
                StreamKind::AudioOnly { bitrate } => Some((bitrate, stream)),
                StreamKind::Muxed { .. } => None,
            })
            .max_by_key(|(bitrate, _)| *bitrate)
            .map(|(_, stream)| stream);

        if let Some(stream) = best_audio {
            return Ok(stream);
        }

        self.streams
            .iter()
            .filter_map(|stream| match stream.kind {
                StreamKind::Muxed { quality } => Some((quality, stream)),
                StreamKind::AudioOnly { .. } => None,
            })
            .max_by_key(|(quality, _)| *quality)
            .map(|(_, stream)| stream)
            .ok_or(Error::NoStream)
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Video(id = {}, title = \"{}\", streams = {})",
            self.id,
            self.title,
            self.streams.len()
        )
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Playlist(id = {}, title = \"{}\", videos = {})",
            self.id,
            self.title,
            self.video_ids.len()
        )
    }
}
