//! Resolves video and playlist IDs or URLs, downloads the best audio stream
//! of each video, transcodes it to mp3 through an external encoder and writes
//! artist/title tags parsed from the video title.

use crate::downloader::StreamDownloader;
use crate::error::{Error, Result};
use crate::pipeline::Pipeline;
use crate::resolver::Resolver;
use crate::tags::TagWriter;
use crate::transcoder::Transcoder;
use regex::Regex;

pub mod downloader;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod process;
pub mod resolver;
pub mod tags;
pub mod transcoder;

/// How a single command line argument was understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A single video, by extracted ID.
    Video(String),
    /// A playlist, by extracted ID.
    Playlist(String),
}

/// A bare video ID: exactly eleven ID characters.
const VIDEO_ID_PATTERN: &str = r"^[A-Za-z0-9_-]{11}$";

/// A bare playlist ID: a known prefix followed by ID characters, or the
/// "watch later" list. The minimum length keeps eleven-character video IDs
/// from ever matching.
const PLAYLIST_ID_PATTERN: &str = r"^(?:WL|(?:PL|RD|UL|UU|PU|OL|LL|FL)[A-Za-z0-9_-]{10,42})$";

const PLAYLIST_URL_PATTERNS: [&str; 1] = [r"[?&]list=([A-Za-z0-9_-]{2,})"];

const VIDEO_URL_PATTERNS: [&str; 4] = [
    r"[?&]v=([A-Za-z0-9_-]{11})",
    r"youtu\.be/([A-Za-z0-9_-]{11})",
    r"/embed/([A-Za-z0-9_-]{11})",
    r"/shorts/([A-Za-z0-9_-]{11})",
];

/// Classifies one command line argument as a video or playlist reference.
///
/// Checks run in a fixed order, first match wins: bare playlist ID, playlist
/// URL, bare video ID, video URL. Bare IDs are tried before URL extraction so
/// a raw ID is never misread as a malformed URL, and playlists are tried
/// before videos so a watch URL carrying a `list` parameter expands the whole
/// playlist.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedInput`] if none of the four shapes match.
pub fn classify_input(arg: &str) -> Result<Input> {
    let arg = arg.trim();

    if Regex::new(PLAYLIST_ID_PATTERN).unwrap().is_match(arg) {
        return Ok(Input::Playlist(arg.to_string()));
    }
    if let Some(id) = extract_id(&PLAYLIST_URL_PATTERNS, arg) {
        return Ok(Input::Playlist(id));
    }
    if Regex::new(VIDEO_ID_PATTERN).unwrap().is_match(arg) {
        return Ok(Input::Video(arg.to_string()));
    }
    if let Some(id) = extract_id(&VIDEO_URL_PATTERNS, arg) {
        return Ok(Input::Video(id));
    }

    Err(Error::UnrecognizedInput(arg.to_string()))
}

fn extract_id(patterns: &[&str], arg: &str) -> Option<String> {
    for pattern in patterns {
        let re = Regex::new(pattern).unwrap();
        if let Some(captures) = re.captures(arg) {
            return Some(captures[1].to_string());
        }
    }
    None
}

/// Classifies and processes every argument, in order.
///
/// Entries are separated by a blank line and `Done` is printed after the last
/// one. The first unrecognized argument or failed video aborts the whole run;
/// there is no per-video isolation.
///
/// # Errors
///
/// Propagates the first error from classification or the pipeline.
pub async fn run<R, D, T, W>(inputs: &[String], pipeline: &Pipeline<R, D, T, W>) -> Result<()>
where
    R: Resolver,
    D: StreamDownloader,
    T: Transcoder,
    W: TagWriter,
{
    for arg in inputs {
        match classify_input(arg)? {
            Input::Playlist(id) => pipeline.process_playlist(&id).await?,
            Input::Video(id) => {
                pipeline.process_video(&id).await?;
            }
        }
        println!();
    }

    println!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_video_id_is_a_video() {
        let input = classify_input("dQw4w9WgXcQ").unwrap();
        assert_eq!(input, Input::Video("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn bare_playlist_id_is_a_playlist() {
        let input = classify_input("PLFgquLnL59alCl_2TQvOiD5Vgm1hCaGSI").unwrap();
        assert_eq!(
            input,
            Input::Playlist("PLFgquLnL59alCl_2TQvOiD5Vgm1hCaGSI".to_string())
        );
    }

    #[test]
    fn watch_later_is_a_playlist() {
        assert_eq!(
            classify_input("WL").unwrap(),
            Input::Playlist("WL".to_string())
        );
    }

    #[test]
    fn watch_url_is_a_video() {
        let input = classify_input("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(input, Input::Video("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn short_url_is_a_video() {
        let input = classify_input("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(input, Input::Video("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn shorts_url_is_a_video() {
        let input = classify_input("https://www.youtube.com/shorts/dQw4w9WgXcQ").unwrap();
        assert_eq!(input, Input::Video("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn playlist_url_is_a_playlist() {
        let input = classify_input(
            "https://www.youtube.com/playlist?list=PLFgquLnL59alCl_2TQvOiD5Vgm1hCaGSI",
        )
        .unwrap();
        assert_eq!(
            input,
            Input::Playlist("PLFgquLnL59alCl_2TQvOiD5Vgm1hCaGSI".to_string())
        );
    }

    #[test]
    fn watch_url_with_list_parameter_expands_the_playlist() {
        let input = classify_input(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLFgquLnL59alCl_2TQvOiD5Vgm1hCaGSI",
        )
        .unwrap();
        assert_eq!(
            input,
            Input::Playlist("PLFgquLnL59alCl_2TQvOiD5Vgm1hCaGSI".to_string())
        );
    }

    #[test]
    fn eleven_character_id_with_playlist_prefix_is_still_a_video() {
        // "PL" plus nine characters is too short for a playlist ID.
        let input = classify_input("PLabcdefghi").unwrap();
        assert_eq!(input, Input::Video("PLabcdefghi".to_string()));
    }

    #[test]
    fn unrecognized_input_is_an_error() {
        let result = classify_input("not a url or id");
        assert!(matches!(result, Err(Error::UnrecognizedInput(_))));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let input = classify_input("  dQw4w9WgXcQ \n").unwrap();
        assert_eq!(input, Input::Video("dQw4w9WgXcQ".to_string()));
    }
}
