//! The per-video fetch-transcode-tag pipeline and playlist expansion.
//!
//! Each video goes through a strict sequence: resolve, select a stream,
//! download to the temp directory, transcode to mp3 in the output directory,
//! delete the intermediate, write tags. No step starts before the previous
//! one finished, and the first failing step is fatal for the run.

use crate::downloader::StreamDownloader;
use crate::error::Result;
use crate::resolver::Resolver;
use crate::tags::{self, TagWriter};
use crate::transcoder::Transcoder;
use std::fs;
use std::path::PathBuf;

const OUTPUT_EXTENSION: &str = "mp3";

/// Characters Windows refuses in file names; the superset is used everywhere
/// so the same title maps to the same file on every platform.
const ILLEGAL_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Strips every character that is illegal in a file name.
///
/// Sanitizing is idempotent: an already clean title comes back unchanged.
/// Two titles that sanitize to the same string collide and overwrite each
/// other, a known limitation.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !ILLEGAL_FILENAME_CHARS.contains(c) && !c.is_control())
        .collect()
}

/// Sequences download, transcode, cleanup and tagging for one video at a
/// time, with all collaborators passed in.
pub struct Pipeline<R, D, T, W> {
    resolver: R,
    downloader: D,
    transcoder: T,
    tag_writer: W,
    temp_dir: PathBuf,
    output_dir: PathBuf,
}

impl<R, D, T, W> Pipeline<R, D, T, W>
where
    R: Resolver,
    D: StreamDownloader,
    T: Transcoder,
    W: TagWriter,
{
    /// Creates a pipeline writing intermediates to `temp_dir` and tagged mp3
    /// files to `output_dir`. Both directories are created on first use.
    pub fn new(
        resolver: R,
        downloader: D,
        transcoder: T,
        tag_writer: W,
        temp_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            resolver,
            downloader,
            transcoder,
            tag_writer,
            temp_dir: temp_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Downloads, transcodes and tags a single video, returning the final
    /// output path.
    pub async fn process_video(&self, id: &str) -> Result<PathBuf> {
        println!("Working on video [{id}]...");

        let video = self.resolver.fetch_video(id).await?;
        println!("{}", video.title);
        let clean_title = sanitize_title(&video.title);

        let stream = video.best_audio_stream()?;

        println!("Downloading...");
        fs::create_dir_all(&self.temp_dir)?;
        let stream_path = self
            .temp_dir
            .join(format!("audio-{}.{}", video.id, stream.container));
        self.downloader.download(stream, &stream_path).await?;

        println!("Converting...");
        fs::create_dir_all(&self.output_dir)?;
        let out_path = self
            .output_dir
            .join(format!("{clean_title}.{OUTPUT_EXTENSION}"));
        self.transcoder.encode(&stream_path, &out_path).await?;

        // Best-effort: a leftover intermediate must not fail the run.
        println!("Deleting temp file...");
        if let Err(e) = fs::remove_file(&stream_path) {
            log::warn!(
                "Failed to remove temporary file {}: {}",
                stream_path.display(),
                e
            );
        }

        println!("Writing metadata...");
        let tag_fields = tags::parse_title(&video.title);
        self.tag_writer.write(&out_path, &tag_fields)?;

        println!(
            "Downloaded and converted video [{id}] to [{}]",
            out_path.display()
        );
        Ok(out_path)
    }

    /// Resolves a playlist and runs the pipeline over every member video, in
    /// listing order. The first failing video aborts the rest.
    pub async fn process_playlist(&self, id: &str) -> Result<()> {
        println!("Working on playlist [{id}]...");

        let playlist = self.resolver.fetch_playlist(id).await?;
        println!("{} ({} videos)", playlist.title, playlist.video_ids.len());

        println!();
        for video_id in &playlist.video_ids {
            self.process_video(video_id).await?;
            println!();
        }

        Ok(())
    }
}
