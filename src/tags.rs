//! Title parsing and tag writing.

use crate::error::Result;
use crate::model::TagFields;
use lofty::{
    config::WriteOptions,
    file::{AudioFile, TaggedFileExt},
    read_from_path,
    tag::{Accessor, Tag},
};
use regex::Regex;
use std::path::Path;

/// Splits a display title of the shape `<artist> - <title>` into tag fields.
///
/// The split happens at the first hyphen, with whitespace trimmed from both
/// sides. Titles without a hyphen yield empty fields rather than an error;
/// the heuristic degrades, it never rejects a video.
pub fn parse_title(raw: &str) -> TagFields {
    let pattern = Regex::new(r"^(?P<artist>.*?)-(?P<title>.*?)$").unwrap();

    match pattern.captures(raw) {
        Some(captures) => TagFields {
            artist: captures["artist"].trim().to_string(),
            title: captures["title"].trim().to_string(),
        },
        None => TagFields::default(),
    }
}

/// Writes tag fields into an audio file in place.
pub trait TagWriter: Send + Sync {
    /// Sets the performer and title fields of the file at `path`.
    fn write(&self, path: &Path, tags: &TagFields) -> Result<()>;
}

/// Tag writer backed by lofty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagWriter;

impl TagWriter for LoftyTagWriter {
    fn write(&self, path: &Path, tags: &TagFields) -> Result<()> {
        let mut tagged_file = read_from_path(path)?;

        let tag = match tagged_file.primary_tag_mut() {
            Some(primary_tag) => primary_tag,
            None => {
                if let Some(first_tag) = tagged_file.first_tag_mut() {
                    first_tag
                } else {
                    let tag_type = tagged_file.primary_tag_type();

                    log::warn!("No tags found, creating a new tag of type `{tag_type:?}`");
                    tagged_file.insert_tag(Tag::new(tag_type));

                    tagged_file.primary_tag_mut().unwrap()
                }
            }
        };

        tag.set_artist(tags.artist.clone());
        tag.set_title(tags.title.clone());

        let write_options = WriteOptions::new().use_id3v23(true);
        tagged_file.save_to_path(path, write_options)?;

        Ok(())
    }
}
