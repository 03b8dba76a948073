//! core/tags/read.rs
//! Read the tag fields the orderer needs into a typed `TrackMetadata`.
//!
//! - ID3v2 first, ID3v1 as fallback (`id3::v1v2`)
//! - TRCK ("tracknumber") and TPOS ("discnumber") must be `"<index>/<count>"`
//! - No tag at all is not an error here: the fields are simply `None` and the orderer reports them

use std::path::Path;

use id3::frame::Content;
use id3::{ErrorKind, Tag, TagLike};
use log::warn;

use super::super::types::TrackMetadata;
use super::util::{clean_text, parse_position};

/// Read disc/track/album for one file.
///
/// Only I/O failures are errors. A damaged tag falls back to whatever id3 could parse.
pub fn read_metadata(path: &Path) -> Result<TrackMetadata, id3::Error> {
    let tag = match id3::v1v2::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => return Ok(TrackMetadata::default()),
        Err(e) if matches!(e.kind, ErrorKind::Io(_)) => return Err(e),
        Err(e) => {
            warn!("{}: damaged tag ({e}), using what could be read", path.display());
            match e.partial_tag {
                Some(tag) => tag,
                None => return Ok(TrackMetadata::default()),
            }
        }
    };

    Ok(metadata_from_tag(&tag))
}

pub(crate) fn metadata_from_tag(tag: &Tag) -> TrackMetadata {
    TrackMetadata {
        track: parse_position(text_frame(tag, "TRCK").as_deref()),
        disc: parse_position(text_frame(tag, "TPOS").as_deref()),
        album: clean_text(tag.album()),
    }
}

/// Raw text of a frame, if it is a text frame.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Position;

    #[test]
    fn reads_slash_pairs_and_album() {
        let mut tag = Tag::new();
        tag.set_text("TRCK", "2/9");
        tag.set_text("TPOS", "1/2");
        tag.set_album("Dune");

        let meta = metadata_from_tag(&tag);
        assert_eq!(meta.track, Some(Position { index: 2, count: 9 }));
        assert_eq!(meta.disc, Some(Position { index: 1, count: 2 }));
        assert_eq!(meta.album.as_deref(), Some("Dune"));
    }

    #[test]
    fn bare_numbers_are_not_enough() {
        let mut tag = Tag::new();
        tag.set_text("TRCK", "2");

        let meta = metadata_from_tag(&tag);
        assert_eq!(meta.track, None);
        assert_eq!(meta.disc, None);
        assert_eq!(meta.album, None);
    }

    #[test]
    fn file_without_tag_has_empty_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.mp3");
        std::fs::write(&path, [0xFFu8; 512]).unwrap();

        assert_eq!(read_metadata(&path).unwrap(), TrackMetadata::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_metadata(&dir.path().join("nope.mp3")).is_err());
    }
}
