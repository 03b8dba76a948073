//! core/tags/write.rs
//! Rewrite the merged book's tag after assembly.
//!
//! - Title: explicit override, else the album name
//! - TRCK/TPOS: reset to "1/1" (the book is one track on one disc)
//! - Cover: when given, replaces every embedded picture with one JPEG front cover

use std::path::Path;

use id3::frame::{Picture, PictureType};
use id3::{Tag, TagLike, Version};
use log::debug;

use super::super::types::Position;
use super::util::{clean_text, format_position};

const SINGLE: Position = Position { index: 1, count: 1 };

/// What to stamp onto the merged file.
#[derive(Debug, Clone, Default)]
pub struct BookTags {
    pub title: Option<String>,
    /// Raw JPEG bytes.
    pub cover: Option<Vec<u8>>,
}

/// Rewrite tags of the already-assembled book at `path`.
pub fn retag_book(path: &Path, book: &BookTags) -> Result<(), id3::Error> {
    // Load existing tag if possible; otherwise start fresh (ID3v1-only donors land here).
    let mut tag = Tag::read_from_path(path).unwrap_or_else(|_| Tag::new());

    let title = clean_text(book.title.as_deref()).or_else(|| clean_text(tag.album()));
    if let Some(title) = title {
        debug!("Book title: {title}");
        tag.set_title(title);
    }

    tag.set_text("TRCK", format_position(SINGLE));
    tag.set_text("TPOS", format_position(SINGLE));

    if let Some(data) = &book.cover {
        tag.remove_all_pictures();
        tag.add_frame(Picture {
            mime_type: "image/jpeg".to_string(),
            picture_type: PictureType::CoverFront,
            description: "Cover".to_string(),
            data: data.clone(),
        });
    }

    tag.write_to_path(path, Version::Id3v24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tags::read::read_metadata;
    use crate::core::tags::read_embedded_art;

    fn file_with_tag(dir: &Path, album: Option<&str>) -> std::path::PathBuf {
        let path = dir.join("book.mp3");
        std::fs::write(&path, [0xFFu8; 512]).unwrap();

        let mut tag = Tag::new();
        tag.set_title("Chapter 7");
        tag.set_text("TRCK", "7/20");
        tag.set_text("TPOS", "2/3");
        if let Some(album) = album {
            tag.set_album(album);
        }
        tag.write_to_path(&path, Version::Id3v24).unwrap();
        path
    }

    #[test]
    fn album_becomes_title_and_numbering_resets() {
        let dir = tempfile::tempdir().unwrap();
        let path = file_with_tag(dir.path(), Some("Dune"));

        retag_book(&path, &BookTags::default()).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.title(), Some("Dune"));

        let meta = read_metadata(&path).unwrap();
        assert_eq!(meta.track, Some(SINGLE));
        assert_eq!(meta.disc, Some(SINGLE));
    }

    #[test]
    fn override_title_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = file_with_tag(dir.path(), Some("Dune"));

        let book = BookTags {
            title: Some("Dune (Unabridged)".into()),
            cover: None,
        };
        retag_book(&path, &book).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.title(), Some("Dune (Unabridged)"));
    }

    #[test]
    fn cover_replaces_pictures() {
        let dir = tempfile::tempdir().unwrap();
        let path = file_with_tag(dir.path(), None);
        let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3, 0xFF, 0xD9];

        let book = BookTags {
            title: None,
            cover: Some(jpeg.clone()),
        };
        retag_book(&path, &book).unwrap();
        retag_book(&path, &book).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.pictures().count(), 1);
        // No album and no override: title untouched.
        assert_eq!(tag.title(), Some("Chapter 7"));

        let (data, mime) = read_embedded_art(&path).unwrap().unwrap();
        assert_eq!(data, jpeg);
        assert_eq!(mime, "image/jpeg");
    }
}
