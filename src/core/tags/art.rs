use std::path::Path;

use id3::Tag;
use id3::frame::Content;

use super::super::error::{FuzerError, FuzerResult};
use super::super::library::is_jpeg;

/// JPEG start-of-image marker.
const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// Returns (image_bytes, mime) for the first embedded picture (APIC/PIC).
pub fn read_embedded_art(path: &Path) -> Result<Option<(Vec<u8>, String)>, String> {
    let tag = match Tag::read_from_path(path) {
        Ok(t) => t,
        Err(_) => return Ok(None),
    };

    for f in tag.frames() {
        if f.id() != "APIC" && f.id() != "PIC" {
            continue;
        }
        if let Content::Picture(p) = f.content() {
            return Ok(Some((p.data.clone(), p.mime_type.clone())));
        }
    }

    Ok(None)
}

/// Load a cover image for embedding. Only JPEG is accepted (by extension and by magic bytes).
pub fn load_cover(path: &Path) -> FuzerResult<Vec<u8>> {
    if !is_jpeg(path) {
        return Err(FuzerError::NotAJpeg(path.to_path_buf()));
    }

    let data = std::fs::read(path)?;
    if !data.starts_with(&JPEG_SOI) {
        return Err(FuzerError::NotAJpeg(path.to_path_buf()));
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_cover_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cover.JPG");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10]).unwrap();

        assert_eq!(load_cover(&path).unwrap().len(), 6);
    }

    #[test]
    fn non_jpeg_is_refused() {
        let dir = tempfile::tempdir().unwrap();

        let png = dir.path().join("cover.png");
        std::fs::write(&png, [0x89, b'P', b'N', b'G']).unwrap();
        assert!(matches!(load_cover(&png), Err(FuzerError::NotAJpeg(_))));

        let fake = dir.path().join("cover.jpg");
        std::fs::write(&fake, b"not an image").unwrap();
        assert!(matches!(load_cover(&fake), Err(FuzerError::NotAJpeg(_))));
    }

    #[test]
    fn untagged_file_has_no_art() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.mp3");
        std::fs::write(&path, [0u8; 256]).unwrap();

        assert_eq!(read_embedded_art(&path).unwrap(), None);
    }
}
