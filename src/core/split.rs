//! core/split.rs
//! Find the tag block in a raw MP3 buffer so the audio payload can be isolated.
//!
//! Bit-exact format rules:
//! - `"ID3"` at offset 0: leading tag, region length = synchsafe(bytes[6..10])
//! - `"TAG"` at `len - 128`: trailing tag, exactly 128 bytes
//!
//! The leading check wins if a buffer somehow matches both.

use super::error::{FuzerError, FuzerResult};
use super::types::{LEGACY_TAG_LEN, TagBlock, TagKind, VERSIONED_HEADER_LEN};

const VERSIONED_MARKER: &[u8; 3] = b"ID3";
const LEGACY_MARKER: &[u8; 3] = b"TAG";

/// Decode a 4-byte synchsafe integer (7 significant bits per byte, big-endian).
///
/// `[0x00, 0x00, 0x02, 0x01]` -> 257. The high bit of each byte is ignored, so any input is
/// valid and the result is always below 2^28.
pub fn decode_synchsafe(bytes: &[u8]) -> FuzerResult<usize> {
    let Some(size) = bytes.get(..4) else {
        return Err(FuzerError::MalformedSizeField(bytes.len()));
    };

    Ok(size
        .iter()
        .fold(0usize, |acc, &b| (acc << 7) | usize::from(b & 0x7F)))
}

/// Locate the tag block of one file.
///
/// The decoded leading size is used directly as "bytes to skip from offset 0"; no header or
/// footer length is added on top.
pub fn detect_tag_block(name: &str, data: &[u8]) -> FuzerResult<TagBlock> {
    if data.starts_with(VERSIONED_MARKER) {
        let header = data
            .get(..VERSIONED_HEADER_LEN)
            .ok_or(FuzerError::MalformedSizeField(data.len().saturating_sub(6)))?;
        let size = decode_synchsafe(&header[6..])?;

        if size > data.len() {
            return Err(FuzerError::TagOverrunsFile {
                size,
                len: data.len(),
            });
        }

        return Ok(TagBlock {
            kind: TagKind::VersionedLeading,
            offset: 0,
            length: size,
        });
    }

    if let Some(offset) = data.len().checked_sub(LEGACY_TAG_LEN) {
        if data[offset..].starts_with(LEGACY_MARKER) {
            return Ok(TagBlock {
                kind: TagKind::LegacyTrailing,
                offset,
                length: LEGACY_TAG_LEN,
            });
        }
    }

    Err(FuzerError::UnrecognizedTagFormat {
        name: name.to_string(),
    })
}
