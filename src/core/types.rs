//! Core data types shared between the splitter, the orderer, the assembler and the UI.
//!
//! Rule of thumb:
//! - These structs are plain data plus tiny accessors
//! - No GUI code
//! - No filesystem code
//! - No tag-library code
//!
//! Byte ownership: a `RawTrack` owns the whole file buffer. Splitting does not copy; the
//! resulting `TrackDescriptor` keeps the buffer and hands out tag/payload sub-slices.

use std::ops::Range;

use super::error::{FuzerError, MetadataField};

/// Length of an ID3v1 tag, always found in the last bytes of a file.
pub const LEGACY_TAG_LEN: usize = 128;

/// Length of the fixed ID3v2 header (marker, version, flags, size).
pub const VERSIONED_HEADER_LEN: usize = 10;

/// Where the tag lives in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// ID3v1: 128 bytes at the very end.
    LegacyTrailing,
    /// ID3v2: self-sized block at offset 0.
    VersionedLeading,
}

/// Tag region inside one file.
///
/// Invariants (enforced by `split::detect_tag_block`):
/// - `offset + length <= file length`
/// - `LegacyTrailing`: `offset == file_len - 128`, `length == 128`
/// - `VersionedLeading`: `offset == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagBlock {
    pub kind: TagKind,
    pub offset: usize,
    pub length: usize,
}

impl TagBlock {
    pub fn tag_range(&self) -> Range<usize> {
        self.offset..self.offset + self.length
    }

    /// Everything that is not tag: the audio payload.
    pub fn payload_range(&self, file_len: usize) -> Range<usize> {
        match self.kind {
            TagKind::VersionedLeading => self.length..file_len,
            TagKind::LegacyTrailing => 0..self.offset,
        }
    }
}

/// 1-based position inside a set, parsed from `"<index>/<count>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: u32,
    pub count: u32,
}

/// Typed view of the tag fields the orderer needs.
///
/// `None` means absent or unparsable; the tag reader never guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub track: Option<Position>,
    pub disc: Option<Position>,
    pub album: Option<String>,
}

impl TrackMetadata {
    /// Required-field check: both disc and track must be present.
    ///
    /// Returns every missing field, not just the first, so callers can batch them.
    pub fn require(&self, name: &str) -> Result<(Position, Position), Vec<FuzerError>> {
        match (self.disc, self.track) {
            (Some(disc), Some(track)) => Ok((disc, track)),
            (disc, track) => {
                let missing = |field| FuzerError::MetadataFieldMissing {
                    name: name.to_string(),
                    field,
                };
                let mut errs = Vec::new();
                if disc.is_none() {
                    errs.push(missing(MetadataField::Disc));
                }
                if track.is_none() {
                    errs.push(missing(MetadataField::Track));
                }
                Err(errs)
            }
        }
    }
}

/// How the orderer should sequence its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderMode {
    /// Sort by (disc, track) tags and validate completeness.
    #[default]
    ByTags,
    /// Keep input order, ignore tag metadata entirely.
    InFileOrder,
}

/// One input file, read into memory, not yet split.
#[derive(Debug, Clone)]
pub struct RawTrack {
    pub source_name: String,
    pub data: Vec<u8>,
    pub metadata: TrackMetadata,
}

/// One resolved input: numbering plus its split bytes.
///
/// Invariant (checked by `order`): `1 <= disc_index <= disc_count`,
/// `1 <= track_index <= track_count`.
#[derive(Debug, Clone)]
pub struct TrackDescriptor {
    /// Position in the caller's input list, so front ends can map back to the real path.
    pub input_index: usize,
    pub disc_index: u32,
    pub disc_count: u32,
    pub track_index: u32,
    pub track_count: u32,
    pub source_name: String,
    pub(crate) data: Vec<u8>,
    pub(crate) tag: TagBlock,
}

impl TrackDescriptor {
    pub fn payload(&self) -> &[u8] {
        &self.data[self.tag.payload_range(self.data.len())]
    }

    pub fn tag_kind(&self) -> TagKind {
        self.tag.kind
    }

    pub fn tag_bytes(&self) -> &[u8] {
        &self.data[self.tag.tag_range()]
    }
}

/// Validated, ordered output recipe. The first track donates its tag bytes.
#[derive(Debug)]
pub struct AssemblyPlan {
    tracks: Vec<TrackDescriptor>,
}

impl AssemblyPlan {
    /// `tracks` must be non-empty and already in final order.
    pub(crate) fn new(tracks: Vec<TrackDescriptor>) -> Self {
        debug_assert!(!tracks.is_empty());
        Self { tracks }
    }

    pub fn tracks(&self) -> &[TrackDescriptor] {
        &self.tracks
    }

    pub fn donor(&self) -> &TrackDescriptor {
        &self.tracks[0]
    }

    pub fn payloads(&self) -> impl Iterator<Item = &[u8]> {
        self.tracks.iter().map(TrackDescriptor::payload)
    }

    /// Bytes the assembler will write in total.
    pub fn output_len(&self) -> usize {
        self.donor().tag_bytes().len() + self.payloads().map(<[u8]>::len).sum::<usize>()
    }
}
