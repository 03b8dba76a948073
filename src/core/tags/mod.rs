//! core/tags/mod.rs
//!
//! ID3 tag collaborator: everything that goes through the `id3` crate.
//! Public API:
//! - [`read_metadata`] reads disc/track/album of one input into a typed [`TrackMetadata`].
//! - [`retag_book`] stamps title, `1/1` numbering and cover art onto the merged file.
//! - [`load_cover`] / [`read_embedded_art`] handle cover images.
//!
//! [`TrackMetadata`]: super::types::TrackMetadata

mod art;
mod read;
mod util;
mod write;

pub use art::{load_cover, read_embedded_art};
pub use read::read_metadata;
pub use write::{BookTags, retag_book};
