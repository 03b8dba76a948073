//! core/mod.rs
//!
//! The brain of the app, with no UI code:
//! - split: find the tag block of one MP3 buffer
//! - order: validate and sequence tracks by (disc, track)
//! - assemble: write the ordered payloads plus the donor tag
//! - tags: id3-backed metadata reader / book retagger (collaborator)
//! - book: the end-to-end pipeline both front ends call
//!
//! Pipeline:
//!   (A) preflight -> (B) read + `order()` -> (C) `assemble_with()` + retag + rename
//!
//! The front ends call `book::*` for the work itself; `library`, `duration` and `tags` only
//! feed the GUI's browser and preview panels.

pub mod assemble;
pub mod book;
pub mod duration;
pub mod error;
pub mod library;
pub mod order;
pub mod split;
pub mod tags;
pub mod types;

pub use book::{BookRequest, BuildEvent, make_book, prepare, write_book};
pub use types::OrderMode;
