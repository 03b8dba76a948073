//! core/error.rs
//! One error enum for the whole core, plus the batched `Problems` report.

use std::fmt;
use std::path::PathBuf;
use std::result;

use thiserror::Error;

/// Which required tag field was absent or unparsable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Disc,
    Track,
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataField::Disc => f.write_str("disc"),
            MetadataField::Track => f.write_str("track"),
        }
    }
}

/// Ordered list of human-readable problems, reported together.
///
/// Displayed newline-joined so a user can fix every issue in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problems(Vec<String>);

impl Problems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, problem: impl Into<String>) {
        self.0.push(problem.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded, otherwise a `Validation` error carrying the batch.
    pub fn into_result(self) -> FuzerResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(FuzerError::Validation(self))
        }
    }
}

impl fmt::Display for Problems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("\n"))
    }
}

#[derive(Error, Debug)]
pub enum FuzerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tag(#[from] id3::Error),

    #[error("{name}: no ID3 tag at the start and no ID3v1 tag at the end")]
    UnrecognizedTagFormat { name: String },

    #[error("tag size field needs 4 bytes, got {0}")]
    MalformedSizeField(usize),

    #[error("tag claims {size} bytes but the file is only {len} bytes long")]
    TagOverrunsFile { size: usize, len: usize },

    #[error("{name} missing {field} info")]
    MetadataFieldMissing { name: String, field: MetadataField },

    #[error("{0}")]
    Validation(Problems),

    #[error("failed writing output: {0}")]
    WriteFailure(#[source] std::io::Error),

    #[error("{} already exists", .0.display())]
    DestinationExists(PathBuf),

    #[error("no input files")]
    NoInputs,

    #[error("only jpeg files supported: {}", .0.display())]
    NotAJpeg(PathBuf),
}

pub type FuzerResult<T> = result::Result<T, FuzerError>;
