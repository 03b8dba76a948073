//! core/book.rs
//!
//! The full "make a book" pipeline around the core engine:
//!   (A) preflight: inputs exist, destination does not, cover is a JPEG
//!   (B) prepare: read every input + its tags -> `order()` -> `AssemblyPlan`
//!   (C) write: `assemble_with()` into a temp file next to the destination, retag it,
//!       then rename into place (no clobber)
//!
//! (B) and (C) are separate so the CLI can show the resolved order and ask before writing.
//!
//! Memory: every input stays in memory from (B) until (C) finishes writing. Fine for
//! audiobook-sized inputs; streaming payloads straight from the source files would lift
//! that ceiling.

use std::collections::HashMap;
use std::fmt;
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::assemble::assemble_with;
use super::error::{FuzerError, FuzerResult, Problems};
use super::library::is_jpeg;
use super::order::order;
use super::tags::{BookTags, load_cover, read_metadata, retag_book};
use super::types::{AssemblyPlan, OrderMode, RawTrack};

/// Everything needed to build one book.
#[derive(Debug, Clone)]
pub struct BookRequest {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub mode: OrderMode,
    pub cover: Option<PathBuf>,
    pub title: Option<String>,
}

/// Progress notifications, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    Reading {
        index: usize,
        total: usize,
        name: String,
    },
    Ordered {
        tracks: usize,
    },
    Writing {
        index: usize,
        total: usize,
    },
    Retagging,
    Finished {
        output: PathBuf,
    },
}

impl fmt::Display for BuildEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildEvent::Reading { index, total, name } => {
                write!(f, "Reading {}/{total}: {name}", index + 1)
            }
            BuildEvent::Ordered { tracks } => write!(f, "{tracks} tracks in order"),
            BuildEvent::Writing { index, total } => write!(f, "Writing {}/{total}", index + 1),
            BuildEvent::Retagging => f.write_str("Writing tags"),
            BuildEvent::Finished { output } => write!(f, "Done: {}", output.display()),
        }
    }
}

/// Validated plan plus the tags to stamp on the result.
#[derive(Debug)]
pub struct PreparedBook {
    pub output: PathBuf,
    pub plan: AssemblyPlan,
    pub tags: BookTags,
}

/// Read, tag-parse and order every input, then write the book. Returns the output path.
pub fn make_book(
    req: &BookRequest,
    mut on_event: impl FnMut(BuildEvent),
) -> FuzerResult<PathBuf> {
    let prepared = prepare(req, &mut on_event)?;
    write_book(prepared, &mut on_event)
}

/// Checks that need no file contents. All problems are reported together.
pub fn preflight(req: &BookRequest) -> FuzerResult<()> {
    if req.inputs.is_empty() {
        return Err(FuzerError::NoInputs);
    }

    let mut problems = Problems::new();
    for input in &req.inputs {
        if !input.is_file() {
            problems.push(format!("{} is not a file", input.display()));
        }
    }

    if let Some(cover) = &req.cover {
        if !is_jpeg(cover) {
            problems.push(FuzerError::NotAJpeg(cover.clone()).to_string());
        } else if !cover.is_file() {
            problems.push(format!("{} is not a file", cover.display()));
        }
    }

    let exists = req.output.exists();
    if exists && problems.is_empty() {
        return Err(FuzerError::DestinationExists(req.output.clone()));
    }
    if exists {
        problems.push(FuzerError::DestinationExists(req.output.clone()).to_string());
    }

    problems.into_result()
}

/// Stage (A) + (B). Nothing is written.
pub fn prepare(
    req: &BookRequest,
    mut on_event: impl FnMut(BuildEvent),
) -> FuzerResult<PreparedBook> {
    preflight(req)?;

    let cover = req.cover.as_deref().map(load_cover).transpose()?;

    let total = req.inputs.len();
    let mut raws = Vec::with_capacity(total);
    let mut albums: HashMap<String, String> = HashMap::new();

    for (index, path) in req.inputs.iter().enumerate() {
        let name = path.display().to_string();
        on_event(BuildEvent::Reading {
            index,
            total,
            name: name.clone(),
        });

        let data = std::fs::read(path)?;
        let metadata = read_metadata(path)?;
        debug!("{name}: {} bytes, {metadata:?}", data.len());

        if let Some(album) = &metadata.album {
            albums.insert(name.clone(), album.clone());
        }
        raws.push(RawTrack {
            source_name: name,
            data,
            metadata,
        });
    }

    let plan = order(raws, req.mode)?;
    on_event(BuildEvent::Ordered {
        tracks: plan.tracks().len(),
    });

    let title = req
        .title
        .clone()
        .or_else(|| albums.remove(&plan.donor().source_name));

    Ok(PreparedBook {
        output: req.output.clone(),
        plan,
        tags: BookTags { title, cover },
    })
}

/// Stage (C). The destination only appears once everything succeeded.
pub fn write_book(
    prepared: PreparedBook,
    mut on_event: impl FnMut(BuildEvent),
) -> FuzerResult<PathBuf> {
    let PreparedBook { output, plan, tags } = prepared;

    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".fuzer-")
        .suffix(".part")
        .tempfile_in(dir)?;

    info!(
        "Writing {} ({} bytes)...",
        output.display(),
        plan.output_len()
    );

    let total = plan.tracks().len();
    assemble_with(&plan, BufWriter::new(tmp.as_file_mut()), |index| {
        on_event(BuildEvent::Writing { index, total })
    })?;
    drop(plan);

    on_event(BuildEvent::Retagging);
    retag_book(tmp.path(), &tags)?;

    tmp.persist_noclobber(&output).map_err(|e| {
        if e.error.kind() == ErrorKind::AlreadyExists {
            FuzerError::DestinationExists(output.clone())
        } else {
            FuzerError::Io(e.error)
        }
    })?;

    info!("Done: {}", output.display());
    on_event(BuildEvent::Finished {
        output: output.clone(),
    });
    Ok(output)
}

/// `<dir>/<name>.mp3` where name is the title, else the album, else the first input's stem.
pub fn default_output_path(dir: &Path, name: Option<&str>, first_input: Option<&Path>) -> PathBuf {
    let stem = name
        .map(sanitize_file_name)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            first_input
                .and_then(|p| p.file_stem())
                .map(|s| sanitize_file_name(&s.to_string_lossy()))
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "book".to_string());

    dir.join(format!("{stem}.mp3"))
}

fn sanitize_file_name(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .trim_matches('.')
        .to_string()
}
