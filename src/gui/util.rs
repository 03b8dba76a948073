//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use std::path::Path;

use super::state::InputFile;
use crate::core::duration::{fmt_duration, total_duration_ms};

/// File name for list rows, falling back to the full path.
/// Ex: '/books/01.mp3' -> '01.mp3'
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Turn a string into Option<String>.
/// - empty string -> None
/// - non-empty -> Some(trimmed_string)
pub(crate) fn clean_optional_string(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Input panel footer, e.g. "3 files, 1:02:03" or "3 files, 41:00 (+1 unknown)".
pub(crate) fn inputs_summary(inputs: &[InputFile]) -> String {
    let durations: Vec<Option<u64>> = inputs.iter().map(|f| f.duration_ms).collect();
    let (total, unknown) = total_duration_ms(&durations);

    let mut out = format!("{} files, {}", inputs.len(), fmt_duration(Some(total)));
    if unknown > 0 {
        out.push_str(&format!(" (+{unknown} unknown)"));
    }
    out
}
