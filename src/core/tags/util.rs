//! core/tags/util.rs
//! Small parsing helpers shared by tag reading/writing.

use super::super::types::Position;

/// Strict `"<index>/<count>"` parse for TRCK/TPOS values.
///
/// - "3/12" -> Some(3 of 12)
/// - " 3 / 12 " -> Some(3 of 12)
/// - "3", "3/", "a/b", "0/4", "5/4", "1/2/3" -> None
pub(crate) fn parse_position(s: Option<&str>) -> Option<Position> {
    let s = s?.trim();

    let (index, count) = s.split_once('/')?;
    let index = index.trim().parse::<u32>().ok()?;
    let count = count.trim().parse::<u32>().ok()?;

    (index >= 1 && index <= count).then_some(Position { index, count })
}

/// Format a position back into the tag text form.
pub(crate) fn format_position(p: Position) -> String {
    format!("{}/{}", p.index, p.count)
}

/// Turn a tag string into Option<String>.
/// - empty/whitespace -> None
/// - otherwise -> Some(trimmed)
pub(crate) fn clean_text(s: Option<&str>) -> Option<String> {
    let trimmed = s?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
