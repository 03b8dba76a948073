//! gui/update/build.rs
//! "Make book": run the core pipeline off-thread and mirror its progress.
//!
//! - The worker sends `BuildEvent`s over an mpsc channel.
//! - `TickBuild` (subscription) drains that channel into `status`.
//! - `BuildFinished` carries the final result.

use iced::Task;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use super::super::state::{Fuzer, Message};
use super::super::util::clean_optional_string;
use super::browse::open_dir;
use super::util::spawn_blocking;
use crate::core::book::default_output_path;
use crate::core::tags::read_metadata;
use crate::core::{BookRequest, BuildEvent, OrderMode, make_book};

pub(crate) fn make_book_pressed(state: &mut Fuzer) -> Task<Message> {
    if state.building {
        return Task::none();
    }
    if state.input_files.is_empty() {
        state.status = "Choose mp3 files first.".into();
        return Task::none();
    }

    let inputs: Vec<PathBuf> = state.input_files.iter().map(|f| f.path.clone()).collect();
    let dir = state.current_dir.clone();
    let cover = state.cover_file.clone();
    let title = clean_optional_string(&state.title_input);
    let mode = if state.in_file_order {
        OrderMode::InFileOrder
    } else {
        OrderMode::ByTags
    };

    let (tx, rx) = mpsc::channel::<BuildEvent>();
    state.build_events = Some(rx);
    state.building = true;
    state.status = "Making book...".into();
    state.push_message(format!("Making book from {} files", inputs.len()));

    Task::perform(
        spawn_blocking(move || {
            let name = title.clone().or_else(|| first_album(&inputs));
            let output = default_output_path(
                &dir,
                name.as_deref(),
                inputs.first().map(PathBuf::as_path),
            );
            let req = BookRequest {
                inputs,
                output,
                mode,
                cover,
                title,
            };
            make_book(&req, |ev| {
                let _ = tx.send(ev);
            })
            .map_err(|e| e.to_string())
        }),
        |result| Message::BuildFinished(result.and_then(|r| r)),
    )
}

pub(crate) fn drain_events(state: &mut Fuzer) -> Task<Message> {
    let Some(rx) = state.build_events.as_ref() else {
        return Task::none();
    };

    let drained: Vec<BuildEvent> = rx.try_iter().collect();
    for ev in drained {
        apply_event(state, ev);
    }
    Task::none()
}

pub(crate) fn build_finished(state: &mut Fuzer, result: Result<PathBuf, String>) -> Task<Message> {
    // Pick up whatever the worker sent after the last tick.
    let _ = drain_events(state);
    state.build_events = None;
    state.building = false;

    match result {
        Ok(path) => {
            state.status = format!("Done: {}", path.display());
            state.push_message(format!("Book written: {}", path.display()));
            open_dir(state.current_dir.clone())
        }
        Err(report) => {
            state.status = "Book not made, see messages.".into();
            for line in report.lines() {
                state.push_message(line);
            }
            state.messages_expanded = true;
            Task::none()
        }
    }
}

/// Every event updates the status line; the milestones also go to the messages panel.
fn apply_event(state: &mut Fuzer, ev: BuildEvent) {
    let line = ev.to_string();
    if matches!(ev, BuildEvent::Ordered { .. } | BuildEvent::Retagging) {
        state.push_message(line.clone());
    }
    state.status = line;
}

/// Album of the first input, used to name the output file.
fn first_album(inputs: &[PathBuf]) -> Option<String> {
    let first: &Path = inputs.first()?;
    read_metadata(first).ok()?.album
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::state::InputFile;
    use id3::{Tag, TagLike, Version};
    use std::fs;

    fn state_in(dir: &Path) -> Fuzer {
        Fuzer::new(dir.to_path_buf()).0
    }

    #[test]
    fn make_book_needs_inputs() {
        let mut state = state_in(Path::new("/books"));
        let _ = make_book_pressed(&mut state);

        assert!(!state.building);
        assert!(state.build_events.is_none());
        assert_eq!(state.status, "Choose mp3 files first.");
    }

    #[test]
    fn make_book_starts_once() {
        let mut state = state_in(Path::new("/books"));
        state.input_files.push(InputFile {
            path: "/books/a.mp3".into(),
            duration_ms: None,
        });

        let _ = make_book_pressed(&mut state);
        assert!(state.building);
        assert!(state.build_events.is_some());
        assert_eq!(state.messages, ["Making book from 1 files"]);

        let _ = make_book_pressed(&mut state);
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn drained_events_reach_status_and_messages() {
        let mut state = state_in(Path::new("/books"));
        let (tx, rx) = mpsc::channel();
        state.build_events = Some(rx);

        tx.send(BuildEvent::Ordered { tracks: 2 }).unwrap();
        tx.send(BuildEvent::Writing { index: 0, total: 2 }).unwrap();
        let _ = drain_events(&mut state);

        assert_eq!(state.status, "Writing 1/2");
        assert_eq!(state.messages, ["2 tracks in order"]);
    }

    #[test]
    fn failure_report_fills_messages_panel() {
        let mut state = state_in(Path::new("/books"));
        state.building = true;
        let (_tx, rx) = mpsc::channel();
        state.build_events = Some(rx);

        let _ = build_finished(
            &mut state,
            Err("a.mp3 missing track info\nDisc 1 - found 1 of 3 tracks".into()),
        );

        assert!(!state.building);
        assert!(state.build_events.is_none());
        assert!(state.messages_expanded);
        assert_eq!(
            state.messages,
            ["a.mp3 missing track info", "Disc 1 - found 1 of 3 tracks"]
        );
    }

    #[test]
    fn success_is_reported() {
        let mut state = state_in(Path::new("/books"));
        state.building = true;

        let _ = build_finished(&mut state, Ok("/books/Dune.mp3".into()));
        assert!(!state.building);
        assert_eq!(state.status, "Done: /books/Dune.mp3");
    }

    #[test]
    fn output_is_named_after_first_album() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("01.mp3");
        fs::write(&path, [0xFF; 64]).unwrap();
        let mut tag = Tag::new();
        tag.set_album("Emma");
        tag.write_to_path(&path, Version::Id3v24).unwrap();

        assert_eq!(first_album(&[path]).as_deref(), Some("Emma"));
        assert_eq!(first_album(&[]), None);
    }
}
