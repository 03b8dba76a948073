//! gui/update/inputs.rs
//! Button panel: turn the file panel selection into book inputs (mp3s + cover),
//! and keep the input panel's lengths and cover preview in sync.

use iced::Task;
use iced::widget::image;
use std::path::{Path, PathBuf};

use super::super::state::{Fuzer, InputFile, Message};
use super::util::spawn_blocking;
use crate::core::duration::probe_duration_ms;
use crate::core::library::sorted_mp3s;
use crate::core::tags::read_embedded_art;

pub(crate) fn use_cover(state: &mut Fuzer) -> Task<Message> {
    let Some(name) = state.selected_jpeg.clone() else {
        state.status = "Select a jpeg first.".into();
        return Task::none();
    };

    let path = state.current_dir.join(name);
    state.status = format!("Cover: {}", path.display());
    state.cover_file = Some(path);
    refresh_preview(state)
}

pub(crate) fn clear_cover(state: &mut Fuzer) -> Task<Message> {
    state.cover_file = None;
    refresh_preview(state)
}

pub(crate) fn use_mp3s(state: &mut Fuzer) -> Task<Message> {
    if state.building {
        return Task::none();
    }

    let names: Vec<String> = state.selected_mp3s.iter().cloned().collect();
    let paths = sorted_mp3s(&state.current_dir, &names);
    if paths.is_empty() {
        state.status = "Select mp3 files first.".into();
        return Task::none();
    }

    state.status = format!("{} mp3 files chosen", paths.len());
    state.input_files = paths
        .iter()
        .map(|p| InputFile {
            path: p.clone(),
            duration_ms: None,
        })
        .collect();

    let probe = Task::perform(
        spawn_blocking(move || {
            paths
                .into_iter()
                .map(|p| {
                    let ms = probe_duration_ms(&p);
                    (p, ms)
                })
                .collect::<Vec<_>>()
        }),
        |result| Message::DurationsLoaded(result.unwrap_or_default()),
    );

    Task::batch([probe, refresh_preview(state)])
}

pub(crate) fn clear_mp3s(state: &mut Fuzer) -> Task<Message> {
    if state.building {
        return Task::none();
    }
    state.input_files.clear();
    refresh_preview(state)
}

pub(crate) fn toggle_file_order(state: &mut Fuzer, v: bool) -> Task<Message> {
    state.in_file_order = v;
    Task::none()
}

pub(crate) fn title_changed(state: &mut Fuzer, s: String) -> Task<Message> {
    state.title_input = s;
    Task::none()
}

pub(crate) fn durations_loaded(
    state: &mut Fuzer,
    durations: Vec<(PathBuf, Option<u64>)>,
) -> Task<Message> {
    for (path, ms) in durations {
        if let Some(input) = state.input_files.iter_mut().find(|f| f.path == path) {
            input.duration_ms = ms;
        }
    }
    Task::none()
}

pub(crate) fn preview_loaded(
    state: &mut Fuzer,
    source: PathBuf,
    handle: Option<image::Handle>,
) -> Task<Message> {
    // A newer request superseded this one.
    if state.preview_source.as_ref() != Some(&source) {
        return Task::none();
    }
    state.cover_preview = handle;
    Task::none()
}

/// Preview the chosen cover, else the first input's embedded art.
fn refresh_preview(state: &mut Fuzer) -> Task<Message> {
    let source = preview_source(state);
    if source == state.preview_source && (source.is_none() || state.cover_preview.is_some()) {
        return Task::none();
    }

    state.preview_source = source.clone();
    state.cover_preview = None;

    let Some(path) = source else {
        return Task::none();
    };

    let from_cover = state.cover_file.is_some();
    let target = path.clone();
    Task::perform(
        spawn_blocking(move || load_preview(&target, from_cover)),
        move |handle| Message::PreviewLoaded(path, handle.ok().flatten()),
    )
}

fn preview_source(state: &Fuzer) -> Option<PathBuf> {
    state
        .cover_file
        .clone()
        .or_else(|| state.input_files.first().map(|f| f.path.clone()))
}

fn load_preview(path: &Path, from_cover: bool) -> Option<image::Handle> {
    let bytes = if from_cover {
        std::fs::read(path).ok()?
    } else {
        let (bytes, _mime) = read_embedded_art(path).ok()??;
        bytes
    };
    Some(image::Handle::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn state_in(dir: &Path) -> Fuzer {
        Fuzer::new(dir.to_path_buf()).0
    }

    #[test]
    fn use_mp3s_sorts_selection_into_inputs() {
        let dir = Path::new("/books/dune");
        let mut state = state_in(dir);
        for name in ["02.mp3", "01.mp3", "notes.txt"] {
            state.selected_mp3s.insert(name.into());
        }

        let _ = use_mp3s(&mut state);

        let paths: Vec<&Path> = state.input_files.iter().map(|f| f.path.as_path()).collect();
        assert_eq!(paths, [dir.join("01.mp3"), dir.join("02.mp3")]);
        assert_eq!(state.preview_source, Some(dir.join("01.mp3")));
    }

    #[test]
    fn empty_selection_leaves_inputs_alone() {
        let mut state = state_in(Path::new("/books"));
        state.input_files.push(InputFile {
            path: "/books/a.mp3".into(),
            duration_ms: Some(1),
        });

        let _ = use_mp3s(&mut state);
        assert_eq!(state.input_files.len(), 1);
        assert_eq!(state.status, "Select mp3 files first.");
    }

    #[test]
    fn cover_wins_over_embedded_art_until_cleared() {
        let dir = Path::new("/books/dune");
        let mut state = state_in(dir);
        state.selected_mp3s.insert("01.mp3".into());
        let _ = use_mp3s(&mut state);

        state.selected_jpeg = Some("front.jpg".into());
        let _ = use_cover(&mut state);
        assert_eq!(state.cover_file, Some(dir.join("front.jpg")));
        assert_eq!(state.preview_source, Some(dir.join("front.jpg")));

        let _ = clear_cover(&mut state);
        assert_eq!(state.cover_file, None);
        assert_eq!(state.preview_source, Some(dir.join("01.mp3")));

        let _ = clear_mp3s(&mut state);
        assert_eq!(state.preview_source, None);
    }

    #[test]
    fn stale_preview_is_ignored() {
        let mut state = state_in(Path::new("/books"));
        state.preview_source = Some("/books/new.jpg".into());

        let handle = image::Handle::from_bytes(vec![0xFF, 0xD8]);
        let _ = preview_loaded(&mut state, "/books/old.jpg".into(), Some(handle.clone()));
        assert!(state.cover_preview.is_none());

        let _ = preview_loaded(&mut state, "/books/new.jpg".into(), Some(handle));
        assert!(state.cover_preview.is_some());
    }

    #[test]
    fn durations_attach_to_matching_inputs() {
        let mut state = state_in(Path::new("/books"));
        for p in ["/books/a.mp3", "/books/b.mp3"] {
            state.input_files.push(InputFile {
                path: p.into(),
                duration_ms: None,
            });
        }

        let _ = durations_loaded(
            &mut state,
            vec![("/books/b.mp3".into(), Some(90_000)), ("/x.mp3".into(), Some(1))],
        );
        assert_eq!(state.input_files[0].duration_ms, None);
        assert_eq!(state.input_files[1].duration_ms, Some(90_000));
    }

    #[test]
    fn cover_preview_reads_the_jpeg_file() {
        let dir = tempfile::tempdir().unwrap();
        let cover = dir.path().join("front.jpg");
        fs::write(&cover, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        assert!(load_preview(&cover, true).is_some());
        assert!(load_preview(&dir.path().join("missing.jpg"), true).is_none());
    }
}
