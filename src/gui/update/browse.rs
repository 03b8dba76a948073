//! gui/update/browse.rs
//! Directory panel + file panel: moving around and picking files.

use iced::Task;
use std::path::{Path, PathBuf};

use super::super::state::{Fuzer, Message};
use super::util::spawn_blocking;
use crate::core::library::{DirListing, list_dir};

pub(crate) fn dir_input_changed(state: &mut Fuzer, s: String) -> Task<Message> {
    state.dir_input = s;
    Task::none()
}

pub(crate) fn dir_input_submitted(state: &mut Fuzer) -> Task<Message> {
    let input = state.dir_input.trim();
    if input.is_empty() {
        return Task::none();
    }

    if !Path::new(input).is_dir() {
        state.status = format!("Not a folder: {input}");
        return Task::none();
    }

    open_dir(PathBuf::from(input))
}

pub(crate) fn open_parent(state: &mut Fuzer) -> Task<Message> {
    match state.current_dir.parent() {
        Some(parent) => open_dir(parent.to_path_buf()),
        None => Task::none(),
    }
}

pub(crate) fn open_subdir(state: &mut Fuzer, name: String) -> Task<Message> {
    open_dir(state.current_dir.join(name))
}

/// List `dir` off-thread; `dir_listed` applies the result.
pub(crate) fn open_dir(dir: PathBuf) -> Task<Message> {
    let target = dir.clone();
    Task::perform(
        spawn_blocking(move || list_dir(&target)),
        move |result| Message::DirListed(dir, result.and_then(|r| r)),
    )
}

pub(crate) fn dir_listed(
    state: &mut Fuzer,
    dir: PathBuf,
    result: Result<DirListing, String>,
) -> Task<Message> {
    let listing = match result {
        Ok(l) => l,
        Err(e) => {
            let msg = format!("Cannot open folder: {e}");
            state.status = msg.clone();
            state.push_message(msg);
            return Task::none();
        }
    };

    if dir == state.current_dir {
        // Re-list of the same folder: keep whatever is still there.
        state
            .selected_mp3s
            .retain(|name| listing.mp3s.contains(name));
        if let Some(jpeg) = &state.selected_jpeg {
            if !listing.jpegs.contains(jpeg) {
                state.selected_jpeg = None;
            }
        }
    } else {
        state.selected_mp3s.clear();
        state.selected_jpeg = None;
    }

    state.status = format!(
        "{}: {} mp3, {} jpeg",
        dir.display(),
        listing.mp3s.len(),
        listing.jpegs.len()
    );
    state.dir_input = dir.display().to_string();
    state.current_dir = dir;
    state.listing = listing;
    Task::none()
}

pub(crate) fn toggle_mp3(state: &mut Fuzer, name: String) -> Task<Message> {
    if !state.selected_mp3s.remove(&name) {
        state.selected_mp3s.insert(name);
    }
    Task::none()
}

/// Single select: clicking the selected jpeg again deselects it.
pub(crate) fn select_jpeg(state: &mut Fuzer, name: String) -> Task<Message> {
    if state.selected_jpeg.as_ref() == Some(&name) {
        state.selected_jpeg = None;
    } else {
        state.selected_jpeg = Some(name);
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_in(dir: &Path) -> Fuzer {
        Fuzer::new(dir.to_path_buf()).0
    }

    fn listing(mp3s: &[&str], jpegs: &[&str]) -> DirListing {
        DirListing {
            dirs: Vec::new(),
            mp3s: mp3s.iter().map(|s| s.to_string()).collect(),
            jpegs: jpegs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn relisting_same_dir_keeps_surviving_selection() {
        let dir = PathBuf::from("/books/dune");
        let mut state = state_in(&dir);
        state.selected_mp3s.insert("01.mp3".into());
        state.selected_mp3s.insert("gone.mp3".into());
        state.selected_jpeg = Some("old.jpg".into());

        let _ = dir_listed(
            &mut state,
            dir.clone(),
            Ok(listing(&["01.mp3", "02.mp3"], &["cover.jpg"])),
        );

        assert_eq!(state.selected_mp3s.len(), 1);
        assert!(state.selected_mp3s.contains("01.mp3"));
        assert_eq!(state.selected_jpeg, None);
        assert_eq!(state.listing.mp3s.len(), 2);
    }

    #[test]
    fn changing_dir_clears_selection() {
        let mut state = state_in(Path::new("/books/dune"));
        state.selected_mp3s.insert("01.mp3".into());
        state.selected_jpeg = Some("cover.jpg".into());

        let other = PathBuf::from("/books/emma");
        let _ = dir_listed(&mut state, other.clone(), Ok(listing(&["01.mp3"], &[])));

        assert!(state.selected_mp3s.is_empty());
        assert_eq!(state.selected_jpeg, None);
        assert_eq!(state.current_dir, other);
        assert_eq!(state.dir_input, other.display().to_string());
    }

    #[test]
    fn failed_listing_keeps_current_dir() {
        let dir = PathBuf::from("/books/dune");
        let mut state = state_in(&dir);

        let _ = dir_listed(&mut state, PathBuf::from("/nope"), Err("denied".into()));

        assert_eq!(state.current_dir, dir);
        assert_eq!(state.messages, ["Cannot open folder: denied"]);
    }

    #[test]
    fn mp3s_toggle_and_jpeg_is_single_select() {
        let mut state = state_in(Path::new("/books"));

        let _ = toggle_mp3(&mut state, "a.mp3".into());
        let _ = toggle_mp3(&mut state, "b.mp3".into());
        let _ = toggle_mp3(&mut state, "a.mp3".into());
        assert_eq!(state.selected_mp3s.iter().collect::<Vec<_>>(), ["b.mp3"]);

        let _ = select_jpeg(&mut state, "x.jpg".into());
        let _ = select_jpeg(&mut state, "y.jpg".into());
        assert_eq!(state.selected_jpeg.as_deref(), Some("y.jpg"));
        let _ = select_jpeg(&mut state, "y.jpg".into());
        assert_eq!(state.selected_jpeg, None);
    }
}
