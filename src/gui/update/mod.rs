//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Fuzer, Message};

mod browse;
mod build;
mod inputs;
mod util;

pub(crate) fn update(state: &mut Fuzer, message: Message) -> Task<Message> {
    match message {
        Message::SetTheme(choice) => {
            state.theme = choice;
            Task::none()
        }

        // Directory panel
        Message::DirInputChanged(s) => browse::dir_input_changed(state, s),
        Message::DirInputSubmitted => browse::dir_input_submitted(state),
        Message::OpenDir(dir) => browse::open_dir(dir),
        Message::OpenParent => browse::open_parent(state),
        Message::OpenSubdir(name) => browse::open_subdir(state, name),
        Message::DirListed(dir, result) => browse::dir_listed(state, dir, result),

        // File panel
        Message::ToggleMp3(name) => browse::toggle_mp3(state, name),
        Message::SelectJpeg(name) => browse::select_jpeg(state, name),

        // Buttons
        Message::UseCover => inputs::use_cover(state),
        Message::ClearCover => inputs::clear_cover(state),
        Message::UseMp3s => inputs::use_mp3s(state),
        Message::ClearMp3s => inputs::clear_mp3s(state),
        Message::ToggleFileOrder(v) => inputs::toggle_file_order(state, v),
        Message::TitleChanged(s) => inputs::title_changed(state, s),
        Message::MakeBook => build::make_book_pressed(state),

        // Background results
        Message::DurationsLoaded(d) => inputs::durations_loaded(state, d),
        Message::PreviewLoaded(source, handle) => inputs::preview_loaded(state, source, handle),
        Message::TickBuild => build::drain_events(state),
        Message::BuildFinished(result) => build::build_finished(state, result),

        // Messages panel
        Message::ToggleMessages => {
            state.messages_expanded = !state.messages_expanded;
            Task::none()
        }
        Message::ClearMessages => {
            state.messages.clear();
            Task::none()
        }
    }
}
