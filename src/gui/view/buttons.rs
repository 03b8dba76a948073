//! Middle column: the actions.

use iced::Length;
use iced::widget::{button, checkbox, column, container, text, text_input};

use super::super::state::{Fuzer, Message};
use super::constants::{HEADER_TEXT, SMALL_TEXT};

pub(crate) fn build_buttons_panel(state: &Fuzer) -> iced::widget::Container<'_, Message> {
    // Everything is frozen while a book is being made.
    let idle = !state.building;

    let action = |label: &'static str, msg: Message, enabled: bool| {
        let b = button(text(label)).width(Length::Fill);
        if idle && enabled { b.on_press(msg) } else { b }
    };

    let has_inputs = !state.input_files.is_empty();

    let cover_btn = action("cover image", Message::UseCover, state.selected_jpeg.is_some());
    let clear_cover_btn = action(
        "clear cover image",
        Message::ClearCover,
        state.cover_file.is_some(),
    );
    let mp3_btn = action("mp3 files", Message::UseMp3s, !state.selected_mp3s.is_empty());
    let clear_mp3_btn = action("clear mp3 files", Message::ClearMp3s, has_inputs);

    let order_toggle = checkbox(state.in_file_order)
        .label("in file order")
        .on_toggle_maybe(idle.then_some(Message::ToggleFileOrder));

    let title = text_input("Title (default: album)", &state.title_input)
        .on_input_maybe(idle.then_some(Message::TitleChanged))
        .width(Length::Fill);

    let make_label = if state.building { "Making..." } else { "Make book" };
    let make_btn = action(make_label, Message::MakeBook, has_inputs);

    let col = column![
        text("Use selection").size(HEADER_TEXT),
        cover_btn,
        clear_cover_btn,
        mp3_btn,
        clear_mp3_btn,
        text("Options").size(HEADER_TEXT),
        order_toggle,
        text("Title").size(SMALL_TEXT),
        title,
        make_btn,
    ]
    .spacing(8);

    container(col).padding(8).height(Length::Fill)
}
