//! Left side: directory panel (where am I) + file panel (what to use).

use iced::widget::{Column, button, column, container, row, scrollable, text, text_input};
use iced::{Element, Length};

use super::super::state::{Fuzer, Message};
use super::constants::{HEADER_TEXT, JPEG_LIST_H, LIST_SPACING, ROW_TEXT};
use super::widgets::list_row;

pub(crate) fn build_files_panel(state: &Fuzer) -> iced::widget::Container<'_, Message> {
    let col = column![
        build_dir_panel(state),
        text("Cover (jpeg)").size(HEADER_TEXT),
        scrollable(jpeg_list(state)).height(Length::Fixed(JPEG_LIST_H)),
        text("Audio (mp3)").size(HEADER_TEXT),
        scrollable(mp3_list(state)).height(Length::Fill),
    ]
    .spacing(8);

    container(col).padding(8).height(Length::Fill)
}

fn build_dir_panel(state: &Fuzer) -> Column<'_, Message> {
    let dir_input = text_input("Folder path", &state.dir_input)
        .on_input(Message::DirInputChanged)
        .on_submit(Message::DirInputSubmitted)
        .width(Length::Fill);

    let go_btn = button("Go").on_press(Message::DirInputSubmitted);

    let up_btn = if state.current_dir.parent().is_some() {
        button("..").on_press(Message::OpenParent)
    } else {
        button("..")
    };

    let mut subdirs = column![].spacing(LIST_SPACING);
    for name in &state.listing.dirs {
        subdirs = subdirs.push(
            button(text(format!("{name}/")).size(ROW_TEXT))
                .style(button::text)
                .on_press(Message::OpenSubdir(name.clone())),
        );
    }

    column![
        row![up_btn, dir_input, go_btn].spacing(6),
        scrollable(subdirs).height(Length::Fixed(JPEG_LIST_H)),
    ]
    .spacing(6)
}

fn jpeg_list(state: &Fuzer) -> Element<'_, Message> {
    if state.listing.jpegs.is_empty() {
        return text("No jpeg files here").size(ROW_TEXT).into();
    }

    let mut col = column![].spacing(LIST_SPACING);
    for name in &state.listing.jpegs {
        let selected = state.selected_jpeg.as_ref() == Some(name);
        col = col.push(list_row(
            name.clone(),
            selected,
            Message::SelectJpeg(name.clone()),
        ));
    }
    col.into()
}

fn mp3_list(state: &Fuzer) -> Element<'_, Message> {
    if state.listing.mp3s.is_empty() {
        return text("No mp3 files here").size(ROW_TEXT).into();
    }

    let mut col = column![].spacing(LIST_SPACING);
    for name in &state.listing.mp3s {
        let selected = state.selected_mp3s.contains(name);
        col = col.push(list_row(
            name.clone(),
            selected,
            Message::ToggleMp3(name.clone()),
        ));
    }
    col.into()
}
