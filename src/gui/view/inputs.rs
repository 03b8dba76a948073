//! Right side: what the book will be made of.

use iced::widget::{column, container, row, scrollable, text};
use iced::{Alignment, Length};

use super::super::state::{Fuzer, Message};
use super::super::util::{file_name, inputs_summary};
use super::constants::{COVER_BIG, HEADER_TEXT, LIST_SPACING, ROW_TEXT, SMALL_TEXT};
use super::widgets::cover_thumb;
use crate::core::duration::fmt_duration;

pub(crate) fn build_inputs_panel(state: &Fuzer) -> iced::widget::Container<'_, Message> {
    let cover_label = match (&state.cover_file, state.input_files.first()) {
        (Some(cover), _) => file_name(cover),
        (None, Some(first)) => format!("art from {}", file_name(&first.path)),
        (None, None) => "no cover chosen".to_string(),
    };

    let cover = column![
        cover_thumb(state.cover_preview.as_ref(), COVER_BIG),
        text(cover_label).size(SMALL_TEXT),
    ]
    .spacing(4)
    .align_x(Alignment::Center);

    let mut list = column![].spacing(LIST_SPACING);
    for (i, f) in state.input_files.iter().enumerate() {
        list = list.push(
            row![
                text(format!("{}.", i + 1))
                    .size(ROW_TEXT)
                    .width(Length::Fixed(36.0)),
                text(file_name(&f.path)).size(ROW_TEXT).width(Length::Fill),
                text(fmt_duration(f.duration_ms))
                    .size(ROW_TEXT)
                    .width(Length::Fixed(70.0)),
            ]
            .spacing(8),
        );
    }

    let col = column![
        text("Book").size(HEADER_TEXT),
        cover,
        text("Files").size(HEADER_TEXT),
        scrollable(list).height(Length::Fill),
        text(inputs_summary(&state.input_files)).size(SMALL_TEXT),
    ]
    .spacing(8);

    container(col).padding(8).height(Length::Fill)
}
