//! Bottom: collapsible messages panel (build progress + problem reports).

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Length};

use super::super::state::{Fuzer, Message};
use super::constants::{MESSAGES_H, ROW_TEXT};

pub(crate) fn build_messages_panel(state: &Fuzer) -> iced::widget::Container<'_, Message> {
    let arrow = if state.messages_expanded { "▾" } else { "▸" };
    let toggle = button(text(format!("{arrow} Messages ({})", state.messages.len())))
        .style(button::text)
        .on_press(Message::ToggleMessages);

    let clear = if state.messages.is_empty() {
        button("Clear")
    } else {
        button("Clear").on_press(Message::ClearMessages)
    };

    let header = row![toggle, clear].spacing(8).align_y(Alignment::Center);

    if !state.messages_expanded {
        return container(header);
    }

    let mut lines = column![].spacing(2);
    for m in &state.messages {
        lines = lines.push(text(m).size(ROW_TEXT));
    }

    container(
        column![
            header,
            scrollable(lines)
                .height(Length::Fixed(MESSAGES_H))
                .width(Length::Fill),
        ]
        .spacing(6),
    )
}
