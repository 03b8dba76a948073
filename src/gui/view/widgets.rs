//! Reusable small widgets/helpers used across view modules.

use iced::widget::{container, mouse_area, row, text};
use iced::{Alignment, Element, Length};

use super::super::state::Message;
use super::constants::{ROW_H, ROW_HPAD, ROW_TEXT, ROW_VPAD};

pub(crate) fn cover_placeholder(size: f32) -> iced::widget::Container<'static, Message> {
    container(text("no cover").size(12))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
}

/// If `handle` exists, show it; otherwise show the placeholder.
pub(crate) fn cover_thumb(
    handle: Option<&iced::widget::image::Handle>,
    size: f32,
) -> Element<'static, Message> {
    match handle {
        Some(h) => container(iced::widget::image(h.clone()))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        None => cover_placeholder(size).into(),
    }
}

/// Clickable list row. Selected rows get a ● marker.
pub(crate) fn list_row<'a>(label: String, selected: bool, on_press: Message) -> Element<'a, Message> {
    let marker = if selected { "●" } else { "" };

    let cells = row![
        text(marker).size(ROW_TEXT).width(Length::Fixed(18.0)),
        text(label).size(ROW_TEXT).width(Length::Fill),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    mouse_area(
        container(cells)
            .padding([ROW_VPAD, ROW_HPAD])
            .height(Length::Fixed(ROW_H))
            .width(Length::Fill),
    )
    .on_press(on_press)
    .into()
}
