//! Top bar: brand, status line, theme switch.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Length};

use super::super::state::{Fuzer, Message, ThemeChoice};
use super::constants::SMALL_TEXT;

pub(crate) fn build_navbar(state: &Fuzer) -> iced::widget::Container<'_, Message> {
    let theme_btn = |choice: ThemeChoice, label: &'static str| {
        if state.theme == choice {
            button(text(format!("✓ {label}")))
        } else {
            button(label).on_press(Message::SetTheme(choice))
        }
    };

    let brand = column![
        text("Fuzer").size(22),
        text(&state.status).size(SMALL_TEXT),
    ]
    .spacing(2)
    .width(Length::Fill);

    let bar = row![
        brand,
        theme_btn(ThemeChoice::Light, "Light"),
        theme_btn(ThemeChoice::Dark, "Dark"),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(bar).padding([4, 12])
}
