//! GUI renderer (reads state, produces widgets; no mutation).

mod buttons;
mod constants;
mod files;
mod inputs;
mod messages;
mod navbar;
mod widgets;

use iced::Length;
use iced::widget::{Column, column, row};

use super::state::{Fuzer, Message};
use constants::{BUTTONS_W, FILES_W, NAVBAR_H};

pub(crate) fn view(state: &Fuzer) -> Column<'_, Message> {
    let navbar = navbar::build_navbar(state).height(Length::Fixed(NAVBAR_H));

    let files = files::build_files_panel(state).width(Length::Fixed(FILES_W));
    let actions = buttons::build_buttons_panel(state).width(Length::Fixed(BUTTONS_W));
    let book = inputs::build_inputs_panel(state).width(Length::Fill);

    let body = row![files, actions, book].spacing(12).height(Length::Fill);
    let messages = messages::build_messages_panel(state).width(Length::Fill);

    column![navbar, body, messages].spacing(12).padding(12)
}
