//! gui/subscription.rs
//! Poll build progress by emitting a periodic TickBuild message while a book is being made.

use iced::{Subscription, time};
use std::time::Duration;

use super::state::{Fuzer, Message};

pub(crate) fn subscription(state: &Fuzer) -> Subscription<Message> {
    if state.build_events.is_none() {
        return Subscription::none();
    }

    time::every(Duration::from_millis(150)).map(|_| Message::TickBuild)
}
