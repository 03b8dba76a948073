//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Fuzer')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (polling build progress)
//! - small UI helpers ('util')

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

use std::path::PathBuf;

use iced::Theme;

use state::{Fuzer, ThemeChoice};
use subscription::subscription;
use update::update;
use view::view;

/// Open the desktop app with the directory panel at `dir`.
pub(crate) fn run(dir: PathBuf) -> iced::Result {
    iced::application(move || Fuzer::new(dir.clone()), update, view)
        .title("Fuzer")
        .subscription(subscription)
        .theme(theme)
        .run()
}

fn theme(state: &Fuzer) -> Theme {
    match state.theme {
        ThemeChoice::Light => Theme::Light,
        ThemeChoice::Dark => Theme::Dark,
    }
}
