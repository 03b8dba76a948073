//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use iced::Task;
use iced::widget::image;

use crate::core::BuildEvent;
use crate::core::library::DirListing;

/// Light vs Dark, picked in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

/// One chosen MP3, plus its length once probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InputFile {
    pub path: PathBuf,
    pub duration_ms: Option<u64>,
}

/// App state
pub(crate) struct Fuzer {
    pub status: String,
    pub theme: ThemeChoice,

    // Messages panel
    pub messages: Vec<String>,
    pub messages_expanded: bool,

    // Directory panel
    pub current_dir: PathBuf,
    pub dir_input: String,
    pub listing: DirListing,

    // File panel (names inside current_dir)
    pub selected_mp3s: BTreeSet<String>,
    pub selected_jpeg: Option<String>,

    // Input panel
    pub input_files: Vec<InputFile>,
    pub cover_file: Option<PathBuf>,
    /// Path the preview was requested for; late results for other paths are dropped.
    pub preview_source: Option<PathBuf>,
    pub cover_preview: Option<image::Handle>,

    // Options
    pub in_file_order: bool,
    pub title_input: String,

    // Build
    pub building: bool,
    pub build_events: Option<Receiver<BuildEvent>>,
}

impl Fuzer {
    /// Fresh state rooted at `dir`, plus the task that lists it.
    pub(crate) fn new(dir: PathBuf) -> (Self, Task<Message>) {
        let state = Self {
            status: "Ready".to_string(),
            theme: ThemeChoice::default(),

            messages: Vec::new(),
            messages_expanded: false,

            dir_input: dir.display().to_string(),
            current_dir: dir.clone(),
            listing: DirListing::default(),

            selected_mp3s: BTreeSet::new(),
            selected_jpeg: None,

            input_files: Vec::new(),
            cover_file: None,
            preview_source: None,
            cover_preview: None,

            in_file_order: false,
            title_input: String::new(),

            building: false,
            build_events: None,
        };

        (state, Task::done(Message::OpenDir(dir)))
    }

    pub(crate) fn push_message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }
}

/// Messages = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Navbar
    SetTheme(ThemeChoice),

    // Directory panel
    DirInputChanged(String),
    DirInputSubmitted,
    OpenDir(PathBuf),
    OpenParent,
    OpenSubdir(String),
    DirListed(PathBuf, Result<DirListing, String>),

    // File panel
    ToggleMp3(String),
    SelectJpeg(String),

    // Buttons
    UseCover,
    ClearCover,
    UseMp3s,
    ClearMp3s,
    ToggleFileOrder(bool),
    TitleChanged(String),
    MakeBook,

    // Background results
    DurationsLoaded(Vec<(PathBuf, Option<u64>)>),
    PreviewLoaded(PathBuf, Option<image::Handle>),
    TickBuild,
    BuildFinished(Result<PathBuf, String>),

    // Messages panel
    ToggleMessages,
    ClearMessages,
}
