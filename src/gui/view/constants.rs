//! View constants (layout/sizing).

pub(crate) const NAVBAR_H: f32 = 48.0;

pub(crate) const FILES_W: f32 = 320.0;
pub(crate) const BUTTONS_W: f32 = 200.0;

pub(crate) const JPEG_LIST_H: f32 = 120.0;
pub(crate) const MESSAGES_H: f32 = 140.0;

// list sizing
pub(crate) const HEADER_TEXT: f32 = 16.0;
pub(crate) const ROW_TEXT: f32 = 14.0;
pub(crate) const SMALL_TEXT: f32 = 12.0;

pub(crate) const ROW_H: f32 = 24.0;
pub(crate) const ROW_VPAD: f32 = 2.0;
pub(crate) const ROW_HPAD: f32 = 8.0;
pub(crate) const LIST_SPACING: f32 = 1.0;

pub(crate) const COVER_BIG: f32 = 220.0;
