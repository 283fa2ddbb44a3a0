//! Terminal rendering of the hero orb.
//!
//! Runs the same particle engine as the browser build, drawing into a
//! `ratatui` buffer where each terminal row covers two layout units so the
//! sphere keeps roughly its proportions.

mod glyph;
mod surface;
mod widget;

pub use surface::{CellSurface, Dot, ROW_UNITS};
pub use widget::TerminalOrb;
