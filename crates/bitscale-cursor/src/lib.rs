//! bitscale-cursor - Cursor glyph preparation
//!
//! Turns a table of compiled-in cursor glyphs into cursors, magnifying
//! each glyph by the configured factor first:
//!
//! - [`CursorConfig`] - scale preference and diagnostics toggle, read once
//!   from the environment
//! - [`CursorGlyph`] / [`CursorKind`] - static glyph data and the cursors
//!   the editor uses
//! - [`CursorSink`] - the windowing layer that turns a bitmap into a
//!   cursor handle
//! - [`prepare_cursors`] - one loop over the table; a glyph that cannot
//!   be scaled, or whose scaled bitmap the sink rejects, falls back to
//!   the unscaled glyph

pub mod config;
mod error;
pub mod glyph;
pub mod setup;

pub use config::CursorConfig;
pub use error::{CursorError, CursorResult};
pub use glyph::{CursorGlyph, CursorKind};
pub use setup::{CursorSink, PreparedCursor, prepare_cursor, prepare_cursors};
