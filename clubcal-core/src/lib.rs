//! Core of clubcal: a month-view calendar for club events.
//!
//! - `parse` / `source` read the pipe-delimited events file
//! - `month` / `grid` lay a month out in Monday-first weeks
//! - `render` draws a grid onto any [`RenderTarget`], `html` is one such target
//! - `session` ties the loaded events to the displayed month

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod html;
pub mod icons;
pub mod month;
pub mod parse;
pub mod render;
pub mod session;
pub mod source;

pub use error::{ClubcalError, ClubcalResult};
pub use event::{Category, Event};
pub use render::{RenderOutcome, RenderTarget};
pub use session::{CalendarSession, Direction};
