//! Blind raises over the course of a game.
//!
//! - [`Schedule`] — the eleven alerts for a given player count
//! - [`Blinds`] — timer task delivering a schedule to a [`Sink`]
//! - [`Sink`] — anywhere an announcement can be written
mod alert;
mod schedule;
mod sink;
mod timer;

pub use alert::*;
pub use schedule::*;
pub use sink::*;
pub use timer::*;
