//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and runs the
//! blocking listener thread that hands them to the control loop over a channel.

pub mod listener;
pub mod map;

pub use tui_mines_types as types;

pub use listener::{pump_events, spawn_listener, translate_event, InputEvent};
pub use map::{handle_key_event, should_quit};
