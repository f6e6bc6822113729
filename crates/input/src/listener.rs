//! Input listener: a blocking producer thread feeding the control loop.
//!
//! The listener owns the terminal event source and never touches game state.
//! It only pushes [`InputEvent`]s into a channel; the control loop is the
//! single writer of `GameState`.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Event delivered from the listener to the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    /// Terminal resized to `(columns, rows)`; the view must be redrawn.
    Resize(u16, u16),
}

/// Translate a raw terminal event. Key releases and repeats are ignored.
pub fn translate_event(ev: Event) -> Option<InputEvent> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(key).map(InputEvent::Action)
        }
        Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        _ => None,
    }
}

/// Pump events from `next_event` into `tx` until the source fails, a quit is
/// forwarded, or the receiver hangs up.
pub fn pump_events<F>(mut next_event: F, tx: &Sender<InputEvent>) -> Result<()>
where
    F: FnMut() -> std::io::Result<Event>,
{
    loop {
        let ev = next_event().context("failed to read terminal event")?;
        let Some(input) = translate_event(ev) else {
            continue;
        };
        if tx.send(input).is_err() {
            tracing::debug!("input receiver dropped, stopping listener");
            return Ok(());
        }
        if input == InputEvent::Action(GameAction::Quit) {
            return Ok(());
        }
    }
}

/// Spawn the listener thread reading from the real terminal.
pub fn spawn_listener(tx: Sender<InputEvent>) -> Result<JoinHandle<Result<()>>> {
    thread::Builder::new()
        .name("input".into())
        .spawn(move || {
            let result = pump_events(event::read, &tx);
            if let Err(e) = &result {
                tracing::error!(error = %e, "input listener stopped");
            }
            result
        })
        .context("failed to spawn input thread")
}
