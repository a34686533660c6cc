// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application event handling.
//!
//! Key presses are only collected when they arrive. The menu controller sees
//! them on the next tick event, all at once and in arrival order, which is
//! what makes a tick the unit of input processing.
//!
//! # Organization
//!
//! * [`key_handlers`]: Maps keys to input commands.
//! * [`handlers`]: Handlers for the remaining application events.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Tick => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}
