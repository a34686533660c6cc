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

//! Keyboard input.
//!
//! Menu and movement keys become [`InputCommand`] pulses that wait in the
//! application's [`InputFrame`](echomenu::InputFrame) for the next tick. The
//! digit keys stand in for pointer clicks on category buttons and wait in the
//! same frame, so a tick sees keys and clicks in the order they arrived.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use echomenu::InputCommand;
use log::debug;

use crate::{App, events::AppEvent};

/// Maps keyboard input to application actions and menu commands.
///
/// # Errors
///
/// Returns an error if the exit event can't be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char(digit @ '1'..='9'), _) => {
            let index = digit as usize - '1' as usize;
            debug!("click on category {}", index);
            app.frame.select_category(index);
        }

        _ => {
            if let Some(command) = command_for(&key) {
                app.frame.push(command);
            }
        }
    }

    Ok(())
}

pub(super) fn command_for(key: &KeyEvent) -> Option<InputCommand> {
    let command = match (key.code, key.modifiers) {
        (KeyCode::Char('n'), _) => InputCommand::ToggleMenu,
        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => InputCommand::Submit,
        (KeyCode::Esc, _) => InputCommand::Cancel,
        (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => InputCommand::NavigateBack,
        (KeyCode::Tab, _) => InputCommand::NavigateForward,
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => InputCommand::NavigateUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => InputCommand::NavigateDown,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn menu_keys_map_to_commands() {
        let cases = [
            (key(KeyCode::Char('n'), KeyModifiers::NONE), InputCommand::ToggleMenu),
            (key(KeyCode::Enter, KeyModifiers::NONE), InputCommand::Submit),
            (key(KeyCode::Char(' '), KeyModifiers::NONE), InputCommand::Submit),
            (key(KeyCode::Esc, KeyModifiers::NONE), InputCommand::Cancel),
            (key(KeyCode::Tab, KeyModifiers::NONE), InputCommand::NavigateForward),
            (key(KeyCode::BackTab, KeyModifiers::SHIFT), InputCommand::NavigateBack),
            (key(KeyCode::Tab, KeyModifiers::SHIFT), InputCommand::NavigateBack),
            (key(KeyCode::Up, KeyModifiers::NONE), InputCommand::NavigateUp),
            (key(KeyCode::Down, KeyModifiers::NONE), InputCommand::NavigateDown),
        ];
        for (key, command) in cases {
            assert_eq!(command_for(&key), Some(command), "{:?}", key);
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(command_for(&key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(command_for(&key(KeyCode::Left, KeyModifiers::NONE)), None);
    }
}
