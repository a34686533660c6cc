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

//! Input commands and control schemes.
//!
//! Input arrives as discrete, already debounced pulses. An [`InputFrame`]
//! gathers the pulses and pointer clicks seen between two ticks, and [`InputModeSwitch`] decides
//! whether gameplay or the UI is the authority for them.

mod mode;

pub use mode::{ControlScheme, GameplayScheme, InputModeSwitch, SimulationClock};

#[cfg(test)]
pub(crate) use mode::testing;

/// Simulation clock rate while a modal UI is open.
pub const PAUSED_RATE: f32 = 0.0;

/// Simulation clock rate during gameplay.
pub const RUNNING_RATE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCommand {
    ToggleMenu,
    Submit,
    Cancel,
    NavigateForward,
    NavigateBack,
    NavigateUp,
    NavigateDown,
}

impl InputCommand {
    /// Movement-class commands belong to whichever scheme is authoritative.
    /// The toggle always goes to the UI so that the menu can be reopened.
    pub fn is_movement_class(self) -> bool {
        !matches!(self, InputCommand::ToggleMenu)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Forward,
    Back,
}

impl NavDirection {
    pub fn command(self) -> InputCommand {
        match self {
            NavDirection::Up => InputCommand::NavigateUp,
            NavDirection::Down => InputCommand::NavigateDown,
            NavDirection::Forward => InputCommand::NavigateForward,
            NavDirection::Back => InputCommand::NavigateBack,
        }
    }
}

/// One entry of a tick's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameEvent {
    Command(InputCommand),
    /// A pointer click on a category button of the open sub-window.
    SelectCategory(usize),
}

impl From<InputCommand> for FrameEvent {
    fn from(command: InputCommand) -> Self {
        FrameEvent::Command(command)
    }
}

/// The input gathered for one tick, in arrival order.
///
/// An event fires at most once per tick no matter how often it was seen.
#[derive(Debug, Default)]
pub struct InputFrame {
    events: Vec<FrameEvent>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: InputCommand) {
        self.push_event(FrameEvent::Command(command));
    }

    pub fn select_category(&mut self, index: usize) {
        self.push_event(FrameEvent::SelectCategory(index));
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hands over the gathered events and starts an empty frame.
    pub fn take(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: FrameEvent) {
        if !self.events.contains(&event) {
            self.events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_keeps_arrival_order_and_drops_repeats() {
        let mut frame = InputFrame::new();
        frame.push(InputCommand::NavigateDown);
        frame.push(InputCommand::Submit);
        frame.push(InputCommand::NavigateDown);
        frame.push(InputCommand::NavigateDown);

        assert_eq!(
            frame.take(),
            vec![
                FrameEvent::Command(InputCommand::NavigateDown),
                FrameEvent::Command(InputCommand::Submit),
            ]
        );
        assert!(frame.is_empty());
    }

    #[test]
    fn clicks_keep_their_place_among_commands() {
        let mut frame = InputFrame::new();
        frame.push(InputCommand::NavigateDown);
        frame.select_category(2);
        frame.push(InputCommand::NavigateForward);
        frame.select_category(2);
        frame.select_category(0);

        assert_eq!(
            frame.take(),
            vec![
                FrameEvent::Command(InputCommand::NavigateDown),
                FrameEvent::SelectCategory(2),
                FrameEvent::Command(InputCommand::NavigateForward),
                FrameEvent::SelectCategory(0),
            ]
        );
    }

    #[test]
    fn only_the_toggle_bypasses_the_authoritative_scheme() {
        assert!(!InputCommand::ToggleMenu.is_movement_class());
        assert!(InputCommand::NavigateUp.is_movement_class());
        assert!(InputCommand::Cancel.is_movement_class());
    }

    #[test]
    fn directions_map_to_navigation_commands() {
        assert_eq!(NavDirection::Up.command(), InputCommand::NavigateUp);
        assert_eq!(NavDirection::Down.command(), InputCommand::NavigateDown);
        assert_eq!(NavDirection::Forward.command(), InputCommand::NavigateForward);
        assert_eq!(NavDirection::Back.command(), InputCommand::NavigateBack);
    }
}
