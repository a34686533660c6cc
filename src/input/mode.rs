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

//! Exclusive control scheme switching.
//!
//! Exactly one of gameplay or UI owns movement-class commands. The
//! simulation clock follows the same switch: it runs while gameplay is the
//! authority and is stopped otherwise. Both are changed in the same call so
//! no observer can see one without the other.

use log::debug;

use super::{InputCommand, PAUSED_RATE, RUNNING_RATE};

/// Collaborator owning the simulation time scale.
pub trait SimulationClock {
    fn set_rate(&mut self, rate: f32);
}

/// Collaborator owning the gameplay bindings.
pub trait GameplayScheme {
    fn enable(&mut self);
    fn disable(&mut self);

    /// Receives a movement-class command while gameplay is the authority.
    fn handle(&mut self, _command: InputCommand) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlScheme {
    Gameplay,
    Ui,
}

pub struct InputModeSwitch {
    clock: Box<dyn SimulationClock>,
    gameplay: Box<dyn GameplayScheme>,
    authority: ControlScheme,
    rate: f32,
    ui_enabled: bool,
}

impl InputModeSwitch {
    pub fn new(clock: Box<dyn SimulationClock>, gameplay: Box<dyn GameplayScheme>) -> Self {
        Self {
            clock,
            gameplay,
            authority: ControlScheme::Gameplay,
            rate: RUNNING_RATE,
            ui_enabled: false,
        }
    }

    /// Hands authority to the UI and stops the clock.
    pub fn enter_ui(&mut self) {
        if self.authority == ControlScheme::Ui {
            return;
        }
        self.apply(ControlScheme::Ui);
    }

    /// Hands authority back to gameplay and restarts the clock.
    pub fn enter_gameplay(&mut self) {
        if self.authority == ControlScheme::Gameplay {
            return;
        }
        self.apply(ControlScheme::Gameplay);
    }

    /// Pushes the current state to the collaborators even if nothing changed.
    ///
    /// Used when the owner (re)activates and can't trust what the
    /// collaborators last saw.
    pub fn sync(&mut self, scheme: ControlScheme) {
        self.apply(scheme);
    }

    /// Offers a command to gameplay. Returns `false` if the UI owns it.
    pub fn forward_to_gameplay(&mut self, command: InputCommand) -> bool {
        if self.authority != ControlScheme::Gameplay || !command.is_movement_class() {
            return false;
        }
        self.gameplay.handle(command);
        true
    }

    pub fn authority(&self) -> ControlScheme {
        self.authority
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn gameplay_enabled(&self) -> bool {
        self.authority == ControlScheme::Gameplay
    }

    /// The UI scheme stays on in every modal state so that the toggle can be
    /// received; it only goes off when the owner is deactivated.
    pub fn set_ui_enabled(&mut self, enabled: bool) {
        self.ui_enabled = enabled;
    }

    pub fn ui_enabled(&self) -> bool {
        self.ui_enabled
    }

    fn apply(&mut self, scheme: ControlScheme) {
        match scheme {
            ControlScheme::Ui => {
                self.rate = PAUSED_RATE;
                self.clock.set_rate(PAUSED_RATE);
                self.gameplay.disable();
            }
            ControlScheme::Gameplay => {
                self.rate = RUNNING_RATE;
                self.clock.set_rate(RUNNING_RATE);
                self.gameplay.enable();
            }
        }
        self.authority = scheme;
        debug!("control scheme {:?}, clock rate {}", scheme, self.rate);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{cell::RefCell, rc::Rc};

    use super::{GameplayScheme, SimulationClock};
    use crate::input::InputCommand;

    #[derive(Debug, Default)]
    pub(crate) struct WorldLog {
        pub(crate) rates: Vec<f32>,
        pub(crate) gameplay_enabled: Option<bool>,
        pub(crate) received: Vec<InputCommand>,
    }

    /// Clock and gameplay double sharing one log.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingWorld(pub(crate) Rc<RefCell<WorldLog>>);

    impl RecordingWorld {
        pub(crate) fn rate(&self) -> Option<f32> {
            self.0.borrow().rates.last().copied()
        }

        pub(crate) fn gameplay_enabled(&self) -> Option<bool> {
            self.0.borrow().gameplay_enabled
        }

        pub(crate) fn received(&self) -> Vec<InputCommand> {
            self.0.borrow().received.clone()
        }
    }

    impl SimulationClock for RecordingWorld {
        fn set_rate(&mut self, rate: f32) {
            self.0.borrow_mut().rates.push(rate);
        }
    }

    impl GameplayScheme for RecordingWorld {
        fn enable(&mut self) {
            self.0.borrow_mut().gameplay_enabled = Some(true);
        }

        fn disable(&mut self) {
            self.0.borrow_mut().gameplay_enabled = Some(false);
        }

        fn handle(&mut self, command: InputCommand) {
            self.0.borrow_mut().received.push(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{testing::RecordingWorld, *};

    fn switch() -> (InputModeSwitch, RecordingWorld) {
        let world = RecordingWorld::default();
        let switch = InputModeSwitch::new(Box::new(world.clone()), Box::new(world.clone()));
        (switch, world)
    }

    #[test]
    fn ui_authority_pauses_and_disables_gameplay() {
        let (mut switch, world) = switch();

        switch.enter_ui();

        assert_eq!(switch.authority(), ControlScheme::Ui);
        assert_eq!(switch.rate(), PAUSED_RATE);
        assert_eq!(world.rate(), Some(PAUSED_RATE));
        assert_eq!(world.gameplay_enabled(), Some(false));

        switch.enter_gameplay();

        assert_eq!(world.rate(), Some(RUNNING_RATE));
        assert_eq!(world.gameplay_enabled(), Some(true));
        assert!(switch.gameplay_enabled());
    }

    #[test]
    fn repeated_switches_do_not_touch_collaborators() {
        let (mut switch, world) = switch();
        switch.enter_ui();
        switch.enter_ui();
        assert_eq!(world.0.borrow().rates.len(), 1);

        switch.enter_gameplay();
        switch.enter_gameplay();
        assert_eq!(world.0.borrow().rates.len(), 2);
    }

    #[test]
    fn sync_always_reaches_collaborators() {
        let (mut switch, world) = switch();
        switch.sync(ControlScheme::Gameplay);
        assert_eq!(world.rate(), Some(RUNNING_RATE));
        assert_eq!(world.gameplay_enabled(), Some(true));
    }

    #[test]
    fn gameplay_only_receives_commands_while_authoritative() {
        let (mut switch, world) = switch();

        assert!(switch.forward_to_gameplay(InputCommand::NavigateUp));
        assert!(!switch.forward_to_gameplay(InputCommand::ToggleMenu));

        switch.enter_ui();
        assert!(!switch.forward_to_gameplay(InputCommand::NavigateDown));

        assert_eq!(world.received(), vec![InputCommand::NavigateUp]);
    }
}
