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

//! A tiny first-person world standing in for the real game.
//!
//! The walker moves on a grid while gameplay owns the controls, and the
//! simulation time advances at whatever rate the menu last set.

use std::{cell::RefCell, rc::Rc};

use echomenu::{
    InputCommand,
    input::{GameplayScheme, SimulationClock},
};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    fn right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    fn left(self) -> Self {
        self.right().right().right()
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

#[derive(Debug)]
pub(crate) struct World {
    pub(crate) position: (i32, i32),
    pub(crate) heading: Heading,
    /// Simulated seconds.
    pub(crate) sim_time: f64,
    pub(crate) rate: f32,
    pub(crate) controls_enabled: bool,
    pub(crate) pings: u32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            position: (0, 0),
            heading: Heading::North,
            sim_time: 0.0,
            rate: 1.0,
            controls_enabled: true,
            pings: 0,
        }
    }
}

impl World {
    /// Advances simulated time by `seconds` of real time.
    pub(crate) fn advance(&mut self, seconds: f64) {
        self.sim_time += seconds * f64::from(self.rate);
    }

    fn apply(&mut self, command: InputCommand) {
        let (dx, dy) = self.heading.delta();
        match command {
            InputCommand::NavigateUp => self.position = (self.position.0 + dx, self.position.1 + dy),
            InputCommand::NavigateDown => self.position = (self.position.0 - dx, self.position.1 - dy),
            InputCommand::NavigateForward => self.heading = self.heading.right(),
            InputCommand::NavigateBack => self.heading = self.heading.left(),
            InputCommand::Submit => self.pings += 1,
            InputCommand::Cancel | InputCommand::ToggleMenu => {}
        }
    }
}

/// Shared handle the menu controller drives as both clock and controls.
#[derive(Clone, Default)]
pub(crate) struct SharedWorld(pub(crate) Rc<RefCell<World>>);

impl SimulationClock for SharedWorld {
    fn set_rate(&mut self, rate: f32) {
        self.0.borrow_mut().rate = rate;
    }
}

impl GameplayScheme for SharedWorld {
    fn enable(&mut self) {
        self.0.borrow_mut().controls_enabled = true;
    }

    fn disable(&mut self) {
        self.0.borrow_mut().controls_enabled = false;
    }

    fn handle(&mut self, command: InputCommand) {
        let mut world = self.0.borrow_mut();
        if !world.controls_enabled {
            debug!("controls disabled, dropping {:?}", command);
            return;
        }
        world.apply(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walker_moves_along_its_heading() {
        let mut world = SharedWorld::default();
        world.handle(InputCommand::NavigateUp);
        world.handle(InputCommand::NavigateForward);
        world.handle(InputCommand::NavigateUp);
        world.handle(InputCommand::NavigateUp);
        world.handle(InputCommand::NavigateDown);

        let world = world.0.borrow();
        assert_eq!(world.position, (1, -1));
        assert_eq!(world.heading, Heading::East);
    }

    #[test]
    fn turning_left_undoes_turning_right() {
        for heading in [Heading::North, Heading::East, Heading::South, Heading::West] {
            assert_eq!(heading.right().left(), heading);
        }
    }

    #[test]
    fn paused_clock_stops_simulated_time() {
        let mut world = SharedWorld::default();
        world.0.borrow_mut().advance(0.5);
        world.set_rate(0.0);
        world.0.borrow_mut().advance(10.0);

        assert_eq!(world.0.borrow().sim_time, 0.5);
    }

    #[test]
    fn disabled_controls_ignore_commands() {
        let mut world = SharedWorld::default();
        world.disable();
        world.handle(InputCommand::Submit);
        world.enable();
        world.handle(InputCommand::Submit);

        assert_eq!(world.0.borrow().pings, 1);
    }
}
