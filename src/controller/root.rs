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

//! Root panel input handling.

use log::debug;

use crate::{
    focus::{FocusSystem, FocusTarget, PanelId, Vertical},
    input::InputCommand,
    router::{Routing, SubWindowId},
};

/// What activating a root button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootAction {
    OpenSubWindow(SubWindowId),
    Resume,
}

pub struct RootMenu {
    panel: PanelId,
    buttons: Vec<(FocusTarget, RootAction)>,
}

impl RootMenu {
    /// The panel's links are expected to wrap, see
    /// [`FocusRegistry::set_wrap`](crate::focus::FocusRegistry::set_wrap).
    pub fn new(panel: PanelId, buttons: Vec<(FocusTarget, RootAction)>) -> Self {
        Self { panel, buttons }
    }

    pub fn panel(&self) -> PanelId {
        self.panel
    }

    pub fn action(&self, target: FocusTarget) -> Option<&RootAction> {
        self.buttons
            .iter()
            .find(|(button, _)| *button == target)
            .map(|(_, action)| action)
    }

    /// Handles a command while the root panel is on top.
    ///
    /// Returns the action of the focused button when it was activated, the
    /// caller carries it out.
    pub fn handle(
        &self,
        command: InputCommand,
        focus: &mut FocusSystem,
        routing: &Routing,
    ) -> Option<RootAction> {
        match command {
            InputCommand::NavigateUp => self.step(Vertical::Up, focus),
            InputCommand::NavigateDown => self.step(Vertical::Down, focus),
            InputCommand::Submit | InputCommand::NavigateForward => {
                if !routing.root_submit_enabled() {
                    debug!("root submit disabled, dropping {:?}", command);
                    return None;
                }
                let target = focus.current()?;
                return self.action(target).cloned();
            }
            InputCommand::NavigateBack | InputCommand::Cancel | InputCommand::ToggleMenu => {
                debug!("root panel ignores {:?}", command);
            }
        }
        None
    }

    fn step(&self, direction: Vertical, focus: &mut FocusSystem) {
        let next = match focus.current() {
            Some(current) if focus.registry().panel_of(current) == Some(self.panel) => {
                focus.registry().next_interactable(current, direction)
            }
            _ => focus.registry().first_focus_target(self.panel),
        };
        if let Some(next) = next {
            focus.select(next);
        }
    }
}
