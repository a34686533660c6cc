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

//! Focusable element registry.
//!
//! Panels own their focus targets. Each target carries explicit `up` and
//! `down` links which are pure navigation relations: looking a neighbour up
//! never wraps on its own, wrapping is something a caller asks for by setting
//! explicit links (see [`FocusRegistry::set_wrap`]).

use super::{FocusTarget, PanelId, Vertical};

#[derive(Debug, Clone)]
struct TargetEntry {
    panel: PanelId,
    label: String,
    interactable: bool,
    up: Option<FocusTarget>,
    down: Option<FocusTarget>,
}

#[derive(Debug, Clone)]
struct PanelEntry {
    name: String,
    targets: Vec<FocusTarget>,
    active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FocusRegistry {
    targets: Vec<TargetEntry>,
    panels: Vec<PanelEntry>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new, inactive panel.
    pub fn add_panel(&mut self, name: impl Into<String>) -> PanelId {
        let id = PanelId(self.panels.len() as u32);
        self.panels.push(PanelEntry {
            name: name.into(),
            targets: vec![],
            active: false,
        });
        id
    }

    /// Registers a target at the end of the panel's registration order.
    ///
    /// The new target has no links, call [`FocusRegistry::link_vertical`] once
    /// the panel is fully populated.
    pub fn register(
        &mut self,
        panel: PanelId,
        label: impl Into<String>,
        interactable: bool,
    ) -> FocusTarget {
        let target = FocusTarget(self.targets.len() as u32);
        self.targets.push(TargetEntry {
            panel,
            label: label.into(),
            interactable,
            up: None,
            down: None,
        });
        if let Some(entry) = self.panels.get_mut(panel.index()) {
            entry.targets.push(target);
        }
        target
    }

    /// Links the panel's targets in registration (top to bottom) order.
    ///
    /// Target `i` links down to `i + 1` and up to `i - 1`. The first target
    /// has no up link and the last has no down link.
    pub fn link_vertical(&mut self, panel: PanelId) {
        let targets = self.targets(panel).to_vec();
        for (i, target) in targets.iter().enumerate() {
            let up = i.checked_sub(1).and_then(|j| targets.get(j)).copied();
            let down = targets.get(i + 1).copied();
            self.set_links(*target, up, down);
        }
    }

    /// Joins the last target of a panel back to the first, and vice versa.
    pub fn set_wrap(&mut self, panel: PanelId) {
        let targets = self.targets(panel);
        let (Some(&first), Some(&last)) = (targets.first(), targets.last()) else {
            return;
        };
        if first == last {
            return;
        }
        if let Some(entry) = self.entry_mut(first) {
            entry.up = Some(last);
        }
        if let Some(entry) = self.entry_mut(last) {
            entry.down = Some(first);
        }
    }

    pub fn set_links(&mut self, target: FocusTarget, up: Option<FocusTarget>, down: Option<FocusTarget>) {
        if let Some(entry) = self.entry_mut(target) {
            entry.up = up;
            entry.down = down;
        }
    }

    pub fn up(&self, target: FocusTarget) -> Option<FocusTarget> {
        self.entry(target)?.up
    }

    pub fn down(&self, target: FocusTarget) -> Option<FocusTarget> {
        self.entry(target)?.down
    }

    pub fn neighbour(&self, target: FocusTarget, direction: Vertical) -> Option<FocusTarget> {
        match direction {
            Vertical::Up => self.up(target),
            Vertical::Down => self.down(target),
        }
    }

    /// Follows links from `from` until an interactable target is found.
    ///
    /// The walk is bounded by the number of registered targets, and stops if
    /// it arrives back at `from` through an explicit wrap.
    pub fn next_interactable(&self, from: FocusTarget, direction: Vertical) -> Option<FocusTarget> {
        let mut cursor = from;
        for _ in 0..self.targets.len() {
            cursor = self.neighbour(cursor, direction)?;
            if cursor == from {
                return None;
            }
            if self.is_interactable(cursor) {
                return Some(cursor);
            }
        }
        None
    }

    pub fn contains(&self, target: FocusTarget) -> bool {
        self.entry(target).is_some()
    }

    pub fn is_interactable(&self, target: FocusTarget) -> bool {
        self.entry(target).is_some_and(|entry| entry.interactable)
    }

    pub fn set_interactable(&mut self, target: FocusTarget, interactable: bool) {
        if let Some(entry) = self.entry_mut(target) {
            entry.interactable = interactable;
        }
    }

    pub fn label(&self, target: FocusTarget) -> &str {
        self.entry(target).map(|entry| entry.label.as_str()).unwrap_or("")
    }

    pub fn panel_of(&self, target: FocusTarget) -> Option<PanelId> {
        self.entry(target).map(|entry| entry.panel)
    }

    pub fn panel_name(&self, panel: PanelId) -> &str {
        self.panels
            .get(panel.index())
            .map(|entry| entry.name.as_str())
            .unwrap_or("")
    }

    /// All targets of a panel in registration order.
    pub fn targets(&self, panel: PanelId) -> &[FocusTarget] {
        self.panels
            .get(panel.index())
            .map(|entry| entry.targets.as_slice())
            .unwrap_or(&[])
    }

    pub fn interactable_targets(&self, panel: PanelId) -> Vec<FocusTarget> {
        self.targets(panel)
            .iter()
            .copied()
            .filter(|target| self.is_interactable(*target))
            .collect()
    }

    /// The first interactable target of a panel, in registration order.
    ///
    /// Computed on every call so that interactable changes are picked up.
    pub fn first_focus_target(&self, panel: PanelId) -> Option<FocusTarget> {
        self.targets(panel)
            .iter()
            .copied()
            .find(|target| self.is_interactable(*target))
    }

    pub fn is_active(&self, panel: PanelId) -> bool {
        self.panels.get(panel.index()).is_some_and(|entry| entry.active)
    }

    pub(crate) fn set_active(&mut self, panel: PanelId, active: bool) {
        if let Some(entry) = self.panels.get_mut(panel.index()) {
            entry.active = active;
        }
    }

    /// Panels currently shown, in creation order.
    pub fn active_panels(&self) -> Vec<PanelId> {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.active)
            .map(|(i, _)| PanelId(i as u32))
            .collect()
    }

    fn entry(&self, target: FocusTarget) -> Option<&TargetEntry> {
        self.targets.get(target.index())
    }

    fn entry_mut(&mut self, target: FocusTarget) -> Option<&mut TargetEntry> {
        self.targets.get_mut(target.index())
    }
}
