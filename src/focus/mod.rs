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

//! Focus targets, panels and the single "currently focused" reference.
//!
//! # Organization
//!
//! * [`registry`]: Panels, their targets and the explicit up/down links.
//! * [`session`]: Flags that silence the first, system-assigned focus of a
//!   panel activation.
//!
//! [`FocusSystem`] ties these together with the feedback sink. It is handed
//! by `&mut` to whichever component currently routes input, so exactly one
//! component can move focus at a time.

mod registry;
mod session;

pub use registry::FocusRegistry;
pub use session::SessionFlags;

use log::debug;

use crate::feedback::{FeedbackEvent, FeedbackSink};

/// Opaque handle to an interactive element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FocusTarget(u32);

impl FocusTarget {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Opaque handle to a panel of focus targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(u32);

impl PanelId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Up,
    Down,
}

pub struct FocusSystem {
    registry: FocusRegistry,
    flags: SessionFlags,
    current: Option<FocusTarget>,
    feedback: Box<dyn FeedbackSink>,
}

impl FocusSystem {
    pub fn new(registry: FocusRegistry, feedback: Box<dyn FeedbackSink>) -> Self {
        Self {
            registry,
            flags: SessionFlags::new(),
            current: None,
            feedback,
        }
    }

    pub fn registry(&self) -> &FocusRegistry {
        &self.registry
    }

    pub fn current(&self) -> Option<FocusTarget> {
        self.current
    }

    /// Moves focus to `target`.
    ///
    /// Selecting the target that already has focus does nothing. Otherwise
    /// the playing cue is stopped and, unless the target's session flag
    /// swallows it, a focus cue is posted.
    pub fn select(&mut self, target: FocusTarget) {
        if self.current == Some(target) {
            return;
        }

        self.feedback.stop_current();
        self.current = Some(target);

        if self.flags.should_notify(target) {
            let event = if self.is_first_of_panel(target) {
                FeedbackEvent::ReturnFocus
            } else {
                FeedbackEvent::Focus
            };
            self.feedback.notify(event, Some(target));
        } else {
            debug!("silent focus on '{}'", self.registry.label(target));
        }
    }

    /// Drops the focus reference entirely.
    pub fn clear(&mut self) {
        self.feedback.stop_current();
        self.current = None;
    }

    /// Shows a panel as the start of a new activation lifetime.
    ///
    /// Returns the panel's first focus target, whose next focus event will be
    /// silent. The caller decides whether to actually focus it.
    pub fn activate_panel(&mut self, panel: PanelId) -> Option<FocusTarget> {
        self.registry.set_active(panel, true);
        let first = self.registry.first_focus_target(panel);
        self.flags.begin_session(&self.registry, panel, first);
        first
    }

    /// Shows a panel as a new activation lifetime with no automatic focus.
    ///
    /// Every target of the panel announces its first focus.
    pub fn reveal_panel(&mut self, panel: PanelId) {
        self.registry.set_active(panel, true);
        self.flags.begin_session(&self.registry, panel, None);
    }

    /// Shows a panel without touching its session flags.
    pub fn show_panel(&mut self, panel: PanelId) {
        self.registry.set_active(panel, true);
    }

    pub fn hide_panel(&mut self, panel: PanelId) {
        self.registry.set_active(panel, false);
    }

    /// Posts a cue that is not tied to a focus change.
    pub fn post(&mut self, event: FeedbackEvent, source: Option<FocusTarget>) {
        self.feedback.stop_current();
        self.feedback.notify(event, source);
    }

    fn is_first_of_panel(&self, target: FocusTarget) -> bool {
        self.registry
            .panel_of(target)
            .and_then(|panel| self.registry.first_focus_target(panel))
            == Some(target)
    }
}
