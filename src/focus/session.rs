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

//! Per-target session feedback flags.
//!
//! A target whose flag is clear swallows its next focus notification. This is
//! what keeps an automatically assigned focus silent while a focus change the
//! user asked for is announced, without telling the focus pipeline who made
//! the change.

use std::collections::HashSet;

use super::{FocusRegistry, FocusTarget, PanelId};

#[derive(Debug, Clone, Default)]
pub struct SessionFlags {
    seen: HashSet<FocusTarget>,
}

impl SessionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` for the first focus event after a reset, `true` for
    /// every one after that.
    pub fn should_notify(&mut self, target: FocusTarget) -> bool {
        !self.seen.insert(target)
    }

    pub fn reset(&mut self, target: FocusTarget) {
        self.seen.remove(&target);
    }

    pub fn has_been_seen(&self, target: FocusTarget) -> bool {
        self.seen.contains(&target)
    }

    /// Starts a new activation lifetime for a panel.
    ///
    /// Only `auto_focus` is reset; the panel's other targets notify on their
    /// first focus since only a system-assigned focus is silent.
    pub fn begin_session(
        &mut self,
        registry: &FocusRegistry,
        panel: PanelId,
        auto_focus: Option<FocusTarget>,
    ) {
        self.seen.extend(registry.targets(panel).iter().copied());
        if let Some(target) = auto_focus {
            self.reset(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_after_reset_is_silent() {
        let mut registry = FocusRegistry::new();
        let panel = registry.add_panel("controls");
        let target = registry.register(panel, "invert", true);

        let mut flags = SessionFlags::new();
        flags.reset(target);

        assert!(!flags.should_notify(target));
        assert!(flags.should_notify(target));
        assert!(flags.should_notify(target));

        flags.reset(target);
        assert!(!flags.should_notify(target));
    }

    #[test]
    fn session_only_silences_the_auto_focus_target() {
        let mut registry = FocusRegistry::new();
        let panel = registry.add_panel("audio");
        let first = registry.register(panel, "master", true);
        let second = registry.register(panel, "music", true);
        let third = registry.register(panel, "effects", true);

        let mut flags = SessionFlags::new();
        flags.begin_session(&registry, panel, Some(first));

        assert!(!flags.should_notify(first));
        assert!(flags.should_notify(second));
        assert!(flags.should_notify(third));
        assert!(flags.should_notify(first));
    }

    #[test]
    fn reactivation_rearms_suppression() {
        let mut registry = FocusRegistry::new();
        let panel = registry.add_panel("root");
        let first = registry.register(panel, "audio", true);

        let mut flags = SessionFlags::new();
        flags.begin_session(&registry, panel, Some(first));
        assert!(!flags.should_notify(first));
        assert!(flags.has_been_seen(first));

        flags.begin_session(&registry, panel, Some(first));
        assert!(!flags.has_been_seen(first));
        assert!(!flags.should_notify(first));
    }
}
