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

//! The single level modal stack.
//!
//! The root panel and at most one sub-window take turns at being shown. The
//! router owns the [`ModalState`], the saved focus history and the routing
//! switches that say which handler currently receives commands.
//!
//! Opening a sub-window focuses its first target straight away, but its own
//! routing is only switched on by a deferred task that runs once the current
//! tick has completed. The pulse that opened the window can therefore never
//! reach the window as well.

use std::fmt;

use log::{debug, info, warn};

use crate::{
    feedback::FeedbackEvent,
    focus::{FocusSystem, FocusTarget, PanelId, Vertical},
    input::InputCommand,
    navigator::{CategoryNavigator, NavOutcome},
    tasks::DeferredTasks,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubWindowId(String);

impl SubWindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SubWindowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for SubWindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which layer currently owns input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    RootOpen,
    SubWindowOpen(SubWindowId),
}

pub struct SubWindow {
    pub id: SubWindowId,
    pub title: String,
    pub panel: PanelId,
    /// Present when the window is a category list with content panes.
    pub navigator: Option<CategoryNavigator>,
}

impl SubWindow {
    pub fn new(id: SubWindowId, title: impl Into<String>, panel: PanelId) -> Self {
        Self {
            id,
            title: title.into(),
            panel,
            navigator: None,
        }
    }

    pub fn with_navigator(mut self, navigator: CategoryNavigator) -> Self {
        self.navigator = Some(navigator);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SubWindowHandler {
    window: SubWindowId,
    epoch: u64,
    enabled: bool,
}

/// The routing switches, the only state deferred tasks may touch.
#[derive(Debug, Default)]
pub struct Routing {
    root_submit: bool,
    sub_window: Option<SubWindowHandler>,
}

impl Routing {
    pub fn root_submit_enabled(&self) -> bool {
        self.root_submit
    }

    pub fn sub_window_enabled(&self) -> bool {
        self.sub_window.as_ref().is_some_and(|handler| handler.enabled)
    }

    /// Switches the sub-window handler on, if it is still the one the task
    /// was scheduled for.
    fn enable_if_live(&mut self, window: &SubWindowId, epoch: u64) {
        match self.sub_window.as_mut() {
            Some(handler) if handler.window == *window && handler.epoch == epoch => {
                handler.enabled = true;
                debug!("sub-window '{}' routing enabled", window);
            }
            _ => debug!("sub-window '{}' gone, deferred enable dropped", window),
        }
    }
}

pub struct SubWindowRouter {
    root: PanelId,
    windows: Vec<SubWindow>,
    modal: ModalState,
    history: Option<FocusTarget>,
    routing: Routing,
    deferred: DeferredTasks<Routing>,
    epoch: u64,
    wrap_forward: bool,
}

impl SubWindowRouter {
    pub fn new(root: PanelId, windows: Vec<SubWindow>, wrap_forward: bool) -> Self {
        Self {
            root,
            windows,
            modal: ModalState::Closed,
            history: None,
            routing: Routing::default(),
            deferred: DeferredTasks::new(),
            epoch: 0,
            wrap_forward,
        }
    }

    pub fn root(&self) -> PanelId {
        self.root
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn history(&self) -> Option<FocusTarget> {
        self.history
    }

    pub fn routing(&self) -> &Routing {
        &self.routing
    }

    pub fn windows(&self) -> &[SubWindow] {
        &self.windows
    }

    pub fn window(&self, id: &SubWindowId) -> Option<&SubWindow> {
        self.windows.iter().find(|window| window.id == *id)
    }

    pub fn active_window(&self) -> Option<&SubWindow> {
        match &self.modal {
            ModalState::SubWindowOpen(id) => self.window(id),
            _ => None,
        }
    }

    pub fn pending_tasks(&self) -> usize {
        self.deferred.len()
    }

    /// Shows the root panel. Returns its first focus target.
    pub fn open_root(&mut self, focus: &mut FocusSystem) -> Option<FocusTarget> {
        self.modal = ModalState::RootOpen;
        let first = focus.activate_panel(self.root);
        self.routing.root_submit = true;
        first
    }

    /// Unwinds the whole stack back to [`ModalState::Closed`].
    ///
    /// An open sub-window is closed without restoring focus.
    pub fn collapse(&mut self, focus: &mut FocusSystem) {
        self.close(focus, false);
        self.modal = ModalState::Closed;
        focus.hide_panel(self.root);
        self.routing.root_submit = false;
        self.history = None;
    }

    /// Opens a sub-window on top of the root panel.
    ///
    /// Only valid while the root panel is open, anything else is ignored.
    pub fn open(&mut self, id: &SubWindowId, focus: &mut FocusSystem) -> bool {
        if self.modal != ModalState::RootOpen {
            debug!("ignoring open of '{}' in {:?}", id, self.modal);
            return false;
        }
        let Some(index) = self.windows.iter().position(|window| window.id == *id) else {
            warn!("no sub-window '{}'", id);
            return false;
        };

        self.history = focus.current();
        focus.hide_panel(self.root);

        let window = &mut self.windows[index];
        let first = focus.activate_panel(window.panel);
        self.modal = ModalState::SubWindowOpen(id.clone());
        self.routing.root_submit = false;

        self.epoch += 1;
        let epoch = self.epoch;
        self.routing.sub_window = Some(SubWindowHandler {
            window: id.clone(),
            epoch,
            enabled: false,
        });
        let target = id.clone();
        self.deferred
            .schedule(move |routing: &mut Routing| routing.enable_if_live(&target, epoch));

        match (window.navigator.as_mut(), first) {
            (Some(navigator), _) => {
                navigator.reset(focus);
            }
            (None, Some(first)) => focus.select(first),
            (None, None) => warn!("sub-window '{}' has no focusable target", id),
        }

        focus.post(FeedbackEvent::SubWindowOpen(id.clone()), first);
        info!("sub-window '{}' opened", id);
        true
    }

    /// Closes the open sub-window and shows the root panel again.
    ///
    /// With `restore` set, focus goes back to where it was before the window
    /// opened. Ignored unless a sub-window is open.
    pub fn close(&mut self, focus: &mut FocusSystem, restore: bool) -> bool {
        let ModalState::SubWindowOpen(id) = &self.modal else {
            debug!("ignoring close in {:?}", self.modal);
            return false;
        };
        let id = id.clone();

        self.routing.sub_window = None;
        self.routing.root_submit = true;

        if let Some(window) = self.windows.iter_mut().find(|window| window.id == id) {
            if let Some(navigator) = window.navigator.as_mut() {
                navigator.hide_all(focus);
            }
            focus.hide_panel(window.panel);
        }
        focus.show_panel(self.root);
        self.modal = ModalState::RootOpen;

        match self.history.take() {
            Some(saved) if restore => focus.select(saved),
            _ => {}
        }

        info!("sub-window '{}' closed", id);
        true
    }

    /// Routes a command to the open sub-window.
    ///
    /// Returns `true` if the command caused a modal transition.
    pub fn handle(&mut self, command: InputCommand, focus: &mut FocusSystem) -> bool {
        if !self.routing.sub_window_enabled() {
            debug!("sub-window routing inert, dropping {:?}", command);
            return false;
        }
        let ModalState::SubWindowOpen(id) = &self.modal else {
            return false;
        };
        let Some(window) = self.windows.iter_mut().find(|window| window.id == *id) else {
            return false;
        };

        if let Some(navigator) = window.navigator.as_mut() {
            match navigator.handle(command, focus) {
                NavOutcome::Handled => return false,
                NavOutcome::CloseRequested => return self.close(focus, true),
                NavOutcome::Unhandled => {}
            }
        }

        let panel = window.panel;
        let current = visible_focus(focus);
        match command {
            InputCommand::Cancel => self.close(focus, true),
            InputCommand::NavigateBack => {
                let first = focus.registry().first_focus_target(panel);
                let up = current.and_then(|t| focus.registry().next_interactable(t, Vertical::Up));
                match up {
                    Some(up) if current != first => {
                        focus.select(up);
                        false
                    }
                    _ => self.close(focus, true),
                }
            }
            InputCommand::NavigateForward => {
                self.forward(current, focus);
                false
            }
            InputCommand::NavigateUp => {
                self.step(current, Vertical::Up, focus);
                false
            }
            InputCommand::NavigateDown => {
                self.step(current, Vertical::Down, focus);
                false
            }
            InputCommand::Submit | InputCommand::ToggleMenu => false,
        }
    }

    /// Routes a pointer selection to the open window's category list.
    pub fn select_category(&mut self, index: usize, focus: &mut FocusSystem) -> bool {
        let ModalState::SubWindowOpen(id) = &self.modal else {
            debug!("ignoring category selection in {:?}", self.modal);
            return false;
        };
        if !self.routing.sub_window_enabled() {
            debug!("sub-window routing inert, dropping selection of category {}", index);
            return false;
        }
        let navigator = self
            .windows
            .iter_mut()
            .find(|window| window.id == *id)
            .and_then(|window| window.navigator.as_mut());
        match navigator {
            Some(navigator) => navigator.select_category(index, focus),
            None => {
                warn!("sub-window '{}' has no categories", id);
                false
            }
        }
    }

    /// Runs the deferred work of the tick that just completed.
    pub fn end_tick(&mut self) {
        self.deferred.run_pending(&mut self.routing);
    }

    pub fn cancel_pending(&mut self) {
        self.deferred.cancel_all();
    }

    fn forward(&self, current: Option<FocusTarget>, focus: &mut FocusSystem) {
        let Some(current) = current else {
            return;
        };
        if let Some(next) = focus.registry().next_interactable(current, Vertical::Down) {
            focus.select(next);
            return;
        }
        if !self.wrap_forward {
            return;
        }
        let first = focus
            .registry()
            .panel_of(current)
            .and_then(|panel| focus.registry().first_focus_target(panel));
        match first {
            Some(first) => focus.select(first),
            None => warn!("no focusable target to wrap to"),
        }
    }

    fn step(&self, current: Option<FocusTarget>, direction: Vertical, focus: &mut FocusSystem) {
        if let Some(next) = current.and_then(|t| focus.registry().next_interactable(t, direction)) {
            focus.select(next);
        }
    }
}

/// The focused target, unless it sits on a hidden panel.
fn visible_focus(focus: &FocusSystem) -> Option<FocusTarget> {
    focus.current().filter(|target| {
        focus
            .registry()
            .panel_of(*target)
            .is_some_and(|panel| focus.registry().is_active(panel))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::{FocusRegistry, testing::RecordingSink};

    struct Fixture {
        focus: FocusSystem,
        sink: RecordingSink,
        router: SubWindowRouter,
        root_buttons: Vec<FocusTarget>,
        audio: Vec<FocusTarget>,
    }

    fn fixture(wrap_forward: bool) -> Fixture {
        let mut registry = FocusRegistry::new();
        let root = registry.add_panel("pause");
        let root_buttons: Vec<_> = ["audio", "empty", "resume"]
            .iter()
            .map(|label| registry.register(root, *label, true))
            .collect();
        registry.link_vertical(root);

        let audio_panel = registry.add_panel("audio");
        let audio: Vec<_> = ["master", "music", "effects", "voice"]
            .iter()
            .map(|label| registry.register(audio_panel, *label, true))
            .collect();
        registry.link_vertical(audio_panel);

        let empty_panel = registry.add_panel("empty");
        registry.register(empty_panel, "nothing here", false);

        let windows = vec![
            SubWindow::new("audio".into(), "Audio", audio_panel),
            SubWindow::new("empty".into(), "Empty", empty_panel),
        ];
        let sink = RecordingSink::default();
        let focus = FocusSystem::new(registry, Box::new(sink.clone()));
        let router = SubWindowRouter::new(root, windows, wrap_forward);

        let mut f = Fixture {
            focus,
            sink,
            router,
            root_buttons,
            audio,
        };
        if let Some(first) = f.router.open_root(&mut f.focus) {
            f.focus.select(first);
        }
        f
    }

    fn open_and_settle(f: &mut Fixture, id: &str) {
        assert!(f.router.open(&id.into(), &mut f.focus));
        f.router.end_tick();
    }

    #[test]
    fn open_then_close_restores_the_saved_focus() {
        let mut f = fixture(true);
        f.focus.select(f.root_buttons[0]);

        open_and_settle(&mut f, "audio");
        assert_eq!(f.router.history(), Some(f.root_buttons[0]));
        assert_eq!(f.focus.current(), Some(f.audio[0]));
        assert!(!f.focus.registry().is_active(f.router.root()));
        assert!(!f.router.routing().root_submit_enabled());

        assert!(f.router.handle(InputCommand::Cancel, &mut f.focus));

        assert_eq!(f.router.modal(), &ModalState::RootOpen);
        assert_eq!(f.focus.current(), Some(f.root_buttons[0]));
        assert_eq!(f.router.history(), None);
        assert!(f.router.routing().root_submit_enabled());
        assert!(f.focus.registry().is_active(f.router.root()));
    }

    #[test]
    fn routing_is_inert_for_the_opening_tick() {
        let mut f = fixture(true);
        f.router.open(&"audio".into(), &mut f.focus);

        assert!(!f.router.routing().sub_window_enabled());
        assert!(!f.router.handle(InputCommand::Cancel, &mut f.focus));
        assert_eq!(f.router.modal(), &ModalState::SubWindowOpen("audio".into()));

        f.router.end_tick();
        assert!(f.router.routing().sub_window_enabled());
    }

    #[test]
    fn stale_deferred_enable_is_dropped() {
        let mut f = fixture(true);
        f.router.open(&"audio".into(), &mut f.focus);
        f.router.close(&mut f.focus, true);
        f.router.open(&"audio".into(), &mut f.focus);
        assert_eq!(f.router.pending_tasks(), 2);

        // The first task targets a handler that no longer exists, the
        // second enables the current one.
        f.router.end_tick();
        assert!(f.router.routing().sub_window_enabled());

        f.router.close(&mut f.focus, true);
        f.router.open(&"audio".into(), &mut f.focus);
        f.router.cancel_pending();
        f.router.end_tick();
        assert!(!f.router.routing().sub_window_enabled());
    }

    #[test]
    fn auto_focus_is_silent_and_the_window_is_announced() {
        let mut f = fixture(true);
        f.sink.clear();

        open_and_settle(&mut f, "audio");
        assert_eq!(
            f.sink.events(),
            vec![FeedbackEvent::SubWindowOpen("audio".into())]
        );

        f.router.handle(InputCommand::NavigateDown, &mut f.focus);
        assert_eq!(f.sink.focus_cues_for(f.audio[1]), 1);
    }

    #[test]
    fn forward_wraps_to_the_first_target() {
        let mut f = fixture(true);
        open_and_settle(&mut f, "audio");
        f.focus.select(f.audio[3]);

        f.router.handle(InputCommand::NavigateForward, &mut f.focus);

        assert_eq!(f.focus.current(), Some(f.audio[0]));
    }

    #[test]
    fn forward_at_the_end_stays_put_without_wrap() {
        let mut f = fixture(false);
        open_and_settle(&mut f, "audio");
        f.focus.select(f.audio[3]);

        f.router.handle(InputCommand::NavigateForward, &mut f.focus);

        assert_eq!(f.focus.current(), Some(f.audio[3]));
    }

    #[test]
    fn up_and_down_do_not_wrap() {
        let mut f = fixture(true);
        open_and_settle(&mut f, "audio");

        f.router.handle(InputCommand::NavigateUp, &mut f.focus);
        assert_eq!(f.focus.current(), Some(f.audio[0]));

        f.focus.select(f.audio[3]);
        f.router.handle(InputCommand::NavigateDown, &mut f.focus);
        assert_eq!(f.focus.current(), Some(f.audio[3]));
    }

    #[test]
    fn back_moves_up_then_closes_from_the_first_target() {
        let mut f = fixture(true);
        open_and_settle(&mut f, "audio");
        f.focus.select(f.audio[1]);

        assert!(!f.router.handle(InputCommand::NavigateBack, &mut f.focus));
        assert_eq!(f.focus.current(), Some(f.audio[0]));

        assert!(f.router.handle(InputCommand::NavigateBack, &mut f.focus));
        assert_eq!(f.router.modal(), &ModalState::RootOpen);
    }

    #[test]
    fn invalid_transitions_are_ignored() {
        let mut f = fixture(true);
        assert!(!f.router.close(&mut f.focus, true));
        assert!(!f.router.open(&"missing".into(), &mut f.focus));

        open_and_settle(&mut f, "audio");
        assert!(!f.router.open(&"empty".into(), &mut f.focus));
        assert_eq!(f.router.modal(), &ModalState::SubWindowOpen("audio".into()));
    }

    #[test]
    fn window_without_focusable_targets_still_opens() {
        let mut f = fixture(true);
        f.focus.select(f.root_buttons[1]);

        open_and_settle(&mut f, "empty");

        assert_eq!(f.router.modal(), &ModalState::SubWindowOpen("empty".into()));
        assert_eq!(f.focus.current(), Some(f.root_buttons[1]));

        f.router.handle(InputCommand::NavigateBack, &mut f.focus);
        assert_eq!(f.router.modal(), &ModalState::RootOpen);
    }

    #[test]
    fn collapse_skips_the_focus_restore() {
        let mut f = fixture(true);
        f.focus.select(f.root_buttons[2]);
        open_and_settle(&mut f, "audio");

        f.router.collapse(&mut f.focus);

        assert_eq!(f.router.modal(), &ModalState::Closed);
        assert_eq!(f.focus.current(), Some(f.audio[0]));
        assert_eq!(f.router.history(), None);
        assert!(!f.focus.registry().is_active(f.router.root()));
        assert!(!f.router.routing().root_submit_enabled());
        assert!(!f.router.routing().sub_window_enabled());
    }
}
