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

//! The modal menu controller.
//!
//! [`MenuController`] composes the focus system, the sub-window router and
//! the input mode switch into one answer to "is any modal UI open". It is
//! driven one tick at a time by its owner.
//!
//! # Organization
//!
//! * [`build`]: Builds panels and links from the menu layout.
//! * [`root`]: Command handling while the root panel is on top.

mod build;
mod root;

pub use root::{RootAction, RootMenu};

use log::{debug, error, info, trace, warn};

use crate::{
    config::MenuLayout,
    error::ConfigError,
    feedback::{FeedbackEvent, FeedbackSink},
    focus::{FocusRegistry, FocusSystem, FocusTarget, PanelId},
    input::{
        ControlScheme, FrameEvent, GameplayScheme, InputCommand, InputModeSwitch, NavDirection,
        SimulationClock,
    },
    navigator::CategoryNavigator,
    router::{ModalState, SubWindow, SubWindowId, SubWindowRouter},
};

/// The collaborators a controller talks to, resolved once up front.
pub struct Collaborators {
    pub feedback: Box<dyn FeedbackSink>,
    pub clock: Box<dyn SimulationClock>,
    pub gameplay: Box<dyn GameplayScheme>,
}

struct Menu {
    focus: FocusSystem,
    router: SubWindowRouter,
    root: RootMenu,
}

enum Status {
    Ready(Box<Menu>),
    Disabled(ConfigError),
}

pub struct MenuController {
    status: Status,
    mode: InputModeSwitch,
    active: bool,
    in_tick: bool,
    transitioned: bool,
}

impl MenuController {
    /// Builds the menu described by `layout`.
    ///
    /// A layout that fails validation yields a disabled controller: the
    /// error is reported once here, and every menu command afterwards is a
    /// no-op while gameplay keeps receiving its input.
    pub fn initialize(layout: &MenuLayout, collaborators: Collaborators) -> Self {
        let Collaborators {
            feedback,
            clock,
            gameplay,
        } = collaborators;

        let status = match build::build(layout) {
            Ok(built) => {
                info!(
                    "menu initialized: {} root button(s), {} sub-window(s)",
                    built.registry.targets(built.root.panel()).len(),
                    built.windows.len()
                );
                let router = SubWindowRouter::new(
                    built.root.panel(),
                    built.windows,
                    layout.wrap_sub_window_navigation,
                );
                Status::Ready(Box::new(Menu {
                    focus: FocusSystem::new(built.registry, feedback),
                    router,
                    root: built.root,
                }))
            }
            Err(err) => {
                error!("menu disabled: {}", err);
                Status::Disabled(err)
            }
        };

        Self {
            status,
            mode: InputModeSwitch::new(clock, gameplay),
            active: false,
            in_tick: false,
            transitioned: false,
        }
    }

    /// Starts receiving input, with gameplay in charge.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.mode.set_ui_enabled(true);
        self.mode.sync(ControlScheme::Gameplay);
        info!("menu controller activated");
    }

    /// Unwinds any open menu and stops receiving input.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        if let Status::Ready(menu) = &mut self.status {
            if *menu.router.modal() != ModalState::Closed {
                menu.router.collapse(&mut menu.focus);
                menu.focus.clear();
            }
            menu.router.cancel_pending();
        }
        self.active = false;
        self.mode.set_ui_enabled(false);
        self.mode.sync(ControlScheme::Gameplay);
        info!("menu controller deactivated");
    }

    /// Runs one tick: dispatches the events in arrival order, then the
    /// deferred work.
    ///
    /// At most one modal transition happens per tick. Later commands that
    /// would cause another one are dropped.
    pub fn tick<E>(&mut self, events: &[E])
    where
        E: Copy + Into<FrameEvent>,
    {
        if !self.active {
            trace!("inactive, dropping {} event(s)", events.len());
            return;
        }
        self.in_tick = true;
        self.transitioned = false;
        for event in events {
            match (*event).into() {
                FrameEvent::Command(command) => self.dispatch(command),
                FrameEvent::SelectCategory(index) => {
                    self.select_category(index);
                }
            }
        }
        self.in_tick = false;

        if let Status::Ready(menu) = &mut self.status {
            menu.router.end_tick();
        }
    }

    /// Opens the menu from gameplay, or closes it from any depth.
    pub fn toggle(&mut self) -> bool {
        if !self.may_transition() {
            return false;
        }
        let Some(menu) = ready(&mut self.status, self.active) else {
            return false;
        };

        if *menu.router.modal() == ModalState::Closed {
            let first = menu.router.open_root(&mut menu.focus);
            match first {
                Some(first) => menu.focus.select(first),
                None => warn!("root panel has no focusable button"),
            }
            self.mode.enter_ui();
            menu.focus.post(FeedbackEvent::MenuOpen, first);
            info!("menu opened");
        } else {
            menu.router.collapse(&mut menu.focus);
            menu.focus.clear();
            self.mode.enter_gameplay();
            menu.focus.post(FeedbackEvent::MenuClose, None);
            info!("menu closed");
        }
        self.transitioned = true;
        true
    }

    pub fn open_sub_window(&mut self, id: &SubWindowId) -> bool {
        if !self.may_transition() {
            return false;
        }
        let Some(menu) = ready(&mut self.status, self.active) else {
            return false;
        };
        let opened = menu.router.open(id, &mut menu.focus);
        self.transitioned |= opened;
        opened
    }

    pub fn close_active_sub_window(&mut self) -> bool {
        if !self.may_transition() {
            return false;
        }
        let Some(menu) = ready(&mut self.status, self.active) else {
            return false;
        };
        let closed = menu.router.close(&mut menu.focus, true);
        self.transitioned |= closed;
        closed
    }

    /// Selects a category of the open sub-window, as a pointer click would.
    ///
    /// Gated like keyboard navigation: ignored while the window's routing is
    /// still inert, and after a modal transition earlier in the same tick.
    pub fn select_category(&mut self, index: usize) -> bool {
        if self.in_tick && self.transitioned {
            debug!("modal state already changed this tick, dropping selection of category {}", index);
            return false;
        }
        let Some(menu) = ready(&mut self.status, self.active) else {
            return false;
        };
        menu.router.select_category(index, &mut menu.focus)
    }

    pub fn navigate(&mut self, direction: NavDirection) {
        if self.active {
            self.dispatch(direction.command());
        }
    }

    pub fn submit(&mut self) {
        if self.active {
            self.dispatch(InputCommand::Submit);
        }
    }

    fn dispatch(&mut self, command: InputCommand) {
        if command == InputCommand::ToggleMenu {
            if !self.mode.ui_enabled() {
                return;
            }
            self.toggle();
            return;
        }

        let Status::Ready(menu) = &mut self.status else {
            self.mode.forward_to_gameplay(command);
            return;
        };

        let modal = menu.router.modal().clone();
        match modal {
            ModalState::Closed => {
                self.mode.forward_to_gameplay(command);
            }
            ModalState::RootOpen => {
                let action = menu.root.handle(command, &mut menu.focus, menu.router.routing());
                match action {
                    Some(RootAction::OpenSubWindow(id)) => {
                        self.open_sub_window(&id);
                    }
                    Some(RootAction::Resume) => {
                        self.toggle();
                    }
                    None => {}
                }
            }
            ModalState::SubWindowOpen(_) => {
                if self.transitioned && self.in_tick {
                    debug!("modal state already changed this tick, dropping {:?}", command);
                    return;
                }
                self.transitioned |= menu.router.handle(command, &mut menu.focus);
            }
        }
    }

    fn may_transition(&self) -> bool {
        if self.in_tick && self.transitioned {
            debug!("modal state already changed this tick");
            return false;
        }
        true
    }

    fn menu(&self) -> Option<&Menu> {
        match &self.status {
            Status::Ready(menu) => Some(menu.as_ref()),
            Status::Disabled(_) => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.status, Status::Disabled(_))
    }

    pub fn config_error(&self) -> Option<&ConfigError> {
        match &self.status {
            Status::Disabled(err) => Some(err),
            Status::Ready(_) => None,
        }
    }

    pub fn modal_state(&self) -> ModalState {
        self.menu()
            .map(|menu| menu.router.modal().clone())
            .unwrap_or(ModalState::Closed)
    }

    pub fn current_focus(&self) -> Option<FocusTarget> {
        self.menu()?.focus.current()
    }

    pub fn focus_history(&self) -> Option<FocusTarget> {
        self.menu()?.router.history()
    }

    pub fn clock_rate(&self) -> f32 {
        self.mode.rate()
    }

    pub fn gameplay_enabled(&self) -> bool {
        self.mode.gameplay_enabled()
    }

    pub fn control_scheme(&self) -> ControlScheme {
        self.mode.authority()
    }

    pub fn root_submit_enabled(&self) -> bool {
        self.menu()
            .is_some_and(|menu| menu.router.routing().root_submit_enabled())
    }

    pub fn sub_window_routing_enabled(&self) -> bool {
        self.menu()
            .is_some_and(|menu| menu.router.routing().sub_window_enabled())
    }

    pub fn registry(&self) -> Option<&FocusRegistry> {
        self.menu().map(|menu| menu.focus.registry())
    }

    pub fn root_panel(&self) -> Option<PanelId> {
        self.menu().map(|menu| menu.root.panel())
    }

    pub fn sub_windows(&self) -> &[SubWindow] {
        self.menu().map(|menu| menu.router.windows()).unwrap_or(&[])
    }

    pub fn active_window(&self) -> Option<&SubWindow> {
        self.menu()?.router.active_window()
    }

    pub fn navigator(&self) -> Option<&CategoryNavigator> {
        self.active_window()?.navigator.as_ref()
    }

    /// Checks the modal invariants against the observable state.
    ///
    /// The clock is stopped and gameplay disabled exactly when a menu is
    /// open. A closed menu shows no panel; an open sub-window hides the root
    /// and is the only window shown.
    pub fn is_consistent(&self) -> bool {
        let modal = self.modal_state();
        let closed = modal == ModalState::Closed;
        if (self.clock_rate() == 0.0) == closed || self.gameplay_enabled() != closed {
            return false;
        }
        let Some(menu) = self.menu() else {
            return true;
        };
        let registry = menu.focus.registry();
        match modal {
            ModalState::Closed => registry.active_panels().is_empty(),
            ModalState::RootOpen => {
                registry.is_active(menu.root.panel())
                    && menu
                        .router
                        .windows()
                        .iter()
                        .all(|window| !registry.is_active(window.panel))
            }
            ModalState::SubWindowOpen(id) => {
                !registry.is_active(menu.root.panel())
                    && menu
                        .router
                        .windows()
                        .iter()
                        .all(|window| registry.is_active(window.panel) == (window.id == id))
            }
        }
    }
}

/// The menu, if it was built and its owner is active.
fn ready(status: &mut Status, active: bool) -> Option<&mut Menu> {
    match status {
        Status::Ready(menu) if active => Some(menu.as_mut()),
        _ => None,
    }
}
