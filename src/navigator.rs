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

//! Two-pane category navigation.
//!
//! A vertical list of category buttons sits next to a content pane showing
//! the selected category's panel. In [`NavMode::List`] focus lives on the
//! category buttons and up/down cycle through them with wraparound. A
//! forward tab moves focus into the content pane ([`NavMode::Content`]), a
//! backward tab from the first content element moves it back.
//!
//! Every way of choosing a category, keyboard or pointer, goes through
//! [`CategoryNavigator::select_category`].

use log::{debug, warn};

use crate::{
    focus::{FocusSystem, FocusTarget, PanelId},
    input::InputCommand,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    List,
    Content,
}

/// What the navigator did with a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Handled,
    /// Not intercepted, the caller applies its default traversal.
    Unhandled,
    /// The user backed out of the category list.
    CloseRequested,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub button: FocusTarget,
    pub content: PanelId,
}

#[derive(Debug, Clone)]
pub struct CategoryNavigator {
    categories: Vec<Category>,
    list_index: usize,
    mode: NavMode,
    cached_content: Vec<FocusTarget>,
}

impl CategoryNavigator {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            list_index: 0,
            mode: NavMode::List,
            cached_content: vec![],
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn list_index(&self) -> usize {
        self.list_index
    }

    pub fn mode(&self) -> NavMode {
        self.mode
    }

    pub fn cached_content(&self) -> &[FocusTarget] {
        &self.cached_content
    }

    pub fn current(&self) -> Option<&Category> {
        self.categories.get(self.list_index)
    }

    /// Displays the category at `index` and focuses its list button.
    ///
    /// Every other content panel is hidden and the content cache is rebuilt
    /// from the shown panel. Re-selecting the current category re-displays
    /// it without moving the index.
    pub fn select_category(&mut self, index: usize, focus: &mut FocusSystem) -> bool {
        let Some(category) = self.categories.get(index) else {
            warn!(
                "category index {} out of range ({} categories)",
                index,
                self.categories.len()
            );
            return false;
        };
        let (button, content) = (category.button, category.content);

        for other in &self.categories {
            if other.content != content {
                focus.hide_panel(other.content);
            }
        }
        if !focus.registry().is_active(content) {
            focus.reveal_panel(content);
        }

        self.cached_content = focus.registry().interactable_targets(content);
        self.list_index = index;
        self.mode = NavMode::List;
        focus.select(button);

        debug!(
            "category {} '{}' selected, {} content target(s)",
            index,
            focus.registry().panel_name(content),
            self.cached_content.len()
        );
        true
    }

    pub fn navigate_up(&mut self, focus: &mut FocusSystem) {
        let count = self.categories.len();
        if count == 0 {
            return;
        }
        let index = (self.list_index + count - 1) % count;
        self.select_category(index, focus);
    }

    pub fn navigate_down(&mut self, focus: &mut FocusSystem) {
        let count = self.categories.len();
        if count == 0 {
            return;
        }
        let index = (self.list_index + 1) % count;
        self.select_category(index, focus);
    }

    pub fn submit(&mut self, focus: &mut FocusSystem) {
        self.select_category(self.list_index, focus);
    }

    /// Moves focus into the content pane.
    pub fn forward_tab(&mut self, focus: &mut FocusSystem) {
        let Some(&first) = self.cached_content.first() else {
            warn!(
                "category '{}' has no focusable content",
                self.current().map(|c| c.name.as_str()).unwrap_or("")
            );
            return;
        };
        self.mode = NavMode::Content;
        focus.select(first);
    }

    /// Moves focus back to the list, but only from the first content element.
    pub fn backward_tab(&mut self, focus: &mut FocusSystem) -> bool {
        if self.mode != NavMode::Content
            || focus.current().is_none()
            || focus.current() != self.cached_content.first().copied()
        {
            return false;
        }
        let Some(button) = self.current().map(|c| c.button) else {
            return false;
        };
        self.mode = NavMode::List;
        focus.select(button);
        true
    }

    pub fn handle(&mut self, command: InputCommand, focus: &mut FocusSystem) -> NavOutcome {
        match (self.mode, command) {
            (NavMode::List, InputCommand::NavigateUp) => self.navigate_up(focus),
            (NavMode::List, InputCommand::NavigateDown) => self.navigate_down(focus),
            (NavMode::List, InputCommand::Submit) => self.submit(focus),
            (NavMode::List, InputCommand::NavigateForward) => self.forward_tab(focus),
            (NavMode::List, InputCommand::NavigateBack) => return NavOutcome::CloseRequested,
            (NavMode::Content, InputCommand::NavigateBack) => {
                if !self.backward_tab(focus) {
                    return NavOutcome::Unhandled;
                }
            }
            _ => return NavOutcome::Unhandled,
        }
        NavOutcome::Handled
    }

    /// Starts over on the first category. Used when the owning window opens.
    pub fn reset(&mut self, focus: &mut FocusSystem) -> bool {
        self.hide_all(focus);
        self.select_category(0, focus)
    }

    pub fn hide_all(&mut self, focus: &mut FocusSystem) {
        for category in &self.categories {
            focus.hide_panel(category.content);
        }
        self.mode = NavMode::List;
        self.cached_content.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        feedback::FeedbackEvent,
        focus::{FocusRegistry, testing::RecordingSink},
    };

    struct Fixture {
        focus: FocusSystem,
        sink: RecordingSink,
        navigator: CategoryNavigator,
        contents: Vec<Vec<FocusTarget>>,
    }

    fn fixture(content_sizes: &[usize]) -> Fixture {
        let mut registry = FocusRegistry::new();
        let window = registry.add_panel("settings");
        let buttons: Vec<_> = (0..content_sizes.len())
            .map(|i| registry.register(window, format!("category {}", i), true))
            .collect();
        registry.link_vertical(window);

        let mut categories = vec![];
        let mut contents = vec![];
        for (i, size) in content_sizes.iter().enumerate() {
            let panel = registry.add_panel(format!("content {}", i));
            let targets: Vec<_> = (0..*size)
                .map(|j| registry.register(panel, format!("option {}.{}", i, j), true))
                .collect();
            registry.link_vertical(panel);
            categories.push(Category {
                name: format!("category {}", i),
                button: buttons[i],
                content: panel,
            });
            contents.push(targets);
        }

        let sink = RecordingSink::default();
        let mut focus = FocusSystem::new(registry, Box::new(sink.clone()));
        focus.activate_panel(window);

        Fixture {
            focus,
            sink,
            navigator: CategoryNavigator::new(categories),
            contents,
        }
    }

    fn shown(f: &Fixture) -> Vec<usize> {
        f.navigator
            .categories()
            .iter()
            .enumerate()
            .filter(|(_, c)| f.focus.registry().is_active(c.content))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn list_navigation_wraps_and_tabs_into_content() {
        let mut f = fixture(&[3, 3, 3, 3, 3]);
        f.navigator.select_category(2, &mut f.focus);

        f.navigator.handle(InputCommand::NavigateDown, &mut f.focus);
        assert_eq!(f.navigator.list_index(), 3);
        assert_eq!(f.navigator.cached_content(), f.contents[3].as_slice());
        assert_eq!(shown(&f), vec![3]);

        f.navigator.handle(InputCommand::NavigateDown, &mut f.focus);
        f.navigator.handle(InputCommand::NavigateDown, &mut f.focus);
        assert_eq!(f.navigator.list_index(), 0);

        f.navigator.handle(InputCommand::NavigateForward, &mut f.focus);
        assert_eq!(f.navigator.mode(), NavMode::Content);
        assert_eq!(f.focus.current(), Some(f.contents[0][0]));

        f.navigator.handle(InputCommand::NavigateBack, &mut f.focus);
        assert_eq!(f.navigator.mode(), NavMode::List);
        assert_eq!(f.focus.current(), Some(f.navigator.categories()[0].button));
    }

    #[test]
    fn up_from_the_first_category_wraps_to_the_last() {
        let mut f = fixture(&[1, 1, 1, 1]);
        f.navigator.reset(&mut f.focus);

        f.navigator.navigate_up(&mut f.focus);

        assert_eq!(f.navigator.list_index(), 3);
    }

    #[test]
    fn submit_redisplays_without_moving() {
        let mut f = fixture(&[2, 2, 2]);
        f.navigator.select_category(1, &mut f.focus);
        f.focus.hide_panel(f.navigator.categories()[1].content);

        assert_eq!(
            f.navigator.handle(InputCommand::Submit, &mut f.focus),
            NavOutcome::Handled
        );

        assert_eq!(f.navigator.list_index(), 1);
        assert_eq!(shown(&f), vec![1]);
    }

    #[test]
    fn forward_tab_into_empty_content_is_a_no_op() {
        let mut f = fixture(&[0, 2]);
        f.navigator.reset(&mut f.focus);
        let before = f.focus.current();

        f.navigator.handle(InputCommand::NavigateForward, &mut f.focus);

        assert_eq!(f.navigator.mode(), NavMode::List);
        assert_eq!(f.focus.current(), before);
    }

    #[test]
    fn backward_tab_is_only_intercepted_on_the_first_content_element() {
        let mut f = fixture(&[3]);
        f.navigator.reset(&mut f.focus);
        f.navigator.forward_tab(&mut f.focus);
        f.focus.select(f.contents[0][1]);

        assert_eq!(
            f.navigator.handle(InputCommand::NavigateBack, &mut f.focus),
            NavOutcome::Unhandled
        );
        assert_eq!(f.navigator.mode(), NavMode::Content);
    }

    #[test]
    fn content_mode_leaves_other_commands_to_the_caller() {
        let mut f = fixture(&[3]);
        f.navigator.reset(&mut f.focus);
        f.navigator.forward_tab(&mut f.focus);

        for command in [
            InputCommand::NavigateDown,
            InputCommand::NavigateUp,
            InputCommand::NavigateForward,
            InputCommand::Cancel,
        ] {
            assert_eq!(f.navigator.handle(command, &mut f.focus), NavOutcome::Unhandled);
        }
    }

    #[test]
    fn backing_out_of_the_list_requests_a_close() {
        let mut f = fixture(&[1, 1]);
        f.navigator.reset(&mut f.focus);

        assert_eq!(
            f.navigator.handle(InputCommand::NavigateBack, &mut f.focus),
            NavOutcome::CloseRequested
        );
    }

    #[test]
    fn pointer_selection_takes_the_keyboard_path() {
        let mut f = fixture(&[2, 2, 2]);
        f.navigator.reset(&mut f.focus);
        f.navigator.forward_tab(&mut f.focus);

        assert!(f.navigator.select_category(2, &mut f.focus));

        assert_eq!(f.navigator.mode(), NavMode::List);
        assert_eq!(f.navigator.cached_content(), f.contents[2].as_slice());
        assert!(!f.navigator.select_category(7, &mut f.focus));
        assert_eq!(f.navigator.list_index(), 2);
    }

    #[test]
    fn stepping_through_categories_is_announced() {
        let mut f = fixture(&[1, 1, 1]);
        f.navigator.reset(&mut f.focus);
        f.sink.clear();

        f.navigator.navigate_down(&mut f.focus);
        f.navigator.forward_tab(&mut f.focus);

        assert_eq!(
            f.sink.events(),
            vec![FeedbackEvent::Focus, FeedbackEvent::ReturnFocus]
        );
    }
}
