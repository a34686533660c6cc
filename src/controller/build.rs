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

//! Turns a [`MenuLayout`] into panels, targets and links.

use crate::{
    config::{ElementLayout, MenuLayout, SubWindowLayout},
    error::ConfigError,
    focus::{FocusRegistry, PanelId},
    navigator::{Category, CategoryNavigator},
    router::{SubWindow, SubWindowId},
};

use super::root::{RootAction, RootMenu};

pub(super) struct Built {
    pub(super) registry: FocusRegistry,
    pub(super) root: RootMenu,
    pub(super) windows: Vec<SubWindow>,
}

pub(super) fn build(layout: &MenuLayout) -> Result<Built, ConfigError> {
    layout.validate()?;

    let mut registry = FocusRegistry::new();

    let root_panel = registry.add_panel(layout.root.title.as_str());
    let buttons = layout
        .root
        .buttons
        .iter()
        .map(|button| {
            let target = registry.register(root_panel, button.label.as_str(), button.interactable);
            let action = match &button.opens {
                Some(window) => RootAction::OpenSubWindow(SubWindowId::new(window.as_str())),
                None => RootAction::Resume,
            };
            (target, action)
        })
        .collect();
    registry.link_vertical(root_panel);
    registry.set_wrap(root_panel);

    let windows = layout
        .sub_windows
        .iter()
        .map(|window| build_window(&mut registry, window))
        .collect();

    Ok(Built {
        registry,
        root: RootMenu::new(root_panel, buttons),
        windows,
    })
}

fn build_window(registry: &mut FocusRegistry, layout: &SubWindowLayout) -> SubWindow {
    let panel = registry.add_panel(layout.title.as_str());
    let id = SubWindowId::new(layout.id.as_str());

    if !layout.is_categorised() {
        add_elements(registry, panel, &layout.elements);
        return SubWindow::new(id, layout.title.as_str(), panel);
    }

    let buttons: Vec<_> = layout
        .categories
        .iter()
        .map(|name| registry.register(panel, name.as_str(), true))
        .collect();
    registry.link_vertical(panel);

    let categories = layout
        .categories
        .iter()
        .zip(&layout.contents)
        .zip(buttons)
        .map(|((name, content), button)| {
            let content_panel = registry.add_panel(format!("{} / {}", layout.title, name));
            add_elements(registry, content_panel, &content.elements);
            Category {
                name: name.clone(),
                button,
                content: content_panel,
            }
        })
        .collect();

    SubWindow::new(id, layout.title.as_str(), panel).with_navigator(CategoryNavigator::new(categories))
}

fn add_elements(registry: &mut FocusRegistry, panel: PanelId, elements: &[ElementLayout]) {
    for element in elements {
        registry.register(panel, element.label.as_str(), element.interactable);
    }
    registry.link_vertical(panel);
}
