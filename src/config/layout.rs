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

//! Declarative menu layout.
//!
//! The layout names the root buttons, the sub-windows they open and the
//! elements inside each sub-window. Elements are listed top to bottom, which
//! is also their navigation order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MenuLayout {
    pub root: RootLayout,
    pub sub_windows: Vec<SubWindowLayout>,
    /// Forward past the last element of a sub-window wraps to its first.
    pub wrap_sub_window_navigation: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct RootLayout {
    pub title: String,
    pub buttons: Vec<RootButton>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RootButton {
    pub label: String,
    /// The sub-window this button opens. A button without one resumes play.
    #[serde(default)]
    pub opens: Option<String>,
    #[serde(default = "interactable")]
    pub interactable: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SubWindowLayout {
    pub id: String,
    pub title: String,
    pub elements: Vec<ElementLayout>,
    /// Category names, shown next to the matching entry of `contents`.
    pub categories: Vec<String>,
    pub contents: Vec<ContentLayout>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ContentLayout {
    pub elements: Vec<ElementLayout>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElementLayout {
    pub label: String,
    #[serde(default = "interactable")]
    pub interactable: bool,
}

fn interactable() -> bool {
    true
}

impl RootButton {
    pub fn opens(label: &str, window: &str) -> Self {
        Self {
            label: label.into(),
            opens: Some(window.into()),
            interactable: true,
        }
    }

    pub fn resume(label: &str) -> Self {
        Self {
            label: label.into(),
            opens: None,
            interactable: true,
        }
    }
}

impl ElementLayout {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.into(),
            interactable: true,
        }
    }

    pub fn inert(label: &str) -> Self {
        Self {
            label: label.into(),
            interactable: false,
        }
    }
}

impl SubWindowLayout {
    pub fn plain(id: &str, title: &str, elements: &[&str]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            elements: elements.iter().map(|label| ElementLayout::new(label)).collect(),
            ..Default::default()
        }
    }

    pub fn is_categorised(&self) -> bool {
        !self.categories.is_empty()
    }
}

impl ContentLayout {
    pub fn new(elements: &[&str]) -> Self {
        Self {
            elements: elements.iter().map(|label| ElementLayout::new(label)).collect(),
        }
    }
}

impl MenuLayout {
    /// Checks every reference in the layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.buttons.is_empty() {
            return Err(ConfigError::MissingRootPanel);
        }

        let mut ids = HashSet::new();
        for window in &self.sub_windows {
            if window.id.is_empty() {
                return Err(ConfigError::EmptySubWindowId);
            }
            if !ids.insert(window.id.as_str()) {
                return Err(ConfigError::DuplicateSubWindow(window.id.clone()));
            }
            if window.categories.len() != window.contents.len() {
                return Err(ConfigError::CategoryContentMismatch {
                    window: window.id.clone(),
                    categories: window.categories.len(),
                    panels: window.contents.len(),
                });
            }
            if window.is_categorised() && !window.elements.is_empty() {
                return Err(ConfigError::MixedSubWindow {
                    window: window.id.clone(),
                });
            }
        }

        for button in &self.root.buttons {
            if let Some(window) = &button.opens {
                if !ids.contains(window.as_str()) {
                    return Err(ConfigError::UnknownSubWindow {
                        button: button.label.clone(),
                        window: window.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for MenuLayout {
    fn default() -> Self {
        let settings = SubWindowLayout {
            id: "settings".into(),
            title: "Settings".into(),
            elements: vec![],
            categories: ["Graphics", "Audio", "Controls", "Gameplay", "Accessibility"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            contents: vec![
                ContentLayout::new(&["Brightness", "Field of view", "Motion blur"]),
                ContentLayout::new(&["Master volume", "Music volume", "Effects volume"]),
                ContentLayout::new(&["Mouse sensitivity", "Invert look"]),
                ContentLayout::new(&["Footstep cues", "Auto walk"]),
                ContentLayout::new(&["Screen reader", "Cue verbosity", "High contrast"]),
            ],
        };

        let mut audio = SubWindowLayout::plain(
            "audio",
            "Audio",
            &["Master volume", "Music volume", "Effects volume", "Voice volume"],
        );
        audio.elements.insert(0, ElementLayout::inert("Adjust with left and right"));

        Self {
            root: RootLayout {
                title: "Paused".into(),
                buttons: vec![
                    RootButton::opens("Audio", "audio"),
                    RootButton::opens("Controls", "controls"),
                    RootButton::opens("Settings", "settings"),
                    RootButton::resume("Resume"),
                ],
            },
            sub_windows: vec![
                audio,
                SubWindowLayout::plain(
                    "controls",
                    "Controls",
                    &["Walk forward", "Turn", "Interact", "Open menu"],
                ),
                settings,
            ],
            wrap_sub_window_navigation: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_layout_is_valid() {
        assert_eq!(MenuLayout::default().validate(), Ok(()));
    }

    #[test]
    fn root_without_buttons_is_missing() {
        let mut layout = MenuLayout::default();
        layout.root.buttons.clear();
        assert_eq!(layout.validate(), Err(ConfigError::MissingRootPanel));
    }

    #[rstest]
    #[case::fewer_panels(5, 4)]
    #[case::more_panels(2, 3)]
    #[case::panels_without_categories(0, 1)]
    fn category_and_panel_counts_must_match(#[case] categories: usize, #[case] panels: usize) {
        let window = SubWindowLayout {
            id: "settings".into(),
            categories: (0..categories).map(|i| format!("category {}", i)).collect(),
            contents: (0..panels).map(|_| ContentLayout::default()).collect(),
            ..Default::default()
        };
        let layout = MenuLayout {
            root: RootLayout {
                title: "Paused".into(),
                buttons: vec![RootButton::resume("Resume")],
            },
            sub_windows: vec![window],
            wrap_sub_window_navigation: true,
        };

        assert_eq!(
            layout.validate(),
            Err(ConfigError::CategoryContentMismatch {
                window: "settings".into(),
                categories,
                panels,
            })
        );
    }

    #[test]
    fn buttons_must_open_known_windows() {
        let mut layout = MenuLayout::default();
        layout.root.buttons.push(RootButton::opens("Credits", "credits"));
        assert_eq!(
            layout.validate(),
            Err(ConfigError::UnknownSubWindow {
                button: "Credits".into(),
                window: "credits".into(),
            })
        );
    }

    #[test]
    fn window_ids_are_unique_and_non_empty() {
        let mut layout = MenuLayout::default();
        layout.sub_windows.push(SubWindowLayout::plain("audio", "Audio", &[]));
        assert_eq!(
            layout.validate(),
            Err(ConfigError::DuplicateSubWindow("audio".into()))
        );

        let mut layout = MenuLayout::default();
        layout.sub_windows.push(SubWindowLayout::plain("", "Nameless", &[]));
        assert_eq!(layout.validate(), Err(ConfigError::EmptySubWindowId));
    }

    #[test]
    fn categorised_windows_have_no_plain_elements() {
        let mut layout = MenuLayout::default();
        if let Some(settings) = layout.sub_windows.iter_mut().find(|w| w.id == "settings") {
            settings.elements.push(ElementLayout::new("Stray"));
        }
        assert_eq!(
            layout.validate(),
            Err(ConfigError::MixedSubWindow {
                window: "settings".into()
            })
        );
    }
}
