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

//! Render the pause menu.
//!
//! Each panel is drawn as a list of its focus targets in registration order.
//! The focused target is highlighted and inert targets are dimmed. A window
//! with categories shows the category buttons beside the content of the
//! selected category.

use echomenu::{
    FocusTarget, ModalState,
    focus::{FocusRegistry, PanelId},
    navigator::NavMode,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::{App, theme::Theme};

pub(crate) fn draw_menu(f: &mut Frame, area: Rect, app: &App) {
    let controller = &app.controller;
    let theme = &app.theme;

    if let Some(err) = controller.config_error() {
        draw_message(f, area, theme, " Menu unavailable ", &err.to_string());
        return;
    }

    let Some(registry) = controller.registry() else {
        return;
    };
    let focus = controller.current_focus();

    match controller.modal_state() {
        ModalState::Closed => {
            draw_message(f, area, theme, " Menu ", "Press n to pause and open the menu.");
        }

        ModalState::RootOpen => {
            if let Some(panel) = controller.root_panel() {
                let title = format!(" {} ", registry.panel_name(panel));
                draw_panel(f, area, theme, registry, panel, &title, focus);
            }
        }

        ModalState::SubWindowOpen(_) => {
            let Some(window) = controller.active_window() else {
                return;
            };
            let title = format!(" {} ", window.title);

            let Some(navigator) = &window.navigator else {
                draw_panel(f, area, theme, registry, window.panel, &title, focus);
                return;
            };

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(area);

            draw_panel(f, columns[0], theme, registry, window.panel, &title, focus);

            if let Some(category) = navigator.current() {
                let marker = match navigator.mode() {
                    NavMode::List => "",
                    NavMode::Content => " *",
                };
                let title = format!(" {}{} ", category.name, marker);
                draw_panel(f, columns[1], theme, registry, category.content, &title, focus);
            }
        }
    }
}

/// Renders one panel as a list, selecting the focused target if it lives on
/// this panel.
fn draw_panel(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    registry: &FocusRegistry,
    panel: PanelId,
    title: &str,
    focus: Option<FocusTarget>,
) {
    let targets = registry.targets(panel);

    let items: Vec<ListItem> = targets
        .iter()
        .map(|&target| {
            let style = if registry.is_interactable(target) {
                Style::default().fg(theme.text_fg)
            } else {
                Style::default().fg(theme.inert_fg).add_modifier(Modifier::ITALIC)
            };
            ListItem::new(Line::styled(registry.label(target).to_string(), style))
        })
        .collect();

    let mut state = ListState::default();
    state.select(focus.and_then(|focus| targets.iter().position(|&target| target == focus)));

    let list = List::new(items)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_colour))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(
            Style::default()
                .fg(theme.focus_fg)
                .bg(theme.focus_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut state);
}

fn draw_message(f: &mut Frame, area: Rect, theme: &Theme, title: &str, text: &str) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(theme.inert_fg))
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(paragraph, area);
}
