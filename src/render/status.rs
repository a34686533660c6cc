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

//! Render the status line.
//!
//! Shows the modal state, the clock, which control scheme owns movement and
//! the cue a screen reader would currently be reading.

use echomenu::{ModalState, input::ControlScheme};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, util::format::format_rate};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let controller = &app.controller;

    let modal = match controller.modal_state() {
        ModalState::Closed => "closed".to_string(),
        ModalState::RootOpen => "menu".to_string(),
        ModalState::SubWindowOpen(id) => format!("menu / {}", id),
    };
    let scheme = match controller.control_scheme() {
        ControlScheme::Gameplay => "gameplay",
        ControlScheme::Ui => "ui",
    };

    let announcer = app.announcer.0.borrow();
    let cue = announcer
        .latest()
        .map(|cue| cue.describe(controller.registry()))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(format!(" {} ", modal), Style::default().add_modifier(Modifier::BOLD))
            .fg(theme.accent_colour),
        Span::raw(format!("| clock {} ", format_rate(controller.clock_rate()))),
        Span::raw(format!("| controls {} ", scheme)),
        Span::raw("| "),
        Span::styled(cue, Style::default().add_modifier(Modifier::ITALIC)).fg(theme.text_fg),
    ]);

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour));

    f.render_widget(
        Paragraph::new(line)
            .block(block)
            .style(Style::default().bg(theme.status_bg)),
        area,
    );
}
