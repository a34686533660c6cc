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

//! Render the gameplay view.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, util::format::format_sim_time};

pub(crate) fn draw_world(f: &mut Frame, area: Rect, app: &App) {
    let world = app.world.0.borrow();
    let theme = &app.theme;

    let controls = if world.controls_enabled {
        Span::styled("active", Style::default().fg(theme.accent_colour))
    } else {
        Span::styled("paused", Style::default().fg(theme.paused_fg))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Position  "),
            Span::styled(
                format!("{}, {}", world.position.0, world.position.1),
                Style::default().add_modifier(Modifier::BOLD),
            )
            .fg(theme.accent_colour),
        ]),
        Line::from(vec![
            Span::raw("Facing    "),
            Span::raw(format!("{:?}", world.heading)).fg(theme.text_fg),
        ]),
        Line::from(vec![
            Span::raw("Time      "),
            Span::raw(format_sim_time(world.sim_time)).fg(theme.text_fg),
        ]),
        Line::from(vec![
            Span::raw("Pings     "),
            Span::raw(world.pings.to_string()).fg(theme.text_fg),
        ]),
        Line::from(vec![Span::raw("Controls  "), controls]),
        Line::raw(""),
        Line::raw("Up/Down walk, Tab/Shift+Tab turn, Enter pings").fg(theme.inert_fg),
        Line::raw(""),
        Line::styled("Spoken", Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
    ];

    // Newest cue last, interrupted cues dimmed
    let announcer = app.announcer.0.borrow();
    let registry = app.controller.registry();
    lines.extend(announcer.cues().map(|cue| {
        let colour = if cue.interrupted {
            theme.inert_fg
        } else {
            theme.text_fg
        };
        Line::raw(cue.describe(registry)).fg(colour)
    }));

    let block = Block::default()
        .title(" World ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
