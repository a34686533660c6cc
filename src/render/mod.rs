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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every key and tick event.

mod menu;
mod status;
mod world;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    App,
    render::{menu::draw_menu, status::draw_status, world::draw_world},
};

/// Renders the user interface to the terminal frame.
///
/// The world view sits on the left, the menu on the right and a status line
/// with the modal state and the latest cue at the bottom.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Outer layout: main, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    // Main layout: world, menu
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(outer[0]);

    draw_world(f, main[0], app);

    draw_menu(f, main[1], app);

    draw_status(f, outer[1], app);
}
