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

//! Terminal background colour.
//!
//! The background is set with OSC 11 while the UI runs and put back with
//! OSC 111 on exit. Terminals that don't understand the sequences ignore them.

use std::io::{self, Write};

/// Paints the whole terminal window `hex_color`, e.g. `"#281432"`.
pub(crate) fn set_terminal_bg(hex_color: &str) {
    print!("\x1b]11;{}\x07", hex_color);
    io::stdout().flush().ok();
}

/// Returns the background to the user's own colour.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}
