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

use log::trace;

use crate::App;

/// Runs one controller tick with the commands gathered since the last one,
/// then advances the world by the tick period.
pub(super) fn handle_tick(app: &mut App) {
    let events = app.frame.take();
    if !events.is_empty() {
        trace!("tick with {:?}", events);
    }
    app.controller.tick(&events);

    let seconds = app.config.tick_millis as f64 / 1000.0;
    app.world.0.borrow_mut().advance(seconds);
}
