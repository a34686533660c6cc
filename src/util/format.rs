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

/// Formats simulated seconds as an `MM:SS.t` string.
///
/// The tenths make a stopped clock visibly stopped at the harness tick rate.
pub(crate) fn format_sim_time(seconds: f64) -> String {
    let tenths = (seconds.max(0.0) * 10.0).floor() as u64;
    let mins = tenths / 600;
    let secs = (tenths / 10) % 60;
    format!("{:02}:{:02}.{}", mins, secs, tenths % 10)
}

/// Describes a clock rate the way the status line shows it.
pub(crate) fn format_rate(rate: f32) -> &'static str {
    if rate == 0.0 { "paused" } else { "running" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_time_has_minutes_seconds_and_tenths() {
        assert_eq!(format_sim_time(0.0), "00:00.0");
        assert_eq!(format_sim_time(65.25), "01:05.2");
        assert_eq!(format_sim_time(3600.0), "60:00.0");
    }

    #[test]
    fn negative_time_is_clamped() {
        assert_eq!(format_sim_time(-3.0), "00:00.0");
    }
}
