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

//! Feedback cues.
//!
//! The menu never plays sounds itself. It reports cues to a [`FeedbackSink`]
//! handed to it at construction, the sink decides what a cue sounds (or
//! reads) like.

use crate::{focus::FocusTarget, router::SubWindowId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEvent {
    /// The menu was opened from gameplay.
    MenuOpen,
    /// The menu was closed, returning to gameplay.
    MenuClose,
    SubWindowOpen(SubWindowId),
    /// Focus moved to a target.
    Focus,
    /// Focus moved to the first target of a panel.
    ReturnFocus,
}

pub trait FeedbackSink {
    /// Fire and forget.
    fn notify(&mut self, event: FeedbackEvent, source: Option<FocusTarget>);

    /// Stops whatever cue is still playing. Only one cue plays at a time.
    fn stop_current(&mut self) {}
}
