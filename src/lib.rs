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

//! # Modal focus and input routing.
//!
//! The pause menu of an audio-first game: a root panel, sub-windows opened
//! from it and category lists inside those, all navigated without a pointer.
//! This crate decides what has focus, who receives each input pulse and
//! which feedback cue a focus change produces.
//!
//! ## Architecture
//!
//! Everything runs on the caller's thread, one tick at a time. Collaborators
//! (the feedback sink, the simulation clock and the gameplay controls) are
//! handed to [`MenuController::initialize`] as trait objects.
//!
//! * [`focus`]: Focus targets, panels, links and session flags.
//! * [`navigator`]: Category list and content pane navigation.
//! * [`router`]: The root panel and sub-window modal stack.
//! * [`input`]: Input commands and the gameplay/UI control scheme switch.
//! * [`controller`]: The top level menu controller.
//! * [`tasks`]: Work deferred to the end of a tick.

pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod focus;
pub mod input;
pub mod navigator;
pub mod router;
pub mod tasks;

pub use controller::{Collaborators, MenuController};
pub use error::ConfigError;
pub use feedback::{FeedbackEvent, FeedbackSink};
pub use focus::FocusTarget;
pub use input::{FrameEvent, InputCommand, InputFrame, NavDirection};
pub use router::{ModalState, SubWindowId};
