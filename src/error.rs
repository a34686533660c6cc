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

//! Menu layout errors, detected once when the controller is initialized.

/// A layout the controller can't be built from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("no root panel: the root layout has no buttons")]
    MissingRootPanel,

    #[error("sub-window '{window}' has {categories} categories but {panels} content panels")]
    CategoryContentMismatch {
        window: String,
        categories: usize,
        panels: usize,
    },

    #[error("root button '{button}' opens unknown sub-window '{window}'")]
    UnknownSubWindow { button: String, window: String },

    #[error("sub-window '{0}' is defined more than once")]
    DuplicateSubWindow(String),

    #[error("sub-window with an empty id")]
    EmptySubWindowId,

    #[error("sub-window '{window}' has both categories and plain elements")]
    MixedSubWindow { window: String },
}
