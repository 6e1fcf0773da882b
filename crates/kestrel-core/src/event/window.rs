// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Window lifecycle events.

use super::Event;
use std::fmt;

/// The window was asked to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = WindowClose, category = WINDOW)]
pub struct WindowCloseEvent;

/// The window's inner area was resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = WindowResize, category = WINDOW, custom_display)]
pub struct WindowResizeEvent {
    /// The new width in physical pixels.
    pub width: u32,
    /// The new height in physical pixels.
    pub height: u32,
}

impl WindowResizeEvent {
    /// Creates a resize event for the given inner size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for WindowResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowResizeEvent: {}, {}", self.width, self.height)
    }
}

/// The window gained focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = WindowFocus, category = WINDOW)]
pub struct WindowFocusEvent;

/// The window lost focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = WindowLostFocus, category = WINDOW)]
pub struct WindowLostFocusEvent;

/// The window was moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = WindowMoved, category = WINDOW, custom_display)]
pub struct WindowMovedEvent {
    /// The new x position of the window's top-left corner, in physical pixels.
    pub x: i32,
    /// The new y position of the window's top-left corner, in physical pixels.
    pub y: i32,
}

impl WindowMovedEvent {
    /// Creates a move event for the given position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for WindowMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowMovedEvent: {}, {}", self.x, self.y)
    }
}
