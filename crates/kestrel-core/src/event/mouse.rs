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

//! Mouse events: buttons, motion and scrolling.

use super::Event;
use std::fmt;

/// A backend-agnostic mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseButton {
    /// The left mouse button.
    Left,
    /// The right mouse button.
    Right,
    /// The middle mouse button.
    Middle,
    /// The back mouse button (typically on the side).
    Back,
    /// The forward mouse button (typically on the side).
    Forward,
    /// Another mouse button, identified by a numeric code.
    Other(u16),
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A mouse button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = MouseButtonPressed, category = MOUSE | INPUT | MOUSE_BUTTON, custom_display)]
pub struct MouseButtonPressedEvent {
    /// The button that went down.
    pub button: MouseButton,
}

impl MouseButtonPressedEvent {
    /// Creates a button press event.
    pub fn new(button: MouseButton) -> Self {
        Self { button }
    }
}

impl fmt::Display for MouseButtonPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonPressedEvent: {}", self.button)
    }
}

/// A mouse button was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = MouseButtonReleased, category = MOUSE | INPUT | MOUSE_BUTTON, custom_display)]
pub struct MouseButtonReleasedEvent {
    /// The button that went up.
    pub button: MouseButton,
}

impl MouseButtonReleasedEvent {
    /// Creates a button release event.
    pub fn new(button: MouseButton) -> Self {
        Self { button }
    }
}

impl fmt::Display for MouseButtonReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonReleasedEvent: {}", self.button)
    }
}

/// The cursor moved inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = MouseMoved, category = MOUSE | INPUT, custom_display)]
pub struct MouseMovedEvent {
    /// The new x-coordinate of the cursor.
    pub x: f32,
    /// The new y-coordinate of the cursor.
    pub y: f32,
}

impl MouseMovedEvent {
    /// Creates a cursor motion event.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for MouseMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseMovedEvent: {}, {}", self.x, self.y)
    }
}

/// The mouse wheel or trackpad scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = MouseScrolled, category = MOUSE | INPUT, custom_display)]
pub struct MouseScrolledEvent {
    /// The horizontal scroll delta.
    pub x_offset: f32,
    /// The vertical scroll delta.
    pub y_offset: f32,
}

impl MouseScrolledEvent {
    /// Creates a scroll event.
    pub fn new(x_offset: f32, y_offset: f32) -> Self {
        Self { x_offset, y_offset }
    }
}

impl fmt::Display for MouseScrolledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MouseScrolledEvent: {}, {}",
            self.x_offset, self.y_offset
        )
    }
}
