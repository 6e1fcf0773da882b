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

//! Keyboard events.

use super::Event;
use std::fmt;

/// A backend-agnostic identifier of a physical key, such as `"KeyA"` or `"Space"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyCode(String);

impl KeyCode {
    /// Wraps a key name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the key name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A key was pressed.
#[derive(Debug, Clone, PartialEq, Eq, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = KeyPressed, category = KEYBOARD | INPUT, custom_display)]
pub struct KeyPressedEvent {
    /// The key that went down.
    pub key_code: KeyCode,
    /// How many auto-repeats this press represents; `0` for the initial press.
    pub repeat_count: u32,
}

impl KeyPressedEvent {
    /// Creates a key press event.
    pub fn new(key_code: KeyCode, repeat_count: u32) -> Self {
        Self {
            key_code,
            repeat_count,
        }
    }
}

impl fmt::Display for KeyPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeyPressedEvent: {} ({} repeats)",
            self.key_code, self.repeat_count
        )
    }
}

/// A key was released.
#[derive(Debug, Clone, PartialEq, Eq, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = KeyReleased, category = KEYBOARD | INPUT, custom_display)]
pub struct KeyReleasedEvent {
    /// The key that went up.
    pub key_code: KeyCode,
}

impl KeyReleasedEvent {
    /// Creates a key release event.
    pub fn new(key_code: KeyCode) -> Self {
        Self { key_code }
    }
}

impl fmt::Display for KeyReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyReleasedEvent: {}", self.key_code)
    }
}
