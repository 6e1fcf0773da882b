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

use std::fmt;

/// The closed set of event identities known to the framework.
///
/// Every concrete event type maps to exactly one kind, and every kind to exactly
/// one variant of [`Event`](super::Event). Kinds are grouped by the subsystem that
/// produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    // --- Window lifecycle ---
    /// The user or the platform asked for the window to close.
    WindowClose,
    /// The window's inner area changed size.
    WindowResize,
    /// The window gained input focus.
    WindowFocus,
    /// The window lost input focus.
    WindowLostFocus,
    /// The window was moved on screen.
    WindowMoved,

    // --- Application lifecycle ---
    /// A fixed-rate tick of the run-loop.
    AppTick,
    /// The per-frame logic update.
    AppUpdate,
    /// The per-frame render pass.
    AppRender,

    // --- Keyboard ---
    /// A key went down (or auto-repeated).
    KeyPressed,
    /// A key went up.
    KeyReleased,

    // --- Mouse ---
    /// A mouse button went down.
    MouseButtonPressed,
    /// A mouse button went up.
    MouseButtonReleased,
    /// The cursor moved.
    MouseMoved,
    /// The wheel or trackpad scrolled.
    MouseScrolled,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [EventKind; 14] = [
        EventKind::WindowClose,
        EventKind::WindowResize,
        EventKind::WindowFocus,
        EventKind::WindowLostFocus,
        EventKind::WindowMoved,
        EventKind::AppTick,
        EventKind::AppUpdate,
        EventKind::AppRender,
        EventKind::KeyPressed,
        EventKind::KeyReleased,
        EventKind::MouseButtonPressed,
        EventKind::MouseButtonReleased,
        EventKind::MouseMoved,
        EventKind::MouseScrolled,
    ];
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
