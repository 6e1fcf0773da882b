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

use crate::kestrel_bitflags;

kestrel_bitflags! {
    /// Cross-cutting groups an event can belong to.
    ///
    /// A concrete event type declares a fixed combination of these flags, so a single
    /// event can be, for instance, `INPUT`, `MOUSE` and `MOUSE_BUTTON` at once.
    pub struct EventCategory: u32 {
        /// Run-loop events (tick, update, render).
        const APPLICATION = 1 << 0;
        /// Any event originating from a user input device.
        const INPUT = 1 << 1;
        /// Keyboard events.
        const KEYBOARD = 1 << 2;
        /// Mouse events, including buttons, motion and scrolling.
        const MOUSE = 1 << 3;
        /// Mouse button presses and releases.
        const MOUSE_BUTTON = 1 << 4;
        /// Window lifecycle events (close, resize, focus, move).
        const WINDOW = 1 << 5;
    }
}
