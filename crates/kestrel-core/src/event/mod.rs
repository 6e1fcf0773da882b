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

//! The event taxonomy and the synchronous dispatch mechanism.
//!
//! * [`EventKind`] is the closed set of event identities.
//! * [`EventCategory`] is a bitmask of cross-cutting groups; one event may sit in several.
//! * [`Event`] is the sum type over every concrete event struct, and [`EventType`]
//!   is the per-type capability set (kind, categories, name, rendering).
//! * [`EventDispatcher`] routes one event to the handler of its concrete type.
//!
//! Events are blocking: a producer builds one and dispatches it right away. There
//! is no queue and no propagation between handlers.

mod application;
mod base;
mod category;
mod dispatcher;
mod key;
mod kind;
mod mouse;
mod window;

pub use self::application::{AppRenderEvent, AppTickEvent, AppUpdateEvent};
pub use self::base::{Event, EventType};
pub use self::category::EventCategory;
pub use self::dispatcher::{DispatchOutcome, EventDispatcher};
pub use self::key::{KeyCode, KeyPressedEvent, KeyReleasedEvent};
pub use self::kind::EventKind;
pub use self::mouse::{
    MouseButton, MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent,
    MouseScrolledEvent,
};
pub use self::window::{
    WindowCloseEvent, WindowFocusEvent, WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
pub use kestrel_macros::Event;
