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

//! The [`Event`] sum type and the [`EventType`] capability trait.

use super::application::{AppRenderEvent, AppTickEvent, AppUpdateEvent};
use super::category::EventCategory;
use super::key::{KeyPressedEvent, KeyReleasedEvent};
use super::kind::EventKind;
use super::mouse::{
    MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent,
};
use super::window::{
    WindowCloseEvent, WindowFocusEvent, WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
use std::fmt;

/// The static capability set shared by every concrete event type.
///
/// Implementations are generated by `#[derive(Event)]`; writing one by hand is
/// possible but the derive keeps `KIND` and the extraction functions in sync with
/// the variant of [`Event`] that wraps the type.
pub trait EventType: fmt::Display + Into<Event> + Sized {
    /// The kind shared by every instance of this type.
    const KIND: EventKind;
    /// The categories shared by every instance of this type.
    const CATEGORY: EventCategory;
    /// A display identifier for this type.
    const NAME: &'static str;

    /// Borrows the concrete payload if `event` wraps this type.
    fn from_event(event: &Event) -> Option<&Self>;

    /// Mutably borrows the concrete payload if `event` wraps this type.
    fn from_event_mut(event: &mut Event) -> Option<&mut Self>;

    /// Returns `true` if this type belongs to any of the given categories.
    fn is_in_category(category: EventCategory) -> bool {
        Self::CATEGORY.intersects(category)
    }
}

macro_rules! declare_events {
    ($($(#[$doc:meta])* $kind:ident($ty:ty)),* $(,)?) => {
        /// A single event, wrapping exactly one concrete event type.
        ///
        /// Events are plain values: a producer builds one, classifies it with
        /// [`Event::is_in_category`] or hands it to an
        /// [`EventDispatcher`](super::EventDispatcher), and then drops it.
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Event {
            $(
                $(#[$doc])*
                $kind($ty),
            )*
        }

        impl Event {
            /// Returns the kind of the wrapped event.
            pub fn kind(&self) -> EventKind {
                match self {
                    $(Event::$kind(_) => <$ty as EventType>::KIND,)*
                }
            }

            /// Returns the display identifier of the wrapped event type.
            pub fn name(&self) -> &'static str {
                self.kind().type_name()
            }

            /// Returns the categories the wrapped event belongs to.
            pub fn category_flags(&self) -> EventCategory {
                self.kind().category()
            }
        }

        impl EventKind {
            /// Returns the categories declared by the concrete type of this kind.
            pub const fn category(self) -> EventCategory {
                match self {
                    $(EventKind::$kind => <$ty as EventType>::CATEGORY,)*
                }
            }

            /// Returns the name of the concrete type of this kind.
            pub const fn type_name(self) -> &'static str {
                match self {
                    $(EventKind::$kind => <$ty as EventType>::NAME,)*
                }
            }
        }

        impl fmt::Display for Event {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Event::$kind(inner) => fmt::Display::fmt(inner, f),)*
                }
            }
        }
    };
}

declare_events! {
    /// See [`WindowCloseEvent`].
    WindowClose(WindowCloseEvent),
    /// See [`WindowResizeEvent`].
    WindowResize(WindowResizeEvent),
    /// See [`WindowFocusEvent`].
    WindowFocus(WindowFocusEvent),
    /// See [`WindowLostFocusEvent`].
    WindowLostFocus(WindowLostFocusEvent),
    /// See [`WindowMovedEvent`].
    WindowMoved(WindowMovedEvent),
    /// See [`AppTickEvent`].
    AppTick(AppTickEvent),
    /// See [`AppUpdateEvent`].
    AppUpdate(AppUpdateEvent),
    /// See [`AppRenderEvent`].
    AppRender(AppRenderEvent),
    /// See [`KeyPressedEvent`].
    KeyPressed(KeyPressedEvent),
    /// See [`KeyReleasedEvent`].
    KeyReleased(KeyReleasedEvent),
    /// See [`MouseButtonPressedEvent`].
    MouseButtonPressed(MouseButtonPressedEvent),
    /// See [`MouseButtonReleasedEvent`].
    MouseButtonReleased(MouseButtonReleasedEvent),
    /// See [`MouseMovedEvent`].
    MouseMoved(MouseMovedEvent),
    /// See [`MouseScrolledEvent`].
    MouseScrolled(MouseScrolledEvent),
}

impl Event {
    /// Returns `true` if the event belongs to any of the given categories.
    ///
    /// Pass a single flag for a plain membership test. A combination of flags is
    /// an OR test; use `category_flags().contains(..)` to require all of them.
    pub fn is_in_category(&self, category: EventCategory) -> bool {
        self.category_flags().intersects(category)
    }

    /// Borrows the wrapped event as `T`, or `None` if it is another type.
    pub fn downcast_ref<T: EventType>(&self) -> Option<&T> {
        T::from_event(self)
    }
}
