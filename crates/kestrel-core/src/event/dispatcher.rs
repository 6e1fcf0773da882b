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

use super::base::{Event, EventType};

/// The result of a single [`EventDispatcher::dispatch`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event is of another type; the handler was not called.
    Mismatched,
    /// The handler ran and reported the event as handled.
    Handled,
    /// The handler ran but declined to mark the event as handled.
    Declined,
}

impl DispatchOutcome {
    /// Returns `true` if the event type matched and the handler ran.
    pub const fn matched(self) -> bool {
        !matches!(self, DispatchOutcome::Mismatched)
    }

    /// Returns `true` if the handler ran and reported the event as handled.
    pub const fn handled(self) -> bool {
        matches!(self, DispatchOutcome::Handled)
    }
}

/// Routes one borrowed event to at most one statically-typed handler.
///
/// A call site tries the concrete types it cares about, in priority order:
///
/// ```
/// use kestrel_core::event::{
///     Event, EventDispatcher, KeyCode, KeyPressedEvent, WindowResizeEvent,
/// };
///
/// let mut event: Event = KeyPressedEvent::new(KeyCode::new("KeyW"), 0).into();
/// let mut dispatcher = EventDispatcher::new(&mut event);
///
/// assert!(!dispatcher.dispatch(|_: &mut WindowResizeEvent| true).matched());
/// assert!(dispatcher.dispatch(|e: &mut KeyPressedEvent| e.key_code.as_str() == "KeyW").handled());
/// assert!(dispatcher.is_handled());
/// ```
///
/// Since an event wraps exactly one concrete type, at most one of those calls can
/// match. Calling [`dispatch`](Self::dispatch) again with the same type runs the
/// handler again and overwrites the handled flag; check [`is_handled`](Self::is_handled)
/// first if that is not wanted.
#[derive(Debug)]
pub struct EventDispatcher<'a> {
    event: &'a mut Event,
    handled: bool,
}

impl<'a> EventDispatcher<'a> {
    /// Wraps an event. The event starts out unhandled.
    pub fn new(event: &'a mut Event) -> Self {
        Self {
            event,
            handled: false,
        }
    }

    /// Calls `handler` if the wrapped event is a `T`, and records its verdict.
    ///
    /// ## Returns
    /// [`DispatchOutcome::Mismatched`] without calling `handler` if the event is of
    /// another type. Otherwise the handled flag is set to the handler's return value
    /// and the outcome is [`DispatchOutcome::Handled`] or [`DispatchOutcome::Declined`].
    pub fn dispatch<T, F>(&mut self, handler: F) -> DispatchOutcome
    where
        T: EventType,
        F: FnOnce(&mut T) -> bool,
    {
        let Some(concrete) = T::from_event_mut(self.event) else {
            log::trace!("Skipped {} handler for {}.", T::NAME, self.event.name());
            return DispatchOutcome::Mismatched;
        };

        self.handled = handler(concrete);
        log::trace!("Dispatched {} (handled: {}).", self.event, self.handled);

        if self.handled {
            DispatchOutcome::Handled
        } else {
            DispatchOutcome::Declined
        }
    }

    /// Returns `true` if the last matching handler reported the event as handled.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Returns the wrapped event.
    pub fn event(&self) -> &Event {
        &*self.event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{
        AppTickEvent, KeyCode, KeyPressedEvent, MouseScrolledEvent, WindowResizeEvent,
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_mismatch_leaves_flag_and_skips_handler() {
        let mut event: Event = AppTickEvent.into();
        let mut dispatcher = EventDispatcher::new(&mut event);
        let mut calls = 0;

        let outcome = dispatcher.dispatch(|_: &mut WindowResizeEvent| {
            calls += 1;
            true
        });

        assert_eq!(outcome, DispatchOutcome::Mismatched);
        assert!(!outcome.matched());
        assert!(!outcome.handled());
        assert_eq!(calls, 0);
        assert!(!dispatcher.is_handled());
    }

    #[test]
    fn test_declining_handler_still_matches() {
        let mut event: Event = WindowResizeEvent::new(1, 1).into();
        let mut dispatcher = EventDispatcher::new(&mut event);

        let outcome = dispatcher.dispatch(|_: &mut WindowResizeEvent| false);

        assert_eq!(outcome, DispatchOutcome::Declined);
        assert!(outcome.matched());
        assert!(!dispatcher.is_handled());
    }

    #[test]
    fn test_handler_can_mutate_payload() {
        let mut event: Event = MouseScrolledEvent::new(0.0, 1.0).into();
        EventDispatcher::new(&mut event).dispatch(|e: &mut MouseScrolledEvent| {
            e.y_offset *= -0.5;
            true
        });

        let scrolled = event
            .downcast_ref::<MouseScrolledEvent>()
            .expect("still a scroll event");
        assert_relative_eq!(scrolled.y_offset, -0.5);
    }

    #[test]
    fn test_later_mismatch_keeps_handled_flag() {
        let mut event: Event = KeyPressedEvent::new(KeyCode::new("Escape"), 0).into();
        let mut dispatcher = EventDispatcher::new(&mut event);

        assert!(dispatcher
            .dispatch(|_: &mut KeyPressedEvent| true)
            .handled());
        assert!(!dispatcher.dispatch(|_: &mut AppTickEvent| false).matched());
        assert!(dispatcher.is_handled());
    }

    #[test]
    fn test_event_accessor() {
        let mut event: Event = AppTickEvent.into();
        let dispatcher = EventDispatcher::new(&mut event);
        assert_eq!(dispatcher.event(), &Event::AppTick(AppTickEvent));
    }
}
