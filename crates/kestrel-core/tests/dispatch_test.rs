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

//! Integration tests for classification and dispatch through the public API.

use kestrel_core::event::{
    AppRenderEvent, AppTickEvent, AppUpdateEvent, DispatchOutcome, Event, EventCategory,
    EventDispatcher, EventKind, EventType, KeyCode, KeyPressedEvent, KeyReleasedEvent, MouseButton,
    MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent,
    WindowCloseEvent, WindowFocusEvent, WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};

/// Checks the static/instance agreement for one concrete type.
fn assert_static_matches_instance<T: EventType>(value: T) {
    let event: Event = value.into();
    assert_eq!(T::KIND, event.kind());
    assert_eq!(T::CATEGORY, event.category_flags());
    assert_eq!(T::NAME, event.name());
    assert!(T::from_event(&event).is_some());

    for (_, flag) in EventCategory::ALL.iter_names() {
        assert_eq!(event.is_in_category(flag), T::CATEGORY.intersects(flag));
        assert_eq!(T::is_in_category(flag), event.is_in_category(flag));
    }
}

#[test]
fn test_static_kind_matches_instance_kind_for_every_type() {
    assert_static_matches_instance(WindowCloseEvent);
    assert_static_matches_instance(WindowResizeEvent::new(1280, 720));
    assert_static_matches_instance(WindowFocusEvent);
    assert_static_matches_instance(WindowLostFocusEvent);
    assert_static_matches_instance(WindowMovedEvent::new(-5, 5));
    assert_static_matches_instance(AppTickEvent);
    assert_static_matches_instance(AppUpdateEvent);
    assert_static_matches_instance(AppRenderEvent);
    assert_static_matches_instance(KeyPressedEvent::new(KeyCode::new("KeyA"), 2));
    assert_static_matches_instance(KeyReleasedEvent::new(KeyCode::new("KeyA")));
    assert_static_matches_instance(MouseButtonPressedEvent::new(MouseButton::Right));
    assert_static_matches_instance(MouseButtonReleasedEvent::new(MouseButton::Middle));
    assert_static_matches_instance(MouseMovedEvent::new(3.0, 4.0));
    assert_static_matches_instance(MouseScrolledEvent::new(0.5, 0.0));
}

#[test]
fn test_resize_event_classification_and_rendering() {
    let event: Event = WindowResizeEvent::new(1280, 720).into();

    assert!(!event.is_in_category(EventCategory::APPLICATION));
    assert!(!event.is_in_category(EventCategory::INPUT));
    assert!(event.is_in_category(EventCategory::WINDOW));

    let rendered = event.to_string();
    assert!(rendered.contains("1280"), "{rendered}");
    assert!(rendered.contains("720"), "{rendered}");
}

#[test]
fn test_mouse_button_event_sits_in_three_categories() {
    let event: Event = MouseButtonPressedEvent::new(MouseButton::Left).into();
    assert!(event.is_in_category(EventCategory::INPUT));
    assert!(event.is_in_category(EventCategory::MOUSE));
    assert!(event.is_in_category(EventCategory::MOUSE_BUTTON));
    assert!(!event.is_in_category(EventCategory::KEYBOARD));
}

#[test]
fn test_key_pressed_routes_past_resize_handler() {
    let mut event: Event = KeyPressedEvent::new(KeyCode::new("KeyQ"), 0).into();
    let mut dispatcher = EventDispatcher::new(&mut event);

    let mut resize_calls = 0;
    let outcome = dispatcher.dispatch(|_: &mut WindowResizeEvent| {
        resize_calls += 1;
        true
    });
    assert!(!outcome.matched());
    assert_eq!(resize_calls, 0);
    assert!(!dispatcher.is_handled());

    let mut key_calls = 0;
    let outcome = dispatcher.dispatch(|e: &mut KeyPressedEvent| {
        key_calls += 1;
        e.key_code.as_str() == "KeyQ"
    });
    assert!(outcome.matched());
    assert_eq!(outcome, DispatchOutcome::Handled);
    assert_eq!(key_calls, 1);
    assert!(dispatcher.is_handled());
}

#[test]
fn test_only_one_handler_runs_across_every_kind() {
    let mut event: Event = MouseMovedEvent::new(10.0, 20.0).into();
    let mut dispatcher = EventDispatcher::new(&mut event);
    let mut matched = Vec::new();

    macro_rules! try_dispatch {
        ($($ty:ty),*) => {
            $(
                if dispatcher.dispatch(|_: &mut $ty| true).matched() {
                    matched.push(<$ty as EventType>::KIND);
                }
            )*
        };
    }

    try_dispatch!(
        WindowCloseEvent,
        WindowResizeEvent,
        WindowFocusEvent,
        WindowLostFocusEvent,
        WindowMovedEvent,
        AppTickEvent,
        AppUpdateEvent,
        AppRenderEvent,
        KeyPressedEvent,
        KeyReleasedEvent,
        MouseButtonPressedEvent,
        MouseButtonReleasedEvent,
        MouseMovedEvent,
        MouseScrolledEvent
    );

    assert_eq!(matched, [EventKind::MouseMoved]);
}

#[test]
fn test_second_matching_dispatch_reenters_handler() {
    let mut event: Event = WindowCloseEvent.into();
    let mut dispatcher = EventDispatcher::new(&mut event);
    let mut calls = 0;

    assert!(dispatcher
        .dispatch(|_: &mut WindowCloseEvent| {
            calls += 1;
            true
        })
        .handled());
    assert!(dispatcher.is_handled());

    // No guard against double dispatch: the handler runs again and its
    // verdict replaces the previous one.
    let outcome = dispatcher.dispatch(|_: &mut WindowCloseEvent| {
        calls += 1;
        false
    });

    assert_eq!(outcome, DispatchOutcome::Declined);
    assert_eq!(calls, 2);
    assert!(!dispatcher.is_handled());
}
