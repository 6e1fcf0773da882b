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

//! Provides translation from a concrete windowing backend (`winit`) to Kestrel events.
//!
//! This module acts as the producer side of the event system: the rest of the
//! framework only ever sees [`Event`] values, never `winit` types.

use kestrel_core::event::{
    AppRenderEvent, Event, KeyCode, KeyPressedEvent, KeyReleasedEvent, MouseButton,
    MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent,
    WindowCloseEvent, WindowFocusEvent, WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Translates a `winit::event::WindowEvent` into a Kestrel [`Event`].
///
/// Window lifecycle, keyboard and mouse events are converted; redraw requests become
/// [`AppRenderEvent`]. Anything else (touch, IME, file drops, ...) has no Kestrel
/// counterpart yet.
///
/// # Returns
///
/// Returns `Some(Event)` if the event has a Kestrel counterpart, or `None` otherwise.
pub fn translate_winit_event(event: &WindowEvent) -> Option<Event> {
    let translated: Event = match event {
        WindowEvent::CloseRequested => WindowCloseEvent.into(),
        WindowEvent::Resized(size) => WindowResizeEvent::new(size.width, size.height).into(),
        WindowEvent::Focused(true) => WindowFocusEvent.into(),
        WindowEvent::Focused(false) => WindowLostFocusEvent.into(),
        WindowEvent::Moved(position) => WindowMovedEvent::new(position.x, position.y).into(),
        WindowEvent::RedrawRequested => AppRenderEvent.into(),
        WindowEvent::KeyboardInput {
            event: key_event, ..
        } => {
            return translate_key(key_event.physical_key, key_event.state, key_event.repeat);
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_mouse_button(*button);
            match state {
                ElementState::Pressed => MouseButtonPressedEvent::new(button).into(),
                ElementState::Released => MouseButtonReleasedEvent::new(button).into(),
            }
        }
        WindowEvent::CursorMoved { position, .. } => {
            MouseMovedEvent::new(position.x as f32, position.y as f32).into()
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let (dx, dy): (f32, f32) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
            };
            if dx == 0.0 && dy == 0.0 {
                return None;
            }
            MouseScrolledEvent::new(dx, dy).into()
        }
        _ => return None,
    };

    Some(translated)
}

// --- Private Helper Functions ---

/// (Internal) Builds a key event from the parts of a `winit::event::KeyEvent`.
///
/// Auto-repeats count as one repeat. Keys without a physical code are dropped.
fn translate_key(physical_key: PhysicalKey, state: ElementState, repeat: bool) -> Option<Event> {
    let PhysicalKey::Code(keycode) = physical_key else {
        log::trace!("Ignoring unidentified physical key.");
        return None;
    };
    let key_code = map_keycode(keycode);
    let event = match state {
        ElementState::Pressed => KeyPressedEvent::new(key_code, u32::from(repeat)).into(),
        ElementState::Released => KeyReleasedEvent::new(key_code).into(),
    };
    Some(event)
}

/// (Internal) Maps a `winit::keyboard::KeyCode` to the framework's key identifier.
fn map_keycode(keycode: WinitKeyCode) -> KeyCode {
    KeyCode::new(format!("{keycode:?}"))
}

/// (Internal) Maps a `winit::event::MouseButton` to the framework's `MouseButton` enum.
fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(id) => MouseButton::Other(id),
    }
}
