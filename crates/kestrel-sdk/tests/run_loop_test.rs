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

//! Integration tests for the headless run-loop.

use anyhow::Result;
use kestrel_sdk::prelude::*;
use std::cell::RefCell;

// The engine owns the application, so observations go through a per-thread log.
thread_local! {
    static LOG: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn record(entry: impl Into<String>) {
    LOG.with(|log| log.borrow_mut().push(entry.into()));
}

fn take_log() -> Vec<String> {
    LOG.with(|log| log.borrow_mut().drain(..).collect())
}

fn headless(max_frames: Option<u64>) -> EngineConfig {
    EngineConfig {
        app_name: "Run Loop Test".to_string(),
        tick_rate_hz: 0,
        max_frames,
        ..EngineConfig::default()
    }
}

/// Records every event kind and handles resize and tick events.
struct Recorder;

impl Application for Recorder {
    fn new(_config: &EngineConfig) -> Self {
        record("new");
        Recorder
    }

    fn on_event(&mut self, event: &mut Event) -> bool {
        record(event.kind().to_string());

        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch(|resize: &mut WindowResizeEvent| {
            record(format!("size {}x{}", resize.width, resize.height));
            true
        });
        dispatcher.dispatch(|_: &mut AppTickEvent| true);
        dispatcher.is_handled()
    }

    fn update(&mut self, frame: &FrameContext) {
        record(format!("update {}", frame.frame));
    }
}

/// Asks to exit after a fixed number of updates.
struct ExitAfterThree {
    updates: u32,
}

impl Application for ExitAfterThree {
    fn new(_config: &EngineConfig) -> Self {
        ExitAfterThree { updates: 0 }
    }

    fn update(&mut self, _frame: &FrameContext) {
        self.updates += 1;
    }

    fn should_exit(&self) -> bool {
        self.updates >= 3
    }
}

#[test]
fn test_event_order_and_summary() -> Result<()> {
    let summary = Engine::run_with_config::<Recorder>(headless(Some(2)))?;

    assert_eq!(
        take_log(),
        [
            "new",
            "WindowResize",
            "size 1280x720",
            "AppTick",
            "AppUpdate",
            "update 0",
            "AppRender",
            "AppTick",
            "AppUpdate",
            "update 1",
            "AppRender",
            "WindowClose",
        ]
    );
    assert_eq!(
        summary,
        RunSummary {
            frames: 2,
            events_dispatched: 8,
            events_handled: 3,
        }
    );
    Ok(())
}

#[test]
fn test_startup_event_uses_configured_size() -> Result<()> {
    let config = EngineConfig {
        window_width: 640,
        window_height: 480,
        ..headless(Some(0))
    };
    let summary = Engine::run_with_config::<Recorder>(config)?;

    let log = take_log();
    assert!(log.contains(&"size 640x480".to_string()), "{log:?}");
    assert_eq!(summary.frames, 0);
    // Startup resize and the final close.
    assert_eq!(summary.events_dispatched, 2);
    Ok(())
}

#[test]
fn test_application_can_end_the_loop() -> Result<()> {
    let summary = Engine::run_with_config::<ExitAfterThree>(headless(None))?;

    assert_eq!(summary.frames, 3);
    // The default `on_event` declines everything.
    assert_eq!(summary.events_handled, 0);
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected_before_startup() {
    let config = EngineConfig {
        window_width: 0,
        ..headless(Some(1))
    };

    let err = Engine::run_with_config::<Recorder>(config).unwrap_err();

    assert!(err.to_string().contains("Invalid engine configuration"));
    assert!(take_log().is_empty(), "application must not be created");
}

#[test]
fn test_throttled_loop_honours_tick_rate() -> Result<()> {
    let config = EngineConfig {
        tick_rate_hz: 200,
        ..headless(Some(4))
    };

    let started = std::time::Instant::now();
    Engine::run_with_config::<ExitAfterThree>(config)?;

    // Three frames at 5 ms each.
    assert!(started.elapsed() >= std::time::Duration::from_millis(15));
    Ok(())
}
