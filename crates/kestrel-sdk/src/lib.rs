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

//! The public-facing Software Development Kit (SDK) for Kestrel.
//! This crate provides a simple and stable API for creating and running
//! applications on top of the Kestrel event system.

pub mod config;

use anyhow::{Context, Result};
use kestrel_core::event::{
    AppRenderEvent, AppTickEvent, AppUpdateEvent, Event, EventCategory, WindowCloseEvent,
    WindowResizeEvent,
};
use std::time::{Duration, Instant};

pub use config::{ConfigError, EngineConfig};

pub mod prelude {
    //! Everything an application usually needs in scope.
    pub use crate::{Application, Engine, EngineConfig, FrameContext, RunSummary};
    pub use kestrel_core::event::*;
}

/// Timing information handed to [`Application::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameContext {
    /// Zero-based index of the current frame.
    pub frame: u64,
    /// Time since the previous frame started.
    pub delta: Duration,
    /// Time since the run-loop started.
    pub elapsed: Duration,
}

/// Counters reported by [`Engine::run`] once the run-loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Number of frames executed.
    pub frames: u64,
    /// Number of events handed to [`Application::on_event`].
    pub events_dispatched: u64,
    /// Number of those events the application reported as handled.
    pub events_handled: u64,
}

/// A trait that user applications must implement to be run by the [`Engine`].
pub trait Application: Sized + 'static {
    /// Called once before the run-loop starts to create the initial state.
    fn new(config: &EngineConfig) -> Self;

    /// Called synchronously for every event the engine produces.
    ///
    /// Return `true` if the event was handled. An
    /// [`EventDispatcher`](kestrel_core::event::EventDispatcher) is the usual way
    /// to route it to a type-specific handler.
    fn on_event(&mut self, event: &mut Event) -> bool {
        let _ = event;
        false
    }

    /// Called every frame for application logic updates.
    fn update(&mut self, frame: &FrameContext);

    /// Polled before every frame; returning `true` ends the run-loop.
    fn should_exit(&self) -> bool {
        false
    }
}

/// The internal state of the running engine.
struct EngineState<A: Application> {
    app: A,
    config: EngineConfig,
    summary: RunSummary,
}

impl<A: Application> EngineState<A> {
    /// Hands one event to the application and records the verdict.
    fn emit(&mut self, event: impl Into<Event>) -> bool {
        let mut event = event.into();
        let handled = self.app.on_event(&mut event);

        self.summary.events_dispatched += 1;
        if handled {
            self.summary.events_handled += 1;
        }
        log::trace!("{event} -> handled: {handled}");
        handled
    }

    /// Builds the startup resize event, logs it per category and hands it to the application.
    fn emit_startup_event(&mut self) {
        let event: Event =
            WindowResizeEvent::new(self.config.window_width, self.config.window_height).into();

        if event.is_in_category(EventCategory::APPLICATION) {
            log::trace!("{event}");
        }
        if event.is_in_category(EventCategory::INPUT) {
            log::trace!("{event}");
        }
        log::info!("Startup event: {event} {:?}", event.category_flags());

        if self.emit(event) {
            log::debug!("Startup event handled by the application.");
        }
    }

    fn run_frames(&mut self) {
        let frame_budget = match self.config.tick_rate_hz {
            0 => None,
            hz => Some(Duration::from_secs_f64(1.0 / f64::from(hz))),
        };

        let start = Instant::now();
        let mut last_frame = start;

        loop {
            if self
                .config
                .max_frames
                .is_some_and(|max| self.summary.frames >= max)
            {
                log::info!("Frame limit of {} reached.", self.summary.frames);
                break;
            }
            if self.app.should_exit() {
                log::info!("Application requested exit.");
                break;
            }

            let frame_start = Instant::now();
            let frame = FrameContext {
                frame: self.summary.frames,
                delta: frame_start - last_frame,
                elapsed: frame_start - start,
            };
            last_frame = frame_start;

            self.emit(AppTickEvent);
            self.emit(AppUpdateEvent);
            self.app.update(&frame);
            self.emit(AppRenderEvent);
            self.summary.frames += 1;

            if let Some(budget) = frame_budget {
                let spent = frame_start.elapsed();
                if spent < budget {
                    std::thread::sleep(budget - spent);
                }
            }
        }
    }
}

impl<A: Application> Drop for EngineState<A> {
    fn drop(&mut self) {
        log::info!(
            "'{}' shut down after {} frames.",
            self.config.app_name,
            self.summary.frames
        );
    }
}

/// The public entry point of Kestrel.
pub struct Engine;

impl Engine {
    /// Runs an application with the configuration taken from the `KESTREL_*`
    /// environment variables.
    ///
    /// Blocks the current thread until the application exits or the frame limit is
    /// reached. Without a frame limit and with an application that never exits,
    /// this never returns.
    pub fn run<A: Application>() -> Result<RunSummary> {
        let config = EngineConfig::from_env().context("Failed to load engine configuration")?;
        Self::run_with_config::<A>(config)
    }

    /// Runs an application with an explicit configuration.
    pub fn run_with_config<A: Application>(config: EngineConfig) -> Result<RunSummary> {
        config.validate().context("Invalid engine configuration")?;
        log::info!("Kestrel: starting '{}'...", config.app_name);

        let mut state = EngineState {
            app: A::new(&config),
            config,
            summary: RunSummary::default(),
        };

        state.emit_startup_event();
        state.run_frames();
        state.emit(WindowCloseEvent);

        Ok(state.summary)
    }
}
