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

// Kestrel Sandbox
// Runs forever unless KESTREL_MAX_FRAMES is set.

use anyhow::Result;
use kestrel_sdk::prelude::*;
use std::time::Duration;

struct SandboxApp {
    name: String,
    window_size: (u32, u32),
    ticks: u64,
}

impl Application for SandboxApp {
    fn new(config: &EngineConfig) -> Self {
        log::info!("Sandbox '{}' created.", config.app_name);
        Self {
            name: config.app_name.clone(),
            window_size: (config.window_width, config.window_height),
            ticks: 0,
        }
    }

    fn on_event(&mut self, event: &mut Event) -> bool {
        let mut dispatcher = EventDispatcher::new(event);

        dispatcher.dispatch(|e: &mut WindowResizeEvent| {
            self.window_size = (e.width, e.height);
            log::info!("{e}");
            true
        });
        dispatcher.dispatch(|_: &mut AppTickEvent| {
            self.ticks += 1;
            true
        });
        dispatcher.dispatch(|e: &mut WindowCloseEvent| {
            log::info!("{e}: '{}' closing after {} ticks.", self.name, self.ticks);
            true
        });

        dispatcher.is_handled()
    }

    fn update(&mut self, frame: &FrameContext) {
        if frame.frame.is_multiple_of(60) && frame.elapsed > Duration::ZERO {
            log::debug!(
                "Frame {} at {:.2}s ({}x{})",
                frame.frame,
                frame.elapsed.as_secs_f32(),
                self.window_size.0,
                self.window_size.1
            );
        }
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let summary = Engine::run::<SandboxApp>()?;
    log::info!(
        "Handled {} of {} events over {} frames.",
        summary.events_handled,
        summary.events_dispatched,
        summary.frames
    );
    Ok(())
}
