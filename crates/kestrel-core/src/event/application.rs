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

//! Run-loop events emitted once per frame.

use super::Event;

/// A fixed-rate tick, emitted first in every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = AppTick, category = APPLICATION)]
pub struct AppTickEvent;

/// The logic update of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = AppUpdate, category = APPLICATION)]
pub struct AppUpdateEvent;

/// The render pass of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Event)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[event(kind = AppRender, category = APPLICATION)]
pub struct AppRenderEvent;
