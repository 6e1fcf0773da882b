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

//! # Kestrel Core
//!
//! Foundational crate containing the event taxonomy, the category bitmask and
//! the synchronous event dispatcher shared by every other Kestrel crate.

#![warn(missing_docs)]

// Lets `#[derive(Event)]` expand to `::kestrel_core::...` paths inside this crate too.
extern crate self as kestrel_core;

pub mod event;
pub mod utils;

pub use event::{Event, EventCategory, EventDispatcher, EventKind, EventType};
