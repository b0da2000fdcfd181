// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback subscriptions for registry events.
//!
//! Callbacks are the synchronous counterpart of the
//! [`EventBus`](crate::event::EventBus): they run on the caller's thread
//! right after the registry operation that produced the event.
//!
//! - [`SubscriptionId`] - Identifier returned on registration, used to unsubscribe
//! - [`CallbackRegistry`] - Stores callbacks and dispatches events to them
//! - [`Subscribable`] - Trait for types exposing a callback registry
//!
//! # Usage
//!
//! ```
//! use device_registry::DeviceRegistry;
//! use device_registry::subscription::Subscribable;
//!
//! let registry = DeviceRegistry::new();
//! let sub_id = registry.on_status_changed(|change| {
//!     println!("{change}");
//! });
//!
//! registry.create_device("sensor", "s1", "idle").unwrap();
//! registry.control_device("s1", "active").unwrap();
//!
//! assert!(registry.unsubscribe(sub_id));
//! ```

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
