// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for registry notifications.
//!
//! The [`EventBus`] uses tokio's broadcast channel so that any number of
//! subscribers can observe device creation and status changes.
//!
//! # Examples
//!
//! ```
//! use device_registry::event::{DeviceEvent, DeviceId, EventBus};
//! use device_registry::types::DeviceKind;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(DeviceEvent::device_created(DeviceId::new("s1"), DeviceKind::Sensor, "idle", None));
//! assert!(rx.try_recv().is_ok());
//! ```

mod device_event;
mod device_id;
mod event_bus;

pub use device_event::DeviceEvent;
pub use device_id::DeviceId;
pub use event_bus::EventBus;
pub(crate) use event_bus::DEFAULT_CHANNEL_CAPACITY;
