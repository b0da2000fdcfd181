// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device registry.
//!
//! The [`DeviceRegistry`] owns every device, keyed by identifier, and
//! exposes four operations:
//!
//! - **create**: [`create_device`](DeviceRegistry::create_device) registers a
//!   device, replacing any device already using the identifier
//! - **control**: [`control_device`](DeviceRegistry::control_device) replaces
//!   a device's status and announces the change
//! - **query**: [`get_status`](DeviceRegistry::get_status) reads the status
//! - **enumerate**: [`enumerate`](DeviceRegistry::enumerate) lists every
//!   device with its status
//!
//! # Examples
//!
//! ```
//! use device_registry::registry::DeviceRegistry;
//! use device_registry::event::DeviceEvent;
//!
//! let registry = DeviceRegistry::new();
//! let mut events = registry.subscribe();
//!
//! registry.create_device("motor", "m1", "stopped")?;
//! registry.control_device("m1", "running")?;
//!
//! assert_eq!(registry.get_status("m1")?, "running");
//!
//! let _created = events.try_recv().unwrap();
//! match events.try_recv().unwrap() {
//!     DeviceEvent::StatusChanged(change) => {
//!         assert_eq!(change.to_string(), "MotorDevice m1 status changed to running");
//!     }
//!     other => panic!("unexpected event: {other:?}"),
//! }
//! # Ok::<(), device_registry::Error>(())
//! ```

mod device_registry;
mod registry_config;

pub use device_registry::DeviceRegistry;
pub use registry_config::{MAX_EVENT_CAPACITY, RegistryConfig};
