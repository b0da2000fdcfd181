// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device Registry - a typed in-memory registry of sensor, motor and relay
//! devices.
//!
//! Devices are created under caller-chosen identifiers, carry a free-text
//! status, and announce every status change as a [`DeviceEvent`] instead of
//! printing it.
//!
//! # Supported Operations
//!
//! - **Create**: register a sensor, motor or relay, replacing any device
//!   already using the identifier
//! - **Control**: replace a device status and announce the change
//! - **Query**: read the status of a device
//! - **Enumerate**: list every device with its status
//!
//! # Quick Start
//!
//! ```
//! use device_registry::DeviceRegistry;
//!
//! fn main() -> device_registry::Result<()> {
//!     let registry = DeviceRegistry::new();
//!
//!     registry.create_device("sensor", "hall-temp", "idle")?;
//!     registry.control_device("hall-temp", "reading")?;
//!
//!     for (id, status) in registry.enumerate() {
//!         println!("Device ID: {id}, Status: {status}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Observing Status Changes
//!
//! Changes can be observed through a broadcast receiver or a callback:
//!
//! ```
//! use device_registry::{DeviceEvent, DeviceRegistry, Subscribable};
//!
//! let registry = DeviceRegistry::new();
//! let mut events = registry.subscribe();
//!
//! registry.on_status_changed(|change| {
//!     println!("{change}");
//! });
//!
//! registry.create_device("relay", "porch", "off").unwrap();
//! registry.control_device("porch", "on").unwrap();
//!
//! while let Ok(event) = events.try_recv() {
//!     if let DeviceEvent::StatusChanged(change) = event {
//!         assert_eq!(change.to_string(), "RelayDevice porch status changed to on");
//!     }
//! }
//! ```

mod device;
pub mod error;
pub mod event;
pub mod link;
pub mod registry;
pub mod state;
pub mod subscription;
pub mod types;

pub use device::Device;
pub use error::{ConfigError, Error, LinkError, Result, ValueError};
pub use event::{DeviceEvent, DeviceId, EventBus};
pub use link::{DeviceLink, TracingLink};
pub use registry::{DeviceRegistry, MAX_EVENT_CAPACITY, RegistryConfig};
pub use state::StatusChange;
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::DeviceKind;
