// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registry owning all devices.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::device::Device;
use crate::error::{Error, Result};
use crate::event::{DeviceEvent, DeviceId, EventBus};
use crate::link::DeviceLink;
use crate::state::StatusChange;
use crate::subscription::{CallbackRegistry, Subscribable};
use crate::types::DeviceKind;

use super::RegistryConfig;

/// Registry of sensor, motor and relay devices.
///
/// The registry is the only owner of its devices: every device is stored
/// under its own identifier, and callers only receive copies. All entries
/// sit behind a single lock. Broadcast events are published while the
/// lock is held, so subscribers see changes in the order they were
/// applied. The lock is released before callbacks run or the
/// [`DeviceLink`] is called.
///
/// Cloning a registry yields another handle to the same devices, event
/// bus and callbacks.
///
/// # Notifications
///
/// Every successful create or control operation produces a
/// [`DeviceEvent`], delivered to
/// - broadcast subscribers obtained from [`subscribe`](Self::subscribe)
/// - callbacks registered through [`Subscribable`]
///
/// # Examples
///
/// ```
/// use device_registry::{DeviceRegistry, Error};
/// use device_registry::error::ValueError;
///
/// let registry = DeviceRegistry::new();
///
/// registry.create_device("sensor", "s1", "idle")?;
/// registry.create_device("relay", "r1", "off")?;
/// registry.control_device("r1", "on")?;
///
/// assert_eq!(registry.get_status("r1")?, "on");
/// assert_eq!(registry.enumerate().len(), 2);
///
/// assert!(matches!(
///     registry.create_device("lamp", "l1", "off"),
///     Err(Error::Value(ValueError::UnrecognizedKind(_)))
/// ));
/// assert!(matches!(registry.get_status("l1"), Err(Error::DeviceNotFound(_))));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone)]
pub struct DeviceRegistry {
    /// Devices keyed by identifier.
    devices: Arc<RwLock<HashMap<DeviceId, Device>>>,
    /// Broadcast channel for device events.
    event_bus: EventBus,
    /// Synchronous subscription callbacks.
    callbacks: Arc<CallbackRegistry>,
    /// Optional outbound link notified after status changes.
    link: Option<Arc<dyn DeviceLink>>,
}

impl DeviceRegistry {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(&RegistryConfig::default())
    }

    /// Creates an empty registry from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn with_config(config: &RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &RegistryConfig) -> Self {
        Self {
            devices: Arc::new(RwLock::new(HashMap::new())),
            event_bus: EventBus::with_capacity(config.event_capacity),
            callbacks: Arc::new(CallbackRegistry::new()),
            link: None,
        }
    }

    /// Attaches an outbound link notified after every status change.
    #[must_use]
    pub fn with_link(mut self, link: impl DeviceLink + 'static) -> Self {
        self.link = Some(Arc::new(link));
        self
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribes to device events.
    ///
    /// The receiver gets every event published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DeviceEvent> {
        self.event_bus.subscribe()
    }

    /// Returns the number of active event subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.event_bus.subscriber_count()
    }

    // =========================================================================
    // Create
    // =========================================================================

    /// Creates a device from a kind tag (`sensor`, `motor` or `relay`).
    ///
    /// A device already registered under `device_id` is replaced without
    /// warning; its kind and status are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] with
    /// [`ValueError::UnrecognizedKind`](crate::error::ValueError::UnrecognizedKind)
    /// if `kind` is not a known tag. The registry is left unchanged.
    pub fn create_device(
        &self,
        kind: &str,
        device_id: impl Into<DeviceId>,
        initial_status: impl Into<String>,
    ) -> Result<()> {
        let kind = kind.parse::<DeviceKind>().inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected device creation");
        })?;
        self.add_device(kind, device_id, initial_status);
        Ok(())
    }

    /// Registers a device of a known kind.
    ///
    /// Returns the device previously registered under the same identifier,
    /// if any.
    pub fn add_device(
        &self,
        kind: DeviceKind,
        device_id: impl Into<DeviceId>,
        initial_status: impl Into<String>,
    ) -> Option<Device> {
        let device = Device::new(device_id, kind, initial_status);
        let device_id = device.id().clone();
        let status = device.status().to_string();

        let (replaced, event) = {
            let mut devices = self.devices.write();
            let replaced = devices.insert(device_id.clone(), device);
            let event = DeviceEvent::device_created(
                device_id.clone(),
                kind,
                status.clone(),
                replaced.as_ref().map(Device::kind),
            );
            self.publish(event.clone());
            (replaced, event)
        };

        if let Some(previous) = &replaced {
            tracing::debug!(
                %device_id,
                previous_kind = %previous.kind(),
                %kind,
                "Replacing existing device"
            );
        }
        tracing::debug!(%device_id, %kind, %status, "Device created");

        self.callbacks.dispatch(&event);

        replaced
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Replaces the status of a device and announces the change.
    ///
    /// Any string is accepted. After the change is applied it is published
    /// as [`DeviceEvent::StatusChanged`] and forwarded to the link, if one
    /// is attached. Link failures do not affect the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if no device uses `device_id`.
    /// Nothing is published in that case.
    pub fn control_device(
        &self,
        device_id: impl AsRef<str>,
        new_status: impl Into<String>,
    ) -> Result<()> {
        let device_id = device_id.as_ref();

        // Broadcast under the lock: subscribers observe changes in apply order
        let (change, event) = {
            let mut devices = self.devices.write();
            let device = devices
                .get_mut(device_id)
                .ok_or_else(|| not_found(device_id))?;
            let change = device.apply_status(new_status);
            let event = DeviceEvent::status_changed(change.clone());
            self.publish(event.clone());
            (change, event)
        };

        tracing::info!(
            device_id = %change.device_id,
            kind = %change.kind,
            status = %change.status,
            "{change}"
        );

        self.callbacks.dispatch(&event);
        self.forward(&change);

        Ok(())
    }

    // =========================================================================
    // Query
    // =========================================================================

    /// Returns the current status of a device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if no device uses `device_id`.
    pub fn get_status(&self, device_id: impl AsRef<str>) -> Result<String> {
        let device_id = device_id.as_ref();
        self.devices
            .read()
            .get(device_id)
            .map(|d| d.status().to_string())
            .ok_or_else(|| not_found(device_id))
    }

    /// Returns the kind of a device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if no device uses `device_id`.
    pub fn kind(&self, device_id: impl AsRef<str>) -> Result<DeviceKind> {
        let device_id = device_id.as_ref();
        self.devices
            .read()
            .get(device_id)
            .map(Device::kind)
            .ok_or_else(|| not_found(device_id))
    }

    /// Returns a snapshot of a device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if no device uses `device_id`.
    pub fn device(&self, device_id: impl AsRef<str>) -> Result<Device> {
        let device_id = device_id.as_ref();
        self.devices
            .read()
            .get(device_id)
            .cloned()
            .ok_or_else(|| not_found(device_id))
    }

    /// Returns `true` if a device uses `device_id`.
    #[must_use]
    pub fn contains(&self, device_id: impl AsRef<str>) -> bool {
        self.devices.read().contains_key(device_id.as_ref())
    }

    // =========================================================================
    // Enumerate
    // =========================================================================

    /// Lists every device with its current status, sorted by identifier.
    ///
    /// Each call reads the registry afresh.
    #[must_use]
    pub fn enumerate(&self) -> Vec<(DeviceId, String)> {
        let mut entries: Vec<(DeviceId, String)> = self
            .devices
            .read()
            .values()
            .map(|d| (d.id().clone(), d.status().to_string()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Returns snapshots of every device, sorted by identifier.
    #[must_use]
    pub fn devices(&self) -> Vec<Device> {
        let mut devices: Vec<Device> = self.devices.read().values().cloned().collect();
        devices.sort_unstable_by(|a, b| a.id().cmp(b.id()));
        devices
    }

    /// Returns every identifier, sorted.
    #[must_use]
    pub fn device_ids(&self) -> Vec<DeviceId> {
        let mut ids: Vec<DeviceId> = self.devices.read().keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the number of registered devices.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.devices.read().len()
    }

    /// Returns `true` if no device is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Sends an event to broadcast subscribers.
    fn publish(&self, event: DeviceEvent) {
        let receivers = self.event_bus.publish(event);
        tracing::trace!(receivers, "Published device event");
    }

    /// Hands an applied change to the link and reports failures as events.
    fn forward(&self, change: &StatusChange) {
        let Some(link) = &self.link else {
            return;
        };

        if let Err(e) = link.forward(&change.device_id, change.kind, &change.status) {
            tracing::warn!(
                device_id = %change.device_id,
                error = %e,
                "Failed to forward status change"
            );
            let event = DeviceEvent::link_failed(change.device_id.clone(), e.to_string());
            self.callbacks.dispatch(&event);
            self.publish(event);
        }
    }
}

fn not_found(device_id: &str) -> Error {
    Error::DeviceNotFound(DeviceId::from(device_id))
}

impl Subscribable for DeviceRegistry {
    fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DeviceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceRegistry")
            .field("device_count", &self.device_count())
            .field("callbacks", &self.callbacks)
            .field("has_link", &self.link.is_some())
            .finish_non_exhaustive()
    }
}
