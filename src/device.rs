// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A registered device.

use serde::{Deserialize, Serialize};

use crate::event::DeviceId;
use crate::state::StatusChange;
use crate::types::DeviceKind;

/// A device held by a [`DeviceRegistry`](crate::registry::DeviceRegistry).
///
/// Sensors, motors and relays share this one type; the [`DeviceKind`] only
/// changes the label used to announce status changes. Values handed out by
/// the registry are snapshots, mutating them does not affect the registry.
///
/// # Examples
///
/// ```
/// use device_registry::Device;
/// use device_registry::types::DeviceKind;
///
/// let mut device = Device::new("r1", DeviceKind::Relay, "off");
/// let change = device.apply_status("on");
///
/// assert_eq!(device.status(), "on");
/// assert_eq!(change.to_string(), "RelayDevice r1 status changed to on");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    id: DeviceId,
    kind: DeviceKind,
    status: String,
}

impl Device {
    /// Creates a device with its initial status.
    #[must_use]
    pub fn new(id: impl Into<DeviceId>, kind: DeviceKind, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            status: status.into(),
        }
    }

    /// Returns the device identifier.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    /// Returns the device kind.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replaces the status and returns the announcement record.
    ///
    /// Any string is accepted, including the current status.
    pub fn apply_status(&mut self, new_status: impl Into<String>) -> StatusChange {
        let previous = std::mem::replace(&mut self.status, new_status.into());
        StatusChange::new(self.id.clone(), self.kind, previous, self.status.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_device_keeps_fields() {
        let device = Device::new("s1", DeviceKind::Sensor, "idle");
        assert_eq!(device.id().as_str(), "s1");
        assert_eq!(device.kind(), DeviceKind::Sensor);
        assert_eq!(device.status(), "idle");
    }

    #[test]
    fn apply_status_replaces_and_reports_previous() {
        let mut device = Device::new("m1", DeviceKind::Motor, "stopped");

        let change = device.apply_status("running");

        assert_eq!(device.status(), "running");
        assert_eq!(change.previous, "stopped");
        assert_eq!(change.status, "running");
        assert_eq!(change.kind, DeviceKind::Motor);
        assert_eq!(change.device_id, DeviceId::new("m1"));
    }

    #[test]
    fn apply_status_accepts_any_string() {
        let mut device = Device::new("r1", DeviceKind::Relay, "off");

        device.apply_status("");
        assert_eq!(device.status(), "");

        device.apply_status("¯\\_(ツ)_/¯ 42");
        assert_eq!(device.status(), "¯\\_(ツ)_/¯ 42");
    }

    #[test]
    fn repeated_identical_status_is_still_announced() {
        let mut device = Device::new("r1", DeviceKind::Relay, "on");
        let change = device.apply_status("on");
        assert!(change.is_unchanged());
        assert_eq!(change.to_string(), "RelayDevice r1 status changed to on");
    }

    #[test]
    fn label_follows_kind() {
        for kind in DeviceKind::ALL {
            let mut device = Device::new("x", kind, "a");
            let change = device.apply_status("b");
            assert!(change.to_string().starts_with(kind.label()));
        }
    }
}
