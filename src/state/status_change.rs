// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The record emitted when a device status is replaced.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::DeviceId;
use crate::types::DeviceKind;

/// A single status replacement on a device.
///
/// The [`Display`](fmt::Display) form is the human-readable announcement,
/// e.g. `SensorDevice s1 status changed to active`.
///
/// # Examples
///
/// ```
/// use device_registry::event::DeviceId;
/// use device_registry::state::StatusChange;
/// use device_registry::types::DeviceKind;
///
/// let change = StatusChange::new(DeviceId::new("m1"), DeviceKind::Motor, "idle", "running");
/// assert_eq!(change.to_string(), "MotorDevice m1 status changed to running");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// The device whose status changed.
    pub device_id: DeviceId,
    /// The kind of the device at the time of the change.
    pub kind: DeviceKind,
    /// The status before the change.
    pub previous: String,
    /// The status after the change.
    pub status: String,
}

impl StatusChange {
    /// Creates a new status change record.
    #[must_use]
    pub fn new(
        device_id: DeviceId,
        kind: DeviceKind,
        previous: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            device_id,
            kind,
            previous: previous.into(),
            status: status.into(),
        }
    }

    /// Returns the label of the device kind.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Returns `true` if the new status equals the previous one.
    ///
    /// Such writes are still recorded and announced.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.previous == self.status
    }
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} status changed to {}",
            self.kind.label(),
            self.device_id,
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_uses_kind_label() {
        let change = StatusChange::new(DeviceId::new("r1"), DeviceKind::Relay, "off", "on");
        assert_eq!(change.to_string(), "RelayDevice r1 status changed to on");
        assert_eq!(change.label(), "RelayDevice");
    }

    #[test]
    fn unchanged_detection() {
        let same = StatusChange::new(DeviceId::new("s"), DeviceKind::Sensor, "ok", "ok");
        let different = StatusChange::new(DeviceId::new("s"), DeviceKind::Sensor, "ok", "fault");
        assert!(same.is_unchanged());
        assert!(!different.is_unchanged());
    }

    #[test]
    fn serializes_with_lowercase_kind() {
        let change = StatusChange::new(DeviceId::new("m"), DeviceKind::Motor, "a", "b");
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "device_id": "m",
                "kind": "motor",
                "previous": "a",
                "status": "b"
            })
        );
    }
}
