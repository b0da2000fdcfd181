// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device event types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::StatusChange;
use crate::types::DeviceKind;

use super::DeviceId;

/// Events emitted by the device registry.
///
/// # Examples
///
/// ```
/// use device_registry::event::{DeviceEvent, DeviceId};
/// use device_registry::state::StatusChange;
/// use device_registry::types::DeviceKind;
///
/// let change = StatusChange::new(DeviceId::new("m1"), DeviceKind::Motor, "stopped", "running");
/// let event = DeviceEvent::status_changed(change);
///
/// assert!(event.is_status_change());
/// assert_eq!(event.to_string(), "MotorDevice m1 status changed to running");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceEvent {
    /// A device was created, possibly replacing an earlier one.
    DeviceCreated {
        /// The identifier of the new device.
        device_id: DeviceId,
        /// The kind of the new device.
        kind: DeviceKind,
        /// The initial status.
        status: String,
        /// Kind of the device that previously held this identifier.
        replaced: Option<DeviceKind>,
    },

    /// A device status was replaced.
    StatusChanged(StatusChange),

    /// The outbound link failed to deliver a status change.
    ///
    /// The status change itself has already been applied.
    LinkFailed {
        /// The device whose change could not be forwarded.
        device_id: DeviceId,
        /// Description of the link failure.
        error: String,
    },
}

impl DeviceEvent {
    /// Returns the device ID associated with this event.
    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        match self {
            Self::DeviceCreated { device_id, .. } | Self::LinkFailed { device_id, .. } => device_id,
            Self::StatusChanged(change) => &change.device_id,
        }
    }

    /// Returns `true` if this is a creation event.
    #[must_use]
    pub fn is_creation(&self) -> bool {
        matches!(self, Self::DeviceCreated { .. })
    }

    /// Returns `true` if this is a status change event.
    #[must_use]
    pub fn is_status_change(&self) -> bool {
        matches!(self, Self::StatusChanged(_))
    }

    /// Returns `true` if this is a link failure event.
    #[must_use]
    pub fn is_link_failure(&self) -> bool {
        matches!(self, Self::LinkFailed { .. })
    }

    /// Creates a device created event.
    #[must_use]
    pub fn device_created(
        device_id: DeviceId,
        kind: DeviceKind,
        status: impl Into<String>,
        replaced: Option<DeviceKind>,
    ) -> Self {
        Self::DeviceCreated {
            device_id,
            kind,
            status: status.into(),
            replaced,
        }
    }

    /// Creates a status changed event.
    #[must_use]
    pub fn status_changed(change: StatusChange) -> Self {
        Self::StatusChanged(change)
    }

    /// Creates a link failure event.
    #[must_use]
    pub fn link_failed(device_id: DeviceId, error: impl Into<String>) -> Self {
        Self::LinkFailed {
            device_id,
            error: error.into(),
        }
    }
}

impl fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceCreated {
                device_id,
                kind,
                status,
                ..
            } => write!(f, "{} {device_id} created with status {status}", kind.label()),
            Self::StatusChanged(change) => fmt::Display::fmt(change, f),
            Self::LinkFailed { device_id, error } => {
                write!(f, "link to {device_id} failed: {error}")
            }
        }
    }
}
