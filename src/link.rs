// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound link to the physical devices.
//!
//! A [`DeviceLink`] is told about every status change the registry
//! applies. The registry never waits for it to succeed: the status change
//! is already committed, and a failure is reported through
//! [`DeviceEvent::LinkFailed`](crate::event::DeviceEvent::LinkFailed)
//! instead of the operation's result.
//!
//! This crate ships [`TracingLink`], which only logs. Real transports are
//! provided by the application.

use std::sync::Arc;

use crate::error::LinkError;
use crate::event::DeviceId;
use crate::types::DeviceKind;

/// Forwards applied status changes to an external device.
///
/// # Examples
///
/// ```
/// use device_registry::DeviceRegistry;
/// use device_registry::error::LinkError;
/// use device_registry::event::DeviceId;
/// use device_registry::link::DeviceLink;
/// use device_registry::types::DeviceKind;
///
/// struct Offline;
///
/// impl DeviceLink for Offline {
///     fn forward(&self, id: &DeviceId, _: DeviceKind, _: &str) -> Result<(), LinkError> {
///         Err(LinkError::Unreachable(id.to_string()))
///     }
/// }
///
/// let registry = DeviceRegistry::new().with_link(Offline);
/// registry.create_device("relay", "r1", "off").unwrap();
///
/// // The status change succeeds even though the link fails
/// registry.control_device("r1", "on").unwrap();
/// assert_eq!(registry.get_status("r1").unwrap(), "on");
/// ```
pub trait DeviceLink: Send + Sync {
    /// Delivers a status change that has already been applied.
    ///
    /// # Errors
    ///
    /// Returns a [`LinkError`] if the change could not be delivered.
    fn forward(&self, device_id: &DeviceId, kind: DeviceKind, status: &str)
    -> Result<(), LinkError>;
}

impl<T: DeviceLink + ?Sized> DeviceLink for Arc<T> {
    fn forward(
        &self,
        device_id: &DeviceId,
        kind: DeviceKind,
        status: &str,
    ) -> Result<(), LinkError> {
        (**self).forward(device_id, kind, status)
    }
}

/// A link that records each forwarded change as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLink;

impl DeviceLink for TracingLink {
    fn forward(
        &self,
        device_id: &DeviceId,
        kind: DeviceKind,
        status: &str,
    ) -> Result<(), LinkError> {
        tracing::debug!(%device_id, %kind, status, "Forwarding status to device");
        Ok(())
    }
}
