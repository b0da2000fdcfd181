// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for types that dispatch registry callbacks.

use crate::event::{DeviceEvent, DeviceId};
use crate::state::StatusChange;
use crate::subscription::{CallbackRegistry, SubscriptionId};
use crate::types::DeviceKind;

/// Trait for types that support callback subscriptions.
///
/// Implementors only provide [`callbacks`](Self::callbacks); the
/// registration methods forward to it.
pub trait Subscribable {
    /// Returns the callback registry backing this type.
    fn callbacks(&self) -> &CallbackRegistry;

    /// Subscribes to status changes.
    fn on_status_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StatusChange) + Send + Sync + 'static,
    {
        self.callbacks().on_status_changed(callback)
    }

    /// Subscribes to device creation.
    ///
    /// The callback receives the identifier and kind of the new device.
    fn on_device_created<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceId, DeviceKind) + Send + Sync + 'static,
    {
        self.callbacks().on_device_created(callback)
    }

    /// Subscribes to every event.
    fn on_event<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceEvent) + Send + Sync + 'static,
    {
        self.callbacks().on_event(callback)
    }

    /// Removes a subscription.
    ///
    /// Returns `true` if the subscription existed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks().unsubscribe(id)
    }
}
