// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for registry subscriptions.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::event::{DeviceEvent, DeviceId};
use crate::state::StatusChange;
use crate::types::DeviceKind;

/// Unique identifier for a subscription.
///
/// Returned when a callback is registered and used to unsubscribe later.
/// IDs are unique within one [`CallbackRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

type StatusChangedCallback = Arc<dyn Fn(&StatusChange) + Send + Sync>;

type DeviceCreatedCallback = Arc<dyn Fn(&DeviceId, DeviceKind) + Send + Sync>;

type EventCallback = Arc<dyn Fn(&DeviceEvent) + Send + Sync>;

/// Registry of subscription callbacks.
///
/// Thread-safe through `parking_lot::RwLock`. Callbacks are cloned out of
/// the lock before they run, so a callback may itself subscribe or
/// unsubscribe.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    status_changed_callbacks: RwLock<HashMap<SubscriptionId, StatusChangedCallback>>,
    device_created_callbacks: RwLock<HashMap<SubscriptionId, DeviceCreatedCallback>>,
    event_callbacks: RwLock<HashMap<SubscriptionId, EventCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            status_changed_callbacks: RwLock::new(HashMap::new()),
            device_created_callbacks: RwLock::new(HashMap::new()),
            event_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for status changes.
    pub fn on_status_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StatusChange) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.status_changed_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for device creation.
    pub fn on_device_created<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceId, DeviceKind) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.device_created_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback receiving every event.
    pub fn on_event<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceEvent) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.event_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.status_changed_callbacks.write().remove(&id).is_some()
            || self.device_created_callbacks.write().remove(&id).is_some()
            || self.event_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.status_changed_callbacks.write().clear();
        self.device_created_callbacks.write().clear();
        self.event_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatches an event to the matching callbacks.
    ///
    /// Callbacks run synchronously in an arbitrary order.
    pub fn dispatch(&self, event: &DeviceEvent) {
        let generic: Vec<EventCallback> = self.event_callbacks.read().values().cloned().collect();
        for callback in generic {
            callback(event);
        }

        match event {
            DeviceEvent::StatusChanged(change) => {
                let callbacks: Vec<StatusChangedCallback> = self
                    .status_changed_callbacks
                    .read()
                    .values()
                    .cloned()
                    .collect();
                for callback in callbacks {
                    callback(change);
                }
            }
            DeviceEvent::DeviceCreated {
                device_id, kind, ..
            } => {
                let callbacks: Vec<DeviceCreatedCallback> = self
                    .device_created_callbacks
                    .read()
                    .values()
                    .cloned()
                    .collect();
                for callback in callbacks {
                    callback(device_id, *kind);
                }
            }
            DeviceEvent::LinkFailed { .. } => {
                // Only observable through generic event callbacks
            }
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.status_changed_callbacks.read().len()
            + self.device_created_callbacks.read().len()
            + self.event_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    fn status_event(id: &str, status: &str) -> DeviceEvent {
        DeviceEvent::status_changed(StatusChange::new(
            DeviceId::new(id),
            DeviceKind::Motor,
            "before",
            status,
        ))
    }

    #[test]
    fn subscription_id_display() {
        assert_eq!(SubscriptionId::new(42).to_string(), "Sub(42)");
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.callback_count(), 0);
    }

    #[test]
    fn ids_are_unique() {
        let registry = CallbackRegistry::new();
        let a = registry.on_event(|_| {});
        let b = registry.on_status_changed(|_| {});
        let c = registry.on_device_created(|_, _| {});
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn status_callback_receives_change() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(None::<StatusChange>));
        let received_clone = Arc::clone(&received);

        registry.on_status_changed(move |change| {
            *received_clone.write() = Some(change.clone());
        });

        registry.dispatch(&status_event("m1", "running"));

        let change = received.read().clone().unwrap();
        assert_eq!(change.status, "running");
        assert_eq!(change.kind, DeviceKind::Motor);
    }

    #[test]
    fn created_callback_ignores_status_events() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = Arc::clone(&counter);

        registry.on_device_created(move |id, kind| {
            assert_eq!(id.as_str(), "r1");
            assert_eq!(kind, DeviceKind::Relay);
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&status_event("m1", "x"));
        registry.dispatch(&DeviceEvent::device_created(
            DeviceId::new("r1"),
            DeviceKind::Relay,
            "off",
            None,
        ));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn event_callback_sees_everything() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = Arc::clone(&counter);

        registry.on_event(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&status_event("a", "1"));
        registry.dispatch(&DeviceEvent::link_failed(DeviceId::new("a"), "down"));
        registry.dispatch(&DeviceEvent::device_created(
            DeviceId::new("b"),
            DeviceKind::Sensor,
            "",
            None,
        ));

        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = Arc::clone(&counter);

        let id = registry.on_status_changed(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&status_event("a", "1"));
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        registry.dispatch(&status_event("a", "2"));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn callback_may_unsubscribe_itself() {
        let registry = Arc::new(CallbackRegistry::new());
        let own_id = Arc::new(RwLock::new(None::<SubscriptionId>));

        let registry_clone = Arc::clone(&registry);
        let own_id_clone = Arc::clone(&own_id);
        let id = registry.on_event(move |_| {
            if let Some(id) = *own_id_clone.read() {
                registry_clone.unsubscribe(id);
            }
        });
        *own_id.write() = Some(id);

        registry.dispatch(&status_event("a", "1"));
        assert!(registry.is_empty());
    }

    #[test]
    fn clear_removes_all() {
        let registry = CallbackRegistry::new();
        registry.on_event(|_| {});
        registry.on_status_changed(|_| {});
        registry.on_device_created(|_, _| {});
        assert_eq!(registry.callback_count(), 3);

        registry.clear();
        assert!(registry.is_empty());
    }
}
