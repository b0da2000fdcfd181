// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::event::DEFAULT_CHANNEL_CAPACITY;

/// Largest accepted event bus capacity.
pub const MAX_EVENT_CAPACITY: usize = 1 << 16;

/// Configuration for a [`DeviceRegistry`](super::DeviceRegistry).
///
/// # Examples
///
/// ```
/// use device_registry::registry::RegistryConfig;
///
/// let config = RegistryConfig::new().with_event_capacity(64);
/// assert_eq!(config.event_capacity, 64);
///
/// // Missing fields fall back to their defaults
/// let config = RegistryConfig::from_json("{}").unwrap();
/// assert_eq!(config, RegistryConfig::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Number of events buffered per subscriber before it starts lagging.
    pub event_capacity: usize,
}

impl RegistryConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the event bus capacity.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input or unknown fields,
    /// and any error reported by [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroEventCapacity`] if the event capacity is
    /// zero, or [`ConfigError::EventCapacityTooLarge`] if it exceeds
    /// [`MAX_EVENT_CAPACITY`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.event_capacity {
            0 => Err(ConfigError::ZeroEventCapacity),
            n if n > MAX_EVENT_CAPACITY => Err(ConfigError::EventCapacityTooLarge(n)),
            _ => Ok(()),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity() {
        assert_eq!(RegistryConfig::default().event_capacity, 256);
    }

    #[test]
    fn builder_sets_capacity() {
        let config = RegistryConfig::new().with_event_capacity(8);
        assert_eq!(config.event_capacity, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = RegistryConfig::new().with_event_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroEventCapacity)
        ));
    }

    #[test]
    fn from_json_reads_fields() {
        let config = RegistryConfig::from_json(r#"{"event_capacity": 16}"#).unwrap();
        assert_eq!(config.event_capacity, 16);
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let result = RegistryConfig::from_json(r#"{"capacity": 16}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn oversized_capacity_is_rejected() {
        let config = RegistryConfig::new().with_event_capacity(MAX_EVENT_CAPACITY + 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EventCapacityTooLarge(n)) if n == MAX_EVENT_CAPACITY + 1
        ));
        assert!(
            RegistryConfig::new()
                .with_event_capacity(MAX_EVENT_CAPACITY)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn from_json_rejects_usize_max_capacity() {
        let result = RegistryConfig::from_json(r#"{"event_capacity": 18446744073709551615}"#);
        assert!(matches!(
            result,
            Err(ConfigError::EventCapacityTooLarge(_) | ConfigError::Json(_))
        ));
    }

    #[test]
    fn from_json_validates() {
        let result = RegistryConfig::from_json(r#"{"event_capacity": 0}"#);
        assert!(matches!(result, Err(ConfigError::ZeroEventCapacity)));
    }
}
