// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the device registry.
//!
//! Registry operations return [`Error`]. Failures of the outbound
//! [`DeviceLink`](crate::link::DeviceLink) are reported with the separate
//! [`LinkError`] type and never surface as an [`Error`].

use thiserror::Error;

use crate::event::DeviceId;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value supplied by the caller could not be interpreted.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// No device is registered under the given identifier.
    #[error("device not found: {0}")]
    DeviceNotFound(DeviceId),

    /// The registry configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The device kind tag is not one of `sensor`, `motor` or `relay`.
    #[error("device type not recognized: {0}")]
    UnrecognizedKind(String),
}

/// Errors related to registry configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The event bus needs room for at least one event.
    #[error("event capacity must be greater than zero")]
    ZeroEventCapacity,

    #[error("event capacity {0} exceeds the maximum of {max}", max = crate::registry::MAX_EVENT_CAPACITY)]
    EventCapacityTooLarge(usize),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by an outbound device link.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The remote device could not be reached.
    #[error("device unreachable: {0}")]
    Unreachable(String),

    /// The remote device refused the status.
    #[error("status rejected: {0}")]
    Rejected(String),

    /// The remote device did not answer in time.
    #[error("link timed out after {0} ms")]
    Timeout(u64),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
