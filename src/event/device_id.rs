// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identifier type.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier naming a device within a registry.
///
/// Identifiers are caller-chosen strings. A registry holds at most one
/// device per identifier.
///
/// # Examples
///
/// ```
/// use device_registry::event::DeviceId;
///
/// let id = DeviceId::new("kitchen-relay");
/// assert_eq!(id.as_str(), "kitchen-relay");
/// assert_eq!(id, DeviceId::from("kitchen-relay"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&DeviceId> for DeviceId {
    fn from(id: &DeviceId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for DeviceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DeviceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality() {
        assert_eq!(DeviceId::new("a"), DeviceId::from("a"));
        assert_ne!(DeviceId::new("a"), DeviceId::new("A"));
    }

    #[test]
    fn display_format() {
        let id = DeviceId::new("motor-7");
        assert_eq!(id.to_string(), "motor-7");
    }

    #[test]
    fn hashable_and_borrowable() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(DeviceId::new("s1"), 1);
        assert_eq!(map.get("s1"), Some(&1));
    }

    #[test]
    fn ordered_by_string() {
        let mut ids = vec![DeviceId::new("b"), DeviceId::new("a"), DeviceId::new("c")];
        ids.sort();
        assert_eq!(ids, vec![DeviceId::new("a"), DeviceId::new("b"), DeviceId::new("c")]);
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&DeviceId::new("r2")).unwrap();
        assert_eq!(json, "\"r2\"");
    }

    #[test]
    fn empty_identifier_is_allowed() {
        let id = DeviceId::new("");
        assert!(id.as_str().is_empty());
    }
}
