// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device kind tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The variant of a registered device.
///
/// All kinds behave identically; the kind only selects the label used
/// when a status change is announced.
///
/// # Examples
///
/// ```
/// use device_registry::types::DeviceKind;
///
/// let kind: DeviceKind = "motor".parse().unwrap();
/// assert_eq!(kind, DeviceKind::Motor);
/// assert_eq!(kind.label(), "MotorDevice");
///
/// assert!("lamp".parse::<DeviceKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// A sensing device.
    Sensor,
    /// A motor or actuator.
    Motor,
    /// A switching relay.
    Relay,
}

impl DeviceKind {
    /// All known kinds.
    pub const ALL: [Self; 3] = [Self::Sensor, Self::Motor, Self::Relay];

    /// Returns the tag accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sensor => "sensor",
            Self::Motor => "motor",
            Self::Relay => "relay",
        }
    }

    /// Returns the label used when announcing a status change.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sensor => "SensorDevice",
            Self::Motor => "MotorDevice",
            Self::Relay => "RelayDevice",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sensor" => Ok(Self::Sensor),
            "motor" => Ok(Self::Motor),
            "relay" => Ok(Self::Relay),
            _ => Err(ValueError::UnrecognizedKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tags() {
        assert_eq!("sensor".parse::<DeviceKind>(), Ok(DeviceKind::Sensor));
        assert_eq!("motor".parse::<DeviceKind>(), Ok(DeviceKind::Motor));
        assert_eq!("relay".parse::<DeviceKind>(), Ok(DeviceKind::Relay));
    }

    #[test]
    fn parse_requires_exact_tag() {
        for tag in ["SENSOR", "Motor", " relay", "relay "] {
            assert_eq!(
                tag.parse::<DeviceKind>(),
                Err(ValueError::UnrecognizedKind(tag.to_string()))
            );
        }
    }

    #[test]
    fn parse_unknown_tag_keeps_input() {
        let err = "bogus-kind".parse::<DeviceKind>().unwrap_err();
        assert_eq!(err, ValueError::UnrecognizedKind("bogus-kind".to_string()));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in DeviceKind::ALL {
            assert_eq!(kind.to_string().parse::<DeviceKind>(), Ok(kind));
        }
    }

    #[test]
    fn labels_are_distinct() {
        assert_eq!(DeviceKind::Sensor.label(), "SensorDevice");
        assert_eq!(DeviceKind::Motor.label(), "MotorDevice");
        assert_eq!(DeviceKind::Relay.label(), "RelayDevice");
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&DeviceKind::Relay).unwrap();
        assert_eq!(json, "\"relay\"");
        let kind: DeviceKind = serde_json::from_str("\"motor\"").unwrap();
        assert_eq!(kind, DeviceKind::Motor);
    }
}
