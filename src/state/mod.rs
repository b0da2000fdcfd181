// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status change records.
//!
//! A [`StatusChange`] is produced every time a device's status is replaced.
//! It carries enough information to announce the change with the device's
//! kind label, without writing to the terminal.

mod status_change;

pub use status_change::StatusChange;
