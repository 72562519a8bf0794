// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{Category, Weekday};

/// One (day, period) occupancy of a course schedule.
///
/// Invariant: within one schedule no two slots share the same day and
/// period. [`crate::consolidate`] rejects input violating this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Day of the week the module meets.
    pub day: Weekday,

    /// Module index within the day, 0 through 8.
    pub period: u8,

    /// Activity held during the module.
    pub category: Category,

    /// Room identifier, when the institution assigns one.
    pub room: Option<String>,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: Weekday, period: u8, category: Category, room: Option<String>) -> Self {
        Self {
            day,
            period,
            category,
            room,
        }
    }

    /// The compact preview form of this slot.
    pub fn compact(&self) -> CompactSlot {
        CompactSlot {
            category: self.category,
            day: self.day.index(),
            period: self.period,
        }
    }
}

/// Minimal per-module detail used by lightweight schedule previews,
/// independent of the consolidated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactSlot {
    /// Activity category.
    #[serde(rename = "c")]
    pub category: Category,

    /// Day index, 0 = Monday.
    #[serde(rename = "d")]
    pub day: u8,

    /// Module index within the day.
    #[serde(rename = "m")]
    pub period: u8,
}
