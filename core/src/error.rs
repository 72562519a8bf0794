// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use thiserror::Error;

use crate::Weekday;

/// Errors raised while validating or transforming a course schedule.
///
/// Every variant is a deterministic function of the input; the crate never
/// substitutes a fallback value for malformed scheduling data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Two slots of one schedule occupy the same (day, period) cell.
    #[error("duplicate slot on {day} at period {period}")]
    DuplicateSlot {
        /// Day carried by the colliding slots.
        day: Weekday,
        /// Period carried by the colliding slots.
        period: u8,
    },

    /// A period index falls outside the module time table.
    #[error("period {0} is outside the module time table")]
    OutOfRange(u8),

    /// A term that ends before it starts.
    #[error("term ends on {last_day} before it starts on {first_day}")]
    InvalidTerm {
        /// First day of the term.
        first_day: NaiveDate,
        /// Last day of the term.
        last_day: NaiveDate,
    },

    /// A block without any day or period to anchor its first occurrence.
    /// Consolidated blocks always carry both, so this is defensive.
    #[error("block has no day or period to anchor its first occurrence")]
    NoMatchingStart,
}
