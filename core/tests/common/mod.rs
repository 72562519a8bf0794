// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for the schedule integration tests.

use chrono::NaiveDate;
use ucalendar_core::{Category, Slot, Term, Weekday};

/// A date that must exist.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The reference term: 2025-03-03 (a Monday) through 2025-07-04.
pub fn term() -> Term {
    Term::new(date(2025, 3, 3), date(2025, 7, 4))
}

/// A lecture slot in room A1.
pub fn lecture(day: Weekday, period: u8) -> Slot {
    Slot::new(day, period, Category::Lecture, Some("A1".to_string()))
}
