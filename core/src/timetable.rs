// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The institutional module time table.
//!
//! A fixed domain constant: nine daily modules, each starting at a known
//! wall-clock time and lasting 70 minutes. The table is baked in and never
//! read from configuration.

use chrono::{Duration, NaiveTime};

use crate::ScheduleError;

/// Number of daily modules.
pub const PERIOD_COUNT: u8 = 9;

/// Wall-clock start of each module as (hour, minute).
const PERIOD_STARTS: [(u32, u32); PERIOD_COUNT as usize] = [
    (8, 20),
    (9, 40),
    (11, 0),
    (12, 20),
    (14, 50),
    (16, 10),
    (17, 30),
    (18, 50),
    (20, 10),
];

/// How long a single module lasts.
pub fn period_length() -> Duration {
    Duration::minutes(70)
}

/// Civil start time of the given module.
///
/// Fails with [`ScheduleError::OutOfRange`] when `period` is not a module
/// index of the institution.
pub fn start_of(period: u8) -> Result<NaiveTime, ScheduleError> {
    let (hour, min) = *PERIOD_STARTS
        .get(period as usize)
        .ok_or(ScheduleError::OutOfRange(period))?;
    Ok(NaiveTime::from_hms_opt(hour, min, 0).expect("module start times are valid clock times"))
}
