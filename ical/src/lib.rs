// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Serialize synthesized course events into the iCalendar interchange form.
//!
//! The `ucalendar-core` crate describes recurring events in the
//! institution's civil timezone; this crate turns them into `VEVENT`
//! components with weekly recurrence rules and holiday exclusion dates, and
//! assembles the export calendar.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod calendar;
mod event;
pub mod keyword;

pub use crate::calendar::calendar;
pub use crate::event::{TIMEZONE, event, weekday_token};
