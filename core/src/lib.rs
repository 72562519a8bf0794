// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Course schedules as weekly recurring calendar events.
//!
//! The pipeline: atomic [`Slot`]s are merged by [`consolidate`] into
//! recurring [`Block`]s, which [`synthesize`] turns into
//! [`RecurringEvent`] descriptions bounded by a [`Term`] and punched
//! through by its [`Holiday`]s. Serialization into the interchange format
//! lives in the `ucalendar-ical` crate.

mod block;
mod error;
mod event;
mod schedule;
mod slot;
mod term;
pub mod timetable;
mod types;

pub use crate::block::{Block, consolidate};
pub use crate::error::ScheduleError;
pub use crate::event::{RecurringEvent, synthesize};
pub use crate::schedule::{CompactSchedule, Schedule};
pub use crate::slot::{CompactSlot, Slot};
pub use crate::term::{Holiday, Term};
pub use crate::types::{Category, Weekday};
