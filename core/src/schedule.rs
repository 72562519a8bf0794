// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    CompactSlot, Holiday, RecurringEvent, ScheduleError, Slot, Term, consolidate, synthesize,
};

/// A course's weekly schedule: the full set of atomic slots.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// The atomic slots, at most one per (day, period).
    pub slots: Vec<Slot>,
}

impl Schedule {
    /// Creates a schedule from its slots.
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// The compact per-slot preview of this schedule.
    pub fn compact(&self) -> Vec<CompactSlot> {
        self.slots.iter().map(Slot::compact).collect()
    }

    /// Consolidates the slots and synthesizes the weekly recurring events
    /// for the given term, with its holidays excluded.
    pub fn to_events(
        &self,
        term: &Term,
        holidays: &[Holiday],
    ) -> Result<Vec<RecurringEvent>, ScheduleError> {
        let blocks = consolidate(&self.slots)?;
        synthesize(&blocks, term, holidays)
    }
}

/// Compact preview of a whole course schedule, keyed by the caller's course
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactSchedule {
    /// Course code the caller displays, e.g. `IIC2233-1`.
    pub code: String,

    /// Compact form of every slot.
    pub modules: Vec<CompactSlot>,
}

impl CompactSchedule {
    /// Creates the compact preview of `schedule` for the given course code.
    pub fn new(code: impl Into<String>, schedule: &Schedule) -> Self {
        Self {
            code: code.into(),
            modules: schedule.compact(),
        }
    }
}
