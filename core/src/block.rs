// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Consolidation of atomic slots into recurring blocks.
//!
//! Two sweeps over the day×period grid: a horizontal pass collapsing
//! same-room runs within a day into period ranges, then a vertical pass
//! collapsing matching patterns across days into multi-day blocks.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::{Category, ScheduleError, Slot, Weekday, timetable};

/// A consolidated group of slots sharing category and room, spanning a set
/// of days and a set of periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Days of the week the block meets. Never empty.
    pub days: BTreeSet<Weekday>,

    /// Module indices the block occupies. Never empty.
    pub periods: BTreeSet<u8>,

    /// Activity category shared by every absorbed slot.
    pub category: Category,

    /// Room shared by every absorbed slot.
    pub room: Option<String>,
}

impl Block {
    fn from_slot(slot: &Slot) -> Self {
        Self {
            days: BTreeSet::from([slot.day]),
            periods: BTreeSet::from([slot.period]),
            category: slot.category,
            room: slot.room.clone(),
        }
    }

    /// Whether the block occupies the given (day, period) cell.
    pub fn covers(&self, day: Weekday, period: u8) -> bool {
        self.days.contains(&day) && self.periods.contains(&period)
    }

    /// The block's first module of the day.
    pub fn earliest_period(&self) -> Option<u8> {
        self.periods.first().copied()
    }

    /// The block's last module of the day.
    pub fn latest_period(&self) -> Option<u8> {
        self.periods.last().copied()
    }
}

/// Merges atomic slots into the smallest set of recurring blocks the sweep
/// rules produce.
///
/// The input may be empty. Slots sharing a (day, period) cell are rejected
/// with [`ScheduleError::DuplicateSlot`], and a period outside the module
/// time table with [`ScheduleError::OutOfRange`], before any merging.
pub fn consolidate(slots: &[Slot]) -> Result<Vec<Block>, ScheduleError> {
    let mut work = singletons(slots)?;

    // Horizontal: within each day, same-room runs collapse into period ranges.
    for day in Weekday::SCHEDULED {
        let cells = (0..timetable::PERIOD_COUNT).map(|period| (day, period));
        merge_line(&mut work, cells, absorb_periods);
    }

    // Vertical: matching patterns collapse across days.
    for period in 0..timetable::PERIOD_COUNT {
        let cells = Weekday::SCHEDULED.into_iter().map(|day| (day, period));
        merge_line(&mut work, cells, absorb_days);
    }

    let blocks: Vec<Block> = work.into_iter().flatten().collect();
    tracing::debug!(
        slots = slots.len(),
        blocks = blocks.len(),
        "consolidated schedule"
    );
    Ok(blocks)
}

fn singletons(slots: &[Slot]) -> Result<Vec<Option<Block>>, ScheduleError> {
    let mut seen = HashSet::with_capacity(slots.len());
    let mut blocks = Vec::with_capacity(slots.len());
    for slot in slots {
        if slot.period >= timetable::PERIOD_COUNT {
            return Err(ScheduleError::OutOfRange(slot.period));
        }
        if !seen.insert((slot.day, slot.period)) {
            return Err(ScheduleError::DuplicateSlot {
                day: slot.day,
                period: slot.period,
            });
        }
        blocks.push(Some(Block::from_slot(slot)));
    }
    Ok(blocks)
}

/// Sweeps one grid line, absorbing same-room blocks into the open block of
/// their category.
///
/// Absorbed entries are tombstoned so later cells can no longer resolve to
/// them. The open block for a category is only seeded or grown within a
/// line; a block in a different room does not displace it.
fn merge_line(
    work: &mut [Option<Block>],
    cells: impl Iterator<Item = (Weekday, u8)>,
    absorb: fn(&mut Block, &Block),
) {
    let mut open: HashMap<Category, usize> = HashMap::new();
    for (day, period) in cells {
        let Some(current) = work
            .iter()
            .position(|entry| entry.as_ref().is_some_and(|b| b.covers(day, period)))
        else {
            continue;
        };
        let Some(category) = work[current].as_ref().map(|b| b.category) else {
            continue;
        };

        match open.get(&category).copied() {
            None => {
                open.insert(category, current);
            }
            Some(tracked) if tracked == current => {}
            Some(tracked) => {
                let rooms_match = matches!(
                    (&work[tracked], &work[current]),
                    (Some(open_block), Some(block)) if open_block.room == block.room
                );
                if rooms_match {
                    if let Some(absorbed) = work[current].take() {
                        if let Some(open_block) = work[tracked].as_mut() {
                            absorb(open_block, &absorbed);
                        }
                    }
                }
            }
        }
    }
}

fn absorb_periods(open: &mut Block, absorbed: &Block) {
    open.periods.extend(absorbed.periods.iter().copied());
}

// Grows the day set only. The absorbing block keeps its own period set, so
// a partially overlapping absorbed block loses its other periods; changing
// this would change the published event shape.
fn absorb_days(open: &mut Block, absorbed: &Block) {
    open.days.extend(absorbed.days.iter().copied());
}
