// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Synthesis of consolidated blocks into weekly recurring events.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{Block, Category, Holiday, ScheduleError, Term, Weekday, timetable};

/// One weekly recurring calendar event, described in the institution's
/// civil timezone. Serializers turn this into the interchange form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringEvent {
    /// Start of the first concrete occurrence.
    pub start: NaiveDateTime,

    /// End of the first concrete occurrence.
    pub end: NaiveDateTime,

    /// Days of the week the event recurs on.
    pub weekdays: BTreeSet<Weekday>,

    /// Midnight one day past the term's last day; no occurrence is
    /// generated at or after this instant.
    pub until: NaiveDateTime,

    /// Occurrence instants omitted from the series, one per holiday inside
    /// the term, at the event's start clock-time.
    pub exdates: Vec<NaiveDateTime>,

    /// Activity category, passed through for rendering.
    pub category: Category,

    /// Room, passed through for rendering.
    pub room: Option<String>,
}

/// Translates consolidated blocks into recurring events bounded by the term,
/// with the term's holidays excluded.
///
/// Fails with [`ScheduleError::InvalidTerm`] when the term ends before it
/// starts.
pub fn synthesize(
    blocks: &[Block],
    term: &Term,
    holidays: &[Holiday],
) -> Result<Vec<RecurringEvent>, ScheduleError> {
    if term.last_day < term.first_day {
        return Err(ScheduleError::InvalidTerm {
            first_day: term.first_day,
            last_day: term.last_day,
        });
    }

    let events = blocks
        .iter()
        .map(|block| synthesize_block(block, term, holidays))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(events = events.len(), "synthesized recurring events");
    Ok(events)
}

fn synthesize_block(
    block: &Block,
    term: &Term,
    holidays: &[Holiday],
) -> Result<RecurringEvent, ScheduleError> {
    let anchor = anchor_date(block, term)?;
    let earliest = block.earliest_period().ok_or(ScheduleError::NoMatchingStart)?;
    let latest = block.latest_period().ok_or(ScheduleError::NoMatchingStart)?;

    let start = anchor.and_time(timetable::start_of(earliest)?);
    let end = anchor.and_time(timetable::start_of(latest)?) + timetable::period_length();
    let until = (term.last_day + Duration::days(1)).and_time(NaiveTime::MIN);
    let exdates = exclusion_instants(term, holidays, start.time());

    Ok(RecurringEvent {
        start,
        end,
        weekdays: block.days.clone(),
        until,
        exdates,
        category: block.category,
        room: block.room.clone(),
    })
}

/// Date of the first concrete occurrence: the member of `block.days` that a
/// forward day-by-day search from the term's first day reaches soonest. The
/// other days only shape the recurrence rule.
fn anchor_date(block: &Block, term: &Term) -> Result<NaiveDate, ScheduleError> {
    block
        .days
        .iter()
        .map(|&day| days_until(term.first_day, day))
        .min()
        .map(|offset| term.first_day + Duration::days(offset))
        .ok_or(ScheduleError::NoMatchingStart)
}

fn days_until(from: NaiveDate, day: Weekday) -> i64 {
    i64::from(chrono::Weekday::from(day).days_since(from.weekday()))
}

/// One exclusion instant per holiday whose date falls strictly between the
/// term bounds, at the event's start clock-time. A holiday on a weekday the
/// event never meets still produces an instant; it simply matches no
/// generated occurrence.
fn exclusion_instants(term: &Term, holidays: &[Holiday], at: NaiveTime) -> Vec<NaiveDateTime> {
    holidays
        .iter()
        .filter_map(|holiday| holiday.resolve(term))
        .filter(|date| term.first_day < *date && *date < term.last_day)
        .map(|date| date.and_time(at))
        .collect()
}
