// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use icalendar::Calendar;

use crate::event::TIMEZONE;

/// Assembles the export calendar from already-built event components.
///
/// The calendar carries the caller's display name and the institution's
/// timezone, so consumers without VTIMEZONE support still resolve the civil
/// times correctly.
pub fn calendar(name: &str, events: impl IntoIterator<Item = icalendar::Event>) -> Calendar {
    let mut calendar = Calendar::new();
    calendar.name(name);
    calendar.timezone(TIMEZONE.name());

    let mut count = 0usize;
    for event in events {
        calendar.push(event);
        count += 1;
    }
    tracing::debug!(events = count, name, "assembled export calendar");

    calendar.done()
}
