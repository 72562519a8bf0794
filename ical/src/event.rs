// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use icalendar::{CalendarDateTime, Component, DatePerhapsTime, EventLike, Property};
use ucalendar_core::{RecurringEvent, Weekday};
use uuid::Uuid;

use crate::keyword::{
    KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE, KW_EXDATE,
    KW_LOCATION, KW_RRULE, KW_TZID,
};

/// The institution's civil timezone. Every serialized instant is anchored
/// to it; the wire format's UTC conversions are derived from it.
pub const TIMEZONE: Tz = chrono_tz::America::Santiago;

const FORMAT_DATETIME: &str = "%Y%m%dT%H%M%S";
const FORMAT_UNTIL: &str = "%Y%m%dT%H%M%SZ";

/// RFC 5545 token for a weekday.
pub fn weekday_token(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => KW_DAY_MO,
        Weekday::Tuesday => KW_DAY_TU,
        Weekday::Wednesday => KW_DAY_WE,
        Weekday::Thursday => KW_DAY_TH,
        Weekday::Friday => KW_DAY_FR,
        Weekday::Saturday => KW_DAY_SA,
        Weekday::Sunday => KW_DAY_SU,
    }
}

/// Builds the `VEVENT` component for one recurring event.
///
/// The caller provides the rendered summary text; the room becomes the
/// event location when present.
pub fn event(spec: &RecurringEvent, summary: &str) -> icalendar::Event {
    let uid = Uuid::new_v4().to_string();
    let mut event = icalendar::Event::new();
    Component::uid(&mut event, &uid);
    Component::summary(&mut event, summary);
    EventLike::starts(&mut event, with_timezone(spec.start));
    EventLike::ends(&mut event, with_timezone(spec.end));
    if let Some(room) = &spec.room {
        event.add_property(KW_LOCATION, room);
    }

    event.add_property(KW_RRULE, &rrule(spec));
    if !spec.exdates.is_empty() {
        event.append_property(
            Property::new(KW_EXDATE, &exdate_values(&spec.exdates))
                .add_parameter(KW_TZID, TIMEZONE.name())
                .done(),
        );
    }

    event
}

fn with_timezone(date_time: NaiveDateTime) -> DatePerhapsTime {
    DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone {
        date_time,
        tzid: TIMEZONE.name().to_string(),
    })
}

/// Weekly recurrence rule: interval 1, the event's weekday tokens, and an
/// inclusive UTC end bound at midnight one day past the term.
fn rrule(spec: &RecurringEvent) -> String {
    let days = spec
        .weekdays
        .iter()
        .map(|&day| weekday_token(day))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "FREQ=WEEKLY;INTERVAL=1;BYDAY={days};UNTIL={}",
        spec.until.format(FORMAT_UNTIL)
    )
}

fn exdate_values(exdates: &[NaiveDateTime]) -> String {
    exdates
        .iter()
        .map(|instant| instant.format(FORMAT_DATETIME).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;
    use ucalendar_core::Category;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn serialized(event: icalendar::Event) -> String {
        icalendar::Calendar::new().push(event).done().to_string()
    }

    fn spec() -> RecurringEvent {
        RecurringEvent {
            start: date(2025, 3, 3).and_hms_opt(11, 0, 0).unwrap(),
            end: date(2025, 3, 3).and_hms_opt(13, 30, 0).unwrap(),
            weekdays: BTreeSet::from([Weekday::Monday, Weekday::Wednesday]),
            until: date(2025, 7, 5).and_hms_opt(0, 0, 0).unwrap(),
            exdates: vec![date(2025, 5, 1).and_hms_opt(11, 0, 0).unwrap()],
            category: Category::Lecture,
            room: Some("A1".to_string()),
        }
    }

    #[test]
    fn weekday_tokens_follow_the_wire_format() {
        let tokens: Vec<_> = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
        .into_iter()
        .map(weekday_token)
        .collect();
        assert_eq!(tokens, ["MO", "TU", "WE", "TH", "FR", "SA", "SU"]);
    }

    #[test]
    fn rrule_carries_days_and_until_bound() {
        assert_eq!(
            rrule(&spec()),
            "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO,WE;UNTIL=20250705T000000Z"
        );
    }

    #[test]
    fn event_serializes_start_and_end_in_the_civil_timezone() {
        let serialized = serialized(event(&spec(), "IIC2233-1"));
        assert!(serialized.contains("DTSTART;TZID=America/Santiago:20250303T110000"));
        assert!(serialized.contains("DTEND;TZID=America/Santiago:20250303T133000"));
    }

    #[test]
    fn event_serializes_summary_location_and_rule() {
        let serialized = serialized(event(&spec(), "IIC2233-1"));
        assert!(serialized.contains("SUMMARY:IIC2233-1"));
        assert!(serialized.contains("LOCATION:A1"));
        assert!(serialized.contains("BYDAY=MO,WE"));
        assert!(serialized.contains("UNTIL=20250705T000000Z"));
    }

    #[test]
    fn exclusion_dates_share_the_start_clock_time() {
        let serialized = serialized(event(&spec(), "IIC2233-1"));
        assert!(serialized.contains("EXDATE;TZID=America/Santiago:20250501T110000"));
    }

    #[test]
    fn event_without_exclusions_has_no_exdate() {
        let mut bare = spec();
        bare.exdates.clear();
        let serialized = serialized(event(&bare, "IIC2233-1"));
        assert!(!serialized.contains("EXDATE"));
    }

    #[test]
    fn event_without_room_has_no_location() {
        let mut bare = spec();
        bare.room = None;
        let serialized = serialized(event(&bare, "IIC2233-1"));
        assert!(!serialized.contains("LOCATION"));
    }
}
