// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Day of the week a slot can fall on.
///
/// The institution schedules classes Monday through Saturday; Sunday exists
/// so serializers can still represent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Day index 0.
    Monday,

    /// Day index 1.
    Tuesday,

    /// Day index 2.
    Wednesday,

    /// Day index 3.
    Thursday,

    /// Day index 4.
    Friday,

    /// Day index 5.
    Saturday,

    /// Day index 6, never carried by institutional slots.
    Sunday,
}

impl Weekday {
    /// The six days on which the institution schedules modules, in sweep order.
    pub const SCHEDULED: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Converts a day index (0 = Monday) into a weekday.
    pub fn from_index(index: u8) -> Option<Weekday> {
        match index {
            0 => Some(Weekday::Monday),
            1 => Some(Weekday::Tuesday),
            2 => Some(Weekday::Wednesday),
            3 => Some(Weekday::Thursday),
            4 => Some(Weekday::Friday),
            5 => Some(Weekday::Saturday),
            6 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// The day index, 0 = Monday through 6 = Sunday.
    pub fn index(self) -> u8 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

/// Activity held during a slot, a closed institutional set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A regular lecture.
    Lecture,

    /// A teaching-assistant session.
    Assistantship,

    /// A laboratory session.
    Lab,

    /// A workshop.
    Workshop,

    /// Fieldwork away from campus.
    Fieldwork,

    /// A supervised practicum.
    Practicum,

    /// Thesis work.
    Thesis,

    /// Anything the catalog does not classify.
    #[default]
    Other,
}

const CATEGORY_LECTURE: &str = "lecture";
const CATEGORY_ASSISTANTSHIP: &str = "assistantship";
const CATEGORY_LAB: &str = "lab";
const CATEGORY_WORKSHOP: &str = "workshop";
const CATEGORY_FIELDWORK: &str = "fieldwork";
const CATEGORY_PRACTICUM: &str = "practicum";
const CATEGORY_THESIS: &str = "thesis";
const CATEGORY_OTHER: &str = "other";

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        match self {
            Category::Lecture => CATEGORY_LECTURE,
            Category::Assistantship => CATEGORY_ASSISTANTSHIP,
            Category::Lab => CATEGORY_LAB,
            Category::Workshop => CATEGORY_WORKSHOP,
            Category::Fieldwork => CATEGORY_FIELDWORK,
            Category::Practicum => CATEGORY_PRACTICUM,
            Category::Thesis => CATEGORY_THESIS,
            Category::Other => CATEGORY_OTHER,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            CATEGORY_LECTURE => Ok(Category::Lecture),
            CATEGORY_ASSISTANTSHIP => Ok(Category::Assistantship),
            CATEGORY_LAB => Ok(Category::Lab),
            CATEGORY_WORKSHOP => Ok(Category::Workshop),
            CATEGORY_FIELDWORK => Ok(Category::Fieldwork),
            CATEGORY_PRACTICUM => Ok(Category::Practicum),
            CATEGORY_THESIS => Ok(Category::Thesis),
            CATEGORY_OTHER => Ok(Category::Other),
            _ => Err(()),
        }
    }
}
