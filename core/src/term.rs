// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

/// Date range of an academic term, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    /// First day of classes.
    pub first_day: NaiveDate,

    /// Last day of classes.
    pub last_day: NaiveDate,
}

impl Term {
    /// Creates a term spanning `first_day` through `last_day`.
    pub fn new(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        Self {
            first_day,
            last_day,
        }
    }
}

/// A day without classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    /// Calendar date of the holiday. When `every_year` is set only its
    /// month and day are meaningful.
    pub date: NaiveDate,

    /// Whether the holiday recurs every year.
    pub every_year: bool,
}

impl Holiday {
    /// Creates a holiday fixed to a single date.
    pub fn once(date: NaiveDate) -> Self {
        Self {
            date,
            every_year: false,
        }
    }

    /// Creates a holiday recurring every year on the date's month and day.
    pub fn yearly(date: NaiveDate) -> Self {
        Self {
            date,
            every_year: true,
        }
    }

    /// Concrete date of this holiday for the given term.
    ///
    /// Annual holidays take their year from the term's first day. An annual
    /// Feb 29 has no date in a non-leap year and resolves to `None`.
    pub(crate) fn resolve(&self, term: &Term) -> Option<NaiveDate> {
        if !self.every_year {
            return Some(self.date);
        }

        let resolved = self.date.with_year(term.first_day.year());
        if resolved.is_none() {
            tracing::warn!(
                date = %self.date,
                year = term.first_day.year(),
                "annual holiday has no date in the term year, skipping"
            );
        }
        resolved
    }
}
