// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords of the iCalendar wire format (RFC 5545) used by the exporter.

// Section 3.3.10 - Recurrence Rule, weekday tokens
pub const KW_DAY_MO: &str = "MO";
pub const KW_DAY_TU: &str = "TU";
pub const KW_DAY_WE: &str = "WE";
pub const KW_DAY_TH: &str = "TH";
pub const KW_DAY_FR: &str = "FR";
pub const KW_DAY_SA: &str = "SA";
pub const KW_DAY_SU: &str = "SU";

// Section 3.8.1 - Descriptive Component Properties
pub const KW_LOCATION: &str = "LOCATION";

// Section 3.8.5 - Recurrence Component Properties
pub const KW_RRULE: &str = "RRULE";
pub const KW_EXDATE: &str = "EXDATE";

// Section 3.2.19 - Time Zone Identifier parameter
pub const KW_TZID: &str = "TZID";
