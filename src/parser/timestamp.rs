//! Timestamp resolution from raw date/time tokens.
//!
//! Export dates are numeric and ambiguous: `01/02/2023` can be January 2nd or
//! February 1st. Resolution tries an ordered template list per platform and
//! takes the first match, so list order *is* the disambiguation policy:
//!
//! - **Android**: month-first (US order) before day-first
//! - **iOS**: day-first before month-first, seconds-bearing templates first
//!
//! The asymmetry is inherited from observed export locales per platform and
//! is deliberately preserved; callers that need identical disambiguation of
//! ambiguous dates must rely on exactly this order.
//!
//! Resolution failure is an expected, recoverable condition: it returns
//! `None` and the record builder drops the record.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

use crate::platform::Platform;

/// Android templates: month-first before day-first, 12-hour before 24-hour.
const ANDROID_FORMATS: &[&str] = &[
    // Month-first (US style)
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%y %I:%M %p",
    "%m/%d/%Y %H:%M",
    "%m/%d/%y %H:%M",
    // Day-first (European/Indian style)
    "%d/%m/%Y %I:%M %p",
    "%d/%m/%y %I:%M %p",
    "%d/%m/%Y %H:%M",
    "%d/%m/%y %H:%M",
];

/// iOS templates: day-first before month-first, both `-` and `/` separators,
/// optional seconds, 24-hour before 12-hour.
const IOS_FORMATS: &[&str] = &[
    // Day-first
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d-%m-%y %H:%M",
    "%d/%m/%Y %H:%M",
    "%d/%m/%y %H:%M",
    "%d-%m-%Y %I:%M:%S %p",
    "%d-%m-%y %I:%M:%S %p",
    "%d/%m/%Y %I:%M:%S %p",
    "%d/%m/%y %I:%M:%S %p",
    "%d-%m-%Y %I:%M %p",
    "%d-%m-%y %I:%M %p",
    "%d/%m/%Y %I:%M %p",
    "%d/%m/%y %I:%M %p",
    // Month-first (US style iOS exports)
    "%m-%d-%Y %H:%M:%S",
    "%m-%d-%y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%y %H:%M:%S",
    "%m-%d-%Y %H:%M",
    "%m-%d-%y %H:%M",
    "%m/%d/%Y %H:%M",
    "%m/%d/%y %H:%M",
    "%m-%d-%Y %I:%M:%S %p",
    "%m-%d-%y %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%y %I:%M:%S %p",
    "%m-%d-%Y %I:%M %p",
    "%m-%d-%y %I:%M %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%y %I:%M %p",
];

/// Returns the fixed template list for `platform`.
pub fn format_templates(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Android => ANDROID_FORMATS,
        Platform::Ios => IOS_FORMATS,
    }
}

/// Resolves `(date, time)` into an absolute timestamp.
///
/// Returns the first template match in list order, or `None` when nothing
/// matches. Never errors; callers drop unresolvable records.
pub fn resolve_timestamp(date: &str, time: &str, platform: Platform) -> Option<DateTime<Utc>> {
    let date_time = format!("{date} {time}");

    for template in format_templates(platform) {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&date_time, template) {
            return Some(naive.and_utc());
        }
    }

    warn!(date_time = %date_time, ?platform, "failed to resolve timestamp");
    None
}
