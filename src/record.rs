//! The structured message record produced by the parser.
//!
//! [`MessageRecord`] is the durable output of
//! [`parse_chat`](crate::parser::parse_chat): one record per logical message,
//! chronologically ordered, with calendar fields derived from the resolved
//! timestamp. Downstream consumers (analytics, export writers) treat its
//! fields as a stable contract surface.
//!
//! # Example
//!
//! ```rust
//! use chatscope::MessageRecord;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2023, 12, 31, 22, 15, 0).unwrap();
//! let record = MessageRecord::new(
//!     "12/31/2023",
//!     "10:15 PM",
//!     Some("Alice".to_string()),
//!     "Happy New Year",
//!     ts,
//! );
//! assert_eq!(record.hour_of_day, 22);
//! assert!(!record.is_media);
//! ```

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Exact media placeholder inserted by "export without media".
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// A single parsed chat message.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `date` | `String` | Raw date token as found in the export |
/// | `time` | `String` | Raw time token as found in the export |
/// | `author` | `Option<String>` | `None` for system/service messages |
/// | `message` | `String` | Message text, continuation lines folded in |
/// | `timestamp` | `DateTime<Utc>` | Resolved absolute timestamp |
/// | `calendar_date` | `NaiveDate` | Date component of `timestamp` |
/// | `hour_of_day` | `u32` | 0–23 |
/// | `day_of_week` | `Weekday` | Monday–Sunday |
/// | `is_media` | `bool` | Message is a media placeholder |
///
/// Records without a resolvable timestamp never reach callers; the parser
/// drops them before building the final set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Original date token, pre-resolution (e.g. `12/31/2023`).
    pub date: String,

    /// Original time token, pre-resolution (e.g. `10:15 PM`).
    pub time: String,

    /// Display name of the sender.
    ///
    /// `None` marks a system message (encryption notices, group events) that
    /// carried no `Name: ` prefix in the export. It is never coerced to a
    /// placeholder string.
    pub author: Option<String>,

    /// Message text.
    ///
    /// Multi-line messages are folded into one string with single spaces
    /// between the original lines. May be empty after trimming; an empty
    /// message is still a valid record.
    pub message: String,

    /// Absolute timestamp resolved from the raw date and time tokens.
    pub timestamp: DateTime<Utc>,

    /// Calendar date of `timestamp`.
    pub calendar_date: NaiveDate,

    /// Hour of day, 0–23.
    pub hour_of_day: u32,

    /// Day of week.
    pub day_of_week: Weekday,

    /// `true` if the message is a media placeholder rather than text.
    pub is_media: bool,
}

impl MessageRecord {
    /// Creates a record, deriving the calendar fields and media flag.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        author: Option<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let message = message.into();
        let is_media = is_media_placeholder(&message);
        Self {
            date: date.into(),
            time: time.into(),
            author,
            message,
            timestamp,
            calendar_date: timestamp.date_naive(),
            hour_of_day: timestamp.hour(),
            day_of_week: timestamp.weekday(),
            is_media,
        }
    }

    /// Returns `true` for system/service messages (no sender).
    pub fn is_system(&self) -> bool {
        self.author.is_none()
    }

    /// Number of whitespace-separated words in the message.
    pub fn word_count(&self) -> usize {
        self.message.split_whitespace().count()
    }
}

/// Checks whether message text is a media placeholder.
///
/// Matches the exact `<Media omitted>` marker and, case-insensitively, any
/// text containing "omitted" (covers locale variants like "image omitted" and
/// "Photo omitted" from iOS exports).
pub fn is_media_placeholder(message: &str) -> bool {
    message == MEDIA_PLACEHOLDER
        || message.contains(MEDIA_PLACEHOLDER)
        || message.to_lowercase().contains("omitted")
}
