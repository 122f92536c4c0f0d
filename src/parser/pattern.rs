//! Structural header matchers for the two export layouts.
//!
//! A header line opens a new message; everything else is a continuation of
//! the previous one. Each [`HeaderMatcher`] pairs a cheap [`matches`] check
//! with an [`extract`] that pulls the date, time, author, and leading message
//! fragment out of a matching line.
//!
//! [`matches`]: HeaderMatcher::matches
//! [`extract`]: HeaderMatcher::extract

use regex::Regex;

use crate::error::{ChatscopeError, ParseReason, Result};
use crate::platform::Platform;

/// Android header shape: `12/31/2023, 10:15 PM - Alice: Hello`
///
/// 1–2 digit day/month, 2 or 4 digit year, optional AM/PM, then the
/// ` - ` separator before the author/message segment.
const ANDROID_PATTERN: &str =
    r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}, [0-9]{1,2}:[0-9]{2}\s*(?:AM|PM|am|pm)? -";

/// Characters iOS inserts between date, time, and AM/PM: ordinary space,
/// no-break space, the EN/EM space range, and narrow no-break space.
const SP: &str = r"[ \u{00A0}\u{2002}-\u{200A}\u{202F}]";

/// Fields extracted from one header line.
///
/// `author` is `None` for system notices that carry no `Name: ` prefix.
/// `message` holds only the fragment on the header line itself; continuation
/// lines are folded in later by the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub date: String,
    pub time: String,
    pub author: Option<String>,
    pub message: String,
}

/// A compiled structural recognizer for one platform's header layout.
pub struct HeaderMatcher {
    platform: Platform,
    regex: Regex,
}

impl HeaderMatcher {
    /// Compiles the matcher for `platform`.
    pub fn new(platform: Platform) -> Self {
        let pattern = match platform {
            Platform::Android => ANDROID_PATTERN.to_string(),
            Platform::Ios => format!(
                r"^\[(\d{{1,2}}[/-]\d{{1,2}}[/-]\d{{2,4}})(?:,?{SP}+)(\d{{1,2}}:\d{{2}}(?::\d{{2}})?)(?:{SP}*(AM|PM|am|pm))?\]"
            ),
        };
        Self {
            platform,
            // Patterns are static and known-valid; a failure here is a defect.
            regex: Regex::new(&pattern).expect("invalid header pattern"),
        }
    }

    /// Returns the platform this matcher recognizes.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns `true` if `line` starts a new message in this layout.
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Extracts the header fields from a matching line.
    ///
    /// Callers must gate this behind [`matches`](Self::matches); a
    /// non-matching line yields a [`ParseReason::MalformedHeader`] error.
    pub fn extract(&self, line: &str) -> Result<ParsedHeader> {
        match self.platform {
            Platform::Android => self.extract_android(line),
            Platform::Ios => self.extract_ios(line),
        }
    }

    fn extract_android(&self, line: &str) -> Result<ParsedHeader> {
        let (date_time, message_part) = line
            .split_once(" - ")
            .ok_or_else(|| malformed(line))?;
        let (date, time) = date_time.split_once(", ").ok_or_else(|| malformed(line))?;

        let (author, message) = match message_part.split_once(": ") {
            Some((author, message)) => (Some(author.to_string()), message.to_string()),
            // No colon-delimited author: the whole segment is a system notice
            None => (None, message_part.to_string()),
        };

        Ok(ParsedHeader {
            date: date.to_string(),
            time: time.to_string(),
            author,
            message,
        })
    }

    fn extract_ios(&self, line: &str) -> Result<ParsedHeader> {
        let caps = self.regex.captures(line).ok_or_else(|| malformed(line))?;

        let date = caps.get(1).map_or("", |m| m.as_str()).to_string();
        let mut time = caps.get(2).map_or("", |m| m.as_str()).to_string();
        if let Some(meridiem) = caps.get(3) {
            time.push(' ');
            time.push_str(&meridiem.as_str().to_uppercase());
        }

        let rest = line[caps.get(0).map_or(0, |m| m.end())..].trim_start();

        let (author, message) = match rest.split_once(':') {
            Some((before, after)) => {
                let author = before.trim().to_string();
                let message = after.trim().to_string();
                if message.is_empty() {
                    // Colon with nothing after it marks a system notice
                    (None, format!("System message from {author}"))
                } else {
                    (Some(author), message)
                }
            }
            None => (None, rest.trim().to_string()),
        };

        Ok(ParsedHeader {
            date,
            time,
            author,
            message,
        })
    }
}

fn malformed(line: &str) -> ChatscopeError {
    ChatscopeError::parse(ParseReason::MalformedHeader(line.to_string()))
}
