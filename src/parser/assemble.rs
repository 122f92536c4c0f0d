//! Message assembly from the normalized line stream.
//!
//! Exports interleave header lines with continuation lines (multi-line
//! messages pasted or typed with newlines). The assembler walks the stream
//! once: a header line flushes the record in progress and opens a new one;
//! any other non-empty line is folded into the open record's body. Lines
//! before the first header have no record to belong to and are dropped.

use crate::error::{ChatscopeError, ParseReason, Result};
use crate::parser::pattern::HeaderMatcher;

/// An assembled message before timestamp resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub date: String,
    pub time: String,
    pub author: Option<String>,
    pub message: String,
}

/// Walks `lines` and assembles raw records using `matcher`.
///
/// Empty and whitespace-only lines are discarded in any state. A final open
/// record is flushed at end of input. Zero assembled records is a fatal
/// [`ParseReason::NoRecords`] error, never an empty result.
pub fn assemble_records(lines: &[String], matcher: &HeaderMatcher) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    let mut current: Option<Open> = None;

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        if matcher.matches(line) {
            if let Some(open) = current.take() {
                records.push(open.flush());
            }
            let header = matcher.extract(line)?;
            current = Some(Open {
                date: header.date,
                time: header.time,
                author: header.author,
                fragments: vec![header.message],
            });
        } else if let Some(open) = current.as_mut() {
            open.fragments.push(line.clone());
        }
        // No header seen yet: the line is unaddressable, drop it
    }

    if let Some(open) = current.take() {
        records.push(open.flush());
    }

    if records.is_empty() {
        return Err(ChatscopeError::parse(ParseReason::NoRecords));
    }

    Ok(records)
}

/// A record still accumulating continuation lines.
struct Open {
    date: String,
    time: String,
    author: Option<String>,
    fragments: Vec<String>,
}

impl Open {
    fn flush(self) -> RawRecord {
        RawRecord {
            date: self.date,
            time: self.time,
            author: self.author,
            message: self.fragments.join(" ").trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    fn android() -> HeaderMatcher {
        HeaderMatcher::new(Platform::Android)
    }

    #[test]
    fn test_one_record_per_header() {
        let records = assemble_records(
            &lines(&[
                "12/31/2023, 10:15 PM - Alice: Hello there!",
                "12/31/2023, 10:16 PM - Bob: Hi Alice!",
            ]),
            &android(),
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].author.as_deref(), Some("Alice"));
        assert_eq!(records[1].message, "Hi Alice!");
    }

    #[test]
    fn test_multiline_folding() {
        let records = assemble_records(
            &lines(&[
                "12/31/2023, 10:15 PM - Alice: Hello there!",
                "This is a continuation",
                "of the same message",
                "12/31/2023, 10:16 PM - Bob: Hi Alice!",
            ]),
            &android(),
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].message,
            "Hello there! This is a continuation of the same message"
        );
        assert_eq!(records[1].message, "Hi Alice!");
    }

    #[test]
    fn test_final_record_flushed() {
        let records = assemble_records(
            &lines(&[
                "12/31/2023, 10:15 PM - Alice: start",
                "trailing continuation",
            ]),
            &android(),
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "start trailing continuation");
    }

    #[test]
    fn test_lines_before_first_header_dropped() {
        let records = assemble_records(
            &lines(&[
                "orphan preamble",
                "12/31/2023, 10:15 PM - Alice: hi",
            ]),
            &android(),
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "hi");
    }

    #[test]
    fn test_blank_lines_ignored() {
        let records = assemble_records(
            &lines(&[
                "",
                "12/31/2023, 10:15 PM - Alice: hi",
                "   ",
                "still alice",
            ]),
            &android(),
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "hi still alice");
    }

    #[test]
    fn test_no_records_is_error() {
        let err = assemble_records(&lines(&["nothing", "matches"]), &android()).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_empty_message_retained() {
        let records = assemble_records(
            &lines(&["12/31/2023, 10:15 PM - Alice: "]),
            &android(),
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "");
    }
}
