//! Property-based tests for chatscope.
//!
//! These tests generate random transcripts to find edge cases.

use proptest::prelude::*;

use chatscope::parser::{normalize::normalize_line, parse_chat_text};
use chatscope::platform::PlatformHint;

/// Random sender names, kept free of `: ` so they survive extraction.
fn arb_author() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Charlie".to_string(),
        "User123".to_string(),
        "Иван".to_string(),
        "田中".to_string(),
    ])
}

/// Random message bodies, including awkward ones.
fn arb_body() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "How are you?".to_string(),
        "note: buy milk".to_string(),
        "🎉🔥 emoji".to_string(),
        "Привет мир".to_string(),
        "x".to_string(),
        "1234567890".to_string(),
    ])
}

/// A valid Android header line with a minute offset for ordering.
fn android_line(minute: usize, author: &str, body: &str) -> String {
    format!(
        "12/31/2023, 10:{:02} PM - {}: {}",
        minute % 60,
        author,
        body
    )
}

fn arb_android_chat(max_len: usize) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((arb_author(), arb_body()), 1..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// One header line always yields exactly one record.
    #[test]
    fn header_count_equals_record_count(entries in arb_android_chat(40)) {
        let chat: Vec<String> = entries
            .iter()
            .enumerate()
            .map(|(i, (author, body))| android_line(i, author, body))
            .collect();
        let records = parse_chat_text(&chat.join("\n"), PlatformHint::Android).unwrap();
        prop_assert_eq!(records.len(), entries.len());
    }

    /// Authors and bodies survive the pipeline intact.
    #[test]
    fn fields_round_trip(author in arb_author(), body in arb_body()) {
        let line = android_line(0, &author, &body);
        let records = parse_chat_text(&line, PlatformHint::Android).unwrap();
        prop_assert_eq!(records[0].author.as_deref(), Some(author.as_str()));
        prop_assert_eq!(records[0].message.as_str(), body.as_str());
    }

    /// Output is always sorted chronologically, whatever the input order.
    #[test]
    fn output_is_chronologically_sorted(entries in arb_android_chat(30), seed in any::<u64>()) {
        let mut minutes: Vec<usize> = (0..entries.len()).collect();
        // Cheap deterministic shuffle
        for i in 0..minutes.len() {
            let j = (seed as usize).wrapping_mul(i + 1) % minutes.len();
            minutes.swap(i, j);
        }
        let chat: Vec<String> = entries
            .iter()
            .zip(&minutes)
            .map(|((author, body), &minute)| android_line(minute, author, body))
            .collect();
        let records = parse_chat_text(&chat.join("\n"), PlatformHint::Android).unwrap();
        prop_assert!(records.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    /// Normalization is idempotent on arbitrary strings.
    #[test]
    fn normalize_is_idempotent(line in "\\PC{0,80}") {
        let once = normalize_line(&line);
        let twice = normalize_line(&once);
        prop_assert_eq!(once, twice);
    }

    /// Arbitrary garbage never panics; it either parses or errors cleanly.
    #[test]
    fn arbitrary_input_never_panics(text in "\\PC{0,200}") {
        let _ = parse_chat_text(&text, PlatformHint::Auto);
        let _ = parse_chat_text(&text, PlatformHint::Android);
        let _ = parse_chat_text(&text, PlatformHint::Ios);
    }

    /// Detection is deterministic for a fixed input.
    #[test]
    fn detection_is_deterministic(entries in arb_android_chat(10)) {
        let chat: Vec<String> = entries
            .iter()
            .enumerate()
            .map(|(i, (author, body))| android_line(i, author, body))
            .collect();
        let text = chat.join("\n");
        let first = parse_chat_text(&text, PlatformHint::Auto).unwrap();
        let second = parse_chat_text(&text, PlatformHint::Auto).unwrap();
        prop_assert_eq!(first, second);
    }
}
