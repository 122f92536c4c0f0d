//! Edge case tests: malformed input, unusual formats, boundary conditions.

use chatscope::config::ParseConfig;
use chatscope::parser::parse_chat_text;
use chatscope::platform::PlatformHint;
use chrono::{Datelike, Timelike};

#[test]
fn empty_input_is_a_parse_error() {
    let err = parse_chat_text("", PlatformHint::Auto).unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn whitespace_only_input_is_a_parse_error() {
    let err = parse_chat_text("\n\n   \n\t\n", PlatformHint::Android).unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("empty"));
}

#[test]
fn no_matching_headers_is_a_parse_error() {
    // Platform forced, so detection cannot fail first
    let err = parse_chat_text("hello\nworld\nno headers here", PlatformHint::Android).unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("no messages"));
}

#[test]
fn headers_with_broken_dates_are_dropped() {
    // Second line matches the header shape but 25:99 is not a valid time
    let chat = "\
12/31/2023, 10:15 PM - Alice: good
12/31/2023, 25:99 - Bob: bad clock";
    let records = parse_chat_text(chat, PlatformHint::Android).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author.as_deref(), Some("Alice"));
}

#[test]
fn all_timestamps_broken_is_a_parse_error() {
    let err = parse_chat_text("12/31/2023, 25:99 - Bob: bad", PlatformHint::Android).unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("timestamps"));
}

#[test]
fn detection_tie_is_an_error_not_a_guess() {
    let chat = "\
12/31/2023, 10:15 PM - Alice: android style
[4/20/23, 4:21:43 AM] Bob: ios style";
    let err = parse_chat_text(chat, PlatformHint::Auto).unwrap_err();
    assert!(err.is_detection());
}

#[test]
fn ambiguous_date_is_month_first_on_android() {
    let records = parse_chat_text("01/02/2023, 10:00 AM - A: x", PlatformHint::Android).unwrap();
    assert_eq!(records[0].timestamp.month(), 1);
    assert_eq!(records[0].timestamp.day(), 2);
}

#[test]
fn ambiguous_date_is_day_first_on_ios() {
    let records = parse_chat_text("[01/02/2023, 10:00] A: x", PlatformHint::Ios).unwrap();
    assert_eq!(records[0].timestamp.day(), 1);
    assert_eq!(records[0].timestamp.month(), 2);
}

#[test]
fn ambiguous_date_resolution_is_deterministic() {
    let chat = "01/02/2023, 10:00 AM - A: x";
    let first = parse_chat_text(chat, PlatformHint::Android).unwrap();
    for _ in 0..5 {
        let again = parse_chat_text(chat, PlatformHint::Android).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn colons_in_message_body_do_not_split_author() {
    let records = parse_chat_text(
        "12/31/2023, 10:15 PM - Alice: reminder: call mom at 5:30",
        PlatformHint::Android,
    )
    .unwrap();
    assert_eq!(records[0].author.as_deref(), Some("Alice"));
    assert_eq!(records[0].message, "reminder: call mom at 5:30");
}

#[test]
fn author_names_with_unicode() {
    let chat = "\
12/31/2023, 10:15 PM - Жанна Иванова: Привет
12/31/2023, 10:16 PM - 田中太郎: こんにちは";
    let records = parse_chat_text(chat, PlatformHint::Android).unwrap();
    assert_eq!(records[0].author.as_deref(), Some("Жанна Иванова"));
    assert_eq!(records[1].message, "こんにちは");
}

#[test]
fn empty_message_after_header_is_retained() {
    let records =
        parse_chat_text("12/31/2023, 10:15 PM - Alice: ", PlatformHint::Android).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "");
    assert!(!records[0].is_media);
}

#[test]
fn ios_empty_tail_becomes_system_message() {
    let records = parse_chat_text("[4/20/23, 4:21:43 AM] 343:", PlatformHint::Ios).unwrap();
    assert!(records[0].author.is_none());
    assert_eq!(records[0].message, "System message from 343");
}

#[test]
fn crlf_line_endings() {
    let chat = "12/31/2023, 10:15 PM - Alice: hi\r\n12/31/2023, 10:16 PM - Bob: yo\r\n";
    let records = parse_chat_text(chat, PlatformHint::Android).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].message, "yo");
}

#[test]
fn cr_only_line_endings() {
    // Old Mac-style terminators must still separate headers, not fold the
    // second message into the first as continuation text
    let chat = "12/31/2023, 10:15 PM - Alice: hi\r12/31/2023, 10:16 PM - Bob: yo";
    let records = parse_chat_text(chat, PlatformHint::Android).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].message, "hi");
    assert_eq!(records[1].author.as_deref(), Some("Bob"));
}

#[test]
fn twenty_four_hour_times_on_android() {
    let records = parse_chat_text("31/12/2023, 22:15 - Alice: late", PlatformHint::Android).unwrap();
    assert_eq!(records[0].hour_of_day, 22);
    assert_eq!(records[0].timestamp.day(), 31);
}

#[test]
fn ios_dash_separated_dates() {
    let records = parse_chat_text("[20-4-2023, 16:21:43] Bob: hello", PlatformHint::Ios).unwrap();
    assert_eq!(records[0].timestamp.day(), 20);
    assert_eq!(records[0].timestamp.month(), 4);
    assert_eq!(records[0].timestamp.second(), 43);
}

#[test]
fn lowercase_meridiem() {
    let records =
        parse_chat_text("1/1/23, 9:30 am - Alice: morning", PlatformHint::Android).unwrap();
    assert_eq!(records[0].hour_of_day, 9);
}

#[test]
fn very_long_multiline_message() {
    let mut chat = String::from("12/31/2023, 10:15 PM - Alice: start");
    for i in 0..500 {
        chat.push_str(&format!("\ncontinuation line {i}"));
    }
    let records = parse_chat_text(&chat, PlatformHint::Android).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].message.starts_with("start continuation line 0"));
    assert!(records[0].message.ends_with("continuation line 499"));
}

#[test]
fn detection_sample_limit_is_respected() {
    // Android majority lives beyond a 3-line detection window
    let mut chat = String::new();
    for i in 0..3 {
        chat.push_str(&format!("[4/20/23, 4:21:4{i} AM] Bob: ios\n"));
    }
    for _ in 0..10 {
        chat.push_str("12/31/2023, 10:15 PM - Alice: android\n");
    }
    let config = ParseConfig::new().with_detection_sample(3);
    let records =
        chatscope::parser::parse_chat_text_with_config(&chat, PlatformHint::Auto, &config).unwrap();
    // Detected as iOS; the Android lines all fold into the last iOS message
    assert_eq!(records.len(), 3);
}

#[test]
fn lossy_decode_still_parses() {
    let mut bytes = b"12/31/2023, 10:15 PM - Alice: hi there".to_vec();
    // Invalid UTF-8, and an odd byte count so the UTF-16 attempts fail too
    bytes.push(0xFF);
    if bytes.len() % 2 == 0 {
        bytes.push(0xFF);
    }
    let records = chatscope::parser::parse_chat(&bytes, PlatformHint::Android).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].message.contains("there"));
}
