//! Integration tests covering the full parse-analyze-export flow.

use chatscope::analytics::{emoji, ChatAnalyzer};
use chatscope::config::{ParseConfig, TextEncoding};
use chatscope::parser::{parse_chat, parse_chat_text, parse_chat_with_config};
use chatscope::platform::{Platform, PlatformHint};

const ANDROID_CHAT: &str = "\
12/31/2023, 10:15 PM - Messages and calls are end-to-end encrypted.
12/31/2023, 10:15 PM - Alice: Happy New Year 😀
12/31/2023, 10:16 PM - Bob: Same to you!
And the best for your family
12/31/2023, 10:17 PM - Alice: <Media omitted>
1/1/2024, 9:00 AM - Bob: Morning!";

const IOS_CHAT: &str = "\
[4/20/23,\u{202f}4:21:43\u{202f}AM] 343: \u{200e}Messages and calls are end-to-end encrypted.
[4/20/23,\u{202f}4:21:55\u{202f}AM] Shrey Khandelwal: Ek kaam Karo
[4/20/23,\u{202f}4:21:59\u{202f}AM] Sayantan: Bruh 🗿
[4/20/23,\u{202f}4:22:10\u{202f}AM] Shrey Khandelwal: image omitted";

#[test]
fn android_chat_end_to_end() {
    let records = parse_chat_text(ANDROID_CHAT, PlatformHint::Auto).unwrap();
    assert_eq!(records.len(), 5);

    // System notice has no author
    assert!(records[0].author.is_none());
    assert!(records[0].is_system());

    // Continuation line folded with a single space
    assert_eq!(
        records[2].message,
        "Same to you! And the best for your family"
    );

    // Media flag
    assert!(records[3].is_media);
    assert!(!records[2].is_media);

    // Chronological order across a date boundary
    assert!(records[3].timestamp < records[4].timestamp);
    assert_eq!(records[4].hour_of_day, 9);
}

#[test]
fn ios_chat_end_to_end() {
    let records = parse_chat_text(IOS_CHAT, PlatformHint::Auto).unwrap();
    assert_eq!(records.len(), 4);

    // Narrow no-break spaces and directionality marks handled
    assert_eq!(records[0].author.as_deref(), Some("343"));
    assert_eq!(records[1].author.as_deref(), Some("Shrey Khandelwal"));
    assert_eq!(records[2].message, "Bruh 🗿");

    // Seconds survive into the resolved timestamp
    assert_eq!(records[0].time, "4:21:43 AM");

    // iOS media placeholder variant
    assert!(records[3].is_media);
}

#[test]
fn bytes_entry_point_matches_text_entry_point() {
    let from_text = parse_chat_text(ANDROID_CHAT, PlatformHint::Android).unwrap();
    let from_bytes = parse_chat(ANDROID_CHAT.as_bytes(), PlatformHint::Android).unwrap();
    assert_eq!(from_text, from_bytes);
}

#[test]
fn utf16le_export_with_bom() {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in ANDROID_CHAT.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let records = parse_chat(&bytes, PlatformHint::Auto).unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[1].message, "Happy New Year 😀");
}

#[test]
fn explicit_encoding_priority_is_honored() {
    let config = ParseConfig::new().with_encodings(vec![TextEncoding::Utf8]);
    let records =
        parse_chat_with_config(ANDROID_CHAT.as_bytes(), PlatformHint::Auto, &config).unwrap();
    assert_eq!(records.len(), 5);
}

#[test]
fn forced_platform_skips_detection() {
    // A single iOS line is not enough context to matter when forced
    let records = parse_chat_text(
        "[4/20/23, 4:21:43 AM] Alice: hi",
        PlatformHint::Ios,
    )
    .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author.as_deref(), Some("Alice"));
}

#[test]
fn analytics_over_parsed_records() {
    let records = parse_chat_text(ANDROID_CHAT, PlatformHint::Auto).unwrap();
    let analyzer = ChatAnalyzer::new(records).unwrap();

    let stats = analyzer.basic_stats();
    assert_eq!(stats.total_messages, 5);
    assert_eq!(stats.total_participants, 2);
    assert_eq!(stats.days_active, 2);

    let participants = analyzer.participant_stats();
    assert_eq!(participants[0].author, "Alice");
    assert_eq!(participants[0].media_sent, 1);

    let emojis = analyzer.emoji_analysis(emoji::extract_emojis);
    assert_eq!(emojis.total_emojis, 1);
    assert_eq!(emojis.top_emojis[0].0, "😀");
}

#[test]
fn detection_reports_both_tallies_on_failure() {
    let err = parse_chat_text("one line\nanother line", PlatformHint::Auto).unwrap_err();
    assert!(err.is_detection());
    let message = err.to_string();
    assert!(message.contains("0 Android"));
    assert!(message.contains("0 iOS"));
}

#[test]
fn mixed_transcript_resolves_by_majority() {
    let mixed = "\
12/31/2023, 10:15 PM - Alice: one
[4/20/23, 4:21:43 AM] Bob: stray
12/31/2023, 10:16 PM - Alice: two
12/31/2023, 10:17 PM - Alice: three";
    let records = parse_chat_text(mixed, PlatformHint::Auto).unwrap();
    // The stray iOS line becomes a continuation of the first message
    assert_eq!(records.len(), 3);
    assert!(records[0].message.contains("stray"));
}

#[cfg(feature = "csv-output")]
#[test]
fn csv_export_round_trip() {
    use chatscope::output::to_csv;

    let records = parse_chat_text(ANDROID_CHAT, PlatformHint::Auto).unwrap();
    let csv = to_csv(&records).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Timestamp;Date;Time;Author;Message;IsMedia")
    );
    assert_eq!(csv.lines().count(), records.len() + 1);
}

#[cfg(feature = "json-output")]
#[test]
fn json_export_round_trip() {
    use chatscope::output::to_json;
    use chatscope::MessageRecord;

    let records = parse_chat_text(IOS_CHAT, PlatformHint::Auto).unwrap();
    let json = to_json(&records).unwrap();
    let parsed: Vec<MessageRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, records);
}

#[cfg(feature = "json-output")]
#[test]
fn insights_export_contains_report_sections() {
    use chatscope::output::insights_to_json;

    let records = parse_chat_text(ANDROID_CHAT, PlatformHint::Auto).unwrap();
    let analyzer = ChatAnalyzer::new(records).unwrap();
    let json = insights_to_json(&analyzer.all_insights()).unwrap();
    assert!(json.contains("basic_stats"));
    assert!(json.contains("participant_stats"));
    assert!(json.contains("word_analysis"));
}

#[test]
fn platform_hint_round_trips_through_platform() {
    assert_eq!(
        PlatformHint::from(Platform::Android).platform(),
        Some(Platform::Android)
    );
    assert_eq!(
        PlatformHint::from(Platform::Ios).platform(),
        Some(Platform::Ios)
    );
}
