//! The chat export parsing pipeline.
//!
//! Parsing is a fixed sequence of stages, each owned by a submodule:
//!
//! 1. [`decode`] turns raw bytes into text lines
//! 2. [`normalize`] strips directionality marks, BOMs, and line endings
//! 3. [`detect`] picks the platform when the caller did not
//! 4. [`assemble`] folds header and continuation lines into raw records
//! 5. [`builder`] resolves timestamps, sorts, and derives calendar fields
//!
//! The entry points here wire the stages together. [`parse_chat`] accepts
//! raw bytes and runs the full pipeline; [`parse_chat_text`] skips decoding
//! for callers that already hold a string.
//!
//! # Example
//!
//! ```rust
//! use chatscope::parser::parse_chat_text;
//! use chatscope::platform::PlatformHint;
//!
//! let transcript = "12/31/2023, 10:15 PM - Alice: Hello there!\n\
//!                   12/31/2023, 10:16 PM - Bob: Hi Alice!";
//! let records = parse_chat_text(transcript, PlatformHint::Auto).unwrap();
//! assert_eq!(records.len(), 2);
//! ```

pub mod assemble;
pub mod builder;
pub mod decode;
pub mod detect;
pub mod normalize;
pub mod pattern;
pub mod timestamp;

use tracing::debug;

use crate::config::ParseConfig;
use crate::error::{ChatscopeError, ParseReason, Result};
use crate::platform::{Platform, PlatformHint};
use crate::record::MessageRecord;

pub use assemble::RawRecord;
pub use pattern::{HeaderMatcher, ParsedHeader};

/// Parses a raw chat export with the default configuration.
///
/// Decodes `bytes`, detects the platform unless `hint` names one, and
/// returns records in chronological order. Fails rather than returning an
/// empty set; see [`ChatscopeError`] for the cases.
pub fn parse_chat(bytes: &[u8], hint: PlatformHint) -> Result<Vec<MessageRecord>> {
    parse_chat_with_config(bytes, hint, &ParseConfig::default())
}

/// Parses a raw chat export under an explicit configuration.
pub fn parse_chat_with_config(
    bytes: &[u8],
    hint: PlatformHint,
    config: &ParseConfig,
) -> Result<Vec<MessageRecord>> {
    let lines = decode::decode_bytes(bytes, &config.encodings)?;
    parse_lines(lines, hint, config)
}

/// Parses an already-decoded transcript with the default configuration.
pub fn parse_chat_text(text: &str, hint: PlatformHint) -> Result<Vec<MessageRecord>> {
    parse_chat_text_with_config(text, hint, &ParseConfig::default())
}

/// Parses an already-decoded transcript under an explicit configuration.
pub fn parse_chat_text_with_config(
    text: &str,
    hint: PlatformHint,
    config: &ParseConfig,
) -> Result<Vec<MessageRecord>> {
    parse_lines(decode::split_lines(text), hint, config)
}

fn parse_lines(
    lines: Vec<String>,
    hint: PlatformHint,
    config: &ParseConfig,
) -> Result<Vec<MessageRecord>> {
    let lines: Vec<String> = lines
        .iter()
        .map(|line| normalize::normalize_line(line))
        .collect();

    if lines.iter().all(|line| line.trim().is_empty()) {
        return Err(ChatscopeError::parse(ParseReason::EmptyInput));
    }

    let platform = resolve_platform(&lines, hint, config)?;
    debug!(?platform, line_count = lines.len(), "parsing transcript");

    let matcher = HeaderMatcher::new(platform);
    let raw = assemble::assemble_records(&lines, &matcher)?;
    builder::build_records(raw, platform)
}

/// Resolves the effective platform from the hint, the configured default,
/// and finally auto-detection.
fn resolve_platform(lines: &[String], hint: PlatformHint, config: &ParseConfig) -> Result<Platform> {
    if let Some(platform) = hint.platform() {
        return Ok(platform);
    }
    if let Some(platform) = config.default_platform.platform() {
        return Ok(platform);
    }
    detect::detect_platform(lines, config.detection_sample)
}
