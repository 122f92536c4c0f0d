//! # Chatscope
//!
//! A Rust library for parsing WhatsApp chat exports into structured records
//! and computing chat analytics.
//!
//! ## Overview
//!
//! WhatsApp's "export chat" feature produces a TXT transcript whose layout
//! depends on the phone that generated it:
//!
//! - **Android** — `12/31/2023, 10:15 PM - Alice: Hello`
//! - **iOS** — `[4/20/23, 4:21:43 AM] Alice: Hello`
//!
//! Chatscope decodes the raw bytes (UTF-8 and UTF-16 variants), detects the
//! platform when not told, reassembles multi-line messages, resolves the
//! ambiguous numeric dates into absolute timestamps, and hands back a
//! chronologically ordered set of [`MessageRecord`]s. The [`analytics`]
//! module then answers aggregate questions: participant activity, response
//! times, conversation starters, word and emoji frequency.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatscope::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "12/31/2023, 10:15 PM - Alice: Happy New Year!\n\
//!                       12/31/2023, 10:16 PM - Bob: Same to you!";
//!
//!     // Platform is detected from the transcript itself
//!     let records = parse_chat_text(transcript, PlatformHint::Auto)?;
//!     assert_eq!(records.len(), 2);
//!
//!     let analyzer = ChatAnalyzer::new(records)?;
//!     let stats = analyzer.basic_stats();
//!     assert_eq!(stats.total_participants, 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — the parsing pipeline
//!   - [`parse_chat`](parser::parse_chat) / [`parse_chat_text`](parser::parse_chat_text) — entry points
//!   - [`parser::decode`], [`parser::normalize`], [`parser::detect`],
//!     [`parser::assemble`], [`parser::builder`] — the stages
//! - [`record`] — [`MessageRecord`], the parser's output type
//! - [`platform`] — [`Platform`] and [`PlatformHint`]
//! - [`config`] — [`ParseConfig`] and encoding priorities
//! - [`analytics`] — [`ChatAnalyzer`](analytics::ChatAnalyzer) and the insight types
//! - [`output`] — CSV/JSON writers (feature-gated)
//! - [`cli`] — CLI argument types (requires the `cli` feature)
//! - [`error`] — Unified error types ([`ChatscopeError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod analytics;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod platform;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatscopeError, Result};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatscope::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::MessageRecord;

    // Error types
    pub use crate::error::{ChatscopeError, Result};

    // Parser entry points
    pub use crate::parser::{
        parse_chat, parse_chat_text, parse_chat_text_with_config, parse_chat_with_config,
    };

    // Platform selection
    pub use crate::platform::{Platform, PlatformHint};

    // Configuration
    pub use crate::config::{ParseConfig, TextEncoding};

    // Analytics
    pub use crate::analytics::{ChatAnalyzer, ChatInsights};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
}
