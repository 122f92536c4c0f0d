//! Unified error types for chatscope.
//!
//! This module provides a single [`ChatscopeError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Expected per-record failures (an unparseable timestamp on a single message)
//! are handled by exclusion inside the parser and never surface here. The
//! library either returns a non-empty record set or an error; it never returns
//! an empty set disguised as success.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatscope operations.
///
/// # Example
///
/// ```rust
/// use chatscope::error::Result;
/// use chatscope::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatscopeError>;

/// The error type for all chatscope operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatscopeError {
    /// An I/O error occurred while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Every configured text encoding rejected the input and even the lossy
    /// fallback produced nothing usable.
    ///
    /// This is rare; it typically indicates corrupt input. Mis-encoded but
    /// recoverable exports are decoded lossily instead of failing.
    #[error("Failed to decode chat export: {reason}")]
    Decode {
        /// Description of what went wrong
        reason: String,
    },

    /// Platform auto-detection found no format majority.
    ///
    /// Raised when the sampled lines match neither format, or match both
    /// equally. Retry with an explicit platform hint.
    #[error(
        "Could not determine export platform ({android_matches} Android vs {ios_matches} iOS header lines). \
         Pass an explicit platform instead of auto-detection."
    )]
    Detection {
        /// Header lines that matched the Android format
        android_matches: usize,
        /// Header lines that matched the iOS format
        ios_matches: usize,
    },

    /// No records could be recovered from the transcript.
    ///
    /// The [`ParseReason`] distinguishes the stage that came up empty.
    #[error("Failed to parse chat export: {reason}")]
    Parse {
        /// The precipitating condition
        #[source]
        reason: ParseReason,
    },

    /// The platform hint is not one of the recognized values.
    #[error("Unknown platform '{input}'. Expected one of: auto, android, ios")]
    InvalidPlatform {
        /// The unrecognized platform string
        input: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The specific condition behind a [`ChatscopeError::Parse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseReason {
    /// The input was empty or whitespace-only.
    #[error("input is empty")]
    EmptyInput,

    /// No line matched the platform's header format, so no message could be
    /// assembled.
    #[error("no messages found in chat export")]
    NoRecords,

    /// Messages were assembled but none had a parseable timestamp, which
    /// usually means the date templates do not match the export's locale.
    #[error("no valid timestamps found after parsing")]
    NoValidTimestamps,

    /// A line matched a format's header shape but structural extraction
    /// failed. This indicates a defect in the matcher patterns, not bad input.
    #[error("malformed header line: {0}")]
    MalformedHeader(String),
}

impl ChatscopeError {
    /// Creates a decode error.
    pub fn decode(reason: impl Into<String>) -> Self {
        ChatscopeError::Decode {
            reason: reason.into(),
        }
    }

    /// Creates a detection error from the two match tallies.
    pub fn detection(android_matches: usize, ios_matches: usize) -> Self {
        ChatscopeError::Detection {
            android_matches,
            ios_matches,
        }
    }

    /// Creates a parse error with the given reason.
    pub fn parse(reason: ParseReason) -> Self {
        ChatscopeError::Parse { reason }
    }

    /// Creates an invalid platform error.
    pub fn invalid_platform(input: impl Into<String>) -> Self {
        ChatscopeError::InvalidPlatform {
            input: input.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatscopeError::Io(_))
    }

    /// Returns `true` if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, ChatscopeError::Decode { .. })
    }

    /// Returns `true` if this is a detection error.
    pub fn is_detection(&self) -> bool {
        matches!(self, ChatscopeError::Detection { .. })
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatscopeError::Parse { .. })
    }

    /// Returns `true` if this is an invalid platform error.
    pub fn is_invalid_platform(&self) -> bool {
        matches!(self, ChatscopeError::InvalidPlatform { .. })
    }
}
