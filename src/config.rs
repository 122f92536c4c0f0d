//! Parser and analytics configuration.
//!
//! All configuration is an explicit value passed into the pipeline entry
//! points; the library keeps no process-wide mutable state, so unrelated
//! calls in a long-lived service cannot interfere with each other.
//!
//! # Example
//!
//! ```rust
//! use chatscope::config::{ParseConfig, TextEncoding};
//! use chatscope::platform::PlatformHint;
//!
//! let config = ParseConfig::new()
//!     .with_encodings(vec![TextEncoding::Utf8, TextEncoding::Utf16Le])
//!     .with_default_platform(PlatformHint::Android)
//!     .with_conversation_gap_hours(2);
//! ```

use serde::{Deserialize, Serialize};

use crate::platform::PlatformHint;

/// Text encodings attempted when decoding raw export bytes.
///
/// WhatsApp exports are usually UTF-8, but exports forwarded through email
/// clients or older devices show up as UTF-16 with or without a BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// UTF-8 (a leading BOM, if present, is stripped)
    Utf8,
    /// UTF-16 little-endian
    Utf16Le,
    /// UTF-16 big-endian
    Utf16Be,
}

impl TextEncoding {
    /// The default priority order for decoding attempts.
    pub fn default_priority() -> Vec<TextEncoding> {
        vec![
            TextEncoding::Utf8,
            TextEncoding::Utf16Le,
            TextEncoding::Utf16Be,
        ]
    }
}

/// Configuration for one parse invocation.
///
/// # Example
///
/// ```rust
/// use chatscope::config::ParseConfig;
///
/// let config = ParseConfig::new().with_detection_sample(50);
/// assert_eq!(config.detection_sample, 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Encodings tried, in order, when decoding byte input (default: UTF-8,
    /// UTF-16LE, UTF-16BE)
    pub encodings: Vec<TextEncoding>,

    /// Platform assumed when the caller passes no hint (default: auto)
    pub default_platform: PlatformHint,

    /// Maximum number of non-empty lines sampled for platform detection
    /// (default: 100)
    pub detection_sample: usize,

    /// Hours of silence after which the next message starts a new
    /// conversation. Consumed by the analytics layer, not the parser
    /// (default: 1)
    pub conversation_gap_hours: i64,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            encodings: TextEncoding::default_priority(),
            default_platform: PlatformHint::Auto,
            detection_sample: 100,
            conversation_gap_hours: 1,
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the encoding priority list.
    #[must_use]
    pub fn with_encodings(mut self, encodings: Vec<TextEncoding>) -> Self {
        self.encodings = encodings;
        self
    }

    /// Sets the platform used when no hint is given.
    #[must_use]
    pub fn with_default_platform(mut self, platform: PlatformHint) -> Self {
        self.default_platform = platform;
        self
    }

    /// Sets the detection sample size.
    #[must_use]
    pub fn with_detection_sample(mut self, lines: usize) -> Self {
        self.detection_sample = lines;
        self
    }

    /// Sets the conversation gap threshold in hours.
    #[must_use]
    pub fn with_conversation_gap_hours(mut self, hours: i64) -> Self {
        self.conversation_gap_hours = hours;
        self
    }
}
