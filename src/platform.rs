//! Export platform identification.
//!
//! WhatsApp produces two different text layouts depending on the phone that
//! generated the export:
//!
//! - **Android**: `12/31/2023, 10:15 PM - Alice: Hello`
//! - **iOS**: `[4/20/23, 4:21:43 AM] Alice: Hello`
//!
//! [`Platform`] names a concrete layout; [`PlatformHint`] is what callers pass
//! to [`parse_chat`](crate::parser::parse_chat) and additionally allows
//! [`Auto`](PlatformHint::Auto) to request detection from the transcript
//! itself.

use serde::{Deserialize, Serialize};

use crate::error::ChatscopeError;

/// A concrete export layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android TXT export: `DATE, TIME - AUTHOR: MESSAGE`
    Android,
    /// iOS TXT export: `[DATE, TIME] AUTHOR: MESSAGE`
    Ios,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Android => write!(f, "Android"),
            Platform::Ios => write!(f, "iOS"),
        }
    }
}

/// Platform selection passed to the parser entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformHint {
    /// Detect the platform from the transcript's leading lines.
    #[default]
    Auto,
    /// Force the Android layout.
    Android,
    /// Force the iOS layout.
    Ios,
}

impl PlatformHint {
    /// Returns the forced platform, or `None` for [`Auto`](PlatformHint::Auto).
    pub fn platform(self) -> Option<Platform> {
        match self {
            PlatformHint::Auto => None,
            PlatformHint::Android => Some(Platform::Android),
            PlatformHint::Ios => Some(Platform::Ios),
        }
    }

    /// Returns all recognized hint names.
    pub fn all_names() -> &'static [&'static str] {
        &["auto", "android", "ios"]
    }
}

impl From<Platform> for PlatformHint {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Android => PlatformHint::Android,
            Platform::Ios => PlatformHint::Ios,
        }
    }
}

impl std::fmt::Display for PlatformHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformHint::Auto => write!(f, "auto"),
            PlatformHint::Android => write!(f, "android"),
            PlatformHint::Ios => write!(f, "ios"),
        }
    }
}

impl std::str::FromStr for PlatformHint {
    type Err = ChatscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(PlatformHint::Auto),
            "android" => Ok(PlatformHint::Android),
            "ios" => Ok(PlatformHint::Ios),
            _ => Err(ChatscopeError::invalid_platform(s)),
        }
    }
}
