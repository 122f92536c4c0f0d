//! Platform auto-detection.
//!
//! Samples the leading non-empty lines of a transcript, tallies how many
//! match each platform's header shape, and returns the strict majority.
//! Exports are generated in one format, so a small sample is representative;
//! a tie (including zero matches on both sides) is a hard failure rather than
//! a guess, because picking the wrong layout silently corrupts chronology.

use tracing::info;

use crate::error::{ChatscopeError, Result};
use crate::parser::pattern::HeaderMatcher;
use crate::platform::Platform;

/// Detects the export platform from normalized lines.
///
/// Examines at most `sample` non-empty lines. Fails with
/// [`ChatscopeError::Detection`] when neither format wins a strict majority.
pub fn detect_platform(lines: &[String], sample: usize) -> Result<Platform> {
    let android = HeaderMatcher::new(Platform::Android);
    let ios = HeaderMatcher::new(Platform::Ios);

    let mut android_count = 0usize;
    let mut ios_count = 0usize;

    for line in lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .take(sample)
    {
        if android.matches(line) {
            android_count += 1;
        } else if ios.matches(line) {
            ios_count += 1;
        }
    }

    if android_count > ios_count {
        info!(android_count, ios_count, "detected Android format");
        Ok(Platform::Android)
    } else if ios_count > android_count {
        info!(android_count, ios_count, "detected iOS format");
        Ok(Platform::Ios)
    } else {
        Err(ChatscopeError::detection(android_count, ios_count))
    }
}
