//! Range-based emoji extraction.
//!
//! Detection is by Unicode codepoint range over the pictographic blocks that
//! cover the overwhelming majority of chat emoji. Skin-tone modifiers and
//! zero-width-joiner sequences are reported as their component emoji rather
//! than as single grapheme clusters; for frequency ranking that distinction
//! rarely matters.

/// Codepoint ranges treated as emoji, inclusive on both ends.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F5FF), // Misc symbols and pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and map
    (0x1F900, 0x1F9FF), // Supplemental symbols and pictographs
    (0x1FA70, 0x1FAFF), // Symbols and pictographs extended-A
    (0x2600, 0x26FF),   // Miscellaneous symbols
    (0x2700, 0x27BF),   // Dingbats
    (0x1F1E6, 0x1F1FF), // Regional indicators (flags)
    (0x1F004, 0x1F004), // Mahjong tile red dragon
    (0x1F0CF, 0x1F0CF), // Playing card black joker
];

/// Returns `true` if `c` is an emoji codepoint.
pub fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES.iter().any(|&(start, end)| cp >= start && cp <= end)
}

/// Extracts emoji characters from `text` in order of appearance.
pub fn extract_emojis(text: &str) -> Vec<String> {
    text.chars()
        .filter(|&c| is_emoji(c))
        .map(|c| c.to_string())
        .collect()
}
