//! Line normalization.
//!
//! iOS exports pepper lines with Unicode directionality marks, and decoded
//! text can retain a BOM or stray carriage returns. Normalization strips all
//! of that so the matchers see a predictable line shape.

/// Normalizes a single raw line.
///
/// Removes U+200E/U+200F directionality marks anywhere in the line, strips a
/// leading BOM, and trims trailing newline/carriage-return characters.
/// Idempotent: normalizing a normalized line returns it unchanged.
pub fn normalize_line(line: &str) -> String {
    let without_marks: String = line.chars().filter(|&c| c != '\u{200e}' && c != '\u{200f}').collect();
    without_marks
        .trim_start_matches('\u{feff}')
        .trim_end_matches(['\n', '\r'])
        .to_string()
}
