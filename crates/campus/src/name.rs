//! Canonical spot-name normalization.
//!
//! The backend keys active counts by display name, and those names have
//! arrived with surrounding whitespace, zero-width characters pasted in
//! from spreadsheets, and mixed Hangul composition forms. The same
//! normalization is applied to directory keys and lookup input so the
//! two always meet in the middle. Matching stays case-sensitive.

use unicode_normalization::UnicodeNormalization;

/// Zero-width space, non-joiner, joiner, and the BOM.
const ZERO_WIDTH: [char; 4] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

/// Normalize a raw spot name: strip zero-width characters, trim
/// surrounding whitespace, then apply Unicode NFC.
///
/// Zero-width characters are stripped before trimming so that a name
/// wrapped in `"\u{200B} ..."` still loses its padding; this keeps the
/// function idempotent.
pub fn normalize_name(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !ZERO_WIDTH.contains(c)).collect();
    stripped.trim().nfc().collect()
}
