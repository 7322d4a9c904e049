use std::ops::RangeInclusive;

/// Variation selectors change presentation only and are not part of an
/// emoji's identity.
pub const VARIATION_SELECTORS: RangeInclusive<u32> = 0xfe00..=0xfe0f;

pub const CODEPOINT_SEPARATOR: &str = "-";

/// Derive the hyphen-joined lowercase hex codepoint string for a raw glyph,
/// e.g. `"🇫🇷"` -> `"1f1eb-1f1f7"`. Each scalar value is padded to at least
/// four digits. Returns an empty string for an empty glyph or one made only
/// of variation selectors.
pub fn derive_codepoint(glyph: &str) -> String {
    glyph
        .chars()
        .map(u32::from)
        .filter(|scalar| !VARIATION_SELECTORS.contains(scalar))
        .map(|scalar| format!("{scalar:04x}"))
        .collect::<Vec<_>>()
        .join(CODEPOINT_SEPARATOR)
}
