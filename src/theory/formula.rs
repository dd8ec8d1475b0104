//! Chord-quality interval formulas and quality-spelling normalization.

/// Semitone offsets from the root per chord quality.
///
/// Compound intervals are stored as `n + 12` (14 for the 9th) so they stay
/// distinct from their unison-class equivalents until the final modulo
/// reduction into pitch classes. Every formula starts at 0: the root is
/// always part of the chord.
pub const CHORD_FORMULAS: [(&str, &[i32]); 19] = [
    ("maj", &[0, 4, 7]),
    ("m", &[0, 3, 7]),
    ("7", &[0, 4, 7, 10]),
    ("maj7", &[0, 4, 7, 11]),
    ("m7", &[0, 3, 7, 10]),
    ("dim", &[0, 3, 6]),
    ("dim7", &[0, 3, 6, 9]),
    ("aug", &[0, 4, 8]),
    ("sus2", &[0, 2, 7]),
    ("sus4", &[0, 5, 7]),
    ("5", &[0, 7]),
    ("6", &[0, 4, 7, 9]),
    ("m6", &[0, 3, 7, 9]),
    ("9", &[0, 4, 7, 10, 14]),
    ("maj9", &[0, 4, 7, 11, 14]),
    ("m9", &[0, 3, 7, 10, 14]),
    ("add9", &[0, 4, 7, 14]),
    ("madd9", &[0, 3, 7, 14]),
    ("m7b5", &[0, 3, 6, 10]),
];

/// Quality spellings accepted after the root of a chord symbol, mapped onto
/// the formula keys above. Matched in order against the whole remainder,
/// most specific spelling first: `m7b5` must win before `m7`, `m7` before
/// `m`, `maj9` before `9`. That ordering is load-bearing and tested.
pub const QUALITY_SPELLINGS: [(&str, &str); 33] = [
    ("maj9", "maj9"),
    ("madd9", "madd9"),
    ("add9", "add9"),
    ("maj7", "maj7"),
    ("major7", "maj7"),
    ("M7", "maj7"),
    ("m7b5", "m7b5"),
    ("min7b5", "m7b5"),
    ("m9", "m9"),
    ("min9", "m9"),
    ("m7", "m7"),
    ("min7", "m7"),
    ("m6", "m6"),
    ("min6", "m6"),
    ("dim7", "dim7"),
    ("dim", "dim"),
    ("aug", "aug"),
    ("+", "aug"),
    ("sus2", "sus2"),
    ("sus4", "sus4"),
    ("sus", "sus4"),
    ("major", "maj"),
    ("maj", "maj"),
    ("M", "maj"),
    ("dominant7", "7"),
    ("dom7", "7"),
    ("9", "9"),
    ("7", "7"),
    ("6", "6"),
    ("5", "5"),
    ("min", "m"),
    ("mi", "m"),
    ("m", "m"),
];

/// Normalizes the raw quality part of a chord symbol to a formula key.
///
/// The empty remainder is a plain major chord. Unknown spellings return
/// `None` so callers can degrade instead of failing.
pub fn normalize_quality(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some("maj");
    }
    QUALITY_SPELLINGS
        .iter()
        .find(|(spelling, _)| *spelling == raw)
        .map(|(_, key)| *key)
}

/// Interval offsets for a normalized quality key.
pub fn formula_for(quality_key: &str) -> Option<&'static [i32]> {
    CHORD_FORMULAS
        .iter()
        .find(|(key, _)| *key == quality_key)
        .map(|(_, offsets)| *offsets)
}
