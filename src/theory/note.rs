//! Pitch-class arithmetic and note-name spelling.

use crate::error::FretwiseError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SEMITONES: usize = 12;

pub const SHARP_NOTES: [&str; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub const FLAT_NOTES: [&str; SEMITONES] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Interval names by semitone distance, unison first.
const INTERVAL_NAMES: [&str; SEMITONES] = [
    "P1", "m2", "M2", "m3", "M3", "P4", "A4/d5", "P5", "m6", "M6", "m7", "M7",
];

/// One of the 12 equal-tempered note identities, independent of octave.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Builds a pitch class from any integer, reducing modulo 12.
    pub const fn new(value: i32) -> Self {
        Self(((value % 12 + 12) % 12) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Moves the pitch class up (or down for negative input) by semitones.
    pub const fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }

    /// Semitone distance from `other` up to `self`, in `[0, 11]`.
    pub const fn offset_from(self, other: PitchClass) -> u8 {
        (self.0 + 12 - other.0) % 12
    }

    /// Spelled note name from the sharp or flat table.
    pub const fn name(self, prefer_sharp: bool) -> &'static str {
        if prefer_sharp {
            SHARP_NOTES[self.0 as usize]
        } else {
            FLAT_NOTES[self.0 as usize]
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(true))
    }
}

/// Resolves a note spelling to its pitch class.
///
/// Octave digits are stripped (`"E2"` parses as `E`), the German `H` is
/// read as `B`, and case is ignored.
pub fn note_value(name: &str) -> Result<PitchClass, FretwiseError> {
    let stripped: String = name
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect();
    let mut chars = stripped.chars();
    let Some(first) = chars.next() else {
        return Err(FretwiseError::UnknownNote(name.to_string()));
    };
    // uppercase letter, lowercase accidental
    let mut token = first.to_ascii_uppercase().to_string();
    token.push_str(&chars.as_str().to_ascii_lowercase());
    if token == "H" {
        // German notation
        token = "B".to_string();
    }
    for (value, spelling) in SHARP_NOTES.iter().enumerate() {
        if *spelling == token {
            return Ok(PitchClass::new(value as i32));
        }
    }
    for (value, spelling) in FLAT_NOTES.iter().enumerate() {
        if *spelling == token {
            return Ok(PitchClass::new(value as i32));
        }
    }
    Err(FretwiseError::UnknownNote(name.to_string()))
}

/// Conventional name of the interval from `low` up to `high`.
pub const fn interval_name(low: PitchClass, high: PitchClass) -> &'static str {
    INTERVAL_NAMES[high.offset_from(low) as usize]
}

/// Spelling preference used throughout the engine.
///
/// Flats win for flat-spelled roots and for F; C and G major stay sharp;
/// everything else follows the caller's default.
pub fn prefer_sharp_for(root_name: &str, quality: &str, default_sharp: bool) -> bool {
    if root_name.len() > 1 && root_name.as_bytes()[1] == b'b' {
        return false;
    }
    if root_name == "F" {
        return false;
    }
    if (root_name == "C" || root_name == "G") && quality == "maj" {
        return true;
    }
    default_sharp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_value_spellings() {
        assert_eq!(note_value("C").unwrap().value(), 0);
        assert_eq!(note_value("C#").unwrap().value(), 1);
        assert_eq!(note_value("Db").unwrap().value(), 1);
        assert_eq!(note_value("D").unwrap().value(), 2);
        assert_eq!(note_value("B").unwrap().value(), 11);
        // German notation
        assert_eq!(note_value("H").unwrap().value(), 11);
        // case-insensitive
        assert_eq!(note_value("c").unwrap().value(), 0);
        assert_eq!(note_value("db").unwrap().value(), 1);
        // octave digits stripped
        assert_eq!(note_value("E2").unwrap().value(), 4);
        assert_eq!(note_value("G3").unwrap().value(), 7);
    }

    #[test]
    fn test_note_value_rejects_garbage() {
        assert!(note_value("X").is_err());
        assert!(note_value("C##").is_err());
        assert!(note_value("").is_err());
        assert!(note_value("42").is_err());
    }

    #[test]
    fn test_note_name_wrapping() {
        assert_eq!(PitchClass::new(0).name(true), "C");
        assert_eq!(PitchClass::new(1).name(true), "C#");
        assert_eq!(PitchClass::new(1).name(false), "Db");
        assert_eq!(PitchClass::new(11).name(true), "B");
        // octave wrap
        assert_eq!(PitchClass::new(12).name(true), "C");
        // negative wrap
        assert_eq!(PitchClass::new(-1).name(true), "B");
    }

    #[test]
    fn test_round_trip_spelling() {
        for spelling in SHARP_NOTES.iter().chain(FLAT_NOTES.iter()) {
            let value = note_value(spelling).unwrap();
            let sharp = note_value(value.name(true)).unwrap();
            let flat = note_value(value.name(false)).unwrap();
            assert_eq!(value, sharp, "sharp round trip for {spelling}");
            assert_eq!(value, flat, "flat round trip for {spelling}");
        }
    }

    #[test]
    fn test_transpose_and_offset() {
        let e = note_value("E").unwrap();
        let g = note_value("G").unwrap();
        assert_eq!(e.transpose(3), g);
        assert_eq!(g.offset_from(e), 3);
        assert_eq!(e.offset_from(g), 9);
        assert_eq!(e.transpose(-12), e);
    }

    #[test]
    fn test_interval_names() {
        let c = note_value("C").unwrap();
        assert_eq!(interval_name(c, note_value("C").unwrap()), "P1");
        assert_eq!(interval_name(c, note_value("Db").unwrap()), "m2");
        assert_eq!(interval_name(c, note_value("E").unwrap()), "M3");
        assert_eq!(interval_name(c, note_value("F#").unwrap()), "A4/d5");
        assert_eq!(interval_name(c, note_value("B").unwrap()), "M7");
        // G up to C is a fourth
        assert_eq!(interval_name(note_value("G").unwrap(), c), "P4");
    }

    #[test]
    fn test_spelling_preference() {
        assert!(!prefer_sharp_for("Bb", "maj", true));
        assert!(!prefer_sharp_for("F", "m7", true));
        assert!(prefer_sharp_for("C", "maj", false));
        assert!(prefer_sharp_for("G", "maj", false));
        // non-major C falls back to the caller default
        assert!(!prefer_sharp_for("C", "m", false));
        assert!(prefer_sharp_for("D", "7", true));
    }
}
