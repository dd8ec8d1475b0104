//! Scale generation from a root note and a scale-type name.

use crate::error::FretwiseError;
use crate::theory::note::{note_value, prefer_sharp_for, PitchClass};
use serde::{Deserialize, Serialize};

/// Scale types known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    PentatonicMajor,
    PentatonicMinor,
    Blues,
}

impl ScaleKind {
    /// Looks up a scale kind by name. Accepts the common snake_case
    /// spellings (`"harmonic_minor"`, `"pentatonic_major"`, ...).
    pub fn from_name(name: &str) -> Option<ScaleKind> {
        match name.trim().to_ascii_lowercase().as_str() {
            "major" | "ionian" => Some(ScaleKind::Major),
            "minor" | "natural_minor" | "aeolian" => Some(ScaleKind::NaturalMinor),
            "harmonic_minor" => Some(ScaleKind::HarmonicMinor),
            "melodic_minor" => Some(ScaleKind::MelodicMinor),
            "dorian" => Some(ScaleKind::Dorian),
            "phrygian" => Some(ScaleKind::Phrygian),
            "lydian" => Some(ScaleKind::Lydian),
            "mixolydian" => Some(ScaleKind::Mixolydian),
            "locrian" => Some(ScaleKind::Locrian),
            "pentatonic_major" | "major_pentatonic" => Some(ScaleKind::PentatonicMajor),
            "pentatonic_minor" | "minor_pentatonic" => Some(ScaleKind::PentatonicMinor),
            "blues" => Some(ScaleKind::Blues),
            _ => None,
        }
    }

    /// Semitone offsets from the root, in scale-degree order.
    pub const fn intervals(self) -> &'static [i32] {
        match self {
            ScaleKind::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleKind::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleKind::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleKind::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            ScaleKind::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleKind::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleKind::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleKind::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleKind::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleKind::PentatonicMajor => &[0, 2, 4, 7, 9],
            ScaleKind::PentatonicMinor => &[0, 3, 5, 7, 10],
            ScaleKind::Blues => &[0, 3, 5, 6, 7, 10],
        }
    }
}

/// A generated scale. `notes` keeps scale-degree order, not pitch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub root: PitchClass,
    pub root_name: String,
    pub kind: ScaleKind,
    pub notes: Vec<PitchClass>,
}

impl Scale {
    /// Scale notes spelled with the engine's sharp/flat preference rule.
    pub fn note_names(&self) -> Vec<&'static str> {
        let quality = if self.kind == ScaleKind::Major { "maj" } else { "" };
        let prefer_sharp = prefer_sharp_for(&self.root_name, quality, true);
        self.notes.iter().map(|n| n.name(prefer_sharp)).collect()
    }
}

/// Generates a scale from a root spelling and a scale-type name.
///
/// An unknown scale type falls back to major with a warning; only an
/// unresolvable root is an error.
pub fn generate_scale(root: &str, scale_type: &str) -> Result<Scale, FretwiseError> {
    let root_value = note_value(root)?;
    let kind = ScaleKind::from_name(scale_type).unwrap_or_else(|| {
        log::warn!("unknown scale type: {scale_type}, defaulting to major");
        ScaleKind::Major
    });
    let notes = kind
        .intervals()
        .iter()
        .map(|&offset| root_value.transpose(offset))
        .collect();
    log::debug!("generated {root} {kind:?} scale");
    Ok(Scale {
        root: root_value,
        root_name: root.trim().to_string(),
        kind,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(root: &str, kind: &str) -> Vec<&'static str> {
        generate_scale(root, kind).unwrap().note_names()
    }

    #[test]
    fn test_major_scales() {
        assert_eq!(names("C", "major"), vec!["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(names("G", "major"), vec!["G", "A", "B", "C", "D", "E", "F#"]);
        // F prefers flats
        assert_eq!(names("F", "major"), vec!["F", "G", "A", "Bb", "C", "D", "E"]);
        assert_eq!(
            names("Db", "major"),
            vec!["Db", "Eb", "F", "Gb", "Ab", "Bb", "C"]
        );
    }

    #[test]
    fn test_minor_scales() {
        assert_eq!(names("A", "minor"), vec!["A", "B", "C", "D", "E", "F", "G"]);
        assert_eq!(names("E", "minor"), vec!["E", "F#", "G", "A", "B", "C", "D"]);
        assert_eq!(
            names("A", "harmonic_minor"),
            vec!["A", "B", "C", "D", "E", "F", "G#"]
        );
    }

    #[test]
    fn test_modes_and_pentatonics() {
        assert_eq!(
            names("D", "dorian"),
            vec!["D", "E", "F", "G", "A", "B", "C"]
        );
        assert_eq!(names("C", "pentatonic_major"), vec!["C", "D", "E", "G", "A"]);
        assert_eq!(names("A", "pentatonic_minor"), vec!["A", "C", "D", "E", "G"]);
        assert_eq!(names("A", "blues"), vec!["A", "C", "D", "D#", "E", "G"]);
    }

    #[test]
    fn test_unknown_scale_type_defaults_to_major() {
        let scale = generate_scale("C", "unknown_scale").unwrap();
        assert_eq!(scale.kind, ScaleKind::Major);
        assert_eq!(scale.note_names(), vec!["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_invalid_root_is_an_error() {
        assert!(generate_scale("X", "major").is_err());
    }

    #[test]
    fn test_scale_degree_order_is_preserved() {
        // degree order, not ascending pitch order: B locrian wraps past C
        let scale = generate_scale("B", "locrian").unwrap();
        let values: Vec<u8> = scale.notes.iter().map(|n| n.value()).collect();
        assert_eq!(values, vec![11, 0, 2, 4, 5, 7, 9]);
    }
}
