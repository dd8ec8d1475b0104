//! Static catalogue of open and movable (barre) chord shape templates.

use crate::shapes::{ChordShape, StringFingering};
use crate::theory::note::PitchClass;
use std::collections::HashMap;

// template roots
const C: PitchClass = PitchClass::new(0);
const D: PitchClass = PitchClass::new(2);
const E: PitchClass = PitchClass::new(4);
const G: PitchClass = PitchClass::new(7);
const A: PitchClass = PitchClass::new(9);

/// The catalogue of known chord shapes, keyed by quality.
///
/// Built once at process start and never mutated; the advisor holds it by
/// value and looks shapes up per suggestion call.
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    shapes: HashMap<&'static str, Vec<ChordShape>>,
}

/// Builds per-string slots from (fret, finger) pairs, low string first.
/// Finger -1 is muted, 0 is open, 1-4 a fretting finger.
fn slots(pairs: [(i8, i8); 6]) -> Vec<StringFingering> {
    pairs
        .iter()
        .map(|&(fret, finger)| match finger {
            -1 => StringFingering::Muted,
            0 => StringFingering::Open,
            f => StringFingering::Fretted {
                fret: fret as u8,
                finger: f as u8,
            },
        })
        .collect()
}

fn open_shape(
    name: &str,
    root: PitchClass,
    quality: &str,
    pairs: [(i8, i8); 6],
) -> ChordShape {
    ChordShape {
        name: name.to_string(),
        root,
        quality: quality.to_string(),
        strings: slots(pairs),
        base_fret: 0,
        movable: false,
        barre_strings: Vec::new(),
    }
}

fn movable_shape(
    name: &str,
    root: PitchClass,
    quality: &str,
    pairs: [(i8, i8); 6],
    barre_strings: &[usize],
) -> ChordShape {
    ChordShape {
        name: name.to_string(),
        root,
        quality: quality.to_string(),
        strings: slots(pairs),
        base_fret: 0,
        movable: true,
        barre_strings: barre_strings.to_vec(),
    }
}

impl Default for ShapeLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

impl ShapeLibrary {
    /// The standard catalogue: E/A-rooted movable barre forms plus the
    /// common open-position shapes.
    pub fn standard() -> Self {
        let mut shapes: HashMap<&'static str, Vec<ChordShape>> = HashMap::new();

        shapes.insert(
            "maj",
            vec![
                movable_shape(
                    "E Shape Barre",
                    E,
                    "maj",
                    [(0, 1), (2, 3), (2, 4), (1, 2), (0, 1), (0, 1)],
                    &[0, 1, 2, 3, 4, 5],
                ),
                movable_shape(
                    "A Shape Barre",
                    A,
                    "maj",
                    [(-1, -1), (0, 1), (2, 2), (2, 3), (2, 4), (0, 1)],
                    &[1, 2, 3, 4, 5],
                ),
                open_shape(
                    "C Major Open",
                    C,
                    "maj",
                    [(-1, -1), (3, 3), (2, 2), (0, 0), (1, 1), (0, 0)],
                ),
                open_shape(
                    "G Major Open",
                    G,
                    "maj",
                    [(3, 2), (2, 1), (0, 0), (0, 0), (0, 0), (3, 3)],
                ),
                open_shape(
                    "D Major Open",
                    D,
                    "maj",
                    [(-1, -1), (-1, -1), (0, 0), (2, 1), (3, 3), (2, 2)],
                ),
                open_shape(
                    "A Major Open",
                    A,
                    "maj",
                    [(-1, -1), (0, 0), (2, 1), (2, 2), (2, 3), (0, 0)],
                ),
                open_shape(
                    "E Major Open",
                    E,
                    "maj",
                    [(0, 0), (2, 2), (2, 3), (1, 1), (0, 0), (0, 0)],
                ),
            ],
        );

        shapes.insert(
            "min",
            vec![
                movable_shape(
                    "Em Shape Barre",
                    E,
                    "min",
                    [(0, 1), (2, 3), (2, 4), (0, 1), (0, 1), (0, 1)],
                    &[0, 1, 2, 3, 4, 5],
                ),
                movable_shape(
                    "Am Shape Barre",
                    A,
                    "min",
                    [(-1, -1), (0, 1), (2, 3), (2, 4), (1, 2), (0, 1)],
                    &[1, 2, 3, 4, 5],
                ),
                open_shape(
                    "Am Minor Open",
                    A,
                    "min",
                    [(-1, -1), (0, 0), (2, 2), (2, 3), (1, 1), (0, 0)],
                ),
                open_shape(
                    "Em Minor Open",
                    E,
                    "min",
                    [(0, 0), (2, 2), (2, 3), (0, 0), (0, 0), (0, 0)],
                ),
                open_shape(
                    "Dm Minor Open",
                    D,
                    "min",
                    [(-1, -1), (-1, -1), (0, 0), (2, 2), (3, 3), (1, 1)],
                ),
            ],
        );

        shapes.insert(
            "7",
            vec![
                movable_shape(
                    "E7 Shape Barre",
                    E,
                    "7",
                    [(0, 1), (2, 3), (0, 1), (1, 2), (0, 1), (0, 1)],
                    &[0, 1, 2, 3, 4, 5],
                ),
                movable_shape(
                    "A7 Shape Barre",
                    A,
                    "7",
                    [(-1, -1), (0, 1), (2, 3), (0, 1), (2, 4), (0, 1)],
                    &[1, 2, 3, 4, 5],
                ),
                open_shape(
                    "C7 Open",
                    C,
                    "7",
                    [(-1, -1), (3, 3), (2, 2), (3, 4), (1, 1), (0, 0)],
                ),
                open_shape(
                    "G7 Open",
                    G,
                    "7",
                    [(3, 3), (2, 2), (0, 0), (0, 0), (0, 0), (1, 1)],
                ),
                open_shape(
                    "D7 Open",
                    D,
                    "7",
                    [(-1, -1), (-1, -1), (0, 0), (2, 2), (1, 1), (2, 3)],
                ),
                open_shape(
                    "A7 Open",
                    A,
                    "7",
                    [(-1, -1), (0, 0), (2, 1), (0, 0), (2, 2), (0, 0)],
                ),
                open_shape(
                    "E7 Open",
                    E,
                    "7",
                    [(0, 0), (2, 2), (0, 0), (1, 1), (0, 0), (0, 0)],
                ),
            ],
        );

        shapes.insert(
            "maj7",
            vec![
                movable_shape(
                    "E Shape maj7 Barre",
                    E,
                    "maj7",
                    [(0, 1), (2, 3), (1, 2), (1, 2), (0, 1), (0, 1)],
                    &[0, 1, 2, 3, 4, 5],
                ),
                movable_shape(
                    "A Shape maj7 Barre",
                    A,
                    "maj7",
                    [(-1, -1), (0, 1), (2, 3), (1, 2), (2, 4), (0, 1)],
                    &[1, 2, 3, 4, 5],
                ),
                open_shape(
                    "Cmaj7 Open",
                    C,
                    "maj7",
                    [(-1, -1), (3, 3), (2, 2), (0, 0), (0, 0), (0, 0)],
                ),
                open_shape(
                    "Gmaj7 Open",
                    G,
                    "maj7",
                    [(3, 2), (2, 1), (0, 0), (0, 0), (0, 0), (2, 3)],
                ),
                open_shape(
                    "Amaj7 Open",
                    A,
                    "maj7",
                    [(-1, -1), (0, 0), (2, 2), (1, 1), (2, 3), (0, 0)],
                ),
                open_shape(
                    "Dmaj7 Open",
                    D,
                    "maj7",
                    [(-1, -1), (-1, -1), (0, 0), (2, 1), (2, 2), (2, 3)],
                ),
            ],
        );

        shapes.insert(
            "m7",
            vec![
                movable_shape(
                    "Em7 Shape Barre",
                    E,
                    "m7",
                    [(0, 1), (2, 3), (0, 1), (0, 1), (0, 1), (0, 1)],
                    &[0, 1, 2, 3, 4, 5],
                ),
                movable_shape(
                    "Am7 Shape Barre",
                    A,
                    "m7",
                    [(-1, -1), (0, 1), (2, 3), (0, 1), (1, 2), (0, 1)],
                    &[1, 2, 3, 4, 5],
                ),
                open_shape(
                    "Am7 Open",
                    A,
                    "m7",
                    [(-1, -1), (0, 0), (2, 2), (0, 0), (1, 1), (0, 0)],
                ),
                open_shape(
                    "Em7 Open",
                    E,
                    "m7",
                    [(0, 0), (2, 2), (0, 0), (0, 0), (0, 0), (0, 0)],
                ),
                open_shape(
                    "Dm7 Open",
                    D,
                    "m7",
                    [(-1, -1), (-1, -1), (0, 0), (2, 2), (1, 1), (1, 1)],
                ),
            ],
        );

        shapes.insert(
            "dim",
            vec![movable_shape(
                "Dim Shape",
                C,
                "dim",
                [(-1, -1), (3, 2), (1, 1), (3, 4), (2, 3), (-1, -1)],
                &[],
            )],
        );

        shapes.insert(
            "sus4",
            vec![
                open_shape(
                    "Dsus4 Open",
                    D,
                    "sus4",
                    [(-1, -1), (-1, -1), (0, 0), (2, 1), (3, 3), (3, 4)],
                ),
                open_shape(
                    "Asus4 Open",
                    A,
                    "sus4",
                    [(-1, -1), (0, 0), (2, 1), (2, 2), (3, 3), (0, 0)],
                ),
                open_shape(
                    "Esus4 Open",
                    E,
                    "sus4",
                    [(0, 0), (2, 2), (2, 3), (2, 4), (0, 0), (0, 0)],
                ),
            ],
        );

        Self { shapes }
    }

    /// Shapes catalogued for a quality, in catalogue order. The quality is
    /// normalized against the shape keys (`"m"`/`"minor"` find `"min"`,
    /// the empty string finds `"maj"`, `"dom7"` finds `"7"`).
    pub fn shapes_for(&self, quality: &str) -> &[ChordShape] {
        self.shapes
            .get(normalize_shape_quality(quality))
            .map_or(&[], Vec::as_slice)
    }

    /// Every template in the catalogue, for invariant checks.
    pub fn iter(&self) -> impl Iterator<Item = &ChordShape> {
        self.shapes.values().flatten()
    }
}

/// Maps chord-quality spellings onto the catalogue keys.
fn normalize_shape_quality(quality: &str) -> &str {
    match quality {
        "m" | "minor" | "mi" => "min",
        "" | "major" => "maj",
        "dom7" | "dominant7" => "7",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_shapes_found_by_quality() {
        let library = ShapeLibrary::standard();
        assert!(library
            .shapes_for("maj")
            .iter()
            .any(|s| s.name == "C Major Open"));
        assert!(library
            .shapes_for("min")
            .iter()
            .any(|s| s.name == "Am Minor Open"));
        assert!(library.shapes_for("7").iter().any(|s| s.name == "G7 Open"));
    }

    #[test]
    fn test_quality_normalization() {
        let library = ShapeLibrary::standard();
        assert_eq!(
            library.shapes_for("major").len(),
            library.shapes_for("maj").len()
        );
        assert_eq!(library.shapes_for("").len(), library.shapes_for("maj").len());
        assert_eq!(
            library.shapes_for("m").len(),
            library.shapes_for("min").len()
        );
        assert_eq!(
            library.shapes_for("dom7").len(),
            library.shapes_for("7").len()
        );
        assert!(library.shapes_for("unknown").is_empty());
    }

    #[test]
    fn test_movable_templates_anchor_at_the_nut() {
        let library = ShapeLibrary::standard();
        for shape in library.iter().filter(|s| s.movable) {
            assert_eq!(shape.base_fret, 0, "{} base fret", shape.name);
            // movable forms carry no open strings, they must shift cleanly
            assert!(
                shape
                    .strings
                    .iter()
                    .all(|slot| !matches!(slot, StringFingering::Open)),
                "{} has an open string",
                shape.name
            );
        }
    }

    #[test]
    fn test_all_shapes_have_six_strings() {
        let library = ShapeLibrary::standard();
        for shape in library.iter() {
            assert_eq!(shape.strings.len(), 6, "{}", shape.name);
        }
    }

    #[test]
    fn test_barre_strings_are_valid_indices() {
        let library = ShapeLibrary::standard();
        for shape in library.iter() {
            for &string_idx in &shape.barre_strings {
                assert!(string_idx < shape.strings.len(), "{}", shape.name);
                assert!(
                    !matches!(shape.strings[string_idx], StringFingering::Muted),
                    "{} bars a muted string",
                    shape.name
                );
            }
        }
    }
}
