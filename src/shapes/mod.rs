//! Chord shape templates and concrete fingerings.

pub mod library;
pub mod transpose;

pub use library::ShapeLibrary;
pub use transpose::{transpose_shape, MAX_BASE_FRET};

use crate::theory::note::PitchClass;
use serde::{Deserialize, Serialize};

/// How one string is played within a shape.
///
/// Muting is its own variant so "fret 0 with a finger on it" can never be
/// confused with an open or muted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StringFingering {
    /// String is not played.
    Muted,
    /// String rings open.
    Open,
    /// Fretted with one finger (1-4). In a library template `fret` is an
    /// offset from `base_fret`; in a transposed shape it is absolute.
    Fretted { fret: u8, finger: u8 },
}

/// A chord fingering, either a library template or a concrete shape
/// produced by transposing a movable template to a target root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordShape {
    /// e.g. `"C Major Open"`, `"E Shape Barre for F"`
    pub name: String,
    pub root: PitchClass,
    /// Shape-catalogue quality key, e.g. `"maj"`, `"min"`, `"7"`
    pub quality: String,
    /// One slot per string, low string first.
    pub strings: Vec<StringFingering>,
    /// Fret the shape is anchored at; for a barre shape this is the barre
    /// fret itself.
    pub base_fret: u8,
    /// Whether the shape can be shifted along the neck to other roots.
    pub movable: bool,
    /// String indices covered by the barre, empty when there is none.
    pub barre_strings: Vec<usize>,
}

impl ChordShape {
    /// A shape counts as a barre only when it actually bars strings above
    /// the nut; an open-position E/A form is not a barre.
    pub fn is_barre(&self) -> bool {
        !self.barre_strings.is_empty() && self.base_fret > 0
    }
}
