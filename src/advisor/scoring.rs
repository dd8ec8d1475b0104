//! Playability scoring: a heuristic cost per shape, lower is easier.

use crate::shapes::{ChordShape, StringFingering};
use serde::{Deserialize, Serialize};

/// Weights of the playability heuristic.
///
/// The defaults are the reference constants the heuristic shipped with;
/// they are untuned, which is why they live in a struct instead of being
/// hard-coded in the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Per open string; negative, open strings make a shape easier.
    pub open_string: i32,
    /// Flat penalty for barring.
    pub barre: i32,
    /// Per finger beyond `free_fingers`.
    pub finger_count: i32,
    /// Per fret of span among fretted notes.
    pub fret_span: i32,
    /// Per muted string.
    pub muted_string: i32,
    /// Fingers a shape may use before the finger-count penalty applies.
    pub free_fingers: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            open_string: -5,
            barre: 20,
            finger_count: 2,
            fret_span: 3,
            muted_string: 1,
            free_fingers: 2,
        }
    }
}

/// Estimates the physical difficulty of a concrete shape.
///
/// Pure function of the shape and weights: finger count (distinct fingers
/// 1-4), fret span across fretted notes, open-string bonus, muted-string
/// penalty, and a barre penalty that also grows with the number of barred
/// strings.
pub fn score_shape(shape: &ChordShape, weights: &ScoringWeights) -> i32 {
    let mut fingers = [false; 4];
    let mut min_fret = u8::MAX;
    let mut max_fret = 0u8;
    let mut open_count = 0;
    let mut muted_count = 0;

    for slot in &shape.strings {
        match *slot {
            StringFingering::Muted => muted_count += 1,
            StringFingering::Open => open_count += 1,
            StringFingering::Fretted { fret, finger } => {
                if (1..=4).contains(&finger) {
                    fingers[usize::from(finger - 1)] = true;
                }
                if fret > 0 {
                    min_fret = min_fret.min(fret);
                    max_fret = max_fret.max(fret);
                }
            }
        }
    }

    let fingers_used = fingers.iter().filter(|used| **used).count() as i32;
    let fret_span = if max_fret > 0 && min_fret != u8::MAX {
        i32::from(max_fret - min_fret)
    } else {
        0
    };

    let mut score = (fingers_used - weights.free_fingers).max(0) * weights.finger_count;
    score += fret_span * weights.fret_span;
    score += open_count * weights.open_string;
    score += muted_count * weights.muted_string;
    if shape.is_barre() {
        score += weights.barre + shape.barre_strings.len() as i32;
    }

    log::debug!(
        "shape {}: score {score} (fingers {fingers_used}, span {fret_span}, \
         open {open_count}, muted {muted_count}, barre {})",
        shape.name,
        shape.is_barre()
    );
    score
}
