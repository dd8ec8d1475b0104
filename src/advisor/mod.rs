//! Fingering suggestion: a chord symbol in, ranked playable shapes out.

pub mod scoring;


use crate::shapes::{transpose_shape, ChordShape, ShapeLibrary};
use crate::theory::chord::{parse_chord, parse_root};
use crate::theory::formula::CHORD_FORMULAS;
use crate::theory::note::PitchClass;
use scoring::{score_shape, ScoringWeights};
use serde::{Deserialize, Serialize};

/// One ranked fingering, ready for the caller to serialize or render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingeringSuggestion {
    pub shape: ChordShape,
    /// Playability estimate, lower is easier.
    pub score: i32,
}

/// Suggests playable fingerings for chord symbols.
///
/// Owns the read-only shape catalogue and the scoring weights; all methods
/// are pure and safe to call from multiple threads.
#[derive(Debug, Clone)]
pub struct FingeringAdvisor {
    library: ShapeLibrary,
    weights: ScoringWeights,
}

impl Default for FingeringAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl FingeringAdvisor {
    pub fn new() -> Self {
        Self::with_weights(ScoringWeights::default())
    }

    /// Advisor with custom scoring weights, for retuning the heuristic.
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            library: ShapeLibrary::standard(),
            weights,
        }
    }

    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Ranked fingerings for a chord symbol, best (lowest score) first.
    ///
    /// Returns an empty list for an unparseable root or when no catalogued
    /// shape fits; never an error.
    pub fn suggest(&self, chord_symbol: &str) -> Vec<FingeringSuggestion> {
        log::debug!("suggesting fingerings for '{chord_symbol}'");
        let Ok((_, (root_name, root))) = parse_root(chord_symbol.trim()) else {
            log::warn!("unparseable chord root in '{chord_symbol}', no suggestions");
            return Vec::new();
        };

        let quality = self.resolve_quality(chord_symbol, &root_name);
        let mut candidates = self.candidates(&quality, root, &root_name);

        if candidates.is_empty() {
            if let Some(fallback) = generic_fallback(&quality) {
                log::debug!(
                    "no shapes for '{root_name}{quality}', falling back to '{fallback}'"
                );
                candidates = self.candidates(fallback, root, &root_name);
            }
        }

        let mut suggestions: Vec<FingeringSuggestion> = candidates
            .into_iter()
            .map(|shape| {
                let score = score_shape(&shape, &self.weights);
                FingeringSuggestion { shape, score }
            })
            .collect();
        // stable: ties keep catalogue order
        suggestions.sort_by_key(|s| s.score);

        if suggestions.is_empty() {
            log::debug!("no fingerings found for '{chord_symbol}'");
        } else {
            log::debug!(
                "{} fingerings for '{chord_symbol}', best score {}",
                suggestions.len(),
                suggestions[0].score
            );
        }
        suggestions
    }

    /// Resolves the quality used for shape lookup: the formula matched
    /// from the chord's intervals wins over the raw spelling, which wins
    /// over plain major.
    fn resolve_quality(&self, chord_symbol: &str, root_name: &str) -> String {
        if let Ok(parsed) = parse_chord(chord_symbol) {
            if parsed.quality.is_some() {
                if let Some(key) = quality_from_intervals(parsed.root, &parsed.notes) {
                    return key.to_string();
                }
            }
        }
        let raw = chord_symbol.trim()[root_name.len()..].to_string();
        if raw.is_empty() {
            "maj".to_string()
        } else {
            log::debug!("no formula match for '{chord_symbol}', using raw quality '{raw}'");
            raw
        }
    }

    /// Open templates anchored at the target root as-is, movable templates
    /// transposed; infeasible transpositions drop out silently.
    fn candidates(&self, quality: &str, root: PitchClass, root_name: &str) -> Vec<ChordShape> {
        self.library
            .shapes_for(quality)
            .iter()
            .filter_map(|template| {
                if template.movable {
                    transpose_shape(template, root, root_name)
                } else if template.root == root {
                    Some(template.clone())
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Matches a chord's interval content against the formula table, compound
/// offsets reduced to pitch classes. First match in table order wins.
fn quality_from_intervals(root: PitchClass, notes: &[PitchClass]) -> Option<&'static str> {
    let mut intervals = [false; 12];
    for note in notes {
        intervals[note.offset_from(root) as usize] = true;
    }
    for (key, offsets) in &CHORD_FORMULAS {
        let mut expected = [false; 12];
        for &offset in *offsets {
            expected[offset.rem_euclid(12) as usize] = true;
        }
        if intervals == expected {
            return Some(*key);
        }
    }
    None
}

/// Degraded shape lookup for qualities without catalogued shapes.
fn generic_fallback(quality: &str) -> Option<&'static str> {
    if quality.contains("maj") {
        Some("maj")
    } else if quality.contains("min") || quality.contains('m') {
        Some("min")
    } else {
        None
    }
}
