//! Fretwise - music theory and guitar fingering engine
//!
//! This library provides:
//! - Chord symbol parsing into pitch-class content
//! - Scale generation for the common scale types and modes
//! - A fretboard model with note search over arbitrary tunings
//! - A catalogue of open and movable (barre) chord shapes with
//!   transposition to any root
//! - Playability-ranked fingering suggestions
//!
//! # Example
//!
//! ```
//! use fretwise::FingeringAdvisor;
//!
//! let advisor = FingeringAdvisor::new();
//! let suggestions = advisor.suggest("F#m7");
//! assert!(!suggestions.is_empty());
//! // best (lowest-scoring) fingering first
//! let best = &suggestions[0].shape;
//! println!("{} at fret {}", best.name, best.base_fret);
//! ```

pub mod advisor;
pub mod error;
pub mod fretboard;
pub mod shapes;
pub mod theory;

// Re-export main types for convenience
pub use advisor::{
    scoring::{score_shape, ScoringWeights},
    FingeringAdvisor, FingeringSuggestion,
};
pub use error::FretwiseError;
pub use fretboard::{Fretboard, DEFAULT_FRET_COUNT, DEFAULT_TUNING};
pub use shapes::{transpose_shape, ChordShape, ShapeLibrary, StringFingering, MAX_BASE_FRET};
pub use theory::chord::{parse_chord, ParsedChord};
pub use theory::note::{interval_name, note_value, PitchClass};
pub use theory::scale::{generate_scale, Scale, ScaleKind};
