//! Pitch-class arithmetic, chord formulas, chord symbol parsing and scales.

pub mod chord;
pub mod formula;
pub mod note;
pub mod scale;
