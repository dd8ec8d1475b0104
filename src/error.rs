//! Error types for the fretwise library

/// Library error type for fretwise operations
#[derive(Debug, thiserror::Error)]
pub enum FretwiseError {
    /// Chord symbol does not start with a recognized root note
    #[error("chord parsing error: {0}")]
    ChordParse(String),

    /// Note spelling that maps to none of the 12 pitch classes
    #[error("unknown note: {0}")]
    UnknownNote(String),
}
