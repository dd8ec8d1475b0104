//! Chord symbol parsing: `"F#m7"` into root, quality and pitch-class content.

use crate::error::FretwiseError;
use crate::theory::formula::{formula_for, normalize_quality};
use crate::theory::note::{prefer_sharp_for, PitchClass, SEMITONES};
use nom::character::complete::one_of;
use nom::combinator::{map, opt};
use nom::{IResult, Parser};
use serde::Serialize;

/// A chord symbol resolved to its pitch content.
///
/// `quality` is `None` when the quality spelling was not recognized; in
/// that degraded case `notes` holds the root alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedChord {
    pub root: PitchClass,
    /// Root exactly as spelled in the symbol, e.g. `"Bb"`.
    pub root_name: String,
    pub quality: Option<&'static str>,
    pub notes: Vec<PitchClass>,
}

impl ParsedChord {
    /// Chord notes spelled with the engine's sharp/flat preference rule.
    pub fn note_names(&self) -> Vec<&'static str> {
        let prefer_sharp =
            prefer_sharp_for(&self.root_name, self.quality.unwrap_or("maj"), true);
        self.notes.iter().map(|n| n.name(prefer_sharp)).collect()
    }
}

/// Root grammar of a chord symbol: one of `A`-`G`, optional `#` or `b`.
pub(crate) fn parse_root(i: &str) -> IResult<&str, (String, PitchClass)> {
    map(
        (one_of("ABCDEFG"), opt(one_of("#b"))),
        |(letter, accidental)| {
            // natural pitch of the letter, C = 0
            let natural = match letter {
                'C' => 0,
                'D' => 2,
                'E' => 4,
                'F' => 5,
                'G' => 7,
                'A' => 9,
                _ => 11,
            };
            let mut name = letter.to_string();
            let mut value = natural;
            match accidental {
                Some('#') => {
                    name.push('#');
                    value += 1;
                }
                Some(_) => {
                    name.push('b');
                    value -= 1;
                }
                None => {}
            }
            (name, PitchClass::new(value))
        },
    )
    .parse(i)
}

/// Parses a chord symbol into its constituent pitch classes.
///
/// An unrecognized quality degrades to a root-only result with a warning;
/// only a missing root is an error.
pub fn parse_chord(symbol: &str) -> Result<ParsedChord, FretwiseError> {
    let (remainder, (root_name, root)) = parse_root(symbol.trim()).map_err(|_| {
        FretwiseError::ChordParse(format!("no root note at start of '{symbol}'"))
    })?;

    let quality = normalize_quality(remainder);
    let notes = match quality.and_then(formula_for) {
        Some(offsets) => {
            // compound offsets collapse onto their pitch class here, a 9th
            // and a 2nd are the same note on a fretboard
            let mut seen = [false; SEMITONES];
            let mut notes = Vec::with_capacity(offsets.len());
            for &offset in offsets {
                let note = root.transpose(offset);
                if !seen[note.value() as usize] {
                    seen[note.value() as usize] = true;
                    notes.push(note);
                }
            }
            notes
        }
        None => {
            log::warn!("unknown chord quality '{remainder}' in '{symbol}', using root only");
            vec![root]
        }
    };

    log::debug!("parsed '{symbol}' -> root {root_name}, quality {quality:?}, {} notes", notes.len());
    Ok(ParsedChord {
        root,
        root_name,
        quality,
        notes,
    })
}
