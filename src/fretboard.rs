//! Guitar fretboard model: a tuning mapped to a per-(string, fret)
//! pitch-class grid, with note search.

use crate::error::FretwiseError;
use crate::theory::note::{note_value, PitchClass};

/// Standard guitar tuning, low string first.
pub const DEFAULT_TUNING: [&str; 6] = ["E2", "A2", "D3", "G3", "B3", "E4"];

pub const DEFAULT_FRET_COUNT: usize = 22;

/// An immutable fretboard. Strings whose tuning entry cannot be parsed are
/// kept but unusable: their cells hold no note and lookups miss them.
#[derive(Debug, Clone)]
pub struct Fretboard {
    tuning: Vec<String>,
    // grid[string][fret], fret 0 is the open string
    grid: Vec<Vec<Option<PitchClass>>>,
    fret_count: usize,
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::with_tuning(&DEFAULT_TUNING, DEFAULT_FRET_COUNT)
    }
}

impl Fretboard {
    /// Standard-tuned 22-fret fretboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fretboard for an arbitrary tuning (low string first).
    ///
    /// Construction never fails: a bad tuning entry only disables that one
    /// string.
    pub fn with_tuning(tuning: &[&str], fret_count: usize) -> Self {
        let mut grid = Vec::with_capacity(tuning.len());
        for (string_idx, entry) in tuning.iter().enumerate() {
            match note_value(entry) {
                Ok(open_value) => {
                    let string_notes = (0..=fret_count)
                        .map(|fret| Some(open_value.transpose(fret as i32)))
                        .collect();
                    grid.push(string_notes);
                }
                Err(err) => {
                    log::warn!("invalid open string note for string {string_idx}: {err}");
                    grid.push(vec![None; fret_count + 1]);
                }
            }
        }
        log::debug!("fretboard initialized with tuning {tuning:?}, {fret_count} frets");
        Self {
            tuning: tuning.iter().map(|s| (*s).to_string()).collect(),
            grid,
            fret_count,
        }
    }

    pub fn string_count(&self) -> usize {
        self.grid.len()
    }

    pub const fn fret_count(&self) -> usize {
        self.fret_count
    }

    pub fn tuning(&self) -> &[String] {
        &self.tuning
    }

    /// Pitch class at a (string, fret) position, `None` when out of bounds
    /// or on an unusable string. Fret 0 is the open string.
    pub fn note_at(&self, string_idx: usize, fret_idx: usize) -> Option<PitchClass> {
        if fret_idx > self.fret_count {
            return None;
        }
        self.grid.get(string_idx)?.get(fret_idx).copied().flatten()
    }

    /// Spelled note name at a position.
    pub fn note_name_at(
        &self,
        string_idx: usize,
        fret_idx: usize,
        prefer_sharp: bool,
    ) -> Option<&'static str> {
        self.note_at(string_idx, fret_idx).map(|n| n.name(prefer_sharp))
    }

    /// All (string, fret) positions sounding `target`, ascending by string
    /// then fret, optionally capped at `max_fret`.
    pub fn find_positions(
        &self,
        target: PitchClass,
        max_fret: Option<usize>,
    ) -> Vec<(usize, usize)> {
        let search_max = max_fret.unwrap_or(self.fret_count).min(self.fret_count);
        let mut positions = Vec::new();
        for (string_idx, string_notes) in self.grid.iter().enumerate() {
            for (fret_idx, note) in string_notes.iter().take(search_max + 1).enumerate() {
                if *note == Some(target) {
                    positions.push((string_idx, fret_idx));
                }
            }
        }
        log::debug!(
            "found {} positions for {target} up to fret {search_max}",
            positions.len()
        );
        positions
    }

    /// Same as [`find_positions`](Self::find_positions) but takes a note
    /// spelling (`"C#"`, `"Bb"`, ...).
    pub fn find_positions_by_name(
        &self,
        note: &str,
        max_fret: Option<usize>,
    ) -> Result<Vec<(usize, usize)>, FretwiseError> {
        let target = note_value(note)?;
        Ok(self.find_positions(target, max_fret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tuning_open_strings() {
        let fb = Fretboard::new();
        assert_eq!(fb.string_count(), 6);
        assert_eq!(fb.fret_count(), 22);
        let open_names: Vec<_> = (0..6).map(|s| fb.note_name_at(s, 0, true).unwrap()).collect();
        assert_eq!(open_names, vec!["E", "A", "D", "G", "B", "E"]);
    }

    #[test]
    fn test_grid_invariant() {
        let fb = Fretboard::new();
        for string_idx in 0..fb.string_count() {
            let open = fb.note_at(string_idx, 0).unwrap();
            for fret_idx in 0..=fb.fret_count() {
                assert_eq!(
                    fb.note_at(string_idx, fret_idx),
                    Some(open.transpose(fret_idx as i32))
                );
            }
        }
    }

    #[test]
    fn test_fretted_notes() {
        let fb = Fretboard::new();
        // A string, 5th fret is D
        assert_eq!(fb.note_name_at(1, 5, true), Some("D"));
        // high E string, 3rd fret is G
        assert_eq!(fb.note_name_at(5, 3, true), Some("G"));
    }

    #[test]
    fn test_out_of_bounds() {
        let fb = Fretboard::new();
        assert_eq!(fb.note_at(6, 0), None);
        assert_eq!(fb.note_at(0, 23), None);
    }

    #[test]
    fn test_bad_tuning_entry_disables_one_string() {
        let fb = Fretboard::with_tuning(&["E2", "Zz", "D3", "G3", "B3", "E4"], 22);
        assert_eq!(fb.string_count(), 6);
        assert_eq!(fb.note_at(1, 0), None);
        assert_eq!(fb.note_at(1, 12), None);
        // the rest of the board still works
        assert_eq!(fb.note_name_at(0, 0, true), Some("E"));
        assert_eq!(fb.note_name_at(2, 2, true), Some("E"));
    }

    #[test]
    fn test_find_positions_ordering_and_cap() {
        let fb = Fretboard::new();
        let g = crate::theory::note::note_value("G").unwrap();
        let positions = fb.find_positions(g, Some(5));
        // ascending by string then fret
        assert_eq!(positions, vec![(0, 3), (2, 5), (3, 0), (5, 3)]);
    }

    #[test]
    fn test_find_positions_by_name() {
        let fb = Fretboard::new();
        let by_name = fb.find_positions_by_name("C#", Some(12)).unwrap();
        let by_value = fb.find_positions(crate::theory::note::note_value("C#").unwrap(), Some(12));
        assert_eq!(by_name, by_value);
        assert!(fb.find_positions_by_name("Zz", None).is_err());
    }

    #[test]
    fn test_drop_d_tuning() {
        let fb = Fretboard::with_tuning(&["D2", "A2", "D3", "G3", "B3", "E4"], 22);
        assert_eq!(fb.note_name_at(0, 0, true), Some("D"));
        assert_eq!(fb.note_name_at(0, 2, true), Some("E"));
    }
}
