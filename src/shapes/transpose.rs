//! Transposition of movable shape templates to arbitrary roots.

use crate::shapes::{ChordShape, StringFingering};
use crate::theory::note::PitchClass;

/// Highest base fret a transposed shape may land on and still count as
/// playable.
pub const MAX_BASE_FRET: u8 = 15;

/// Shifts a movable template to `target` and renames it after the target
/// root (`"E Shape Barre"` becomes `"E Shape Barre for F"`).
///
/// Returns `None` for non-movable templates and for shapes that would land
/// past [`MAX_BASE_FRET`]; those are simply not candidates, not errors.
pub fn transpose_shape(
    template: &ChordShape,
    target: PitchClass,
    target_name: &str,
) -> Option<ChordShape> {
    if !template.movable {
        return None;
    }
    let offset = target.offset_from(template.root);
    let new_base_fret = template.base_fret + offset;
    if new_base_fret > MAX_BASE_FRET {
        log::debug!(
            "{} cannot reach {target_name}: base fret {new_base_fret} is past {MAX_BASE_FRET}",
            template.name
        );
        return None;
    }

    let strings = template
        .strings
        .iter()
        .map(|slot| match *slot {
            StringFingering::Fretted { fret, finger } => StringFingering::Fretted {
                fret: new_base_fret + fret,
                finger,
            },
            other => other,
        })
        .collect();

    Some(ChordShape {
        name: format!("{} for {target_name}", template.name),
        root: target,
        quality: template.quality.clone(),
        strings,
        base_fret: new_base_fret,
        movable: true,
        barre_strings: template.barre_strings.clone(),
    })
}
