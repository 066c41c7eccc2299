// src/generation/zones.rs
//! Shoulder, pelvis and lordosis zone detection
//!
//! Index 0 is the zone closest to the head. All functions work on complete
//! 12-zone measurements and are total: every input yields a zone or an
//! explicit `None`.

use crate::config::constants::{profile::LAST_ZONE_INDEX, zones};
use crate::config::{PelvisScanRule, PelvisTolerance};
use crate::types::{Gender, MeasurementPosition};
use crate::utils::{index_of_maximum, index_of_minimum, is_in_range, is_right_side_equal};

/// A 12-zone pressure measurement
pub type Measurement = [u32; crate::config::constants::profile::ZONE_COUNT];

/// Resolved shoulder zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoulderZone {
    pub index: usize,
    /// Measurement the index was finally read from
    pub source: MeasurementPosition,
    pub fallback_used: bool,
}

fn shoulder_peak(values: &[u32]) -> usize {
    index_of_maximum(values, 0, zones::SHOULDER_LAST_INDEX).unwrap_or(0)
}

// A first-occurrence maximum never ties with its left neighbour
fn has_neighbour_tie(values: &[u32], index: usize) -> bool {
    index < zones::SHOULDER_LAST_INDEX && is_right_side_equal(index, values)
}

/// Move a first-occurrence maximum onto the later zone of a tie
///
/// A tie across zones 0, 1 and 2 resolves to the middle zone.
pub fn resolve_shoulder_tie(values: &[u32], index: usize) -> usize {
    if index == 0 && is_right_side_equal(0, values) && is_right_side_equal(1, values) {
        return 1;
    }
    if index < zones::SHOULDER_LAST_INDEX && is_right_side_equal(index, values) {
        index + 1
    } else {
        index
    }
}

/// Shoulder zone of a single measurement
pub fn locate_shoulder(values: &[u32]) -> usize {
    resolve_shoulder_tie(values, shoulder_peak(values))
}

/// Shoulder zone for a measurement position
///
/// In lateral mode an ambiguous peak (a right neighbour with the same
/// reading) is looked up again in the supine measurement when `fallback` is enabled.
pub fn detect_shoulder(
    position: MeasurementPosition,
    supine: &Measurement,
    lateral: &Measurement,
    fallback: bool,
) -> ShoulderZone {
    let primary = match position {
        MeasurementPosition::Supine => supine,
        MeasurementPosition::Lateral => lateral,
    };

    let candidate = shoulder_peak(primary);
    let fallback_used = position == MeasurementPosition::Lateral && fallback && has_neighbour_tie(primary, candidate);
    let (values, source) = if fallback_used {
        (supine, MeasurementPosition::Supine)
    } else {
        (primary, position)
    };

    ShoulderZone {
        index: locate_shoulder(values),
        source,
        fallback_used,
    }
}

/// Letters written to zones 0..=2 for a shoulder index
///
/// A shoulder in the first zone whose neighbour reads almost the same is
/// treated as spanning both zones.
pub fn shoulder_pattern(index: usize, values: &[u32], shoulder: char, firm: char) -> [char; 3] {
    match index {
        0 if is_in_range(values[0], values[1], zones::SHOULDER_SPREAD_TOLERANCE_MBAR) => [shoulder, shoulder, firm],
        0 => [shoulder, firm, firm],
        1 => [firm, shoulder, firm],
        _ => [firm, firm, shoulder],
    }
}

/// Last index the pelvis zone may occupy for a height
pub fn pelvis_limit(height_cm: u32) -> usize {
    if height_cm < zones::FULL_LENGTH_HEIGHT_CM {
        LAST_ZONE_INDEX - 1
    } else {
        LAST_ZONE_INDEX
    }
}

/// Pelvis index found by scanning from the foot end towards the head
///
/// The zone extends while readings do not decrease and stops at the first
/// strict decrease.
pub fn detect_pelvis(values: &Measurement, rule: &PelvisScanRule, height_cm: u32) -> usize {
    let start = rule.start_index.min(LAST_ZONE_INDEX);
    let floor = rule.floor_index.min(start);

    let mut pelvis = start;
    for i in (floor..start).rev() {
        if values[i] >= values[i + 1] {
            pelvis = i;
        } else {
            break;
        }
    }

    pelvis.min(pelvis_limit(height_cm))
}

/// Neighbours that join the pelvis zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PelvisWidening {
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Widen the pelvis zone to neighbours with similar readings
pub fn widen_pelvis(
    values: &Measurement,
    pelvis: usize,
    gender: Gender,
    tolerance: &PelvisTolerance,
    height_cm: u32,
) -> PelvisWidening {
    let tolerance_mbar = match gender {
        Gender::Male => tolerance.male_mbar,
        Gender::Female => tolerance.female_mbar,
    };
    let similar = |neighbour: usize| is_in_range(values[neighbour], values[pelvis], tolerance_mbar);

    let left = pelvis.checked_sub(1).filter(|&i| similar(i));
    let right = match gender {
        Gender::Male => None,
        Gender::Female => Some(pelvis + 1).filter(|&i| i <= pelvis_limit(height_cm) && similar(i)),
    };

    PelvisWidening { left, right }
}

/// Lordosis index between the shoulder region and the pelvis
///
/// Searches `floor..=pelvis-1` for the lowest reading, with the floor raised
/// by one for tall persons. A lordosis directly next to the pelvis moves one
/// zone towards the head; without room the zone stays undistinguished.
pub fn detect_lordosis(values: &Measurement, pelvis: usize, floor_raised: bool) -> Option<usize> {
    let floor = zones::LORDOSIS_MIN_INDEX + usize::from(floor_raised);
    let end = pelvis.checked_sub(1)?;
    if end < floor {
        return None;
    }

    let lordosis = index_of_minimum(values, floor, end)?;
    if pelvis - lordosis == 1 {
        lordosis.checked_sub(1).filter(|&i| i >= floor)
    } else {
        Some(lordosis)
    }
}

/// Rewrite every `<firm><pelvis>` pair to `<firm><neutral><pelvis>`
///
/// Only pairs starting in the lordosis zone or later are rewritten; the
/// shoulder pattern in zones 0..=2 is left alone. The displaced pelvis letter
/// moves one zone towards the foot end and the profile length never changes.
/// Returns true if anything was rewritten.
pub fn separate_firm_from_pelvis(letters: &mut [char], firm: char, pelvis: char, neutral: char) -> bool {
    let mut rewritten = false;
    for i in zones::LORDOSIS_MIN_INDEX..letters.len().saturating_sub(1) {
        if letters[i] == firm && letters[i + 1] == pelvis {
            letters[i + 1] = neutral;
            if let Some(next) = letters.get_mut(i + 2) {
                *next = pelvis;
            }
            rewritten = true;
        }
    }
    rewritten
}
