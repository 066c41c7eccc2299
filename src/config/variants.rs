// src/config/variants.rs
//! Per-product-line parameter sets for the zone-based generators
//!
//! The Stamp, Role and SF contact generators share one algorithm and differ
//! only in the constants collected here.

use serde::{Deserialize, Serialize};

use crate::config::constants::{letters, profile};
use crate::elements::ProductLine;
use crate::suggestion::BmiLadder;
use crate::types::{FirmnessLevel, Gender};

/// Complete parameter set of one 12-zone generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileVariant {
    pub name: String,
    pub product_line: ProductLine,
    /// Letter for zones the algorithm does not distinguish
    pub neutral_letter: char,
    pub shoulder_letter: char,
    pub pelvis_letter: char,
    pub lordosis_firm_letter: char,
    /// `None` leaves the medium lordosis band neutral
    pub lordosis_medium_letter: Option<char>,
    pub lordosis_bmi: LordosisThresholds,
    pub lordosis_floor: LordosisFloor,
    pub pelvis_tolerance: PelvisTolerance,
    /// Ordered by height, the first matching rule wins
    pub pelvis_scan: Vec<PelvisScanRule>,
    /// Lateral mode re-runs an ambiguous shoulder search on the supine array
    pub shoulder_fallback: bool,
    pub firmness: BmiLadder,
}

/// BMI band boundaries for the lordosis letter
///
/// `bmi < low` keeps the zone neutral, `bmi > high` selects the firm letter,
/// everything in between the medium letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LordosisThresholds {
    pub male_low: f64,
    pub male_high: f64,
    pub female_low: f64,
    pub female_high: f64,
}

impl LordosisThresholds {
    pub fn bounds(&self, gender: Gender) -> (f64, f64) {
        match gender {
            Gender::Male => (self.male_low, self.male_high),
            Gender::Female => (self.female_low, self.female_high),
        }
    }
}

/// Heights from which the lordosis search starts one zone later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LordosisFloor {
    pub male_from_height_cm: u32,
    pub female_from_height_cm: u32,
}

impl LordosisFloor {
    pub fn raised_for(&self, gender: Gender, height_cm: u32) -> bool {
        match gender {
            Gender::Male => height_cm >= self.male_from_height_cm,
            Gender::Female => height_cm >= self.female_from_height_cm,
        }
    }
}

/// Maximum reading difference for widening the pelvis zone
///
/// Males widen to the left only, females to both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PelvisTolerance {
    pub male_mbar: u32,
    pub female_mbar: u32,
}

/// Pelvis scan window for persons below `below_height_cm`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PelvisScanRule {
    /// `None` matches every height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below_height_cm: Option<u32>,
    pub start_index: usize,
    pub floor_index: usize,
}

impl PelvisScanRule {
    pub const fn any_height(start_index: usize, floor_index: usize) -> Self {
        Self {
            below_height_cm: None,
            start_index,
            floor_index,
        }
    }

    pub const fn below(height_cm: u32, start_index: usize, floor_index: usize) -> Self {
        Self {
            below_height_cm: Some(height_cm),
            start_index,
            floor_index,
        }
    }

    pub fn matches(&self, height_cm: u32) -> bool {
        self.below_height_cm.map_or(true, |limit| height_cm < limit)
    }
}

impl ProfileVariant {
    /// Liegesimulator stamp profiles
    pub fn stamp() -> Self {
        Self {
            name: "stamp".to_string(),
            product_line: ProductLine::Liegesimulator,
            neutral_letter: letters::NEUTRAL_VITARIO,
            shoulder_letter: letters::SHOULDER,
            pelvis_letter: letters::PELVIS,
            lordosis_firm_letter: letters::LORDOSIS_FIRM,
            lordosis_medium_letter: Some(letters::LORDOSIS_MEDIUM),
            lordosis_bmi: LordosisThresholds {
                male_low: 20.0,
                male_high: 30.0,
                female_low: 19.0,
                female_high: 30.0,
            },
            lordosis_floor: LordosisFloor {
                male_from_height_cm: 180,
                female_from_height_cm: 170,
            },
            pelvis_tolerance: PelvisTolerance {
                male_mbar: 3,
                female_mbar: 5,
            },
            // Shorter persons end further from the foot end
            pelvis_scan: vec![
                PelvisScanRule::below(150, 9, 5),
                PelvisScanRule::below(160, 10, 5),
                PelvisScanRule::below(170, 10, 6),
                PelvisScanRule::any_height(profile::LAST_ZONE_INDEX, 6),
            ],
            shoulder_fallback: false,
            firmness: BmiLadder::new(
                &[21.0, 27.0, 32.0],
                &[20.0, 26.0, 31.0],
                &[FirmnessLevel::H1, FirmnessLevel::H2, FirmnessLevel::H3, FirmnessLevel::H4],
            ),
        }
    }

    /// Liegesimulator 2.0 role profiles
    pub fn role() -> Self {
        Self {
            name: "role".to_string(),
            product_line: ProductLine::Liegesimulator2,
            neutral_letter: letters::NEUTRAL_VITARIO,
            shoulder_letter: letters::SHOULDER,
            pelvis_letter: letters::PELVIS,
            lordosis_firm_letter: letters::LORDOSIS_FIRM,
            lordosis_medium_letter: Some(letters::LORDOSIS_MEDIUM),
            lordosis_bmi: LordosisThresholds {
                male_low: 20.0,
                male_high: 29.0,
                female_low: 19.0,
                female_high: 28.0,
            },
            lordosis_floor: LordosisFloor {
                male_from_height_cm: 180,
                female_from_height_cm: 170,
            },
            pelvis_tolerance: PelvisTolerance {
                male_mbar: 3,
                female_mbar: 5,
            },
            pelvis_scan: vec![PelvisScanRule::any_height(profile::LAST_ZONE_INDEX, 6)],
            shoulder_fallback: true,
            firmness: BmiLadder::new(
                &[20.0, 25.0, 30.0],
                &[19.0, 24.0, 29.0],
                &[FirmnessLevel::H1, FirmnessLevel::H2, FirmnessLevel::H3, FirmnessLevel::H4],
            ),
        }
    }

    /// Ergonometer NL role profiles
    pub fn ergonometer_nl() -> Self {
        Self {
            name: "ergonometer_nl".to_string(),
            product_line: ProductLine::ErgonometerNl,
            neutral_letter: letters::NEUTRAL_ERGONOMETER_NL,
            ..Self::role()
        }
    }

    /// SF contact role profiles
    pub fn sf_contact() -> Self {
        Self {
            name: "sf_contact".to_string(),
            product_line: ProductLine::SfContact,
            lordosis_medium_letter: None,
            lordosis_bmi: LordosisThresholds {
                male_low: 21.0,
                male_high: 30.0,
                female_low: 20.0,
                female_high: 30.0,
            },
            pelvis_tolerance: PelvisTolerance {
                male_mbar: 2,
                female_mbar: 4,
            },
            firmness: BmiLadder::new(
                &[22.0, 28.0],
                &[21.0, 27.0],
                &[FirmnessLevel::H2, FirmnessLevel::H3, FirmnessLevel::H4],
            ),
            ..Self::role()
        }
    }

    /// Pelvis scan rule for a height, falling back to the last rule
    pub fn pelvis_scan_for(&self, height_cm: u32) -> Option<&PelvisScanRule> {
        self.pelvis_scan
            .iter()
            .find(|rule| rule.matches(height_cm))
            .or_else(|| self.pelvis_scan.last())
    }

    /// Every letter this variant can emit with the given neutral letter
    pub fn emitted_letters(&self, neutral_letter: char) -> Vec<char> {
        let mut emitted = vec![
            neutral_letter,
            self.shoulder_letter,
            self.pelvis_letter,
            self.lordosis_firm_letter,
        ];
        emitted.extend(self.lordosis_medium_letter);
        emitted
    }
}

/// Parameters of the Ergo4 lordosis generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ergo4Parameters {
    pub lordosis_bmi: LordosisThresholds,
    /// From these heights the individual role sits at local index 2
    pub lordosis_floor: LordosisFloor,
    pub firmness: BmiLadder,
}

impl Default for Ergo4Parameters {
    fn default() -> Self {
        Self {
            lordosis_bmi: LordosisThresholds {
                male_low: 20.0,
                male_high: 29.0,
                female_low: 19.0,
                female_high: 28.0,
            },
            lordosis_floor: LordosisFloor {
                male_from_height_cm: 180,
                female_from_height_cm: 170,
            },
            firmness: BmiLadder::new(
                &[20.0, 25.0, 30.0],
                &[19.0, 24.0, 29.0],
                &[FirmnessLevel::H1, FirmnessLevel::H2, FirmnessLevel::H3, FirmnessLevel::H4],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_pelvis_scan_by_height() {
        let stamp = ProfileVariant::stamp();
        assert_eq!(stamp.pelvis_scan_for(145).unwrap().start_index, 9);
        assert_eq!(stamp.pelvis_scan_for(150).unwrap().start_index, 10);
        assert_eq!(stamp.pelvis_scan_for(165).unwrap().floor_index, 6);
        assert_eq!(stamp.pelvis_scan_for(185).unwrap().start_index, 11);
    }

    #[test]
    fn test_role_family_shares_structure() {
        let role = ProfileVariant::role();
        let nl = ProfileVariant::ergonometer_nl();
        assert_eq!(nl.neutral_letter, 'D');
        assert_eq!(nl.lordosis_bmi, role.lordosis_bmi);
        assert_eq!(nl.pelvis_scan, role.pelvis_scan);

        let sf = ProfileVariant::sf_contact();
        assert!(sf.lordosis_medium_letter.is_none());
        assert!(sf.shoulder_fallback);
    }

    #[test]
    fn test_lordosis_floor() {
        let floor = ProfileVariant::role().lordosis_floor;
        assert!(floor.raised_for(Gender::Male, 180));
        assert!(!floor.raised_for(Gender::Male, 175));
        assert!(floor.raised_for(Gender::Female, 175));
    }

    #[test]
    fn test_emitted_letters_are_in_alphabet() {
        for variant in [
            ProfileVariant::stamp(),
            ProfileVariant::role(),
            ProfileVariant::ergonometer_nl(),
            ProfileVariant::sf_contact(),
        ] {
            for letter in variant.emitted_letters(variant.neutral_letter) {
                assert!(variant.product_line.knows(letter), "{} emits '{}'", variant.name, letter);
            }
        }
    }
}
