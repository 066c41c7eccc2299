//! Shoulder conception pad
//!
//! Besides the mattress firmness the shoulder conception needs the firmness
//! of the pad that sits under the shoulder zone, which uses its own ladder.

use serde::{Deserialize, Serialize};

use super::BmiBands;
use crate::error::{guarded, ProfileResult};
use crate::error_context;
use crate::types::{BodyMetrics, FirmnessLevel, Gender};

const FIRMNESS: BmiBands<FirmnessLevel, 2> = BmiBands {
    male: [23.0, 30.0],
    female: [22.0, 29.0],
    below: [FirmnessLevel::H2, FirmnessLevel::H3],
    top: FirmnessLevel::H4,
};

const PADS: BmiBands<PadFirmness, 2> = BmiBands {
    male: [24.0, 31.0],
    female: [23.0, 30.0],
    below: [PadFirmness::Soft, PadFirmness::Medium],
    top: PadFirmness::Firm,
};

/// Firmness of the shoulder pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadFirmness {
    Soft,
    Medium,
    Firm,
}

impl PadFirmness {
    /// Letter code used on order documents
    pub fn letter(self) -> char {
        match self {
            PadFirmness::Soft => 'W',
            PadFirmness::Medium => 'M',
            PadFirmness::Firm => 'F',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoulderPadSuggestion {
    pub firmness: FirmnessLevel,
    pub pad: PadFirmness,
    pub bmi: f64,
}

/// Suggest mattress firmness and shoulder pad for the shoulder conception
pub fn suggest_shoulder_pad(gender: Gender, height_cm: u32, weight_kg: u32) -> ProfileResult<ShoulderPadSuggestion> {
    guarded(error_context!("shoulder_pad", "suggest"), || {
        let bmi = BodyMetrics::new(gender, height_cm, weight_kg)?.bmi();
        let firmness = FIRMNESS.pick(gender, bmi);
        let pad = PADS.pick(gender, bmi);

        tracing::debug!(?gender, bmi, %firmness, ?pad, "shoulder pad suggestion");
        Ok(ShoulderPadSuggestion { firmness, pad, bmi })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_person_gets_soft_pad() {
        let suggestion = suggest_shoulder_pad(Gender::Female, 170, 55).unwrap();
        assert_eq!(suggestion.firmness, FirmnessLevel::H2);
        assert_eq!(suggestion.pad, PadFirmness::Soft);
        assert_eq!(suggestion.pad.letter(), 'W');
    }

    #[test]
    fn test_pad_and_mattress_ladders_differ() {
        // BMI 23.1: mattress already H3, pad still soft
        let suggestion = suggest_shoulder_pad(Gender::Male, 180, 75).unwrap();
        assert_eq!(suggestion.firmness, FirmnessLevel::H3);
        assert_eq!(suggestion.pad, PadFirmness::Soft);
    }

    #[test]
    fn test_heavy_person_gets_firm_pad() {
        let suggestion = suggest_shoulder_pad(Gender::Male, 175, 110).unwrap();
        assert_eq!(suggestion.firmness, FirmnessLevel::H4);
        assert_eq!(suggestion.pad, PadFirmness::Firm);
    }
}
