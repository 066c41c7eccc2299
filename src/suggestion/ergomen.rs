//! Ergomen mattress firmness

use super::{BmiBands, FirmnessSuggestion};
use crate::error::{guarded, ProfileResult};
use crate::error_context;
use crate::types::{BodyMetrics, FirmnessLevel, Gender};

const FIRMNESS: BmiBands<FirmnessLevel, 3> = BmiBands {
    male: [20.0, 25.0, 30.0],
    female: [19.0, 24.0, 29.0],
    below: [FirmnessLevel::H1, FirmnessLevel::H2, FirmnessLevel::H3],
    top: FirmnessLevel::H4,
};

/// Suggest the Ergomen firmness level from BMI
pub fn suggest_ergomen_firmness(gender: Gender, height_cm: u32, weight_kg: u32) -> ProfileResult<FirmnessSuggestion> {
    guarded(error_context!("ergomen", "suggest_firmness"), || {
        let bmi = BodyMetrics::new(gender, height_cm, weight_kg)?.bmi();
        let firmness = FIRMNESS.pick(gender, bmi);

        tracing::debug!(?gender, bmi, %firmness, "ergomen firmness");
        Ok(FirmnessSuggestion { firmness, bmi })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_normal_weight() {
        let suggestion = suggest_ergomen_firmness(Gender::Male, 180, 70).unwrap();
        assert_eq!(suggestion.firmness, FirmnessLevel::H2);
        assert!((suggestion.bmi - 21.6).abs() < 0.1);
    }

    #[test]
    fn test_female_thresholds_are_lower() {
        // BMI 19.5: below the male H2 breakpoint, above the female one
        assert_eq!(suggest_ergomen_firmness(Gender::Male, 160, 50).unwrap().firmness, FirmnessLevel::H1);
        assert_eq!(suggest_ergomen_firmness(Gender::Female, 160, 50).unwrap().firmness, FirmnessLevel::H2);
    }

    #[test]
    fn test_breakpoint_belongs_to_upper_band() {
        // BMI exactly 25.0
        assert_eq!(suggest_ergomen_firmness(Gender::Male, 200, 100).unwrap().firmness, FirmnessLevel::H3);
    }

    #[test]
    fn test_heavy_person() {
        assert_eq!(suggest_ergomen_firmness(Gender::Female, 165, 95).unwrap().firmness, FirmnessLevel::H4);
    }

    #[test]
    fn test_zero_height_is_invalid() {
        assert!(suggest_ergomen_firmness(Gender::Male, 0, 70).unwrap_err().is_invalid_input());
    }
}
