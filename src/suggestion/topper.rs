//! Topper firmness

use super::{BmiBands, FirmnessSuggestion};
use crate::error::{guarded, ProfileResult};
use crate::error_context;
use crate::types::{BodyMetrics, FirmnessLevel, Gender};

const FIRMNESS: BmiBands<FirmnessLevel, 2> = BmiBands {
    male: [22.0, 28.0],
    female: [21.0, 27.0],
    below: [FirmnessLevel::H1, FirmnessLevel::H2],
    top: FirmnessLevel::H3,
};

/// Suggest the topper firmness level from BMI
pub fn suggest_topper_firmness(gender: Gender, height_cm: u32, weight_kg: u32) -> ProfileResult<FirmnessSuggestion> {
    guarded(error_context!("topper", "suggest_firmness"), || {
        let bmi = BodyMetrics::new(gender, height_cm, weight_kg)?.bmi();
        let firmness = FIRMNESS.pick(gender, bmi);

        tracing::debug!(?gender, bmi, %firmness, "topper firmness");
        Ok(FirmnessSuggestion { firmness, bmi })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topper_levels() {
        assert_eq!(suggest_topper_firmness(Gender::Male, 180, 60).unwrap().firmness, FirmnessLevel::H1);
        assert_eq!(suggest_topper_firmness(Gender::Male, 180, 80).unwrap().firmness, FirmnessLevel::H2);
        assert_eq!(suggest_topper_firmness(Gender::Male, 180, 100).unwrap().firmness, FirmnessLevel::H3);
    }

    #[test]
    fn test_topper_female_breakpoint() {
        // BMI 21.5
        assert_eq!(suggest_topper_firmness(Gender::Female, 170, 62).unwrap().firmness, FirmnessLevel::H2);
        assert_eq!(suggest_topper_firmness(Gender::Male, 170, 62).unwrap().firmness, FirmnessLevel::H1);
    }
}
