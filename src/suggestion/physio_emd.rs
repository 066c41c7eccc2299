//! PhysioEmd firmness and star position
//!
//! The star position (0, 1 or 2) places the adjustable element along the
//! body axis and depends on height only.

use serde::{Deserialize, Serialize};

use super::BmiBands;
use crate::error::{guarded, ProfileResult};
use crate::error_context;
use crate::types::{BodyMetrics, FirmnessLevel, Gender};

const FIRMNESS: BmiBands<FirmnessLevel, 3> = BmiBands {
    male: [20.0, 26.0, 32.0],
    female: [19.0, 25.0, 31.0],
    below: [FirmnessLevel::H1, FirmnessLevel::H2, FirmnessLevel::H3],
    top: FirmnessLevel::H4,
};

/// Inclusive upper height bounds for star positions 0 and 1
const MALE_STAR_HEIGHTS_CM: [u32; 2] = [170, 190];
const FEMALE_STAR_HEIGHTS_CM: [u32; 2] = [160, 180];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarPositionSuggestion {
    pub firmness: FirmnessLevel,
    pub star_position: u8,
    pub bmi: f64,
}

fn star_position(gender: Gender, height_cm: u32) -> u8 {
    let [first, second] = match gender {
        Gender::Male => MALE_STAR_HEIGHTS_CM,
        Gender::Female => FEMALE_STAR_HEIGHTS_CM,
    };
    if height_cm <= first {
        0
    } else if height_cm <= second {
        1
    } else {
        2
    }
}

/// Suggest PhysioEmd firmness and star position
pub fn suggest_physio_emd(gender: Gender, height_cm: u32, weight_kg: u32) -> ProfileResult<StarPositionSuggestion> {
    guarded(error_context!("physio_emd", "suggest"), || {
        let bmi = BodyMetrics::new(gender, height_cm, weight_kg)?.bmi();
        let firmness = FIRMNESS.pick(gender, bmi);
        let star_position = star_position(gender, height_cm);

        tracing::debug!(?gender, bmi, %firmness, star_position, "physio emd suggestion");
        Ok(StarPositionSuggestion {
            firmness,
            star_position,
            bmi,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_female_star_positions() {
        assert_eq!(star_position(Gender::Female, 155), 0);
        assert_eq!(star_position(Gender::Female, 160), 0);
        assert_eq!(star_position(Gender::Female, 161), 1);
        assert_eq!(star_position(Gender::Female, 180), 1);
        assert_eq!(star_position(Gender::Female, 181), 2);
    }

    #[test]
    fn test_male_star_positions() {
        assert_eq!(star_position(Gender::Male, 170), 0);
        assert_eq!(star_position(Gender::Male, 185), 1);
        assert_eq!(star_position(Gender::Male, 195), 2);
    }

    #[test]
    fn test_suggestion() {
        let suggestion = suggest_physio_emd(Gender::Male, 185, 80).unwrap();
        assert_eq!(suggestion.firmness, FirmnessLevel::H2);
        assert_eq!(suggestion.star_position, 1);
    }
}
