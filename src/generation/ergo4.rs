// src/generation/ergo4.rs
//! Ergo4 lordosis profiles
//!
//! Ergo4 mattresses only carry an adjustable lordosis section of four roles.
//! A single individual role is placed inside that window, so the result is
//! always one of five canonical profiles.

use serde::{Deserialize, Serialize};

use crate::config::constants::{letters, profile};
use crate::config::Ergo4Parameters;
use crate::elements::{self, ProductLine};
use crate::error::{guarded, ProfileResult};
use crate::error_context;
use crate::types::{BodyMetrics, FirmnessLevel, Gender, SupportProfile};
use crate::utils::{index_of_minimum, measurement_array};

/// Local window index of the upper candidate role
const UPPER_ROLE: usize = 1;
const LOWER_ROLE: usize = 2;

/// The five profiles an Ergo4 lordosis section can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ergo4Profile {
    /// `MMMM`
    Neutral,
    /// `MLMM`
    MediumUpper,
    /// `MMLM`
    MediumLower,
    /// `MFMM`
    FirmUpper,
    /// `MMFM`
    FirmLower,
}

impl Ergo4Profile {
    pub const ALL: [Ergo4Profile; 5] = [
        Ergo4Profile::Neutral,
        Ergo4Profile::MediumUpper,
        Ergo4Profile::MediumLower,
        Ergo4Profile::FirmUpper,
        Ergo4Profile::FirmLower,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Ergo4Profile::Neutral => "MMMM",
            Ergo4Profile::MediumUpper => "MLMM",
            Ergo4Profile::MediumLower => "MMLM",
            Ergo4Profile::FirmUpper => "MFMM",
            Ergo4Profile::FirmLower => "MMFM",
        }
    }

    /// Window index of the individual role, `None` for the neutral profile
    pub fn individual_role(self) -> Option<usize> {
        match self {
            Ergo4Profile::Neutral => None,
            Ergo4Profile::MediumUpper | Ergo4Profile::FirmUpper => Some(UPPER_ROLE),
            Ergo4Profile::MediumLower | Ergo4Profile::FirmLower => Some(LOWER_ROLE),
        }
    }

    fn letters(self) -> [char; profile::ERGO4_ZONE_COUNT] {
        let mut letters = [letters::ERGO4_NEUTRAL; profile::ERGO4_ZONE_COUNT];
        let individual = match self {
            Ergo4Profile::Neutral => None,
            Ergo4Profile::MediumUpper | Ergo4Profile::MediumLower => Some(letters::ERGO4_MEDIUM),
            Ergo4Profile::FirmUpper | Ergo4Profile::FirmLower => Some(letters::ERGO4_FIRM),
        };
        if let (Some(letter), Some(index)) = (individual, self.individual_role()) {
            letters[index] = letter;
        }
        letters
    }
}

/// Result of an Ergo4 generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedErgo4Profile {
    pub canonical: Ergo4Profile,
    pub profile: SupportProfile,
    pub firmness: FirmnessLevel,
    pub bmi: f64,
    /// Window index holding the lowest reading among the candidate roles
    pub lordosis_index: usize,
}

/// Ergo4 window (zones 4..=7) of a full 12-zone measurement
pub fn lordosis_window(values: &[u32]) -> ProfileResult<[u32; profile::ERGO4_ZONE_COUNT]> {
    let full: [u32; profile::ZONE_COUNT] = measurement_array("measurement", values)?;
    let start = profile::ERGO4_WINDOW_START;
    measurement_array("window", &full[start..start + profile::ERGO4_ZONE_COUNT])
}

/// Generate an Ergo4 profile from a 4-zone lordosis window
///
/// Tall persons (see [`Ergo4Parameters::lordosis_floor`]) always get the
/// lower role; everyone else gets the candidate with the lower reading, the
/// upper one on a tie. Low BMI leaves the section neutral, high BMI makes the
/// role firm.
pub fn generate_ergo4_profile(
    params: &Ergo4Parameters,
    gender: Gender,
    height_cm: u32,
    weight_kg: u32,
    window: &[u32],
) -> ProfileResult<GeneratedErgo4Profile> {
    guarded(error_context!("ergo4", "generate_profile"), || {
        let window: [u32; profile::ERGO4_ZONE_COUNT] = measurement_array("window", window)?;
        let metrics = BodyMetrics::new(gender, height_cm, weight_kg)?;
        let bmi = metrics.bmi();

        let lordosis_index = if params.lordosis_floor.raised_for(gender, height_cm) {
            LOWER_ROLE
        } else {
            index_of_minimum(&window, UPPER_ROLE, LOWER_ROLE).unwrap_or(UPPER_ROLE)
        };

        let (low, high) = params.lordosis_bmi.bounds(gender);
        let canonical = match (bmi < low, bmi > high, lordosis_index) {
            (true, _, _) => Ergo4Profile::Neutral,
            (false, true, UPPER_ROLE) => Ergo4Profile::FirmUpper,
            (false, true, _) => Ergo4Profile::FirmLower,
            (false, false, UPPER_ROLE) => Ergo4Profile::MediumUpper,
            (false, false, _) => Ergo4Profile::MediumLower,
        };

        let profile = SupportProfile::from_letters(&canonical.letters());
        elements::validate_profile(ProductLine::Ergo4, profile.as_str())?;
        let firmness = params.firmness.level(gender, bmi)?;

        tracing::debug!(?gender, height_cm, bmi, lordosis_index, profile = %profile, %firmness, "generated ergo4 profile");

        Ok(GeneratedErgo4Profile {
            canonical,
            profile,
            firmness,
            bmi,
            lordosis_index,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    const WINDOW: [u32; 4] = [5, 3, 4, 6];

    fn generate(gender: Gender, height_cm: u32, weight_kg: u32) -> GeneratedErgo4Profile {
        generate_ergo4_profile(&Ergo4Parameters::default(), gender, height_cm, weight_kg, &WINDOW).unwrap()
    }

    #[test]
    fn test_canonical_codes() {
        for canonical in Ergo4Profile::ALL {
            assert_eq!(SupportProfile::from_letters(&canonical.letters()).as_str(), canonical.code());
        }
    }

    #[test]
    fn test_medium_role_at_lowest_reading() {
        // BMI 26.1
        let result = generate(Gender::Male, 175, 80);
        assert_eq!(result.canonical, Ergo4Profile::MediumUpper);
        assert_eq!(result.profile.as_str(), "MLMM");
        assert_eq!(result.lordosis_index, 1);
        assert_eq!(result.firmness, FirmnessLevel::H3);
    }

    #[test]
    fn test_tall_person_gets_lower_role() {
        let result = generate(Gender::Male, 185, 85);
        assert_eq!(result.profile.as_str(), "MMLM");

        let result = generate(Gender::Female, 172, 70);
        assert_eq!(result.profile.as_str(), "MMLM");
    }

    #[test]
    fn test_bmi_bands() {
        assert_eq!(generate(Gender::Male, 175, 55).profile.as_str(), "MMMM");
        assert_eq!(generate(Gender::Male, 175, 100).profile.as_str(), "MFMM");
        assert_eq!(generate(Gender::Male, 190, 120).profile.as_str(), "MMFM");
    }

    #[test]
    fn test_tie_prefers_upper_role() {
        let result =
            generate_ergo4_profile(&Ergo4Parameters::default(), Gender::Female, 160, 60, &[5, 4, 4, 6]).unwrap();
        assert_eq!(result.lordosis_index, 1);
    }

    #[test]
    fn test_window_from_full_measurement() {
        let full = [0, 1, 2, 3, 40, 50, 60, 70, 8, 9, 10, 11];
        assert_eq!(lordosis_window(&full).unwrap(), [40, 50, 60, 70]);
        assert!(matches!(
            lordosis_window(&full[..11]),
            Err(ProfileError::InvalidMeasurementLength { expected: 12, actual: 11, .. })
        ));
    }

    #[test]
    fn test_wrong_window_length() {
        let result = generate_ergo4_profile(&Ergo4Parameters::default(), Gender::Male, 175, 80, &[1, 2, 3, 4, 5]);
        assert!(result.unwrap_err().is_invalid_input());
    }
}
