// src/generation/mod.rs
//! Support profile generators
//!
//! The 12-zone generator is shared by the Stamp, Role, Ergonometer NL and SF
//! contact product lines and is driven by a [`ProfileVariant`]. Ergo4 and the
//! pillow configuration have their own, much smaller, rule sets.
//!
//! [`ProfileVariant`]: crate::config::ProfileVariant

pub mod batch;
pub mod ergo4;
pub mod pillow;
pub mod profile;
pub mod zones;

pub use batch::generate_profiles;
pub use ergo4::{generate_ergo4_profile, lordosis_window, Ergo4Profile, GeneratedErgo4Profile};
pub use pillow::{generate_pillow_profile, BaseModule, InsertVariant, PillowConfiguration, WedgeVariant};
pub use profile::{
    generate_ergonometer_nl_profile, generate_profile, generate_role_profile, generate_sf_contact_profile,
    generate_stamp_profile,
};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{FirmnessLevel, Gender, MeasurementPosition, SupportProfile};

/// Input of a 12-zone profile generation
///
/// Both measurements are required; which one drives each zone depends on
/// `position` and on the variant's shoulder fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub position: MeasurementPosition,
    pub supine: Vec<u32>,
    pub lateral: Vec<u32>,
    pub gender: Gender,
    pub height_cm: u32,
    pub weight_kg: u32,
    /// Overrides the variant's neutral letter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutral_letter: Option<char>,
}

impl ProfileRequest {
    pub fn new(
        position: MeasurementPosition,
        supine: impl Into<Vec<u32>>,
        lateral: impl Into<Vec<u32>>,
        gender: Gender,
        height_cm: u32,
        weight_kg: u32,
    ) -> Self {
        Self {
            position,
            supine: supine.into(),
            lateral: lateral.into(),
            gender,
            height_cm,
            weight_kg,
            neutral_letter: None,
        }
    }

    pub fn with_neutral_letter(mut self, letter: char) -> Self {
        self.neutral_letter = Some(letter);
        self
    }
}

/// Branch that produced the shoulder zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationMethod {
    Supine,
    Lateral,
    /// Lateral peak was ambiguous, the supine measurement decided
    LateralWithSupineFallback,
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMethod::Supine => write!(f, "supine"),
            GenerationMethod::Lateral => write!(f, "lateral"),
            GenerationMethod::LateralWithSupineFallback => write!(f, "lateral with supine fallback"),
        }
    }
}

/// Result of a 12-zone profile generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedProfile {
    pub profile: SupportProfile,
    pub firmness: FirmnessLevel,
    pub bmi: f64,
    /// Advisory: the shoulder peak sat unusually far towards the feet
    pub person_lying_position_wrong: bool,
    pub generation_method: GenerationMethod,
    pub shoulder_index: usize,
    pub pelvis_index: usize,
    /// `None` when there was no room between shoulder region and pelvis
    pub lordosis_index: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ProfileRequest::new(MeasurementPosition::Supine, [0; 12], vec![0; 12], Gender::Female, 165, 60)
            .with_neutral_letter('D');
        assert_eq!(request.supine.len(), 12);
        assert_eq!(request.neutral_letter, Some('D'));
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "position": "lateral",
            "supine": [1,2,3,4,5,6,7,8,9,10,11,12],
            "lateral": [1,2,3,4,5,6,7,8,9,10,11,12],
            "gender": "male",
            "height_cm": 182,
            "weight_kg": 80
        }"#;
        let request: ProfileRequest = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(request.position, MeasurementPosition::Lateral);
        assert_eq!(request.neutral_letter, None);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(GenerationMethod::LateralWithSupineFallback.to_string(), "lateral with supine fallback");
    }
}
