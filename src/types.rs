// src/types.rs
//! Core value types shared by all generation algorithms

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};
use crate::utils::shorten_profile;

/// Gender used for threshold selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Gender as recorded by calling applications
///
/// Customer records carry two extra states that no threshold ladder is
/// defined for. Convert with [`Gender::try_from`] before calling into the
/// algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerGender {
    Male,
    Female,
    Other,
    NotSet,
}

impl TryFrom<CustomerGender> for Gender {
    type Error = ProfileError;

    fn try_from(value: CustomerGender) -> Result<Self, Self::Error> {
        match value {
            CustomerGender::Male => Ok(Gender::Male),
            CustomerGender::Female => Ok(Gender::Female),
            other => Err(ProfileError::UnsupportedGender(other)),
        }
    }
}

impl fmt::Display for CustomerGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerGender::Male => write!(f, "male"),
            CustomerGender::Female => write!(f, "female"),
            CustomerGender::Other => write!(f, "other"),
            CustomerGender::NotSet => write!(f, "not set"),
        }
    }
}

/// Posture during which a pressure measurement was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementPosition {
    Supine,
    Lateral,
}

/// Preferred sleep position, used by the pillow configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepPosition {
    Supine,
    Lateral,
    Prone,
}

/// Ordinal firmness scale, larger is firmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FirmnessLevel {
    None,
    H0,
    H1,
    H2,
    H3,
    H4,
}

impl fmt::Display for FirmnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FirmnessLevel::None => "None",
            FirmnessLevel::H0 => "H0",
            FirmnessLevel::H1 => "H1",
            FirmnessLevel::H2 => "H2",
            FirmnessLevel::H3 => "H3",
            FirmnessLevel::H4 => "H4",
        };
        f.write_str(name)
    }
}

/// Family of physical elements a profile letter addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileElementKind {
    Stamps,
    Roles,
    Ergo4Roles,
    OrthonicBars,
}

impl fmt::Display for ProfileElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileElementKind::Stamps => write!(f, "stamps"),
            ProfileElementKind::Roles => write!(f, "roles"),
            ProfileElementKind::Ergo4Roles => write!(f, "ergo4 roles"),
            ProfileElementKind::OrthonicBars => write!(f, "orthonic bars"),
        }
    }
}

/// Validated body metrics of the measured person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub gender: Gender,
    pub height_cm: u32,
    pub weight_kg: u32,
}

impl BodyMetrics {
    /// Create body metrics, rejecting zero height or weight
    pub fn new(gender: Gender, height_cm: u32, weight_kg: u32) -> ProfileResult<Self> {
        if height_cm == 0 {
            return Err(ProfileError::InvalidInput {
                field: "height_cm",
                reason: "height must be greater than zero".to_string(),
            });
        }
        if weight_kg == 0 {
            return Err(ProfileError::InvalidInput {
                field: "weight_kg",
                reason: "weight must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            gender,
            height_cm,
            weight_kg,
        })
    }

    /// Create body metrics from a customer record
    pub fn from_customer(gender: CustomerGender, height_cm: u32, weight_kg: u32) -> ProfileResult<Self> {
        Self::new(Gender::try_from(gender)?, height_cm, weight_kg)
    }

    /// Body mass index, weight / height(m)^2
    pub fn bmi(&self) -> f64 {
        let height_m = f64::from(self.height_cm) / 100.0;
        f64::from(self.weight_kg) / (height_m * height_m)
    }
}

/// Ordered sequence of element letters, one per zone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportProfile(String);

impl SupportProfile {
    pub(crate) fn from_letters(letters: &[char]) -> Self {
        Self(letters.iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of zones
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Run-length form, e.g. `SSSKKSTSTTS` becomes `3S2KSTS2TS`
    pub fn shortened(&self) -> String {
        shorten_profile(&self.0).unwrap_or_default()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SupportProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SupportProfile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
