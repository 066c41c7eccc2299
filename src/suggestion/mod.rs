// src/suggestion/mod.rs
//! BMI threshold classifiers
//!
//! Each product line has its own gender-specific breakpoints. A ladder with
//! breakpoints `[b0, b1, ..]` maps `bmi < b0` to the first outcome,
//! `b0 <= bmi < b1` to the second and so on; anything above the last
//! breakpoint gets the last outcome.

pub mod ergomen;
pub mod physio_emd;
pub mod shoulder_pad;
pub mod topper;

pub use ergomen::suggest_ergomen_firmness;
pub use physio_emd::{suggest_physio_emd, StarPositionSuggestion};
pub use shoulder_pad::{suggest_shoulder_pad, PadFirmness, ShoulderPadSuggestion};
pub use topper::suggest_topper_firmness;

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};
use crate::types::{FirmnessLevel, Gender};

/// Pick the outcome for `value` from ascending exclusive breakpoints
///
/// `outcomes` must hold one entry more than `breakpoints`; `None` otherwise.
pub fn classify<T: Copy>(breakpoints: &[f64], outcomes: &[T], value: f64) -> Option<T> {
    if outcomes.len() != breakpoints.len() + 1 {
        return None;
    }
    let slot = breakpoints
        .iter()
        .position(|&b| value < b)
        .unwrap_or(breakpoints.len());
    outcomes.get(slot).copied()
}

/// Fixed gender-specific BMI bands
///
/// `below[i]` applies under the i-th bound, `top` above the last one. The
/// array lengths tie outcomes to bounds, so every BMI has an outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiBands<T, const N: usize> {
    pub male: [f64; N],
    pub female: [f64; N],
    pub below: [T; N],
    pub top: T,
}

impl<T: Copy, const N: usize> BmiBands<T, N> {
    pub fn pick(&self, gender: Gender, bmi: f64) -> T {
        let bounds = match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        };
        bounds
            .iter()
            .zip(self.below.iter())
            .find(|(bound, _)| bmi < **bound)
            .map_or(self.top, |(_, outcome)| *outcome)
    }
}

/// Configurable gender-specific BMI breakpoints mapped to firmness levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiLadder {
    pub male: Vec<f64>,
    pub female: Vec<f64>,
    pub levels: Vec<FirmnessLevel>,
}

impl BmiLadder {
    pub fn new(male: &[f64], female: &[f64], levels: &[FirmnessLevel]) -> Self {
        Self {
            male: male.to_vec(),
            female: female.to_vec(),
            levels: levels.to_vec(),
        }
    }

    pub fn breakpoints(&self, gender: Gender) -> &[f64] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Firmness level for a BMI
    pub fn level(&self, gender: Gender, bmi: f64) -> ProfileResult<FirmnessLevel> {
        classify(self.breakpoints(gender), &self.levels, bmi).ok_or_else(|| ProfileError::InvalidInput {
            field: "firmness_ladder",
            reason: format!(
                "{} levels do not fit {} breakpoints",
                self.levels.len(),
                self.breakpoints(gender).len()
            ),
        })
    }
}

/// Firmness level together with the BMI it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FirmnessSuggestion {
    pub firmness: FirmnessLevel,
    pub bmi: f64,
}
