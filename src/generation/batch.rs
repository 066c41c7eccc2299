// src/generation/batch.rs
//! Parallel generation of independent profiles

use rayon::prelude::*;

use crate::config::ProfileVariant;
use crate::error::ProfileResult;
use crate::generation::{generate_profile, GeneratedProfile, ProfileRequest};

/// Generate one profile per request in parallel
///
/// Results keep the order of `requests`; a failing request does not affect
/// the others.
pub fn generate_profiles(variant: &ProfileVariant, requests: &[ProfileRequest]) -> Vec<ProfileResult<GeneratedProfile>> {
    tracing::debug!(variant = %variant.name, count = requests.len(), "generating profile batch");
    requests
        .par_iter()
        .map(|request| generate_profile(variant, request))
        .collect()
}
