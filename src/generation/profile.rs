// src/generation/profile.rs
//! Parametrised 12-zone profile generator

use crate::config::constants::profile::ZONE_COUNT;
use crate::config::{ProfileVariant, SchemaValidator};
use crate::elements;
use crate::error::{guarded, ProfileError, ProfileResult};
use crate::error_context;
use crate::generation::zones::{self, Measurement};
use crate::generation::{GeneratedProfile, GenerationMethod, ProfileRequest};
use crate::types::{BodyMetrics, Gender, MeasurementPosition, SupportProfile};
use crate::utils::measurement_array;

/// Generate a support profile with the given variant
///
/// Every zone starts with the neutral letter. The shoulder pattern is written
/// to zones 0..=2, then the pelvis zone and its neighbours, then the
/// lordosis. A firm lordosis is never left directly in front of a pelvis
/// letter.
///
/// # Errors
///
/// A variant that fails schema validation, measurements that are not exactly
/// 12 zones long, zero height or weight, and a neutral letter outside the
/// variant's product alphabet are rejected before anything is generated.
pub fn generate_profile(variant: &ProfileVariant, request: &ProfileRequest) -> ProfileResult<GeneratedProfile> {
    let context = error_context!("generation", "generate_profile").add_info("variant", variant.name.as_str());
    guarded(context, || build_profile(variant, request))
}

/// Liegesimulator stamp profile with the default parameters
pub fn generate_stamp_profile(request: &ProfileRequest) -> ProfileResult<GeneratedProfile> {
    generate_profile(&ProfileVariant::stamp(), request)
}

/// Liegesimulator 2.0 role profile with the default parameters
pub fn generate_role_profile(request: &ProfileRequest) -> ProfileResult<GeneratedProfile> {
    generate_profile(&ProfileVariant::role(), request)
}

/// Ergonometer NL role profile with the default parameters
pub fn generate_ergonometer_nl_profile(request: &ProfileRequest) -> ProfileResult<GeneratedProfile> {
    generate_profile(&ProfileVariant::ergonometer_nl(), request)
}

/// SF contact role profile with the default parameters
pub fn generate_sf_contact_profile(request: &ProfileRequest) -> ProfileResult<GeneratedProfile> {
    generate_profile(&ProfileVariant::sf_contact(), request)
}

fn build_profile(variant: &ProfileVariant, request: &ProfileRequest) -> ProfileResult<GeneratedProfile> {
    check_variant(variant)?;
    let supine: Measurement = measurement_array("supine", &request.supine)?;
    let lateral: Measurement = measurement_array("lateral", &request.lateral)?;
    let metrics = BodyMetrics::new(request.gender, request.height_cm, request.weight_kg)?;
    let neutral = neutral_letter(variant, request.neutral_letter)?;
    let bmi = metrics.bmi();

    let mut letters = [neutral; ZONE_COUNT];

    // Shoulder
    let shoulder = zones::detect_shoulder(request.position, &supine, &lateral, variant.shoulder_fallback);
    let shoulder_values = match shoulder.source {
        MeasurementPosition::Supine => &supine,
        MeasurementPosition::Lateral => &lateral,
    };
    letters[..3].copy_from_slice(&zones::shoulder_pattern(
        shoulder.index,
        shoulder_values,
        variant.shoulder_letter,
        variant.pelvis_letter,
    ));
    if shoulder.fallback_used {
        tracing::debug!(variant = %variant.name, "ambiguous lateral shoulder peak, using supine measurement");
    }

    let person_lying_position_wrong = shoulder.index == crate::config::constants::zones::SHOULDER_LAST_INDEX;
    if person_lying_position_wrong {
        tracing::warn!(
            variant = %variant.name,
            shoulder_index = shoulder.index,
            "shoulder peak far from the head end, person probably lay wrong during measurement"
        );
    }

    // Pelvis
    let values = match request.position {
        MeasurementPosition::Supine => &supine,
        MeasurementPosition::Lateral => &lateral,
    };
    let rule = variant
        .pelvis_scan_for(metrics.height_cm)
        .ok_or_else(|| ProfileError::InvalidInput {
            field: "pelvis_scan",
            reason: format!("variant '{}' has no pelvis scan rule", variant.name),
        })?;
    let pelvis = zones::detect_pelvis(values, rule, metrics.height_cm);
    let widening = zones::widen_pelvis(values, pelvis, metrics.gender, &variant.pelvis_tolerance, metrics.height_cm);
    for index in [Some(pelvis), widening.left, widening.right].into_iter().flatten() {
        letters[index] = variant.pelvis_letter;
    }

    // Lordosis
    let floor_raised = variant.lordosis_floor.raised_for(metrics.gender, metrics.height_cm);
    let lordosis = zones::detect_lordosis(values, pelvis, floor_raised);
    if let Some(index) = lordosis {
        letters[index] = lordosis_letter(variant, metrics.gender, bmi, neutral);
    }

    if zones::separate_firm_from_pelvis(&mut letters, variant.lordosis_firm_letter, variant.pelvis_letter, neutral) {
        tracing::debug!(variant = %variant.name, "separated firm lordosis from pelvis");
    }

    let profile = SupportProfile::from_letters(&letters);
    elements::validate_profile(variant.product_line, profile.as_str())?;
    let firmness = variant.firmness.level(metrics.gender, bmi)?;

    let generation_method = match (request.position, shoulder.fallback_used) {
        (MeasurementPosition::Supine, _) => GenerationMethod::Supine,
        (MeasurementPosition::Lateral, false) => GenerationMethod::Lateral,
        (MeasurementPosition::Lateral, true) => GenerationMethod::LateralWithSupineFallback,
    };

    tracing::debug!(
        variant = %variant.name,
        profile = %profile,
        bmi,
        %firmness,
        shoulder = shoulder.index,
        pelvis,
        ?lordosis,
        method = %generation_method,
        "generated support profile"
    );

    Ok(GeneratedProfile {
        profile,
        firmness,
        bmi,
        person_lying_position_wrong,
        generation_method,
        shoulder_index: shoulder.index,
        pelvis_index: pelvis,
        lordosis_index: lordosis,
    })
}

fn check_variant(variant: &ProfileVariant) -> ProfileResult<()> {
    SchemaValidator::new().validate_variant(variant).map_err(|errors| {
        let reason = errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
        tracing::debug!(variant = %variant.name, violations = errors.len(), "rejected variant");
        ProfileError::InvalidInput { field: "variant", reason }
    })
}

fn neutral_letter(variant: &ProfileVariant, requested: Option<char>) -> ProfileResult<char> {
    let neutral = requested.unwrap_or(variant.neutral_letter);
    elements::lookup(variant.product_line, neutral.encode_utf8(&mut [0; 4]))?;

    if neutral == variant.pelvis_letter || neutral == variant.lordosis_firm_letter {
        return Err(ProfileError::InvalidInput {
            field: "neutral_letter",
            reason: format!("'{}' is reserved for the pelvis and lordosis zones", neutral),
        });
    }
    Ok(neutral)
}

fn lordosis_letter(variant: &ProfileVariant, gender: Gender, bmi: f64, neutral: char) -> char {
    let (low, high) = variant.lordosis_bmi.bounds(gender);
    if bmi < low {
        neutral
    } else if bmi > high {
        variant.lordosis_firm_letter
    } else {
        variant.lordosis_medium_letter.unwrap_or(neutral)
    }
}
