// tests/error_propagation_tests.rs
//! Error propagation across the public entry points
//!
//! This module checks that:
//! - Invalid input is returned as an error value and never panics
//! - Unknown element letters carry the product line, element kind and letter
//! - Unsupported caller genders are rejected before any algorithm runs
//! - Error values survive formatting with their details intact

use support_profile_core::elements::{self, ProductLine};
use support_profile_core::generation::{
    generate_ergo4_profile, generate_pillow_profile, generate_role_profile, ProfileRequest,
};
use support_profile_core::suggestion::suggest_ergomen_firmness;
use support_profile_core::{
    BodyMetrics, CustomerGender, Ergo4Parameters, Gender, MeasurementPosition, ProfileElementKind, ProfileError,
    ProfileVariant, SleepPosition, UnknownProfileElementError,
};

const MEASUREMENT: [u32; 12] = [6, 14, 9, 7, 5, 3, 6, 9, 15, 10, 6, 3];

/// Test invalid input handling at every entry point
mod invalid_input {
    use super::*;

    #[test]
    fn test_measurement_length_errors_name_the_array() {
        let request = ProfileRequest::new(MeasurementPosition::Lateral, MEASUREMENT, vec![1u32; 13], Gender::Male, 180, 80);

        match generate_role_profile(&request) {
            Err(ProfileError::InvalidMeasurementLength { name, expected, actual }) => {
                assert_eq!(name, "lateral");
                assert_eq!(expected, 12);
                assert_eq!(actual, 13);
            }
            other => panic!("Expected length error, got: {:?}", other),
        }
    }

    #[test]
    fn test_zero_body_metrics() {
        let request = ProfileRequest::new(MeasurementPosition::Supine, MEASUREMENT, MEASUREMENT, Gender::Male, 0, 80);
        assert!(matches!(
            generate_role_profile(&request),
            Err(ProfileError::InvalidInput { field: "height_cm", .. })
        ));

        assert!(matches!(
            suggest_ergomen_firmness(Gender::Female, 170, 0),
            Err(ProfileError::InvalidInput { field: "weight_kg", .. })
        ));

        assert!(generate_ergo4_profile(&Ergo4Parameters::default(), Gender::Male, 0, 80, &[1, 2, 3, 4])
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_empty_measurements() {
        let request = ProfileRequest::new(MeasurementPosition::Supine, Vec::<u32>::new(), Vec::<u32>::new(), Gender::Female, 165, 60);
        assert!(generate_role_profile(&request).unwrap_err().is_invalid_input());
        assert!(generate_pillow_profile(SleepPosition::Lateral, Gender::Female, Some(&[])).is_err());
    }
}

/// Test unknown element reporting
mod unknown_elements {
    use super::*;

    #[test]
    fn test_lookup_error_details() {
        let err = elements::pressure_mbar(ProductLine::Orthonometer, "K").unwrap_err();
        assert_eq!(
            err,
            UnknownProfileElementError {
                kind: ProfileElementKind::OrthonicBars,
                product_line: ProductLine::Orthonometer,
                letter: "K".to_string(),
            }
        );

        let display = err.to_string();
        assert!(display.contains("'K'"));
        assert!(display.contains("Orthonometer"));
    }

    #[test]
    fn test_unknown_element_reaches_generation_callers() {
        let request = ProfileRequest::new(MeasurementPosition::Supine, MEASUREMENT, MEASUREMENT, Gender::Male, 180, 80)
            .with_neutral_letter('Z');

        match generate_role_profile(&request) {
            Err(ProfileError::UnknownElement(inner)) => {
                assert_eq!(inner.letter, "Z");
                assert_eq!(inner.kind, ProfileElementKind::Roles);
            }
            other => panic!("Expected unknown element error, got: {:?}", other),
        }
    }

    #[test]
    fn test_misconfigured_variant_is_rejected_up_front() {
        let variant = ProfileVariant {
            pelvis_letter: 'X',
            ..ProfileVariant::role()
        };
        let request = ProfileRequest::new(MeasurementPosition::Supine, MEASUREMENT, MEASUREMENT, Gender::Male, 180, 80);

        let err = support_profile_core::generation::generate_profile(&variant, &request).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidInput { field: "variant", ref reason } if reason.contains("role.pelvis_letter")));
        assert!(err.is_invalid_input());
    }
}

/// Test caller-side gender conversion
mod gender {
    use super::*;

    #[test]
    fn test_unsupported_genders_are_rejected() {
        for gender in [CustomerGender::Other, CustomerGender::NotSet] {
            let err = BodyMetrics::from_customer(gender, 170, 70).unwrap_err();
            assert_eq!(err, ProfileError::UnsupportedGender(gender));
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn test_supported_genders_pass_through() {
        let metrics = BodyMetrics::from_customer(CustomerGender::Female, 170, 70).unwrap();
        assert_eq!(metrics.gender, Gender::Female);
        assert!(suggest_ergomen_firmness(metrics.gender, metrics.height_cm, metrics.weight_kg).is_ok());
    }
}

#[test]
fn test_errors_are_thread_safe_values() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<ProfileError>();
    assert_send_sync::<UnknownProfileElementError>();
}
