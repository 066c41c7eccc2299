//! Input validation for measurement arrays

use crate::error::{ProfileError, ProfileResult};

/// Check that a measurement has exactly `expected` zones
pub fn validate_measurement(name: &'static str, values: &[u32], expected: usize) -> ProfileResult<()> {
    if values.len() != expected {
        tracing::debug!(name, expected, actual = values.len(), "rejecting measurement");
        return Err(ProfileError::InvalidMeasurementLength {
            name,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Validate and copy a measurement into a fixed-size array
pub fn measurement_array<const N: usize>(name: &'static str, values: &[u32]) -> ProfileResult<[u32; N]> {
    validate_measurement(name, values, N)?;
    let mut array = [0u32; N];
    array.copy_from_slice(values);
    Ok(array)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_measurement() {
        assert!(validate_measurement("supine", &[0; 12], 12).is_ok());
    }

    #[test]
    fn test_short_measurement_rejected() {
        let err = validate_measurement("lateral", &[0; 11], 12).unwrap_err();
        assert_eq!(
            err,
            ProfileError::InvalidMeasurementLength {
                name: "lateral",
                expected: 12,
                actual: 11,
            }
        );
    }

    #[test]
    fn test_measurement_array_copy() {
        let values = [1, 2, 3, 4];
        let array: [u32; 4] = measurement_array("window", &values).unwrap();
        assert_eq!(array, values);
        assert!(measurement_array::<4>("window", &[1, 2, 3]).is_err());
    }
}
