// src/config/schema_validator.rs
//! Configuration schema validation

use crate::config::constants::{profile, zones};
use crate::config::{Ergo4Parameters, GenerationConfig, LordosisThresholds, ProfileVariant};
use crate::suggestion::BmiLadder;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub value: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation error for '{}': {} (value: {})", self.field, self.message, self.value)
    }
}

impl std::error::Error for ValidationError {}

/// Schema validator for generation parameters
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    max_tolerance_mbar: u32,
    bmi_range: (f64, f64),
}

impl SchemaValidator {
    /// Create new schema validator with default constraints
    pub fn new() -> Self {
        Self {
            max_tolerance_mbar: 20,
            bmi_range: (10.0, 60.0),
        }
    }

    /// Validate a complete configuration, collecting every violation
    pub fn validate_config(&self, config: &GenerationConfig) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (section, variant) in [
            ("stamp", &config.stamp),
            ("role", &config.role),
            ("ergonometer_nl", &config.ergonometer_nl),
            ("sf_contact", &config.sf_contact),
        ] {
            self.check_variant(section, variant, &mut errors);
        }
        self.validate_ergo4("ergo4", &config.ergo4, &mut errors);

        into_result(errors)
    }

    /// Validate a single variant, with fields prefixed by its name
    pub fn validate_variant(&self, variant: &ProfileVariant) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        self.check_variant(&variant.name, variant, &mut errors);
        into_result(errors)
    }

    fn check_variant(&self, section: &str, variant: &ProfileVariant, errors: &mut Vec<ValidationError>) {
        let letters = [
            ("neutral_letter", Some(variant.neutral_letter)),
            ("shoulder_letter", Some(variant.shoulder_letter)),
            ("pelvis_letter", Some(variant.pelvis_letter)),
            ("lordosis_firm_letter", Some(variant.lordosis_firm_letter)),
            ("lordosis_medium_letter", variant.lordosis_medium_letter),
        ];
        for (field, letter) in letters {
            if let Some(letter) = letter {
                if !variant.product_line.knows(letter) {
                    errors.push(error(
                        section,
                        field,
                        &format!("letter is not part of the {} alphabet", variant.product_line),
                        letter,
                    ));
                }
            }
        }

        if variant.pelvis_letter == variant.neutral_letter {
            errors.push(error(section, "pelvis_letter", "must differ from the neutral letter", variant.pelvis_letter));
        }
        if variant.lordosis_firm_letter == variant.pelvis_letter || variant.lordosis_firm_letter == variant.neutral_letter {
            errors.push(error(
                section,
                "lordosis_firm_letter",
                "must differ from the pelvis and neutral letters",
                variant.lordosis_firm_letter,
            ));
        }
        // The shoulder pattern and the lordosis letters must never form a firm/pelvis pair
        if variant.shoulder_letter == variant.pelvis_letter || variant.shoulder_letter == variant.lordosis_firm_letter {
            errors.push(error(
                section,
                "shoulder_letter",
                "must differ from the pelvis and firm lordosis letters",
                variant.shoulder_letter,
            ));
        }
        if let Some(medium) = variant.lordosis_medium_letter {
            if medium == variant.pelvis_letter || medium == variant.lordosis_firm_letter {
                errors.push(error(
                    section,
                    "lordosis_medium_letter",
                    "must differ from the pelvis and firm lordosis letters",
                    medium,
                ));
            }
        }

        self.validate_thresholds(section, "lordosis_bmi", &variant.lordosis_bmi, errors);
        self.validate_ladder(section, "firmness", &variant.firmness, errors);

        for (field, value) in [
            ("pelvis_tolerance.male_mbar", variant.pelvis_tolerance.male_mbar),
            ("pelvis_tolerance.female_mbar", variant.pelvis_tolerance.female_mbar),
        ] {
            if value > self.max_tolerance_mbar {
                errors.push(error(
                    section,
                    field,
                    &format!("must not exceed {} mbar", self.max_tolerance_mbar),
                    value,
                ));
            }
        }

        if variant.pelvis_scan.is_empty() {
            errors.push(error(section, "pelvis_scan", "at least one rule is required", "[]"));
        }
        if let Some(last) = variant.pelvis_scan.last() {
            if last.below_height_cm.is_some() {
                errors.push(error(section, "pelvis_scan", "last rule must match every height", format!("{:?}", last)));
            }
        }
        let mut previous_height = 0;
        for (i, rule) in variant.pelvis_scan.iter().enumerate() {
            let field = format!("pelvis_scan[{}]", i);
            if rule.start_index > profile::LAST_ZONE_INDEX {
                errors.push(error(section, &field, "start_index outside the profile", rule.start_index));
            }
            if rule.floor_index > rule.start_index || rule.floor_index <= zones::LORDOSIS_MIN_INDEX {
                errors.push(error(
                    section,
                    &field,
                    "floor_index must lie between the lordosis minimum and start_index",
                    rule.floor_index,
                ));
            }
            if let Some(height) = rule.below_height_cm {
                if height <= previous_height {
                    errors.push(error(section, &field, "heights must be ascending", height));
                }
                previous_height = height;
            }
        }
    }

    fn validate_ergo4(&self, section: &str, params: &Ergo4Parameters, errors: &mut Vec<ValidationError>) {
        self.validate_thresholds(section, "lordosis_bmi", &params.lordosis_bmi, errors);
        self.validate_ladder(section, "firmness", &params.firmness, errors);
    }

    fn validate_thresholds(
        &self,
        section: &str,
        field: &str,
        thresholds: &LordosisThresholds,
        errors: &mut Vec<ValidationError>,
    ) {
        for (gender, low, high) in [
            ("male", thresholds.male_low, thresholds.male_high),
            ("female", thresholds.female_low, thresholds.female_high),
        ] {
            let name = format!("{}.{}", field, gender);
            if low > high {
                errors.push(error(section, &name, "low bound above high bound", format!("{}..{}", low, high)));
            }
            for value in [low, high] {
                if !self.bmi_in_range(value) {
                    errors.push(error(section, &name, "BMI outside the supported range", value));
                }
            }
        }
    }

    fn validate_ladder(&self, section: &str, field: &str, ladder: &BmiLadder, errors: &mut Vec<ValidationError>) {
        for (gender, breakpoints) in [("male", &ladder.male), ("female", &ladder.female)] {
            let name = format!("{}.{}", field, gender);
            if breakpoints.len() + 1 != ladder.levels.len() {
                errors.push(error(
                    section,
                    &name,
                    &format!("{} levels need {} breakpoints", ladder.levels.len(), ladder.levels.len().saturating_sub(1)),
                    breakpoints.len(),
                ));
            }
            if breakpoints.windows(2).any(|pair| pair[0] >= pair[1]) {
                errors.push(error(section, &name, "breakpoints must be strictly ascending", format!("{:?}", breakpoints)));
            }
            if let Some(&value) = breakpoints.iter().find(|&&b| !self.bmi_in_range(b)) {
                errors.push(error(section, &name, "BMI outside the supported range", value));
            }
        }
        if ladder.levels.windows(2).any(|pair| pair[0] > pair[1]) {
            errors.push(error(section, &format!("{}.levels", field), "levels must not decrease", format!("{:?}", ladder.levels)));
        }
    }

    fn bmi_in_range(&self, value: f64) -> bool {
        value >= self.bmi_range.0 && value <= self.bmi_range.1
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn into_result(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn error(section: &str, field: &str, message: &str, value: impl ToString) -> ValidationError {
    ValidationError {
        field: format!("{}.{}", section, field),
        message: message.to_string(),
        value: value.to_string(),
    }
}
