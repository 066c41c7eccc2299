// src/config/mod.rs
//! Generation parameters and their TOML configuration layer

pub mod constants;
pub mod loader;
pub mod schema_validator;
pub mod variants;

pub use constants::*;
pub use loader::{ConfigError, ConfigLoader};
pub use schema_validator::{SchemaValidator, ValidationError};
pub use variants::*;

use serde::{Deserialize, Serialize};

/// Parameter sets of every generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "ProfileVariant::stamp")]
    pub stamp: ProfileVariant,

    #[serde(default = "ProfileVariant::role")]
    pub role: ProfileVariant,

    #[serde(default = "ProfileVariant::ergonometer_nl")]
    pub ergonometer_nl: ProfileVariant,

    #[serde(default = "ProfileVariant::sf_contact")]
    pub sf_contact: ProfileVariant,

    #[serde(default)]
    pub ergo4: Ergo4Parameters,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            stamp: ProfileVariant::stamp(),
            role: ProfileVariant::role(),
            ergonometer_nl: ProfileVariant::ergonometer_nl(),
            sf_contact: ProfileVariant::sf_contact(),
            ergo4: Ergo4Parameters::default(),
        }
    }
}

impl GenerationConfig {
    /// All 12-zone variants
    pub fn variants(&self) -> [&ProfileVariant; 4] {
        [&self.stamp, &self.role, &self.ergonometer_nl, &self.sf_contact]
    }

    /// Variant by its configured name
    pub fn variant(&self, name: &str) -> Option<&ProfileVariant> {
        self.variants().into_iter().find(|variant| variant.name == name)
    }

    /// Validate every parameter set
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        SchemaValidator::new().validate_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_variant_by_name() {
        let config = GenerationConfig::default();
        assert_eq!(config.variant("sf_contact").unwrap().neutral_letter, 'S');
        assert_eq!(config.variant("ergonometer_nl").unwrap().neutral_letter, 'D');
        assert!(config.variant("unknown").is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = GenerationConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: GenerationConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: GenerationConfig = toml::from_str("").unwrap();
        assert_eq!(config, GenerationConfig::default());
    }
}
