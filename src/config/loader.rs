// src/config/loader.rs
//! Layered configuration loader
//!
//! Defaults are serialised to a TOML tree, every existing file is merged on
//! top in order, then `SUPPORT_PROFILE_*` environment variables are applied
//! and the result is validated.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::constants::paths;
use crate::config::schema_validator::{SchemaValidator, ValidationError};
use crate::config::GenerationConfig;

/// Configuration loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    schema_validator: SchemaValidator,
    env_overrides: bool,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Configuration validation errors: {}", format_validation_errors(.0))]
    ValidationError(Vec<ValidationError>),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("\n  {}", e))
        .collect()
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl ConfigLoader {
    /// Create new configuration loader with the standard search paths
    pub fn new() -> Self {
        Self::with_paths(Self::discover_config_paths())
    }

    /// Create loader with custom paths
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            config_paths: paths,
            schema_validator: SchemaValidator::new(),
            env_overrides: true,
        }
    }

    /// Ignore environment overrides
    pub fn without_env_overrides(mut self) -> Self {
        self.env_overrides = false;
        self
    }

    pub fn config_paths(&self) -> &[PathBuf] {
        &self.config_paths
    }

    /// Load, merge and validate the configuration
    pub fn load(&self) -> Result<GenerationConfig, ConfigError> {
        let mut merged = Self::default_tree()?;

        for config_path in &self.config_paths {
            if !config_path.exists() {
                continue;
            }
            let file_config = self.load_config_file(config_path)?;
            tracing::debug!(path = %config_path.display(), "merging configuration file");
            merge_toml_values(&mut merged, file_config);
        }

        self.finish(merged)
    }

    /// Merge a TOML document over the defaults
    pub fn load_from_str(&self, content: &str) -> Result<GenerationConfig, ConfigError> {
        let mut merged = Self::default_tree()?;
        merge_toml_values(&mut merged, toml::from_str(content)?);
        self.finish(merged)
    }

    /// Validate a configuration file without loading it
    pub fn validate_config_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let mut merged = Self::default_tree()?;
        merge_toml_values(&mut merged, self.load_config_file(path)?);
        let config: GenerationConfig = merged.try_into()?;

        self.schema_validator
            .validate_config(&config)
            .map_err(ConfigError::ValidationError)
    }

    /// Write a configuration as pretty TOML
    pub fn export_config<P: AsRef<Path>>(&self, config: &GenerationConfig, path: P) -> Result<(), ConfigError> {
        let toml_content =
            toml::to_string_pretty(config).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, toml_content)?;
        Ok(())
    }

    fn default_tree() -> Result<toml::Value, ConfigError> {
        toml::Value::try_from(GenerationConfig::default()).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn finish(&self, mut merged: toml::Value) -> Result<GenerationConfig, ConfigError> {
        if self.env_overrides {
            apply_environment_overrides(&mut merged, std::env::vars());
        }

        let config: GenerationConfig = merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

        self.schema_validator
            .validate_config(&config)
            .map_err(ConfigError::ValidationError)?;

        Ok(config)
    }

    fn load_config_file<P: AsRef<Path>>(&self, path: P) -> Result<toml::Value, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn discover_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(paths::SYSTEM_CONFIG_PATH)];

        if let Some(home_dir) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
            paths.push(PathBuf::from(home_dir).join(paths::USER_CONFIG_DIR).join("config.toml"));
        }

        paths.push(PathBuf::from(paths::DEFAULT_CONFIG_FILE));
        paths.push(PathBuf::from(paths::LOCAL_CONFIG_FILE));
        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_toml_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(&key) {
                    merge_toml_values(base_value, value);
                } else {
                    base_table.insert(key, value);
                }
            }
        }
        (base_value, overlay_value) => {
            *base_value = overlay_value;
        }
    }
}

/// Apply `SUPPORT_PROFILE_SECTION__FIELD=value` overrides
fn apply_environment_overrides(config: &mut toml::Value, vars: impl IntoIterator<Item = (String, String)>) {
    for (key, value) in vars {
        let Some(path) = key.strip_prefix(paths::ENV_PREFIX) else {
            continue;
        };
        let segments: Vec<String> = path
            .split(paths::ENV_PATH_SEPARATOR)
            .map(str::to_lowercase)
            .collect();

        tracing::debug!(key = %key, "applying environment override");
        set_nested_value(config, &segments, parse_env_value(&value));
    }
}

fn parse_env_value(value: &str) -> toml::Value {
    if let Ok(int_val) = value.parse::<i64>() {
        toml::Value::Integer(int_val)
    } else if let Ok(float_val) = value.parse::<f64>() {
        toml::Value::Float(float_val)
    } else if let Ok(bool_val) = value.parse::<bool>() {
        toml::Value::Boolean(bool_val)
    } else {
        toml::Value::String(value.to_string())
    }
}

fn set_nested_value(config: &mut toml::Value, segments: &[String], value: toml::Value) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut current = config;
    for part in parents {
        let toml::Value::Table(table) = current else {
            return;
        };
        current = table
            .entry(part.clone())
            .or_insert_with(|| toml::Value::Table(toml::value::Table::new()));
    }

    if let toml::Value::Table(table) = current {
        // Floats written as integers, e.g. a BMI threshold of "31"
        let value = match (table.get(last), value) {
            (Some(toml::Value::Float(_)), toml::Value::Integer(i)) => toml::Value::Float(i as f64),
            (_, value) => value,
        };
        table.insert(last.clone(), value);
    }
}
