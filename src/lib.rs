//! Support-Profile-Core: support profile generation from body-pressure measurements
//!
//! This library turns pressure readings taken on a measurement bed, together
//! with gender, height and weight, into element-letter profiles for
//! adjustable mattresses and pillows. It features:
//!
//! - Shoulder, lordosis and pelvis zone detection over 12-zone measurements
//! - One parametrised generator for the Stamp, Role and SF contact product lines
//! - Ergo4 lordosis profiles and pillow configurations
//! - BMI firmness ladders (Ergomen, Topper, shoulder pad, PhysioEmd)
//! - Pressure and evacuation tables per product line
//! - TOML configuration of every generation parameter
//!
//! # Quick Start
//!
//! ```rust
//! use support_profile_core::generation::{generate_stamp_profile, ProfileRequest};
//! use support_profile_core::types::{Gender, MeasurementPosition};
//!
//! fn main() -> Result<(), support_profile_core::ProfileError> {
//!     let supine = [6, 14, 9, 7, 5, 3, 6, 9, 15, 10, 6, 3];
//!     let lateral = [8, 18, 12, 8, 4, 2, 5, 8, 16, 9, 5, 2];
//!     let request = ProfileRequest::new(MeasurementPosition::Supine, supine, lateral, Gender::Male, 180, 80);
//!
//!     let result = generate_stamp_profile(&request)?;
//!     println!("{} ({})", result.profile, result.firmness);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod elements;
pub mod error;
pub mod generation;
pub mod suggestion;
pub mod types;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ConfigLoader, Ergo4Parameters, GenerationConfig, ProfileVariant};
pub use elements::ProductLine;
pub use error::{ErrorContext, ProfileError, ProfileResult, UnknownProfileElementError};
pub use generation::{GeneratedProfile, GenerationMethod, ProfileRequest};
pub use types::{
    BodyMetrics, CustomerGender, FirmnessLevel, Gender, MeasurementPosition, ProfileElementKind, SleepPosition,
    SupportProfile,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: "Support profile generation from body-pressure measurements".to_string(),
        product_lines: ProductLine::ALL.iter().map(ToString::to_string).collect(),
    }
}

/// Library version information
#[derive(Debug, Clone)]
pub struct VersionInfo {
    /// Library name
    pub name: String,
    /// Version string
    pub version: String,
    /// Description
    pub description: String,
    /// Product lines with an element table
    pub product_lines: Vec<String>,
}
