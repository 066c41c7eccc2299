// src/generation/pillow.rs
//! Pillow configuration
//!
//! A pillow is described by three digits: base module, inserts and wedge.
//! Only lateral sleepers need a measurement; the pressure at their shoulder
//! zone decides how much the pillow has to be built up.

use serde::{Deserialize, Serialize};

use crate::config::constants::{pillow, profile::ZONE_COUNT};
use crate::error::{guarded, ProfileError, ProfileResult};
use crate::error_context;
use crate::generation::zones;
use crate::suggestion::classify;
use crate::types::{Gender, SleepPosition};
use crate::utils::measurement_array;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BaseModule {
    WithRole = 0,
    NoRole = 1,
    SplitRole = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum InsertVariant {
    None = 0,
    Thick = 1,
    Thin = 2,
    Both = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WedgeVariant {
    None = 0,
    ThickTowardsFootEnd = 1,
    ThickTowardsHeadEnd = 2,
}

/// Complete pillow build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillowConfiguration {
    pub base_module: BaseModule,
    pub inserts: InsertVariant,
    pub wedge: WedgeVariant,
    /// Shoulder zone and its reading, lateral sleepers only
    pub shoulder_index: Option<usize>,
    pub shoulder_pressure_mbar: Option<u32>,
}

impl PillowConfiguration {
    fn fixed(base_module: BaseModule, inserts: InsertVariant, wedge: WedgeVariant) -> Self {
        Self {
            base_module,
            inserts,
            wedge,
            shoulder_index: None,
            shoulder_pressure_mbar: None,
        }
    }

    /// Three-digit code, e.g. `"212"`
    pub fn code(&self) -> String {
        format!("{}{}{}", self.base_module as u8, self.inserts as u8, self.wedge as u8)
    }
}

/// Configure a pillow for a sleep position
///
/// `lateral` is only read for lateral sleepers and must then hold 12 zones.
pub fn generate_pillow_profile(
    position: SleepPosition,
    gender: Gender,
    lateral: Option<&[u32]>,
) -> ProfileResult<PillowConfiguration> {
    guarded(error_context!("pillow", "generate_profile"), || {
        let configuration = match position {
            SleepPosition::Prone => {
                PillowConfiguration::fixed(BaseModule::WithRole, InsertVariant::None, WedgeVariant::None)
            }
            SleepPosition::Supine => {
                let wedge = match gender {
                    Gender::Male => WedgeVariant::ThickTowardsFootEnd,
                    Gender::Female => WedgeVariant::None,
                };
                PillowConfiguration::fixed(BaseModule::WithRole, InsertVariant::Thin, wedge)
            }
            SleepPosition::Lateral => {
                let values = lateral.ok_or_else(|| ProfileError::InvalidInput {
                    field: "lateral",
                    reason: "lateral sleepers need a lateral measurement".to_string(),
                })?;
                lateral_configuration(gender, values)?
            }
        };

        tracing::debug!(?position, ?gender, code = %configuration.code(), "configured pillow");
        Ok(configuration)
    })
}

fn lateral_configuration(gender: Gender, values: &[u32]) -> ProfileResult<PillowConfiguration> {
    let values: [u32; ZONE_COUNT] = measurement_array("lateral", values)?;
    let shoulder_index = zones::locate_shoulder(&values);
    let pressure = values[shoulder_index];

    let breakpoints = match gender {
        Gender::Male => [pillow::MALE_THIN_BELOW_MBAR, pillow::MALE_THICK_BELOW_MBAR],
        Gender::Female => [pillow::FEMALE_THIN_BELOW_MBAR, pillow::FEMALE_THICK_BELOW_MBAR],
    }
    .map(f64::from);
    let outcomes = [
        (InsertVariant::Thin, WedgeVariant::None),
        (InsertVariant::Thick, WedgeVariant::ThickTowardsHeadEnd),
        (InsertVariant::Both, WedgeVariant::ThickTowardsHeadEnd),
    ];
    let (inserts, wedge) =
        classify(&breakpoints, &outcomes, f64::from(pressure)).unwrap_or((InsertVariant::Both, WedgeVariant::ThickTowardsHeadEnd));

    Ok(PillowConfiguration {
        base_module: BaseModule::SplitRole,
        inserts,
        wedge,
        shoulder_index: Some(shoulder_index),
        shoulder_pressure_mbar: Some(pressure),
    })
}
