// src/config/constants.rs
//! Shared generation and product constants

/// Profile and measurement lengths
pub mod profile {
    /// Zones of a full pressure measurement and of a mattress profile
    pub const ZONE_COUNT: usize = 12;
    pub const LAST_ZONE_INDEX: usize = ZONE_COUNT - 1;

    /// Zones of the Ergo4 lordosis window
    pub const ERGO4_ZONE_COUNT: usize = 4;
    /// First full-measurement index of the Ergo4 window
    pub const ERGO4_WINDOW_START: usize = 4;
}

/// Zone detection constants
pub mod zones {
    /// Shoulder peak is searched in `0..=SHOULDER_LAST_INDEX`
    pub const SHOULDER_LAST_INDEX: usize = 3;
    /// Readings this close at zones 0 and 1 are treated as one wide shoulder
    pub const SHOULDER_SPREAD_TOLERANCE_MBAR: u32 = 2;

    /// Lordosis never lands before this zone
    pub const LORDOSIS_MIN_INDEX: usize = 4;

    /// Persons below this height cannot have their pelvis in the last zone
    pub const FULL_LENGTH_HEIGHT_CM: u32 = 190;
}

/// Element table constants
pub mod elements {
    /// Elements at or above this pressure are inflated, below are drained
    pub const POSITIVE_PRESSURE_THRESHOLD_MBAR: u32 = 10;
}

/// Default profile letters
pub mod letters {
    pub const NEUTRAL_VITARIO: char = 'S';
    pub const NEUTRAL_ERGONOMETER_NL: char = 'D';
    pub const SHOULDER: char = 'T';
    pub const PELVIS: char = 'K';
    pub const LORDOSIS_FIRM: char = 'B';
    pub const LORDOSIS_MEDIUM: char = 'L';

    pub const ERGO4_NEUTRAL: char = 'M';
    pub const ERGO4_MEDIUM: char = 'L';
    pub const ERGO4_FIRM: char = 'F';
}

/// Pillow pressure thresholds at the shoulder zone
pub mod pillow {
    pub const FEMALE_THIN_BELOW_MBAR: u32 = 8;
    pub const FEMALE_THICK_BELOW_MBAR: u32 = 14;
    pub const MALE_THIN_BELOW_MBAR: u32 = 7;
    pub const MALE_THICK_BELOW_MBAR: u32 = 13;
}

/// Configuration file locations
pub mod paths {
    pub const SYSTEM_CONFIG_PATH: &str = "/etc/support-profile/config.toml";
    pub const USER_CONFIG_DIR: &str = ".config/support-profile";
    pub const LOCAL_CONFIG_FILE: &str = "support-profile.toml";
    pub const DEFAULT_CONFIG_FILE: &str = "config/support-profile.toml";

    /// Prefix of environment overrides; `__` separates path segments,
    /// e.g. `SUPPORT_PROFILE_STAMP__NEUTRAL_LETTER`
    pub const ENV_PREFIX: &str = "SUPPORT_PROFILE_";
    pub const ENV_PATH_SEPARATOR: &str = "__";
}
