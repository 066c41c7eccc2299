//! Common utility functions for profile generation
//!
//! This module provides the leaf helpers the generation algorithms are built on:
//! - Index-of-min/max scans and neighbour comparisons over pressure readings
//! - Run-length shortening and single-letter replacement for profile strings
//! - Measurement length validation

pub mod arrays;
pub mod text;
pub mod validation;

// Re-export commonly used functions for convenience
pub use arrays::{
    index_of_maximum,
    index_of_minimum,
    is_in_range,
    is_value_distinct,
    is_left_side_equal,
    is_right_side_equal,
};

pub use text::{
    shorten_profile,
    replace_at_index,
};

pub use validation::{
    validate_measurement,
    measurement_array,
};
