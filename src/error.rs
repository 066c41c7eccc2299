// src/error.rs
//! Unified error handling for support-profile generation
//!
//! Every public entry point returns [`ProfileResult`]. Invalid input is an
//! ordinary error variant, unknown element letters carry the offending letter
//! and the element kind, and anything unexpected is caught at the entry point
//! and reported as [`ProfileError::Internal`] with its [`ErrorContext`].

use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, UnwindSafe};

use thiserror::Error;

use crate::elements::ProductLine;
use crate::types::{CustomerGender, ProfileElementKind};

/// Unified error type for all generation algorithms
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// A measurement array does not have the required number of zones
    #[error("measurement '{name}' has {actual} values, expected {expected}")]
    InvalidMeasurementLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A scalar argument is out of its valid domain
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Gender without a threshold ladder
    #[error("gender '{0}' is not supported by the generation algorithms")]
    UnsupportedGender(CustomerGender),

    /// Letter outside the alphabet of a product line
    #[error(transparent)]
    UnknownElement(#[from] UnknownProfileElementError),

    /// Unexpected failure caught at an entry point
    #[error("internal error in {context}: {message}")]
    Internal { context: ErrorContext, message: String },
}

impl ProfileError {
    /// True for errors caused by the caller's arguments
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ProfileError::InvalidMeasurementLength { .. }
                | ProfileError::InvalidInput { .. }
                | ProfileError::UnsupportedGender(_)
        )
    }
}

/// A profile letter that is not part of the product line's alphabet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} element '{letter}' for product line {product_line}")]
pub struct UnknownProfileElementError {
    pub kind: ProfileElementKind,
    pub product_line: ProductLine,
    pub letter: String,
}

/// Where an error was raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub file: Option<&'static str>,
    pub line: Option<u32>,
    pub additional_info: BTreeMap<String, String>,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            file: None,
            line: None,
            additional_info: BTreeMap::new(),
        }
    }

    /// Create error context with file and line information
    pub fn with_location(component: &str, operation: &str, file: &'static str, line: u32) -> Self {
        let mut context = Self::new(component, operation);
        context.file = Some(file);
        context.line = Some(line);
        context
    }

    /// Add additional information to the context
    pub fn add_info<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.additional_info.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.component, self.operation)?;
        if let (Some(file), Some(line)) = (self.file, self.line) {
            write!(f, " (at {}:{})", file, line)?;
        }
        Ok(())
    }
}

/// Macro for creating error context with file and line info
#[macro_export]
macro_rules! error_context {
    ($component:expr, $operation:expr) => {
        $crate::error::ErrorContext::with_location($component, $operation, file!(), line!())
    };
}

/// Result type alias for profile operations
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Run an entry point body, turning a panic into [`ProfileError::Internal`]
pub(crate) fn guarded<T, F>(context: ErrorContext, body: F) -> ProfileResult<T>
where
    F: FnOnce() -> ProfileResult<T> + UnwindSafe,
{
    match panic::catch_unwind(body) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(%context, %message, "profile generation aborted");
            Err(ProfileError::Internal { context, message })
        }
    }
}
