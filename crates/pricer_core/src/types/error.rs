//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The error taxonomy shared by every engine entry point

use thiserror::Error;

/// Categorised engine errors.
///
/// Each error is scoped to a single evaluation call; no variant is fatal
/// and none leaves shared state behind.
///
/// # Variants
/// - `InvalidParameter`: A precondition on the inputs was violated
/// - `UnknownStrategy`: The requested strategy id is not in the catalog
/// - `UnknownPreset`: The requested preset id is not in the preset table
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid("spot", -1.0, "must be positive");
/// assert_eq!(format!("{}", err), "Invalid parameter spot = -1: must be positive");
///
/// let err = PricingError::UnknownStrategy("wheel".to_string());
/// assert_eq!(format!("{}", err), "Unknown strategy: wheel");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A parameter violated its precondition.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
        /// Violated constraint
        reason: &'static str,
    },

    /// Strategy id not present in the catalog.
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Preset id not present in the preset table.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidParameter`].
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Returns true for [`PricingError::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns true for [`PricingError::UnknownStrategy`].
    pub fn is_unknown_strategy(&self) -> bool {
        matches!(self, Self::UnknownStrategy(_))
    }

    /// Returns true for [`PricingError::UnknownPreset`].
    pub fn is_unknown_preset(&self) -> bool {
        matches!(self, Self::UnknownPreset(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::invalid("days_to_expiry", 0.0, "must be at least 1");
        assert_eq!(
            format!("{}", err),
            "Invalid parameter days_to_expiry = 0: must be at least 1"
        );
    }

    #[test]
    fn test_unknown_strategy_display() {
        let err = PricingError::UnknownStrategy("unknown-id".to_string());
        assert_eq!(format!("{}", err), "Unknown strategy: unknown-id");
    }

    #[test]
    fn test_predicates() {
        assert!(PricingError::invalid("spot", 0.0, "must be positive").is_invalid_parameter());
        assert!(!PricingError::invalid("spot", 0.0, "must be positive").is_unknown_strategy());
        assert!(PricingError::UnknownStrategy("x".into()).is_unknown_strategy());
        assert!(PricingError::UnknownPreset("x".into()).is_unknown_preset());
        assert!(!PricingError::UnknownPreset("x".into()).is_unknown_strategy());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::UnknownStrategy("x".into());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::invalid("strike", -5.0, "must be positive");
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
