//! Vanilla payoff definitions.
//!
//! `PayoffType` selects call or put, both for pricing and for the
//! expiration payoffs the strategy catalog is assembled from.

use std::fmt;

/// Type of vanilla option payoff.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// assert_eq!(PayoffType::Call.evaluate(110.0, 100.0), 10.0);
/// assert_eq!(PayoffType::Put.evaluate(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Intrinsic value at expiration for underlying price `spot`.
    #[inline]
    pub fn evaluate(&self, spot: f64, strike: f64) -> f64 {
        match self {
            PayoffType::Call => (spot - strike).max(0.0),
            PayoffType::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this payoff is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PayoffType::Call)
    }

    /// Returns whether this payoff is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, PayoffType::Put)
    }

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffType::Call => "call",
            PayoffType::Put => "put",
        }
    }
}

impl fmt::Display for PayoffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
