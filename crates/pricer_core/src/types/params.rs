//! Market parameter set consumed by every engine computation.
//!
//! `OptionParameters` is an immutable value object: changing a field yields
//! a new, re-validated value rather than patching the old one.

use super::error::PricingError;

/// Days per year used to convert `days_to_expiry` into a year fraction.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Largest accepted strike. Payoff curves are sampled in fixed price steps
/// around the strike, and those steps must stay distinct in `f64`.
pub const MAX_STRIKE: f64 = 1e12;

/// Validated parameters for a single evaluation.
///
/// Percent-denominated fields (`implied_volatility`, `risk_free_rate`,
/// `dividend_yield`) are stored as entered, e.g. `25.0` for 25%; use
/// [`volatility`](Self::volatility), [`rate`](Self::rate) and
/// [`dividend`](Self::dividend) for the fractional forms.
///
/// # Invariants
/// - every numeric field is finite
/// - `spot > 0`, `0 < strike <= MAX_STRIKE`, `premium >= 0`, `implied_volatility >= 0`
/// - `days_to_expiry >= 1`
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
///
/// let params = OptionParameters::new(100.0, 95.0, 2.0, 30, 25.0, 5.0, 2.0).unwrap();
/// assert_eq!(params.volatility(), 0.25);
/// assert!((params.years_to_expiry() - 30.0 / 365.0).abs() < 1e-15);
///
/// // Expired contracts are rejected
/// assert!(OptionParameters::new(100.0, 95.0, 2.0, 0, 25.0, 5.0, 2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOptionParameters"))]
pub struct OptionParameters {
    spot: f64,
    strike: f64,
    premium: f64,
    days_to_expiry: u32,
    implied_volatility: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
}

/// Unvalidated wire form; deserialisation goes through `OptionParameters::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawOptionParameters {
    spot: f64,
    strike: f64,
    premium: f64,
    days_to_expiry: u32,
    implied_volatility: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawOptionParameters> for OptionParameters {
    type Error = PricingError;

    fn try_from(raw: RawOptionParameters) -> Result<Self, Self::Error> {
        Self::new(
            raw.spot,
            raw.strike,
            raw.premium,
            raw.days_to_expiry,
            raw.implied_volatility,
            raw.risk_free_rate,
            raw.dividend_yield,
        )
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(name, value, "must be finite"))
    }
}

impl OptionParameters {
    /// Creates a validated parameter set.
    ///
    /// # Arguments
    /// * `spot` - Underlying price S (> 0)
    /// * `strike` - Strike K (> 0, <= [`MAX_STRIKE`])
    /// * `premium` - Net premium paid/received (>= 0)
    /// * `days_to_expiry` - Whole days remaining (>= 1)
    /// * `implied_volatility` - Annualised IV in percent (>= 0)
    /// * `risk_free_rate` - Annualised rate in percent
    /// * `dividend_yield` - Annualised yield in percent
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first violated field.
    pub fn new(
        spot: f64,
        strike: f64,
        premium: f64,
        days_to_expiry: u32,
        implied_volatility: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
    ) -> Result<Self, PricingError> {
        require_finite("spot", spot)?;
        require_finite("strike", strike)?;
        require_finite("premium", premium)?;
        require_finite("implied_volatility", implied_volatility)?;
        require_finite("risk_free_rate", risk_free_rate)?;
        require_finite("dividend_yield", dividend_yield)?;

        if spot <= 0.0 {
            return Err(PricingError::invalid("spot", spot, "must be positive"));
        }
        if strike <= 0.0 {
            return Err(PricingError::invalid("strike", strike, "must be positive"));
        }
        if strike > MAX_STRIKE {
            return Err(PricingError::invalid("strike", strike, "must not exceed 1e12"));
        }
        if premium < 0.0 {
            return Err(PricingError::invalid("premium", premium, "must be non-negative"));
        }
        if days_to_expiry < 1 {
            return Err(PricingError::invalid(
                "days_to_expiry",
                f64::from(days_to_expiry),
                "must be at least 1",
            ));
        }
        if implied_volatility < 0.0 {
            return Err(PricingError::invalid(
                "implied_volatility",
                implied_volatility,
                "must be non-negative",
            ));
        }

        Ok(Self {
            spot,
            strike,
            premium,
            days_to_expiry,
            implied_volatility,
            risk_free_rate,
            dividend_yield,
        })
    }

    /// Returns the underlying spot price S.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the net premium.
    #[inline]
    pub fn premium(&self) -> f64 {
        self.premium
    }

    /// Returns whole days to expiry.
    #[inline]
    pub fn days_to_expiry(&self) -> u32 {
        self.days_to_expiry
    }

    /// Returns implied volatility in percent.
    #[inline]
    pub fn implied_volatility(&self) -> f64 {
        self.implied_volatility
    }

    /// Returns the risk-free rate in percent.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the dividend yield in percent.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Time to expiry in years: `days_to_expiry / 365`.
    #[inline]
    pub fn years_to_expiry(&self) -> f64 {
        f64::from(self.days_to_expiry) / DAYS_PER_YEAR
    }

    /// Implied volatility as a fraction (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.implied_volatility / 100.0
    }

    /// Risk-free rate as a fraction (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.risk_free_rate / 100.0
    }

    /// Dividend yield as a fraction (q).
    #[inline]
    pub fn dividend(&self) -> f64 {
        self.dividend_yield / 100.0
    }

    /// Moneyness S/K.
    #[inline]
    pub fn moneyness(&self) -> f64 {
        self.spot / self.strike
    }

    /// Returns a copy with a new spot price.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self { spot, ..*self }.revalidate()
    }

    /// Returns a copy with a new strike.
    pub fn with_strike(&self, strike: f64) -> Result<Self, PricingError> {
        Self { strike, ..*self }.revalidate()
    }

    /// Returns a copy with a new premium.
    pub fn with_premium(&self, premium: f64) -> Result<Self, PricingError> {
        Self { premium, ..*self }.revalidate()
    }

    /// Returns a copy with new days to expiry.
    pub fn with_days_to_expiry(&self, days_to_expiry: u32) -> Result<Self, PricingError> {
        Self {
            days_to_expiry,
            ..*self
        }
        .revalidate()
    }

    /// Returns a copy with a new implied volatility (percent).
    pub fn with_implied_volatility(&self, implied_volatility: f64) -> Result<Self, PricingError> {
        Self {
            implied_volatility,
            ..*self
        }
        .revalidate()
    }

    /// Returns a copy with a new risk-free rate (percent).
    pub fn with_risk_free_rate(&self, risk_free_rate: f64) -> Result<Self, PricingError> {
        Self {
            risk_free_rate,
            ..*self
        }
        .revalidate()
    }

    /// Returns a copy with a new dividend yield (percent).
    pub fn with_dividend_yield(&self, dividend_yield: f64) -> Result<Self, PricingError> {
        Self {
            dividend_yield,
            ..*self
        }
        .revalidate()
    }

    fn revalidate(self) -> Result<Self, PricingError> {
        Self::new(
            self.spot,
            self.strike,
            self.premium,
            self.days_to_expiry,
            self.implied_volatility,
            self.risk_free_rate,
            self.dividend_yield,
        )
    }
}
