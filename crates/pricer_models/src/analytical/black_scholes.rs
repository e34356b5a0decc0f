//! Black-Scholes pricing model for European options.
//!
//! Standard Black-Scholes form evaluated on the fast normal CDF
//! approximation from `pricer_core::math::distributions`.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Known Simplifications
//!
//! - N is the closed-form approximation, not the exact Gaussian CDF.
//! - Dividend yield is carried by `OptionParameters` but not used here.
//! - Zero volatility or zero expiry is rejected rather than floored.

use num_traits::Float;
use pricer_core::math::distributions::norm_cdf_approx;
use pricer_core::types::{OptionParameters, PricingError};
use tracing::trace;

use super::error::AnalyticalError;
use crate::instruments::PayoffType;

/// Call and put fair values for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricedOption {
    /// Call fair value
    pub call_price: f64,
    /// Put fair value
    pub put_price: f64,
}

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0).unwrap();
/// let put_price = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity survives the CDF approximation (it is symmetric)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate as a fraction (annualised)
    /// * `volatility` - Volatility as a fraction (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or non-finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or non-finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !(spot > zero) || !spot.is_finite() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !(volatility > zero) || !volatility.is_finite() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    fn check_contract(strike: T, expiry: T) -> Result<(), AnalyticalError> {
        let zero = T::zero();
        if !(strike > zero) || !strike.is_finite() {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !(expiry > zero) || !expiry.is_finite() {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Computes d₁ and d₂.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T), d₂ = d₁ - σ√T
    ///
    /// # Errors
    /// `InvalidStrike` / `InvalidExpiry` for non-positive contract terms.
    pub fn d1_d2(&self, strike: T, expiry: T) -> Result<(T, T), AnalyticalError> {
        Self::check_contract(strike, expiry)?;

        let half = T::from(0.5).unwrap_or_else(T::zero);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        Ok((d1, d1 - vol_sqrt_t))
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂), floored at zero.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert!(bs.price_call(100.0, 1.0).unwrap() > 0.0);
    /// assert!(bs.price_call(100.0, 0.0).is_err());
    /// ```
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        let (d1, d2) = self.d1_d2(strike, expiry)?;
        let discount = (-self.rate * expiry).exp();

        let value = self.spot * norm_cdf_approx(d1) - strike * discount * norm_cdf_approx(d2);
        Ok(value.max(T::zero()))
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁), floored at zero.
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        let (d1, d2) = self.d1_d2(strike, expiry)?;
        let discount = (-self.rate * expiry).exp();

        let value = strike * discount * norm_cdf_approx(-d2) - self.spot * norm_cdf_approx(-d1);
        Ok(value.max(T::zero()))
    }

    /// Prices either kind.
    pub fn price(&self, strike: T, expiry: T, kind: PayoffType) -> Result<T, AnalyticalError> {
        match kind {
            PayoffType::Call => self.price_call(strike, expiry),
            PayoffType::Put => self.price_put(strike, expiry),
        }
    }
}

impl BlackScholes<f64> {
    /// Builds the model from a parameter set (σ = IV/100, r = rate/100).
    pub fn from_params(params: &OptionParameters) -> Result<Self, AnalyticalError> {
        Self::new(params.spot(), params.rate(), params.volatility())
    }
}

/// Prices the call and put described by `params`.
///
/// Time to expiry is `days_to_expiry / 365`; the dividend yield is ignored.
///
/// # Errors
/// `PricingError::InvalidParameter` when implied volatility is zero.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
/// use pricer_models::analytical::price_option;
///
/// let params = OptionParameters::new(100.0, 100.0, 5.0, 30, 25.0, 5.0, 2.0).unwrap();
/// let priced = price_option(&params).unwrap();
/// assert!(priced.call_price > priced.put_price);
/// ```
pub fn price_option(params: &OptionParameters) -> Result<PricedOption, PricingError> {
    let model = BlackScholes::from_params(params)?;
    let expiry = params.years_to_expiry();

    let priced = PricedOption {
        call_price: model.price_call(params.strike(), expiry)?,
        put_price: model.price_put(params.strike(), expiry)?,
    };
    trace!(
        spot = params.spot(),
        strike = params.strike(),
        expiry,
        call = priced.call_price,
        put = priced.put_price,
        "priced option"
    );
    Ok(priced)
}
