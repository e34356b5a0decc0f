//! Price domain over which payoff curves are sampled.

use pricer_core::types::PricingError;

/// Half-width of the default domain around the strike.
pub const DOMAIN_HALF_WIDTH: f64 = 30.0;

/// Spacing between sampled prices.
pub const DOMAIN_STEP: f64 = 2.0;

/// Largest number of grid samples an explicit domain may hold.
pub const MAX_DOMAIN_SAMPLES: usize = 1_000_000;

/// Tolerance below which the upper bound counts as already sampled.
const END_TOLERANCE: f64 = 1e-9;

/// An inclusive, evenly stepped range of underlying prices.
///
/// Samples are `start + i·step` for every `i` with `start + i·step <= end`,
/// followed by `end` itself when the grid stops short of it. Every sample is
/// computed by multiplication, so the sequence is strictly increasing and
/// free of accumulated rounding.
///
/// # Examples
/// ```
/// use pricer_models::strategies::PriceDomain;
///
/// let domain = PriceDomain::around_strike(100.0);
/// assert_eq!(domain.len(), 31);
/// assert_eq!(domain.prices().next(), Some(70.0));
/// assert_eq!(domain.prices().last(), Some(130.0));
///
/// // The lower bound is clamped at zero and the exact upper bound is kept
/// let domain = PriceDomain::around_strike(25.5);
/// assert_eq!(domain.prices().next(), Some(0.0));
/// assert_eq!(domain.prices().last(), Some(55.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDomain {
    start: f64,
    end: f64,
    step: f64,
    grid_len: usize,
    includes_tail: bool,
}

impl PriceDomain {
    /// Creates a domain from explicit bounds.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if a bound is non-finite, `start < 0`,
    /// `end < start`, `step <= 0`, the grid would exceed
    /// [`MAX_DOMAIN_SAMPLES`], or `step` is too fine to keep samples distinct
    /// at `end`.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, PricingError> {
        if !start.is_finite() || start < 0.0 {
            return Err(PricingError::invalid(
                "domain_start",
                start,
                "must be finite and non-negative",
            ));
        }
        if !end.is_finite() || end < start {
            return Err(PricingError::invalid(
                "domain_end",
                end,
                "must be finite and not below the start",
            ));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(PricingError::invalid("domain_step", step, "must be positive"));
        }
        if (end - start) / step >= MAX_DOMAIN_SAMPLES as f64 {
            return Err(PricingError::invalid(
                "domain_step",
                step,
                "yields more than MAX_DOMAIN_SAMPLES samples",
            ));
        }
        if step < 4.0 * f64::EPSILON * end {
            return Err(PricingError::invalid(
                "domain_step",
                step,
                "below the price resolution at the domain end",
            ));
        }
        Ok(Self::build(start, end, step))
    }

    /// The default domain `[max(0, K - 30), K + 30]` stepped by 2.
    ///
    /// Samples stay distinct for any strike up to
    /// [`MAX_STRIKE`](pricer_core::types::MAX_STRIKE), the cap enforced by
    /// `OptionParameters`.
    pub fn around_strike(strike: f64) -> Self {
        let start = (strike - DOMAIN_HALF_WIDTH).max(0.0);
        let end = strike + DOMAIN_HALF_WIDTH;
        Self::build(start, end, DOMAIN_STEP)
    }

    fn build(start: f64, end: f64, step: f64) -> Self {
        let intervals = ((end - start) / step).floor();
        let grid_len = (intervals as usize).saturating_add(1);
        let last = (start + intervals * step).min(end);
        Self {
            start,
            end,
            step,
            grid_len,
            includes_tail: end - last > END_TOLERANCE * end.abs().max(1.0),
        }
    }

    /// Lowest sampled price.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Highest sampled price.
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Grid spacing.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of sampled prices.
    #[inline]
    pub fn len(&self) -> usize {
        self.grid_len + usize::from(self.includes_tail)
    }

    /// Always false: a domain holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the sampled prices in ascending order.
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        let last = self.len() - 1;
        (0..=last).map(move |i| {
            if i == last {
                self.end
            } else {
                (self.start + i as f64 * self.step).min(self.end)
            }
        })
    }
}
