//! Standard normal distribution approximation.
//!
//! This module provides `norm_cdf_approx`, a closed-form approximation of the
//! standard normal CDF:
//!
//! Φ(x) ≈ ½ · (1 + sign(x) · √(1 - exp(-2x²/π)))
//!
//! This is NOT the exact Gaussian CDF. Its maximum absolute error is roughly
//! 3e-3 (around |x| ≈ 2) and every price produced by the engine is calibrated
//! against it, so it must not be swapped for an exact erf.

use num_traits::Float;

/// Sign with `sign(0) = 0`.
#[inline]
fn sign<T: Float>(x: T) -> T {
    let zero = T::zero();
    if x > zero {
        T::one()
    } else if x < zero {
        -T::one()
    } else {
        zero
    }
}

/// Approximate standard normal cumulative distribution function.
///
/// # Mathematical Definition
/// Φ(x) ≈ ½ · (1 + sign(x) · √(1 - exp(-2x²/π)))
///
/// # Arguments
/// * `x` - Input value (any finite real)
///
/// # Returns
/// An approximation of P(X <= x) for standard normal X, in range [0, 1].
///
/// # Accuracy
/// Absolute error below 3.5e-3 for all finite x; exact at x = 0.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf_approx;
///
/// assert_eq!(norm_cdf_approx(0.0_f64), 0.5);
/// assert!((norm_cdf_approx(1.0_f64) - 0.841_344_7).abs() < 3.5e-3);
/// assert!(norm_cdf_approx(-6.0_f64) < 1e-6);
/// ```
#[inline]
pub fn norm_cdf_approx<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap_or_else(T::zero);
    let two = T::one() + T::one();
    let pi = T::from(std::f64::consts::PI).unwrap_or_else(T::one);

    let tail = (-two * x * x / pi).exp();
    half * (T::one() + sign(x) * (T::one() - tail).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // Reference values of the exact standard normal CDF.
    const EXACT: [(f64, f64); 6] = [
        (0.5, 0.691_462_461),
        (1.0, 0.841_344_746),
        (1.5, 0.933_192_799),
        (2.0, 0.977_249_868),
        (2.5, 0.993_790_335),
        (3.0, 0.998_650_102),
    ];

    #[test]
    fn test_cdf_at_zero_is_half() {
        assert_eq!(norm_cdf_approx(0.0_f64), 0.5);
        assert_eq!(norm_cdf_approx(-0.0_f64), 0.5);
    }

    #[test]
    fn test_cdf_matches_closed_form() {
        let x = 1.0_f64;
        let expected =
            0.5 * (1.0 + (1.0 - (-2.0 * x * x / std::f64::consts::PI).exp()).sqrt());
        assert_eq!(norm_cdf_approx(x), expected);
        assert_abs_diff_eq!(norm_cdf_approx(1.0_f64), 0.843_119, epsilon = 1e-6);
    }

    #[test]
    fn test_cdf_error_is_bounded() {
        for (x, exact) in EXACT {
            assert_abs_diff_eq!(norm_cdf_approx(x), exact, epsilon = 3.5e-3);
            assert_abs_diff_eq!(norm_cdf_approx(-x), 1.0 - exact, epsilon = 3.5e-3);
        }
    }

    #[test]
    fn test_cdf_is_not_exact() {
        // Deliberately an approximation: differs from Φ(2) by more than 1e-3.
        assert!((norm_cdf_approx(2.0_f64) - 0.977_249_868).abs() > 1e-3);
    }

    #[test]
    fn test_cdf_tails() {
        assert_abs_diff_eq!(norm_cdf_approx(10.0_f64), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_cdf_approx(-10.0_f64), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_f32() {
        assert_eq!(norm_cdf_approx(0.0_f32), 0.5);
        assert!((norm_cdf_approx(1.0_f32) - 0.843_119).abs() < 1e-5);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_cdf_in_unit_interval(x in -50.0_f64..50.0) {
                let p = norm_cdf_approx(x);
                prop_assert!((0.0..=1.0).contains(&p));
            }

            #[test]
            fn test_cdf_symmetry(x in -10.0_f64..10.0) {
                let sum = norm_cdf_approx(x) + norm_cdf_approx(-x);
                prop_assert!((sum - 1.0).abs() < 1e-12);
            }

            #[test]
            fn test_cdf_monotone(a in -10.0_f64..10.0, delta in 0.0_f64..5.0) {
                prop_assert!(norm_cdf_approx(a + delta) >= norm_cdf_approx(a) - 1e-15);
            }
        }
    }
}
