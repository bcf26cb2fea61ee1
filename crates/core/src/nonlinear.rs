//! Scalar nonlinear transform bank for the mixing engine.
//!
//! Three real-valued transforms of increasing cost, a selector that picks a
//! transform and an input perturbation from fractional parts of the scaled
//! input, and a guard that keeps every contribution finite.
//!
//! All transcendentals go through `libm` so that every platform rounds
//! identically; the system math library must never leak into the digest.

use core::f64::consts::PI;

use crate::params::{SHRINK_FLOOR, SINGULARITY_EPS, TRANSFORM_SELECTOR_SCALE};

/// Fractional part, `x - floor(x)`.
#[inline(always)]
pub(crate) fn frac(x: f64) -> f64 {
    x - libm::floor(x)
}

pub(crate) fn medium_transform(x: f64) -> f64 {
    libm::exp(libm::sin(x) + libm::cos(x))
}

pub(crate) fn intermediate_transform(x: f64) -> f64 {
    // sin² is regular everywhere; the guard band is kept because it is part
    // of the digest definition.
    if libm::fabs(x - PI / 2.0) < SINGULARITY_EPS
        || libm::fabs(x - 3.0 * PI / 2.0) < SINGULARITY_EPS
    {
        return 0.0;
    }
    let s = libm::sin(x);
    s * s
}

pub(crate) fn high_transform(x: f64) -> f64 {
    1.0 / libm::sqrt(libm::fabs(x) + 1.0)
}

/// Select and apply one of the three transforms.
///
/// The first fractional factor picks the transform family, the second picks
/// how the input is perturbed before the transform is applied.
pub(crate) fn complex_nonlinear(x: f64) -> f64 {
    let factor_one = frac((x * TRANSFORM_SELECTOR_SCALE) / 8.0);
    let factor_two = frac((x * TRANSFORM_SELECTOR_SCALE) / 4.0);

    let transform: fn(f64) -> f64 = if factor_one < 0.33 {
        medium_transform
    } else if factor_one < 0.66 {
        intermediate_transform
    } else {
        high_transform
    };

    let input = if factor_two < 0.25 {
        x + (1.0 + factor_two)
    } else if factor_two < 0.5 {
        x - (1.0 + factor_two)
    } else if factor_two < 0.75 {
        x * (1.0 + factor_two)
    } else {
        x / (1.0 + factor_two)
    };

    transform(input)
}

/// Apply [`complex_nonlinear`], retrying with a ×0.1 input shrink while the
/// result is NaN or infinite.
///
/// Gives up with 0 once the input magnitude reaches the shrink floor. A
/// non-finite input can never become finite by scaling, so it short-circuits
/// to 0 as well. The retry count multiplies the last successful transform,
/// not a sum over attempts.
pub(crate) fn safe_transform(mut input: f64) -> f64 {
    let mut value = complex_nonlinear(input);
    let mut rounds = 1.0;
    while !value.is_finite() {
        input *= 0.1;
        if !input.is_finite() || libm::fabs(input) <= SHRINK_FLOOR {
            return 0.0;
        }
        value = complex_nonlinear(input);
        rounds += 1.0;
    }
    value * rounds
}
