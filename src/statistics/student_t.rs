//! Student's t distribution: CDF, quantile, and two-sided critical values.
//!
//! The CDF is expressed through the regularized incomplete beta function,
//! evaluated with the standard continued fraction (modified Lentz). The
//! quantile inverts the CDF by bracketed bisection, which is plenty for a
//! function evaluated once per filter invocation.

use libm::lgamma;

/// Iteration cap for the continued fraction. Convergence needs roughly
/// sqrt(a) terms, so this covers degrees of freedom into the millions.
const CF_MAX_ITERATIONS: usize = 2_000;

/// Iteration cap for the quantile bisection loop.
const BISECTION_MAX_ITERATIONS: usize = 200;

/// Convergence threshold for the continued fraction.
const CF_EPSILON: f64 = 1e-14;

/// Guard against division by a vanishing denominator in Lentz's method.
const FPMIN: f64 = 1e-300;

/// CDF of the Student's t distribution with `df` degrees of freedom.
///
/// Uses the identity `P(T <= t) = 1 − ½ I_x(df/2, 1/2)` with
/// `x = df / (df + t²)` for `t >= 0`, mirrored by symmetry below zero.
///
/// # Panics
///
/// Panics if `df` is not strictly positive.
pub fn student_t_cdf(t: f64, df: f64) -> f64 {
    assert!(df > 0.0, "degrees of freedom must be positive, got {}", df);

    let x = df / (df + t * t);
    let tail = 0.5 * regularized_incomplete_beta(0.5 * df, 0.5, x);

    if t >= 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// Quantile (inverse CDF) of the Student's t distribution.
///
/// Solves `student_t_cdf(t, df) = p` by bisection: the upper half is
/// bracketed by doubling, then halved to floating-point resolution. The
/// lower half follows from symmetry.
///
/// # Panics
///
/// Panics if `p` is outside the open interval (0, 1) or `df` is not
/// strictly positive.
pub fn student_t_quantile(p: f64, df: f64) -> f64 {
    assert!(
        p > 0.0 && p < 1.0,
        "cumulative probability must be in (0, 1), got {}",
        p
    );
    assert!(df > 0.0, "degrees of freedom must be positive, got {}", df);

    if p == 0.5 {
        return 0.0;
    }
    if p < 0.5 {
        return -student_t_quantile(1.0 - p, df);
    }

    // Bracket the root: the quantile is finite for p < 1, so doubling
    // terminates quickly (df=1 at p=0.9999 is still below 4000).
    let mut hi = 1.0;
    while student_t_cdf(hi, df) < p && hi < 1e300 {
        hi *= 2.0;
    }

    let mut lo = 0.0;
    for _ in 0..BISECTION_MAX_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if student_t_cdf(mid, df) < p {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo <= 1e-12 * hi.max(1.0) {
            break;
        }
    }

    0.5 * (lo + hi)
}

/// Two-sided critical value at the given confidence level.
///
/// For confidence 0.95 this is the t-value at cumulative probability
/// 0.975; the matching lower-tail value at 0.025 is its negation.
pub fn two_sided_critical_value(confidence: f64, df: f64) -> f64 {
    student_t_quantile(0.5 * (1.0 + confidence), df)
}

/// Regularized incomplete beta function I_x(a, b).
///
/// Continued-fraction evaluation, switching to the symmetric expansion
/// `I_x(a, b) = 1 − I_{1−x}(b, a)` when x is past the convergence pivot
/// (a+1)/(a+b+2).
fn regularized_incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let ln_front =
        lgamma(a + b) - lgamma(a) - lgamma(b) + a * x.ln() + b * (1.0 - x).ln();
    let front = ln_front.exp();

    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - front * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Continued fraction for the incomplete beta function (modified Lentz).
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < FPMIN {
        d = FPMIN;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=CF_MAX_ITERATIONS {
        let m = m as f64;
        let m2 = 2.0 * m;

        // Even step.
        let numerator = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 + numerator * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + numerator / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        h *= d * c;

        // Odd step.
        let numerator = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 + numerator * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + numerator / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;

        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < CF_EPSILON {
            break;
        }
    }

    h
}
