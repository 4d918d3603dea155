//! Noncentral Student-t density.
//!
//! Uses the Johnson–Kotz series
//! `f(x; ν, δ) = C · Σ_j Γ((ν+j+1)/2) q^j / j!` with
//! `q = δ·x·sqrt(2/(ν+x²))`, split into its even and odd sub-series. Each
//! sub-series has constant-sign terms and is accumulated in log space, so
//! large noncentralities neither overflow nor underflow; the alternating
//! case (`q < 0`) is a single subtraction of two accurately-summed halves.

use bf_core::{Error, Result};
use statrs::function::gamma::ln_gamma;

use crate::math::{logaddexp, LN_PI};

/// Terms this far below the running log-sum no longer move it.
const LN_TAIL: f64 = 60.0;

/// Hard cap on series length; the series converges long before this for
/// any finite `q`.
const MAX_TERMS: usize = 20_000;

/// PDF of the noncentral t distribution with `df` degrees of freedom and
/// noncentrality `ncp`, evaluated at `x`.
pub fn pdf(x: f64, df: f64, ncp: f64) -> Result<f64> {
    if !df.is_finite() || df <= 0.0 {
        return Err(Error::EngineConstruction(format!(
            "df must be finite and > 0, got {df}"
        )));
    }
    if !ncp.is_finite() {
        return Err(Error::EngineConstruction(format!(
            "ncp must be finite, got {ncp}"
        )));
    }
    if !x.is_finite() {
        return Ok(0.0);
    }

    let v = df;
    let ln_c = -0.5 * ncp * ncp + 0.5 * v * v.ln() - 0.5 * LN_PI - ln_gamma(0.5 * v)
        - 0.5 * (v + 1.0) * (v + x * x).ln();
    let q = ncp * x * (2.0 / (v + x * x)).sqrt();

    if q == 0.0 {
        // central distribution, or evaluation on the axis of symmetry:
        // only the j = 0 term survives
        return Ok((ln_c + ln_gamma(0.5 * (v + 1.0))).exp());
    }

    let ln_q2 = 2.0 * q.abs().ln();

    // even-index terms, j = 2k (all positive)
    let mut ln_even = f64::NEG_INFINITY;
    let mut ln_t = ln_gamma(0.5 * (v + 1.0));
    for k in 0..MAX_TERMS {
        ln_even = logaddexp(ln_even, ln_t);
        if ln_t < ln_even - LN_TAIL {
            break;
        }
        let kf = k as f64;
        ln_t += ln_q2 + (0.5 * (v + 2.0 * kf + 1.0)).ln()
            - ((2.0 * kf + 1.0) * (2.0 * kf + 2.0)).ln();
    }

    // odd-index terms, j = 2k+1 (sign of q)
    let mut ln_odd = f64::NEG_INFINITY;
    let mut ln_t = ln_gamma(0.5 * (v + 2.0)) + q.abs().ln();
    for k in 0..MAX_TERMS {
        ln_odd = logaddexp(ln_odd, ln_t);
        if ln_t < ln_odd - LN_TAIL {
            break;
        }
        let kf = k as f64;
        ln_t += ln_q2 + (0.5 * (v + 2.0 * kf + 2.0)).ln()
            - ((2.0 * kf + 2.0) * (2.0 * kf + 3.0)).ln();
    }

    if q > 0.0 {
        return Ok((ln_c + logaddexp(ln_even, ln_odd)).exp());
    }

    // alternating series: even minus odd. Cancellation only bites in the
    // far tail where the true value is below f64 resolution; clamp to 0.
    if ln_odd >= ln_even {
        return Ok(0.0);
    }
    Ok((ln_c + ln_even).exp() * (1.0 - (ln_odd - ln_even).exp()))
}
