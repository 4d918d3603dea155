//! Beta distribution utilities.

use bf_core::{Error, Result};
use statrs::function::beta::beta_reg;

use crate::math::ln_beta;

fn validate(a: f64, b: f64) -> Result<()> {
    if !a.is_finite() || a <= 0.0 {
        return Err(Error::EngineConstruction(format!(
            "alpha must be finite and > 0, got {a}"
        )));
    }
    if !b.is_finite() || b <= 0.0 {
        return Err(Error::EngineConstruction(format!(
            "beta must be finite and > 0, got {b}"
        )));
    }
    Ok(())
}

/// PDF of a Beta(`a`, `b`) distribution at `x`.
///
/// Zero outside the `[0, 1]` support.
pub fn pdf(x: f64, a: f64, b: f64) -> Result<f64> {
    validate(a, b)?;
    if !(0.0..=1.0).contains(&x) {
        return Ok(0.0);
    }
    let ln_norm = -ln_beta(a, b);
    if x == 0.0 {
        if a < 1.0 {
            return Ok(f64::INFINITY);
        }
        if a > 1.0 {
            return Ok(0.0);
        }
        // a == 1: the x term is 0
        return Ok(ln_norm.exp());
    }
    if x == 1.0 {
        if b < 1.0 {
            return Ok(f64::INFINITY);
        }
        if b > 1.0 {
            return Ok(0.0);
        }
        return Ok(ln_norm.exp());
    }
    Ok((ln_norm + (a - 1.0) * x.ln() + (b - 1.0) * (1.0 - x).ln()).exp())
}

/// CDF of a Beta(`a`, `b`) distribution at `x` (regularized incomplete
/// beta). Clamped outside the support.
pub fn cdf(x: f64, a: f64, b: f64) -> Result<f64> {
    validate(a, b)?;
    if x <= 0.0 {
        return Ok(0.0);
    }
    if x >= 1.0 {
        return Ok(1.0);
    }
    Ok(beta_reg(a, b, x))
}
