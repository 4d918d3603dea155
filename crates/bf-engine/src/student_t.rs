//! Central Student-t distribution utilities (location-scale form).

use bf_core::{Error, Result};
use statrs::function::beta::beta_reg;
use statrs::function::gamma::ln_gamma;

use crate::math::LN_PI;

fn validate(sigma: f64, nu: f64) -> Result<()> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::EngineConstruction(format!(
            "sigma must be finite and > 0, got {sigma}"
        )));
    }
    if !nu.is_finite() || nu <= 0.0 {
        return Err(Error::EngineConstruction(format!(
            "nu must be finite and > 0, got {nu}"
        )));
    }
    Ok(())
}

/// Log-PDF of a Student-t distribution at `x` with location `mu`, scale
/// `sigma`, and degrees of freedom `nu`.
pub fn logpdf(x: f64, mu: f64, sigma: f64, nu: f64) -> Result<f64> {
    validate(sigma, nu)?;
    let z = (x - mu) / sigma;
    let a = ln_gamma(0.5 * (nu + 1.0)) - ln_gamma(0.5 * nu);
    let b = -0.5 * (nu.ln() + LN_PI);
    let c = -sigma.ln();
    let d = -0.5 * (nu + 1.0) * (z * z / nu).ln_1p();
    Ok(a + b + c + d)
}

/// PDF of a Student-t distribution at `x`.
pub fn pdf(x: f64, mu: f64, sigma: f64, nu: f64) -> Result<f64> {
    Ok(logpdf(x, mu, sigma, nu)?.exp())
}

/// CDF of a Student-t distribution at `x`, via the regularized incomplete
/// beta function. Handles infinite `x`.
pub fn cdf(x: f64, mu: f64, sigma: f64, nu: f64) -> Result<f64> {
    validate(sigma, nu)?;
    if x == f64::NEG_INFINITY {
        return Ok(0.0);
    }
    if x == f64::INFINITY {
        return Ok(1.0);
    }
    let z = (x - mu) / sigma;
    let w = nu / (nu + z * z);
    let ib = beta_reg(0.5 * nu, 0.5, w);
    Ok(if z > 0.0 { 1.0 - 0.5 * ib } else { 0.5 * ib })
}
