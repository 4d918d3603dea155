//! Normal distribution utilities.

use bf_core::{Error, Result};

use crate::math::{standard_normal_cdf, LN_SQRT_2PI};

/// Log-PDF of a Normal distribution `N(mu, sigma)` at `x`.
pub fn logpdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::EngineConstruction(format!(
            "sigma must be finite and > 0, got {sigma}"
        )));
    }
    let z = (x - mu) / sigma;
    Ok(-0.5 * z * z - sigma.ln() - LN_SQRT_2PI)
}

/// PDF of `N(mu, sigma)` at `x`.
pub fn pdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(logpdf(x, mu, sigma)?.exp())
}

/// CDF of `N(mu, sigma)` at `x`. Handles infinite `x`.
pub fn cdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::EngineConstruction(format!(
            "sigma must be finite and > 0, got {sigma}"
        )));
    }
    if x == f64::NEG_INFINITY {
        return Ok(0.0);
    }
    if x == f64::INFINITY {
        return Ok(1.0);
    }
    Ok(standard_normal_cdf((x - mu) / sigma))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_at_zero() {
        assert_relative_eq!(pdf(0.0, 0.0, 1.0).unwrap(), 0.3989422804014327, epsilon = 1e-15);
    }

    #[test]
    fn test_symmetry() {
        let p1 = pdf(1.3, 0.0, 2.0).unwrap();
        let p2 = pdf(-1.3, 0.0, 2.0).unwrap();
        assert_relative_eq!(p1, p2, epsilon = 1e-14);
    }

    #[test]
    fn test_cdf_central_interval() {
        let mass = cdf(1.0, 0.0, 1.0).unwrap() - cdf(-1.0, 0.0, 1.0).unwrap();
        assert_relative_eq!(mass, 0.6826894921370859, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_infinite_bounds() {
        assert_eq!(cdf(f64::NEG_INFINITY, 1.0, 2.0).unwrap(), 0.0);
        assert_eq!(cdf(f64::INFINITY, 1.0, 2.0).unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_sigma() {
        assert!(pdf(0.0, 0.0, 0.0).is_err());
        assert!(cdf(0.0, 0.0, -1.0).is_err());
    }
}
