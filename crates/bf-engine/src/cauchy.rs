//! Cauchy distribution utilities.

use bf_core::{Error, Result};

/// PDF of a Cauchy distribution with `location` and `scale` at `x`.
pub fn pdf(x: f64, location: f64, scale: f64) -> Result<f64> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::EngineConstruction(format!(
            "scale must be finite and > 0, got {scale}"
        )));
    }
    let z = (x - location) / scale;
    Ok(1.0 / (std::f64::consts::PI * scale * (1.0 + z * z)))
}

/// CDF of a Cauchy distribution at `x`. Handles infinite `x`.
pub fn cdf(x: f64, location: f64, scale: f64) -> Result<f64> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::EngineConstruction(format!(
            "scale must be finite and > 0, got {scale}"
        )));
    }
    if x == f64::NEG_INFINITY {
        return Ok(0.0);
    }
    if x == f64::INFINITY {
        return Ok(1.0);
    }
    Ok(0.5 + ((x - location) / scale).atan() / std::f64::consts::PI)
}
