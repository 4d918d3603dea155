//! Binomial likelihood utilities.
//!
//! Evaluated as a function of the success probability `p` with the data
//! `(k, n)` fixed, so `k` and `n` are real-valued parameters here.

use bf_core::{Error, Result};

use crate::math::ln_choose;

/// `C(n, k) · p^k · (1-p)^(n-k)` as a function of `p`.
///
/// Zero outside `p ∈ [0, 1]`.
pub fn pmf(k: f64, n: f64, p: f64) -> Result<f64> {
    if !n.is_finite() || n <= 0.0 {
        return Err(Error::EngineConstruction(format!(
            "trials must be finite and > 0, got {n}"
        )));
    }
    if !k.is_finite() || k < 0.0 || k > n {
        return Err(Error::EngineConstruction(format!(
            "successes must be in [0, trials], got {k} of {n}"
        )));
    }
    if !(0.0..=1.0).contains(&p) {
        return Ok(0.0);
    }
    if p == 0.0 {
        return Ok(if k == 0.0 { 1.0 } else { 0.0 });
    }
    if p == 1.0 {
        return Ok(if k == n { 1.0 } else { 0.0 });
    }
    Ok((ln_choose(n, k) + k * p.ln() + (n - k) * (1.0 - p).ln()).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_value() {
        // C(10,5) · 0.5^10 = 0.24609375
        assert_relative_eq!(pmf(5.0, 10.0, 0.5).unwrap(), 0.24609375, epsilon = 1e-12);
    }

    #[test]
    fn test_edges_p0_p1() {
        assert_eq!(pmf(0.0, 5.0, 0.0).unwrap(), 1.0);
        assert_eq!(pmf(1.0, 5.0, 0.0).unwrap(), 0.0);
        assert_eq!(pmf(5.0, 5.0, 1.0).unwrap(), 1.0);
        assert_eq!(pmf(4.0, 5.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_out_of_support_probability() {
        assert_eq!(pmf(3.0, 10.0, -0.1).unwrap(), 0.0);
        assert_eq!(pmf(3.0, 10.0, 1.1).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(pmf(5.0, 4.0, 0.5).is_err());
        assert!(pmf(-1.0, 4.0, 0.5).is_err());
        assert!(pmf(2.0, 0.0, 0.5).is_err());
    }
}
