//! Density kernels parsed from engine descriptors.
//!
//! A [`Density`] is the engine's working form of a `(family, params)`
//! descriptor: a closed per-family kernel, the effective support (natural
//! support intersected with optional `ll`/`ul` truncation bounds), and the
//! truncation normalization constant. All parameter validation happens at
//! parse time so bad descriptors fail at handle construction, not at the
//! first evaluation.

use bf_core::{DistributionDescriptor, Error, Result};

use crate::{beta, binomial, cauchy, noncentral_t, normal, quad, student_t};

/// Family-specific density math with the data fixed, evaluated over the
/// parameter axis.
#[derive(Debug, Clone, Copy)]
enum Kernel {
    Normal { mean: f64, sd: f64 },
    Cauchy { location: f64, scale: f64 },
    StudentT { mean: f64, sd: f64, df: f64 },
    Beta { alpha: f64, beta: f64 },
    Point { point: f64 },
    Binomial { successes: f64, trials: f64 },
    NoncentralD { d: f64, n: f64 },
    NoncentralD2 { d: f64, n1: f64, n2: f64 },
    NoncentralT { t: f64, df: f64 },
}

impl Kernel {
    fn natural_support(&self) -> (f64, f64) {
        match self {
            Kernel::Beta { .. } | Kernel::Binomial { .. } => (0.0, 1.0),
            _ => (f64::NEG_INFINITY, f64::INFINITY),
        }
    }

    fn pdf(&self, x: f64) -> Result<f64> {
        match *self {
            Kernel::Normal { mean, sd } => normal::pdf(x, mean, sd),
            Kernel::Cauchy { location, scale } => cauchy::pdf(x, location, scale),
            Kernel::StudentT { mean, sd, df } => student_t::pdf(x, mean, sd, df),
            Kernel::Beta { alpha, beta: b } => beta::pdf(x, alpha, b),
            Kernel::Point { point } => Ok(if x == point { 1.0 } else { 0.0 }),
            Kernel::Binomial { successes, trials } => binomial::pmf(successes, trials, x),
            Kernel::NoncentralD { d, n } => {
                let s = n.sqrt();
                Ok(s * noncentral_t::pdf(d * s, n - 1.0, x * s)?)
            }
            Kernel::NoncentralD2 { d, n1, n2 } => {
                let s = (n1 * n2 / (n1 + n2)).sqrt();
                Ok(s * noncentral_t::pdf(d * s, n1 + n2 - 2.0, x * s)?)
            }
            Kernel::NoncentralT { t, df } => noncentral_t::pdf(t, df, x),
        }
    }

    /// CDF for the families that support truncation bounds.
    fn cdf(&self, x: f64) -> Result<f64> {
        match *self {
            Kernel::Normal { mean, sd } => normal::cdf(x, mean, sd),
            Kernel::Cauchy { location, scale } => cauchy::cdf(x, location, scale),
            Kernel::StudentT { mean, sd, df } => student_t::cdf(x, mean, sd, df),
            Kernel::Beta { alpha, beta: b } => beta::cdf(x, alpha, b),
            _ => Err(Error::Computation(
                "truncation bounds are only defined for normal, cauchy, student_t, and beta"
                    .to_string(),
            )),
        }
    }
}

/// A parsed, validated density over the parameter axis.
#[derive(Debug, Clone)]
pub(crate) struct Density {
    kernel: Kernel,
    /// Effective support: natural support intersected with `ll`/`ul`.
    support: (f64, f64),
    /// Base-kernel mass on `support`; 1 when untruncated.
    norm: f64,
}

impl Density {
    /// Parse and validate a descriptor.
    pub fn parse(desc: &DistributionDescriptor) -> Result<Self> {
        let kernel = match desc.family.as_str() {
            "normal" => {
                check_names(desc, &["mean", "sd", "se", "ll", "ul"])?;
                let mean = require_finite(desc, "mean", required(desc, "mean")?)?;
                // priors parameterize the spread as `sd`, likelihoods as `se`
                let sd = match desc.params.get_opt("sd") {
                    Some(v) => v,
                    None => desc.params.get("se").map_err(|_| {
                        missing(desc, "`sd` (or `se`)")
                    })?,
                };
                let sd = require_positive(desc, "sd", sd)?;
                Kernel::Normal { mean, sd }
            }
            "cauchy" => {
                check_names(desc, &["location", "scale", "ll", "ul"])?;
                let location = require_finite(desc, "location", required(desc, "location")?)?;
                let scale = require_positive(desc, "scale", required(desc, "scale")?)?;
                Kernel::Cauchy { location, scale }
            }
            "student_t" => {
                check_names(desc, &["mean", "sd", "df", "ll", "ul"])?;
                let mean = require_finite(desc, "mean", required(desc, "mean")?)?;
                let sd = require_positive(desc, "sd", required(desc, "sd")?)?;
                let df = require_positive(desc, "df", required(desc, "df")?)?;
                Kernel::StudentT { mean, sd, df }
            }
            "beta" => {
                check_names(desc, &["alpha", "beta", "ll", "ul"])?;
                let alpha = require_positive(desc, "alpha", required(desc, "alpha")?)?;
                let b = require_positive(desc, "beta", required(desc, "beta")?)?;
                Kernel::Beta { alpha, beta: b }
            }
            "point" => {
                check_names(desc, &["point"])?;
                let point = require_finite(desc, "point", required(desc, "point")?)?;
                Kernel::Point { point }
            }
            "binomial" => {
                check_names(desc, &["successes", "trials"])?;
                let trials = require_positive(desc, "trials", required(desc, "trials")?)?;
                let successes = require_finite(desc, "successes", required(desc, "successes")?)?;
                if successes < 0.0 || successes > trials {
                    return Err(Error::EngineConstruction(format!(
                        "family `binomial`: successes must be in [0, trials], got {successes} of {trials}"
                    )));
                }
                Kernel::Binomial { successes, trials }
            }
            "noncentral_d" => {
                check_names(desc, &["d", "n"])?;
                let d = require_finite(desc, "d", required(desc, "d")?)?;
                let n = require_positive(desc, "n", required(desc, "n")?)?;
                if n <= 1.0 {
                    return Err(Error::EngineConstruction(format!(
                        "family `noncentral_d`: n must be > 1, got {n}"
                    )));
                }
                Kernel::NoncentralD { d, n }
            }
            "noncentral_d2" => {
                check_names(desc, &["d", "n1", "n2"])?;
                let d = require_finite(desc, "d", required(desc, "d")?)?;
                let n1 = require_positive(desc, "n1", required(desc, "n1")?)?;
                let n2 = require_positive(desc, "n2", required(desc, "n2")?)?;
                if n1 + n2 <= 2.0 {
                    return Err(Error::EngineConstruction(format!(
                        "family `noncentral_d2`: n1 + n2 must be > 2, got {n1} + {n2}"
                    )));
                }
                Kernel::NoncentralD2 { d, n1, n2 }
            }
            "noncentral_t" => {
                check_names(desc, &["t", "df"])?;
                let t = require_finite(desc, "t", required(desc, "t")?)?;
                let df = require_positive(desc, "df", required(desc, "df")?)?;
                Kernel::NoncentralT { t, df }
            }
            other => {
                return Err(Error::EngineConstruction(format!(
                    "unrecognized family `{other}`"
                )));
            }
        };

        let ll = desc.params.get_opt("ll");
        let ul = desc.params.get_opt("ul");
        Self::new(kernel, ll, ul)
    }

    fn new(kernel: Kernel, ll: Option<f64>, ul: Option<f64>) -> Result<Self> {
        let natural = kernel.natural_support();
        if ll.is_none() && ul.is_none() {
            return Ok(Self { kernel, support: natural, norm: 1.0 });
        }

        if let (Some(a), Some(b)) = (ll, ul) {
            if !(a < b) {
                return Err(Error::EngineConstruction(format!(
                    "truncation bounds must satisfy ll < ul, got ll={a}, ul={b}"
                )));
            }
        }
        let lo = ll.map_or(natural.0, |v| v.max(natural.0));
        let hi = ul.map_or(natural.1, |v| v.min(natural.1));

        // base mass on the truncated support; clamp degenerate truncations
        // so the density stays finite
        let mut norm = kernel.cdf(hi)? - kernel.cdf(lo)?;
        if !norm.is_finite() || norm <= 0.0 {
            norm = f64::MIN_POSITIVE;
        }
        Ok(Self { kernel, support: (lo, hi), norm })
    }

    /// The point of a point-mass density, if this is one.
    pub fn point(&self) -> Option<f64> {
        match self.kernel {
            Kernel::Point { point } => Some(point),
            _ => None,
        }
    }

    /// Effective support.
    pub fn support(&self) -> (f64, f64) {
        self.support
    }

    /// Density at `x`: renormalized on the truncated support, zero outside.
    pub fn pdf(&self, x: f64) -> Result<f64> {
        if self.point().is_some() {
            return self.kernel.pdf(x);
        }
        if x < self.support.0 || x > self.support.1 {
            return Ok(0.0);
        }
        Ok(self.kernel.pdf(x)? / self.norm)
    }

    /// Definite integral of the density over `[lower, upper]`.
    ///
    /// A point mass integrates to 1 exactly when the point is inside the
    /// interval.
    pub fn integrate(&self, lower: f64, upper: f64) -> Result<f64> {
        if let Some(p) = self.point() {
            return Ok(if lower <= p && p <= upper { 1.0 } else { 0.0 });
        }
        let lo = lower.max(self.support.0);
        let hi = upper.min(self.support.1);
        if !(lo < hi) {
            return Ok(0.0);
        }
        quad::integrate(|x| self.pdf(x), lo, hi)
    }
}

fn required(desc: &DistributionDescriptor, name: &str) -> Result<f64> {
    desc.params
        .get(name)
        .map_err(|_| missing(desc, &format!("`{name}`")))
}

fn missing(desc: &DistributionDescriptor, what: &str) -> Error {
    Error::EngineConstruction(format!(
        "family `{}` requires parameter {what}",
        desc.family
    ))
}

fn check_names(desc: &DistributionDescriptor, allowed: &[&str]) -> Result<()> {
    for param in desc.params.params() {
        if !allowed.contains(&param.name.as_str()) {
            return Err(Error::EngineConstruction(format!(
                "unknown parameter `{}` for family `{}`",
                param.name, desc.family
            )));
        }
    }
    Ok(())
}

fn require_finite(desc: &DistributionDescriptor, name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::EngineConstruction(format!(
            "family `{}`: parameter `{name}` must be finite, got {value}",
            desc.family
        )));
    }
    Ok(value)
}

fn require_positive(desc: &DistributionDescriptor, name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::EngineConstruction(format!(
            "family `{}`: parameter `{name}` must be finite and > 0, got {value}",
            desc.family
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bf_core::ParamSet;

    fn desc(family: &str, pairs: &[(&str, f64)]) -> DistributionDescriptor {
        DistributionDescriptor::new(
            family,
            ParamSet::from_pairs(pairs.iter().map(|&(n, v)| (n, Some(v)))),
        )
    }

    #[test]
    fn test_unknown_family() {
        let err = Density::parse(&desc("gamma", &[("shape", 1.0)])).unwrap_err();
        assert!(matches!(err, Error::EngineConstruction(_)));
    }

    #[test]
    fn test_missing_required_parameter() {
        let err = Density::parse(&desc("cauchy", &[("location", 0.0)])).unwrap_err();
        assert!(
            matches!(&err, Error::EngineConstruction(msg) if msg.contains("scale")),
            "{err}"
        );
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let err = Density::parse(&desc("point", &[("point", 0.0), ("sd", 1.0)])).unwrap_err();
        assert!(matches!(&err, Error::EngineConstruction(msg) if msg.contains("sd")));
    }

    #[test]
    fn test_out_of_domain_scale() {
        let err = Density::parse(&desc("normal", &[("mean", 0.0), ("sd", -1.0)])).unwrap_err();
        assert!(matches!(err, Error::EngineConstruction(_)));
    }

    #[test]
    fn test_normal_accepts_se_alias() {
        let density = Density::parse(&desc("normal", &[("mean", 0.0), ("se", 2.0)])).unwrap();
        assert_relative_eq!(
            density.pdf(0.0).unwrap(),
            crate::normal::pdf(0.0, 0.0, 2.0).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_truncated_normal_renormalizes() {
        let density =
            Density::parse(&desc("normal", &[("mean", 0.0), ("sd", 1.0), ("ll", 0.0)])).unwrap();
        // half-normal: pdf(1)/0.5
        assert_relative_eq!(density.pdf(1.0).unwrap(), 0.48394144903828673, epsilon = 1e-12);
        assert_eq!(density.pdf(-0.5).unwrap(), 0.0);
        let mass = density.integrate(f64::NEG_INFINITY, f64::INFINITY).unwrap();
        assert_relative_eq!(mass, 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_inverted_truncation_bounds() {
        let err = Density::parse(&desc(
            "normal",
            &[("mean", 0.0), ("sd", 1.0), ("ll", 1.0), ("ul", -1.0)],
        ))
        .unwrap_err();
        assert!(matches!(err, Error::EngineConstruction(_)));
    }

    #[test]
    fn test_point_density() {
        let density = Density::parse(&desc("point", &[("point", 3.0)])).unwrap();
        assert_eq!(density.pdf(3.0).unwrap(), 1.0);
        assert_eq!(density.pdf(2.9).unwrap(), 0.0);
        assert_eq!(density.integrate(1.5, 2.5).unwrap(), 0.0);
        assert_eq!(density.integrate(2.1, 3.0).unwrap(), 1.0);
    }

    #[test]
    fn test_beta_support_clips_integration() {
        let density = Density::parse(&desc("beta", &[("alpha", 2.0), ("beta", 5.0)])).unwrap();
        let mass = density.integrate(f64::NEG_INFINITY, f64::INFINITY).unwrap();
        assert_relative_eq!(mass, 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_noncentral_d_matches_scaled_noncentral_t() {
        let density = Density::parse(&desc("noncentral_d", &[("d", 0.5), ("n", 30.0)])).unwrap();
        let s = 30.0f64.sqrt();
        let expected = s * crate::noncentral_t::pdf(0.5 * s, 29.0, 0.4 * s).unwrap();
        assert_relative_eq!(density.pdf(0.4).unwrap(), expected, epsilon = 1e-13);
    }

    #[test]
    fn test_noncentral_d_requires_n_above_one() {
        let err = Density::parse(&desc("noncentral_d", &[("d", 0.5), ("n", 1.0)])).unwrap_err();
        assert!(matches!(err, Error::EngineConstruction(_)));
    }
}
