//! Model evidence (marginal likelihood) and Bayes-factor division.

use std::fmt;

use bf_core::{Error, Result};

use crate::likelihood::Likelihood;
use crate::prior::Prior;

/// The marginal likelihood of a model, with back-references to the
/// likelihood and prior that produced it.
///
/// Produced only by [`Model::integrate`](crate::Model::integrate);
/// immutable thereafter.
#[derive(Debug, Clone)]
pub struct Evidence {
    value: f64,
    likelihood: Likelihood,
    prior: Prior,
}

/// Accepted right-hand operands of [`Evidence::divide`].
#[derive(Debug, Clone, Copy)]
pub enum Divisor<'a> {
    /// Another evidence; the likelihoods must match.
    Evidence(&'a Evidence),
    /// A scalar; only the literal `1.0` is accepted.
    Scalar(f64),
}

impl<'a> From<&'a Evidence> for Divisor<'a> {
    fn from(evidence: &'a Evidence) -> Self {
        Self::Evidence(evidence)
    }
}

impl From<f64> for Divisor<'_> {
    fn from(scalar: f64) -> Self {
        Self::Scalar(scalar)
    }
}

impl Evidence {
    pub(crate) fn new(value: f64, likelihood: Likelihood, prior: Prior) -> Self {
        Self { value, likelihood, prior }
    }

    /// The marginal-likelihood value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The likelihood this evidence was computed under.
    pub fn likelihood(&self) -> &Likelihood {
        &self.likelihood
    }

    /// The prior this evidence was computed under.
    pub fn prior(&self) -> &Prior {
        &self.prior
    }

    /// The Bayes factor against `other`.
    ///
    /// Comparing evidences is only meaningful when both were computed under
    /// the same likelihood; "same" is structural (family and parameter
    /// values), so independently constructed but parameter-identical
    /// likelihoods compare fine.
    pub fn bayes_factor(&self, other: &Evidence) -> Result<f64> {
        if self.likelihood != other.likelihood {
            return Err(Error::IncompatibleLikelihood(format!(
                "evidence under `{}` {:?} cannot be compared with evidence under `{}` {:?}",
                self.likelihood.family().name(),
                self.likelihood.params().params(),
                other.likelihood.family().name(),
                other.likelihood.params().params(),
            )));
        }
        Ok(self.value / other.value)
    }

    /// Divide by another evidence (a Bayes factor) or by the literal `1.0`
    /// (the explicit "invert the comparison" idiom). Any other scalar is an
    /// [`Error::InvalidDivisor`].
    pub fn divide<'a>(&self, divisor: impl Into<Divisor<'a>>) -> Result<f64> {
        match divisor.into() {
            Divisor::Evidence(other) => self.bayes_factor(other),
            Divisor::Scalar(scalar) if scalar == 1.0 => Ok(self.value / scalar),
            Divisor::Scalar(scalar) => Err(Error::InvalidDivisor(scalar)),
        }
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
