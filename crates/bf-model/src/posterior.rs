//! Posterior densities, normalized per Bayes' rule.

use std::fmt;

use bf_core::{DensityHandle, Result};

use crate::likelihood::Likelihood;
use crate::prior::Prior;
use crate::slot::EngineSlot;

/// The normalized posterior density of a likelihood/prior pair.
///
/// Backed by its own engine handle (the engine composes likelihood × prior
/// and renormalizes), independent of any [`Model`](crate::Model) handle for
/// the same pair.
pub struct Posterior {
    likelihood: Likelihood,
    prior: Prior,
    handle: EngineSlot<Box<dyn DensityHandle>>,
}

impl Posterior {
    /// Pair a likelihood with a prior. No engine work happens here.
    pub fn new(likelihood: Likelihood, prior: Prior) -> Self {
        Self { likelihood, prior, handle: EngineSlot::new() }
    }

    /// The likelihood this posterior was built from.
    pub fn likelihood(&self) -> &Likelihood {
        &self.likelihood
    }

    /// The prior this posterior was built from.
    pub fn prior(&self) -> &Prior {
        &self.prior
    }

    fn handle(&self) -> Result<&dyn DensityHandle> {
        self.handle
            .get_or_try_init(|| {
                self.likelihood
                    .engine()
                    .init_posterior(&self.likelihood.descriptor(), &self.prior.descriptor())
            })
            .map(|boxed| boxed.as_ref())
    }

    /// Materialize the posterior engine handle if it is still absent.
    /// Idempotent.
    pub fn ensure_engine(&self) -> Result<()> {
        self.handle().map(|_| ())
    }

    pub(crate) fn is_materialized(&self) -> bool {
        self.handle.is_initialized()
    }

    /// Posterior density at `x`.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        self.handle()?.evaluate(x)
    }

    /// Posterior densities at each of `xs`, in order.
    pub fn evaluate_many(&self, xs: &[f64]) -> Result<Vec<f64>> {
        self.handle()?.evaluate_many(xs)
    }

    /// Definite integral of the posterior density; `None` bounds default to
    /// the full real line. Over the full domain this is 1 up to numerical
    /// tolerance.
    pub fn integrate(&self, lower: Option<f64>, upper: Option<f64>) -> Result<f64> {
        self.handle()?.integrate(
            lower.unwrap_or(f64::NEG_INFINITY),
            upper.unwrap_or(f64::INFINITY),
        )
    }
}

impl fmt::Debug for Posterior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Posterior")
            .field("likelihood", &self.likelihood)
            .field("prior", &self.prior)
            .field("materialized", &self.handle.is_initialized())
            .finish()
    }
}
