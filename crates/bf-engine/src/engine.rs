//! [`EngineFactory`] implementation backed by adaptive quadrature.

use std::sync::Arc;

use bf_core::{
    DensityHandle, DistributionDescriptor, EngineFactory, Error, MarginalHandle, Result,
};

use crate::kernel::Density;
use crate::quad;

/// Numerical engine building density, marginal-integral, and posterior
/// handles from descriptors.
///
/// Stateless; construct one per process (or per test) and share it via
/// [`QuadratureEngine::shared`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadratureEngine;

impl QuadratureEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// A freshly allocated shared handle, typed as the factory trait.
    pub fn shared() -> Arc<dyn EngineFactory> {
        Arc::new(Self)
    }
}

/// Marginal of likelihood × prior over the prior's support.
///
/// A point-mass prior short-circuits to the likelihood evaluated at the
/// point; everything else is a definite integral.
fn marginal(likelihood: &Density, prior: &Density) -> Result<f64> {
    if let Some(p) = prior.point() {
        return likelihood.pdf(p);
    }
    let (lo, hi) = prior.support();
    quad::integrate(|x| Ok(likelihood.pdf(x)? * prior.pdf(x)?), lo, hi)
}

struct DistributionHandle {
    density: Density,
}

impl DensityHandle for DistributionHandle {
    fn evaluate(&self, x: f64) -> Result<f64> {
        self.density.pdf(x)
    }

    fn integrate(&self, lower: f64, upper: f64) -> Result<f64> {
        self.density.integrate(lower, upper)
    }
}

struct ModelHandle {
    likelihood: Density,
    prior: Density,
}

impl MarginalHandle for ModelHandle {
    fn integral(&self) -> Result<f64> {
        let value = marginal(&self.likelihood, &self.prior)?;
        tracing::debug!(evidence = value, "marginal integral evaluated");
        Ok(value)
    }
}

struct PosteriorHandle {
    likelihood: Density,
    prior: Density,
    evidence: f64,
}

impl PosteriorHandle {
    fn new(likelihood: Density, prior: Density) -> Result<Self> {
        let evidence = marginal(&likelihood, &prior)?;
        if !evidence.is_finite() || evidence <= 0.0 {
            return Err(Error::Computation(format!(
                "posterior is not normalizable: marginal likelihood is {evidence}"
            )));
        }
        Ok(Self { likelihood, prior, evidence })
    }
}

impl DensityHandle for PosteriorHandle {
    fn evaluate(&self, x: f64) -> Result<f64> {
        if let Some(p) = self.prior.point() {
            // the posterior of a point mass is the point mass itself
            return Ok(if x == p { 1.0 } else { 0.0 });
        }
        Ok(self.likelihood.pdf(x)? * self.prior.pdf(x)? / self.evidence)
    }

    fn integrate(&self, lower: f64, upper: f64) -> Result<f64> {
        if let Some(p) = self.prior.point() {
            return Ok(if lower <= p && p <= upper { 1.0 } else { 0.0 });
        }
        let (lo, hi) = self.prior.support();
        let lo = lower.max(lo);
        let hi = upper.min(hi);
        if !(lo < hi) {
            return Ok(0.0);
        }
        quad::integrate(|x| self.evaluate(x), lo, hi)
    }
}

impl EngineFactory for QuadratureEngine {
    fn init_distribution(
        &self,
        descriptor: &DistributionDescriptor,
    ) -> Result<Box<dyn DensityHandle>> {
        let density = Density::parse(descriptor)?;
        tracing::debug!(family = %descriptor.family, "distribution handle constructed");
        Ok(Box::new(DistributionHandle { density }))
    }

    fn init_model(
        &self,
        likelihood: &DistributionDescriptor,
        prior: &DistributionDescriptor,
    ) -> Result<Box<dyn MarginalHandle>> {
        let likelihood_density = Density::parse(likelihood)?;
        let prior_density = Density::parse(prior)?;
        tracing::debug!(
            likelihood = %likelihood.family,
            prior = %prior.family,
            "model handle constructed"
        );
        Ok(Box::new(ModelHandle { likelihood: likelihood_density, prior: prior_density }))
    }

    fn init_posterior(
        &self,
        likelihood: &DistributionDescriptor,
        prior: &DistributionDescriptor,
    ) -> Result<Box<dyn DensityHandle>> {
        let likelihood_density = Density::parse(likelihood)?;
        let prior_density = Density::parse(prior)?;
        tracing::debug!(
            likelihood = %likelihood.family,
            prior = %prior.family,
            "posterior handle constructed"
        );
        Ok(Box::new(PosteriorHandle::new(likelihood_density, prior_density)?))
    }
}
