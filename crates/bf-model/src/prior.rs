//! Prior definitions.

use std::fmt;
use std::sync::Arc;

use bf_core::{DensityHandle, DistributionDescriptor, EngineFactory, ParamSet, Result};
use bf_engine::QuadratureEngine;

use crate::family::PriorFamily;
use crate::likelihood::Likelihood;
use crate::model::Model;
use crate::slot::EngineSlot;

struct Inner {
    family: PriorFamily,
    params: ParamSet,
    engine: Arc<dyn EngineFactory>,
    handle: EngineSlot<Box<dyn DensityHandle>>,
}

/// A prior: belief over the unknown parameter before seeing data.
///
/// Cheap to clone; clones share the definition (and its engine handle,
/// once materialized). The definition is read-only after construction.
#[derive(Clone)]
pub struct Prior {
    inner: Arc<Inner>,
}

impl Prior {
    /// Create a prior evaluated through the default quadrature engine.
    pub fn new(family: PriorFamily) -> Self {
        Self::with_engine(family, QuadratureEngine::shared())
    }

    /// Create a prior evaluated through an explicit engine factory.
    pub fn with_engine(family: PriorFamily, engine: Arc<dyn EngineFactory>) -> Self {
        let params = family.params();
        Self {
            inner: Arc::new(Inner { family, params, engine, handle: EngineSlot::new() }),
        }
    }

    /// Normal prior, optionally truncated to `[ll, ul]`.
    pub fn normal(mean: f64, sd: f64, ll: Option<f64>, ul: Option<f64>) -> Self {
        Self::new(PriorFamily::Normal { mean, sd, ll, ul })
    }

    /// Cauchy prior, optionally truncated to `[ll, ul]`.
    pub fn cauchy(location: f64, scale: f64, ll: Option<f64>, ul: Option<f64>) -> Self {
        Self::new(PriorFamily::Cauchy { location, scale, ll, ul })
    }

    /// Point-mass prior at `point`.
    pub fn point(point: f64) -> Self {
        Self::new(PriorFamily::Point { point })
    }

    /// Student-t prior, optionally truncated to `[ll, ul]`.
    pub fn student_t(mean: f64, sd: f64, df: f64, ll: Option<f64>, ul: Option<f64>) -> Self {
        Self::new(PriorFamily::StudentT { mean, sd, df, ll, ul })
    }

    /// Beta prior, optionally truncated to `[ll, ul]`.
    pub fn beta(alpha: f64, beta: f64, ll: Option<f64>, ul: Option<f64>) -> Self {
        Self::new(PriorFamily::Beta { alpha, beta, ll, ul })
    }

    /// The family definition.
    pub fn family(&self) -> &PriorFamily {
        &self.inner.family
    }

    /// Ordered parameters, as handed to the engine.
    pub fn params(&self) -> &ParamSet {
        &self.inner.params
    }

    /// Engine descriptor for this definition.
    pub fn descriptor(&self) -> DistributionDescriptor {
        DistributionDescriptor::new(self.inner.family.name(), self.inner.params.clone())
    }

    fn handle(&self) -> Result<&dyn DensityHandle> {
        self.inner
            .handle
            .get_or_try_init(|| self.inner.engine.init_distribution(&self.descriptor()))
            .map(|boxed| boxed.as_ref())
    }

    /// Materialize the engine handle if it is still absent. Idempotent.
    pub fn ensure_engine(&self) -> Result<()> {
        self.handle().map(|_| ())
    }

    /// Prior density at `x`.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        self.handle()?.evaluate(x)
    }

    /// Prior densities at each of `xs`, in order.
    pub fn evaluate_many(&self, xs: &[f64]) -> Result<Vec<f64>> {
        self.handle()?.evaluate_many(xs)
    }

    /// Definite integral of the prior density; `None` bounds default to the
    /// full real line.
    pub fn integrate(&self, lower: Option<f64>, upper: Option<f64>) -> Result<f64> {
        self.handle()?.integrate(
            lower.unwrap_or(f64::NEG_INFINITY),
            upper.unwrap_or(f64::INFINITY),
        )
    }

    /// Combine with a likelihood into a [`Model`].
    ///
    /// Symmetric with [`Likelihood::combine`]: either direction yields the
    /// same canonical (likelihood, prior) pairing.
    pub fn combine(&self, likelihood: &Likelihood) -> Model {
        Model::new(likelihood.clone(), self.clone())
    }
}

impl PartialEq for Prior {
    /// Structural equality: same family with identical parameter values.
    fn eq(&self, other: &Self) -> bool {
        self.inner.family == other.inner.family
    }
}

impl fmt::Debug for Prior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prior")
            .field("family", &self.inner.family)
            .field("materialized", &self.inner.handle.is_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_records_family_and_params() {
        let prior = Prior::cauchy(0.0, 1.0, None, None);
        assert_eq!(prior.family().name(), "cauchy");
        assert_eq!(prior.params().get("location").unwrap(), 0.0);
        assert_eq!(prior.params().get("scale").unwrap(), 1.0);
    }

    #[test]
    fn test_optional_bounds_absent_from_params() {
        let prior = Prior::normal(0.0, 1.0, None, None);
        assert!(prior.params().get("ll").is_err());
        let truncated = Prior::normal(0.0, 1.0, Some(0.0), None);
        assert_eq!(truncated.params().get("ll").unwrap(), 0.0);
    }

    #[test]
    fn test_ensure_engine_surfaces_domain_errors_lazily() {
        let prior = Prior::beta(-2.0, 5.0, None, None);
        let err = prior.ensure_engine().unwrap_err();
        assert!(matches!(err, bf_core::Error::EngineConstruction(_)));
    }
}
