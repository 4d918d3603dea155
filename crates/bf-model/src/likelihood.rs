//! Likelihood definitions.

use std::fmt;
use std::sync::Arc;

use bf_core::{DensityHandle, DistributionDescriptor, EngineFactory, ParamSet, Result};
use bf_engine::QuadratureEngine;

use crate::family::LikelihoodFamily;
use crate::model::Model;
use crate::prior::Prior;
use crate::slot::EngineSlot;

struct Inner {
    family: LikelihoodFamily,
    params: ParamSet,
    engine: Arc<dyn EngineFactory>,
    handle: EngineSlot<Box<dyn DensityHandle>>,
}

/// A likelihood: how the observed data informs the unknown parameter.
///
/// Cheap to clone; clones share the definition (and its engine handle,
/// once materialized). The definition is read-only after construction.
#[derive(Clone)]
pub struct Likelihood {
    inner: Arc<Inner>,
}

impl Likelihood {
    /// Create a likelihood evaluated through the default quadrature engine.
    pub fn new(family: LikelihoodFamily) -> Self {
        Self::with_engine(family, QuadratureEngine::shared())
    }

    /// Create a likelihood evaluated through an explicit engine factory.
    pub fn with_engine(family: LikelihoodFamily, engine: Arc<dyn EngineFactory>) -> Self {
        let params = family.params();
        Self {
            inner: Arc::new(Inner { family, params, engine, handle: EngineSlot::new() }),
        }
    }

    /// Normal likelihood for an observed `mean` with standard error `se`.
    pub fn normal(mean: f64, se: f64) -> Self {
        Self::new(LikelihoodFamily::Normal { mean, se })
    }

    /// One-sample Cohen's d likelihood.
    pub fn noncentral_d(d: f64, n: f64) -> Self {
        Self::new(LikelihoodFamily::NoncentralD { d, n })
    }

    /// Two-sample Cohen's d likelihood.
    pub fn noncentral_d2(d: f64, n1: f64, n2: f64) -> Self {
        Self::new(LikelihoodFamily::NoncentralD2 { d, n1, n2 })
    }

    /// Likelihood for an observed t statistic.
    pub fn noncentral_t(t: f64, df: f64) -> Self {
        Self::new(LikelihoodFamily::NoncentralT { t, df })
    }

    /// Location-scale Student-t likelihood.
    pub fn student_t(mean: f64, sd: f64, df: f64) -> Self {
        Self::new(LikelihoodFamily::StudentT { mean, sd, df })
    }

    /// Binomial likelihood for `successes` out of `trials`.
    pub fn binomial(successes: f64, trials: f64) -> Self {
        Self::new(LikelihoodFamily::Binomial { successes, trials })
    }

    /// The family definition.
    pub fn family(&self) -> &LikelihoodFamily {
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

    pub(crate) fn engine(&self) -> &Arc<dyn EngineFactory> {
        &self.inner.engine
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

    /// Likelihood value at `x`.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        self.handle()?.evaluate(x)
    }

    /// Likelihood values at each of `xs`, in order.
    pub fn evaluate_many(&self, xs: &[f64]) -> Result<Vec<f64>> {
        self.handle()?.evaluate_many(xs)
    }

    /// Combine with a prior into a [`Model`].
    ///
    /// Symmetric with [`Prior::combine`]: either direction yields the same
    /// canonical (likelihood, prior) pairing.
    pub fn combine(&self, prior: &Prior) -> Model {
        Model::new(self.clone(), prior.clone())
    }
}

impl PartialEq for Likelihood {
    /// Structural equality: same family with identical parameter values.
    fn eq(&self, other: &Self) -> bool {
        self.inner.family == other.inner.family
    }
}

impl fmt::Debug for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Likelihood")
            .field("family", &self.inner.family)
            .field("materialized", &self.inner.handle.is_initialized())
            .finish()
    }
}
