//! Model composition: one likelihood paired with one prior.

use std::fmt;

use bf_core::{MarginalHandle, Result};

use crate::evidence::Evidence;
use crate::likelihood::Likelihood;
use crate::posterior::Posterior;
use crate::prior::Prior;
use crate::slot::EngineSlot;

/// A likelihood paired with a prior, integrable to its marginal evidence.
///
/// The joint-integral engine handle is materialized lazily and owned
/// exclusively by this model; the likelihood and prior themselves are
/// shared.
pub struct Model {
    likelihood: Likelihood,
    prior: Prior,
    handle: EngineSlot<Box<dyn MarginalHandle>>,
}

impl Model {
    /// Pair a likelihood with a prior. No engine work happens here.
    pub fn new(likelihood: Likelihood, prior: Prior) -> Self {
        Self { likelihood, prior, handle: EngineSlot::new() }
    }

    /// The likelihood this model was built from.
    pub fn likelihood(&self) -> &Likelihood {
        &self.likelihood
    }

    /// The prior this model was built from.
    pub fn prior(&self) -> &Prior {
        &self.prior
    }

    fn handle(&self) -> Result<&dyn MarginalHandle> {
        self.handle
            .get_or_try_init(|| {
                self.likelihood
                    .engine()
                    .init_model(&self.likelihood.descriptor(), &self.prior.descriptor())
            })
            .map(|boxed| boxed.as_ref())
    }

    /// Materialize the joint-integral engine handle if it is still absent.
    /// Idempotent.
    pub fn ensure_engine(&self) -> Result<()> {
        self.handle().map(|_| ())
    }

    /// Integrate likelihood × prior into the model's [`Evidence`].
    ///
    /// The engine handle is cached; the integral itself is recomputed on
    /// every call.
    pub fn integrate(&self) -> Result<Evidence> {
        let value = self.handle()?.integral()?;
        Ok(Evidence::new(value, self.likelihood.clone(), self.prior.clone()))
    }

    /// The normalized posterior for this likelihood/prior pair.
    ///
    /// Always a fresh [`Posterior`] sharing the same definitions; posterior
    /// handles are independent of the model's joint-integral handle.
    pub fn posterior(&self) -> Posterior {
        Posterior::new(self.likelihood.clone(), self.prior.clone())
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("likelihood", &self.likelihood)
            .field("prior", &self.prior)
            .field("materialized", &self.handle.is_initialized())
            .finish()
    }
}
