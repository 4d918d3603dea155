//! Engine-boundary traits.
//!
//! The composition layer talks to the numerical engine only through these
//! trait objects, so high-level model algebra does not depend on a concrete
//! engine implementation.

use crate::types::DistributionDescriptor;
use crate::Result;

/// Handle to an evaluable, integrable density.
pub trait DensityHandle: Send + Sync {
    /// Evaluate the density at a single point.
    fn evaluate(&self, x: f64) -> Result<f64>;

    /// Vectorized evaluation; the result has the same length and order as
    /// the input.
    fn evaluate_many(&self, xs: &[f64]) -> Result<Vec<f64>> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Definite integral over `[lower, upper]`. Bounds may be infinite.
    fn integrate(&self, lower: f64, upper: f64) -> Result<f64>;
}

/// Handle to a joint likelihood × prior marginal integral.
pub trait MarginalHandle: Send + Sync {
    /// Marginal integral of likelihood × prior over the prior's support.
    fn integral(&self) -> Result<f64>;
}

/// Factory capability for materializing engine handles from descriptors.
///
/// Fails with [`Error::EngineConstruction`](crate::Error::EngineConstruction)
/// if a family is unrecognized or required parameters are missing or out of
/// domain.
pub trait EngineFactory: Send + Sync {
    /// Build a density handle for a single distribution.
    fn init_distribution(
        &self,
        descriptor: &DistributionDescriptor,
    ) -> Result<Box<dyn DensityHandle>>;

    /// Build the joint-integral handle for a likelihood/prior pair.
    fn init_model(
        &self,
        likelihood: &DistributionDescriptor,
        prior: &DistributionDescriptor,
    ) -> Result<Box<dyn MarginalHandle>>;

    /// Build the normalized posterior density for a likelihood/prior pair.
    fn init_posterior(
        &self,
        likelihood: &DistributionDescriptor,
        prior: &DistributionDescriptor,
    ) -> Result<Box<dyn DensityHandle>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamSet;

    struct UnitDensity;

    impl DensityHandle for UnitDensity {
        fn evaluate(&self, _x: f64) -> Result<f64> {
            Ok(1.0)
        }

        fn integrate(&self, lower: f64, upper: f64) -> Result<f64> {
            Ok(upper - lower)
        }
    }

    #[test]
    fn test_evaluate_many_default_impl() {
        let handle = UnitDensity;
        let out = handle.evaluate_many(&[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(out, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_handles_are_object_safe() {
        let boxed: Box<dyn DensityHandle> = Box::new(UnitDensity);
        assert_eq!(boxed.integrate(0.0, 2.0).unwrap(), 2.0);
        let _desc = DistributionDescriptor::new("normal", ParamSet::new());
    }
}
