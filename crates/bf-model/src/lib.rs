//! Bayesian model composition and evidence.
//!
//! Declare a [`Likelihood`] (how the data informs a parameter) and a
//! [`Prior`] (belief over that parameter), combine them into a [`Model`],
//! integrate the model to get its [`Evidence`], and divide evidences that
//! share a likelihood to get a Bayes factor. [`Model::posterior`] gives the
//! normalized posterior density for the same pair.
//!
//! ```
//! use bf_model::prelude::*;
//!
//! # fn main() -> bf_model::Result<()> {
//! let d = 2.03 / 80.0_f64.sqrt();
//! let likelihood = Likelihood::noncentral_d(d, 80.0);
//!
//! let h1 = Prior::cauchy(0.0, 1.0, None, None);
//! let h0 = Prior::point(0.0);
//!
//! let m1 = likelihood.combine(&h1).integrate()?;
//! let m0 = likelihood.combine(&h0).integrate()?;
//!
//! let bf = m1.bayes_factor(&m0)?;
//! assert!((bf - 0.642).abs() < 1e-3);
//! # Ok(())
//! # }
//! ```
//!
//! All numerics live behind the engine boundary defined in `bf-core`;
//! definitions hold an engine-factory reference and materialize their
//! engine handle lazily, exactly once, on first use.

pub mod evidence;
pub mod family;
pub mod likelihood;
pub mod model;
pub mod posterior;
pub mod prior;

mod slot;

pub use bf_core::{Error, Result};
pub use evidence::{Divisor, Evidence};
pub use family::{LikelihoodFamily, PriorFamily};
pub use likelihood::Likelihood;
pub use model::Model;
pub use posterior::Posterior;
pub use prior::Prior;

/// Convenience re-exports for callers building model comparisons.
pub mod prelude {
    pub use crate::evidence::{Divisor, Evidence};
    pub use crate::family::{LikelihoodFamily, PriorFamily};
    pub use crate::likelihood::Likelihood;
    pub use crate::model::Model;
    pub use crate::posterior::Posterior;
    pub use crate::prior::Prior;
}
