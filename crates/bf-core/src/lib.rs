//! Core building blocks for the bayesfactor workspace.
//!
//! This crate hosts the pieces shared by the composition layer and the
//! numerical engine:
//! - the workspace error type
//! - parameter and descriptor value types (the engine handoff format)
//! - the engine-boundary traits (dependency inversion: the composition
//!   layer never depends on a concrete engine)

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{DensityHandle, EngineFactory, MarginalHandle};
pub use types::{DistributionDescriptor, Param, ParamSet};
