//! Error types for the bayesfactor workspace.

use thiserror::Error;

/// Workspace error type.
///
/// Every failure is distinguishable by kind so callers (and their tests)
/// can assert on the specific condition.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested parameter name is absent from a parameter set.
    ///
    /// Absence is always a programming error, never a valid "no value":
    /// each family declares its own required parameter names.
    #[error("parameter not found: {0}")]
    ParameterNotFound(String),

    /// The engine rejected a family/parameter combination.
    #[error("engine construction error: {0}")]
    EngineConstruction(String),

    /// Evidence division attempted across evidences from different likelihoods.
    #[error("incompatible likelihoods: {0}")]
    IncompatibleLikelihood(String),

    /// Evidence divided by something other than another evidence or the
    /// literal 1.
    #[error("invalid divisor: {0} (divide by another evidence, or by 1 to invert the comparison)")]
    InvalidDivisor(f64),

    /// Numerical failure inside the engine.
    #[error("computation error: {0}")]
    Computation(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
