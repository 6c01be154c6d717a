use thiserror::Error;

/// Top-level error type for the mintri crate.
#[derive(Debug, Error)]
pub enum MintriError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    /// No excircle candidate touches the third side of the wedge triangle.
    ///
    /// The tolerances are inconsistent with the input precision; this is
    /// never an ordinary "no fit".
    #[error("inconsistent circle fit (r = {radius}), no excircle candidate:\n{candidates}")]
    InconsistentFit { radius: f64, candidates: String },
}

/// Errors related to enclosing-triangle operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("search did not converge after {iterations} iterations (side gap {gap})")]
    NotConverged { iterations: usize, gap: f64 },
}

impl MintriError {
    /// Returns whether this error reports a search that hit its iteration cap.
    #[must_use]
    pub fn is_not_converged(&self) -> bool {
        matches!(self, Self::Operation(OperationError::NotConverged { .. }))
    }
}

/// Convenience type alias for results using [`MintriError`].
pub type Result<T> = std::result::Result<T, MintriError>;
