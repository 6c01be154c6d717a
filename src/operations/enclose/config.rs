use crate::error::{OperationError, Result};

/// Tolerances and limits for the enclosing-triangle search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncloseConfig {
    /// Geometric tolerance: points closer than this to a line are on it.
    pub err: f64,
    /// Convergence threshold on the length gap between the two free sides.
    pub tol: f64,
    /// Iteration cap of the wedge-shrinking loop.
    pub max_iterations: usize,
}

impl Default for EncloseConfig {
    fn default() -> Self {
        Self {
            err: 1e-5,
            tol: 1e-3,
            max_iterations: 1000,
        }
    }
}

impl EncloseConfig {
    #[must_use]
    pub fn with_err(mut self, err: f64) -> Self {
        self.err = err;
        self
    }

    #[must_use]
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks the tolerances are usable.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `err` is not a positive
    /// finite number, `tol` is negative or not finite, or the iteration cap
    /// is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.err.is_finite() || self.err <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "err must be positive and finite, got {}",
                self.err
            ))
            .into());
        }
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "tol must be non-negative and finite, got {}",
                self.tol
            ))
            .into());
        }
        if self.max_iterations == 0 {
            return Err(
                OperationError::InvalidInput("max_iterations must be at least 1".to_owned()).into(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(EncloseConfig::default().validate().is_ok());
    }

    #[test]
    fn builders_override_fields() {
        let cfg = EncloseConfig::default()
            .with_err(1e-6)
            .with_tol(0.1)
            .with_max_iterations(5);
        assert_eq!(
            cfg,
            EncloseConfig {
                err: 1e-6,
                tol: 0.1,
                max_iterations: 5
            }
        );
    }

    #[test]
    fn rejects_unusable_tolerances() {
        let base = EncloseConfig::default();
        assert!(base.with_err(0.0).validate().is_err());
        assert!(base.with_err(f64::NAN).validate().is_err());
        assert!(base.with_tol(-1.0).validate().is_err());
        assert!(base.with_tol(f64::INFINITY).validate().is_err());
        assert!(base.with_max_iterations(0).validate().is_err());
        assert!(base.with_tol(0.0).validate().is_ok());
    }
}
