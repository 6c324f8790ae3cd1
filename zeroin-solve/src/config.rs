/// Configuration shared by all three solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence tolerance for the per-iteration error magnitude.
    pub tolerance: f64,
    /// Hard cap on the number of iterations.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 50,
        }
    }
}

impl SolverConfig {
    /// Validates that the tolerance is finite and positive and that at
    /// least one iteration is allowed.
    ///
    /// # Errors
    ///
    /// Returns a reason string if either field is out of range.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be finite and positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let config = SolverConfig {
            tolerance: 0.0,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SolverConfig {
            tolerance: -1e-10,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_nan_tolerance() {
        let config = SolverConfig {
            tolerance: f64::NAN,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_max_iterations() {
        let config = SolverConfig {
            max_iterations: 0,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
