use std::{fmt, time::Duration};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// The root-finding strategy that produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Method {
    Bisection,
    NewtonRaphson,
    Secant,
}

impl Method {
    /// Returns the display name of the strategy.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Method::Bisection => "Bisection",
            Method::NewtonRaphson => "Newton-Raphson",
            Method::Secant => "Secant",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Indicates whether the solver converged or hit the iteration limit.
///
/// Both states are terminal; they differ only in how the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Status {
    /// The per-iteration error fell below tolerance, or the function
    /// evaluated to exactly zero at the candidate point.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIterations,
}

impl Status {
    /// Returns the fixed status message for this terminal state.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Status::Converged => "Convergence reached.",
            Status::MaxIterations => "Maximum iterations reached.",
        }
    }
}

/// The result of a completed root-finding run.
///
/// A report is built once, when the solve terminates, and is never mutated
/// afterwards. The per-iteration histories are index-aligned: entry `n` of
/// [`point_history`](Self::point_history) is the candidate produced by
/// iteration `n + 1`, and entry `n` of
/// [`error_history`](Self::error_history) is the error recorded for that
/// same iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct ConvergenceReport {
    /// The strategy that produced this report.
    pub method: Method,
    /// The final approximation to the root.
    ///
    /// Always equal to the last entry of `point_history`.
    pub root: f64,
    /// Number of completed iterations.
    ///
    /// Always equal to the length of both histories.
    pub iterations: usize,
    /// Successive approximations, one per iteration, in order.
    pub point_history: Vec<f64>,
    /// Per-iteration error magnitudes, index-aligned with `point_history`.
    pub error_history: Vec<f64>,
    /// How the run ended.
    pub status: Status,
    /// Wall-clock duration of the solve. Advisory only; it never takes
    /// part in control flow.
    pub elapsed: Duration,
}

impl ConvergenceReport {
    /// Builds a report from a finished run.
    ///
    /// Callers record at least one iteration before terminating, so the
    /// histories are never empty and `root` is always the last recorded
    /// candidate.
    pub(crate) fn from_run(
        method: Method,
        root: f64,
        point_history: Vec<f64>,
        error_history: Vec<f64>,
        status: Status,
        elapsed: Duration,
    ) -> Self {
        debug_assert_eq!(point_history.len(), error_history.len());
        // Bitwise so a NaN root from a diverging run still matches its
        // own history entry.
        debug_assert!(
            point_history
                .last()
                .is_some_and(|p| p.to_bits() == root.to_bits())
        );

        Self {
            method,
            root,
            iterations: point_history.len(),
            point_history,
            error_history,
            status,
            elapsed,
        }
    }

    /// Returns true if the run ended because the convergence condition
    /// fired, false if it only ran out of iterations.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the fixed status message for this report.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.status.message()
    }
}
