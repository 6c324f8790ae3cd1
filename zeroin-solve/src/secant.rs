use std::time::Instant;

use crate::{
    config::SolverConfig,
    error::Error,
    report::{ConvergenceReport, Method, Status},
};

/// Finds a root of `f` starting from the pair `(x0, x1)` using the secant
/// method.
///
/// No derivative is needed; the slope is approximated through the two most
/// recent iterates. Each iteration records the updated candidate and the
/// distance between the two most recent iterates.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `f` takes exactly the same value
/// at both current iterates, or [`Error::InvalidConfig`] if the config
/// fails validation.
pub fn solve<F>(
    f: F,
    x0: f64,
    x1: f64,
    config: &SolverConfig,
) -> Result<ConvergenceReport, Error>
where
    F: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let started = Instant::now();
    let mut point_history = Vec::new();
    let mut error_history = Vec::new();
    let mut status = Status::MaxIterations;
    let (mut x0, mut x1) = (x0, x1);
    let mut root = x1;

    for _ in 0..config.max_iterations {
        let fx0 = f(x0);
        let fx1 = f(x1);

        if fx1 - fx0 == 0.0 {
            return Err(Error::DivisionByZero { x0, x1 });
        }

        let x2 = x1 - fx1 * (x1 - x0) / (fx1 - fx0);

        point_history.push(x2);
        let error = (x2 - x1).abs();
        error_history.push(error);
        root = x2;

        if error < config.tolerance || f(x2) == 0.0 {
            status = Status::Converged;
            break;
        }

        x0 = x1;
        x1 = x2;
    }

    Ok(ConvergenceReport::from_run(
        Method::Secant,
        root,
        point_history,
        error_history,
        status,
        started.elapsed(),
    ))
}
