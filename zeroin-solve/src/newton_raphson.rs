use std::time::Instant;

use crate::{
    config::SolverConfig,
    error::Error,
    report::{ConvergenceReport, Method, Status},
};

/// Finds a root of `f` starting from `x0` using the Newton-Raphson method.
///
/// `df` must evaluate the derivative of `f`. Each iteration records the
/// updated candidate and the distance between the two most recent iterates.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] if `df` evaluates to exactly zero at
/// the current iterate, or [`Error::InvalidConfig`] if the config fails
/// validation.
pub fn solve<F, D>(
    f: F,
    df: D,
    x0: f64,
    config: &SolverConfig,
) -> Result<ConvergenceReport, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let started = Instant::now();
    let mut point_history = Vec::new();
    let mut error_history = Vec::new();
    let mut status = Status::MaxIterations;
    let mut x = x0;
    let mut root = x0;

    for _ in 0..config.max_iterations {
        let fx = f(x);
        let dfx = df(x);

        if dfx == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }

        let next = x - fx / dfx;

        point_history.push(next);
        let error = (next - x).abs();
        error_history.push(error);
        root = next;

        if error < config.tolerance || f(next) == 0.0 {
            status = Status::Converged;
            break;
        }

        x = next;
    }

    Ok(ConvergenceReport::from_run(
        Method::NewtonRaphson,
        root,
        point_history,
        error_history,
        status,
        started.elapsed(),
    ))
}
