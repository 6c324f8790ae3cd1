use std::time::Instant;

use crate::{
    config::SolverConfig,
    error::Error,
    report::{ConvergenceReport, Method, Status},
};

/// Finds a root of `f` inside `bracket` using the bisection method.
///
/// The bracket endpoints must evaluate to values of strictly opposite sign.
/// Each iteration records the midpoint and its error, where the error is
/// the distance from the midpoint to the current left endpoint `a`, not
/// the distance between successive midpoints.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `f` does not change sign across
/// the bracket, or [`Error::InvalidConfig`] if the config fails validation.
/// Both are raised before the first iteration.
pub fn solve<F>(f: F, bracket: [f64; 2], config: &SolverConfig) -> Result<ConvergenceReport, Error>
where
    F: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let [mut a, mut b] = bracket;
    let mut fa = f(a);
    let fb = f(b);

    // A NaN product compares false here and falls through to the loop,
    // where it propagates into the recorded candidates.
    if fa * fb >= 0.0 {
        return Err(Error::InvalidBracket { a, b, fa, fb });
    }

    let started = Instant::now();
    let mut point_history = Vec::new();
    let mut error_history = Vec::new();
    let mut status = Status::MaxIterations;
    let mut root = a;

    for _ in 0..config.max_iterations {
        let c = 0.5 * (a + b);
        let fc = f(c);

        point_history.push(c);
        let error = (c - a).abs();
        error_history.push(error);
        root = c;

        if error < config.tolerance || fc == 0.0 {
            status = Status::Converged;
            break;
        }

        if fa * fc < 0.0 {
            // Root is in the left half.
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }

    Ok(ConvergenceReport::from_run(
        Method::Bisection,
        root,
        point_history,
        error_history,
        status,
        started.elapsed(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn finds_sqrt_two() {
        let config = SolverConfig {
            tolerance: 1e-8,
            ..SolverConfig::default()
        };

        let report = solve(|x| x * x - 2.0, [0.0, 2.0], &config).expect("should solve");

        assert!(report.converged());
        assert_eq!(report.status, Status::Converged);
        assert_abs_diff_eq!(report.root, std::f64::consts::SQRT_2, epsilon = 1e-8);
        assert_eq!(report.message(), "Convergence reached.");
    }

    #[test]
    fn histories_align_with_iteration_count() {
        let config = SolverConfig {
            tolerance: 1e-8,
            ..SolverConfig::default()
        };

        let report = solve(|x| x * x - 2.0, [0.0, 2.0], &config).expect("should solve");

        assert_eq!(report.point_history.len(), report.iterations);
        assert_eq!(report.error_history.len(), report.iterations);
        assert!(report.iterations <= config.max_iterations);
        assert_eq!(report.root, *report.point_history.last().unwrap());
    }

    #[test]
    fn errors_halve_each_iteration() {
        let config = SolverConfig {
            tolerance: 1e-10,
            ..SolverConfig::default()
        };

        let report = solve(|x| x * x - 2.0, [0.0, 2.0], &config).expect("should solve");

        for pair in report.error_history.windows(2) {
            assert_relative_eq!(pair[1], 0.5 * pair[0], max_relative = 1e-12);
        }
    }

    #[test]
    fn midpoints_stay_inside_the_shrinking_bracket() {
        let f = |x: f64| x * x * x - 5.0;

        let report = solve(f, [1.0, 2.0], &SolverConfig::default()).expect("should solve");

        // Replay the bracket updates and check each recorded midpoint
        // against the bracket that produced it.
        let (mut a, mut b) = (1.0, 2.0);
        let mut fa = f(a);
        for &c in &report.point_history {
            assert!(c > a && c < b);

            let fc = f(c);
            if fa * fc < 0.0 {
                b = c;
            } else {
                a = c;
                fa = fc;
            }
        }
    }

    #[test]
    fn errors_on_same_sign_bracket() {
        let result = solve(|x| x * x + 1.0, [0.0, 1.0], &SolverConfig::default());

        assert!(matches!(result, Err(Error::InvalidBracket { .. })));
    }

    #[test]
    fn exact_zero_converges_even_above_tolerance() {
        // The first midpoint of [0, 2] is the root of x - 1, so the run
        // converges on iteration one with a recorded error of 1.0.
        let report =
            solve(|x| x - 1.0, [0.0, 2.0], &SolverConfig::default()).expect("should solve");

        assert!(report.converged());
        assert_eq!(report.iterations, 1);
        assert_eq!(report.root, 1.0);
        assert_eq!(report.error_history, vec![1.0]);
    }

    #[test]
    fn iteration_cap_is_not_an_error() {
        let config = SolverConfig {
            tolerance: 1e-300,
            max_iterations: 4,
        };

        let report = solve(|x| x * x - 2.0, [0.0, 2.0], &config).expect("should solve");

        assert!(!report.converged());
        assert_eq!(report.status, Status::MaxIterations);
        assert_eq!(report.iterations, 4);
        assert_eq!(report.message(), "Maximum iterations reached.");
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = SolverConfig {
            tolerance: -1.0,
            ..SolverConfig::default()
        };

        let result = solve(|x| x * x - 2.0, [0.0, 2.0], &config);

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn repeated_solves_are_bit_identical() {
        let config = SolverConfig {
            tolerance: 1e-8,
            ..SolverConfig::default()
        };

        let first = solve(|x| x * x - 2.0, [0.0, 2.0], &config).expect("should solve");
        let second = solve(|x| x * x - 2.0, [0.0, 2.0], &config).expect("should solve");

        assert_eq!(first.root.to_bits(), second.root.to_bits());
        assert_eq!(first.point_history, second.point_history);
        assert_eq!(first.error_history, second.error_history);
        assert_eq!(first.iterations, second.iterations);
        assert_eq!(first.status, second.status);
    }
}
