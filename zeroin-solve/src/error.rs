use thiserror::Error;

/// Errors that abort a solve before a report can be produced.
///
/// Every variant is fatal to the current solve: no partial report is
/// returned and nothing is retried. Running out of iterations is not an
/// error; it is reported through
/// [`Status::MaxIterations`](crate::Status::MaxIterations).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// Bisection requires a sign change across the bracket.
    #[error("no sign change across bracket: f({a}) = {fa}, f({b}) = {fb}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },

    /// Newton-Raphson hit a point where the derivative is exactly zero.
    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    /// The secant update is undefined when both function values coincide.
    #[error("secant step divides by zero: f({x0}) == f({x1})")]
    DivisionByZero { x0: f64, x1: f64 },

    /// The solver configuration failed validation.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
