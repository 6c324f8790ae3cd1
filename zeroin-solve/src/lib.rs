//! Classical root-finding methods for scalar functions.
//!
//! Three interchangeable strategies, [`bisection`], [`newton_raphson`],
//! and [`secant`], share one [`SolverConfig`] and produce the same
//! [`ConvergenceReport`], so callers can swap methods without changing
//! how they inspect the outcome. The report carries the full iterate and
//! error histories for downstream tabulation or plotting.
//!
//! Each solve is synchronous and self-contained: the function evaluator
//! is a plain closure supplied by the caller, and no state is shared
//! between runs.
//!
//! ```
//! use zeroin_solve::{SolverConfig, bisection};
//!
//! let report = bisection::solve(|x| x * x - 2.0, [0.0, 2.0], &SolverConfig::default())?;
//!
//! assert!(report.converged());
//! assert!((report.root - std::f64::consts::SQRT_2).abs() < 1e-9);
//! # Ok::<(), zeroin_solve::Error>(())
//! ```

pub mod bisection;
pub mod newton_raphson;
pub mod secant;

mod config;
mod error;
mod report;

pub use config::SolverConfig;
pub use error::Error;
pub use report::{ConvergenceReport, Method, Status};
