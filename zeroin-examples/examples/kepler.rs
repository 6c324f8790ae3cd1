//! # Kepler's Equation
//!
//! Solves Kepler's equation `E - e*sin(E) = M` for the eccentric anomaly
//! `E` with Newton-Raphson, using the mean anomaly as the initial guess.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example kepler
//! ```

use zeroin_solve::{SolverConfig, newton_raphson};

fn main() -> Result<(), zeroin_solve::Error> {
    let eccentricity = 0.3;
    let mean_anomaly = 0.7;

    let f = move |e: f64| e - eccentricity * e.sin() - mean_anomaly;
    let df = move |e: f64| 1.0 - eccentricity * e.cos();

    let report = newton_raphson::solve(f, df, mean_anomaly, &SolverConfig::default())?;

    println!(
        "E = {:.12} rad after {} iterations ({})",
        report.root,
        report.iterations,
        report.message()
    );

    for (i, (p, err)) in report
        .point_history
        .iter()
        .zip(&report.error_history)
        .enumerate()
    {
        println!("  iteration {:>2}: E = {p:.12}, error = {err:.2e}", i + 1);
    }

    Ok(())
}
