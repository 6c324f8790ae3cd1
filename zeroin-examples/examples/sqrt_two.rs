//! # Comparing the Three Methods
//!
//! Runs bisection, Newton-Raphson, and the secant method on the same
//! function, `f(x) = x^2 - 2`, and prints each solver's iterate and error
//! history followed by a summary line.
//!
//! Long histories are truncated to their first and last few rows; the
//! solvers themselves place no limit on history length.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example sqrt_two
//! ```

use zeroin_solve::{ConvergenceReport, SolverConfig, bisection, newton_raphson, secant};

const SHOWN_ROWS: usize = 4;

fn print_report(report: &ConvergenceReport) {
    println!("=== {} ===", report.method);
    println!("{:>4}  {:>18}  {:>12}", "n", "p_n", "error");

    let rows: Vec<(usize, f64, f64)> = report
        .point_history
        .iter()
        .zip(&report.error_history)
        .enumerate()
        .map(|(i, (&p, &e))| (i + 1, p, e))
        .collect();

    if rows.len() > 2 * SHOWN_ROWS + 1 {
        for &(n, p, e) in &rows[..SHOWN_ROWS] {
            println!("{n:>4}  {p:>18.12}  {e:>12.2e}");
        }
        println!("{:>4}  {:>18}  {:>12}", "...", "...", "...");
        for &(n, p, e) in &rows[rows.len() - SHOWN_ROWS..] {
            println!("{n:>4}  {p:>18.12}  {e:>12.2e}");
        }
    } else {
        for &(n, p, e) in &rows {
            println!("{n:>4}  {p:>18.12}  {e:>12.2e}");
        }
    }

    println!(
        "root = {:.12} after {} iterations ({:?}): {}",
        report.root,
        report.iterations,
        report.elapsed,
        report.message()
    );
    println!();
}

fn main() -> Result<(), zeroin_solve::Error> {
    let f = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let config = SolverConfig {
        tolerance: 1e-8,
        ..SolverConfig::default()
    };

    print_report(&bisection::solve(f, [0.0, 2.0], &config)?);
    print_report(&newton_raphson::solve(f, df, 1.0, &config)?);
    print_report(&secant::solve(f, 1.0, 2.0, &config)?);

    Ok(())
}
