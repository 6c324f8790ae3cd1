//! Example applications for the zeroin root-finding solvers.
//!
//! The runnable demos live in this package's `examples/` directory:
//!
//! ```sh
//! cargo run --example sqrt_two
//! cargo run --example kepler
//! ```
