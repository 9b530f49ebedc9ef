//! Direct solvers for dense linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`gauss_solve`]: Gaussian elimination with partial pivoting
//! - [`gauss_solve_with`]: same, with a configurable pivot tolerance

mod gauss;

pub use gauss::{GaussConfig, GaussError, gauss_solve, gauss_solve_with};
