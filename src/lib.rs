//! Dense direct solver for square linear systems
//!
//! Solves `Ax = b` by Gaussian elimination with partial pivoting:
//! - [`gauss_solve`]: solve with the default (strict-zero) pivot check
//! - [`gauss_solve_with`]: solve with a configurable near-singularity threshold
//!
//! The element type is an explicit choice via [`RealScalar`] (`f64` or `f32`);
//! residual tolerances should scale with the chosen precision.
//!
//! # Example
//!
//! ```
//! use math_gauss::gauss_solve;
//! use ndarray::array;
//!
//! let a = array![[2.0_f64, -1.0, 1.0], [3.0, 2.0, -4.0], [1.0, 1.0, 1.0]];
//! let b = array![1.0_f64, 2.0, 3.0];
//!
//! let x = gauss_solve(&a, &b).unwrap();
//!
//! let residual = a.dot(&x) - &b;
//! assert!(residual.iter().all(|r| r.abs() < 1e-12));
//! ```

pub mod direct;
pub mod traits;

pub use direct::{GaussConfig, GaussError, gauss_solve, gauss_solve_with};
pub use traits::RealScalar;
