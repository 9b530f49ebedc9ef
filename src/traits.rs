//! Scalar abstraction for the dense solver
//!
//! [`RealScalar`] pins down which floating-point types can serve as matrix
//! elements. Picking `f64` or `f32` is an explicit caller decision; the
//! achievable residual accuracy follows from that choice.

use num_traits::{Float, NumAssign};
use std::fmt::Debug;

/// Trait for real scalar types usable as matrix and vector elements.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (the default choice for well-conditioned accuracy)
/// - `f32` (for memory-constrained callers that accept wider tolerances)
pub trait RealScalar: Float + NumAssign + Debug + Send + Sync + 'static {}

impl RealScalar for f64 {}

impl RealScalar for f32 {}
