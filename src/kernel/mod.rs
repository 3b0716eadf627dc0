//! Flat-buffer compute kernel.
//!
//! Operates directly on row-major `f64` slices with caller-declared
//! dimensions. The safe [`Matrix`](crate::primitives::Matrix) wrapper
//! validates shapes before delegating here.

mod dense;

pub use dense::{add, div, invert, matmul, sub, PIVOT_THRESHOLD};
