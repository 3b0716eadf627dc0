//! Core compute primitive (Matrix).
//!
//! The safe, shape-validated face of the flat kernel.

mod matrix;

pub use matrix::Matrix;
