//! Matriz: dense matrix arithmetic over row-major `f64` buffers.
//!
//! Matriz provides four operations — addition, subtraction, multiplication,
//! and right-division (`A * B^-1` via Gauss-Jordan elimination with partial
//! pivoting) — in two layers: a flat [`kernel`] that works directly on
//! caller-sized buffers, and a shape-validated [`primitives::Matrix`] wrapper
//! that returns typed errors.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
//! let inv = a.inverse().unwrap();
//!
//! // M * M^-1 recovers the identity.
//! let prod = a.matmul(&inv).unwrap();
//! let identity = Matrix::eye(2);
//! for (p, e) in prod.as_slice().iter().zip(identity.as_slice()) {
//!     assert!((p - e).abs() < 1e-9);
//! }
//!
//! // Dividing by a singular matrix is a typed failure, never a panic.
//! let singular = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
//! assert!(a.div(&singular).is_err());
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the `Matrix` type with validated arithmetic
//! - [`kernel`]: flat-buffer operations that trust declared dimensions
//! - [`error`]: typed error enum and `Result` alias
//!
//! Every operation is pure and synchronous: inputs are read-only, each call
//! allocates its own output, and no state persists between calls.

pub mod error;
pub mod kernel;
pub mod prelude;
pub mod primitives;
