//! Matriz: dense matrix arithmetic primitives in pure Rust.
//!
//! Matriz provides a small, immutable, row-major matrix type together with
//! a map/fold traversal engine, the standard element-wise and scalar
//! algebra, matrix products, and determinants by recursive cofactor
//! expansion. It targets callers who need basic matrix math without a full
//! linear-algebra suite: no decompositions, no sparse storage, no SIMD.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 3, vec![
//!     1.0, 2.0, 3.0,
//!     4.0, 5.0, 6.0,
//! ]).unwrap();
//! let b = Matrix::from_vec(3, 2, vec![
//!     7.0, 8.0,
//!     9.0, 10.0,
//!     11.0, 12.0,
//! ]).unwrap();
//!
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product.shape(), (2, 2));
//! assert_eq!(product.get(0, 0), 58.0);
//!
//! // Every element-wise operation is one traversal of the grid.
//! let doubled = a.map(|v, _, _| v * 2.0);
//! assert_eq!(doubled.sum(), 42.0);
//!
//! let det = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
//!     .unwrap()
//!     .det()
//!     .unwrap();
//! assert_eq!(det, -2.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: The core Matrix type, traversal engine, and algorithms
//! - [`error`]: Error types and the crate-wide Result alias
//! - [`prelude`]: Convenience re-exports
//!
//! # Design
//!
//! - Matrices never mutate after construction: every transform allocates a
//!   fresh result, so sharing an instance across readers is always safe.
//! - Traversal order is deterministic row-major for both map and fold.
//! - The determinant keeps the naive cofactor expansion (exponential in
//!   the dimension, recursion depth equal to the dimension) rather than a
//!   numerically stable decomposition; results on singular or
//!   ill-conditioned matrices follow the expansion exactly.

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::Matrix;
