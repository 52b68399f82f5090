#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `kornia-layout` holds the index arithmetic every strided tensor is built on:
//! row-major strides from a shape, the mapping between a linear offset and a
//! coordinate, and axis permutation of shape and strides arrays. All functions
//! are pure over caller-owned slices, except [`permute_in_place`] which
//! rewrites the slices it is given.
//!
//! # Quick Start
//!
//! ```rust
//! use kornia_layout::{itol, ltoi, permute, Shape};
//!
//! let shape = Shape::from([2, 3, 4]);
//! let strides = shape.calc_strides();
//! assert_eq!(strides, vec![12, 4, 1]);
//!
//! let offset = ltoi(&shape, &strides, &[1, 2, 3]).unwrap();
//! assert_eq!(offset, 23);
//! assert_eq!(itol(offset, &shape, &strides).unwrap(), vec![1, 2, 3]);
//!
//! // swap the first two axes without touching the data
//! let res = permute(&[1, 0, 2], &[&shape[..], &strides[..]]).unwrap();
//! assert_eq!(res.arrays[0], vec![3, 2, 4]);
//! assert_eq!(res.arrays[1], vec![4, 12, 1]);
//! ```
//!
//! # Identity permutations
//!
//! An identity pattern is valid and is reported as [`PermuteKind::NoOp`] next to
//! the (unchanged) results, so callers can skip work without treating it as an
//! error.

/// Integer quotient and remainder.
pub mod divmod;

/// Error types for layout operations.
///
/// Defines [`LayoutError`] and its category [`LayoutErrorKind`].
pub mod error;

/// Conversion between linear offsets and coordinates.
pub mod index;

/// Axis permutation of shape and strides arrays.
pub mod permute;

/// The [`Shape`] value type.
pub mod shape;

/// Row-major stride computation.
pub mod strides;

pub use crate::divmod::divmod;
pub use crate::error::{LayoutError, LayoutErrorKind};
pub use crate::index::{itol, ltoi};
pub use crate::permute::{
    is_identity, permute, permute_in_place, validate_permutation, PermuteKind, Permuted,
};
pub use crate::shape::Shape;
pub use crate::strides::{calc_strides, is_standard_layout};
