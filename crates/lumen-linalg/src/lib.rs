//! The math kernel of the Lumen ray tracer.
//!
//! This crate provides the numerical substrate a ray tracer is built on: homogeneous points and
//! vectors, colors, fixed-size matrices with inversion, and composable affine transformations.
//! Everything above it (rays, shapes, shading, the canvas) consumes these types; the only thing
//! the crate hands to the image-export layer is the quantized [`Rgb8`] pixel.
//!
//! # Goals & Non-Goals
//!
//! - Keep positions and directions apart in the type system: a [`Point`] and a [`Vector`] are
//!   different things, and the operations that don't make sense between them (adding two
//!   points, scaling a point) do not compile. The [`Tuple`] union covers the cases where the
//!   variant is only known at runtime.
//! - Rely on const generics for matrix dimensions instead of dynamically-sized storage. The
//!   shapes a ray tracer needs are known at compile time, and mismatched products become type
//!   errors instead of runtime checks.
//! - Report contract violations as values: singular matrices, invalid affine matrices and
//!   division by zero surface as [`Error`]s, not panics.
//! - Compare geometry approximately, everywhere, with a single crate-wide
//!   [`EPSILON`][approx::EPSILON] (see the [`approx`] module).
//! - No dynamically-sized vectors or matrices, no SIMD, and no rendering functionality of any
//!   kind.

pub mod approx;
mod color;
mod error;
mod matrix;
mod traits;
mod transform;
mod tuple;

pub use color::*;
pub use error::*;
pub use matrix::*;
pub use traits::*;
pub use transform::*;
pub use tuple::*;
