//! Error reporting.

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the fallible geometry and matrix operations.
///
/// All of these are contract violations reported synchronously to the caller; none of them are
/// transient, and none are fatal to the process. The enum is `PartialEq` so callers (and tests)
/// can assert on the specific kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An arithmetic operation was applied to a [`Tuple`][crate::Tuple] pair (or a point and a
    /// scalar) for which it is undefined.
    #[error("cannot {op} {lhs} and {rhs}")]
    InvalidVariantOperation {
        /// Name of the attempted operation.
        op: &'static str,
        /// Variant name of the left operand.
        lhs: &'static str,
        /// Variant name of the right operand.
        rhs: &'static str,
    },

    /// Scalar division by zero, or normalization of the zero vector.
    #[error("division by zero")]
    DivisionByZero,

    /// The matrix has a zero determinant and cannot be inverted.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// The matrix handed to [`Transform::new`][crate::Transform::new] is not affine.
    #[error("matrix is not an affine transform (bottom row must be [0, 0, 0, 1])")]
    InvalidTransform,
}
