//! Validated affine transformations.

use std::{fmt, ops::Mul};

use crate::{
    approx::ApproxEq,
    error::{Error, Result},
    tuple::{Point, Tuple, Vector},
    Mat4d, Matrix,
};

/// An affine 3D transformation, represented as a 4x4 matrix with bottom row `[0, 0, 0, 1]`.
///
/// The bottom-row invariant is what preserves the [`Point`]/[`Vector`] distinction under
/// application: points (w = 1) pick up the translation column, vectors (w = 0) do not. It is
/// checked by [`Transform::new`], so every `Transform` in existence is a valid affine map. The
/// linear block may be anything invertible: rotations, shears and scales are all fine.
///
/// # Composition
///
/// The builder methods right-multiply an elementary matrix onto the current one and return a
/// new `Transform`, so chained calls read in application order for the object's local frame:
///
/// ```
/// # use lumen_linalg::*;
/// let t = Transform::IDENTITY.translate(5.0, -3.0, 2.0);
/// assert_eq!(t * point(-3.0, 4.0, 5.0), point(2.0, 1.0, 7.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Transform {
    mat: Mat4d,
}

impl Transform {
    /// The identity transformation, which leaves points and vectors unchanged.
    pub const IDENTITY: Self = Self {
        mat: Mat4d::IDENTITY,
    };

    /// Creates a transformation from a raw 4x4 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransform`] if the bottom row of `mat` is not exactly
    /// `[0, 0, 0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert!(Transform::new(Mat4d::IDENTITY).is_ok());
    /// assert!(Transform::new(Mat4d::ZERO).is_err());
    /// ```
    pub fn new(mat: Mat4d) -> Result<Self> {
        let [_, _, _, bottom] = mat.into_rows();
        if bottom != [0.0, 0.0, 0.0, 1.0] {
            return Err(Error::InvalidTransform);
        }
        Ok(Self { mat })
    }

    /// The underlying 4x4 matrix.
    #[inline]
    pub fn matrix(&self) -> &Mat4d {
        &self.mat
    }

    /// Consumes the transformation, returning the underlying 4x4 matrix.
    #[inline]
    pub fn into_matrix(self) -> Mat4d {
        self.mat
    }

    /// Composes `elem` onto the current matrix in the local frame.
    ///
    /// `elem` must itself be affine so that the product stays affine.
    fn then(self, elem: Mat4d) -> Self {
        Self {
            mat: self.mat * elem,
        }
    }

    /// Appends a translation by `(dx, dy, dz)`.
    ///
    /// Translation moves points but leaves vectors unchanged (their `w` is 0).
    pub fn translate(self, dx: f64, dy: f64, dz: f64) -> Self {
        self.then(Matrix::from_rows([
            [1.0, 0.0, 0.0, dx],
            [0.0, 1.0, 0.0, dy],
            [0.0, 0.0, 1.0, dz],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Appends a scaling by `(sx, sy, sz)`.
    pub fn scale(self, sx: f64, sy: f64, sz: f64) -> Self {
        self.then(Matrix::from_diagonal([sx, sy, sz, 1.0]))
    }

    /// Appends a rotation of `radians` around the X axis (right-handed).
    pub fn rotate_x(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        self.then(Matrix::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Appends a rotation of `radians` around the Y axis (right-handed).
    pub fn rotate_y(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        self.then(Matrix::from_rows([
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Appends a rotation of `radians` around the Z axis (right-handed).
    pub fn rotate_z(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        self.then(Matrix::from_rows([
            [cos, -sin, 0.0, 0.0],
            [sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Appends a shear in which each coordinate is moved in proportion to the other two.
    ///
    /// `xy` is the proportion of `y` added to `x`, `xz` the proportion of `z` added to `x`, and
    /// so on.
    pub fn shear(self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        self.then(Matrix::from_rows([
            [1.0, xy, xz, 0.0],
            [yx, 1.0, yz, 0.0],
            [zx, zy, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Inverts this transformation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the linear block is not invertible (eg. a scale
    /// by zero).
    pub fn invert(&self) -> Result<Self> {
        let mut mat = self.mat.invert()?;
        // The inverse of an affine matrix is affine, but the adjugate computation can leave the
        // bottom row a few ULPs off `[0, 0, 0, 1]`. Snap it back so the invariant holds exactly.
        for col in 0..3 {
            mat[(3, col)] = 0.0;
        }
        mat[(3, 3)] = 1.0;
        Ok(Self { mat })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Composition: `(a * b) * p` equals `a * (b * p)`.
impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.then(rhs.mat)
    }
}

impl Mul<Point> for Transform {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        self.mat * rhs
    }
}

impl Mul<Vector> for Transform {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        self.mat * rhs
    }
}

impl Mul<Tuple> for Transform {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        self.mat * rhs
    }
}

impl ApproxEq for Transform {
    type Tolerance = f64;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        self.mat.abs_diff_eq(&other.mat, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        self.mat.rel_diff_eq(&other.mat, rel_tolerance)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transform").field(&self.mat).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use crate::{assert_approx_eq, point, vector};

    use super::*;

    #[test]
    fn new_requires_affine_bottom_row() {
        assert_eq!(Transform::new(Mat4d::ZERO), Err(Error::InvalidTransform));

        #[rustfmt::skip]
        let not_affine = Matrix::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.1, 1.0],
        ]);
        assert_eq!(Transform::new(not_affine), Err(Error::InvalidTransform));

        // An arbitrary linear block is fine; the off-diagonal entries of a rotation must not be
        // rejected.
        let rotation = Transform::IDENTITY.rotate_z(1.0).into_matrix();
        assert!(Transform::new(rotation).is_ok());
    }

    #[test]
    fn translate_point() {
        let t = Transform::IDENTITY.translate(5.0, -3.0, 2.0);
        assert_eq!(t * point(-3.0, 4.0, 5.0), point(2.0, 1.0, 7.0));
        assert_eq!(t.invert().unwrap() * point(-3.0, 4.0, 5.0), point(-8.0, 7.0, 3.0));
    }

    #[test]
    fn translate_does_not_affect_vectors() {
        let t = Transform::IDENTITY.translate(5.0, -3.0, 2.0);
        assert_eq!(t * vector(-3.0, 4.0, 5.0), vector(-3.0, 4.0, 5.0));
    }

    #[test]
    fn scale() {
        let t = Transform::IDENTITY.scale(2.0, 3.0, 4.0);
        assert_eq!(t * point(-4.0, 6.0, 8.0), point(-8.0, 18.0, 32.0));
        assert_eq!(t * vector(-4.0, 6.0, 8.0), vector(-8.0, 18.0, 32.0));
        assert_eq!(t.invert().unwrap() * vector(-4.0, 6.0, 8.0), vector(-2.0, 2.0, 2.0));

        // Reflection is scaling by a negative value.
        let t = Transform::IDENTITY.scale(-1.0, 1.0, 1.0);
        assert_eq!(t * point(2.0, 3.0, 4.0), point(-2.0, 3.0, 4.0));
    }

    #[test]
    fn rotate() {
        let eighth = Transform::IDENTITY.rotate_x(TAU / 8.0);
        let quarter = Transform::IDENTITY.rotate_x(TAU / 4.0);
        let sqrt2_half = 2.0_f64.sqrt() / 2.0;
        assert_approx_eq!(eighth * point(0.0, 1.0, 0.0), point(0.0, sqrt2_half, sqrt2_half));
        assert_approx_eq!(quarter * point(0.0, 1.0, 0.0), point(0.0, 0.0, 1.0));

        let quarter = Transform::IDENTITY.rotate_y(TAU / 4.0);
        assert_approx_eq!(quarter * point(0.0, 0.0, 1.0), point(1.0, 0.0, 0.0));

        let quarter = Transform::IDENTITY.rotate_z(TAU / 4.0);
        assert_approx_eq!(quarter * point(0.0, 1.0, 0.0), point(-1.0, 0.0, 0.0));
    }

    #[test]
    fn rotate_inverse_rotates_backwards() {
        let eighth = Transform::IDENTITY.rotate_x(TAU / 8.0);
        let sqrt2_half = 2.0_f64.sqrt() / 2.0;
        assert_approx_eq!(
            eighth.invert().unwrap() * point(0.0, 1.0, 0.0),
            point(0.0, sqrt2_half, -sqrt2_half)
        );
    }

    #[test]
    fn shear() {
        let t = Transform::IDENTITY.shear(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(t * point(2.0, 3.0, 4.0), point(5.0, 3.0, 4.0));

        let t = Transform::IDENTITY.shear(0.0, 1.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(t * point(2.0, 3.0, 4.0), point(6.0, 3.0, 4.0));

        let t = Transform::IDENTITY.shear(0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
        assert_eq!(t * point(2.0, 3.0, 4.0), point(2.0, 5.0, 4.0));

        let t = Transform::IDENTITY.shear(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        assert_eq!(t * point(2.0, 3.0, 4.0), point(2.0, 7.0, 4.0));

        let t = Transform::IDENTITY.shear(0.0, 0.0, 0.0, 0.0, 1.0, 0.0);
        assert_eq!(t * point(2.0, 3.0, 4.0), point(2.0, 3.0, 6.0));

        let t = Transform::IDENTITY.shear(0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(t * point(2.0, 3.0, 4.0), point(2.0, 3.0, 7.0));
    }

    #[test]
    fn chaining_applies_in_sequence() {
        let p = point(1.0, 0.0, 1.0);

        // Individual steps.
        let a = Transform::IDENTITY.rotate_x(TAU / 4.0);
        let b = Transform::IDENTITY.scale(5.0, 5.0, 5.0);
        let c = Transform::IDENTITY.translate(10.0, 5.0, 7.0);
        let p2 = a * p;
        assert_approx_eq!(p2, point(1.0, -1.0, 0.0));
        let p3 = b * p2;
        assert_approx_eq!(p3, point(5.0, -5.0, 0.0));
        let p4 = c * p3;
        assert_approx_eq!(p4, point(15.0, 0.0, 7.0));

        // The same pipeline as one chain: operations compose in local frames, so the chain is
        // written innermost-first.
        let chained = Transform::IDENTITY
            .translate(10.0, 5.0, 7.0)
            .scale(5.0, 5.0, 5.0)
            .rotate_x(TAU / 4.0);
        assert_approx_eq!(chained * p, point(15.0, 0.0, 7.0));

        // Composition of the individual transforms matches the chain.
        assert_approx_eq!(c * b * a, chained);
    }

    #[test]
    fn chaining_order_matters() {
        let p = point(1.0, 1.0, 1.0);

        // translate applied last vs. first.
        let scale_then_translate = Transform::IDENTITY.translate(10.0, 0.0, 0.0).scale(2.0, 2.0, 2.0);
        let translate_then_scale = Transform::IDENTITY.scale(2.0, 2.0, 2.0).translate(10.0, 0.0, 0.0);
        assert_eq!(scale_then_translate * p, point(12.0, 2.0, 2.0));
        assert_eq!(translate_then_scale * p, point(22.0, 2.0, 2.0));
    }

    #[test]
    fn invert_singular_scale() {
        let t = Transform::IDENTITY.scale(0.0, 1.0, 1.0);
        assert_eq!(t.invert(), Err(Error::SingularMatrix));
    }

    #[test]
    fn invert_keeps_exact_affine_bottom_row() {
        // Rotations and shears make the cofactor arithmetic cancel inexactly; the inverse must
        // still satisfy the bottom-row invariant under exact equality.
        let t = Transform::IDENTITY
            .translate(1.0, 2.0, 3.0)
            .rotate_x(0.7)
            .rotate_y(0.3)
            .scale(1.5, 2.5, 3.5)
            .shear(0.2, 0.0, 0.1, 0.0, 0.0, 0.3);
        let inv = t.invert().unwrap();

        let [_, _, _, bottom] = inv.into_matrix().into_rows();
        assert_eq!(bottom, [0.0, 0.0, 0.0, 1.0]);
        assert!(Transform::new(inv.into_matrix()).is_ok());
    }

    #[test]
    fn invert_round_trip() {
        let t = Transform::IDENTITY
            .translate(1.0, 2.0, 3.0)
            .rotate_y(0.5)
            .scale(2.0, 2.0, 2.0)
            .shear(0.0, 0.5, 0.0, 0.0, 0.0, 0.0);
        let inv = t.invert().unwrap();
        assert_approx_eq!(inv * t, Transform::IDENTITY);

        let p = point(3.0, -4.0, 5.0);
        assert_approx_eq!(inv * (t * p), p);
    }
}
