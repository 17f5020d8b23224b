//! Operator impls for the legal [`Point`]/[`Vector`] combinations.
//!
//! Combinations without an impl here (point + point, vector - point, scaling a point) are
//! geometrically meaningless and fail to compile. The runtime-dispatched equivalents live on
//! [`Tuple`](super::Tuple).

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{approx::ApproxEq, Mat4d, Tuple};

use super::{point, vector, Point, Vector};

/// Translates the point by the vector.
impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        point(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Translates the point by the vector (commuted).
impl Add<Point> for Vector {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        rhs + self
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        vector(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Translates the point backwards along the vector.
impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        point(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// The displacement between two points: `a - b` is the vector leading from `b` to `a`.
impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        vector(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        vector(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Scales the vector componentwise.
impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        vector(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Scales the vector componentwise (commuted).
impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

/// Scales the vector by the reciprocal. Division by zero follows IEEE 754 (infinities); use
/// [`Tuple::div`] for the checked form.
impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        self * (1.0 / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self * -1.0
    }
}

impl ApproxEq for Point {
    type Tolerance = f64;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        [self.x, self.y, self.z].abs_diff_eq(&[other.x, other.y, other.z], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        [self.x, self.y, self.z].rel_diff_eq(&[other.x, other.y, other.z], rel_tolerance)
    }
}

impl ApproxEq for Vector {
    type Tolerance = f64;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        [self.x, self.y, self.z].abs_diff_eq(&[other.x, other.y, other.z], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        [self.x, self.y, self.z].rel_diff_eq(&[other.x, other.y, other.z], rel_tolerance)
    }
}

/// Tuples of different variants never compare equal, regardless of tolerance.
impl ApproxEq for Tuple {
    type Tolerance = f64;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        match (self, other) {
            (Tuple::Point(a), Tuple::Point(b)) => a.abs_diff_eq(b, abs_tolerance),
            (Tuple::Vector(a), Tuple::Vector(b)) => a.abs_diff_eq(b, abs_tolerance),
            _ => false,
        }
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        match (self, other) {
            (Tuple::Point(a), Tuple::Point(b)) => a.rel_diff_eq(b, rel_tolerance),
            (Tuple::Vector(a), Tuple::Vector(b)) => a.rel_diff_eq(b, rel_tolerance),
            _ => false,
        }
    }
}

/// Applies a 4x4 matrix to a point (multiplied as the column `[x, y, z, 1]`).
impl Mul<Point> for Mat4d {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        let [x, y, z, _] = self * rhs.to_homogeneous();
        point(x, y, z)
    }
}

/// Applies a 4x4 matrix to a vector (multiplied as the column `[x, y, z, 0]`).
impl Mul<Vector> for Mat4d {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        let [x, y, z, _] = self * rhs.to_homogeneous();
        vector(x, y, z)
    }
}

/// Applies a 4x4 matrix to either variant; the variant of the operand is preserved.
impl Mul<Tuple> for Mat4d {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        match rhs {
            Tuple::Point(p) => Tuple::Point(self * p),
            Tuple::Vector(v) => Tuple::Vector(self * v),
        }
    }
}
