//! Homogeneous points and vectors.
//!
//! Positions and directions are kept as distinct types: a [`Point`] is a location in space
//! (homogeneous coordinate `w = 1`), a [`Vector`] is a displacement (`w = 0`). The operator
//! impls only exist for the geometrically meaningful combinations, so adding two points or
//! scaling a point does not compile. When the variant of a value is only known at runtime, the
//! [`Tuple`] union dispatches the same rules with fallible methods instead.

use std::fmt;

use crate::error::{Error, Result};

mod ops;

/// A position in 3D space.
///
/// `Point` is a homogeneous 4-tuple whose `w` component is fixed at 1 by construction; it is
/// not stored.
#[derive(Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

unsafe impl bytemuck::Zeroable for Point {}
unsafe impl bytemuck::Pod for Point {}

/// A direction or displacement in 3D space.
///
/// `Vector` is a homogeneous 4-tuple whose `w` component is fixed at 0 by construction; it is
/// not stored. The difference of two [`Point`]s is a `Vector`.
#[derive(Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

unsafe impl bytemuck::Zeroable for Vector {}
unsafe impl bytemuck::Pod for Vector {}

/// Constructs a [`Point`] from its coordinates.
#[inline]
pub const fn point(x: f64, y: f64, z: f64) -> Point {
    Point { x, y, z }
}

/// Constructs a [`Vector`] from its components.
#[inline]
pub const fn vector(x: f64, y: f64, z: f64) -> Vector {
    Vector { x, y, z }
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = point(0.0, 0.0, 0.0);

    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        point(x, y, z)
    }

    /// Returns the homogeneous representation of this point, `[x, y, z, 1]`.
    #[inline]
    pub const fn to_homogeneous(self) -> [f64; 4] {
        [self.x, self.y, self.z, 1.0]
    }
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = vector(0.0, 0.0, 0.0);
    /// A unit vector pointing in the X direction.
    pub const X: Self = vector(1.0, 0.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vector(0.0, 1.0, 0.0);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = vector(0.0, 0.0, 1.0);

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        vector(x, y, z)
    }

    /// Returns the homogeneous representation of this vector, `[x, y, z, 0]`.
    #[inline]
    pub const fn to_homogeneous(self) -> [f64; 4] {
        [self.x, self.y, self.z, 0.0]
    }

    /// Returns the squared length of this vector.
    pub fn magnitude2(self) -> f64 {
        self.dot(self)
    }

    /// Returns the length (Euclidean norm) of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_approx_eq!(vector(1.0, 2.0, 3.0).magnitude(), 14.0_f64.sqrt());
    /// assert_eq!(Vector::Y.magnitude(), 1.0);
    /// ```
    pub fn magnitude(self) -> f64 {
        self.magnitude2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for the zero vector, which has no direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(vector(4.0, 0.0, 0.0).normalize(), Ok(vector(1.0, 0.0, 0.0)));
    /// assert!(Vector::ZERO.normalize().is_err());
    /// ```
    pub fn normalize(self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self / magnitude)
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative angle of the two
    /// vectors: it is positive for angles below 90°, zero at exactly 90°, and negative beyond.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(vector(1.0, 2.0, 3.0).dot(vector(2.0, 3.0, 4.0)), 20.0);
    /// assert_eq!(Vector::X.dot(Vector::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector perpendicular to both `self` and `other`. Its direction depends on
    /// the order of the arguments: swapping them inverts the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(Vector::X.cross(Vector::Y), Vector::Z);
    /// assert_eq!(Vector::Y.cross(Vector::X), -Vector::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

/// A homogeneous tuple whose variant is only known at runtime.
///
/// Most code should use [`Point`] and [`Vector`] directly and get the arithmetic rules checked
/// at compile time. `Tuple` exists for the cases where a value may be either variant (scene
/// input, results of raw 4x4 products) and dispatches the same rules at runtime:
///
/// | left   | op      | right  | result                        |
/// |--------|---------|--------|-------------------------------|
/// | Point  | `add`   | Vector | Point                         |
/// | Point  | `add`   | Point  | [`Error::InvalidVariantOperation`] |
/// | Vector | `add`   | Vector | Vector                        |
/// | Vector | `add`   | Point  | Point                         |
/// | Point  | `sub`   | Vector | Point                         |
/// | Point  | `sub`   | Point  | Vector (the displacement)     |
/// | Vector | `sub`   | Vector | Vector                        |
/// | Vector | `sub`   | Point  | [`Error::InvalidVariantOperation`] |
/// | Point  | `mul`/`div` | scalar | [`Error::InvalidVariantOperation`] |
/// | Vector | `mul`/`div` | scalar | Vector                    |
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tuple {
    /// A position (`w = 1`).
    Point(Point),
    /// A direction (`w = 0`).
    Vector(Vector),
}

impl Tuple {
    /// The `x` component.
    pub fn x(&self) -> f64 {
        match self {
            Tuple::Point(p) => p.x,
            Tuple::Vector(v) => v.x,
        }
    }

    /// The `y` component.
    pub fn y(&self) -> f64 {
        match self {
            Tuple::Point(p) => p.y,
            Tuple::Vector(v) => v.y,
        }
    }

    /// The `z` component.
    pub fn z(&self) -> f64 {
        match self {
            Tuple::Point(p) => p.z,
            Tuple::Vector(v) => v.z,
        }
    }

    /// The homogeneous `w` component: 1 for points, 0 for vectors.
    pub fn w(&self) -> f64 {
        match self {
            Tuple::Point(_) => 1.0,
            Tuple::Vector(_) => 0.0,
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Tuple::Point(_) => "a point",
            Tuple::Vector(_) => "a vector",
        }
    }

    /// Adds two tuples, dispatching on the pair of variants.
    ///
    /// # Errors
    ///
    /// Adding two points is undefined and reports [`Error::InvalidVariantOperation`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let sum = Tuple::Point(point(3.0, -2.0, 5.0))
    ///     .add(Tuple::Vector(vector(-2.0, 3.0, 1.0)))
    ///     .unwrap();
    /// assert_eq!(sum, Tuple::Point(point(1.0, 1.0, 6.0)));
    /// ```
    pub fn add(self, other: Self) -> Result<Self> {
        match (self, other) {
            (Tuple::Point(p), Tuple::Vector(v)) => Ok(Tuple::Point(p + v)),
            (Tuple::Vector(v), Tuple::Point(p)) => Ok(Tuple::Point(p + v)),
            (Tuple::Vector(a), Tuple::Vector(b)) => Ok(Tuple::Vector(a + b)),
            (Tuple::Point(_), Tuple::Point(_)) => Err(Error::InvalidVariantOperation {
                op: "add",
                lhs: self.variant_name(),
                rhs: other.variant_name(),
            }),
        }
    }

    /// Subtracts `other` from `self`, dispatching on the pair of variants.
    ///
    /// Subtracting two points yields the displacement [`Vector`] between them.
    ///
    /// # Errors
    ///
    /// Subtracting a point from a vector is undefined and reports
    /// [`Error::InvalidVariantOperation`].
    pub fn sub(self, other: Self) -> Result<Self> {
        match (self, other) {
            (Tuple::Point(p), Tuple::Vector(v)) => Ok(Tuple::Point(p - v)),
            (Tuple::Point(a), Tuple::Point(b)) => Ok(Tuple::Vector(a - b)),
            (Tuple::Vector(a), Tuple::Vector(b)) => Ok(Tuple::Vector(a - b)),
            (Tuple::Vector(_), Tuple::Point(_)) => Err(Error::InvalidVariantOperation {
                op: "subtract",
                lhs: self.variant_name(),
                rhs: other.variant_name(),
            }),
        }
    }

    /// Scales this tuple by `scalar`.
    ///
    /// # Errors
    ///
    /// Points are positions, not magnitudes, and cannot be scaled;
    /// [`Error::InvalidVariantOperation`] is reported for them.
    pub fn mul(self, scalar: f64) -> Result<Self> {
        match self {
            Tuple::Vector(v) => Ok(Tuple::Vector(v * scalar)),
            Tuple::Point(_) => Err(Error::InvalidVariantOperation {
                op: "scale",
                lhs: self.variant_name(),
                rhs: "a scalar",
            }),
        }
    }

    /// Divides this tuple by `scalar`.
    ///
    /// # Errors
    ///
    /// Reports [`Error::InvalidVariantOperation`] for points, regardless of the scalar, and
    /// [`Error::DivisionByZero`] when dividing a vector by zero.
    pub fn div(self, scalar: f64) -> Result<Self> {
        match self {
            Tuple::Vector(v) if scalar != 0.0 => Ok(Tuple::Vector(v * (1.0 / scalar))),
            Tuple::Vector(_) => Err(Error::DivisionByZero),
            Tuple::Point(_) => Err(Error::InvalidVariantOperation {
                op: "scale",
                lhs: self.variant_name(),
                rhs: "a scalar",
            }),
        }
    }

    /// Negates this tuple (scales it by -1).
    ///
    /// # Errors
    ///
    /// Like any scaling, this is undefined for points.
    pub fn neg(self) -> Result<Self> {
        self.mul(-1.0)
    }
}

impl From<Point> for Tuple {
    #[inline]
    fn from(point: Point) -> Self {
        Tuple::Point(point)
    }
}

impl From<Vector> for Tuple {
    #[inline]
    fn from(vector: Vector) -> Self {
        Tuple::Vector(vector)
    }
}
