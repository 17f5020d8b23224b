use std::{array, fmt};

use crate::{
    error::{Error, Result},
    traits::{Number, One, Zero},
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] fills a matrix from an array of rows.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - For square matrices, [`Matrix::from_diagonal`] creates a matrix with a specified diagonal
///   and zero outside of it.
/// - [`Matrix::ZERO`] is a matrix with every element set to 0, and [`Matrix::IDENTITY`] is a
///   square matrix with 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`.
/// The first element of the tuple is the *row*, the second is the *column*, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use lumen_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`]
/// and [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use lumen_linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat[(1, 0)], 2);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.map(|i| i * 2), Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns the rows of this matrix as a nested array.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector
    /// with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut grid = [[T::ZERO; C]; R];
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            grid[i][i] = T::ONE;
            i += 1;
        }
        Self(grid)
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal(diag: [T; N]) -> Self
    where
        T: Zero + Copy,
    {
        let mut this = Self::ZERO;
        for (i, elem) in diag.into_iter().enumerate() {
            this[(i, i)] = elem;
        }
        this
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Inverts this 2x2 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if `self` is not invertible (ie. if its
    /// [`determinant()`] is zero).
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(Mat2d::IDENTITY.invert(), Ok(Mat2d::IDENTITY));
    /// assert!(Mat2d::ZERO.invert().is_err());
    /// ```
    pub fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return Err(Error::SingularMatrix);
        }

        let [[a, b], [c, d]] = self.0;
        Ok(Matrix::from_rows([[d, -b], [-c, a]]) * (T::ONE / det))
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the 2x2 matrix obtained by deleting `row` and `col` from `self`.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix<T, 2, 2> {
        Matrix::from_fn(|r, c| {
            let r = if r < row { r } else { r + 1 };
            let c = if c < col { c } else { c + 1 };
            self[(r, c)]
        })
    }

    /// Returns the [minor] of the element at `(row, col)`: the determinant of its
    /// [submatrix][Self::submatrix].
    ///
    /// [minor]: https://en.wikipedia.org/wiki/Minor_(linear_algebra)
    pub fn minor(&self, row: usize, col: usize) -> T {
        self.submatrix(row, col).determinant()
    }

    /// Returns the cofactor of the element at `(row, col)` (the sign-adjusted minor).
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Returns the [determinant] of the matrix, expanded along its first row.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        (0..3).fold(T::ZERO, |acc, col| {
            acc + self[(0, col)] * self.cofactor(0, col)
        })
    }

    /// Inverts this 3x3 matrix via its adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if `self` is not invertible (ie. if its
    /// [`determinant()`] is zero).
    ///
    /// [`determinant()`]: Self::determinant
    pub fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return Err(Error::SingularMatrix);
        }

        // Transposed on purpose: the adjugate is the transpose of the cofactor matrix.
        Ok(Self::from_fn(|row, col| self.cofactor(col, row) / det))
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Returns the 3x3 matrix obtained by deleting `row` and `col` from `self`.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix<T, 3, 3> {
        Matrix::from_fn(|r, c| {
            let r = if r < row { r } else { r + 1 };
            let c = if c < col { c } else { c + 1 };
            self[(r, c)]
        })
    }

    /// Returns the [minor] of the element at `(row, col)`: the determinant of its
    /// [submatrix][Self::submatrix].
    ///
    /// [minor]: https://en.wikipedia.org/wiki/Minor_(linear_algebra)
    pub fn minor(&self, row: usize, col: usize) -> T {
        self.submatrix(row, col).determinant()
    }

    /// Returns the cofactor of the element at `(row, col)` (the sign-adjusted minor).
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Returns the [determinant] of the matrix, expanded along its first row.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, col| {
            acc + self[(0, col)] * self.cofactor(0, col)
        })
    }

    /// Inverts this 4x4 matrix via its adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if `self` is not invertible (ie. if its
    /// [`determinant()`] is zero).
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 0.0, 0.0, 0.0],
    ///     [0.0, 4.0, 0.0, 0.0],
    ///     [0.0, 0.0, 8.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_approx_eq!(mat.invert().unwrap() * mat, Mat4d::IDENTITY);
    /// ```
    pub fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return Err(Error::SingularMatrix);
        }

        // Transposed on purpose: the adjugate is the transpose of the cofactor matrix.
        Ok(Self::from_fn(|row, col| self.cofactor(col, row) / det))
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem:?}")?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}
