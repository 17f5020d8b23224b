//! Implementations of `std::ops`.

use std::ops::{Index, IndexMut, Mul};

use crate::{approx::ApproxEq, traits::Number, Matrix};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }
}

/// Matrix * Column Vector (as an array).
impl<T, const R: usize, const C: usize> Mul<[T; C]> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = [T; R];

    fn mul(self, rhs: [T; C]) -> Self::Output {
        std::array::from_fn(|row| {
            (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col])
        })
    }
}

/// Matrix * Matrix.
///
/// The inner dimensions must agree; mismatched shapes fail to compile.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(mat * [4, 5], [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn mul_by_identity() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [0, 1,  2,  4],
            [1, 2,  4,  8],
            [2, 4,  8, 16],
            [4, 8, 16, 32],
        ]);
        assert_eq!(mat * Matrix::IDENTITY, mat);
        assert_eq!(Matrix::IDENTITY * mat, mat);
        assert_eq!(Matrix::<i32, 4, 4>::IDENTITY * [1, 2, 3, 4], [1, 2, 3, 4]);
    }

    #[test]
    fn approx_eq_per_cell() {
        use crate::{assert_approx_eq, assert_approx_ne, approx::EPSILON, Mat2d};

        let a = Mat2d::IDENTITY;
        let mut b = a;
        b[(1, 0)] += EPSILON / 2.0;
        assert_approx_eq!(a, b);
        b[(1, 0)] += 2.0 * EPSILON;
        assert_approx_ne!(a, b);
    }
}
