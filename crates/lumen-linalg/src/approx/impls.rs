use super::ApproxEq;

impl ApproxEq for f32 {
    type Tolerance = Self;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() <= abs_tolerance
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        if !self.is_finite() || !other.is_finite() {
            return self == other;
        }

        let abs_diff = (self - other).abs();
        let largest = Self::max(self.abs(), other.abs());

        abs_diff <= largest * rel_tolerance
    }
}

impl ApproxEq for f64 {
    type Tolerance = Self;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() <= abs_tolerance
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        if !self.is_finite() || !other.is_finite() {
            return self == other;
        }

        let abs_diff = (self - other).abs();
        let largest = Self::max(self.abs(), other.abs());

        abs_diff <= largest * rel_tolerance
    }
}

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &U, rel_tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::abs_diff_eq(a, b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::rel_diff_eq(a, b, rel_tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }
}
