//! Colors and their 8-bit quantization.

use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

use crate::approx::ApproxEq;

/// An RGB color with [`f64`] channels.
///
/// Channels are conceptually in `[0, 1]` but are *not* clamped: intermediate results of
/// lighting computations may leave the range freely. Clamping happens only at the I/O boundary,
/// when a color is quantized with [`Color::to_rgb8`], so repeated blending does not compound
/// quantization error.
#[derive(Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

unsafe impl bytemuck::Zeroable for Color {}
unsafe impl bytemuck::Pod for Color {}

/// Constructs a [`Color`] from its channels.
#[inline]
pub const fn color(r: f64, g: f64, b: f64) -> Color {
    Color { r, g, b }
}

/// A quantized 8-bit-per-channel color, ready for image output.
///
/// This is the only datum the canvas/export layer needs from the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

unsafe impl bytemuck::Zeroable for Rgb8 {}
unsafe impl bytemuck::Pod for Rgb8 {}

impl Color {
    /// Black (all channels zero).
    pub const BLACK: Self = color(0.0, 0.0, 0.0);
    /// White (all channels one).
    pub const WHITE: Self = color(1.0, 1.0, 1.0);

    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        color(r, g, b)
    }

    /// Quantizes each channel to 8 bits for output.
    ///
    /// Each channel is mapped via `clamp(truncate(c * 255.999), 0, 255)`: the `255.999`
    /// multiplier makes a channel value of exactly 1.0 land on 255 while distributing the
    /// remaining values evenly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let quantized = color(1.0, 0.8, 0.6).to_rgb8();
    /// assert_eq!(quantized, Rgb8 { r: 255, g: 204, b: 153 });
    /// ```
    pub fn to_rgb8(self) -> Rgb8 {
        // An `as` cast truncates towards zero and saturates, which is exactly the
        // quantization rule.
        fn quantize(channel: f64) -> u8 {
            (channel * 255.999) as u8
        }

        Rgb8 {
            r: quantize(self.r),
            g: quantize(self.g),
            b: quantize(self.b),
        }
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        color(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        color(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

/// Scales each channel.
impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        color(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

/// Scales each channel (commuted).
impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

/// The Hadamard (componentwise) product, used for blending a surface color with a light color.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        color(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl ApproxEq for Color {
    type Tolerance = f64;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        [self.r, self.g, self.b].abs_diff_eq(&[other.r, other.g, other.b], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        [self.r, self.g, self.b].rel_diff_eq(&[other.r, other.g, other.b], rel_tolerance)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color({:?}, {:?}, {:?})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn arithmetic() {
        let a = color(0.9, 0.6, 0.75);
        let b = color(0.7, 0.1, 0.25);
        assert_approx_eq!(a + b, color(1.6, 0.7, 1.0));
        assert_approx_eq!(a - b, color(0.2, 0.5, 0.5));
        assert_approx_eq!(color(0.2, 0.3, 0.4) * 2.0, color(0.4, 0.6, 0.8));
        assert_approx_eq!(2.0 * color(0.2, 0.3, 0.4), color(0.4, 0.6, 0.8));
    }

    #[test]
    fn hadamard_product() {
        let a = color(1.0, 0.2, 0.4);
        let b = color(0.9, 1.0, 0.1);
        assert_approx_eq!(a * b, color(0.9, 0.2, 0.04));
    }

    #[test]
    fn quantize() {
        assert_eq!(color(1.0, 0.8, 0.6).to_rgb8(), Rgb8 { r: 255, g: 204, b: 153 });
        assert_eq!(Color::BLACK.to_rgb8(), Rgb8 { r: 0, g: 0, b: 0 });
        assert_eq!(Color::WHITE.to_rgb8(), Rgb8 { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn quantize_clamps_out_of_range() {
        assert_eq!(color(1.5, -0.5, 2.0).to_rgb8(), Rgb8 { r: 255, g: 0, b: 255 });
        assert_eq!(color(f64::NAN, 0.0, 0.0).to_rgb8().r, 0);
    }

    #[test]
    fn quantize_truncates_towards_zero() {
        // 0.5 * 255.999 = 127.9995, which truncates to 127 rather than rounding to 128.
        assert_eq!(color(0.5, 0.5, 0.5).to_rgb8(), Rgb8 { r: 127, g: 127, b: 127 });
    }
}
