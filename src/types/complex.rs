// src/types/complex.rs

use super::fixed::Fixed;

/// Complex number over [`Fixed`] scalars, used for twiddle factors and the
/// running rotation of the butterfly stages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplexFixed<const FRAC: u32> {
    pub re: Fixed<FRAC>,
    pub im: Fixed<FRAC>,
}

impl<const FRAC: u32> ComplexFixed<FRAC> {
    #[inline]
    pub const fn new(re: Fixed<FRAC>, im: Fixed<FRAC>) -> Self {
        Self { re, im }
    }

    /// Returns the complex conjugate (a - bi)
    #[inline]
    pub fn conj(self) -> Self {
        ComplexFixed {
            re: self.re,
            im: -self.im,
        }
    }
}

use core::ops::{Add, Mul, Sub};

impl<const FRAC: u32> Add for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        ComplexFixed {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<const FRAC: u32> Sub for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        ComplexFixed {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

// Multiplication: ComplexFixed<F1> * ComplexFixed<F2> -> ComplexFixed<F1>
impl<const F1: u32, const F2: u32> Mul<ComplexFixed<F2>> for ComplexFixed<F1> {
    type Output = ComplexFixed<F1>;

    #[inline]
    fn mul(self, rhs: ComplexFixed<F2>) -> Self::Output {
        // (ac - bd)
        let re = (self.re * rhs.re) - (self.im * rhs.im);
        // (ad + bc)
        let im = (self.re * rhs.im) + (self.im * rhs.re);

        ComplexFixed { re, im }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition() {
        // (1 + 2i) + (3 + 4i) = (4 + 6i)
        let a = ComplexFixed::new(Fixed::<12>::from_int(1), Fixed::<12>::from_int(2));
        let b = ComplexFixed::new(Fixed::<12>::from_int(3), Fixed::<12>::from_int(4));

        let result = a + b;

        assert_eq!(result.re, Fixed::<12>::from_int(4));
        assert_eq!(result.im, Fixed::<12>::from_int(6));
    }

    #[test]
    fn test_subtraction_resulting_negative() {
        // (1 + 2i) - (3 + 5i) = (-2 - 3i)
        let a = ComplexFixed::new(Fixed::<12>::from_int(1), Fixed::<12>::from_int(2));
        let b = ComplexFixed::new(Fixed::<12>::from_int(3), Fixed::<12>::from_int(5));

        let result = a - b;

        assert_eq!(result.re, Fixed::<12>::from_int(-2));
        assert_eq!(result.im, Fixed::<12>::from_int(-3));
    }

    #[test]
    fn test_multiplication() {
        // (1 + 2i) * (3 + 4i) = (1*3 - 2*4) + (1*4 + 2*3)i = -5 + 10i
        let a = ComplexFixed::new(Fixed::<12>::from_int(1), Fixed::<12>::from_int(2));
        let b = ComplexFixed::new(Fixed::<12>::from_int(3), Fixed::<12>::from_int(4));

        let result = a * b;

        assert_eq!(result.re, Fixed::<12>::from_int(-5));
        assert_eq!(result.im, Fixed::<12>::from_int(10));
    }

    #[test]
    fn test_multiplication_by_i() {
        // (3 + 4i) * (0 + 1i) = -4 + 3i
        let a = ComplexFixed::new(Fixed::<12>::from_int(3), Fixed::<12>::from_int(4));
        let i = ComplexFixed::new(Fixed::<12>::from_int(0), Fixed::<12>::from_int(1));

        let result = a * i;

        assert_eq!(result.re, Fixed::<12>::from_int(-4));
        assert_eq!(result.im, Fixed::<12>::from_int(3));
    }

    #[test]
    fn test_multiplication_by_identity_is_exact() {
        // Rotation by (1, 0) must reproduce the operand bit-for-bit
        let one = ComplexFixed::new(Fixed::<12>::from_int(1), Fixed::<12>::zero());
        let q = ComplexFixed::new(Fixed::<12>::from_bits(12345), Fixed::<12>::from_bits(-6789));

        let result = q * one;

        assert_eq!(result, q);
    }

    #[test]
    fn test_mixed_precision_multiplication() {
        // (2 + 0i) [Q15] * (0.5 + 0i) [Q12] = (1 + 0i) [Q15]
        let a = ComplexFixed::new(Fixed::<15>::from_int(2), Fixed::<15>::from_int(0));
        let b = ComplexFixed::new(Fixed::<12>::from_bits(1 << 11), Fixed::<12>::from_int(0));

        let result = a * b;

        assert_eq!(result.re, Fixed::<15>::from_int(1));
        assert_eq!(result.im, Fixed::<15>::from_int(0));
    }

    #[test]
    fn test_conj() {
        // conj(3 + 4i) = (3 - 4i)
        let a = ComplexFixed::new(Fixed::<12>::from_int(3), Fixed::<12>::from_int(4));

        let result = a.conj();

        assert_eq!(result.re, Fixed::<12>::from_int(3));
        assert_eq!(result.im, Fixed::<12>::from_int(-4));
    }
}
