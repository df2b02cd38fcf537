//! Scalar and complex arithmetic for the transform provider.
//!
//! Nothing here needs `std`; trigonometry comes from `libm`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Floating-point scalar the radix-2 provider can run on.
pub trait Float:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const HALF: Self;

    /// Narrowing conversion from `f64`, used for twiddle angles.
    fn from_f64(x: f64) -> Self;

    /// `(sin(self), cos(self))`
    fn sin_cos(self) -> (Self, Self);

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }
}

macro_rules! impl_float {
    ($t:ty, $sin:path, $cos:path) => {
        impl Float for $t {
            const ZERO: Self = 0.0;
            const HALF: Self = 0.5;

            #[inline(always)]
            fn from_f64(x: f64) -> Self {
                x as $t
            }

            #[inline(always)]
            fn sin_cos(self) -> (Self, Self) {
                ($sin(self), $cos(self))
            }
        }
    };
}

impl_float!(f32, libm::sinf, libm::cosf);
impl_float!(f64, libm::sin, libm::cos);

/// Complex number in rectangular form.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T: Float> Complex<T> {
    #[inline(always)]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO)
    }

    /// Unit phasor `cos(theta) + i*sin(theta)`.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin)
    }

    #[inline(always)]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    #[inline(always)]
    pub fn scale(self, k: T) -> Self {
        Self::new(self.re * k, self.im * k)
    }

    /// `i * self`
    #[inline(always)]
    pub fn mul_i(self) -> Self {
        Self::new(-self.im, self.re)
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re.mul_add(rhs.re, -(self.im * rhs.im)),
            self.re.mul_add(rhs.im, self.im * rhs.re),
        )
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

/// Mutable view of a spectrum stored as separate real and imaginary slices.
#[derive(Debug, PartialEq)]
pub struct SplitComplex<'a, T> {
    pub re: &'a mut [T],
    pub im: &'a mut [T],
}

impl<'a, T: Float> SplitComplex<'a, T> {
    /// Both slices must have the same length.
    pub fn new(re: &'a mut [T], im: &'a mut [T]) -> Self {
        debug_assert_eq!(re.len(), im.len());
        Self { re, im }
    }

    #[inline(always)]
    pub fn set(&mut self, k: usize, value: Complex<T>) {
        self.re[k] = value.re;
        self.im[k] = value.im;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_arithmetic() {
        let a = Complex64::new(1.0, -2.0);
        let b = Complex64::new(3.0, 4.0);
        assert_eq!(a + b, Complex64::new(4.0, 2.0));
        assert_eq!(a - b, Complex64::new(-2.0, -6.0));
        let c = a * b;
        assert!((c.re - 11.0).abs() < 1e-12);
        assert!((c.im + 2.0).abs() < 1e-12);
        assert_eq!(-a, Complex64::new(-1.0, 2.0));
        assert_eq!(a.conj(), Complex64::new(1.0, 2.0));
        assert_eq!(a.mul_i(), Complex64::new(2.0, 1.0));
        assert_eq!(a.scale(2.0), Complex64::new(2.0, -4.0));
    }

    #[test]
    fn expi_on_unit_circle() {
        let e = Complex64::expi(core::f64::consts::PI);
        assert!((e.re + 1.0).abs() < 1e-12);
        assert!(e.im.abs() < 1e-12);
        let q = Complex32::expi(<f32 as Float>::from_f64(core::f64::consts::FRAC_PI_2));
        assert!(q.re.abs() < 1e-6);
        assert!((q.im - 1.0).abs() < 1e-6);
    }

    #[test]
    fn from_f64_narrows() {
        assert_eq!(<f32 as Float>::from_f64(0.25), 0.25f32);
        assert_eq!(<f32 as Float>::from_f64(16_777_217.0), 16_777_216.0f32);
        assert_eq!(<f64 as Float>::from_f64(1e300), 1e300);
    }

    #[test]
    fn split_complex_set_writes_both_halves() {
        let mut re = [1.0f32, 2.0];
        let mut im = [0.0f32, -1.0];
        let mut split = SplitComplex::new(&mut re, &mut im);
        split.set(0, Complex32::new(5.0, 6.0));
        assert_eq!(re, [5.0, 2.0]);
        assert_eq!(im, [6.0, -1.0]);
    }
}
