use approx::{AbsDiffEq, RelativeEq};
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{Float, Zero};

/// How the two components handed to [`Complex::from_form`] are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Form {
    /// `(real, imaginary)`.
    #[default]
    Rectangular,
    /// `(magnitude, angle)` with the angle in radians.
    Polar,
}

/// A complex sample.
///
/// Products, powers and roots are evaluated in polar form. Powers and roots
/// return the principal branch only, using [`Complex::angle`] in `(-π, π]`.
///
/// Division by the zero complex is not guarded and yields NaN components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex<F = f64> {
    re: F,
    im: F,
}

impl<F: Float> Complex<F> {
    /// Build from real and imaginary parts.
    #[inline]
    pub fn new(re: F, im: F) -> Self {
        Self { re, im }
    }

    /// Build from a magnitude and an angle in radians.
    ///
    /// ```
    /// use approx::assert_abs_diff_eq;
    /// use sig_rs_core::Complex;
    ///
    /// let z = Complex::from_polar(1.0, 30.0);
    /// assert_abs_diff_eq!(z, Complex::new(0.15425, -0.98803), epsilon = 1e-4);
    /// ```
    #[inline]
    pub fn from_polar(abs: F, angle: F) -> Self {
        Self {
            re: abs * angle.cos(),
            im: abs * angle.sin(),
        }
    }

    /// Build from two components whose meaning is chosen by `form`.
    pub fn from_form(a: F, b: F, form: Form) -> Self {
        match form {
            Form::Rectangular => Self::new(a, b),
            Form::Polar => Self::from_polar(a, b),
        }
    }

    /// Real part.
    #[inline]
    pub fn re(&self) -> F {
        self.re
    }

    /// Imaginary part.
    #[inline]
    pub fn im(&self) -> F {
        self.im
    }

    /// Magnitude, `sqrt(re² + im²)`.
    #[inline]
    pub fn abs(&self) -> F {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Angle in `(-π, π]`, `atan2(im, re)`. The angle of zero is zero.
    #[inline]
    pub fn angle(&self) -> F {
        self.im.atan2(self.re)
    }

    /// Complex conjugate.
    #[inline]
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Principal value of `self` raised to `exp`.
    ///
    /// ```
    /// use approx::assert_abs_diff_eq;
    /// use sig_rs_core::Complex;
    ///
    /// let z = Complex::new(2.0, 3.0);
    /// assert_abs_diff_eq!(z.powf(3.0), Complex::new(-46.0, 9.0), epsilon = 1e-9);
    /// ```
    pub fn powf(&self, exp: F) -> Self {
        Self::from_polar(self.abs().powf(exp), self.angle() * exp)
    }

    /// `self` raised to the second power.
    ///
    /// This is the plain complex square, not `self * self.conj()`.
    #[inline]
    pub fn squared(&self) -> Self {
        self.powf(F::one() + F::one())
    }

    /// Principal `exp`-th root, identical to `powf(1 / exp)`.
    pub fn root(&self, exp: F) -> Self {
        Self::from_polar(self.abs().powf(exp.recip()), self.angle() / exp)
    }

    /// Principal square root.
    #[inline]
    pub fn sqrt(&self) -> Self {
        self.root(F::one() + F::one())
    }

    /// True when both parts are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// True when either part is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl<F: Float> Default for Complex<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Float> Zero for Complex<F> {
    fn zero() -> Self {
        Self::new(F::zero(), F::zero())
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<F: Float> From<(F, F)> for Complex<F> {
    fn from((re, im): (F, F)) -> Self {
        Self::new(re, im)
    }
}

impl<F: Float> From<nalgebra::Complex<F>> for Complex<F> {
    fn from(value: nalgebra::Complex<F>) -> Self {
        Self::new(value.re, value.im)
    }
}

impl<F: Float> From<Complex<F>> for nalgebra::Complex<F> {
    fn from(value: Complex<F>) -> Self {
        nalgebra::Complex::new(value.re, value.im)
    }
}

impl<F: Float> Add for Complex<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<F: Float> AddAssign for Complex<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> Sub for Complex<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<F: Float> SubAssign for Complex<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> Neg for Complex<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<F: Float> Mul for Complex<F> {
    type Output = Self;

    /// Multiply magnitudes and add angles.
    fn mul(self, rhs: Self) -> Self {
        Self::from_polar(self.abs() * rhs.abs(), self.angle() + rhs.angle())
    }
}

impl<F: Float> MulAssign for Complex<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float> Div<F> for Complex<F> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: F) -> Self {
        Self::new(self.re / rhs, self.im / rhs)
    }
}

impl<F: Float> DivAssign<F> for Complex<F> {
    #[inline]
    fn div_assign(&mut self, rhs: F) {
        *self = *self / rhs;
    }
}

impl<F: Float> Div for Complex<F> {
    type Output = Self;

    /// `self * conj(rhs) / |rhs|²`, both parts over the same denominator.
    fn div(self, rhs: Self) -> Self {
        let numerator = Self::new(
            self.re * rhs.re + self.im * rhs.im,
            self.im * rhs.re - self.re * rhs.im,
        );
        numerator / (rhs.re.powi(2) + rhs.im.powi(2))
    }
}

impl<F: Float> DivAssign for Complex<F> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<F: Float> Sum for Complex<F> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, z| acc + z)
    }
}

impl<'a, F: Float> Sum<&'a Complex<F>> for Complex<F> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, z| acc + *z)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Complex<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{}-{}i", self.re, self.im.abs())
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl<F> AbsDiffEq for Complex<F>
where
    F: Float + AbsDiffEq<Epsilon = F>,
{
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}

impl<F> RelativeEq for Complex<F>
where
    F: Float + RelativeEq<Epsilon = F>,
{
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.re.relative_eq(&other.re, epsilon, max_relative)
            && self.im.relative_eq(&other.im, epsilon, max_relative)
    }
}
