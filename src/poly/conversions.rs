use itertools::Itertools;
use num::{Complex, One, Zero};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial from complex coefficients in ascending order.
    ///
    /// Coefficients are kept as given, including a zero leading coefficient.
    /// An empty slice makes the zero polynomial `[0]`.
    #[must_use]
    pub fn new(coeffs: &[Complex<T>]) -> Self {
        if coeffs.is_empty() {
            return Self(vec![Complex::zero()]);
        }
        Self(coeffs.to_vec())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Complex<T>] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, Complex<T>> {
        self.0.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Complex<T>> {
        self.0.clone()
    }

    /// The same as `Poly::new()`
    #[must_use]
    pub fn from_complex_slice(value: &[Complex<T>]) -> Self {
        Self::new(value)
    }

    #[must_use]
    pub fn from_complex_vec(value: Vec<Complex<T>>) -> Self {
        if value.is_empty() {
            return Self::new(&[]);
        }
        Self(value)
    }

    #[must_use]
    pub fn from_real_slice(value: &[T]) -> Self {
        Self::from_real_iterator(value.iter().copied())
    }

    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn from_real_vec(value: Vec<T>) -> Self {
        Self::from_real_slice(value.as_slice())
    }

    #[must_use]
    pub fn from_real_iterator(coeffs: impl Iterator<Item = T>) -> Self {
        Self::from_complex_iterator(coeffs.map(Complex::from))
    }

    #[must_use]
    pub fn from_complex_iterator(coeffs: impl Iterator<Item = Complex<T>>) -> Self {
        Self::from_complex_vec(coeffs.collect_vec())
    }

    /// Create a polynomial from real coefficients written the usual way, with
    /// the highest power first.
    ///
    /// # Examples
    /// ```
    /// use laguerre_poly::{poly, Poly64};
    ///
    /// // x^3 - 8x^2 - 13x + 140
    /// let p = Poly64::from_descending(&[1.0, -8.0, -13.0, 140.0]);
    /// assert_eq!(p, poly![140.0, -13.0, -8.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_descending(coeffs: &[T]) -> Self {
        Self::from_real_iterator(coeffs.iter().rev().copied())
    }

    /// The monic polynomial whose roots are exactly `roots`, i.e. the product
    /// of `(x - r)` over all of them.
    ///
    /// # Examples
    /// ```
    /// use laguerre_poly::{complex, poly, Poly64};
    ///
    /// let p = Poly64::from_roots(&[complex!(1.0), complex!(-1.0)]);
    /// assert_eq!(p, poly![-1.0, 0.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[Complex<T>]) -> Self {
        roots
            .iter()
            .fold(Self(vec![Complex::one()]), |acc, &r| acc.mul_linear(r))
    }
}

impl<T: RealScalar> From<&[Complex<T>]> for Poly<T> {
    fn from(value: &[Complex<T>]) -> Self {
        Self::from_complex_slice(value)
    }
}

impl<T: RealScalar> From<Vec<Complex<T>>> for Poly<T> {
    fn from(value: Vec<Complex<T>>) -> Self {
        Self::from_complex_vec(value)
    }
}

impl<T: RealScalar> From<Poly<T>> for Vec<Complex<T>> {
    fn from(val: Poly<T>) -> Self {
        val.0
    }
}

impl<'a, T: RealScalar> IntoIterator for &'a Poly<T> {
    type Item = &'a Complex<T>;
    type IntoIter = std::slice::Iter<'a, Complex<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use num::Complex;

    use crate::Poly64;

    #[test]
    fn empty_is_zero() {
        let p = Poly64::new(&[]);
        assert_eq!(p.as_slice(), &[Complex::new(0.0, 0.0)]);
    }

    #[test]
    fn keeps_leading_zero() {
        let p = poly![1.0, 2.0, 0.0];
        assert_eq!(p.len(), 3);
        assert_eq!(p.degree(), 2);
    }

    #[test]
    fn descending_order() {
        let p = Poly64::from_descending(&[2.0, 0.0, -1.0]);
        assert_eq!(p, poly![-1.0, 0.0, 2.0]);
    }

    #[test]
    fn from_roots_cubic() {
        let p = Poly64::from_roots(&[complex!(7.0), complex!(5.0), complex!(-4.0)]);
        assert_eq!(p, poly![140.0, -13.0, -8.0, 1.0]);
    }

    #[test]
    fn from_roots_conjugates_are_real() {
        let p = Poly64::from_roots(&[complex!(0.0, 1.0), complex!(0.0, -1.0)]);
        assert_eq!(p, poly![1.0, 0.0, 1.0]);
    }

    #[test]
    fn from_no_roots() {
        assert_eq!(Poly64::from_roots(&[]), poly![1.0]);
    }

    #[test]
    fn into_vec() {
        let v: Vec<Complex<f64>> = poly![1.0, 2.0].into();
        assert_eq!(v, vec![complex!(1.0), complex!(2.0)]);
    }

    #[test]
    fn to_vec_leaves_poly_intact() {
        let p = poly![(1.0, -1.0), (0.0, 2.0)];
        let mut v = p.to_vec();
        v.push(complex!(3.0));
        assert_eq!(p.len(), 2);
        assert_eq!(Poly64::from(v), poly![(1.0, -1.0), (0.0, 2.0), (3.0, 0.0)]);
    }

    #[test]
    fn iterate_by_reference() {
        let p = poly![1.0, 2.0, 3.0];
        let mut sum = complex!(0.0);
        for c in &p {
            sum += *c;
        }
        assert_eq!(sum, complex!(6.0));
        assert_eq!(IntoIterator::into_iter(&p).count(), p.len());
    }
}
