use num::{Complex, Zero};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Horner's scheme, which at the same time performs synthetic division by
    /// `(x - c)`.
    ///
    /// Returns the quotient `q` and the remainder `r` such that
    /// `p(x) = (x - c) * q(x) + r`. The remainder is `p(c)`. The quotient is
    /// only a true factor of `p` if `c` is a root.
    ///
    /// # Examples
    /// ```
    /// use laguerre_poly::{complex, poly};
    ///
    /// // x^2 - 1 = (x - 2)(x + 2) + 3
    /// let (q, r) = poly![-1.0, 0.0, 1.0].horner(complex!(2.0));
    /// assert_eq!(q, poly![2.0, 1.0]);
    /// assert_eq!(r, complex!(3.0));
    /// ```
    #[must_use]
    pub fn horner(&self, c: Complex<T>) -> (Self, Complex<T>) {
        let n = self.len_raw();
        let mut quotient = vec![Complex::<T>::zero(); n.saturating_sub(1).max(1)];
        for i in (1..n).rev() {
            let carry = if i < n - 1 {
                quotient[i] * c
            } else {
                Complex::zero()
            };
            quotient[i - 1] = self.0[i] + carry;
        }
        let remainder = quotient[0] * c + self.0[0];
        (Self(quotient), remainder)
    }

    /// Evaluate the polynomial at `x`
    ///
    /// # Examples
    /// ```
    /// use laguerre_poly::{complex, poly};
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.eval(complex!(2.0)), complex!(17.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        self.horner(x).1
    }

    /// Factor `(x - r)` out of the polynomial by synthetic division, dropping
    /// the remainder.
    ///
    /// This is only accurate if `r` is a root (or very close to one).
    #[must_use]
    pub fn deflate(&self, r: Complex<T>) -> Self {
        self.horner(r).0
    }

    /// Multiply by `(x - r)`, the inverse of [`Poly::deflate`]
    pub(crate) fn mul_linear(&self, r: Complex<T>) -> Self {
        let mut coeffs = vec![Complex::<T>::zero(); self.len_raw() + 1];
        for (i, &c) in self.iter().enumerate() {
            coeffs[i + 1] = coeffs[i + 1] + c;
            coeffs[i] = coeffs[i] - c * r;
        }
        Self(coeffs)
    }
}
