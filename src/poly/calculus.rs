use num::{Complex, Zero};

use crate::{util::casting::usize_to_scalar, Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Derivative
    ///
    /// The result has one coefficient less than `self`, except for constants
    /// whose derivative is the constant zero.
    ///
    /// # Examples
    /// ```
    /// use laguerre_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].diff(), poly![2.0, 6.0]);
    /// ```
    #[must_use]
    pub fn diff(&self) -> Self {
        // derivative of constant is zero
        if self.degree_raw() == 0 {
            return Self(vec![Complex::zero()]);
        }

        let coeffs = self
            .iter()
            .enumerate()
            .skip(1) // shift degrees down
            .map(|(i, c)| c.scale(usize_to_scalar(i)))
            .collect();
        Self(coeffs)
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn diff() {
        let p = poly![1.0, 2.0, 3.0];
        assert_eq!(p.diff(), poly![2.0, 6.0]);
    }

    #[test]
    fn diff_cubic() {
        let p = poly![140.0, -13.0, -8.0, 1.0];
        assert_eq!(p.diff(), poly![-13.0, -16.0, 3.0]);
        assert_eq!(p.diff().diff(), poly![-16.0, 6.0]);
    }

    /// This was a bug
    #[test]
    fn diff_constant() {
        let one = poly![1.0];
        assert_eq!(one.diff(), poly![0.0]);
        assert_eq!(one.diff().degree(), 0);
    }

    #[test]
    fn diff_linear() {
        assert_eq!(poly![3.0, -2.0].diff(), poly![-2.0]);
    }

    #[test]
    fn diff_complex() {
        let p = poly![(1.0, 1.0), (2.0, -1.0), (0.5, 3.0)];
        assert_eq!(p.diff(), poly![(2.0, -1.0), (1.0, 6.0)]);
    }

    #[test]
    fn diff_coefficients() {
        let p = poly![0.5, -1.5, 2.0, 7.0, -3.0, 1.25];
        let d = p.diff();
        assert_eq!(d.len(), p.len() - 1);
        for i in 0..d.len() {
            let expected = p[i + 1] * (i as f64 + 1.0);
            assert_eq!(d[i], expected);
        }
    }

    #[test]
    fn keeps_zero_leading_coefficient() {
        // leading zeros are not trimmed
        let p = poly![1.0, 1.0, 0.0];
        assert_eq!(p.diff(), poly![1.0, 0.0]);
    }
}
