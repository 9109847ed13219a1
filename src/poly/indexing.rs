use std::ops::Index;

use num::Complex;

use crate::{Poly, RealScalar};

/// Coefficient of `x^idx`
impl<T: RealScalar> Index<usize> for Poly<T> {
    type Output = Complex<T>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.0[idx]
    }
}

impl<T: RealScalar> Poly<T> {
    /// Coefficient of `x^idx`, or `None` if it is past the leading coefficient
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Complex<T>> {
        self.0.get(idx).copied()
    }

    /// The leading coefficient
    #[must_use]
    pub fn last(&self) -> Complex<T> {
        self.0[self.degree_raw()]
    }
}
