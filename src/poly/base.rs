use num::Complex;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Applies a closure to each coefficient in-place
    pub(crate) fn apply(&mut self, f: impl FnMut(&mut Complex<T>)) {
        self.0.iter_mut().for_each(f);
    }

    /// The length of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// The degree of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn degree_raw(&self) -> usize {
        self.len_raw() - 1
    }

    /// Scale a polynomial in-place
    pub fn scale(&mut self, factor: Complex<T>) {
        self.apply(|z| *z = *z * factor);
    }

    /// Moving version of `scale`
    #[must_use]
    pub fn scaled(mut self, factor: Complex<T>) -> Self {
        self.scale(factor);
        self
    }
}
