use std::fmt::Display;

use num::{Complex, One};

use crate::{util::complex::complex_fmt, RealScalar};

mod base;
mod calculus;
mod conversions;
mod horner;
mod indexing;
pub mod roots;

/// A univariate polynomial with complex coefficients.
///
/// Coefficients are stored in ascending order: index `i` holds the
/// coefficient of `x^i`, so the length is the degree plus one. The leading
/// coefficient is expected to be non-zero but this is not enforced.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<Complex<T>>);

impl<T: RealScalar> Poly<T> {
    /// The number of coefficients
    #[must_use]
    pub fn len(&self) -> usize {
        self.len_raw()
    }

    /// Polynomials always hold at least the constant term
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The nominal degree, i.e. the index of the last coefficient, whether it
    /// is zero or not.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree_raw()
    }
}

/// Renders the polynomial with the highest power first, e.g.
/// `x^3 + -8x^2 + -13x + 140`.
impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, c) in self.iter().enumerate().rev() {
            if i == 0 {
                write!(f, "{}", complex_fmt(c))?;
                break;
            }
            if !c.is_one() {
                write!(f, "{}", complex_fmt(c))?;
            }
            write!(f, "x")?;
            if i > 1 {
                write!(f, "^{i}")?;
            }
            write!(f, " + ")?;
        }
        Ok(())
    }
}
