use fastrand::Rng;
use num::Complex;

use crate::{
    util::{
        casting::f64_to_scalar,
        doc_macros::{errors_degree_too_low, errors_no_converge, errors_zero_denominator},
    },
    Poly, RealScalar,
};

mod deflate;
pub use deflate::laguerre_deflate;
mod laguerre;
pub use laguerre::laguerre;

/// Magnitude below which a value is treated as zero, unless the caller
/// provides a tolerance.
pub const DEFAULT_EPSILON: f64 = 1E-9;

/// Iteration budget of a single root refinement, unless the caller provides
/// one.
pub const DEFAULT_MAX_ITER: usize = 10_000;

pub(crate) fn default_epsilon<T: RealScalar>() -> T {
    f64_to_scalar(DEFAULT_EPSILON)
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error<T> {
    #[error("a polynomial of degree {0} has no roots to find")]
    DegreeTooLow(usize),

    #[error("root finder did not converge within the given constraints")]
    NoConverge(T),

    #[error("root finder tried to divide by zero")]
    ZeroDenominator(T),

    #[error("unexpected error while running root finder")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<Vec<Complex<T>>, Error<Vec<Complex<T>>>>;

mod sealed {
    pub trait Sealed {}
}

/// Extension trait for [`Result`]
pub trait RootsResultExt<T>: sealed::Sealed {
    /// Get roots even if the root finder ran out of iterations. Returns
    /// [`None`] if an error occurred without producing a full set of roots.
    fn ignore_errors(self) -> Option<Vec<Complex<T>>>;
}

impl<T> sealed::Sealed for std::result::Result<Vec<Complex<T>>, Error<Vec<Complex<T>>>> {}

impl<T> RootsResultExt<T> for std::result::Result<Vec<Complex<T>>, Error<Vec<Complex<T>>>> {
    fn ignore_errors(self) -> Option<Vec<Complex<T>>> {
        match self {
            Ok(roots) | Err(Error::NoConverge(roots)) => Some(roots),
            _ => None,
        }
    }
}

/// How a single root refinement ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Either the residual or the last correction step became negligible
    Converged,

    /// The iteration budget ran out, the estimate is a best guess
    Exhausted,
}

/// The outcome of refining one initial guess into a root estimate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Refinement<T: RealScalar> {
    pub root: Complex<T>,
    pub status: Status,
    /// Number of correction steps that were applied
    pub iterations: usize,
}

impl<T: RealScalar> Refinement<T> {
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

impl<T: RealScalar> Poly<T> {
    /// Find all roots with the default tolerance and iteration budget, using
    /// `seed` to draw the starting point of every refinement.
    ///
    /// Roots are returned in the order they are found. The same seed always
    /// gives the same roots.
    ///
    /// # Errors
    #[doc = errors_degree_too_low!()]
    #[doc = errors_no_converge!()]
    #[doc = errors_zero_denominator!()]
    pub fn roots(&self, seed: u64) -> Result<T> {
        self.roots_with_rng(&mut Rng::with_seed(seed))
    }

    /// Same as [`Poly::roots`], but draws starting points from a random number
    /// generator owned by the caller.
    ///
    /// # Errors
    #[doc = errors_degree_too_low!()]
    #[doc = errors_no_converge!()]
    #[doc = errors_zero_denominator!()]
    pub fn roots_with_rng(&self, rng: &mut Rng) -> Result<T> {
        laguerre_deflate(self, None, None, rng)
    }
}

#[cfg(test)]
mod test {
    use fastrand::Rng;

    use super::{Error, RootsResultExt};
    use crate::{util::__testing::check_roots, Poly64};

    #[test]
    fn sample_cubic() {
        let p = Poly64::from_descending(&[1.0, -8.0, -13.0, 140.0]);
        let roots = p.roots(0).unwrap();
        assert!(check_roots(
            roots,
            vec![complex!(7.0), complex!(5.0), complex!(-4.0)],
            1E-6
        ));
    }

    #[test]
    fn same_seed_same_roots() {
        let p = poly![3.0, -1.0, 0.5, 2.0, -1.0, 1.0];
        assert_eq!(p.roots(42).unwrap(), p.roots(42).unwrap());

        let mut rng1 = Rng::with_seed(7);
        let mut rng2 = Rng::with_seed(7);
        assert_eq!(
            p.roots_with_rng(&mut rng1).unwrap(),
            p.roots_with_rng(&mut rng2).unwrap()
        );
    }

    #[test]
    fn constant_has_no_roots() {
        let p = poly![2.0];
        assert!(matches!(p.roots(0), Err(Error::DegreeTooLow(0))));
    }

    #[test]
    fn ignore_errors() {
        let ok: super::Result<f64> = Ok(vec![complex!(1.0)]);
        assert_eq!(ok.ignore_errors(), Some(vec![complex!(1.0)]));

        let no_converge: super::Result<f64> = Err(Error::NoConverge(vec![complex!(2.0)]));
        assert_eq!(no_converge.ignore_errors(), Some(vec![complex!(2.0)]));

        let too_low: super::Result<f64> = Err(Error::DegreeTooLow(0));
        assert_eq!(too_low.ignore_errors(), None);
    }
}
