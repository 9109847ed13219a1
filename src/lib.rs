//! Find all the complex roots of a univariate polynomial.
//!
//! Roots are extracted one at a time with a Laguerre-style iteration, each
//! estimate is polished against the original polynomial, and the working
//! polynomial is deflated by synthetic division until only a linear factor is
//! left, which is solved directly.
//!
//! ```
//! use laguerre_poly::{poly, __testing::check_roots, complex};
//!
//! // x^3 - 8x^2 - 13x + 140
//! let p = poly![140.0, -13.0, -8.0, 1.0];
//! let roots = p.roots(0).unwrap();
//! assert!(check_roots(
//!     roots,
//!     vec![complex!(7.0), complex!(5.0), complex!(-4.0)],
//!     1E-6
//! ));
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub use num;

/// A more convenient way to write `Complex::new(...)`.
///
/// # Examples
///
/// ```
/// use laguerre_poly::complex;
/// use num::Complex;
///
/// let c1: Complex<f32> = complex!();
/// let c2 = Complex::new(0.0, 0.0);
/// let c3 = complex!(1.0f32, 2.0);
/// let c4 = Complex::new(1.0, 2.0);
///
/// assert_eq!(c1, c2);
/// assert_eq!(c3, c4);
/// assert_eq!(complex!(4.20), complex!(4.20, 0.0));
/// ```
#[macro_export]
macro_rules! complex {
    () => {{
        <$crate::num::Complex<_> as $crate::num::Zero>::zero()
    }};
    ($re:expr) => {{
        $crate::num::Complex::new($re, $crate::num::Zero::zero())
    }};
    ($re:expr, $im: expr) => {{
        $crate::num::Complex::new($re, $im)
    }};
}

/// A more convenient way of writing `Poly::new(&[Complex::new(...)...])`
///
/// Coefficients are given in ascending order, starting from the constant
/// term. Each coefficient is either a real number or a `(re, im)` pair.
///
/// # Examples
///
/// ```
/// use laguerre_poly::{Poly, poly};
/// use num::Complex;
///
/// let p1: Poly<f32> = poly![];
/// let p2 = Poly::new(&[Complex::new(0.0f32, 0.0)]);
/// assert_eq!(p1, p2);
///
/// let p1 = poly![1.0, 2.0, 3.0];
/// let p2 = Poly::new(&[Complex::new(1.0, 0.0), Complex::new(2.0, 0.0), Complex::new(3.0, 0.0)]);
/// assert_eq!(p1, p2);
///
/// let p1 = poly![(1.0, 2.0), (3.0, 4.0)];
/// let p2 = Poly::new(&[Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)]);
/// assert_eq!(p1, p2);
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::Poly::new(&[])
    }};
    ($(($re:expr, $im:expr)),+ $(,)?) => {{
        $crate::Poly::new(&[$($crate::num::Complex::new($re, $im)),*])
    }};
    ($($re:expr),+ $(,)?) => {{
        $crate::Poly::from_real_slice(&[$($re),*])
    }};
}

mod poly;
pub use poly::{roots, Poly};

mod scalar;
pub use scalar::RealScalar;

mod util;
pub use util::complex::{c_cmp_norm, c_is_small, complex_fmt, root_fmt};

// hidden re-exports, used by integration tests and benches
#[doc(hidden)]
pub use util::__testing;

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
