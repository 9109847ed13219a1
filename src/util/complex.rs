// internal utilities for dealing with Complex annoyiances

use std::{cmp::Ordering, fmt::Display};

use num::{Complex, One, Zero};

use crate::RealScalar;

/// Compare two complex numbers by magnitude, treating magnitudes that differ
/// by at most `epsilon` as equal.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use laguerre_poly::{c_cmp_norm, complex};
///
/// assert_eq!(c_cmp_norm(complex!(3.0, 4.0), complex!(5.0), 1E-9), Ordering::Equal);
/// assert_eq!(c_cmp_norm(complex!(1.0), complex!(0.0, -2.0), 1E-9), Ordering::Less);
/// assert_eq!(c_cmp_norm(complex!(-2.0), complex!(1.0), 1E-9), Ordering::Greater);
/// ```
pub fn c_cmp_norm<T: RealScalar>(a: Complex<T>, b: Complex<T>, epsilon: T) -> Ordering {
    let difference = a.norm() - b.norm();
    if difference < -epsilon {
        Ordering::Less
    } else if difference > epsilon {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// True if `z` is indistinguishable from zero by [`c_cmp_norm`].
pub fn c_is_small<T: RealScalar>(z: Complex<T>, epsilon: T) -> bool {
    c_cmp_norm(z, Complex::zero(), epsilon) == Ordering::Equal
}

/// formatting for Complex coefficients, because the implementation is not
/// good enough for me
pub fn complex_fmt<T: Display + Zero + One + PartialEq>(c: &Complex<T>) -> String {
    let r = &c.re;
    let i = &c.im;
    if i.is_zero() {
        format!("{r}")
    } else if i.is_one() {
        format!("({r}+i)")
    } else {
        format!("({r}+i{i})")
    }
}

/// Formats a root as a `(re,im)` pair.
pub fn root_fmt<T: Display>(c: &Complex<T>) -> String {
    format!("({},{})", c.re, c.im)
}
