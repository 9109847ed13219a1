use std::cmp::Ordering;

use num::{Complex, Zero};

use super::{default_epsilon, Error, Refinement, Status, DEFAULT_MAX_ITER};
use crate::{
    util::{
        casting::usize_to_scalar,
        complex::{c_cmp_norm, c_is_small},
        doc_macros::{errors_degree_too_low, errors_zero_denominator},
    },
    Poly, RealScalar,
};

/// Refine `initial_guess` into one root of `poly` with a Laguerre-style
/// iteration.
///
/// Each step uses the polynomial and its first two derivatives at the current
/// guess. Of the two candidate denominators `g ± r` the one with the larger
/// magnitude is used; on a tie (within `epsilon`) it is `g - r`.
///
/// Iteration stops as soon as `|p(z)|` or the last correction is within
/// `epsilon` of zero ([`Status::Converged`]), or after `max_iter` steps
/// ([`Status::Exhausted`]), in which case the last iterate is returned as a
/// best guess.
///
/// `epsilon` defaults to [`DEFAULT_EPSILON`](super::DEFAULT_EPSILON) and
/// `max_iter` to [`DEFAULT_MAX_ITER`].
///
/// # Errors
#[doc = errors_degree_too_low!()]
#[doc = errors_zero_denominator!()]
#[allow(clippy::many_single_char_names)]
pub fn laguerre<T: RealScalar>(
    poly: &Poly<T>,
    epsilon: Option<T>,
    max_iter: Option<usize>,
    initial_guess: Complex<T>,
) -> std::result::Result<Refinement<T>, Error<Vec<Complex<T>>>> {
    let epsilon = epsilon.unwrap_or_else(default_epsilon);
    let max_iter = max_iter.unwrap_or(DEFAULT_MAX_ITER);

    let degree = poly.degree_raw();
    if degree == 0 {
        return Err(Error::DegreeTooLow(degree));
    }
    let n = Complex::from(usize_to_scalar::<T>(degree));
    let n_minus_one = Complex::from(usize_to_scalar::<T>(degree - 1));

    let pdx = poly.diff();
    let pddx = pdx.diff();

    let mut guess = initial_guess;
    for i in 0..max_iter {
        let px = poly.eval(guess);
        log::trace!("{{current_guess: {guess}, error: {}}}", px.norm());

        // stopping criterion 1: guess already satisfies the polynomial
        if c_is_small(px, epsilon) {
            return Ok(Refinement {
                root: guess,
                status: Status::Converged,
                iterations: i,
            });
        }

        let g = pdx.eval(guess) / px;
        // NOTE: p'' and p are subtracted as is rather than taking p''/p
        let h = g * g - pddx.eval(guess) - px;
        let r = (n_minus_one * (n * h - g * g)).sqrt();

        let d1 = g + r;
        let d2 = g - r;
        let denom = if c_cmp_norm(d1, d2, epsilon) == Ordering::Greater {
            d1
        } else {
            d2
        };

        let delta = n / denom;
        if denom.is_zero() || !(delta.re.is_finite() && delta.im.is_finite()) {
            log::debug!("zero denominator {{current_guess: {guess}, poly: {poly}}}");
            return Err(Error::ZeroDenominator(vec![guess]));
        }
        guess = guess - delta;

        // stopping criterion 2: no further improvement
        if c_is_small(delta, epsilon) {
            return Ok(Refinement {
                root: guess,
                status: Status::Converged,
                iterations: i + 1,
            });
        }
    }

    log::trace!("did not converge {{best_guess: {guess}, poly: {poly}}}");
    Ok(Refinement {
        root: guess,
        status: Status::Exhausted,
        iterations: max_iter,
    })
}
