//! Root finder that extracts one root at a time and deflates.

use fastrand::Rng;
use num::Complex;

use super::{laguerre, Error};
use crate::{
    util::{
        casting::f64_to_scalar,
        doc_macros::{errors_degree_too_low, errors_no_converge, errors_zero_denominator},
    },
    Poly, RealScalar,
};

/// Find all roots of a polynomial with [`laguerre`] and deflation.
///
/// For as long as the working polynomial has degree two or more, a random
/// starting point with real and imaginary part in `[0, 1)` is refined into a
/// root of the working polynomial, that root is refined again against the
/// original `poly` to shed the error accumulated by previous deflations, and
/// the working polynomial is divided by `(x - root)`. The last root is read
/// directly off the remaining linear factor.
///
/// Roots are returned in the order they are found, one per degree.
///
/// # Errors
#[doc = errors_degree_too_low!()]
#[doc = errors_no_converge!()]
#[doc = errors_zero_denominator!()]
pub fn laguerre_deflate<T: RealScalar>(
    poly: &Poly<T>,
    epsilon: Option<T>,
    max_iter: Option<usize>,
    rng: &mut Rng,
) -> super::Result<T> {
    let degree = poly.degree_raw();
    if degree == 0 {
        return Err(Error::DegreeTooLow(degree));
    }

    let mut roots = Vec::with_capacity(degree);
    let mut exhausted = 0;
    let mut working = poly.clone();

    // until only a linear factor is left
    while working.len_raw() > 2 {
        let seed = Complex::new(f64_to_scalar(rng.f64()), f64_to_scalar(rng.f64()));
        let estimate = laguerre(&working, epsilon, max_iter, seed)?;
        let polished = laguerre(poly, epsilon, max_iter, estimate.root)?;
        if !polished.is_converged() {
            exhausted += 1;
            log::warn!(
                "did not converge {{best_guess: {}, iterations: {}}}",
                polished.root,
                polished.iterations
            );
        }
        log::debug!(
            "found root {{root: {}, seed: {seed}, iterations: {}}}",
            polished.root,
            estimate.iterations + polished.iterations
        );

        working = working.deflate(polished.root);
        roots.push(polished.root);
    }

    roots.push(linear_root(&working));

    if exhausted > 0 {
        return Err(Error::NoConverge(roots));
    }
    Ok(roots)
}

/// The root of `a + bx`
fn linear_root<T: RealScalar>(poly: &Poly<T>) -> Complex<T> {
    debug_assert_eq!(poly.len_raw(), 2);
    -poly[0] / poly[1]
}

#[cfg(test)]
mod test {
    use fastrand::Rng;
    use num::Complex;

    use super::laguerre_deflate;
    use crate::{
        roots::Error,
        util::__testing::{check_roots, max_residual},
        Poly64,
    };

    fn deflate(p: &Poly64, seed: u64) -> Vec<Complex<f64>> {
        laguerre_deflate(p, None, None, &mut Rng::with_seed(seed)).unwrap()
    }

    #[test]
    pub fn degree_0() {
        let p: Poly64 = poly![1.0];
        assert!(matches!(
            laguerre_deflate(&p, None, None, &mut Rng::with_seed(0)),
            Err(Error::DegreeTooLow(0))
        ));
    }

    #[test]
    fn degree_1() {
        let p = poly![-3.0, 2.0];
        assert_eq!(deflate(&p, 0), vec![complex!(1.5)]);
    }

    #[test]
    fn degree_2() {
        let roots_expected = vec![complex!(1.0), complex!(-1.0)];
        let p = poly![-1.0, 0.0, 1.0];
        let roots = deflate(&p, 0);
        assert!(check_roots(roots, roots_expected, 1E-6));
    }

    #[test]
    fn degree_2_last_root_is_linear() {
        let p = poly![-1.0, 0.0, 1.0];
        let roots = deflate(&p, 3);
        // whatever the first root is, the other one comes from the linear
        // remainder `x + first`
        let q = p.deflate(roots[0]);
        assert_eq!(roots[1], -q[0] / q[1]);
    }

    #[test]
    fn degree_3() {
        let roots_expected = vec![complex!(7.0), complex!(5.0), complex!(-4.0)];
        let p = poly![140.0, -13.0, -8.0, 1.0];
        for seed in 0..20 {
            let roots = deflate(&p, seed);
            assert!(
                check_roots(roots.clone(), roots_expected.clone(), 1E-6),
                "@ {seed}: {roots:?}"
            );
        }
    }

    #[test]
    fn degree_3_complex() {
        let roots_expected = vec![complex!(1.0), complex!(0.0, 1.0), complex!(0.0, -1.0)];
        let p = Poly64::from_roots(&roots_expected);
        let roots = deflate(&p, 0);
        assert!(check_roots(roots, roots_expected, 1E-6));
    }

    #[test]
    fn degree_4_complex_coefficients() {
        let roots_expected = vec![
            complex!(0.5, -1.0),
            complex!(-2.0, 0.25),
            complex!(1.5, 1.5),
            complex!(-0.75),
        ];
        let p = Poly64::from_roots(&roots_expected).scaled(complex!(2.0, -1.0));
        let roots = deflate(&p, 1);
        assert!(max_residual(&p, &roots) < 1E-6);
        assert!(check_roots(roots, roots_expected, 1E-6));
    }

    #[test]
    fn degree_5_2_zeros() {
        let roots_expected = vec![
            complex!(0.0),
            complex!(0.0),
            complex!(1.0),
            complex!(2.0),
            complex!(3.0),
        ];
        let p = Poly64::from_roots(&roots_expected);
        let roots = deflate(&p, 0);
        assert_eq!(roots.len(), 5);
        assert!(max_residual(&p, &roots) < 1E-6);
    }

    #[test]
    fn root_count_matches_degree() {
        for degree in 1..=8u32 {
            let coeffs: Vec<f64> = (0..=degree).map(|i| f64::from(i) + 1.0).collect();
            let p = Poly64::from_real_vec(coeffs);
            let roots = deflate(&p, u64::from(degree));
            assert_eq!(roots.len(), p.degree());
        }
    }

    #[test]
    fn no_converge_keeps_best_guesses() {
        let p = poly![140.0, -13.0, -8.0, 1.0];
        let res = laguerre_deflate(&p, None, Some(0), &mut Rng::with_seed(0));
        match res {
            Err(Error::NoConverge(roots)) => assert_eq!(roots.len(), 3),
            other => panic!("expected NoConverge, got {other:?}"),
        }
    }
}
