//! Macros for reducing doc comment boilerplate.

/// Default explanation for [`roots::Error::NoConverge`] errors.
macro_rules! errors_no_converge {
    () => {
        r"- `NoConverge`: the root finder did not converge within the given constraints. The best guesses so far are returned with the error.\n"
    };
}
pub(crate) use errors_no_converge;

/// Default explanation for [`roots::Error::DegreeTooLow`] errors.
macro_rules! errors_degree_too_low {
    () => {
        r"- `DegreeTooLow`: the polynomial is a constant, so there are no roots to look for.\n"
    };
}
pub(crate) use errors_degree_too_low;

/// Default explanation for [`roots::Error::ZeroDenominator`] errors.
macro_rules! errors_zero_denominator {
    () => {
        r"- `ZeroDenominator`: a correction step would have divided by zero. The iterate at which this happened is returned with the error.\n"
    };
}
pub(crate) use errors_zero_denominator;
