use crate::RealScalar;

/// Cast with loss of precision, explicitly clamping out of bounds values instead
/// of panicking
pub(crate) fn usize_to_scalar<T: RealScalar>(x: usize) -> T {
    T::from_usize(x).unwrap_or_else(T::max_value)
}

/// Narrowing cast for configuration constants and random samples, which are
/// always written as `f64`.
pub(crate) fn f64_to_scalar<T: RealScalar>(x: f64) -> T {
    T::from_f64(x).unwrap_or_else(|| {
        if x.is_sign_negative() {
            T::min_value()
        } else {
            T::max_value()
        }
    })
}
