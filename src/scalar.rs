use std::fmt::{Debug, Display};

use num::{Float, FromPrimitive};

/// The real number type that coefficients, roots and tolerances are built on.
///
/// Coefficients are always stored as complex numbers whose parts are of this
/// type, so a real polynomial is simply one with zero imaginary parts.
pub trait RealScalar: Float + FromPrimitive + Debug + Display + Default + 'static {}

impl RealScalar for f32 {}
impl RealScalar for f64 {}
