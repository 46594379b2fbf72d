use crate::WsError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WsError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, WsError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(WsError::InvalidArg { what });
    }
    Ok(v)
}

/// `num / den`, or 0 when the denominator is zero or the quotient is not finite.
///
/// Reported ratios never carry NaN or infinity into persisted output.
#[inline]
pub fn ratio_or_zero(num: Real, den: Real) -> Real {
    if den == 0.0 {
        return 0.0;
    }
    let q = num / den;
    if q.is_finite() { q } else { 0.0 }
}
