//! Global typedefs, numeric constants and small math helpers shared
//! by the whole crate.

// crate
use crate::core::spectrum::RGBSpectrum;

/// All computation runs in double precision.
pub type Float = f64;

pub type Spectrum = RGBSpectrum;

/// Tolerance below which a scalar is considered zero.
pub const EPSILON: Float = 1.0e-10;

/// Is the given scalar within [EPSILON] of zero?
///
/// [EPSILON]: constant.EPSILON.html
pub fn is_zero(v: Float) -> bool {
    v.abs() < EPSILON
}

/// Snap near-zero scalars to exactly zero so that downstream sign
/// tests see a clean three-way outcome (negative, zero, positive).
pub fn align_zero(v: Float) -> Float {
    if is_zero(v) {
        0.0
    } else {
        v
    }
}

/// Clamp the given value *val* to lie between the values *low* and *high*.
pub fn clamp_t<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    let r: T;
    if val < low {
        r = low;
    } else if val > high {
        r = high;
    } else {
        r = val;
    }
    r
}

/// Encode a linear radiance value with the sRGB transfer curve.
pub fn gamma_correct(value: Float) -> Float {
    if value <= 0.003_130_8 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

/// Find solutions of a quadratic equation in a numerically stable
/// way; returns the two roots in ascending order, or `None` when the
/// discriminant is negative or too close to zero for two distinct
/// roots (a grazing ray counts as a miss).
pub fn quadratic(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    let discrim: Float = b * b - 4.0 * a * c;
    if align_zero(discrim) <= 0.0 {
        None
    } else {
        let root_discrim: Float = discrim.sqrt();
        let q = if b < 0.0 {
            -0.5 * (b - root_discrim)
        } else {
            -0.5 * (b + root_discrim)
        };
        let mut t0: Float = q / a;
        let mut t1: Float = c / q;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        Some((t0, t1))
    }
}
