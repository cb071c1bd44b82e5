//! The scalar type used for every Z-function computation.
//!
//! Rust has no stable native extended-precision float, so `Real` is `f64`.
//! An 80-bit x87 extended float carries a 64-bit mantissa; `f64` carries 53 bits,
//! so phases `t·ln(n)` lose roughly 3 decimal digits relative to it. For the
//! default range (t ≤ 30) this shifts refined zeros only at the 1e-15 level.
//! At large t (around 1e8 and beyond) the phase error grows to ~1e-8 radians
//! and fewer sign changes can be told apart from rounding noise.

/// Floating type used throughout the workspace.
pub type Real = f64;

/// π at `Real` precision.
pub const PI: Real = std::f64::consts::PI;

/// 2π at `Real` precision.
pub const TWO_PI: Real = 2.0 * PI;

/// Phase offset π/8 shared by every Riemann–Siegel term.
pub const PI_OVER_8: Real = PI / 8.0;

/// Fractional digits used when writing zeros in fixed-point form.
///
/// Mirrors `digits10 + 2` of the type: `f64::DIGITS` is 15.
pub const OUTPUT_DIGITS: usize = Real::DIGITS as usize + 2;

/// Format a value in fixed-point notation with [`OUTPUT_DIGITS`] fractional digits.
pub fn to_fixed(value: Real) -> String {
    format!("{:.*}", OUTPUT_DIGITS, value)
}
