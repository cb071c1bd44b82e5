//! Exact decimal arithmetic for laying out the scan grid.
//!
//! Grid sizes are computed from the shortest decimal form of each bound, so
//! `(30 - 14) / 0.01` is exactly 1600 rather than the 1599.999... that binary
//! floats produce.

use crate::{Real, ZetaError, ZetaResult};
use dashu::integer::IBig;
use dashu_base::Approximation;
use dashu_float::DBig;

/// Decimal digits carried through the grid division.
const GRID_DIGITS: usize = 64;

/// Shortest decimal string that round-trips to `value`.
pub fn shortest_decimal(value: Real) -> String {
    // `{}` on f64 prints the shortest round-trip form, never exponent notation.
    format!("{}", value)
}

/// Parse a decimal string exactly.
pub fn parse_decimal(name: &'static str, input: &str) -> ZetaResult<DBig> {
    input.trim().parse::<DBig>().map_err(|e| ZetaError::Parse {
        name,
        input: input.to_string(),
        message: e.to_string(),
    })
}

fn to_decimal(name: &'static str, value: Real) -> ZetaResult<DBig> {
    if !value.is_finite() {
        return Err(ZetaError::invalid_range(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    parse_decimal(name, &shortest_decimal(value))
}

fn with_grid_precision(value: DBig) -> DBig {
    match value.with_precision(GRID_DIGITS) {
        Approximation::Exact(v) => v,
        Approximation::Inexact(v, _) => v,
    }
}

/// Number of grid points `start + k·step` with `k ≥ 0` that do not pass `end`.
///
/// Equals `floor((end - start) / step) + 1`. Requires `step > 0` and `start <= end`.
pub fn grid_point_count(start: Real, end: Real, step: Real) -> ZetaResult<usize> {
    if !(step > 0.0) {
        return Err(ZetaError::invalid_range(format!(
            "step must be positive, got {}",
            step
        )));
    }
    if start > end {
        return Err(ZetaError::invalid_range(format!(
            "start {} is past end {}",
            start, end
        )));
    }

    let start = with_grid_precision(to_decimal("start", start)?);
    let end = with_grid_precision(to_decimal("end", end)?);
    let step = with_grid_precision(to_decimal("step", step)?);

    let intervals = ((&end - &start) / &step).floor();
    let intervals: IBig = intervals.to_int().value();

    usize::try_from(intervals)
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| ZetaError::invalid_range("scan grid has too many points"))
}
