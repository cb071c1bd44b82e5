//! Scan configuration.
//!
//! `ScanRange` describes the grid walked along the critical line and the
//! tolerance handed to the bisector. It is validated once, before any
//! evaluation or output happens.

use crate::decimal::{grid_point_count, parse_decimal};
use crate::{Real, ZetaError, ZetaResult};
use serde::{Deserialize, Serialize};

/// Iteration budget for a single bisection.
pub const DEFAULT_MAX_ITER: usize = 100;

/// The canonical default scan: the first three zeros lie in [14, 30].
pub static DEFAULT_SCAN: ScanRange = ScanRange {
    start: 14.0,
    end: 30.0,
    step: 0.01,
    tol: 1e-14,
};

/// Grid and tolerance for one scan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanRange {
    pub start: Real,
    pub end: Real,
    /// Grid spacing. Must be positive.
    pub step: Real,
    /// `|Z|` below which a bisection midpoint is accepted as the zero.
    pub tol: Real,
}

impl Default for ScanRange {
    fn default() -> Self {
        DEFAULT_SCAN
    }
}

impl ScanRange {
    pub fn new(start: Real, end: Real, step: Real, tol: Real) -> Self {
        Self {
            start,
            end,
            step,
            tol,
        }
    }

    /// Parse a range from decimal strings.
    ///
    /// Missing `step` / `tol` fall back to the defaults. Returns a `Parse`
    /// error naming the offending field; the result is not yet validated.
    pub fn from_strings(
        start: &str,
        end: &str,
        step: Option<&str>,
        tol: Option<&str>,
    ) -> ZetaResult<Self> {
        Ok(Self {
            start: parse_real("start", start)?,
            end: parse_real("end", end)?,
            step: step
                .map(|s| parse_real("step", s))
                .transpose()?
                .unwrap_or(DEFAULT_SCAN.step),
            tol: tol
                .map(|s| parse_real("tol", s))
                .transpose()?
                .unwrap_or(DEFAULT_SCAN.tol),
        })
    }

    /// Check every invariant a scan relies on.
    ///
    /// Non-positive steps would never terminate, so they are rejected here
    /// rather than discovered inside the loop.
    pub fn validate(&self) -> ZetaResult<()> {
        for (name, value) in [
            ("start", self.start),
            ("end", self.end),
            ("step", self.step),
            ("tol", self.tol),
        ] {
            if !value.is_finite() {
                return Err(ZetaError::invalid_range(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.step <= 0.0 {
            return Err(ZetaError::invalid_range(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.tol <= 0.0 {
            return Err(ZetaError::invalid_range(format!(
                "tolerance must be positive, got {}",
                self.tol
            )));
        }
        if self.start <= 0.0 {
            return Err(ZetaError::invalid_range(format!(
                "start must be above 0, got {}",
                self.start
            )));
        }
        if self.start >= self.end {
            return Err(ZetaError::invalid_range(format!(
                "start {} must be below end {}",
                self.start, self.end
            )));
        }
        self.grid_len()?;
        Ok(())
    }

    /// Number of grid points from `start` to `end`, both inclusive when aligned.
    pub fn grid_len(&self) -> ZetaResult<usize> {
        grid_point_count(self.start, self.end, self.step)
    }

    /// Abscissa of grid point `k`, computed without accumulating drift.
    #[inline]
    pub fn point(&self, k: usize) -> Real {
        self.start + k as Real * self.step
    }

    /// Bisection settings derived from this range.
    pub fn bisect_options(&self, max_iter: usize) -> BisectOptions {
        BisectOptions {
            tol: self.tol,
            max_iter,
        }
    }
}

fn parse_real(name: &'static str, input: &str) -> ZetaResult<Real> {
    // Reject garbage with the decimal parser first so errors read the same
    // for every field, then take the nearest f64.
    parse_decimal(name, input)?;
    input.trim().parse::<Real>().map_err(|e| ZetaError::Parse {
        name,
        input: input.to_string(),
        message: e.to_string(),
    })
}

/// Options for a single bisection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BisectOptions {
    pub tol: Real,
    pub max_iter: usize,
}

impl Default for BisectOptions {
    fn default() -> Self {
        Self {
            tol: DEFAULT_SCAN.tol,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}
