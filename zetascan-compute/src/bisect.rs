//! Bisection refinement of a sign-change bracket.

use crate::Evaluator;
use zetascan_core::{BisectOptions, Bracket, Real, ZetaError, ZetaResult};

/// Result from a bisection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BisectResult {
    /// The zero estimate
    pub root: Real,
    /// Function value at `root`
    pub value: Real,
    /// Number of midpoint evaluations used
    pub iterations: usize,
    /// Bracket that contained `root` when the search stopped
    pub bracket: Bracket,
    /// Whether `|value| < tol` ended the search (false: budget exhausted)
    pub converged: bool,
}

/// Bisection method for a zero of `eval` in [t1, t2].
///
/// # Errors
/// * `NoSignChange` if f(t1) and f(t2) are strictly the same sign. Not fatal:
///   the caller should treat the bracket as holding no zero and move on.
/// * `NumericAnomaly` if either endpoint evaluates to NaN or infinity.
///
/// # Note
/// Convergence is linear; each iteration halves the bracket. The search
/// stops after `max_iter` midpoints whatever the tolerance, returning the
/// midpoint of the final bracket.
pub fn find_zero_detailed<E>(
    eval: &E,
    t1: Real,
    t2: Real,
    options: &BisectOptions,
) -> ZetaResult<BisectResult>
where
    E: Evaluator + ?Sized,
{
    let mut f1 = eval.evaluate(t1);
    let f2 = eval.evaluate(t2);

    for (t, value) in [(t1, f1), (t2, f2)] {
        if !value.is_finite() {
            log::warn!("bisection endpoint Z({}) = {} is not finite", t, value);
            return Err(ZetaError::NumericAnomaly { t, value });
        }
    }

    if f1 * f2 > 0.0 {
        log::warn!("No sign change in interval [{}, {}]", t1, t2);
        return Err(ZetaError::NoSignChange { t1, t2, f1, f2 });
    }

    let mut bracket = Bracket::new(t1, t2);

    for iter in 0..options.max_iter {
        let tm = bracket.midpoint();
        let fm = eval.evaluate(tm);

        if !fm.is_finite() {
            log::warn!("bisection midpoint Z({}) = {} is not finite", tm, fm);
            return Err(ZetaError::NumericAnomaly { t: tm, value: fm });
        }

        if fm.abs() < options.tol {
            return Ok(BisectResult {
                root: tm,
                value: fm,
                iterations: iter + 1,
                bracket,
                converged: true,
            });
        }

        // Keep the half whose endpoints still differ in sign
        if f1 * fm < 0.0 {
            bracket.t2 = tm;
        } else {
            bracket.t1 = tm;
            f1 = fm;
        }
    }

    let root = bracket.midpoint();
    log::debug!(
        "bisection budget of {} exhausted, bracket width {:e}",
        options.max_iter,
        bracket.width()
    );
    Ok(BisectResult {
        root,
        value: eval.evaluate(root),
        iterations: options.max_iter,
        bracket,
        converged: false,
    })
}

/// Refine [t1, t2] to a single zero estimate. See [`find_zero_detailed`].
pub fn find_zero<E>(eval: &E, t1: Real, t2: Real, options: &BisectOptions) -> ZetaResult<Real>
where
    E: Evaluator + ?Sized,
{
    find_zero_detailed(eval, t1, t2, options).map(|result| result.root)
}
