//! Riemann–Siegel Z-function evaluation.
//!
//! Z(t) = 2·Σ_{n=1..N} cos(t·ln n − t/2 − π/8)/√n + R1 + R2, with
//! N = ⌊√(t/2π)⌋ and two correction terms built from the phase of the
//! first omitted term n = N + 1. Sign changes of Z bracket zeros of
//! ζ(1/2 + i·t).
//!
//! The main sum is the hot path. Above [`PARALLEL_MIN_TERMS`] terms it is
//! split across the rayon pool and combined with a tree reduction. Addition
//! order then differs from the sequential sum, so results may differ in the
//! last bits. That difference is rounding noise, not an error; use
//! [`Summation::Sequential`] when bit-reproducible output matters.

use crate::Evaluator;
use zetascan_core::real::{PI, PI_OVER_8, TWO_PI};
use zetascan_core::Real;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many terms the rayon fork/join overhead outweighs the sum.
pub const PARALLEL_MIN_TERMS: usize = 1024;

/// How the main sum is reduced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Summation {
    /// Parallel above [`PARALLEL_MIN_TERMS`], sequential below.
    #[default]
    Auto,
    /// Always a left-to-right sum. Bit-reproducible.
    Sequential,
    /// Always through the rayon pool (sequential without the `parallel` feature).
    Parallel,
}

/// Number of main-sum terms N(t) = ⌊√(t/2π)⌋. Non-decreasing in t.
///
/// Zero for t < 2π and for non-positive or NaN input.
#[inline]
pub fn term_count(t: Real) -> usize {
    // Float-to-int `as` saturates, and maps NaN to 0.
    (t / TWO_PI).sqrt().floor() as usize
}

/// Riemann–Siegel theta, θ(t) = (t/2)·ln(t/2π) − t/2 − π/8.
///
/// Reported alongside Z for diagnostics only; Z itself does not use it.
pub fn theta(t: Real) -> Real {
    t * (t / TWO_PI).ln() / 2.0 - t / 2.0 - PI_OVER_8
}

#[inline]
fn phase(t: Real, n: usize) -> Real {
    t * (n as Real).ln() - t / 2.0 - PI_OVER_8
}

#[inline]
fn term(t: Real, n: usize) -> Real {
    phase(t, n).cos() / (n as Real).sqrt()
}

fn main_sum_sequential(t: Real, n_terms: usize) -> Real {
    (1..=n_terms).map(|n| term(t, n)).sum()
}

#[cfg(feature = "parallel")]
fn main_sum_parallel(t: Real, n_terms: usize) -> Real {
    (1..=n_terms).into_par_iter().map(|n| term(t, n)).sum()
}

#[cfg(not(feature = "parallel"))]
fn main_sum_parallel(t: Real, n_terms: usize) -> Real {
    main_sum_sequential(t, n_terms)
}

/// Every intermediate of one Z evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZTerms {
    pub t: Real,
    /// N(t), the number of main-sum terms.
    pub n_terms: usize,
    /// Σ cos(φₙ)/√n over n = 1..N (not yet doubled).
    pub main_sum: Real,
    pub r1: Real,
    pub r2: Real,
    /// Inert; see [`theta`].
    pub theta: Real,
    /// 2·main_sum + r1 + r2.
    pub z: Real,
}

/// Stateless Riemann–Siegel Z evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZEvaluator {
    summation: Summation,
}

impl ZEvaluator {
    pub fn new(summation: Summation) -> Self {
        Self { summation }
    }

    /// Evaluator whose results are bit-identical across runs and thread counts.
    pub fn sequential() -> Self {
        Self::new(Summation::Sequential)
    }

    fn main_sum(&self, t: Real, n_terms: usize) -> Real {
        let parallel = match self.summation {
            Summation::Auto => n_terms >= PARALLEL_MIN_TERMS,
            Summation::Sequential => false,
            Summation::Parallel => true,
        };
        if parallel {
            main_sum_parallel(t, n_terms)
        } else {
            main_sum_sequential(t, n_terms)
        }
    }

    /// Evaluate Z(t) and keep every intermediate.
    ///
    /// Defined for t > 0. Overflow or NaN propagates into the result.
    pub fn terms(&self, t: Real) -> ZTerms {
        let n_terms = term_count(t);
        let main_sum = self.main_sum(t, n_terms);

        let next = n_terms + 1;
        let phi_next = phase(t, next);
        let sign = if n_terms % 2 == 0 { 1.0 } else { -1.0 };
        let scale = (next as Real).sqrt() * PI;

        let r1 = sign * phi_next.cos() / scale;
        let r2 = -sign * phi_next.sin() * (t / (TWO_PI * next as Real)) / scale;

        ZTerms {
            t,
            n_terms,
            main_sum,
            r1,
            r2,
            theta: theta(t),
            z: 2.0 * main_sum + r1 + r2,
        }
    }

    /// Evaluate Z(t).
    #[inline]
    pub fn z(&self, t: Real) -> Real {
        self.terms(t).z
    }
}

impl Evaluator for ZEvaluator {
    #[inline]
    fn evaluate(&self, t: Real) -> Real {
        self.z(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_count_in_default_range() {
        assert_eq!(term_count(14.0), 1);
        assert_eq!(term_count(20.0), 1);
        assert_eq!(term_count(26.0), 2);
        assert_eq!(term_count(30.0), 2);
    }

    #[test]
    fn term_count_is_zero_below_two_pi() {
        assert_eq!(term_count(1.0), 0);
        assert_eq!(term_count(6.0), 0);
        assert_eq!(term_count(0.0), 0);
        assert_eq!(term_count(-5.0), 0);
        assert_eq!(term_count(f64::NAN), 0);
    }

    #[test]
    fn term_count_is_non_decreasing() {
        let mut last = 0;
        for k in 0..10_000 {
            let n = term_count(1.0 + k as f64 * 0.37);
            assert!(n >= last, "N decreased at k = {k}");
            last = n;
        }
    }

    #[test]
    fn matches_reference_values() {
        let eval = ZEvaluator::sequential();
        assert!((eval.z(14.0) - 1.2271366394721595).abs() < 1e-12);
        assert!((eval.z(30.0) - (-0.669423549822199)).abs() < 1e-12);
    }

    #[test]
    fn empty_sum_still_applies_corrections() {
        let t = 1.0;
        let terms = ZEvaluator::sequential().terms(t);
        assert_eq!(terms.n_terms, 0);
        assert_eq!(terms.main_sum, 0.0);

        // N + 1 = 1, so ln(1) = 0 and the phase is -t/2 - π/8.
        let phi = -t / 2.0 - PI_OVER_8;
        let r1 = phi.cos() / PI;
        let r2 = -phi.sin() * (t / TWO_PI) / PI;
        assert!((terms.r1 - r1).abs() < 1e-15);
        assert!((terms.r2 - r2).abs() < 1e-15);
        assert!((terms.z - (r1 + r2)).abs() < 1e-15);
    }

    #[test]
    fn odd_term_count_flips_correction_sign() {
        let t = 14.0;
        let terms = ZEvaluator::sequential().terms(t);
        assert_eq!(terms.n_terms, 1);

        let phi = t * 2.0_f64.ln() - t / 2.0 - PI_OVER_8;
        let expected_r1 = -phi.cos() / (2.0_f64.sqrt() * PI);
        assert!((terms.r1 - expected_r1).abs() < 1e-15);
    }

    #[test]
    fn theta_does_not_feed_z() {
        let terms = ZEvaluator::sequential().terms(21.0);
        assert_eq!(terms.z, 2.0 * terms.main_sum + terms.r1 + terms.r2);
        assert_eq!(terms.theta, theta(21.0));
    }

    #[test]
    fn sequential_is_bit_reproducible() {
        let eval = ZEvaluator::sequential();
        for &t in &[14.0, 17.3, 25.010858, 1.0e5, 3.0e6] {
            assert_eq!(eval.z(t).to_bits(), eval.z(t).to_bits());
        }
    }

    #[test]
    fn parallel_matches_sequential_within_rounding() {
        // N(1e7) = 1261, above the parallel threshold.
        let t = 1.0e7;
        assert!(term_count(t) >= PARALLEL_MIN_TERMS);

        let seq = ZEvaluator::sequential().z(t);
        let par = ZEvaluator::new(Summation::Parallel).z(t);
        let auto = ZEvaluator::default().z(t);
        assert!((seq - par).abs() < 1e-9, "seq = {seq}, par = {par}");
        assert!((seq - auto).abs() < 1e-9, "seq = {seq}, auto = {auto}");
    }

    #[test]
    fn evaluator_trait_delegates_to_z() {
        let eval = ZEvaluator::default();
        assert_eq!(Evaluator::evaluate(&eval, 18.5), eval.z(18.5));
    }

    #[test]
    fn non_finite_input_propagates() {
        let z = ZEvaluator::default().z(f64::NAN);
        assert!(z.is_nan());
    }
}
