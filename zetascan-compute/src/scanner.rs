//! Fixed-step scan for sign changes of Z along the critical line.
//!
//! The scan is strictly sequential in t: detection compares each grid value
//! with the one before it, and zeros and samples reach the sink in
//! increasing-t order. Parallelism lives inside a single Z evaluation only.

use crate::bisect::find_zero;
use crate::{Evaluator, ZEvaluator};
use zetascan_core::{Real, SamplePoint, ScanRange, ZeroRecord, ZetaResult, DEFAULT_MAX_ITER};

/// Receiver for scan results, called in increasing-t order.
pub trait ScanSink {
    fn on_sample(&mut self, sample: &SamplePoint) -> ZetaResult<()>;

    fn on_zero(&mut self, zero: &ZeroRecord) -> ZetaResult<()>;

    /// Called once after the last grid point.
    fn finish(&mut self) -> ZetaResult<()> {
        Ok(())
    }
}

impl<S: ScanSink + ?Sized> ScanSink for &mut S {
    fn on_sample(&mut self, sample: &SamplePoint) -> ZetaResult<()> {
        (**self).on_sample(sample)
    }

    fn on_zero(&mut self, zero: &ZeroRecord) -> ZetaResult<()> {
        (**self).on_zero(zero)
    }

    fn finish(&mut self) -> ZetaResult<()> {
        (**self).finish()
    }
}

/// Fan out to two sinks, first then second.
impl<A: ScanSink, B: ScanSink> ScanSink for (A, B) {
    fn on_sample(&mut self, sample: &SamplePoint) -> ZetaResult<()> {
        self.0.on_sample(sample)?;
        self.1.on_sample(sample)
    }

    fn on_zero(&mut self, zero: &ZeroRecord) -> ZetaResult<()> {
        self.0.on_zero(zero)?;
        self.1.on_zero(zero)
    }

    fn finish(&mut self) -> ZetaResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

/// Counters for one scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub zeros: usize,
    pub samples: usize,
    /// Grid points where Z was NaN or infinite.
    pub anomalies: usize,
    /// Detected sign changes the bisector could not confirm.
    pub unresolved_brackets: usize,
}

/// In-memory scan result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanOutcome {
    pub zeros: Vec<ZeroRecord>,
    pub samples: Vec<SamplePoint>,
    pub stats: ScanStats,
}

impl ScanSink for ScanOutcome {
    fn on_sample(&mut self, sample: &SamplePoint) -> ZetaResult<()> {
        self.samples.push(*sample);
        Ok(())
    }

    fn on_zero(&mut self, zero: &ZeroRecord) -> ZetaResult<()> {
        self.zeros.push(*zero);
        Ok(())
    }
}

/// Walks a [`ScanRange`], brackets sign changes and refines them.
#[derive(Clone, Debug)]
pub struct ZeroScanner<E = ZEvaluator> {
    evaluator: E,
    max_iter: usize,
}

impl Default for ZeroScanner<ZEvaluator> {
    fn default() -> Self {
        Self::new(ZEvaluator::default())
    }
}

impl<E: Evaluator> ZeroScanner<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            max_iter: DEFAULT_MAX_ITER,
        }
    }

    /// Bisection iteration budget per bracket.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Scan `range` and collect everything in memory.
    pub fn scan(&self, range: &ScanRange) -> ZetaResult<ScanOutcome> {
        let mut outcome = ScanOutcome::default();
        let stats = self.scan_into(range, &mut outcome)?;
        outcome.stats = stats;
        Ok(outcome)
    }

    /// Scan `range`, streaming samples and zeros into `sink`.
    ///
    /// The range is validated before the sink sees anything. Grid points are
    /// `start + k·step` for `k = 0..=floor((end - start)/step)`. A bracket the
    /// bisector rejects is logged and skipped; a non-finite Z is emitted as a
    /// sample but never takes part in a sign comparison.
    pub fn scan_into<S>(&self, range: &ScanRange, sink: &mut S) -> ZetaResult<ScanStats>
    where
        S: ScanSink + ?Sized,
    {
        range.validate()?;
        let len = range.grid_len()?;
        let options = range.bisect_options(self.max_iter);

        log::info!(
            "Scanning t in [{}, {}] step {} tol {:e} ({} grid points)",
            range.start,
            range.end,
            range.step,
            range.tol,
            len
        );

        let mut stats = ScanStats::default();
        let mut prev: Option<Real> = None;

        for k in 0..len {
            let t = range.point(k);
            let z = self.evaluator.evaluate(t);
            sink.on_sample(&SamplePoint::new(t, z))?;
            stats.samples += 1;

            if !z.is_finite() {
                log::warn!("Z({}) = {} is not finite, skipping", t, z);
                stats.anomalies += 1;
                prev = None;
                continue;
            }

            if let Some(p) = prev {
                if p * z < 0.0 {
                    let t_prev = range.point(k - 1);
                    match find_zero(&self.evaluator, t_prev, t, &options) {
                        Ok(root) => {
                            stats.zeros += 1;
                            let zero = ZeroRecord::new(stats.zeros, root);
                            log::debug!(
                                "zero #{} at t = {} in [{}, {}]",
                                zero.index,
                                root,
                                t_prev,
                                t
                            );
                            sink.on_zero(&zero)?;
                        }
                        Err(e) if e.is_recoverable() => {
                            log::warn!("skipping bracket [{}, {}]: {}", t_prev, t, e);
                            stats.unresolved_brackets += 1;
                        }
                        Err(e) => return Err(e),
                    }
                }
            }
            prev = Some(z);
        }

        sink.finish()?;
        log::info!(
            "Scan complete: {} zeros, {} samples, {} anomalies",
            stats.zeros,
            stats.samples,
            stats.anomalies
        );
        Ok(stats)
    }
}
