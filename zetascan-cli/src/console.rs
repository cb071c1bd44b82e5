//! Human-readable console surface: banner, one line per zero, conclusion.

use std::io::Write;
use zetascan_compute::ScanSink;
use zetascan_core::{to_fixed, SamplePoint, ScanRange, ZeroRecord, ZetaResult};

pub fn banner(range: &ScanRange) -> String {
    format!(
        "Scanning for non-trivial zeros of the Riemann zeta function \
         (Riemann-Siegel formula, with correction term)...\n\
         Range: {} to {}, step: {}, tolerance: {:e}",
        range.start, range.end, range.step, range.tol
    )
}

pub fn zero_line(zero: &ZeroRecord) -> String {
    format!("Zero #{} at s = 0.5 + {}i", zero.index, to_fixed(zero.t))
}

pub fn conclusion(zero_count: usize) -> String {
    if zero_count == 0 {
        "No zeros found in the specified range.".to_string()
    } else {
        format!("Total zeros found: {}", zero_count)
    }
}

/// Prints each zero as it is found and keeps them for the summary.
pub struct ConsoleReporter<W: Write> {
    out: W,
    zeros: Vec<ZeroRecord>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            zeros: Vec::new(),
        }
    }

    pub fn into_parts(self) -> (W, Vec<ZeroRecord>) {
        (self.out, self.zeros)
    }
}

impl<W: Write> ScanSink for ConsoleReporter<W> {
    fn on_sample(&mut self, _sample: &SamplePoint) -> ZetaResult<()> {
        Ok(())
    }

    fn on_zero(&mut self, zero: &ZeroRecord) -> ZetaResult<()> {
        writeln!(self.out, "{}", zero_line(zero))?;
        self.zeros.push(*zero);
        Ok(())
    }

    fn finish(&mut self) -> ZetaResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
