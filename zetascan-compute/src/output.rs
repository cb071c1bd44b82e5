//! Zero-list and curve artifacts.
//!
//! `ArtifactWriter` owns both output streams for the duration of a scan. It
//! is only constructed after the range validates, so a bad configuration
//! never leaves empty files behind. Both streams are buffered; `finish`
//! flushes them, and dropping the writer flushes on every other exit path.

use crate::ScanSink;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use zetascan_core::{to_fixed, SamplePoint, ZeroRecord, ZetaError, ZetaResult};

/// First line of the curve artifact.
pub const CURVE_HEADER: &str = "t,Zt";

pub struct ArtifactWriter<Z: Write, C: Write> {
    zeros: BufWriter<Z>,
    curve: BufWriter<C>,
    zero_lines: usize,
    curve_rows: usize,
}

impl ArtifactWriter<File, File> {
    /// Create (truncating) both artifact files.
    pub fn create(zeros_path: &Path, curve_path: &Path) -> ZetaResult<Self> {
        let zeros = File::create(zeros_path)?;
        let curve = File::create(curve_path)?;
        Self::new(zeros, curve)
    }
}

impl<Z: Write, C: Write> ArtifactWriter<Z, C> {
    /// Wrap two writers and emit the curve header.
    pub fn new(zeros: Z, curve: C) -> ZetaResult<Self> {
        let mut curve = BufWriter::new(curve);
        writeln!(curve, "{}", CURVE_HEADER)?;
        Ok(Self {
            zeros: BufWriter::new(zeros),
            curve,
            zero_lines: 0,
            curve_rows: 0,
        })
    }

    /// Lines written to the zero list so far.
    pub fn zero_lines(&self) -> usize {
        self.zero_lines
    }

    /// Data rows (excluding the header) written to the curve so far.
    pub fn curve_rows(&self) -> usize {
        self.curve_rows
    }

    /// Flush and hand back the underlying writers.
    pub fn into_inner(self) -> ZetaResult<(Z, C)> {
        let zeros = self
            .zeros
            .into_inner()
            .map_err(|e| ZetaError::Io(e.into_error()))?;
        let curve = self
            .curve
            .into_inner()
            .map_err(|e| ZetaError::Io(e.into_error()))?;
        Ok((zeros, curve))
    }
}

impl<Z: Write, C: Write> ScanSink for ArtifactWriter<Z, C> {
    fn on_sample(&mut self, sample: &SamplePoint) -> ZetaResult<()> {
        writeln!(self.curve, "{},{}", sample.t, sample.z)?;
        self.curve_rows += 1;
        Ok(())
    }

    fn on_zero(&mut self, zero: &ZeroRecord) -> ZetaResult<()> {
        writeln!(self.zeros, "{}", to_fixed(zero.t))?;
        self.zero_lines += 1;
        Ok(())
    }

    fn finish(&mut self) -> ZetaResult<()> {
        self.zeros.flush()?;
        self.curve.flush()?;
        Ok(())
    }
}
