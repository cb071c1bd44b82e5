pub mod cli;
pub mod console;

pub use cli::Args;
pub use console::ConsoleReporter;

use anyhow::{Context, Result};
use std::io::Write;
use zetascan_compute::{ArtifactWriter, Summation, ZEvaluator, ZeroScanner};
use zetascan_core::ScanSummary;

/// Run one scan: validate, write artifacts, report to `out`.
///
/// Configuration errors return before any output file is touched.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<ScanSummary> {
    let range = args.range().context("invalid command line")?;
    range.validate().context("invalid command line")?;

    writeln!(out, "{}", console::banner(&range))?;

    let summation = if args.sequential {
        Summation::Sequential
    } else {
        Summation::Auto
    };
    let scanner = ZeroScanner::new(ZEvaluator::new(summation)).with_max_iter(args.max_iter);

    let mut artifacts = ArtifactWriter::create(&args.zeros_out, &args.curve_out)
        .with_context(|| {
            format!(
                "failed to create {} / {}",
                args.zeros_out.display(),
                args.curve_out.display()
            )
        })?;
    let mut reporter = ConsoleReporter::new(&mut *out);

    let stats = scanner
        .scan_into(&range, &mut (&mut artifacts, &mut reporter))
        .context("scan failed")?;
    let (_, zeros) = reporter.into_parts();

    log::info!(
        "wrote {} zeros to {} and {} samples to {}",
        artifacts.zero_lines(),
        args.zeros_out.display(),
        artifacts.curve_rows(),
        args.curve_out.display()
    );

    let summary = ScanSummary {
        range,
        zeros,
        sample_count: stats.samples,
        anomalies: stats.anomalies,
    };

    if let Some(path) = &args.summary {
        std::fs::write(path, summary.to_json()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    writeln!(out, "{}", console::conclusion(summary.zero_count()))?;
    Ok(summary)
}
