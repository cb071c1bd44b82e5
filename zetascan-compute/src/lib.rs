pub mod bisect;
pub mod evaluator;
pub mod output;
pub mod scanner;
pub mod z_function;

pub use bisect::{find_zero, find_zero_detailed, BisectResult};
pub use evaluator::Evaluator;
pub use output::{ArtifactWriter, CURVE_HEADER};
pub use scanner::{ScanOutcome, ScanSink, ScanStats, ZeroScanner};
pub use z_function::{term_count, theta, Summation, ZEvaluator, ZTerms};

// Re-export core types for convenience
pub use zetascan_core::*;
