pub mod config;
pub mod decimal;
pub mod error;
pub mod real;
pub mod records;
pub mod report;

pub use config::{BisectOptions, ScanRange, DEFAULT_MAX_ITER, DEFAULT_SCAN};
pub use decimal::{grid_point_count, shortest_decimal};
pub use error::{ZetaError, ZetaResult};
pub use real::{to_fixed, Real, OUTPUT_DIGITS};
pub use records::{Bracket, SamplePoint, ZeroRecord};
pub use report::ScanSummary;
