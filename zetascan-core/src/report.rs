use crate::{ScanRange, ZeroRecord, ZetaResult};
use serde::{Deserialize, Serialize};

/// Machine-readable summary of a completed scan.
///
/// Samples are summarized by count only; non-finite Z values would not
/// survive JSON (serde_json writes NaN as null).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub range: ScanRange,
    pub zeros: Vec<ZeroRecord>,
    pub sample_count: usize,
    /// Grid points where Z was not finite.
    #[serde(default)]
    pub anomalies: usize,
}

impl ScanSummary {
    pub fn zero_count(&self) -> usize {
        self.zeros.len()
    }

    pub fn to_json(&self) -> ZetaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ZetaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
