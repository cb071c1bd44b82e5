//! Error types shared by the scanning crates.

use crate::Real;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZetaError {
    /// Scan configuration that cannot be walked. Fatal, raised before any output exists.
    #[error("invalid scan range: {reason}")]
    InvalidRange { reason: String },

    /// A bisection bracket whose endpoints share a sign. Recoverable.
    #[error("no sign change in [{t1}, {t2}] (Z = {f1}, {f2})")]
    NoSignChange {
        t1: Real,
        t2: Real,
        f1: Real,
        f2: Real,
    },

    /// Z evaluated to NaN or infinity.
    #[error("non-finite Z({t}) = {value}")]
    NumericAnomaly { t: Real, value: Real },

    #[error("failed to parse {name} from {input:?}: {message}")]
    Parse {
        name: &'static str,
        input: String,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ZetaError {
    pub fn invalid_range(reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            reason: reason.into(),
        }
    }

    /// Whether the scan may continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoSignChange { .. } | Self::NumericAnomaly { .. })
    }
}

pub type ZetaResult<T> = Result<T, ZetaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sign_change_is_recoverable() {
        let err = ZetaError::NoSignChange {
            t1: 1.0,
            t2: 2.0,
            f1: 0.5,
            f2: 0.25,
        };
        assert!(err.is_recoverable());
    }

    #[test]
    fn invalid_range_is_fatal() {
        let err = ZetaError::invalid_range("step must be positive");
        assert!(!err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "invalid scan range: step must be positive"
        );
    }
}
