//! Error types for test configuration.
//!
//! Numeric edge cases (empty samples, zero expected counts) are not errors:
//! they surface as NaN or infinite statistics. Only configuration mistakes
//! are reported here.

/// Error returned when a [`Config`](crate::Config) or
/// [`PowerAnalysis`](crate::PowerAnalysis) holds an unusable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A simulation needs at least one draw.
    ZeroIterations,

    /// Significance level outside the open interval (0, 1).
    AlphaOutOfRange(f64),

    /// Power analysis needs at least one run.
    ZeroRuns,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroIterations => write!(f, "iterations must be > 0"),
            Self::AlphaOutOfRange(alpha) => write!(f, "alpha must be in (0, 1), got {}", alpha),
            Self::ZeroRuns => write!(f, "runs must be > 0"),
        }
    }
}

impl std::error::Error for ConfigError {}
