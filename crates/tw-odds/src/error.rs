//! Error types for the probability engine.

/// Errors that can occur while computing a distribution.
#[derive(Debug, thiserror::Error)]
pub enum OddsError {
    /// Roll parameters describe a pool with fewer than two dice.
    #[error("invalid roll parameters: {0}")]
    InvalidRollParameters(String),

    /// Injury threshold bands are inverted, overlapping, or gapped.
    #[error("invalid threshold configuration: {0}")]
    InvalidThresholds(String),

    /// A distribution has negative mass or does not sum to 1.
    #[error("malformed distribution: {0}")]
    MalformedDistribution(String),
}

/// Convenience result type for engine operations.
pub type OddsResult<T> = Result<T, OddsError>;
