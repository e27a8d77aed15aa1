//! Error types for bandit-core

use thiserror::Error;

/// Error type for policy construction and sampling
#[derive(Debug, Error)]
pub enum BanditError {
    /// Algorithm name is not one of the supported policies
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Agent parameters failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sampler rejected its distribution parameters
    #[error("Distribution error: {0}")]
    Distribution(String),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bandit operations
pub type Result<T> = std::result::Result<T, BanditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BanditError::UnknownAlgorithm("random".into());
        assert_eq!(err.to_string(), "Unknown algorithm: random");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: BanditError = io_err.into();
        assert!(matches!(err, BanditError::Io(_)));
    }
}
