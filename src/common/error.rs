//! Error types for pagesim.

use thiserror::Error;

use crate::sim::Policy;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
#[derive(Debug, Error)]
pub enum Error {
    /// The run could not be configured.
    ///
    /// Returned by `reset` (and everything that parses user input) before
    /// any simulator state is touched.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// The replacer had no victim to offer for a full frame table.
    ///
    /// This indicates a bug - a full table always has a victim.
    #[error("{0} replacer found no victim in a full frame table")]
    NoVictim(Policy),

    /// I/O error while rendering outcomes.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The auto-play worker thread panicked.
    #[error("auto-play worker panicked")]
    AutoPlayPanicked,
}

impl Error {
    /// Whether this error came from configuration validation.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Error::InvalidConfiguration(_))
    }
}

/// Why a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A run needs at least one frame.
    #[error("frame count must be at least 1")]
    ZeroFrames,

    /// Frame count text was not a positive integer.
    #[error("frame count must be a positive integer, got {0:?}")]
    InvalidFrameCount(String),

    /// A token in the reference string was not an integer.
    #[error("reference #{position} is not an integer: {token:?}")]
    MalformedReference { position: usize, token: String },

    /// Policy name did not match any known policy.
    #[error("unknown replacement policy {0:?}")]
    UnknownPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: Error = ConfigError::ZeroFrames.into();
        assert_eq!(
            format!("{}", err),
            "invalid configuration: frame count must be at least 1"
        );

        let err = Error::NoVictim(Policy::Lru);
        assert_eq!(
            format!("{}", err),
            "LRU replacer found no victim in a full frame table"
        );
    }

    #[test]
    fn test_malformed_reference_display() {
        let err = ConfigError::MalformedReference {
            position: 2,
            token: "x".to_string(),
        };
        assert_eq!(format!("{}", err), "reference #2 is not an integer: \"x\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
        assert!(!Error::AutoPlayPanicked.is_invalid_configuration());
    }

    #[test]
    fn test_config_error_is_invalid_configuration() {
        let err: Error = ConfigError::UnknownPolicy("mru".to_string()).into();
        assert!(err.is_invalid_configuration());
    }
}
