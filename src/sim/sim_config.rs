//! Run configuration.

use crate::common::config::{DEFAULT_FRAME_COUNT, DEFAULT_REFERENCE_STRING};
use crate::common::{ConfigError, Result};
use crate::sim::{Policy, ReferenceString};

/// Everything needed to start a run.
///
/// # Example
/// ```
/// use pagesim::{Policy, SimConfig};
///
/// let config = SimConfig::from_text("lru", "3", "1,2,3,1").unwrap();
/// assert_eq!(config.policy, Policy::Lru);
/// assert_eq!(config.frame_count, 3);
/// assert_eq!(config.references.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub policy: Policy,
    pub frame_count: usize,
    pub references: ReferenceString,
}

impl SimConfig {
    /// Create a configuration. Call [`validate`](Self::validate) or hand it
    /// to the simulator to check it.
    pub fn new(
        policy: Policy,
        frame_count: usize,
        references: impl Into<ReferenceString>,
    ) -> Self {
        Self {
            policy,
            frame_count,
            references: references.into(),
        }
    }

    /// Parse a configuration from user-entered text.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` for an unknown policy, a frame count
    /// that is not a positive integer, or a malformed reference string.
    pub fn from_text(policy: &str, frame_count: &str, references: &str) -> Result<Self> {
        let policy: Policy = policy.parse()?;
        let frame_count = parse_frame_count(frame_count)?;
        let references: ReferenceString = references.parse()?;

        let config = Self::new(policy, frame_count, references);
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if there are no frames.
    pub fn validate(&self) -> Result<()> {
        if self.frame_count == 0 {
            return Err(ConfigError::ZeroFrames.into());
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        let references: ReferenceString = DEFAULT_REFERENCE_STRING.parse().unwrap_or_default();
        Self::new(Policy::default(), DEFAULT_FRAME_COUNT, references)
    }
}

fn parse_frame_count(text: &str) -> Result<usize> {
    let invalid = || ConfigError::InvalidFrameCount(text.trim().to_string());

    let value: i64 = text.trim().parse().map_err(|_| invalid())?;
    if value <= 0 {
        return Err(invalid().into());
    }
    usize::try_from(value).map_err(|_| invalid().into())
}
