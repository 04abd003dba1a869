//! Replacement policy selector.

use std::fmt;
use std::str::FromStr;

use crate::common::{ConfigError, Error, Result};
use crate::sim::replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Replacer};

/// Which page-replacement policy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Evict the page that was loaded first.
    #[default]
    Fifo,
    /// Evict the page that was referenced least recently.
    Lru,
    /// Evict the page whose next reference is farthest in the future.
    Optimal,
}

impl Policy {
    /// Every policy, in display order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Build a fresh replacer implementing this policy.
    pub fn build_replacer(self, frame_count: usize) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::with_capacity(frame_count)),
            Policy::Lru => Box::new(LruReplacer::with_capacity(frame_count)),
            Policy::Optimal => Box::new(OptimalReplacer::new()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "OPTIMAL",
        };
        f.write_str(name)
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            _ => Err(ConfigError::UnknownPolicy(s.trim().to_string()).into()),
        }
    }
}
