//! Side-by-side policy comparison.

use tracing::info;

use crate::common::Result;
use crate::driver::play_to_end;
use crate::sim::{Policy, ReferenceString, ReplacementSimulator, SimConfig, StatsSnapshot};

/// Run every policy to completion on the same input.
///
/// Results are in [`Policy::ALL`] order.
///
/// # Errors
/// - `Error::InvalidConfiguration` if `frame_count` is 0
pub fn compare_policies(
    frame_count: usize,
    references: &ReferenceString,
) -> Result<Vec<(Policy, StatsSnapshot)>> {
    Policy::ALL
        .iter()
        .map(|&policy| -> Result<(Policy, StatsSnapshot)> {
            let config = SimConfig::new(policy, frame_count, references.clone());
            let mut sim = ReplacementSimulator::new(config)?;
            let stats = play_to_end(&mut sim, ())?;
            info!(%policy, hits = stats.hits, faults = stats.faults, "policy finished");
            Ok((policy, stats))
        })
        .collect()
}
