//! Simulation statistics tracking.

use std::fmt;

/// Cumulative counters for a run.
///
/// Owned by the simulator and reset with it. Every consumed reference
/// increments exactly one of `hits` or `faults`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// References found already resident.
    pub hits: u64,

    /// References that had to be loaded.
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl SimStats {
    /// Create a new tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub fn record_fault(&mut self, evicted: bool) {
        self.faults += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Number of references consumed so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.hits + self.faults
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Freeze the counters together with the run length.
    pub fn snapshot(&self, total_references: usize) -> StatsSnapshot {
        StatsSnapshot {
            total_references: total_references as u64,
            hits: self.hits,
            faults: self.faults,
            evictions: self.evictions,
        }
    }
}

/// A point-in-time view of run statistics.
///
/// Rates are relative to `total_references`, the length of the whole
/// reference string, so they grow toward their final value as a run
/// progresses.
///
/// # Example
/// ```
/// use pagesim::SimStats;
///
/// let mut stats = SimStats::new();
/// stats.record_hit();
/// stats.record_fault(false);
/// stats.record_fault(true);
///
/// let snapshot = stats.snapshot(3);
/// assert_eq!(snapshot.fault_rate_percent(), 67);
/// println!("{}", snapshot);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total_references: u64,
    pub hits: u64,
    pub faults: u64,
    pub evictions: u64,
}

impl StatsSnapshot {
    /// Number of references consumed when the snapshot was taken.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.hits + self.faults
    }

    /// Fraction of all references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.total_references == 0 {
            0.0
        } else {
            self.hits as f64 / self.total_references as f64
        }
    }

    /// Hit rate rounded to the nearest whole percent.
    pub fn hit_rate_percent(&self) -> u64 {
        rounded_percent(self.hits, self.total_references)
    }

    /// Fault rate rounded to the nearest whole percent.
    pub fn fault_rate_percent(&self) -> u64 {
        rounded_percent(self.faults, self.total_references)
    }
}

/// `part / total` as a percentage, rounding halves up.
fn rounded_percent(part: u64, total: u64) -> u64 {
    if total == 0 {
        0
    } else {
        (part * 200 + total) / (total * 2)
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, hits: {}, faults: {}, evictions: {}, fault_rate: {}% }}",
            self.total_references,
            self.hits,
            self.faults,
            self.evictions,
            self.fault_rate_percent()
        )
    }
}
