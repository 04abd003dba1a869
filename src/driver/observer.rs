//! Outcome consumers and the synchronous driver loop.

use crate::common::Result;
use crate::sim::{ReplacementSimulator, StatsSnapshot, StepOutcome, StepRecord};

/// Consumes step records as a driver produces them.
///
/// Observers only read outcomes; they have no way to influence the
/// simulator's decisions.
pub trait StepObserver {
    /// Called once per consumed reference, in order.
    fn on_step(&mut self, record: &StepRecord) -> Result<()>;

    /// Called once when the reference string is exhausted.
    fn on_complete(&mut self, _stats: &StatsSnapshot) -> Result<()> {
        Ok(())
    }
}

/// Ignores every outcome.
impl StepObserver for () {
    fn on_step(&mut self, _record: &StepRecord) -> Result<()> {
        Ok(())
    }
}

impl<T: StepObserver + ?Sized> StepObserver for &mut T {
    fn on_step(&mut self, record: &StepRecord) -> Result<()> {
        (**self).on_step(record)
    }

    fn on_complete(&mut self, stats: &StatsSnapshot) -> Result<()> {
        (**self).on_complete(stats)
    }
}

/// Keeps every record, for replay or inspection after a run.
#[derive(Debug, Default, Clone)]
pub struct TraceRecorder {
    records: Vec<StepRecord>,
    summary: Option<StatsSnapshot>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Final statistics, once the run has completed.
    pub fn summary(&self) -> Option<&StatsSnapshot> {
        self.summary.as_ref()
    }

    pub fn into_records(self) -> Vec<StepRecord> {
        self.records
    }
}

impl StepObserver for TraceRecorder {
    fn on_step(&mut self, record: &StepRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn on_complete(&mut self, stats: &StatsSnapshot) -> Result<()> {
        self.summary = Some(*stats);
        Ok(())
    }
}

/// Step `sim` until the reference string is exhausted.
///
/// Every record goes to `observer`, followed by the final statistics.
/// Steps already taken before the call are not replayed.
///
/// # Errors
/// Propagates simulator errors and observer errors.
pub fn play_to_end<O>(sim: &mut ReplacementSimulator, mut observer: O) -> Result<StatsSnapshot>
where
    O: StepObserver,
{
    while let StepOutcome::Step(record) = sim.step()? {
        observer.on_step(&record)?;
    }

    let stats = sim.stats();
    observer.on_complete(&stats)?;
    Ok(stats)
}
