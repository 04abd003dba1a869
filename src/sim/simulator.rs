//! Replacement Simulator - the stepwise replacement-decision engine.
//!
//! The [`ReplacementSimulator`] provides:
//! - Hit detection against a fixed frame table
//! - Fault handling with empty-frame fill and policy-driven eviction
//! - Hit/fault accounting
//! - Immutable per-step outcome records

use tracing::{debug, info, warn};

use crate::common::{Error, FrameId, PageId, Result};
use crate::sim::replacer::{Replacer, VictimContext};
use crate::sim::{
    FrameTable, Policy, ReferenceString, SimConfig, SimStats, StatsSnapshot, StepOutcome,
    StepRecord,
};

/// Where a run is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    /// Reset, no reference consumed yet.
    NotStarted,
    /// At least one reference consumed, more remain.
    Running,
    /// Every reference consumed. Terminal until the next reset.
    Complete,
}

/// Replays a reference string against a fixed number of frames.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                   ReplacementSimulator                   │
/// │  ┌──────────────────┐   ┌─────────────────────────────┐  │
/// │  │ references       │   │  frames: FrameTable         │  │
/// │  │ [7,0,1,2,...]    │   │  [Some(7)] [Some(0)] [None] │  │
/// │  │   ▲ cursor       │   └─────────────────────────────┘  │
/// │  └──────────────────┘                                    │
/// │  ┌──────────────────┐   ┌──────────────┐                 │
/// │  │ replacer         │   │ stats        │                 │
/// │  │ Box<dyn Replacer>│   │ hits, faults │                 │
/// │  └──────────────────┘   └──────────────┘                 │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// # Usage
/// ```
/// use pagesim::{Policy, ReplacementSimulator, SimConfig, StepOutcome};
///
/// let config = SimConfig::new(Policy::Lru, 2, [1, 2, 1, 3]);
/// let mut sim = ReplacementSimulator::new(config).unwrap();
///
/// while let StepOutcome::Step(record) = sim.step().unwrap() {
///     println!("page {} hit={}", record.page, record.was_hit);
/// }
/// assert_eq!(sim.stats().hits, 1);
/// ```
#[derive(Debug)]
pub struct ReplacementSimulator {
    policy: Policy,

    /// Immutable for the life of a run.
    references: ReferenceString,

    frames: FrameTable,

    /// Policy-specific bookkeeping.
    replacer: Box<dyn Replacer>,

    /// Index of the next reference to consume.
    cursor: usize,

    stats: SimStats,
}

impl ReplacementSimulator {
    /// Create a simulator ready to run `config`.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if the frame count is 0
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        info!(
            policy = %config.policy,
            frames = config.frame_count,
            references = config.references.len(),
            "simulator created"
        );

        Ok(Self {
            policy: config.policy,
            frames: FrameTable::new(config.frame_count),
            replacer: config.policy.build_replacer(config.frame_count),
            references: config.references,
            cursor: 0,
            stats: SimStats::new(),
        })
    }

    // ========================================================================
    // Public API: Run control
    // ========================================================================

    /// Discard the current run and start `config` from the beginning.
    ///
    /// Validation happens first: on error the current run is left as it was.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if the frame count is 0
    pub fn reset(&mut self, config: SimConfig) -> Result<()> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Consume the next reference.
    ///
    /// Returns [`StepOutcome::EndOfSequence`] without touching any state once
    /// the reference string is exhausted, however many times it is called.
    ///
    /// # Errors
    /// - `Error::NoVictim` if the replacer cannot name a victim for a full
    ///   frame table
    pub fn step(&mut self) -> Result<StepOutcome> {
        let Some(page) = self.references.get(self.cursor) else {
            return Ok(StepOutcome::EndOfSequence);
        };
        let step = self.cursor;

        let (frame, was_hit, evicted) = match self.frames.find(page) {
            Some(frame_id) => {
                self.replacer.record_hit(frame_id, page, step);
                self.stats.record_hit();
                (frame_id, true, None)
            }
            None => {
                let (frame_id, evicted) = self.handle_fault(page, step)?;
                self.stats.record_fault(evicted.is_some());
                (frame_id, false, evicted)
            }
        };

        self.cursor += 1;

        debug!(
            step,
            %page,
            hit = was_hit,
            %frame,
            evicted = ?evicted,
            "reference serviced"
        );

        Ok(StepOutcome::Step(StepRecord {
            step,
            page,
            was_hit,
            frame,
            evicted,
            frames: self.frames.snapshot(),
            cursor_after: self.cursor,
        }))
    }

    // ========================================================================
    // Public API: State and stats
    // ========================================================================

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn frame_count(&self) -> usize {
        self.frames.capacity()
    }

    pub fn references(&self) -> &ReferenceString {
        &self.references
    }

    /// Index of the next reference to consume.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current frame contents, in frame order.
    pub fn frames(&self) -> &[Option<PageId>] {
        self.frames.as_slice()
    }

    pub fn state(&self) -> SimState {
        if self.cursor >= self.references.len() {
            SimState::Complete
        } else if self.cursor == 0 {
            SimState::NotStarted
        } else {
            SimState::Running
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state() == SimState::Complete
    }

    /// Cumulative statistics for the current run.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.references.len())
    }

    // ========================================================================
    // Internal: Fault handling
    // ========================================================================

    /// Load `page` after a miss, evicting if no frame is free.
    ///
    /// Returns the frame now holding `page` and the page it displaced.
    fn handle_fault(&mut self, page: PageId, step: usize) -> Result<(FrameId, Option<PageId>)> {
        // Empty frames fill lowest index first
        if let Some(frame_id) = self.frames.first_empty() {
            self.frames.place(frame_id, page);
            self.replacer.record_load(frame_id, page, step);
            return Ok((frame_id, None));
        }

        let frame_id = self.select_victim(step)?;
        let evicted = self.frames.place(frame_id, page);
        if let Some(old) = evicted {
            self.replacer.record_eviction(frame_id, old);
        }
        self.replacer.record_load(frame_id, page, step);

        Ok((frame_id, evicted))
    }

    /// Ask the replacer for a victim frame.
    fn select_victim(&mut self, step: usize) -> Result<FrameId> {
        let ctx = VictimContext {
            frames: &self.frames,
            references: &self.references,
            cursor: step,
        };

        match self.replacer.select_victim(&ctx) {
            Some(frame_id) => Ok(frame_id),
            None => {
                warn!(policy = %self.policy, step, "replacer returned no victim");
                Err(Error::NoVictim(self.policy))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigError;

    fn sim(policy: Policy, frame_count: usize, references: &[i64]) -> ReplacementSimulator {
        ReplacementSimulator::new(SimConfig::new(policy, frame_count, references)).unwrap()
    }

    fn run(sim: &mut ReplacementSimulator) -> Vec<StepRecord> {
        let mut records = vec![];
        while let StepOutcome::Step(record) = sim.step().unwrap() {
            records.push(record);
        }
        records
    }

    fn pages(frames: &[Option<PageId>]) -> Vec<Option<i64>> {
        frames.iter().map(|slot| slot.map(|p| p.0)).collect()
    }

    #[test]
    fn test_new_simulator() {
        let sim = sim(Policy::Fifo, 3, &[1, 2]);
        assert_eq!(sim.frame_count(), 3);
        assert_eq!(sim.cursor(), 0);
        assert_eq!(sim.state(), SimState::NotStarted);
        assert_eq!(pages(sim.frames()), vec![None, None, None]);
    }

    #[test]
    fn test_zero_frames_rejected() {
        let err = ReplacementSimulator::new(SimConfig::new(Policy::Fifo, 0, [1])).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfiguration(ConfigError::ZeroFrames)
        ));
    }

    #[test]
    fn test_first_fault_fills_lowest_frame() {
        let mut sim = sim(Policy::Lru, 3, &[5]);
        let record = sim.step().unwrap().into_record().unwrap();

        assert_eq!(record.step, 0);
        assert_eq!(record.page, PageId::new(5));
        assert!(record.is_fault());
        assert_eq!(record.frame, FrameId::new(0));
        assert_eq!(record.evicted, None);
        assert_eq!(pages(&record.frames), vec![Some(5), None, None]);
        assert_eq!(record.cursor_after, 1);
    }

    #[test]
    fn test_hit_does_not_change_frames() {
        let mut sim = sim(Policy::Fifo, 2, &[1, 1]);
        sim.step().unwrap();
        let record = sim.step().unwrap().into_record().unwrap();

        assert!(record.was_hit);
        assert_eq!(record.frame, FrameId::new(0));
        assert_eq!(pages(&record.frames), vec![Some(1), None]);
        assert_eq!(sim.stats().hits, 1);
        assert_eq!(sim.stats().faults, 1);
    }

    #[test]
    fn test_fifo_textbook_sequence() {
        let mut sim = sim(Policy::Fifo, 3, &[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
        let records = run(&mut sim);

        assert_eq!(records.len(), 13);
        assert_eq!(sim.stats().faults, 10);
        assert_eq!(sim.stats().hits, 3);
        assert_eq!(pages(sim.frames()), vec![Some(0), Some(2), Some(3)]);

        // Page 2 replaces 7, the first page loaded
        assert_eq!(records[3].evicted, Some(PageId::new(7)));
        assert_eq!(records[3].frame, FrameId::new(0));
    }

    #[test]
    fn test_lru_textbook_sequence() {
        let mut sim = sim(Policy::Lru, 3, &[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
        let records = run(&mut sim);

        assert_eq!(sim.stats().faults, 9);
        assert_eq!(sim.stats().hits, 4);
        assert_eq!(pages(sim.frames()), vec![Some(0), Some(3), Some(2)]);

        // Page 3 replaces 1: 0 was just hit and 2 was loaded after 1
        assert_eq!(records[5].evicted, Some(PageId::new(1)));
    }

    #[test]
    fn test_optimal_textbook_sequence() {
        let mut sim = sim(Policy::Optimal, 3, &[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
        let records = run(&mut sim);

        assert_eq!(sim.stats().faults, 7);
        assert_eq!(sim.stats().hits, 6);
        assert_eq!(sim.stats().evictions, 4);
        assert_eq!(records[3].evicted, Some(PageId::new(7)));
        assert_eq!(records[5].evicted, Some(PageId::new(1)));
    }

    #[test]
    fn test_single_frame_never_hits() {
        for policy in Policy::ALL {
            let mut sim = sim(policy, 1, &[1, 2, 1, 2]);
            run(&mut sim);

            let stats = sim.stats();
            assert_eq!(stats.faults, 4, "{policy}");
            assert_eq!(stats.hits, 0, "{policy}");
            assert_eq!(stats.evictions, 3, "{policy}");
        }
    }

    #[test]
    fn test_end_of_sequence_is_idempotent() {
        let mut sim = sim(Policy::Optimal, 2, &[1, 2, 3]);
        run(&mut sim);

        let frames = sim.frames().to_vec();
        let stats = sim.stats();

        for _ in 0..3 {
            assert_eq!(sim.step().unwrap(), StepOutcome::EndOfSequence);
        }
        assert_eq!(sim.frames(), frames.as_slice());
        assert_eq!(sim.stats(), stats);
        assert_eq!(sim.cursor(), 3);
        assert!(sim.is_complete());
    }

    #[test]
    fn test_empty_sequence_is_complete() {
        let mut sim = sim(Policy::Lru, 2, &[]);
        assert_eq!(sim.state(), SimState::Complete);
        assert!(sim.step().unwrap().is_end());
        assert_eq!(sim.stats().fault_rate_percent(), 0);
    }

    #[test]
    fn test_state_transitions() {
        let mut sim = sim(Policy::Fifo, 1, &[1, 2]);
        assert_eq!(sim.state(), SimState::NotStarted);
        sim.step().unwrap();
        assert_eq!(sim.state(), SimState::Running);
        sim.step().unwrap();
        assert_eq!(sim.state(), SimState::Complete);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut sim = sim(Policy::Fifo, 2, &[1, 2, 3]);
        run(&mut sim);

        sim.reset(SimConfig::new(Policy::Lru, 4, [9])).unwrap();
        assert_eq!(sim.policy(), Policy::Lru);
        assert_eq!(sim.frame_count(), 4);
        assert_eq!(sim.cursor(), 0);
        assert_eq!(sim.stats().steps(), 0);
        assert_eq!(pages(sim.frames()), vec![None, None, None, None]);
        assert_eq!(sim.state(), SimState::NotStarted);
    }

    #[test]
    fn test_failed_reset_keeps_current_run() {
        let mut sim = sim(Policy::Fifo, 2, &[1, 2, 3]);
        sim.step().unwrap();

        assert!(sim.reset(SimConfig::new(Policy::Lru, 0, [9])).is_err());
        assert_eq!(sim.policy(), Policy::Fifo);
        assert_eq!(sim.cursor(), 1);
        assert_eq!(pages(sim.frames()), vec![Some(1), None]);
    }

    #[test]
    fn test_hits_plus_faults_equals_cursor() {
        let mut sim = sim(Policy::Lru, 2, &[1, 2, 1, 3, 1, 2]);
        while !sim.step().unwrap().is_end() {
            let stats = sim.stats();
            assert_eq!(stats.hits + stats.faults, sim.cursor() as u64);
        }
    }

    /// A replacer that never offers a victim.
    #[derive(Debug)]
    struct StuckReplacer;

    impl Replacer for StuckReplacer {
        fn policy(&self) -> Policy {
            Policy::Fifo
        }
        fn record_load(&mut self, _: FrameId, _: PageId, _: usize) {}
        fn record_hit(&mut self, _: FrameId, _: PageId, _: usize) {}
        fn select_victim(&mut self, _: &VictimContext<'_>) -> Option<FrameId> {
            None
        }
        fn record_eviction(&mut self, _: FrameId, _: PageId) {}
        fn size(&self) -> usize {
            0
        }
    }

    #[test]
    fn test_missing_victim_is_an_error() {
        let mut sim = sim(Policy::Fifo, 1, &[1, 2]);
        sim.replacer = Box::new(StuckReplacer);

        sim.step().unwrap();
        assert!(matches!(sim.step(), Err(Error::NoVictim(Policy::Fifo))));
        // The failed step did not advance
        assert_eq!(sim.cursor(), 1);
        assert_eq!(sim.stats().steps(), 1);
    }
}
