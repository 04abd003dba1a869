//! Plain-text rendering of a run.

use std::io::Write;

use crate::common::{PageId, Result};
use crate::driver::StepObserver;
use crate::sim::{Policy, ReplacementSimulator, StatsSnapshot, StepRecord};

/// Writes one line per step and a summary line to any writer.
///
/// ```text
/// step  3: page 2 FAULT [2, 0, 1] evicted 7
/// step  4: page 0 HIT   [2, 0, 1]
/// ```
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Describe the run about to be played.
    pub fn write_header(&mut self, sim: &ReplacementSimulator) -> Result<()> {
        writeln!(self.out, "{}", explain(sim.policy()))?;
        writeln!(
            self.out,
            "{} frames, references: {}",
            sim.frame_count(),
            sim.references()
        )?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepObserver for TextRenderer<W> {
    fn on_step(&mut self, record: &StepRecord) -> Result<()> {
        let verdict = if record.was_hit { "HIT  " } else { "FAULT" };
        write!(
            self.out,
            "step {:>2}: page {} {} {}",
            record.step,
            record.page,
            verdict,
            format_frames(&record.frames)
        )?;
        if let Some(evicted) = record.evicted {
            write!(self.out, " evicted {}", evicted)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn on_complete(&mut self, stats: &StatsSnapshot) -> Result<()> {
        writeln!(
            self.out,
            "{} references, {} hits, {} faults, hit rate {}%, fault rate {}%",
            stats.total_references,
            stats.hits,
            stats.faults,
            stats.hit_rate_percent(),
            stats.fault_rate_percent()
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// One-line description of a policy.
pub fn explain(policy: Policy) -> &'static str {
    match policy {
        Policy::Fifo => "FIFO evicts the page that has been resident the longest, regardless of use.",
        Policy::Lru => "LRU evicts the page that has gone the longest without being referenced.",
        Policy::Optimal => {
            "Optimal evicts the page whose next reference is farthest in the future. \
             It needs the whole reference string in advance, so it serves as a lower bound."
        }
    }
}

/// `[7, 0, -]` with `-` for an empty frame.
fn format_frames(frames: &[Option<PageId>]) -> String {
    let slots: Vec<String> = frames
        .iter()
        .map(|slot| match slot {
            Some(page) => page.to_string(),
            None => "-".to_string(),
        })
        .collect();
    format!("[{}]", slots.join(", "))
}
