//! pagesim - a step-by-step page replacement simulator.
//!
//! Replays a reference string against a fixed number of physical frames and
//! reports, for every reference, whether it hit or faulted and which page was
//! evicted under FIFO, LRU or Optimal replacement.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Drivers (driver/)                        │   │
//! │  │   play_to_end │ AutoPlayer │ compare_policies            │   │
//! │  │   StepObserver → TraceRecorder │ TextRenderer            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                     ↓ step()        ↑ StepOutcome               │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation (sim/)                           │   │
//! │  │   ReplacementSimulator + FrameTable + SimStats           │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     Replacers: FIFO | LRU | Optimal              │   │   │
//! │  │   │        (chosen per run by Policy)                │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`sim`] - The simulator and eviction policies
//! - [`driver`] - Ways to run the simulator and consume its outcomes
//!
//! # Quick Start
//! ```
//! use pagesim::{ReplacementSimulator, SimConfig};
//! use pagesim::driver::play_to_end;
//!
//! let config = SimConfig::from_text("optimal", "3", "7,0,1,2,0,3,0,4,2,3,0,3,2").unwrap();
//! let mut sim = ReplacementSimulator::new(config).unwrap();
//!
//! let stats = play_to_end(&mut sim, ()).unwrap();
//! assert_eq!(stats.faults, 7);
//! assert_eq!(stats.hits, 6);
//! ```

pub mod common;
pub mod driver;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_FRAME_COUNT, DEFAULT_REFERENCE_STRING};
pub use common::{ConfigError, Error, FrameId, PageId, Result};

pub use sim::{
    FrameTable, Policy, ReferenceString, ReplacementSimulator, SimConfig, SimState, SimStats,
    StatsSnapshot, StepOutcome, StepRecord,
};
