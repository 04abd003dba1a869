//! Page replacement simulation.
//!
//! The simulator owns a fixed table of frames and replays a reference string
//! against it, one reference per step.
//!
//! # Components
//! - [`ReplacementSimulator`] - The stepwise decision engine
//! - [`FrameTable`] - The fixed set of frames
//! - [`ReferenceString`] - The parsed workload
//! - [`SimConfig`] / [`Policy`] - Run configuration
//! - [`StepOutcome`] / [`StepRecord`] - Per-step results
//! - [`SimStats`] - Hit/fault statistics
//! - [`replacer`] - Eviction policy implementations

mod frame_table;
mod outcome;
mod policy;
mod reference_string;
pub mod replacer;
mod sim_config;
mod simulator;
mod stats;

pub use frame_table::FrameTable;
pub use outcome::{StepOutcome, StepRecord};
pub use policy::Policy;
pub use reference_string::ReferenceString;
pub use sim_config::SimConfig;
pub use simulator::{ReplacementSimulator, SimState};
pub use stats::{SimStats, StatsSnapshot};
