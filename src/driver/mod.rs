//! Drivers and outcome consumers.
//!
//! Everything here sits on the far side of `step()`: it decides when to
//! step and what to do with the records, never how pages are replaced.
//!
//! # Components
//! - [`StepObserver`] - Receives step records and the final summary
//! - [`TraceRecorder`] - Keeps every record
//! - [`TextRenderer`] - Writes a plain-text trace
//! - [`play_to_end`] - Synchronous driver loop
//! - [`AutoPlayer`] - Cancellable timer-driven driver
//! - [`compare_policies`] - Runs all policies on one input

mod auto_play;
mod compare;
mod observer;
mod render;

pub use auto_play::{AutoPlayer, PlayReport};
pub use compare::compare_policies;
pub use observer::{play_to_end, StepObserver, TraceRecorder};
pub use render::{explain, TextRenderer};
