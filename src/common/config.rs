//! Configuration defaults for pagesim.

use std::time::Duration;

/// Number of frames used when the caller does not choose one.
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Reference string used when the caller does not supply one.
///
/// The classic operating-systems textbook sequence; with three frames it
/// separates all three policies.
pub const DEFAULT_REFERENCE_STRING: &str = "7,0,1,2,0,3,0,4,2,3,0,3,2";

/// Delay between steps when auto-playing.
pub const DEFAULT_AUTO_PLAY_CADENCE: Duration = Duration::from_secs(1);
