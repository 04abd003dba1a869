//! Timer-driven auto-play.
//!
//! An [`AutoPlayer`] steps a shared simulator on a fixed cadence from a
//! worker thread until the reference string runs out or it is cancelled.
//! It calls the same `step()` a manual driver would, under the same mutex,
//! so manual and automatic stepping can be mixed freely.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, info};

use crate::common::config::DEFAULT_AUTO_PLAY_CADENCE;
use crate::common::{Error, Result};
use crate::driver::StepObserver;
use crate::sim::{ReplacementSimulator, StepOutcome};

/// What an auto-play session did.
#[derive(Debug)]
pub struct PlayReport<O> {
    /// Steps taken by the player (manual steps are not counted).
    pub steps: usize,

    /// Whether the player ran the reference string to the end.
    pub completed: bool,

    /// The observer, handed back for inspection.
    pub observer: O,
}

/// Cancellation flag the worker sleeps on between steps.
#[derive(Debug, Default)]
struct PlayControl {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

impl PlayControl {
    fn cancel(&self) {
        *self.cancelled.lock() = true;
        self.wake.notify_all();
    }

    /// Sleep for `cadence` or until cancelled. Returns true if cancelled.
    fn wait(&self, cadence: Duration) -> bool {
        let deadline = Instant::now() + cadence;
        let mut cancelled = self.cancelled.lock();
        while !*cancelled {
            if self.wake.wait_until(&mut cancelled, deadline).timed_out() {
                break;
            }
        }
        *cancelled
    }
}

/// Steps a shared simulator on a fixed cadence.
///
/// # Thread Safety
/// - `sim`: `Mutex` - held for exactly one `step()` at a time
/// - `control`: `Mutex` + `Condvar` - cancellation wakes the sleeping worker
///
/// Dropping the player cancels it and waits for the worker to exit.
///
/// # Usage
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use parking_lot::Mutex;
/// use pagesim::driver::{AutoPlayer, TraceRecorder};
/// use pagesim::{Policy, ReplacementSimulator, SimConfig};
///
/// let sim = ReplacementSimulator::new(SimConfig::new(Policy::Fifo, 2, [1, 2, 3])).unwrap();
/// let sim = Arc::new(Mutex::new(sim));
///
/// let player = AutoPlayer::start(Arc::clone(&sim), Duration::from_millis(1), TraceRecorder::new()).unwrap();
/// let report = player.join().unwrap();
///
/// assert!(report.completed);
/// assert_eq!(report.observer.records().len(), 3);
/// ```
#[derive(Debug)]
pub struct AutoPlayer<O> {
    control: Arc<PlayControl>,
    handle: Option<JoinHandle<Result<PlayReport<O>>>>,
}

impl<O> AutoPlayer<O>
where
    O: StepObserver + Send + 'static,
{
    /// Start stepping `sim` every `cadence`, reporting to `observer`.
    ///
    /// The first step happens one cadence after the call.
    ///
    /// # Errors
    /// - `Error::Io` if the worker thread cannot be spawned
    pub fn start(
        sim: Arc<Mutex<ReplacementSimulator>>,
        cadence: Duration,
        observer: O,
    ) -> Result<Self> {
        let control = Arc::new(PlayControl::default());
        let worker_control = Arc::clone(&control);

        let handle = thread::Builder::new()
            .name("pagesim-autoplay".to_string())
            .spawn(move || play(&sim, cadence, &worker_control, observer))?;

        Ok(Self {
            control,
            handle: Some(handle),
        })
    }

    /// Start stepping `sim` at [`DEFAULT_AUTO_PLAY_CADENCE`].
    ///
    /// # Errors
    /// - `Error::Io` if the worker thread cannot be spawned
    pub fn start_default(sim: Arc<Mutex<ReplacementSimulator>>, observer: O) -> Result<Self> {
        Self::start(sim, DEFAULT_AUTO_PLAY_CADENCE, observer)
    }

    /// Stop before the next scheduled step.
    ///
    /// A step already in progress finishes first.
    pub fn cancel(&self) {
        self.control.cancel();
    }

    /// Whether the worker has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the worker to exit.
    ///
    /// # Errors
    /// - Any error the worker hit while stepping or reporting
    /// - `Error::AutoPlayPanicked` if the worker panicked
    pub fn join(mut self) -> Result<PlayReport<O>> {
        let handle = self.handle.take().ok_or(Error::AutoPlayPanicked)?;
        handle.join().map_err(|_| Error::AutoPlayPanicked)?
    }
}

impl<O> Drop for AutoPlayer<O> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.control.cancel();
            let _ = handle.join();
        }
    }
}

/// Worker loop.
fn play<O: StepObserver>(
    sim: &Mutex<ReplacementSimulator>,
    cadence: Duration,
    control: &PlayControl,
    mut observer: O,
) -> Result<PlayReport<O>> {
    let mut steps = 0;

    loop {
        if control.wait(cadence) {
            info!(steps, "auto-play cancelled");
            return Ok(PlayReport {
                steps,
                completed: false,
                observer,
            });
        }

        // Step and check for completion under one lock so a concurrent
        // manual step cannot slip in between.
        let (outcome, final_stats) = {
            let mut sim = sim.lock();
            let outcome = sim.step()?;
            let final_stats = sim.is_complete().then(|| sim.stats());
            (outcome, final_stats)
        };

        if let StepOutcome::Step(record) = outcome {
            steps += 1;
            observer.on_step(&record)?;
        }

        if let Some(stats) = final_stats {
            debug!(steps, "auto-play reached end of sequence");
            observer.on_complete(&stats)?;
            return Ok(PlayReport {
                steps,
                completed: true,
                observer,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::TraceRecorder;
    use crate::sim::{Policy, SimConfig};

    fn shared(references: &[i64]) -> Arc<Mutex<ReplacementSimulator>> {
        let config = SimConfig::new(Policy::Lru, 2, references);
        Arc::new(Mutex::new(ReplacementSimulator::new(config).unwrap()))
    }

    #[test]
    fn test_auto_play_runs_to_end() {
        let sim = shared(&[1, 2, 1, 3]);

        let player =
            AutoPlayer::start(Arc::clone(&sim), Duration::from_millis(1), TraceRecorder::new())
                .unwrap();
        let report = player.join().unwrap();

        assert!(report.completed);
        assert_eq!(report.steps, 4);
        assert_eq!(report.observer.summary(), Some(&sim.lock().stats()));
        assert!(sim.lock().is_complete());
    }

    #[test]
    fn test_cancel_before_first_step() {
        let sim = shared(&[1, 2, 3]);

        let player =
            AutoPlayer::start(Arc::clone(&sim), Duration::from_secs(60), TraceRecorder::new())
                .unwrap();
        player.cancel();
        let report = player.join().unwrap();

        assert!(!report.completed);
        assert_eq!(report.steps, 0);
        assert!(report.observer.records().is_empty());
        assert_eq!(sim.lock().cursor(), 0);
    }

    #[test]
    fn test_drop_cancels_worker() {
        let sim = shared(&[1, 2, 3]);
        {
            let _player = AutoPlayer::start_default(Arc::clone(&sim), ()).unwrap();
        }
        // The worker held the only other reference
        assert_eq!(Arc::strong_count(&sim), 1);
        assert_eq!(sim.lock().cursor(), 0);
    }

    #[test]
    fn test_already_complete_run_finishes_immediately() {
        let sim = shared(&[]);

        let player =
            AutoPlayer::start(Arc::clone(&sim), Duration::from_millis(1), TraceRecorder::new())
                .unwrap();
        let report = player.join().unwrap();

        assert!(report.completed);
        assert_eq!(report.steps, 0);
        assert!(report.observer.summary().is_some());
    }

    /// Collects formatted log output.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_cancel_logs_at_info() {
        let sim = shared(&[1, 2, 3]);
        let control = PlayControl::default();
        control.cancel();

        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::TRACE)
            .finish();

        // Run the worker loop on this thread so the scoped subscriber sees it
        let report = tracing::subscriber::with_default(subscriber, || {
            play(&sim, Duration::from_secs(60), &control, ())
        })
        .unwrap();
        assert!(!report.completed);

        let output = String::from_utf8(logs.0.lock().clone()).unwrap();
        let line = output
            .lines()
            .find(|line| line.contains("auto-play cancelled"))
            .unwrap();
        assert!(line.contains("INFO"), "{line}");
        assert!(!output.contains("WARN"), "{output}");
    }

    #[test]
    fn test_control_wait_times_out() {
        let control = PlayControl::default();
        assert!(!control.wait(Duration::from_millis(1)));
        control.cancel();
        assert!(control.wait(Duration::from_secs(60)));
    }
}
