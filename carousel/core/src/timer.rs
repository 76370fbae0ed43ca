//! Cancellable Timers
//!
//! Two small wrappers over `tokio::spawn`:
//!
//! - [`RestartableTimer`]: a one-shot delay. Restarting cancels the pending
//!   one first, so at most one is ever outstanding. Each start bumps a
//!   generation number that the callback receives; a callback whose
//!   generation is stale must do nothing.
//! - [`Ticker`]: a fixed-period repeating callback. Missed periods are
//!   skipped, never replayed.
//!
//! Both abort their task on drop.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// One-shot timer that can be cancelled and restarted
#[derive(Debug, Default)]
pub struct RestartableTimer {
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl RestartableTimer {
    /// Create an idle timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending run, then fire `on_fire` after `delay`
    ///
    /// Returns the generation handed to `on_fire`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn restart<F>(&mut self, delay: Duration, on_fire: F) -> u64
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;

        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire(generation);
        }));

        generation
    }

    /// Cancel the pending run. Returns true if one was outstanding.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    /// Generation of the most recent start
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a run is scheduled but has not finished
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for RestartableTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Repeating timer with a fixed phase
#[derive(Debug, Default)]
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Create a stopped ticker
    pub fn new() -> Self {
        Self::default()
    }

    /// Start calling `on_tick` every `period`, first at `now + period`
    ///
    /// The loop ends when `on_tick` returns [`ControlFlow::Break`] or the
    /// ticker is stopped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start<F>(&mut self, period: Duration, mut on_tick: F)
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        self.stop();

        // Phase is anchored here, not when the task is first polled
        let first = Instant::now() + period;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if on_tick().is_break() {
                    break;
                }
            }
        }));
    }

    /// Stop ticking. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// True while the tick loop is alive
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
