//! The Mounted Carousel
//!
//! [`Carousel`] owns a [`CarouselState`] and the three background tasks that
//! drive it:
//!
//! - the **tick** task, advancing every `tick_interval` unless paused;
//! - the **cooldown** task, clearing `paused` after the last manual
//!   interaction (restarted, never stacked);
//! - the **scheme** task, mirroring the injected colour-scheme source.
//!
//! All three hold a `Weak` back-reference and re-check `disposed` under the
//! lock before touching state, so nothing fires against a disposed carousel.
//! No lock is held across an `.await`.

use std::ops::ControlFlow;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::events::{CarouselEvent, CarouselSnapshot};
use crate::scheme::{ColorScheme, ColorSchemeSource};
use crate::slide::Slide;
use crate::state::CarouselState;
use crate::timer::{RestartableTimer, Ticker};
use crate::view::CarouselView;

struct Inner {
    state: CarouselState,
    cooldown_duration: Duration,
    cooldown: RestartableTimer,
    ticker: Ticker,
    scheme_task: Option<JoinHandle<()>>,
    disposed: bool,
    snapshot_tx: watch::Sender<CarouselSnapshot>,
}

impl Inner {
    fn publish(&self) {
        self.snapshot_tx
            .send_replace(CarouselSnapshot::capture(&self.state, self.disposed));
    }

    /// Pause and (re)arm the cooldown
    fn on_manual_interaction(&mut self, shared: Weak<Mutex<Inner>>) {
        self.state.pause();
        let delay = self.cooldown_duration;
        let generation = self.cooldown.restart(delay, move |generation| {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            let mut inner = shared.lock();
            if inner.disposed || inner.cooldown.generation() != generation {
                return;
            }
            inner.state.resume();
            debug!(generation, "Cooldown elapsed, auto-advance resumed");
            inner.publish();
        });
        trace!(generation, delay_ms = delay.as_millis() as u64, "Cooldown armed");
    }
}

/// A mounted, self-driving carousel
///
/// Dropping the carousel disposes it.
pub struct Carousel {
    slides: Arc<[Slide]>,
    config: CarouselConfig,
    inner: Arc<Mutex<Inner>>,
    snapshot_rx: watch::Receiver<CarouselSnapshot>,
}

impl Carousel {
    /// Mount a carousel: start ticking and subscribe to `scheme_source`
    ///
    /// The initial state is `Running[0]` with the source's current scheme.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn mount(
        slides: impl Into<Arc<[Slide]>>,
        config: CarouselConfig,
        scheme_source: &dyn ColorSchemeSource,
    ) -> Self {
        let slides = slides.into();
        let config = config.clamped();

        let mut scheme_rx = scheme_source.subscribe();
        let initial_scheme = *scheme_rx.borrow_and_update();

        let state = CarouselState::new(slides.len(), initial_scheme);
        let (snapshot_tx, snapshot_rx) =
            watch::channel(CarouselSnapshot::capture(&state, false));

        let inner = Arc::new(Mutex::new(Inner {
            state,
            cooldown_duration: config.cooldown(),
            cooldown: RestartableTimer::new(),
            ticker: Ticker::new(),
            scheme_task: None,
            disposed: false,
            snapshot_tx,
        }));

        let weak = Arc::downgrade(&inner);
        let tick_handle = weak.clone();
        let scheme_task = tokio::spawn(async move {
            while scheme_rx.changed().await.is_ok() {
                let scheme = *scheme_rx.borrow_and_update();
                let Some(shared) = weak.upgrade() else {
                    break;
                };
                let mut inner = shared.lock();
                if inner.disposed {
                    break;
                }
                inner.state.color_scheme_changed(scheme);
                debug!(%scheme, "Colour scheme changed");
                inner.publish();
            }
        });

        {
            let mut guard = inner.lock();
            guard.scheme_task = Some(scheme_task);
            guard
                .ticker
                .start(config.tick_interval(), move || on_tick(&tick_handle));
        }

        info!(
            slides = slides.len(),
            tick_interval_ms = config.tick_interval_ms,
            cooldown_ms = config.cooldown_ms,
            scheme = %initial_scheme,
            "Carousel mounted"
        );

        Self {
            slides,
            config,
            inner,
            snapshot_rx,
        }
    }

    /// Slides in display order
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Effective (clamped) timing configuration
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Current state
    #[must_use]
    pub fn snapshot(&self) -> CarouselSnapshot {
        *self.snapshot_rx.borrow()
    }

    /// Receive a new snapshot after every change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Render selection for the current state
    #[must_use]
    pub fn view(&self) -> CarouselView<'_> {
        CarouselView::build(&self.slides, &self.snapshot())
    }

    /// Foregrounded slide index
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.inner.lock().state.current_index()
    }

    /// True while automatic advancement is suspended
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.inner.lock().state.is_paused()
    }

    /// Current presentation scheme
    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        self.inner.lock().state.color_scheme()
    }

    /// True while a cooldown is scheduled
    #[must_use]
    pub fn has_pending_cooldown(&self) -> bool {
        self.inner.lock().cooldown.is_pending()
    }

    /// True once [`dispose`](Self::dispose) has run
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.lock().disposed
    }

    /// Move forward one slide without pausing (same effect as a tick)
    pub fn advance(&self) {
        self.apply(|state| {
            state.advance();
            Ok(())
        })
        .ok();
    }

    /// Move back one slide without pausing
    pub fn retreat(&self) {
        self.apply(|state| {
            state.retreat();
            Ok(())
        })
        .ok();
    }

    /// Jump to `index` without pausing
    ///
    /// # Errors
    ///
    /// [`CarouselError::OutOfRange`] if `index` is not a valid slide; the
    /// carousel is left untouched.
    pub fn jump_to(&self, index: usize) -> Result<(), CarouselError> {
        self.apply(|state| state.jump_to(index))
    }

    /// Pause auto-advance and restart the cooldown
    pub fn on_manual_interaction(&self) {
        let mut inner = self.inner.lock();
        if inner.disposed || inner.state.slide_count() == 0 {
            return;
        }
        inner.on_manual_interaction(Arc::downgrade(&self.inner));
        inner.publish();
    }

    /// User clicked "next"
    pub fn next(&self) {
        self.manual(|state| {
            state.advance();
            Ok(())
        })
        .ok();
    }

    /// User clicked "previous"
    pub fn previous(&self) {
        self.manual(|state| {
            state.retreat();
            Ok(())
        })
        .ok();
    }

    /// User clicked the indicator for `index`
    ///
    /// # Errors
    ///
    /// [`CarouselError::OutOfRange`] if `index` is not a valid slide. The
    /// carousel is left untouched and does not pause.
    pub fn select(&self, index: usize) -> Result<(), CarouselError> {
        self.manual(|state| state.jump_to(index))
    }

    /// Dispatch a surface event
    ///
    /// # Errors
    ///
    /// Propagates [`CarouselError::OutOfRange`] from [`select`](Self::select).
    pub fn handle_event(&self, event: CarouselEvent) -> Result<(), CarouselError> {
        match event {
            CarouselEvent::Next => {
                self.next();
                Ok(())
            }
            CarouselEvent::Previous => {
                self.previous();
                Ok(())
            }
            CarouselEvent::Select(index) => self.select(index),
        }
    }

    /// Stop all timers and unsubscribe from the scheme source
    ///
    /// Idempotent. After disposal every operation is a no-op except that
    /// `jump_to`/`select` still report out-of-range indices.
    pub fn dispose(&self) {
        let mut inner = self.inner.lock();
        if inner.disposed {
            return;
        }
        inner.disposed = true;
        inner.ticker.stop();
        inner.cooldown.cancel();
        if let Some(task) = inner.scheme_task.take() {
            task.abort();
        }
        inner.publish();
        info!(
            index = inner.state.current_index(),
            "Carousel disposed"
        );
    }

    fn apply<F>(&self, f: F) -> Result<(), CarouselError>
    where
        F: FnOnce(&mut CarouselState) -> Result<(), CarouselError>,
    {
        let mut inner = self.inner.lock();
        if inner.disposed {
            let mut scratch = inner.state.clone();
            return f(&mut scratch);
        }
        let before = inner.state.current_index();
        f(&mut inner.state)?;
        if inner.state.current_index() != before {
            inner.publish();
        }
        Ok(())
    }

    fn manual<F>(&self, f: F) -> Result<(), CarouselError>
    where
        F: FnOnce(&mut CarouselState) -> Result<(), CarouselError>,
    {
        let mut inner = self.inner.lock();
        if inner.disposed || inner.state.slide_count() == 0 {
            // Inert: only range errors surface
            let mut scratch = inner.state.clone();
            return f(&mut scratch);
        }

        f(&mut inner.state)?;
        inner.on_manual_interaction(Arc::downgrade(&self.inner));
        debug!(
            index = inner.state.current_index(),
            "Manual navigation, auto-advance paused"
        );
        inner.publish();
        Ok(())
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("slides", &self.slides.len())
            .field("config", &self.config)
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

fn on_tick(shared: &Weak<Mutex<Inner>>) -> ControlFlow<()> {
    let Some(shared) = shared.upgrade() else {
        return ControlFlow::Break(());
    };
    let mut inner = shared.lock();
    if inner.disposed {
        return ControlFlow::Break(());
    }

    if inner.state.tick() {
        debug!(index = inner.state.current_index(), "Auto-advanced");
        inner.publish();
    } else {
        trace!(paused = inner.state.is_paused(), "Tick suppressed");
    }
    ControlFlow::Continue(())
}
