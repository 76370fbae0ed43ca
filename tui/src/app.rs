//! Main Application
//!
//! The App is a thin surface over the headless carousel:
//! 1. Converts terminal events (keys, mouse clicks) to carousel events
//! 2. Owns the colour-scheme notifier standing in for the OS preference
//! 3. Redraws whenever the carousel publishes a new snapshot
//!
//! All timing lives in `carousel-core`; the App never sleeps or polls.

use carousel_core::{
    Carousel, CarouselConfig, CarouselEvent, ColorScheme, SchemeNotifier, SlideDeck,
};
use crossterm::event::{Event, EventStream, KeyEventKind, MouseButton, MouseEventKind};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::input::{map_key, Action};
use crate::widgets::{CarouselLayout, CarouselWidget};

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,

    // === Carousel Integration ===
    /// The mounted carousel
    carousel: Carousel,
    /// Broadcasts the light/dark preference the carousel subscribes to
    notifier: SchemeNotifier,

    // === UI State ===
    /// Layout of the last rendered frame (for mouse hit-testing)
    layout: Option<CarouselLayout>,
    /// Show key hints in the status bar
    show_hints: bool,
}

impl App {
    /// Mount the carousel and build the app
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn new(deck: SlideDeck, config: CarouselConfig, scheme: ColorScheme) -> Self {
        let notifier = SchemeNotifier::new(scheme);
        let carousel = Carousel::mount(deck.into_shared(), config, &notifier);

        Self {
            running: true,
            carousel,
            notifier,
            layout: None,
            show_hints: true,
        }
    }

    /// Start with key hints hidden or shown
    #[must_use]
    pub fn with_hints(mut self, show: bool) -> Self {
        self.show_hints = show;
        self
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        // Create async event stream for non-blocking terminal events
        let mut event_stream = EventStream::new();
        let mut updates = self.carousel.subscribe();

        // Render initial frame immediately so user sees UI
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(&event),
                    Some(Err(e)) => {
                        warn!(error = %e, "Terminal event stream failed");
                        self.running = false;
                    }
                    None => self.running = false,
                },

                // Carousel state changed (tick, cooldown, scheme)
                changed = updates.changed() => {
                    if changed.is_err() {
                        self.running = false;
                    } else {
                        updates.borrow_and_update();
                    }
                }
            }

            self.render(terminal)?;
        }

        self.carousel.dispose();
        info!("App loop finished");
        Ok(())
    }

    /// Draw one frame
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let show_hints = self.show_hints;
        let carousel = &self.carousel;
        let layout = &mut self.layout;

        terminal.draw(|frame| {
            let area = frame.area();
            *layout = CarouselLayout::compute(area, carousel.slides().len());
            let view = carousel.view();
            frame.render_widget(CarouselWidget::new(&view).show_hints(show_hints), area);
        })?;
        Ok(())
    }

    /// Route one terminal event
    pub fn handle_terminal_event(&mut self, event: &Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = map_key(*key) {
                    self.apply(action);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .layout
                    .as_ref()
                    .and_then(|l| l.hit_test(mouse.column, mouse.row));
                if let Some(event) = hit {
                    self.apply(Action::Carousel(event));
                }
            }
            _ => {}
        }
    }

    /// Perform an action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Carousel(event) => self.navigate(event),
            Action::ToggleScheme => {
                let scheme = self.notifier.toggle();
                debug!(%scheme, "Scheme preference toggled");
            }
            Action::ToggleHints => self.show_hints = !self.show_hints,
            Action::Quit => {
                info!("Quit requested");
                self.running = false;
            }
        }
    }

    fn navigate(&mut self, event: CarouselEvent) {
        if let Err(e) = self.carousel.handle_event(event) {
            // Digit keys past the end of the deck land here
            debug!(error = %e, ?event, "Navigation ignored");
        }
    }

    /// The mounted carousel
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// The scheme preference broadcaster
    #[must_use]
    pub fn notifier(&self) -> &SchemeNotifier {
        &self.notifier
    }

    /// Layout of the last rendered frame
    #[must_use]
    pub fn layout(&self) -> Option<&CarouselLayout> {
        self.layout.as_ref()
    }

    /// Is the app still running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
