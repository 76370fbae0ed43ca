//! Carousel State Machine
//!
//! Pure navigation state with no timers attached. The mounted
//! [`Carousel`](crate::Carousel) drives this from its tick and cooldown tasks.
//!
//! ```text
//! Running[i] --tick------> Running[i+1]
//! Running[i] --manual----> Paused[j]
//! Paused[i]  --tick------> Paused[i]
//! Paused[i]  --cooldown--> Running[i]
//! Paused[i]  --manual----> Paused[j]    (cooldown restarts)
//! ```

use crate::error::CarouselError;
use crate::scheme::ColorScheme;

/// Whether automatic advancement currently has an effect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Ticks advance the carousel
    Running,
    /// Ticks are suppressed until the cooldown elapses
    Paused,
}

/// Mutable carousel state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    slide_count: usize,
    current_index: usize,
    paused: bool,
    color_scheme: ColorScheme,
}

impl CarouselState {
    /// Initial state: `Running[0]`
    pub fn new(slide_count: usize, color_scheme: ColorScheme) -> Self {
        Self {
            slide_count,
            current_index: 0,
            paused: false,
            color_scheme,
        }
    }

    /// Number of slides
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the foregrounded slide
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// True while automatic advancement is suspended
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current presentation scheme
    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    /// Running or Paused
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    /// Move forward one slide, wrapping to 0
    pub fn advance(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % self.slide_count;
    }

    /// Move back one slide, wrapping to the last
    pub fn retreat(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.current_index = (self.current_index + self.slide_count - 1) % self.slide_count;
    }

    /// Jump directly to `index`
    ///
    /// # Errors
    ///
    /// [`CarouselError::OutOfRange`] if `index >= slide_count`; state is untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        self.check_index(index)?;
        self.current_index = index;
        Ok(())
    }

    /// Validate an index without moving
    ///
    /// # Errors
    ///
    /// [`CarouselError::OutOfRange`] if `index >= slide_count`.
    pub fn check_index(&self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slide_count {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.slide_count,
            });
        }
        Ok(())
    }

    /// Apply one timer tick. Returns true if the index moved.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.slide_count == 0 {
            return false;
        }
        self.advance();
        true
    }

    /// Suspend automatic advancement
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume automatic advancement
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Record a new colour-scheme preference
    pub fn color_scheme_changed(&mut self, scheme: ColorScheme) {
        self.color_scheme = scheme;
    }

    /// Index shown behind the active card, after it
    #[must_use]
    pub fn next_index(&self) -> Option<usize> {
        (self.slide_count > 0).then(|| (self.current_index + 1) % self.slide_count)
    }

    /// Index shown behind the active card, before it
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        (self.slide_count > 0)
            .then(|| (self.current_index + self.slide_count - 1) % self.slide_count)
    }
}
