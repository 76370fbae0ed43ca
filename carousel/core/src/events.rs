//! Surface Events and Snapshots
//!
//! Surfaces send [`CarouselEvent`]s up when the user navigates and receive
//! [`CarouselSnapshot`]s down whenever the carousel changes.

use serde::{Deserialize, Serialize};

use crate::scheme::ColorScheme;
use crate::state::{CarouselState, Phase};

/// A manual navigation request from a surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum CarouselEvent {
    /// "Previous" control clicked
    Previous,
    /// "Next" control clicked
    Next,
    /// Indicator for a specific slide clicked
    Select(usize),
}

/// Point-in-time copy of the carousel state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    /// Number of slides
    pub slide_count: usize,
    /// Foregrounded slide
    pub current_index: usize,
    /// Automatic advancement suspended
    pub paused: bool,
    /// Presentation scheme
    pub color_scheme: ColorScheme,
    /// The carousel has been disposed
    pub disposed: bool,
}

impl CarouselSnapshot {
    pub(crate) fn capture(state: &CarouselState, disposed: bool) -> Self {
        Self {
            slide_count: state.slide_count(),
            current_index: state.current_index(),
            paused: state.is_paused(),
            color_scheme: state.color_scheme(),
            disposed,
        }
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_shape() {
        let json = serde_json::to_string(&CarouselEvent::Select(2)).unwrap();
        assert_eq!(json, r#"{"type":"select","index":2}"#);

        let json = serde_json::to_string(&CarouselEvent::Next).unwrap();
        assert_eq!(json, r#"{"type":"next"}"#);
    }

    #[test]
    fn test_snapshot_capture() {
        let mut state = CarouselState::new(3, ColorScheme::Dark);
        state.advance();
        state.pause();

        let snap = CarouselSnapshot::capture(&state, false);
        assert_eq!(snap.current_index, 1);
        assert_eq!(snap.phase(), Phase::Paused);
        assert_eq!(snap.color_scheme, ColorScheme::Dark);
        assert!(!snap.disposed);
    }
}
