//! Render Selection
//!
//! Works out which slides a surface should draw for one frame: the active
//! card plus the cards peeking in behind it, and the indicator row.
//!
//! With fewer than three slides the previous/next positions collapse onto
//! the same index. Each index is emitted once, with precedence
//! Active > Next > Previous.

use crate::events::CarouselSnapshot;
use crate::scheme::ColorScheme;
use crate::slide::Slide;

/// Where a visible slide sits in the stack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlidePosition {
    /// Peeking in above the active card
    Previous,
    /// Foreground card
    Active,
    /// Peeking in below the active card
    Next,
}

impl SlidePosition {
    /// Draw order (lower first)
    #[must_use]
    pub fn z_index(self) -> i32 {
        match self {
            Self::Previous | Self::Next => 10,
            Self::Active => 20,
        }
    }

    /// Whether the card accepts pointer input
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A slide selected for rendering
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleSlide<'a> {
    /// Index into the deck
    pub index: usize,
    /// Stack position
    pub position: SlidePosition,
    /// The slide content
    pub slide: &'a Slide,
}

/// One dot in the indicator row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    /// Slide this dot jumps to
    pub index: usize,
    /// Highlighted dot
    pub active: bool,
}

/// Everything a surface needs for one frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselView<'a> {
    /// Visible slides in draw order (back to front)
    pub visible: Vec<VisibleSlide<'a>>,
    /// One indicator per slide
    pub indicators: Vec<Indicator>,
    /// Presentation scheme
    pub color_scheme: ColorScheme,
    /// Automatic advancement suspended
    pub paused: bool,
}

impl<'a> CarouselView<'a> {
    /// Build the frame for `snapshot` over `slides`
    pub fn build(slides: &'a [Slide], snapshot: &CarouselSnapshot) -> Self {
        let n = slides.len();
        let mut visible = Vec::with_capacity(n.min(3));

        if n > 0 && !snapshot.disposed {
            let current = snapshot.current_index.min(n - 1);
            let next = (current + 1) % n;
            let previous = (current + n - 1) % n;

            let mut push = |index: usize, position: SlidePosition| {
                if !visible.iter().any(|v: &VisibleSlide<'_>| v.index == index) {
                    visible.push(VisibleSlide {
                        index,
                        position,
                        slide: &slides[index],
                    });
                }
            };
            push(current, SlidePosition::Active);
            push(next, SlidePosition::Next);
            push(previous, SlidePosition::Previous);

            visible.sort_by_key(|v| v.position.z_index());
        }

        let indicators = (0..n)
            .map(|index| Indicator {
                index,
                active: !snapshot.disposed && index == snapshot.current_index,
            })
            .collect();

        Self {
            visible,
            indicators,
            color_scheme: snapshot.color_scheme,
            paused: snapshot.paused,
        }
    }

    /// The foreground card, if any
    #[must_use]
    pub fn active(&self) -> Option<&VisibleSlide<'a>> {
        self.visible
            .iter()
            .find(|v| v.position == SlidePosition::Active)
    }

    /// The card at `position`, if one is shown there
    #[must_use]
    pub fn at(&self, position: SlidePosition) -> Option<&VisibleSlide<'a>> {
        self.visible.iter().find(|v| v.position == position)
    }

    /// True when there is nothing to draw
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn deck(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new("TAG", format!("Slide {i}"), "text", "1 pt", ""))
            .collect()
    }

    fn snap(n: usize, current: usize) -> CarouselSnapshot {
        CarouselSnapshot {
            slide_count: n,
            current_index: current,
            paused: false,
            color_scheme: ColorScheme::Light,
            disposed: false,
        }
    }

    fn positions(view: &CarouselView<'_>) -> Vec<(usize, SlidePosition)> {
        view.visible.iter().map(|v| (v.index, v.position)).collect()
    }

    #[test]
    fn test_three_positions() {
        let slides = deck(5);
        let view = CarouselView::build(&slides, &snap(5, 0));
        let mut got = positions(&view);
        got.sort_by_key(|(i, _)| *i);
        assert_eq!(
            got,
            vec![
                (0, SlidePosition::Active),
                (1, SlidePosition::Next),
                (4, SlidePosition::Previous),
            ]
        );
        assert_eq!(view.active().unwrap().slide.title, "Slide 0");
        assert_eq!(view.visible.last().unwrap().position, SlidePosition::Active);
    }

    #[test]
    fn test_two_slides_no_duplicates() {
        let slides = deck(2);
        let view = CarouselView::build(&slides, &snap(2, 1));
        let mut got = positions(&view);
        got.sort_by_key(|(i, _)| *i);
        assert_eq!(got, vec![(0, SlidePosition::Next), (1, SlidePosition::Active)]);
        assert!(view.at(SlidePosition::Previous).is_none());
    }

    #[test]
    fn test_single_slide_only_active() {
        let slides = deck(1);
        let view = CarouselView::build(&slides, &snap(1, 0));
        assert_eq!(positions(&view), vec![(0, SlidePosition::Active)]);
    }

    #[test]
    fn test_empty_deck() {
        let slides = deck(0);
        let view = CarouselView::build(&slides, &snap(0, 0));
        assert!(view.is_empty());
        assert!(view.indicators.is_empty());
    }

    #[test]
    fn test_indicators_highlight_active() {
        let slides = deck(3);
        let view = CarouselView::build(&slides, &snap(3, 2));
        let active: Vec<usize> = view
            .indicators
            .iter()
            .filter(|i| i.active)
            .map(|i| i.index)
            .collect();
        assert_eq!(view.indicators.len(), 3);
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn test_disposed_renders_nothing() {
        let slides = deck(3);
        let mut s = snap(3, 1);
        s.disposed = true;
        let view = CarouselView::build(&slides, &s);
        assert!(view.is_empty());
        assert!(view.indicators.iter().all(|i| !i.active));
    }
}
