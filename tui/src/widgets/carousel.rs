//! Carousel Widget
//!
//! Draws a [`CarouselView`] as a stack of bordered cards: the active card in
//! front, the previous card peeking out above it and the next card peeking
//! out below. Underneath sits the control row (`◀`, one dot per slide, `▶`)
//! and a one-line status bar.
//!
//! [`CarouselLayout`] is shared between rendering and mouse hit-testing so
//! clicks land on exactly what was drawn.

use carousel_core::{CarouselEvent, CarouselView, Slide, SlidePosition};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// Card height including borders
pub const CARD_HEIGHT: u16 = 9;

/// Widest a card will grow
pub const MAX_CARD_WIDTH: u16 = 72;

/// Narrowest usable card
pub const MIN_CARD_WIDTH: u16 = 24;

/// Columns the peeking cards are inset on each side
const PEEK_INSET: u16 = 2;

/// Width of the image placeholder column
const IMAGE_WIDTH: u16 = 12;

/// Show the image placeholder only on cards at least this wide (inner)
const IMAGE_MIN_INNER: u16 = 40;

/// Smallest area the widget can draw into
pub const MIN_HEIGHT: u16 = CARD_HEIGHT + 2 + 3;

const PREV_LABEL: &str = " ◀ ";
const NEXT_LABEL: &str = " ▶ ";

/// Screen regions for one frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselLayout {
    /// Foreground card
    pub active: Rect,
    /// Card peeking out above
    pub previous: Rect,
    /// Card peeking out below
    pub next: Rect,
    /// "Previous" button
    pub prev_button: Rect,
    /// "Next" button
    pub next_button: Rect,
    /// One cell per indicator dot
    pub dots: Vec<Rect>,
    /// Status bar
    pub status: Rect,
}

impl CarouselLayout {
    /// Lay out `slide_count` slides in `area`. `None` if the area is too small.
    #[must_use]
    pub fn compute(area: Rect, slide_count: usize) -> Option<Self> {
        if area.height < MIN_HEIGHT || area.width < MIN_CARD_WIDTH + 2 {
            return None;
        }

        let card_width = area.width.saturating_sub(4).clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH);
        let card_x = area.x + (area.width - card_width) / 2;
        let top = area.y;

        let peek_width = card_width.saturating_sub(PEEK_INSET * 2);
        let previous = Rect::new(card_x + PEEK_INSET, top, peek_width, CARD_HEIGHT);
        let active = Rect::new(card_x, top + 1, card_width, CARD_HEIGHT);
        let next = Rect::new(card_x + PEEK_INSET, top + 2, peek_width, CARD_HEIGHT);

        // Control row: " ◀ " + gap + dots + gap + " ▶ "
        let controls_y = top + CARD_HEIGHT + 3;
        let prev_w = PREV_LABEL.width() as u16;
        let next_w = NEXT_LABEL.width() as u16;
        let max_dots = usize::from(area.width.saturating_sub(prev_w + next_w + 2) / 2 + 1);
        let shown = slide_count.min(max_dots);
        let dots_width = if shown == 0 { 0 } else { (shown * 2 - 1) as u16 };
        let row_width = prev_w + 1 + dots_width + 1 + next_w;
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;

        let prev_button = Rect::new(x, controls_y, prev_w, 1);
        x += prev_w + 1;
        let dots = (0..shown)
            .map(|i| Rect::new(x + (i as u16) * 2, controls_y, 1, 1))
            .collect();
        x += dots_width + 1;
        let next_button = Rect::new(x, controls_y, next_w, 1);

        let status = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

        Some(Self {
            active,
            previous,
            next,
            prev_button,
            next_button,
            dots,
            status,
        })
    }

    /// Map a mouse click to a carousel event
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<CarouselEvent> {
        if contains(self.prev_button, column, row) {
            return Some(CarouselEvent::Previous);
        }
        if contains(self.next_button, column, row) {
            return Some(CarouselEvent::Next);
        }
        self.dots
            .iter()
            .position(|r| contains(*r, column, row))
            .map(CarouselEvent::Select)
    }

    /// Card rect for a stack position
    #[must_use]
    pub fn card(&self, position: SlidePosition) -> Rect {
        match position {
            SlidePosition::Previous => self.previous,
            SlidePosition::Active => self.active,
            SlidePosition::Next => self.next,
        }
    }
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

/// Ratatui widget for one carousel frame
pub struct CarouselWidget<'a> {
    view: &'a CarouselView<'a>,
    show_hints: bool,
}

impl<'a> CarouselWidget<'a> {
    /// Wrap a view
    pub fn new(view: &'a CarouselView<'a>) -> Self {
        Self {
            view,
            show_hints: true,
        }
    }

    /// Toggle the key hints in the status bar
    #[must_use]
    pub fn show_hints(mut self, show: bool) -> Self {
        self.show_hints = show;
        self
    }

    fn draw_card(buf: &mut Buffer, area: Rect, slide: &Slide, theme: &Theme, active: bool) {
        let area = area.intersection(buf.area);
        if area.width < 4 || area.height < 3 {
            return;
        }

        let body = if active {
            theme.card_style()
        } else {
            theme.dimmed_card_style()
        };
        buf.set_style(area, body);
        draw_border(buf, area, theme.border_style());

        let inner = Rect::new(
            area.x + 2,
            area.y + 1,
            area.width.saturating_sub(4),
            area.height.saturating_sub(2),
        );

        let mut content = inner;
        if inner.width >= IMAGE_MIN_INNER {
            let image = Rect::new(inner.x, inner.y, IMAGE_WIDTH, inner.height);
            draw_image_placeholder(buf, image, &slide.image_ref, theme);
            content = Rect::new(
                inner.x + IMAGE_WIDTH + 2,
                inner.y,
                inner.width - IMAGE_WIDTH - 2,
                inner.height,
            );
        }

        let width = usize::from(content.width);
        let mut y = content.y;
        let bottom = content.y + content.height;
        let mut line = |buf: &mut Buffer, text: &str, style: Style| {
            if y < bottom {
                buf.set_string(content.x, y, truncate(text, width), style);
                y += 1;
            }
        };

        line(buf, &slide.tag, theme.tag_style());
        line(buf, &slide.title, theme.title_style());
        let wrapped = textwrap::wrap(&slide.text, width.max(1));
        for text in wrapped.iter().take(2) {
            line(buf, text, theme.text_style());
        }
        for _ in wrapped.len().min(2)..2 {
            line(buf, "", theme.text_style());
        }
        line(buf, "", theme.text_style());

        if y + 1 < bottom {
            let badge = format!(" {} ", slide.badge);
            buf.set_string(content.x, y, truncate(&badge, width), theme.badge_style());
            let cta = format!(" {} ", slide.cta);
            buf.set_string(content.x, y + 1, truncate(&cta, width), theme.cta_style());
        }
    }

    fn draw_controls(&self, buf: &mut Buffer, layout: &CarouselLayout, theme: &Theme) {
        buf.set_string(
            layout.prev_button.x,
            layout.prev_button.y,
            PREV_LABEL,
            theme.control_style(),
        );
        for (rect, indicator) in layout.dots.iter().zip(&self.view.indicators) {
            let symbol = if indicator.active { "●" } else { "○" };
            buf.set_string(rect.x, rect.y, symbol, theme.indicator_style(indicator.active));
        }
        buf.set_string(
            layout.next_button.x,
            layout.next_button.y,
            NEXT_LABEL,
            theme.control_style(),
        );
    }

    fn draw_status(&self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let state = if self.view.is_empty() {
            "no quests"
        } else if self.view.paused {
            "‖ paused"
        } else {
            "▶ auto"
        };
        let mut status = format!(" {state} · {}", self.view.color_scheme);
        if self.show_hints {
            status.push_str("   ←/→ browse  1-9 jump  t theme  q quit");
        }
        buf.set_string(
            area.x,
            area.y,
            truncate(&status, usize::from(area.width)),
            theme.control_style(),
        );
    }
}

impl Widget for CarouselWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = Theme::for_scheme(self.view.color_scheme);
        buf.set_style(area, Style::default().bg(theme.background));

        let Some(layout) = CarouselLayout::compute(area, self.view.indicators.len()) else {
            buf.set_string(
                area.x,
                area.y,
                truncate("Terminal too small", usize::from(area.width)),
                theme.control_style(),
            );
            return;
        };

        // Back to front: the view is already sorted by z-index
        for visible in &self.view.visible {
            let active = visible.position == SlidePosition::Active;
            Self::draw_card(buf, layout.card(visible.position), visible.slide, &theme, active);
        }

        if self.view.is_empty() {
            let msg = "No quests available";
            let x = area.x + area.width.saturating_sub(msg.width() as u16) / 2;
            buf.set_string(x, layout.active.y + CARD_HEIGHT / 2, msg, theme.control_style());
        }

        self.draw_controls(buf, &layout, &theme);
        self.draw_status(buf, layout.status, &theme);
    }
}

/// Draw a rounded border around `area`
fn draw_border(buf: &mut Buffer, area: Rect, style: Style) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let top = format!("╭{}╮", "─".repeat(inner_width));
    buf.set_string(area.x, area.y, &top, style);

    for y in (area.y + 1)..(area.y + area.height.saturating_sub(1)) {
        buf.set_string(area.x, y, "│", style);
        buf.set_string(area.x + area.width.saturating_sub(1), y, "│", style);
    }

    let bottom = format!("╰{}╯", "─".repeat(inner_width));
    buf.set_string(area.x, area.y + area.height.saturating_sub(1), &bottom, style);
}

/// Shaded box standing in for the slide's image, labelled with its file name
fn draw_image_placeholder(buf: &mut Buffer, area: Rect, image_ref: &str, theme: &Theme) {
    let style = theme.tag_style();
    let fill = "░".repeat(usize::from(area.width));
    for y in area.y..area.y + area.height {
        buf.set_string(area.x, y, &fill, style);
    }

    let name = image_ref.rsplit('/').next().unwrap_or(image_ref);
    if !name.is_empty() {
        let label = truncate(name, usize::from(area.width));
        let x = area.x + area.width.saturating_sub(label.width() as u16) / 2;
        buf.set_string(x, area.y + area.height / 2, label, style);
    }
}

/// Cut `text` to at most `width` display columns
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::{CarouselSnapshot, ColorScheme, SlideDeck};
    use pretty_assertions::assert_eq;

    fn snapshot(n: usize, current: usize) -> CarouselSnapshot {
        CarouselSnapshot {
            slide_count: n,
            current_index: current,
            paused: false,
            color_scheme: ColorScheme::Light,
            disposed: false,
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_layout_too_small() {
        assert!(CarouselLayout::compute(Rect::new(0, 0, 80, 5), 3).is_none());
        assert!(CarouselLayout::compute(Rect::new(0, 0, 10, 30), 3).is_none());
    }

    #[test]
    fn test_layout_stacks_cards() {
        let layout = CarouselLayout::compute(Rect::new(0, 0, 80, 24), 3).unwrap();
        assert_eq!(layout.active.width, MAX_CARD_WIDTH);
        assert_eq!(layout.previous.y + 1, layout.active.y);
        assert_eq!(layout.next.y, layout.active.y + 1);
        assert!(layout.previous.width < layout.active.width);
        assert_eq!(layout.dots.len(), 3);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_hit_test_controls() {
        let layout = CarouselLayout::compute(Rect::new(0, 0, 80, 24), 3).unwrap();

        let prev = layout.prev_button;
        assert_eq!(
            layout.hit_test(prev.x + 1, prev.y),
            Some(CarouselEvent::Previous)
        );
        let next = layout.next_button;
        assert_eq!(layout.hit_test(next.x, next.y), Some(CarouselEvent::Next));

        let dot = layout.dots[2];
        assert_eq!(layout.hit_test(dot.x, dot.y), Some(CarouselEvent::Select(2)));

        // Gap between dots
        assert_eq!(layout.hit_test(dot.x - 1, dot.y), None);
        assert_eq!(layout.hit_test(layout.active.x + 3, layout.active.y + 3), None);
    }

    #[test]
    fn test_render_active_card_content() {
        let deck = SlideDeck::quests();
        let view = CarouselView::build(&deck.slides, &snapshot(3, 1));

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        CarouselWidget::new(&view).render(area, &mut buf);
        let text = buffer_text(&buf);

        assert!(text.contains("Storage Master"));
        assert!(text.contains("WEEKLY CHALLENGE"));
        assert!(text.contains("100 pts"));
        assert!(text.contains("Start quest"));
        assert!(text.contains("hero.png"));
        assert!(text.contains("○ ● ○"));
        assert!(text.contains("▶ auto · light"));
    }

    #[test]
    fn test_render_paused_dark() {
        let deck = SlideDeck::quests();
        let mut snap = snapshot(3, 0);
        snap.paused = true;
        snap.color_scheme = ColorScheme::Dark;
        let view = CarouselView::build(&deck.slides, &snap);

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        CarouselWidget::new(&view).show_hints(false).render(area, &mut buf);
        let text = buffer_text(&buf);

        assert!(text.contains("‖ paused · dark"));
        assert!(!text.contains("q quit"));
        assert_eq!(buf[(0, 0)].bg, Theme::DARK.background);
    }

    #[test]
    fn test_render_empty_deck() {
        let slides: Vec<Slide> = Vec::new();
        let view = CarouselView::build(&slides, &snapshot(0, 0));

        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        CarouselWidget::new(&view).render(area, &mut buf);
        let text = buffer_text(&buf);

        assert!(text.contains("No quests available"));
        assert!(text.contains("no quests"));
    }

    #[test]
    fn test_render_too_small() {
        let deck = SlideDeck::quests();
        let view = CarouselView::build(&deck.slides, &snapshot(3, 0));

        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        CarouselWidget::new(&view).render(area, &mut buf);
        assert!(buffer_text(&buf).starts_with("Terminal too small"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Harvest", 10), "Harvest");
        assert_eq!(truncate("Harvest Hero", 8), "Harvest…");
        assert_eq!(truncate("abc", 0), "");
    }
}
