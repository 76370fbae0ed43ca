//! Theme and Colors
//!
//! Farm-dashboard palette for the quest cards, in a light and a dark
//! variant. The carousel core only reports a [`ColorScheme`]; this module
//! turns it into concrete terminal styles.

use carousel_core::ColorScheme;
use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Brand Palette
// ============================================================================

/// Call-to-action button - deep field green
pub const CTA_GREEN: Color = Color::Rgb(46, 102, 80);

/// Badge background - pale mint
pub const BADGE_MINT: Color = Color::Rgb(235, 253, 235);

/// Badge text - dark leaf green
pub const BADGE_TEXT: Color = Color::Rgb(22, 101, 52);

/// Active indicator dot
pub const INDICATOR_ACTIVE: Color = Color::Rgb(22, 163, 74);

/// Inactive indicator dot
pub const INDICATOR_IDLE: Color = Color::Rgb(209, 213, 219);

// ============================================================================
// Greys (shared by both schemes)
// ============================================================================

const WHITE: Color = Color::Rgb(255, 255, 255);
const GRAY_200: Color = Color::Rgb(229, 231, 235);
const GRAY_300: Color = Color::Rgb(209, 213, 219);
const GRAY_400: Color = Color::Rgb(156, 163, 175);
const GRAY_500: Color = Color::Rgb(107, 114, 128);
const GRAY_600: Color = Color::Rgb(75, 85, 99);
const GRAY_700: Color = Color::Rgb(55, 65, 81);
const GRAY_800: Color = Color::Rgb(31, 41, 55);
const GRAY_900: Color = Color::Rgb(17, 24, 39);

/// Concrete styles for one colour scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Which scheme this theme renders
    pub scheme: ColorScheme,
    /// Page background
    pub background: Color,
    /// Card fill
    pub card: Color,
    /// Card border
    pub border: Color,
    /// Headline text
    pub title: Color,
    /// Body text
    pub subtext: Color,
    /// Tag and hint text
    pub light_text: Color,
}

impl Theme {
    /// Light scheme: white cards on white
    pub const LIGHT: Self = Self {
        scheme: ColorScheme::Light,
        background: WHITE,
        card: WHITE,
        border: GRAY_200,
        title: GRAY_900,
        subtext: GRAY_600,
        light_text: GRAY_500,
    };

    /// Dark scheme: slate cards on near-black
    pub const DARK: Self = Self {
        scheme: ColorScheme::Dark,
        background: GRAY_900,
        card: GRAY_800,
        border: GRAY_700,
        title: WHITE,
        subtext: GRAY_300,
        light_text: GRAY_400,
    };

    /// Pick the theme for a scheme
    #[must_use]
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::LIGHT,
            ColorScheme::Dark => Self::DARK,
        }
    }

    /// Card body
    #[must_use]
    pub fn card_style(&self) -> Style {
        Style::default().bg(self.card).fg(self.subtext)
    }

    /// Card that is peeking in behind the active one
    #[must_use]
    pub fn dimmed_card_style(&self) -> Style {
        self.card_style().add_modifier(Modifier::DIM)
    }

    /// Card border
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border).bg(self.card)
    }

    /// Tag line
    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.light_text).bg(self.card)
    }

    /// Headline
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .bg(self.card)
            .add_modifier(Modifier::BOLD)
    }

    /// Description text
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.subtext).bg(self.card)
    }

    /// Points badge
    #[must_use]
    pub fn badge_style(&self) -> Style {
        Style::default().fg(BADGE_TEXT).bg(BADGE_MINT)
    }

    /// "Start quest" button
    #[must_use]
    pub fn cta_style(&self) -> Style {
        Style::default().fg(WHITE).bg(CTA_GREEN)
    }

    /// Indicator dot
    #[must_use]
    pub fn indicator_style(&self, active: bool) -> Style {
        let fg = if active { INDICATOR_ACTIVE } else { INDICATOR_IDLE };
        Style::default().fg(fg).bg(self.background)
    }

    /// Previous/next controls and status line
    #[must_use]
    pub fn control_style(&self) -> Style {
        Style::default().fg(self.subtext).bg(self.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_scheme() {
        assert_eq!(Theme::for_scheme(ColorScheme::Dark), Theme::DARK);
        assert_eq!(Theme::for_scheme(ColorScheme::Light), Theme::LIGHT);
        assert_ne!(Theme::LIGHT.card, Theme::DARK.card);
    }

    #[test]
    fn test_indicator_highlight() {
        let theme = Theme::DARK;
        assert_eq!(theme.indicator_style(true).fg, Some(INDICATOR_ACTIVE));
        assert_eq!(theme.indicator_style(false).fg, Some(INDICATOR_IDLE));
    }
}
