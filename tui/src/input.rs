//! Key Bindings
//!
//! Translates terminal key presses into app actions. Mouse clicks go
//! through [`CarouselLayout::hit_test`](crate::widgets::CarouselLayout::hit_test)
//! instead.

use carousel_core::CarouselEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the app should do in response to input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Forward to the carousel as a manual interaction
    Carousel(CarouselEvent),
    /// Flip the light/dark preference
    ToggleScheme,
    /// Show or hide the key hints
    ToggleHints,
    /// Leave the app
    Quit,
}

/// Map a key press to an action
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),

        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
            Some(Action::Carousel(CarouselEvent::Previous))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab | KeyCode::Char(' ') => {
            Some(Action::Carousel(CarouselEvent::Next))
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Some(Action::Carousel(CarouselEvent::Select(index)))
        }

        KeyCode::Char('t') => Some(Action::ToggleScheme),
        KeyCode::Char('?') => Some(Action::ToggleHints),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            map_key(key(KeyCode::Left)),
            Some(Action::Carousel(CarouselEvent::Previous))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('l'))),
            Some(Action::Carousel(CarouselEvent::Next))
        );
    }

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(
            map_key(key(KeyCode::Char('1'))),
            Some(Action::Carousel(CarouselEvent::Select(0)))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('9'))),
            Some(Action::Carousel(CarouselEvent::Select(8)))
        );
        assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(map_key(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_scheme_toggle() {
        assert_eq!(map_key(key(KeyCode::Char('t'))), Some(Action::ToggleScheme));
    }
}
