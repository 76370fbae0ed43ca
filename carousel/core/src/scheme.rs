//! Colour Scheme Preference
//!
//! The host environment broadcasts a light/dark preference. The carousel
//! subscribes to it for its lifetime and only uses it for presentation.
//!
//! Surfaces inject a [`ColorSchemeSource`]; [`SchemeNotifier`] is the
//! in-process implementation and doubles as the fake in tests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Light or dark presentation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light background, dark text
    #[default]
    Light,
    /// Dark background, light text
    Dark,
}

impl ColorScheme {
    /// Map a "prefers dark" flag to a scheme
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The opposite scheme
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// True for [`ColorScheme::Dark`]
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown colour scheme '{other}' (expected light or dark)")),
        }
    }
}

/// A broadcast source of colour-scheme changes
///
/// Subscribing hands out a receiver whose current value is the preference at
/// subscription time. Dropping the receiver unsubscribes.
pub trait ColorSchemeSource: Send + Sync {
    /// Subscribe to preference changes
    fn subscribe(&self) -> watch::Receiver<ColorScheme>;
}

/// In-process preference broadcaster
#[derive(Debug)]
pub struct SchemeNotifier {
    tx: watch::Sender<ColorScheme>,
}

impl SchemeNotifier {
    /// Create a notifier holding an initial preference
    pub fn new(initial: ColorScheme) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Broadcast a new preference (no-op if unchanged)
    pub fn set(&self, scheme: ColorScheme) {
        self.tx.send_if_modified(|current| {
            if *current == scheme {
                false
            } else {
                *current = scheme;
                true
            }
        });
    }

    /// Flip between light and dark, returning the new value
    pub fn toggle(&self) -> ColorScheme {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    /// The current preference
    #[must_use]
    pub fn current(&self) -> ColorScheme {
        *self.tx.borrow()
    }

    /// Number of live subscriptions
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SchemeNotifier {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}

impl ColorSchemeSource for SchemeNotifier {
    fn subscribe(&self) -> watch::Receiver<ColorScheme> {
        self.tx.subscribe()
    }
}
