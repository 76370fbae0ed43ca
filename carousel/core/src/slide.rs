//! Slide Records
//!
//! A slide is one promotional quest card. Slides are immutable once handed to
//! a carousel; the carousel never looks inside `image_ref`.
//!
//! Decks can be loaded from TOML or JSON:
//!
//! ```toml
//! [[slides]]
//! tag = "DAILY QUEST"
//! title = "Harvest Hero"
//! text = "Log your daily harvest report and points"
//! points = "50 pts"
//! image = "/img/hero.png"
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default call-to-action label shown on every card
pub const DEFAULT_CTA: &str = "Start quest";

/// One promotional card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Short category label (e.g. "DAILY QUEST")
    pub tag: String,
    /// Headline
    pub title: String,
    /// Description
    pub text: String,
    /// Reward label (e.g. "50 pts")
    #[serde(alias = "points")]
    pub badge: String,
    /// Opaque reference to a visual asset
    #[serde(alias = "image", default)]
    pub image_ref: String,
    /// Call-to-action button label
    #[serde(default = "default_cta")]
    pub cta: String,
}

fn default_cta() -> String {
    DEFAULT_CTA.to_string()
}

impl Slide {
    /// Create a slide with the default call-to-action
    pub fn new(
        tag: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        badge: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            title: title.into(),
            text: text.into(),
            badge: badge.into(),
            image_ref: image_ref.into(),
            cta: default_cta(),
        }
    }

    /// Override the call-to-action label
    #[must_use]
    pub fn with_cta(mut self, cta: impl Into<String>) -> Self {
        self.cta = cta.into();
        self
    }
}

/// An ordered, shareable list of slides
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDeck {
    /// Slides in display order
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl SlideDeck {
    /// Wrap an existing list of slides
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// The dashboard's quest deck
    pub fn quests() -> Self {
        Self::new(vec![
            Slide::new(
                "DAILY QUEST",
                "Harvest Hero",
                "Log your daily harvest report and points",
                "50 pts",
                "/img/hero.png",
            ),
            Slide::new(
                "WEEKLY CHALLENGE",
                "Storage Master",
                "Optimize your storage facilities and reduce waste",
                "100 pts",
                "/img/hero.png",
            ),
            Slide::new(
                "SPECIAL EVENT",
                "Market Connect",
                "Connect with new buyers and expand your network",
                "150 pts",
                "/img/hero.png",
            ),
        ])
    }

    /// Parse a deck from TOML (`[[slides]]` tables)
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse a deck from JSON (`{"slides": [...]}` or a bare array)
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        if value.is_array() {
            Ok(Self::new(serde_json::from_value(value)?))
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }

    /// Load a deck file, picking the parser by extension
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Number of slides
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when the deck has no slides
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Freeze the deck into a cheaply clonable slice
    #[must_use]
    pub fn into_shared(self) -> Arc<[Slide]> {
        self.slides.into()
    }
}

impl From<Vec<Slide>> for SlideDeck {
    fn from(slides: Vec<Slide>) -> Self {
        Self::new(slides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quest_deck() {
        let deck = SlideDeck::quests();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.slides[0].title, "Harvest Hero");
        assert_eq!(deck.slides[2].badge, "150 pts");
        assert!(deck.slides.iter().all(|s| s.cta == DEFAULT_CTA));
    }

    #[test]
    fn test_toml_aliases() {
        let deck = SlideDeck::from_toml_str(
            r#"
            [[slides]]
            tag = "DAILY QUEST"
            title = "Harvest Hero"
            text = "Log your daily harvest"
            points = "50 pts"
            image = "/img/hero.png"

            [[slides]]
            tag = "EVENT"
            title = "Field Day"
            text = "Visit the demo plots"
            badge = "10 pts"
            cta = "Join"
            "#,
        )
        .unwrap();

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slides[0].badge, "50 pts");
        assert_eq!(deck.slides[0].image_ref, "/img/hero.png");
        assert_eq!(deck.slides[1].image_ref, "");
        assert_eq!(deck.slides[1].cta, "Join");
    }

    #[test]
    fn test_json_bare_array() {
        let deck = SlideDeck::from_json_str(
            r#"[{"tag":"T","title":"A","text":"x","badge":"1 pt","image_ref":"a.png"}]"#,
        )
        .unwrap();
        assert_eq!(deck.slides, vec![Slide::new("T", "A", "x", "1 pt", "a.png")]);
    }

    #[test]
    fn test_empty_toml_is_empty_deck() {
        let deck = SlideDeck::from_toml_str("").unwrap();
        assert!(deck.is_empty());
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.yaml");
        std::fs::write(&path, "slides: []").unwrap();
        assert!(matches!(
            SlideDeck::load(&path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SlideDeck::load(Path::new("/nonexistent/deck.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
