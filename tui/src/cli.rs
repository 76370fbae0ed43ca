//! Command Line
//!
//! Flags, and how they combine with config files and environment variables.
//! Priority (lowest to highest): defaults, `--config` file, `CAROUSEL_*`
//! environment variables, explicit flags.

use std::path::PathBuf;

use anyhow::Context;
use carousel_core::{CarouselConfig, ColorScheme, SlideDeck};
use clap::Parser;

/// Quest carousel in the terminal
#[derive(Debug, Parser)]
#[command(name = "quest-tui", version, about)]
pub struct Args {
    /// TOML file with `tick_interval_ms` / `cooldown_ms`
    #[arg(long, env = "QUEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Slide deck file (.toml or .json); defaults to the built-in quests
    #[arg(long, env = "QUEST_DECK")]
    pub deck: Option<PathBuf>,

    /// Auto-advance interval in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Pause after manual navigation in milliseconds
    #[arg(long)]
    pub cooldown_ms: Option<u64>,

    /// Initial colour scheme (light or dark); detected from COLORFGBG if unset
    #[arg(long, env = "QUEST_SCHEME")]
    pub scheme: Option<ColorScheme>,

    /// Write logs here (the terminal is taken by the UI)
    #[arg(long, env = "QUEST_TUI_LOG")]
    pub log_file: Option<PathBuf>,

    /// Hide key hints in the status bar
    #[arg(long)]
    pub no_hints: bool,
}

impl Args {
    /// Effective timing configuration
    pub fn resolve_config(&self) -> anyhow::Result<CarouselConfig> {
        let base = match &self.config {
            Some(path) => CarouselConfig::load_from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => CarouselConfig::default(),
        };

        let mut config = base.with_env_overrides();
        if let Some(ms) = self.tick_ms {
            config.tick_interval_ms = ms;
        }
        if let Some(ms) = self.cooldown_ms {
            config.cooldown_ms = ms;
        }
        Ok(config.clamped())
    }

    /// Slides to show
    pub fn resolve_deck(&self) -> anyhow::Result<SlideDeck> {
        match &self.deck {
            Some(path) => SlideDeck::load(path)
                .with_context(|| format!("loading deck {}", path.display())),
            None => Ok(SlideDeck::quests()),
        }
    }

    /// Initial colour scheme
    pub fn resolve_scheme(&self) -> ColorScheme {
        self.scheme
            .or_else(|| {
                std::env::var("COLORFGBG")
                    .ok()
                    .and_then(|v| scheme_from_colorfgbg(&v))
            })
            .unwrap_or_default()
    }
}

/// Guess the terminal background from `COLORFGBG` (`"fg;bg"` or `"fg;x;bg"`)
///
/// ANSI backgrounds 0-6 and 8 are dark; 7 and 9-15 are light.
#[must_use]
pub fn scheme_from_colorfgbg(value: &str) -> Option<ColorScheme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(ColorScheme::from_dark(matches!(bg, 0..=6 | 8)))
}
