//! Carousel Core - Headless Quest Carousel
//!
//! This crate provides the logic behind the dashboard's quest carousel,
//! completely independent of any UI framework. A surface (the terminal UI,
//! or a test) mounts a [`Carousel`], feeds it [`CarouselEvent`]s and redraws
//! from [`CarouselSnapshot`]s.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      UI Surfaces                          │
//! │        ┌─────────┐                ┌──────────────┐        │
//! │        │   TUI   │                │  Tests /     │        │
//! │        │(ratatui)│                │  Headless    │        │
//! │        └────┬────┘                └──────┬───────┘        │
//! │             └──────────────┬─────────────┘                │
//! │              CarouselEvent (up) / CarouselSnapshot (down) │
//! └────────────────────────────┼──────────────────────────────┘
//!                              │
//! ┌────────────────────────────┼──────────────────────────────┐
//! │                     CAROUSEL CORE                          │
//! │  ┌─────────────────────────┴──────────────────────────┐   │
//! │  │                     Carousel                        │   │
//! │  │  ┌──────────┐  ┌──────────┐  ┌──────────────────┐  │   │
//! │  │  │  Ticker  │  │ Cooldown │  │ Scheme subscriber│  │   │
//! │  │  └──────────┘  └──────────┘  └──────────────────┘  │   │
//! │  │                 CarouselState                       │   │
//! │  └────────────────────────────────────────────────────┘   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use carousel_core::{Carousel, CarouselConfig, SchemeNotifier, SlideDeck};
//!
//! #[tokio::main]
//! async fn main() {
//!     let notifier = SchemeNotifier::default();
//!     let carousel = Carousel::mount(
//!         SlideDeck::quests().into_shared(),
//!         CarouselConfig::from_env(),
//!         &notifier,
//!     );
//!
//!     let mut updates = carousel.subscribe();
//!     while updates.changed().await.is_ok() {
//!         let view = carousel.view();
//!         // draw view.visible and view.indicators
//!     }
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`carousel`]: the mounted widget and its background tasks
//! - [`state`]: pure navigation state machine
//! - [`view`]: which slides and indicators to draw
//! - [`scheme`]: light/dark preference and its broadcaster
//! - [`timer`]: cancellable one-shot and repeating timers
//! - [`events`]: surface events and state snapshots
//! - [`slide`]: slide records and decks
//! - [`config`]: timing configuration
//! - [`error`]: error types
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod carousel;
pub mod config;
pub mod error;
pub mod events;
pub mod scheme;
pub mod slide;
pub mod state;
pub mod timer;
pub mod view;

// Re-exports for convenience
pub use carousel::Carousel;
pub use config::{CarouselConfig, DEFAULT_COOLDOWN_MS, DEFAULT_TICK_INTERVAL_MS};
pub use error::{CarouselError, ConfigError};
pub use events::{CarouselEvent, CarouselSnapshot};
pub use scheme::{ColorScheme, ColorSchemeSource, SchemeNotifier};
pub use slide::{Slide, SlideDeck};
pub use state::{CarouselState, Phase};
pub use timer::{RestartableTimer, Ticker};
pub use view::{CarouselView, Indicator, SlidePosition, VisibleSlide};
