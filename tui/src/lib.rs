//! Quest TUI - Terminal surface for the quest carousel
//!
//! This crate renders the headless `carousel-core` carousel in a terminal.
//!
//! # Architecture
//!
//! - **App**: event loop turning keys/clicks into carousel events
//! - **Widgets**: stacked quest cards, indicator row, status bar
//! - **Theme**: light/dark palettes selected by the colour scheme
//! - **Input**: key bindings
//! - **Cli**: flags, config files and environment

pub mod app;
pub mod cli;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
