//! Widgets
//!
//! Ratatui widgets for drawing carousel frames.

pub mod carousel;

pub use carousel::{CarouselLayout, CarouselWidget};
