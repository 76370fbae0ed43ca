//! Error Types
//!
//! The carousel has a deliberately tiny failure surface: jumping to a slide
//! that does not exist, and failing to read configuration or deck files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by carousel navigation
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// `jump_to` was called with an index outside `[0, len)`
    #[error("slide index {index} out of range (slide count: {len})")]
    OutOfRange {
        /// The requested index
        index: usize,
        /// Number of slides in the carousel
        len: usize,
    },
}

/// Errors raised while loading configuration or slide decks from disk
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML content did not match the expected shape
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON content did not match the expected shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("unsupported deck format: {0}")]
    UnsupportedFormat(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = CarouselError::OutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "slide index 7 out of range (slide count: 3)"
        );
    }
}
