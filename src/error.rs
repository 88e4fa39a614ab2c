//! Error types for the portfolio service.

use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Error, Debug)]
pub enum FolioError {
    /// A theme name outside `dark` / `light`
    #[error("Invalid theme name: {0:?}")]
    InvalidThemeName(String),

    /// Profile file could not be read
    #[error("Failed to read profile {path}: {source}")]
    ProfileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Profile file is not valid profile TOML
    #[error("Failed to parse profile {path}: {source}")]
    ProfileParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
