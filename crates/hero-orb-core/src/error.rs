//! Error type for hero orb construction and configuration.

use thiserror::Error;

/// Errors raised while acquiring a drawing surface or reading configuration.
///
/// None of these abort the host page: surface errors turn into an inert
/// handle, configuration errors fall back to defaults.
#[derive(Debug, Error)]
pub enum OrbError {
    /// The canvas argument was missing or was not a canvas element.
    #[error("expected a canvas element")]
    MissingCanvas,

    /// The 2D drawing context could not be acquired.
    #[error("unable to acquire 2D context: {0}")]
    ContextUnavailable(String),

    /// Configuration JSON could not be parsed.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration TOML could not be parsed.
    #[error("invalid configuration TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result alias for hero orb operations.
pub type Result<T> = std::result::Result<T, OrbError>;
