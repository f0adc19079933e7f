//! Error types for colormap construction.

use thiserror::Error;

/// The error type of this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// No base ramp with this name is registered.
    #[error("Unknown color ramp: {name}")]
    UnknownRamp { name: String },

    /// The levels cannot be used to stretch a colormap.
    #[error("Invalid levels: {message}")]
    InvalidLevels { message: String },

    /// Any other invalid argument.
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Style configuration could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn levels(message: impl Into<String>) -> Self {
        Error::InvalidLevels { message: message.into() }
    }

    pub(crate) fn param(param: &str, message: impl Into<String>) -> Self {
        Error::InvalidParameter { param: param.to_string(),
                                  message: message.into() }
    }
}

/// Convenience type alias for results of this crate.
pub type Result<T> = std::result::Result<T, Error>;
