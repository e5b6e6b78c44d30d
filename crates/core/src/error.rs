//! Error type shared by the asset loaders and the layer engine.

use thiserror::Error;

/// Errors raised synchronously at the call site (asset load, font load,
/// buffer construction, controller configuration).
#[derive(Debug, Error)]
pub enum DmdError {
    /// Reading or writing an asset file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// An asset's bytes do not describe a valid animation or font.
    #[error("format error: {0}")]
    Format(String),
    /// A buffer or layer was used in a way its contract does not allow.
    #[error("contract error: {0}")]
    Contract(String),
    /// The display controller was asked for something it was not set up for.
    #[error("configuration error: {0}")]
    Config(String),
}

impl DmdError {
    pub fn is_format(&self) -> bool {
        matches!(self, DmdError::Format(_))
    }

    pub fn is_contract(&self) -> bool {
        matches!(self, DmdError::Contract(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, DmdError::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, DmdError>;
