//! Error types.
//!
//! Only startup can fail: an invalid configuration or a texture that the
//! asset loader cannot supply. Gameplay conditions such as clicking a card
//! mid-flip are refused by state guards and never surface as errors.

use thiserror::Error;

/// A configuration that cannot produce a playable board.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one motif is required")]
    NoMotifs,

    #[error("motif `{0}` is listed more than once")]
    DuplicateMotif(String),

    #[error("column count must be at least 1")]
    ZeroColumns,

    #[error("gutter must be a finite, non-negative pixel count (got {0})")]
    InvalidGutter(f64),

    #[error("card ratio must be finite and positive (got {0})")]
    InvalidCardRatio(f64),

    #[error("vertical padding ratio must be in [0, 0.5) (got {0})")]
    InvalidPadding(f64),

    #[error("canvas width ratio must be in (0, 1] (got {0})")]
    InvalidCanvasRatio(f64),

    #[error("hover brightness must be finite and positive (got {0})")]
    InvalidBrightness(f64),

    #[error("pair delay must be between 0 and 60000 ms (got {0})")]
    InvalidDelay(f64),

    #[error("max tilt must be between 0 and pi radians (got {0})")]
    InvalidTilt(f64),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fatal startup failure.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    #[error("failed to load texture `{path}`: {reason}")]
    AssetLoad { path: String, reason: String },
}
