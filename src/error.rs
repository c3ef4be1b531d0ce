//! Error types for simulator setup and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("canvas element `{0}` not found")]
    MissingCanvas(String),

    #[error("canvas 2D context not available")]
    MissingContext,

    #[error("gravity must be positive and finite, got {0}")]
    InvalidGravity(f32),

    #[error("fps must be positive and finite, got {0}")]
    InvalidFps(f32),

    #[error("units must be positive and finite, got {0}")]
    InvalidUnits(f32),

    #[error("fixed shape size must be positive and finite, got {0}")]
    InvalidShapeSize(f32),

    #[error("unknown bounce variant `{0}`")]
    UnknownVariant(String),

    #[error("timer error: {0}")]
    Timer(String),

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
