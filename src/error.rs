//! Error types for the Tenzies application.
//!
//! The game core never fails; these cover process start-up only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenziesError {
    /// The native window or its rendering context could not be created
    #[error("Failed to start the game window: {0}")]
    Gui(#[from] eframe::Error),

    /// The global tracing subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, TenziesError>;
