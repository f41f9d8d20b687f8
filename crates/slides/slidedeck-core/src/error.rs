//! Error types for slidedeck-core.

use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("total_slides must be at least 1")]
    NoSlides,
    #[error("{field} must be a finite, non-negative number of seconds (got {value})")]
    InvalidDuration { field: &'static str, value: f32 },
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f32 },
    #[error("disabled_opacity must be within [0, 1] (got {0})")]
    InvalidOpacity(f32),
    #[error("max_frame_delta must be a finite, positive number of seconds (got {0})")]
    InvalidFrameDelta(f32),
}
