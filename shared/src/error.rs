//! Error types for the celebration effect.

use thiserror::Error;

/// Failures that can cross the boundary between the engine and its host.
///
/// The simulation itself cannot fail; every variant originates from a drawing surface, a
/// scheduling primitive or user supplied options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EffectError {
    #[error("drawing surface error: {0}")]
    Surface(String),

    #[error("host scheduling error: {0}")]
    Host(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
