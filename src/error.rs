//! Error types for surface and controller operations.

use crate::types::EntityId;
use thiserror::Error;

/// Errors raised while mutating entities through a `RenderSurface`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InteractionError {
    /// The handle refers to an entity the surface no longer owns
    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),

    /// A pick tolerance must be a finite, non-negative distance
    #[error("invalid pick tolerance: {0}")]
    InvalidTolerance(f64),

    /// Grid spacing must be finite and positive
    #[error("invalid grid spacing: {0}")]
    InvalidGridSpacing(f64),
}

/// Result type alias for interaction operations
pub type InteractionResult<T> = Result<T, InteractionError>;
