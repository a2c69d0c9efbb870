//! # Framework Errors
//!
//! Errors raised by the plumbing itself (channels, lookups), as opposed to the
//! business errors an entity raises from its hooks. Every entity error type must
//! implement `From<FrameworkError>` so clients can hand callers a single error type.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}
