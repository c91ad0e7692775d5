//! Centralized error types for the swap engine
//!
//! Errors only arise at the boundary, when decoding records delivered by the
//! data-fetching layer. Every engine transition itself is total: resolution
//! misses degrade to `None`/zero instead of failing.

use thiserror::Error;

/// Main engine error type
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid {entity} record: {reason}")]
    InvalidRecord {
        entity: &'static str,
        reason: String,
    },
}

impl EngineError {
    pub fn invalid_record(entity: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidRecord {
            entity,
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
