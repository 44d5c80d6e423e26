//! # Core Error Types
//!
//! Capacity errors raised by pools and arenas, and configuration errors.
//!
//! Stale or unknown handles are NOT errors. Lookups through a stale handle
//! resolve to nothing and callers treat that as "nothing to do this frame".

use thiserror::Error;

/// Errors that can occur in the core memory layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Every index a 16-bit handle can address is already in use.
    #[error("typed pool exhausted: {live} live slots, limit {limit}")]
    PoolExhausted {
        /// Live slots at the time of the request.
        live: usize,
        /// Maximum addressable slots.
        limit: usize,
    },

    /// The arena's fixed buffer cannot fit the requested object.
    #[error(
        "arena exhausted: {type_name} needs {requested} bytes (align {align}) at offset {offset}, capacity {capacity}"
    )]
    ArenaExhausted {
        /// Type being constructed.
        type_name: &'static str,
        /// Size of the type in bytes.
        requested: usize,
        /// Alignment of the type in bytes.
        align: usize,
        /// Bump offset at the time of the request.
        offset: usize,
        /// Fixed arena capacity in bytes.
        capacity: usize,
    },

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_limits() {
        let err = CoreError::PoolExhausted {
            live: 65_536,
            limit: 65_536,
        };
        assert_eq!(
            err.to_string(),
            "typed pool exhausted: 65536 live slots, limit 65536"
        );

        let err = CoreError::ArenaExhausted {
            type_name: "u64",
            requested: 8,
            align: 8,
            offset: 16,
            capacity: 20,
        };
        assert!(err.to_string().contains("u64 needs 8 bytes"));
    }
}
