//! # UI Error Types

use hearth_core::CoreError;
use thiserror::Error;

/// Errors that can occur while building a component tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// The tree's arena could not fit the child.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The tree already holds as many children as a handle can index.
    #[error("component tree full: limit {limit} children")]
    TooManyChildren {
        /// Maximum children per tree.
        limit: usize,
    },
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
