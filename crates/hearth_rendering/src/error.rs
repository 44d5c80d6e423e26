//! # Scene Error Types

use thiserror::Error;

/// Misuse of a [`SceneGraph`](crate::SceneGraph).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The index is out of range or names a freed node.
    #[error("invalid scene node {index} (graph has {len} slots)")]
    InvalidIndex {
        /// Offending index.
        index: u32,
        /// Slots in the graph.
        len: usize,
    },

    /// A node cannot be its own child.
    #[error("scene node {index} cannot be its own parent")]
    SelfParent {
        /// Offending index.
        index: u32,
    },

    /// Attaching would make a node its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle {
        /// Requested parent.
        parent: u32,
        /// Requested child, an ancestor of `parent`.
        child: u32,
    },

    /// `child` is not attached to `parent`.
    #[error("scene node {child} is not a child of {parent}")]
    NotAChild {
        /// Requested parent.
        parent: u32,
        /// Requested child.
        child: u32,
    },
}

/// Result type for scene graph operations.
pub type SceneResult<T> = Result<T, SceneError>;
