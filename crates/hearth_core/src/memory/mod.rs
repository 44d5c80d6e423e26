//! # Memory Management
//!
//! Pools and arenas that hand out stable references without raw pointers
//! escaping to callers.
//!
//! ## Design Philosophy
//!
//! - [`TypedPool`]: one concrete type, per-slot generations, LIFO reuse
//! - [`Arena`]: many types, one fixed buffer, destroyed all at once
//!
//! Neither structure is thread-safe. Both are owned by one frame loop.

mod arena;
mod pool;

pub use arena::{AllocationInfo, Arena, ARENA_BASE_ALIGN};
pub use pool::{TypedPool, MAX_POOL_SLOTS};
