//! # HEARTH Core
//!
//! The ownership model every other HEARTH subsystem builds on:
//! - [`Handle`]: packed `{index, generation}` references, never pointers
//! - [`TypedPool`]: homogeneous slots with LIFO recycling
//! - [`Arena`]: fixed-capacity placement storage for mixed types
//!
//! ## Architecture Rules
//!
//! 1. **Revalidate on every access** - a handle is resolved through its
//!    owning table each time it is used; resolved references never outlive
//!    a frame
//! 2. **Stale is not an error** - lookups through stale handles return
//!    nothing
//! 3. **Capacity is a sizing decision** - exceeding a fixed capacity panics
//!
//! ## Example
//!
//! ```rust
//! use hearth_core::TypedPool;
//!
//! let mut pool: TypedPool<i32> = TypedPool::new();
//! let _h0 = pool.allocate(0);
//! let h1 = pool.allocate(1);
//! let _h2 = pool.allocate(2);
//!
//! pool.free(h1);
//! let reused = pool.allocate(3);
//! assert_eq!((reused.index(), reused.generation()), (1, 1));
//! assert_eq!(pool.get(h1), None);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod handle;
pub mod memory;

pub use config::MemoryConfig;
pub use error::{CoreError, CoreResult};
pub use handle::Handle;
pub use memory::{AllocationInfo, Arena, TypedPool, ARENA_BASE_ALIGN, MAX_POOL_SLOTS};
