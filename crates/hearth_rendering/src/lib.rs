//! # HEARTH Rendering
//!
//! World-layer drawing above the GPU backend:
//! - [`SceneGraph`]: flat, index-addressed forest of [`Shape`] nodes with
//!   lazy per-level z sorting and subtree visibility
//! - [`TextureRegistry`]: name-deduplicated texture table on
//!   [`TypedPool`](hearth_core::TypedPool)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    SCENE PIPELINE                        │
//! ├─────────────────────────────────────────────────────────┤
//! │  create_* → add_child → update_all(dt) → render_all     │
//! │      ↓           ↓                            ↓         │
//! │  free list   cycle check          sorted, visible-only  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Both passes emit into the same [`RenderList`](hearth_ui::RenderList)
//! the UI uses, so the world layer and the UI share one command stream.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod resources;
pub mod scene;

pub use error::{SceneError, SceneResult};
pub use resources::{TextureDesc, TextureRegistry};
pub use scene::{Node, SceneGraph, Shape, NO_PARENT};
