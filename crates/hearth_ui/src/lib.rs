//! # HEARTH UI
//!
//! Retained-mode widgets for the colony screens.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UI PIPELINE                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  InputEvent → ComponentTree → update(dt) → RenderList     │
//! │      ↓              ↓                          ↓          │
//! │  topmost first   arena-owned             z-ordered draw   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Children live in the tree's arena and are addressed by
//! [`Handle`](hearth_core::Handle). Clearing the tree drops every child and
//! invalidates every handle at once.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use error::{UiError, UiResult};
pub use input::{InputEvent, Key, Modifiers, MouseButton};
pub use layout::Rect;
pub use render::{RenderCommand, RenderList};
pub use style::Color;
pub use widget::{Button, Component, ComponentTree, Label, Panel, ProgressBar, MAX_CHILDREN};
