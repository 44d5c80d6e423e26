//! # HEARTH
//!
//! The umbrella crate: re-exports the subsystems and drives them per frame.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         HEARTH ENGINE                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌────────────────┐   ┌────────────────┐   ┌──────────────┐  │
//! │  │  hearth_core   │──>│   hearth_ui    │──>│   hearth_    │  │
//! │  │                │   │                │   │   rendering  │  │
//! │  │  • Handle      │   │  • Component   │   │  • Scene     │  │
//! │  │  • TypedPool   │   │  • Tree        │   │    Graph     │  │
//! │  │  • Arena       │   │  • RenderList  │   │  • Textures  │  │
//! │  └────────────────┘   └────────────────┘   └──────────────┘  │
//! │            └──────────────────┬──────────────────┘           │
//! │                          FrameDriver                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: TOML sandbox settings
//! - `frame`: input, update and render orchestration
//! - `demo`: the sandbox's sample screen

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod demo;
pub mod frame;

pub use hearth_core as core;
pub use hearth_rendering as rendering;
pub use hearth_ui as ui;

pub use config::{ConfigError, ConfigResult, SandboxConfig};
pub use frame::{FrameDriver, FrameStats, MAX_FRAME_DT};
