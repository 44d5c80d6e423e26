//! # Memory Configuration
//!
//! Sizes for every fixed-capacity structure, read once at startup.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::memory::MAX_POOL_SLOTS;

/// Up-front sizing for arenas, pools and scene storage.
///
/// Arenas never grow, so an undersized `ui_arena_bytes` is a fatal error at
/// the first overflowing `add_child`, not a slowdown.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryConfig {
    /// Byte capacity of each UI component tree arena.
    pub ui_arena_bytes: usize,
    /// Scene nodes to reserve before the node array reallocates.
    pub scene_node_reserve: usize,
    /// Texture slots to reserve in the renderer's registry.
    pub texture_reserve: usize,
}

impl MemoryConfig {
    /// Default UI arena size: 64KB.
    pub const DEFAULT_UI_ARENA_BYTES: usize = 64 * 1024;

    /// Default scene node reserve.
    pub const DEFAULT_SCENE_NODE_RESERVE: usize = 256;

    /// Default texture reserve.
    pub const DEFAULT_TEXTURE_RESERVE: usize = 64;

    /// Parses a config from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] on malformed TOML or invalid values.
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| CoreError::InvalidConfig(format!("failed to parse memory config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ui_arena_bytes == 0 {
            return Err(CoreError::InvalidConfig(
                "ui_arena_bytes must be greater than zero".into(),
            ));
        }
        if self.texture_reserve > MAX_POOL_SLOTS {
            return Err(CoreError::InvalidConfig(format!(
                "texture_reserve {} exceeds the {MAX_POOL_SLOTS} slot handle space",
                self.texture_reserve
            )));
        }
        Ok(())
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ui_arena_bytes: Self::DEFAULT_UI_ARENA_BYTES,
            scene_node_reserve: Self::DEFAULT_SCENE_NODE_RESERVE,
            texture_reserve: Self::DEFAULT_TEXTURE_RESERVE,
        }
    }
}
