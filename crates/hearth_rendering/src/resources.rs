//! Renderer resource tables.
//!
//! Textures are pooled by [`TypedPool`], so a released texture's handle goes
//! stale instead of silently naming whatever loads next.

use std::collections::HashMap;

use hearth_core::{CoreResult, Handle, TypedPool};

/// Metadata for a loaded texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDesc {
    /// Unique name the texture was loaded under.
    pub name: String,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
}

impl TextureDesc {
    /// Size of an RGBA8 upload.
    #[must_use]
    pub const fn byte_size(&self) -> u64 {
        self.width as u64 * self.height as u64 * 4
    }
}

/// Name-deduplicated texture table.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    pool: TypedPool<TextureDesc>,
    by_name: HashMap<String, Handle>,
}

impl TextureRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` textures.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: TypedPool::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
        }
    }

    /// Loads a texture, or returns the handle of the one already loaded
    /// under `name`. Dimensions of an existing entry are not updated.
    ///
    /// # Panics
    ///
    /// Panics when the pool's index space is exhausted.
    pub fn load(&mut self, name: &str, width: u32, height: u32) -> Handle {
        if let Some(&handle) = self.by_name.get(name) {
            return handle;
        }
        let handle = self.pool.allocate(TextureDesc {
            name: name.to_owned(),
            width,
            height,
        });
        self.by_name.insert(name.to_owned(), handle);
        tracing::debug!(name, width, height, %handle, "texture loaded");
        handle
    }

    /// Non-panicking form of [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// [`CoreError::PoolExhausted`](hearth_core::CoreError::PoolExhausted).
    pub fn try_load(&mut self, name: &str, width: u32, height: u32) -> CoreResult<Handle> {
        if let Some(&handle) = self.by_name.get(name) {
            return Ok(handle);
        }
        let handle = self.pool.try_allocate(TextureDesc {
            name: name.to_owned(),
            width,
            height,
        })?;
        self.by_name.insert(name.to_owned(), handle);
        Ok(handle)
    }

    /// Texture behind `handle`, if still loaded.
    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&TextureDesc> {
        self.pool.get(handle)
    }

    /// Handle of the texture loaded under `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Handle> {
        self.by_name.get(name).copied()
    }

    /// Unloads a texture. Returns false for stale or unknown handles.
    pub fn release(&mut self, handle: Handle) -> bool {
        let Some(desc) = self.pool.get(handle) else {
            return false;
        };
        self.by_name.remove(&desc.name);
        tracing::debug!(%handle, "texture released");
        self.pool.free(handle)
    }

    /// Loaded textures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.active_count()
    }

    /// Returns true if nothing is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Total RGBA8 bytes of every loaded texture.
    #[must_use]
    pub fn resident_bytes(&self) -> u64 {
        self.pool.iter().map(|(_, desc)| desc.byte_size()).sum()
    }
}
