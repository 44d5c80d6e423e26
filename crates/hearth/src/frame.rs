//! # Frame Driver
//!
//! One frame of the sandbox:
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │ 1. INPUT   events → UI tree (topmost first, stop on use)   │
//! │ 2. UPDATE  UI tree, then scene graph (visible only)        │
//! │ 3. RENDER  scene graph first, UI tree on top               │
//! │ 4. STATS   frame number, events consumed, command count    │
//! └───────────────────────────────────────────────────────────┘
//! ```

use hearth_rendering::{SceneGraph, TextureRegistry};
use hearth_ui::{ComponentTree, InputEvent, RenderList};

use crate::config::SandboxConfig;

/// Largest timestep a single frame applies. Longer stalls are clamped.
pub const MAX_FRAME_DT: f32 = 0.1;

/// What one [`FrameDriver::run_frame`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Zero-based frame number.
    pub frame: u64,
    /// Events offered to the UI.
    pub events_received: usize,
    /// Events a UI component consumed.
    pub events_consumed: usize,
    /// Render commands emitted.
    pub commands: usize,
}

/// Owns the UI tree, the world scene and the shared command list.
#[derive(Debug)]
pub struct FrameDriver {
    ui: ComponentTree,
    scene: SceneGraph,
    textures: TextureRegistry,
    commands: RenderList,
    frame: u64,
    last_stats: FrameStats,
}

impl FrameDriver {
    /// Sizes every structure from `config.memory`.
    #[must_use]
    pub fn new(config: &SandboxConfig) -> Self {
        let memory = &config.memory;
        tracing::debug!(
            ui_arena_bytes = memory.ui_arena_bytes,
            scene_node_reserve = memory.scene_node_reserve,
            texture_reserve = memory.texture_reserve,
            "frame driver created"
        );
        Self {
            ui: ComponentTree::new(memory.ui_arena_bytes),
            scene: SceneGraph::with_capacity(memory.scene_node_reserve),
            textures: TextureRegistry::with_capacity(memory.texture_reserve),
            commands: RenderList::new(),
            frame: 0,
            last_stats: FrameStats::default(),
        }
    }

    /// Runs input, update and render for one frame and returns the commands.
    ///
    /// Only the UI receives input. `dt` is clamped to [`MAX_FRAME_DT`].
    pub fn run_frame(&mut self, events: &[InputEvent], dt: f32) -> &RenderList {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        let ui = &mut self.ui;
        let events_consumed = events.iter().filter(|event| ui.handle_input(event)).count();

        self.ui.update(dt);
        self.scene.update_all(dt);

        self.commands.begin_frame();
        self.scene.render_all(&mut self.commands);
        self.ui.render(&mut self.commands);

        self.last_stats = FrameStats {
            frame: self.frame,
            events_received: events.len(),
            events_consumed,
            commands: self.commands.len(),
        };
        tracing::trace!(
            frame = self.frame,
            events_consumed,
            commands = self.last_stats.commands,
            "frame complete"
        );
        self.frame += 1;

        &self.commands
    }

    /// Stats of the most recent frame.
    #[must_use]
    pub const fn stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Frames run so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Commands of the most recent frame.
    #[must_use]
    pub const fn commands(&self) -> &RenderList {
        &self.commands
    }

    /// The UI tree.
    #[must_use]
    pub const fn ui(&self) -> &ComponentTree {
        &self.ui
    }

    /// The UI tree, for building and mutating widgets.
    pub fn ui_mut(&mut self) -> &mut ComponentTree {
        &mut self.ui
    }

    /// The world scene.
    #[must_use]
    pub const fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// The world scene, for building and mutating nodes.
    pub fn scene_mut(&mut self) -> &mut SceneGraph {
        &mut self.scene
    }

    /// Loaded textures.
    #[must_use]
    pub const fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// Loaded textures, for loading and releasing.
    pub fn textures_mut(&mut self) -> &mut TextureRegistry {
        &mut self.textures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_ui::{Button, Color, Label, Rect};

    fn driver() -> FrameDriver {
        FrameDriver::new(&SandboxConfig::default())
    }

    #[test]
    fn test_scene_renders_under_ui() {
        let mut driver = driver();
        driver.ui_mut().add_child(Label::new("ui", 0.0, 0.0));
        driver
            .scene_mut()
            .create_text("world", (0.0, 0.0), 12.0, Color::WHITE);

        let texts: Vec<&str> = driver.run_frame(&[], 0.016).texts().collect();
        assert_eq!(texts, vec!["world", "ui"]);
    }

    #[test]
    fn test_stats_count_consumed_events() {
        let mut driver = driver();
        driver
            .ui_mut()
            .add_child(Button::new(Rect::new(0.0, 0.0, 10.0, 10.0), "ok"));

        let events = [
            InputEvent::MouseMove { x: 1.0, y: 1.0 },
            InputEvent::click(1.0, 1.0),
            InputEvent::release(1.0, 1.0),
            InputEvent::click(50.0, 50.0),
        ];
        driver.run_frame(&events, 0.016);

        let stats = driver.stats();
        assert_eq!(stats.frame, 0);
        assert_eq!(stats.events_received, 4);
        assert_eq!(stats.events_consumed, 2);
        assert_eq!(stats.commands, driver.commands().len());
        assert_eq!(driver.frame_count(), 1);
    }

    #[test]
    fn test_commands_reset_each_frame() {
        let mut driver = driver();
        driver.ui_mut().add_child(Label::new("once", 0.0, 0.0));
        let first = driver.run_frame(&[], 0.016).len();
        let second = driver.run_frame(&[], 0.016).len();
        assert_eq!(first, second);
        assert_eq!(driver.stats().frame, 1);
    }
}
