//! Demo colony screen used by the sandbox binary and the end-to-end tests.

use hearth_core::Handle;
use hearth_ui::{Button, Color, ComponentTree, Label, Panel, ProgressBar, Rect};

use crate::frame::FrameDriver;

/// Where the demo's interactive parts live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoHandles {
    /// "Build" button in the HUD.
    pub build_button: Handle,
    /// Construction progress bar.
    pub progress: Handle,
    /// Status line text.
    pub status: Handle,
    /// Nested tooltip tree.
    pub tooltip: Handle,
    /// Scene root holding the whole world layer.
    pub world_root: u32,
    /// Spinner marking the construction site.
    pub site_marker: u32,
    /// Ground texture.
    pub ground_texture: Handle,
}

/// Screen bounds of the demo's build button.
pub const BUILD_BUTTON: Rect = Rect::new(16.0, 16.0, 96.0, 28.0);

/// Populates an empty driver with a HUD and a small world.
///
/// # Panics
///
/// Panics if the configured UI arena cannot hold the HUD.
pub fn build_demo(driver: &mut FrameDriver) -> DemoHandles {
    let ui = driver.ui_mut();
    ui.add_child(Panel::new(Rect::new(0.0, 0.0, 320.0, 96.0)).with_border(Color::EMBER, 1.0));
    let build_button = ui.add_child(Button::new(BUILD_BUTTON, "Build").with_z(1.0));
    let progress = ui.add_child(ProgressBar::new(Rect::new(128.0, 24.0, 176.0, 12.0), 0.25).with_z(1.0));
    let status = ui.add_child(Label::new("Idle", 16.0, 72.0).with_z(1.0));

    let mut tooltip = ComponentTree::with_z_index(1024, 10.0);
    tooltip.add_child(Panel::new(Rect::new(16.0, 48.0, 120.0, 16.0)).with_color(Color::BLACK.with_alpha(0.8)));
    tooltip.add_child(Label::new("Click to build", 20.0, 60.0).with_z(1.0));
    let tooltip = ui.add_child(tooltip);

    let scene = driver.scene_mut();
    let world_root = scene.create_group();
    let ground = scene.create_rect(Rect::new(0.0, 96.0, 320.0, 144.0), Color::SOIL);
    scene.set_z_index(ground, -1.0);
    let site = scene.create_group();
    let outline = scene.create_circle((160.0, 160.0), 24.0, Color::MOSS.with_alpha(0.4));
    let site_marker = scene.create_spinner((160.0, 160.0), 20.0, 2.0, Color::EMBER);
    let caption = scene.create_text("Site A", (140.0, 196.0), 12.0, Color::PARCHMENT);

    scene.add_child(world_root, site);
    scene.add_child(world_root, ground);
    scene.add_child(site, outline);
    scene.add_child(site, site_marker);
    scene.add_child(site, caption);

    let ground_texture = driver.textures_mut().load("ground/soil", 256, 256);

    tracing::info!(
        widgets = driver.ui().len(),
        nodes = driver.scene().active_count(),
        "demo built"
    );

    DemoHandles {
        build_button,
        progress,
        status,
        tooltip,
        world_root,
        site_marker,
        ground_texture,
    }
}

/// Copies widget state into the status line. Returns the click count, or
/// `None` if `handles` did not come from this driver's [`build_demo`].
pub fn refresh_status(driver: &mut FrameDriver, handles: &DemoHandles) -> Option<u32> {
    let ui = driver.ui_mut();
    let clicks = ui.get_child::<Button>(handles.build_button)?.clicks();
    let done = ui.get_child::<ProgressBar>(handles.progress)?.is_complete();

    let text = match (clicks, done) {
        (0, _) => "Idle".to_owned(),
        (n, false) => format!("Building ({n} queued)"),
        (n, true) => format!("Built {n}"),
    };
    ui.get_child_mut::<Label>(handles.status)?.set_text(text);
    Some(clicks)
}
