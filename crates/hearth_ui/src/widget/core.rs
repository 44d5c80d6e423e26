//! The component capability trait.

use crate::input::InputEvent;
use crate::render::RenderList;

/// Base trait for everything a [`ComponentTree`](super::ComponentTree) can own.
///
/// Every capability has a no-op default, so a component implements only
/// what it takes part in. A display-only label never sees input; a click
/// target never needs `update`.
///
/// Components are stored in a fixed arena and addressed by handle, so they
/// must be `'static`: no borrowed data that could dangle before the tree
/// drops them.
pub trait Component: 'static {
    /// Stacking order among siblings. Lower values draw first (underneath).
    ///
    /// Changing the value does not re-sort by itself; call
    /// [`ComponentTree::mark_sort_dirty`](super::ComponentTree::mark_sort_dirty).
    fn z_index(&self) -> f32 {
        0.0
    }

    /// Offers an input event. Returns true if the event was consumed.
    fn handle_input(&mut self, _event: &InputEvent) -> bool {
        false
    }

    /// Advances per-frame state by `dt` seconds.
    fn update(&mut self, _dt: f32) {}

    /// Records draw commands.
    ///
    /// Takes `&mut self` so containers can sort their children lazily.
    fn render(&mut self, _out: &mut RenderList) {}
}
