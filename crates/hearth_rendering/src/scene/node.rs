//! Scene node storage.

use super::Shape;

/// Parent sentinel for root nodes.
pub const NO_PARENT: u32 = u32::MAX;

/// One slot in a [`SceneGraph`](super::SceneGraph).
///
/// Freed slots stay in the graph as inactive `Group`s until reused.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) shape: Shape,
    pub(crate) children: Vec<u32>,
    pub(crate) z_index: f32,
    pub(crate) visible: bool,
    pub(crate) active: bool,
    pub(crate) children_need_sorting: bool,
    pub(crate) parent: u32,
}

impl Node {
    pub(crate) fn new(shape: Shape) -> Self {
        Self {
            shape,
            children: Vec::new(),
            z_index: 0.0,
            visible: true,
            active: true,
            children_need_sorting: false,
            parent: NO_PARENT,
        }
    }

    /// Resets the slot to the freed state, keeping the child vector's buffer.
    pub(crate) fn release(&mut self) {
        self.shape = Shape::Group;
        self.children.clear();
        self.z_index = 0.0;
        self.visible = true;
        self.active = false;
        self.children_need_sorting = false;
        self.parent = NO_PARENT;
    }

    /// Payload.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Child indices in the current draw order.
    #[must_use]
    pub fn children(&self) -> &[u32] {
        &self.children
    }

    /// Stacking order among siblings.
    #[must_use]
    pub const fn z_index(&self) -> f32 {
        self.z_index
    }

    /// Whether this node and its subtree are drawn and updated.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// False once the slot has been freed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the children must be re-sorted before the next ordered pass.
    #[must_use]
    pub const fn children_need_sorting(&self) -> bool {
        self.children_need_sorting
    }

    /// Parent index, `None` for roots.
    #[must_use]
    pub const fn parent(&self) -> Option<u32> {
        if self.parent == NO_PARENT {
            None
        } else {
            Some(self.parent)
        }
    }
}
