//! Flat, index-addressed scene graph.

use std::mem;

use hearth_ui::{Color, Rect, RenderList};

use super::node::{Node, NO_PARENT};
use super::Shape;
use crate::error::{SceneError, SceneResult};

/// A forest of shapes stored in one vector and addressed by `u32` index.
///
/// Nodes are created detached, then linked with
/// [`add_child`](Self::add_child). Every node without a parent is a root.
/// [`render_all`](Self::render_all) and [`update_all`](Self::update_all)
/// visit active roots in index order and descend depth-first. A hidden node
/// hides its whole subtree from both passes.
///
/// Siblings are drawn by ascending z. The sort is lazy: a parent is flagged
/// when a child's z changes or a child lands out of order, and sorted the
/// next time it is visited.
///
/// Freed slots go on a LIFO free list; the next `create` reuses the most
/// recently freed index. Indices are not generational: an index held past
/// [`destroy_layer`](Self::destroy_layer) may name an unrelated node later.
///
/// Passing an out-of-range or freed index to a method that takes one is a
/// programmer error and panics. [`try_add_child`](Self::try_add_child) and
/// [`try_remove_child`](Self::try_remove_child) report the same checks as
/// [`SceneError`]s.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    free_list: Vec<u32>,
}

impl SceneGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free_list: Vec::new(),
        }
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Wraps `shape` in a visible, active root node at z 0.
    ///
    /// # Panics
    ///
    /// Panics if the graph already holds `u32::MAX` slots.
    pub fn create(&mut self, shape: Shape) -> u32 {
        if let Some(index) = self.free_list.pop() {
            tracing::trace!(index, kind = shape.kind(), "scene node reused");
            self.nodes[index as usize] = Node::new(shape);
            return index;
        }

        let index = match u32::try_from(self.nodes.len()) {
            Ok(index) if index != NO_PARENT => index,
            _ => {
                tracing::error!(len = self.nodes.len(), "scene graph index space exhausted");
                panic!("scene graph index space exhausted");
            }
        };
        tracing::trace!(index, kind = shape.kind(), "scene node created");
        self.nodes.push(Node::new(shape));
        index
    }

    /// Creates a filled rectangle.
    pub fn create_rect(&mut self, bounds: Rect, color: Color) -> u32 {
        self.create(Shape::Rect { bounds, color })
    }

    /// Creates a filled circle.
    pub fn create_circle(&mut self, center: (f32, f32), radius: f32, color: Color) -> u32 {
        self.create(Shape::Circle {
            center,
            radius,
            color,
        })
    }

    /// Creates a line segment.
    pub fn create_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) -> u32 {
        self.create(Shape::Line {
            from,
            to,
            width,
            color,
        })
    }

    /// Creates a text run.
    pub fn create_text(
        &mut self,
        text: impl Into<String>,
        position: (f32, f32),
        font_size: f32,
        color: Color,
    ) -> u32 {
        self.create(Shape::Text {
            text: text.into(),
            position,
            font_size,
            color,
        })
    }

    /// Creates a spinner at angle 0 turning `speed` radians per second.
    pub fn create_spinner(&mut self, center: (f32, f32), radius: f32, speed: f32, color: Color) -> u32 {
        self.create(Shape::Spinner {
            center,
            radius,
            angle: 0.0,
            speed,
            color,
        })
    }

    /// Creates an empty grouping node.
    pub fn create_group(&mut self) -> u32 {
        self.create(Shape::Group)
    }

    // =========================================================================
    // Linking
    // =========================================================================

    /// Attaches `child` as the last child of `parent`.
    ///
    /// A child already attached elsewhere is moved.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index, `parent == child`, or when `child` is an
    /// ancestor of `parent`.
    pub fn add_child(&mut self, parent: u32, child: u32) {
        if let Err(err) = self.try_add_child(parent, child) {
            tracing::error!(%err, "scene graph link rejected");
            panic!("{err}");
        }
    }

    /// Checked form of [`add_child`](Self::add_child). The graph is unchanged
    /// on error.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidIndex`], [`SceneError::SelfParent`] or
    /// [`SceneError::Cycle`].
    pub fn try_add_child(&mut self, parent: u32, child: u32) -> SceneResult<()> {
        self.check(parent)?;
        self.check(child)?;
        if parent == child {
            return Err(SceneError::SelfParent { index: parent });
        }
        if self.is_ancestor(child, parent) {
            return Err(SceneError::Cycle { parent, child });
        }

        let previous = self.nodes[child as usize].parent;
        if previous != NO_PARENT {
            self.detach(previous, child);
        }

        let z = self.nodes[child as usize].z_index;
        let out_of_order = self.nodes[parent as usize]
            .children
            .last()
            .is_some_and(|&last| z < self.nodes[last as usize].z_index);

        let parent_node = &mut self.nodes[parent as usize];
        parent_node.children.push(child);
        if out_of_order {
            parent_node.children_need_sorting = true;
        }
        self.nodes[child as usize].parent = parent;
        Ok(())
    }

    /// Detaches `child` from `parent`, making it a root.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index or when `child` is not attached to `parent`.
    pub fn remove_child(&mut self, parent: u32, child: u32) {
        if let Err(err) = self.try_remove_child(parent, child) {
            tracing::error!(%err, "scene graph unlink rejected");
            panic!("{err}");
        }
    }

    /// Checked form of [`remove_child`](Self::remove_child).
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidIndex`] or [`SceneError::NotAChild`].
    pub fn try_remove_child(&mut self, parent: u32, child: u32) -> SceneResult<()> {
        self.check(parent)?;
        self.check(child)?;
        if self.nodes[child as usize].parent != parent {
            return Err(SceneError::NotAChild { parent, child });
        }
        self.detach(parent, child);
        Ok(())
    }

    /// Returns true if `ancestor` lies on `node`'s parent chain.
    ///
    /// A node is not its own ancestor.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: u32, node: u32) -> bool {
        self.live(ancestor);
        let mut current = self.live(node).parent;
        while current != NO_PARENT {
            if current == ancestor {
                return true;
            }
            current = self.nodes[current as usize].parent;
        }
        false
    }

    // =========================================================================
    // Node state
    // =========================================================================

    /// Sets a node's z. The parent is flagged for sorting only if z changed.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index.
    #[allow(clippy::float_cmp)]
    pub fn set_z_index(&mut self, index: u32, z: f32) {
        // -0.0 becomes 0.0 so sorting treats the two as a tie.
        let z = z + 0.0;
        let node = self.live_mut(index);
        if node.z_index == z {
            return;
        }
        node.z_index = z;
        let parent = node.parent;
        if parent != NO_PARENT {
            self.nodes[parent as usize].children_need_sorting = true;
        }
    }

    /// Shows or hides a node and its subtree.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index.
    pub fn set_visible(&mut self, index: u32, visible: bool) {
        self.live_mut(index).visible = visible;
    }

    /// Whether the node is drawn. Says nothing about its ancestors.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index.
    #[must_use]
    pub fn is_visible(&self, index: u32) -> bool {
        self.live(index).visible
    }

    /// The node's z.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index.
    #[must_use]
    pub fn z_index(&self, index: u32) -> f32 {
        self.live(index).z_index
    }

    /// The node's parent, `None` for roots.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index.
    #[must_use]
    pub fn parent(&self, index: u32) -> Option<u32> {
        self.live(index).parent()
    }

    /// The node's children in their current order.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index.
    #[must_use]
    pub fn children(&self, index: u32) -> &[u32] {
        &self.live(index).children
    }

    /// The node's payload.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index.
    #[must_use]
    pub fn shape(&self, index: u32) -> &Shape {
        &self.live(index).shape
    }

    /// Mutable payload.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index.
    pub fn shape_mut(&mut self, index: u32) -> &mut Shape {
        &mut self.live_mut(index).shape
    }

    /// Raw slot access, including freed slots. `None` only when out of range.
    #[must_use]
    pub fn node(&self, index: u32) -> Option<&Node> {
        self.nodes.get(index as usize)
    }

    /// Returns true if `index` names a live node.
    #[must_use]
    pub fn is_active(&self, index: u32) -> bool {
        self.node(index).is_some_and(Node::is_active)
    }

    /// Live nodes without a parent, in index order.
    pub fn roots(&self) -> impl Iterator<Item = u32> + '_ {
        (0u32..)
            .zip(&self.nodes)
            .filter(|(_, node)| node.active && node.parent == NO_PARENT)
            .map(|(index, _)| index)
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Sorts a node's children by ascending z if flagged. Ties keep their
    /// current relative order.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index.
    pub fn sort_children(&mut self, index: u32) {
        if !self.live(index).children_need_sorting {
            return;
        }

        let mut children = mem::take(&mut self.nodes[index as usize].children);
        children.sort_by(|&a, &b| {
            self.nodes[a as usize]
                .z_index
                .total_cmp(&self.nodes[b as usize].z_index)
        });
        tracing::trace!(index, children = children.len(), "scene children sorted");

        let node = &mut self.nodes[index as usize];
        node.children = children;
        node.children_need_sorting = false;
    }

    /// Records the draw commands of every visible node.
    pub fn render_all(&mut self, out: &mut RenderList) {
        for root in 0..self.slot_count() {
            if self.is_root(root) {
                self.render_node(root, out);
            }
        }
    }

    /// Advances every visible node by `dt` seconds.
    pub fn update_all(&mut self, dt: f32) {
        for root in 0..self.slot_count() {
            if self.is_root(root) {
                self.update_node(root, dt);
            }
        }
    }

    fn render_node(&mut self, index: u32, out: &mut RenderList) {
        self.walk_visible(index, |shape| shape.render(out));
    }

    fn update_node(&mut self, index: u32, dt: f32) {
        self.walk_visible(index, |shape| shape.update(dt));
    }

    /// Depth-first pre-order over the visible part of `root`'s subtree.
    /// Children are sorted before they are visited. A hidden node cuts off
    /// its whole subtree.
    fn walk_visible(&mut self, root: u32, mut visit: impl FnMut(&mut Shape)) {
        if !self.nodes[root as usize].visible {
            return;
        }
        self.sort_children(root);
        visit(&mut self.nodes[root as usize].shape);

        // (node, position of the next child to visit)
        let mut stack: Vec<(u32, usize)> = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (index, next) = *frame;
            let Some(&child) = self.nodes[index as usize].children.get(next) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if !self.nodes[child as usize].visible {
                continue;
            }
            self.sort_children(child);
            visit(&mut self.nodes[child as usize].shape);
            stack.push((child, 0));
        }
    }

    // =========================================================================
    // Destruction
    // =========================================================================

    /// Frees `index` and its whole subtree. Returns the number of nodes freed.
    ///
    /// Descendants are freed first and `index` last, so the next `create`
    /// reuses `index`.
    ///
    /// # Panics
    ///
    /// Panics on an invalid index.
    pub fn destroy_layer(&mut self, index: u32) -> usize {
        let parent = self.live(index).parent;
        if parent != NO_PARENT {
            self.detach(parent, index);
        }

        let mut pending = self.nodes[index as usize].children.clone();
        let mut freed = 0;
        while let Some(node) = pending.pop() {
            pending.extend_from_slice(&self.nodes[node as usize].children);
            self.free(node);
            freed += 1;
        }
        self.free(index);
        freed += 1;

        tracing::debug!(index, freed, "scene layer destroyed");
        freed
    }

    /// Removes every node and forgets the free list.
    pub fn clear(&mut self) {
        tracing::debug!(nodes = self.nodes.len(), "scene graph cleared");
        self.nodes.clear();
        self.free_list.clear();
    }

    /// Slots in the graph, live or freed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Live nodes.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Freed slots awaiting reuse.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn check(&self, index: u32) -> SceneResult<()> {
        match self.nodes.get(index as usize) {
            Some(node) if node.active => Ok(()),
            _ => Err(SceneError::InvalidIndex {
                index,
                len: self.nodes.len(),
            }),
        }
    }

    fn live(&self, index: u32) -> &Node {
        if let Err(err) = self.check(index) {
            tracing::error!(%err, "scene graph access rejected");
            panic!("{err}");
        }
        &self.nodes[index as usize]
    }

    fn live_mut(&mut self, index: u32) -> &mut Node {
        if let Err(err) = self.check(index) {
            tracing::error!(%err, "scene graph access rejected");
            panic!("{err}");
        }
        &mut self.nodes[index as usize]
    }

    fn is_root(&self, index: u32) -> bool {
        let node = &self.nodes[index as usize];
        node.active && node.parent == NO_PARENT
    }

    /// Slot count as a node index bound. `create` keeps it below `u32::MAX`.
    fn slot_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    /// Unlinks a known child. Removal keeps the remaining siblings sorted.
    fn detach(&mut self, parent: u32, child: u32) {
        let siblings = &mut self.nodes[parent as usize].children;
        if let Some(position) = siblings.iter().position(|&c| c == child) {
            siblings.remove(position);
        }
        self.nodes[child as usize].parent = NO_PARENT;
    }

    fn free(&mut self, index: u32) {
        self.nodes[index as usize].release();
        self.free_list.push(index);
    }
}
