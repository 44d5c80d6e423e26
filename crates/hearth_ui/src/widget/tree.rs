//! Arena-backed component tree with handle-addressed children.

#![allow(unsafe_code)]

use std::any::TypeId;
use std::fmt;
use std::ptr::NonNull;

use hearth_core::{Arena, Handle};

use super::Component;
use crate::error::{UiError, UiResult};
use crate::input::InputEvent;
use crate::render::RenderList;

/// Maximum children per tree. Index `0xFFFF` is never issued, so no child
/// handle can collide with [`Handle::INVALID`].
pub const MAX_CHILDREN: usize = u16::MAX as usize;

/// A child stored in the tree's arena.
struct Child {
    /// Points into the tree's arena; valid until `clear` or drop.
    ptr: NonNull<dyn Component>,
    /// Concrete type, for checked downcasts.
    type_id: TypeId,
}

/// A node that owns its children's storage and drives their frame.
///
/// Children are moved into a fixed-capacity [`Arena`] and never move again.
/// They are addressed by [`Handle`]s whose index is the insertion position
/// and whose generation is the tree's single shared generation: there is no
/// per-child free, and [`clear`](Self::clear) invalidates every handle at once.
///
/// Each frame the owner calls [`handle_input`](Self::handle_input),
/// [`update`](Self::update), then [`render`](Self::render). Rendering visits
/// children by ascending [`Component::z_index`], ties in insertion order.
/// The order is recomputed only after the tree was marked dirty.
///
/// A tree is itself a [`Component`], so trees nest.
///
/// # Example
///
/// ```rust
/// use hearth_ui::{ComponentTree, Label, RenderList};
///
/// let mut tree = ComponentTree::new(4096);
/// let handle = tree.add_child(Label::new("Colonists: 3", 8.0, 8.0));
///
/// tree.get_child_mut::<Label>(handle).unwrap().set_text("Colonists: 4");
///
/// let mut out = RenderList::new();
/// tree.render(&mut out);
/// assert_eq!(out.texts().collect::<Vec<_>>(), vec!["Colonists: 4"]);
/// ```
pub struct ComponentTree {
    /// Storage for every child.
    arena: Arena,
    /// Children in insertion order; a handle's index points here.
    children: Vec<Child>,
    /// Child indices in render order.
    draw_order: Vec<u16>,
    /// Generation shared by every handle this tree has issued since the last clear.
    generation: u16,
    /// Set when `draw_order` may no longer be sorted.
    sort_dirty: bool,
    /// This tree's own stacking order when nested.
    z_index: f32,
}

impl ComponentTree {
    /// Creates an empty tree whose arena holds `arena_bytes` bytes.
    #[must_use]
    pub fn new(arena_bytes: usize) -> Self {
        Self::with_z_index(arena_bytes, 0.0)
    }

    /// Creates an empty tree with its own stacking order, for nesting.
    #[must_use]
    pub fn with_z_index(arena_bytes: usize, z_index: f32) -> Self {
        Self {
            arena: Arena::new(arena_bytes),
            children: Vec::new(),
            draw_order: Vec::new(),
            generation: 0,
            sort_dirty: false,
            z_index,
        }
    }

    /// Moves `value` into the tree and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena is full or the tree already holds
    /// [`MAX_CHILDREN`] children.
    pub fn add_child<T: Component>(&mut self, value: T) -> Handle {
        match self.try_add_child(value) {
            Ok(handle) => handle,
            Err(err) => {
                tracing::error!(%err, "component tree capacity violated");
                panic!("{err}");
            }
        }
    }

    /// Moves `value` into the tree, reporting capacity problems as errors.
    ///
    /// # Errors
    ///
    /// [`UiError::TooManyChildren`] at the index limit, [`UiError::Core`] if
    /// the arena cannot fit `T`. The tree is unchanged on error.
    pub fn try_add_child<T: Component>(&mut self, value: T) -> UiResult<Handle> {
        if self.children.len() >= MAX_CHILDREN {
            return Err(UiError::TooManyChildren {
                limit: MAX_CHILDREN,
            });
        }

        let index = self.children.len() as u16;
        let child: &mut T = self.arena.try_alloc(value)?;
        let ptr = NonNull::from(child as &mut dyn Component);

        self.children.push(Child {
            ptr,
            type_id: TypeId::of::<T>(),
        });
        self.draw_order.push(index);
        self.sort_dirty = true;

        tracing::trace!(
            index,
            generation = self.generation,
            type_name = std::any::type_name::<T>(),
            "component added"
        );
        Ok(Handle::new(index, self.generation))
    }

    /// Returns the child behind `handle` if it is live and a `T`.
    ///
    /// Stale handles, out-of-range indices and wrong types all give `None`.
    #[must_use]
    pub fn get_child<T: Component>(&self, handle: Handle) -> Option<&T> {
        let child = self.resolve(handle)?;
        if child.type_id != TypeId::of::<T>() {
            return None;
        }
        // SAFETY: the type id matches, and the object lives in `self.arena`,
        // which is only cleared or dropped through `&mut self`.
        Some(unsafe { child.ptr.cast::<T>().as_ref() })
    }

    /// Mutable form of [`get_child`](Self::get_child).
    #[must_use]
    pub fn get_child_mut<T: Component>(&mut self, handle: Handle) -> Option<&mut T> {
        let child = self.resolve(handle)?;
        if child.type_id != TypeId::of::<T>() {
            return None;
        }
        let mut ptr = child.ptr.cast::<T>();
        // SAFETY: as in `get_child`; `&mut self` makes the access exclusive.
        Some(unsafe { ptr.as_mut() })
    }

    /// Offers `event` to the children, topmost first.
    ///
    /// Stops at the first child that consumes it. Returns whether any did.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.ensure_sorted();
        for &index in self.draw_order.iter().rev() {
            let mut ptr = self.children[usize::from(index)].ptr;
            // SAFETY: live arena object; `&mut self` makes the access exclusive.
            if unsafe { ptr.as_mut() }.handle_input(event) {
                return true;
            }
        }
        false
    }

    /// Advances every child by `dt` seconds, in insertion order.
    pub fn update(&mut self, dt: f32) {
        for child in &self.children {
            let mut ptr = child.ptr;
            // SAFETY: live arena object; `&mut self` makes the access exclusive.
            unsafe { ptr.as_mut() }.update(dt);
        }
    }

    /// Records every child's draw commands in ascending z order.
    pub fn render(&mut self, out: &mut RenderList) {
        self.ensure_sorted();
        for &index in &self.draw_order {
            let mut ptr = self.children[usize::from(index)].ptr;
            // SAFETY: live arena object; `&mut self` makes the access exclusive.
            unsafe { ptr.as_mut() }.render(out);
        }
    }

    /// Flags the draw order for recomputation before the next ordered pass.
    ///
    /// Call after changing a child's z index.
    pub fn mark_sort_dirty(&mut self) {
        self.sort_dirty = true;
    }

    /// Returns true if the next ordered pass will sort.
    #[must_use]
    pub const fn is_sort_dirty(&self) -> bool {
        self.sort_dirty
    }

    /// Drops every child and invalidates every handle issued so far.
    ///
    /// The shared generation skips `u16::MAX` and wraps to 0 after 65535
    /// clears; a handle kept across that many rebuilds could alias a new
    /// child. Handles are not meant to be held across even one.
    pub fn clear(&mut self) {
        let dropped = self.children.len();
        self.children.clear();
        self.draw_order.clear();
        self.arena.clear();
        self.generation = match self.generation.wrapping_add(1) {
            u16::MAX => 0,
            next => next,
        };
        self.sort_dirty = false;
        tracing::debug!(dropped, generation = self.generation, "component tree cleared");
    }

    /// Generation stamped on handles issued now.
    #[must_use]
    pub const fn generation(&self) -> u16 {
        self.generation
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the tree has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Bytes of arena storage in use.
    #[must_use]
    pub const fn arena_used(&self) -> usize {
        self.arena.used()
    }

    /// Handles of every child, in insertion order.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        (0..self.children.len()).map(move |index| Handle::new(index as u16, self.generation))
    }

    fn resolve(&self, handle: Handle) -> Option<&Child> {
        if !handle.is_valid() || handle.generation() != self.generation {
            return None;
        }
        self.children.get(usize::from(handle.index()))
    }

    /// Stable-sorts the draw order by z if the tree is dirty.
    fn ensure_sorted(&mut self) {
        if !self.sort_dirty {
            return;
        }

        let children = &self.children;
        // SAFETY: live arena objects, read only.
        // `+ 0.0` folds -0.0 into 0.0 so signed zeros tie.
        let z = |index: u16| unsafe { children[usize::from(index)].ptr.as_ref() }.z_index() + 0.0;
        self.draw_order
            .sort_by(|&a, &b| z(a).total_cmp(&z(b)).then_with(|| a.cmp(&b)));
        self.sort_dirty = false;

        tracing::trace!(children = self.children.len(), "component tree sorted");
    }
}

impl Component for ComponentTree {
    fn z_index(&self) -> f32 {
        self.z_index
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        ComponentTree::handle_input(self, event)
    }

    fn update(&mut self, dt: f32) {
        ComponentTree::update(self, dt);
    }

    fn render(&mut self, out: &mut RenderList) {
        ComponentTree::render(self, out);
    }
}

impl fmt::Debug for ComponentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentTree")
            .field("children", &self.children.len())
            .field("generation", &self.generation)
            .field("sort_dirty", &self.sort_dirty)
            .field("arena", &self.arena)
            .finish()
    }
}
