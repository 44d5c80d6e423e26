//! # Typed Pool
//!
//! Homogeneous slot array addressed by generational [`Handle`]s.

use crate::error::{CoreError, CoreResult};
use crate::handle::Handle;

/// Maximum number of slots a pool can ever create (16-bit index space).
pub const MAX_POOL_SLOTS: usize = 1 << 16;

/// Last generation a slot may carry. A slot that reaches it on free is retired.
const RETIRED_GENERATION: u16 = u16::MAX;

/// One entry of a [`TypedPool`].
#[derive(Debug)]
struct Slot<T> {
    /// Last value stored here. Left in place on free, replaced on reuse.
    value: T,
    /// Current generation; bumped exactly once per free.
    generation: u16,
    /// Whether a live handle refers to this slot.
    occupied: bool,
}

/// A pool of `T` values with O(1) allocate, free and lookup.
///
/// Freed indices are recycled LIFO: the most recently freed index is the
/// next one handed out. Every free bumps the slot's generation, so all
/// handles issued before the free stop resolving.
///
/// # Generation exhaustion
///
/// A slot whose generation reaches `u16::MAX` is retired instead of being
/// returned to the free list. A 16-bit generation therefore never wraps
/// around onto an old handle, and no live handle can equal
/// [`Handle::INVALID`].
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. Use one pool per thread.
///
/// # Example
///
/// ```rust
/// use hearth_core::TypedPool;
///
/// let mut pool: TypedPool<u32> = TypedPool::new();
/// let handle = pool.allocate(42);
/// assert_eq!(pool.get(handle), Some(&42));
///
/// pool.free(handle);
/// assert_eq!(pool.get(handle), None);
/// ```
#[derive(Debug)]
pub struct TypedPool<T> {
    /// Every slot ever created.
    slots: Vec<Slot<T>>,
    /// Reusable indices, used as a stack.
    free_list: Vec<u16>,
    /// Number of occupied slots.
    active: usize,
    /// Number of slots taken out of circulation.
    retired: usize,
}

impl<T> TypedPool<T> {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            active: 0,
            retired: 0,
        }
    }

    /// Creates an empty pool with room for `capacity` slots before the
    /// backing array reallocates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_POOL_SLOTS);
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::with_capacity(capacity),
            active: 0,
            retired: 0,
        }
    }

    /// Stores `value` in a slot and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if all 65536 indices are in use. Running out of handle space
    /// is a sizing bug, not a runtime condition.
    pub fn allocate(&mut self, value: T) -> Handle {
        match self.try_allocate(value) {
            Ok(handle) => handle,
            Err(err) => {
                tracing::error!(%err, "typed pool capacity violated");
                panic!("{err}");
            }
        }
    }

    /// Stores `value` in a slot, reporting exhaustion instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PoolExhausted`] when no index is left.
    pub fn try_allocate(&mut self, value: T) -> CoreResult<Handle> {
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[usize::from(index)];
            slot.value = value;
            slot.occupied = true;
            self.active += 1;
            return Ok(Handle::new(index, slot.generation));
        }

        if self.slots.len() >= MAX_POOL_SLOTS {
            return Err(CoreError::PoolExhausted {
                live: self.active,
                limit: MAX_POOL_SLOTS,
            });
        }

        let index = self.slots.len() as u16;
        self.slots.push(Slot {
            value,
            generation: 0,
            occupied: true,
        });
        self.active += 1;
        Ok(Handle::new(index, 0))
    }

    /// Releases the slot behind `handle`.
    ///
    /// Returns false and does nothing for the sentinel, out-of-range,
    /// stale, or already-freed handles, so double frees are harmless.
    pub fn free(&mut self, handle: Handle) -> bool {
        let Some(index) = self.resolve(handle) else {
            return false;
        };

        let slot = &mut self.slots[index];
        slot.occupied = false;
        slot.generation += 1;
        self.active -= 1;

        if slot.generation == RETIRED_GENERATION {
            self.retired += 1;
            tracing::warn!(index, "pool slot exhausted its generations and was retired");
        } else {
            self.free_list.push(handle.index());
        }
        true
    }

    /// Returns the value behind `handle`, if it is still live.
    #[inline]
    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.resolve(handle).map(|index| &self.slots[index].value)
    }

    /// Returns mutable access to the value behind `handle`, if it is still live.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.resolve(handle).map(|index| &mut self.slots[index].value)
    }

    /// Returns true if `handle` still resolves.
    #[inline]
    #[must_use]
    pub fn contains(&self, handle: Handle) -> bool {
        self.resolve(handle).is_some()
    }

    /// Total slots ever created, live or not.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// Live (allocated, not freed) slots.
    #[inline]
    #[must_use]
    pub const fn active_count(&self) -> usize {
        self.active
    }

    /// Indices waiting on the free list.
    #[inline]
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Slots permanently removed from circulation.
    #[inline]
    #[must_use]
    pub const fn retired_count(&self) -> usize {
        self.retired
    }

    /// Returns true if no slot is live.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Frees every live slot. All outstanding handles stop resolving.
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            if self.slots[index].occupied {
                let handle = Handle::new(index as u16, self.slots[index].generation);
                self.free(handle);
            }
        }
    }

    /// Iterates over live slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.occupied)
            .map(|(index, slot)| (Handle::new(index as u16, slot.generation), &slot.value))
    }

    /// Iterates mutably over live slots in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, slot)| slot.occupied)
            .map(|(index, slot)| (Handle::new(index as u16, slot.generation), &mut slot.value))
    }

    /// Maps a handle to a live slot index.
    #[inline]
    fn resolve(&self, handle: Handle) -> Option<usize> {
        if !handle.is_valid() {
            return None;
        }
        let index = usize::from(handle.index());
        let slot = self.slots.get(index)?;
        (slot.occupied && slot.generation == handle.generation()).then_some(index)
    }
}

impl<T: Default> TypedPool<T> {
    /// Allocates a slot holding `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`TypedPool::allocate`].
    pub fn allocate_default(&mut self) -> Handle {
        self.allocate(T::default())
    }
}

impl<T> Default for TypedPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_allocate_free() {
        let mut pool: TypedPool<u32> = TypedPool::new();

        let h1 = pool.allocate(42);
        assert_eq!(pool.get(h1), Some(&42));
        assert_eq!(pool.active_count(), 1);

        assert!(pool.free(h1));
        assert_eq!(pool.get(h1), None);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.count(), 1);
    }

    #[test]
    fn test_three_slots_free_middle_then_reuse() {
        let mut pool: TypedPool<i32> = TypedPool::new();
        let h0 = pool.allocate(0);
        let h1 = pool.allocate(1);
        let h2 = pool.allocate(2);

        pool.free(h1);
        let reused = pool.allocate(10);

        assert_eq!(reused.index(), 1);
        assert_eq!(reused.generation(), 1);
        assert_eq!(pool.get(h1), None);
        assert_eq!(pool.get(reused), Some(&10));
        assert_eq!(pool.get(h0), Some(&0));
        assert_eq!(pool.get(h2), Some(&2));
    }

    #[test]
    fn test_free_list_is_lifo() {
        let mut pool: TypedPool<u8> = TypedPool::new();
        let handles: Vec<Handle> = (0..5).map(|i| pool.allocate(i)).collect();

        pool.free(handles[1]);
        pool.free(handles[2]);
        pool.free(handles[3]);

        let first = pool.allocate(100);
        let second = pool.allocate(101);
        assert_eq!(first.index(), 3);
        assert_eq!(first.generation(), handles[3].generation() + 1);
        assert_eq!(second.index(), 2);
        assert_eq!(second.generation(), handles[2].generation() + 1);
    }

    #[test]
    fn test_double_free_is_idempotent() {
        let mut pool: TypedPool<u32> = TypedPool::new();
        let h = pool.allocate(7);
        let other = pool.allocate(8);

        assert!(pool.free(h));
        assert!(!pool.free(h));
        assert_eq!(pool.get(h), None);
        assert_eq!(pool.free_count(), 1);
        assert_eq!(pool.active_count(), 1);
        assert_eq!(pool.get(other), Some(&8));
    }

    #[test]
    fn test_invalid_and_out_of_range_handles() {
        let mut pool: TypedPool<u32> = TypedPool::new();
        pool.allocate(1);

        assert_eq!(pool.get(Handle::INVALID), None);
        assert_eq!(pool.get(Handle::new(9, 0)), None);
        assert!(!pool.free(Handle::INVALID));
        assert!(!pool.free(Handle::new(9, 0)));
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn test_forged_handle_to_freed_slot_does_not_resolve() {
        let mut pool: TypedPool<u32> = TypedPool::new();
        let h = pool.allocate(1);
        pool.free(h);

        let forged = Handle::new(h.index(), h.generation() + 1);
        assert_eq!(pool.get(forged), None);
        assert!(!pool.free(forged));
    }

    #[test]
    fn test_reuse_never_matches_old_handle() {
        let mut pool: TypedPool<u32> = TypedPool::new();
        let mut previous = pool.allocate(0);
        for round in 1..50 {
            pool.free(previous);
            let next = pool.allocate(round);
            assert_eq!(next.index(), previous.index());
            assert!(next.generation() > previous.generation());
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut pool: TypedPool<String> = TypedPool::new();
        let h = pool.allocate(String::from("grain"));
        pool.get_mut(h).unwrap().push_str(" store");
        assert_eq!(pool.get(h).map(String::as_str), Some("grain store"));
    }

    #[test]
    fn test_clear_invalidates_everything() {
        let mut pool: TypedPool<u32> = TypedPool::new();
        let handles: Vec<Handle> = (0..4).map(|i| pool.allocate(i)).collect();
        pool.clear();

        assert!(pool.is_empty());
        assert!(handles.iter().all(|&h| pool.get(h).is_none()));
        assert_eq!(pool.count(), 4);
        assert_eq!(pool.free_count(), 4);
    }

    #[test]
    fn test_iter_skips_freed_slots() {
        let mut pool: TypedPool<u32> = TypedPool::new();
        let a = pool.allocate(1);
        let b = pool.allocate(2);
        let c = pool.allocate(3);
        pool.free(b);

        let live: Vec<(Handle, u32)> = pool.iter().map(|(h, v)| (h, *v)).collect();
        assert_eq!(live, vec![(a, 1), (c, 3)]);

        for (_, value) in pool.iter_mut() {
            *value *= 10;
        }
        assert_eq!(pool.get(c), Some(&30));
    }

    #[test]
    fn test_full_index_space() {
        let mut pool: TypedPool<u8> = TypedPool::with_capacity(MAX_POOL_SLOTS);
        for expected in 0..MAX_POOL_SLOTS {
            let h = pool.allocate(0);
            assert_eq!(usize::from(h.index()), expected);
        }
        assert_eq!(pool.active_count(), MAX_POOL_SLOTS);
        assert!(matches!(
            pool.try_allocate(0),
            Err(CoreError::PoolExhausted { live: 65_536, .. })
        ));
    }

    #[test]
    #[should_panic(expected = "typed pool exhausted")]
    fn test_allocate_past_limit_panics() {
        let mut pool: TypedPool<()> = TypedPool::new();
        for _ in 0..=MAX_POOL_SLOTS {
            pool.allocate(());
        }
    }

    #[test]
    fn test_slot_retires_at_last_generation() {
        let mut pool: TypedPool<u32> = TypedPool::new();
        let mut h = pool.allocate(0);
        while h.generation() < RETIRED_GENERATION - 1 {
            pool.free(h);
            h = pool.allocate(0);
            assert_eq!(h.index(), 0);
        }

        assert!(pool.free(h));
        assert_eq!(pool.retired_count(), 1);
        assert_eq!(pool.free_count(), 0);

        let fresh = pool.allocate(1);
        assert_eq!(fresh.index(), 1);
        assert_eq!(fresh.generation(), 0);
    }

    #[test]
    fn test_allocate_default() {
        let mut pool: TypedPool<Vec<u8>> = TypedPool::default();
        let h = pool.allocate_default();
        assert_eq!(pool.get(h), Some(&Vec::new()));
    }
}
