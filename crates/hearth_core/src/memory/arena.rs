//! # Arena Allocator
//!
//! A fixed-capacity bump arena that placement-constructs values of any type
//! and destroys them all at once.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::fmt;
use std::mem;
use std::ptr::NonNull;

use crate::error::{CoreError, CoreResult};

/// Alignment of the arena's backing buffer.
pub const ARENA_BASE_ALIGN: usize = 16;

/// Stand-in type whose dangling pointer gives a zero-capacity arena an
/// address aligned to [`ARENA_BASE_ALIGN`].
#[allow(dead_code)]
#[repr(C, align(16))]
struct BaseAlign([u8; ARENA_BASE_ALIGN]);

/// Bookkeeping for one constructed object.
struct ArenaRecord {
    /// Byte offset of the object from the buffer start.
    offset: usize,
    /// Size of the object in bytes.
    size: usize,
    /// Type name, for diagnostics.
    type_name: &'static str,
    /// Drops the object in place.
    drop_fn: unsafe fn(*mut u8),
}

/// Type-erased destructor bound to a concrete `T`.
///
/// # Safety
///
/// `ptr` must point to a live, initialized `T` that is never used again.
unsafe fn drop_thunk<T>(ptr: *mut u8) {
    std::ptr::drop_in_place(ptr.cast::<T>());
}

/// Where and what an arena allocation is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationInfo {
    /// Byte offset from the buffer start.
    pub offset: usize,
    /// Size in bytes.
    pub size: usize,
    /// Type name of the stored value.
    pub type_name: &'static str,
}

impl AllocationInfo {
    /// One past the last byte of the allocation.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }
}

/// A non-growable arena for heterogeneous values.
///
/// Every value lives at a fixed address inside one buffer until the arena
/// is cleared or dropped. The buffer never grows: growing would move bytes
/// out from under references and trait-object pointers already handed out.
///
/// Destructors run exactly once per value, in allocation order.
///
/// # Thread Safety
///
/// This arena is NOT thread-safe (it is neither `Send` nor `Sync`).
///
/// # Example
///
/// ```rust
/// use hearth_core::Arena;
///
/// let mut arena = Arena::new(1024);
/// let counter = arena.alloc(0u32);
/// *counter += 1;
/// assert_eq!(arena.len(), 1);
///
/// arena.clear();
/// assert_eq!(arena.used(), 0);
/// ```
pub struct Arena {
    /// Start of the backing buffer.
    base: NonNull<u8>,
    /// Total capacity in bytes.
    capacity: usize,
    /// Current bump offset.
    offset: usize,
    /// Live objects in construction order.
    records: Vec<ArenaRecord>,
}

impl Arena {
    /// Creates an arena with a fixed capacity in bytes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` cannot be described by a [`Layout`].
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let base = if capacity == 0 {
            NonNull::<BaseAlign>::dangling().cast::<u8>()
        } else {
            let layout = Self::buffer_layout(capacity);
            // SAFETY: layout has a non-zero size.
            let ptr = unsafe { alloc::alloc(layout) };
            NonNull::new(ptr).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        };

        Self {
            base,
            capacity,
            offset: 0,
            records: Vec::new(),
        }
    }

    fn buffer_layout(capacity: usize) -> Layout {
        match Layout::from_size_align(capacity, ARENA_BASE_ALIGN) {
            Ok(layout) => layout,
            Err(_) => panic!("arena capacity {capacity} exceeds the address space"),
        }
    }

    /// Returns the total capacity in bytes.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the bytes consumed so far, alignment padding included.
    #[inline]
    #[must_use]
    pub const fn used(&self) -> usize {
        self.offset
    }

    /// Returns the remaining free space in bytes.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.capacity - self.offset
    }

    /// Number of live objects.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no object is live.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Moves `value` into the arena.
    ///
    /// # Panics
    ///
    /// Panics if the arena cannot fit `T`. The capacity is fixed at
    /// construction, so this is a sizing bug.
    pub fn alloc<T: 'static>(&mut self, value: T) -> &mut T {
        self.alloc_with(|| value)
    }

    /// Constructs a value in the arena from `init`.
    ///
    /// # Panics
    ///
    /// Panics if the arena cannot fit `T`.
    pub fn alloc_with<T: 'static, F: FnOnce() -> T>(&mut self, init: F) -> &mut T {
        match self.try_alloc_with(init) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(%err, "arena capacity violated");
                panic!("{err}");
            }
        }
    }

    /// Moves `value` into the arena, reporting exhaustion instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ArenaExhausted`] if `T` does not fit. `value` is
    /// dropped and the arena is left untouched.
    pub fn try_alloc<T: 'static>(&mut self, value: T) -> CoreResult<&mut T> {
        self.try_alloc_with(|| value)
    }

    /// Constructs a value in the arena from `init`.
    ///
    /// Space is checked before `init` runs. Nothing is recorded until `init`
    /// has returned, so a panicking constructor leaves the arena as it was.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ArenaExhausted`] if `T` does not fit; `init` is
    /// not called.
    pub fn try_alloc_with<T: 'static, F: FnOnce() -> T>(&mut self, init: F) -> CoreResult<&mut T> {
        let start = self.reserve::<T>()?;
        self.records.reserve(1);

        let value = init();

        // SAFETY: `reserve` proved `start..start + size_of::<T>()` lies inside
        // the buffer, past every live object, and aligned for `T`.
        let ptr = unsafe { self.base.as_ptr().add(start).cast::<T>() };
        // SAFETY: see above; the bytes are unused, so nothing is overwritten.
        unsafe { ptr.write(value) };

        self.offset = start + mem::size_of::<T>();
        self.records.push(ArenaRecord {
            offset: start,
            size: mem::size_of::<T>(),
            type_name: std::any::type_name::<T>(),
            drop_fn: drop_thunk::<T>,
        });
        tracing::trace!(
            type_name = std::any::type_name::<T>(),
            offset = start,
            used = self.offset,
            "arena alloc"
        );

        // SAFETY: freshly written, and only reachable through this borrow.
        Ok(unsafe { &mut *ptr })
    }

    /// Computes the aligned start offset for a `T`.
    fn reserve<T>(&self) -> CoreResult<usize> {
        let size = mem::size_of::<T>();
        let align = mem::align_of::<T>();
        let base = self.base.as_ptr() as usize;

        let span = base
            .checked_add(self.offset)
            .and_then(|addr| addr.checked_add(align - 1))
            .map(|addr| (addr & !(align - 1)) - base)
            .and_then(|start| start.checked_add(size).map(|end| (start, end)));

        match span {
            Some((start, end)) if end <= self.capacity => Ok(start),
            _ => Err(CoreError::ArenaExhausted {
                type_name: std::any::type_name::<T>(),
                requested: size,
                align,
                offset: self.offset,
                capacity: self.capacity,
            }),
        }
    }

    /// Iterates over live allocations in construction order.
    pub fn allocations(&self) -> impl Iterator<Item = AllocationInfo> + '_ {
        self.records.iter().map(|record| AllocationInfo {
            offset: record.offset,
            size: record.size,
            type_name: record.type_name,
        })
    }

    /// Drops every object in construction order and resets the arena.
    ///
    /// Requires `&mut self`, so no reference into the arena can outlive it.
    pub fn clear(&mut self) {
        if self.records.is_empty() && self.offset == 0 {
            return;
        }

        let mut records = mem::take(&mut self.records);
        for record in &records {
            // SAFETY: every record describes a live object written by
            // `try_alloc_with`, dropped nowhere else.
            unsafe { (record.drop_fn)(self.base.as_ptr().add(record.offset)) };
        }
        tracing::debug!(objects = records.len(), bytes = self.offset, "arena cleared");

        records.clear();
        self.records = records;
        self.offset = 0;
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        self.clear();
        if self.capacity > 0 {
            // SAFETY: allocated in `new` with this exact layout.
            unsafe { alloc::dealloc(self.base.as_ptr(), Self::buffer_layout(self.capacity)) };
        }
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity)
            .field("used", &self.offset)
            .field("objects", &self.records.len())
            .finish()
    }
}
