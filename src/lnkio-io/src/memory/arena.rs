use std::sync::atomic::{AtomicUsize, Ordering};

use bumpalo_herd::Herd;

use super::Buffer;

/// A bump allocator whose allocations all share one lifetime.
///
/// The arena may be used from many worker threads at once. Every
/// thread borrows its own bump allocator from a shared herd for the
/// duration of an allocation, so concurrent callers never contend on
/// the same memory region.
///
/// Memory handed out is never freed individually. It is released as
/// a whole by [`Arena::reset`] or when the arena is dropped, both of
/// which require that no buffer borrows from it anymore.
pub struct Arena {
    herd: Herd,
    allocated: AtomicUsize,
}

impl Arena {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self {
            herd: Herd::new(),
            allocated: AtomicUsize::new(0),
        }
    }

    /// Allocates `len` zeroed bytes.
    pub fn alloc_zeroed(&self, len: usize) -> &mut [u8] {
        self.allocated.fetch_add(len, Ordering::Relaxed);
        self.herd.get().alloc_slice_fill_copy(len, 0)
    }

    /// Copies `data` into the arena and returns a [`Buffer`] over it.
    pub fn alloc_copy(&self, data: &[u8]) -> Buffer<'_> {
        self.allocated.fetch_add(data.len(), Ordering::Relaxed);
        Buffer::new(self.herd.get().alloc_slice_copy(data))
    }

    /// The number of bytes handed out since creation or the last reset.
    pub fn allocated_bytes(&self) -> usize {
        self.allocated.load(Ordering::Relaxed)
    }

    /// Releases all memory at once.
    pub fn reset(&mut self) {
        self.herd.reset();
        *self.allocated.get_mut() = 0;
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
