//! Bump arena backing the AST.
//!
//! Nodes are allocated once and live until the whole arena is dropped;
//! there is no per-node free. Storage is a chain of fixed-capacity chunks,
//! so growing the arena never moves anything already allocated: a chunk is
//! created with its final capacity and only ever pushed to while below it.
//! Allocations are addressed by typed [`Handle`]s rather than pointers,
//! which keeps the arena safe to move and lets callers derive `Copy` ids.

use std::marker::PhantomData;

/// Minimum chunk size in bytes. Chunks hold at least this much, so small
/// node types still get large chunks and few chunk switches.
const MIN_CHUNK_BYTES: usize = 1 << 20;

/// A typed index into an [`Arena<T>`].
///
/// Handles are 4 bytes, `Copy`, and only meaningful against the arena that
/// produced them.
pub struct Handle<T> {
    index: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    #[inline]
    fn new(index: usize) -> Self {
        Handle {
            index: index as u32,
            _marker: PhantomData,
        }
    }

    /// Raw index of this handle, in allocation order.
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

// Manual impls: derive would put a `T: Clone` bound on these.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Handle<T> {}

impl<T> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handle({})", self.index)
    }
}

/// Append-only chunked arena.
///
/// Every chunk has the same element capacity; an allocation never spans two
/// chunks. Dropping the arena is the single teardown point.
pub struct Arena<T> {
    chunks: Vec<Vec<T>>,
    chunk_capacity: usize,
}

impl<T> Arena<T> {
    /// Create an arena whose chunks hold at least [`MIN_CHUNK_BYTES`] worth
    /// of elements.
    pub fn new() -> Self {
        let elem_size = std::mem::size_of::<T>().max(1);
        Self::with_chunk_capacity((MIN_CHUNK_BYTES / elem_size).max(1))
    }

    /// Create an arena with an explicit per-chunk element capacity.
    ///
    /// Mostly useful in tests, where forcing chunk growth with a handful of
    /// allocations beats allocating a megabyte of nodes.
    pub fn with_chunk_capacity(chunk_capacity: usize) -> Self {
        assert!(chunk_capacity > 0, "chunk capacity must be non-zero");
        Arena {
            chunks: Vec::new(),
            chunk_capacity,
        }
    }

    /// Allocate `value`, returning a handle valid for the arena's lifetime.
    ///
    /// Starts a new chunk when the current one is full. The backing chunk
    /// is never reallocated, so `&T` obtained from earlier handles stay
    /// unchanged as the arena grows.
    pub fn alloc(&mut self, value: T) -> Handle<T> {
        let index = self.len();
        match self.chunks.last() {
            Some(chunk) if chunk.len() < self.chunk_capacity => {}
            _ => self.chunks.push(Vec::with_capacity(self.chunk_capacity)),
        }
        // Unwrap is fine: the match above guarantees a non-full last chunk.
        let chunk = self.chunks.last_mut().expect("arena has a current chunk");
        chunk.push(value);
        Handle::new(index)
    }

    /// Resolve a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this arena.
    #[inline]
    pub fn get(&self, handle: Handle<T>) -> &T {
        let index = handle.index();
        &self.chunks[index / self.chunk_capacity][index % self.chunk_capacity]
    }

    /// Mutable variant of [`Arena::get`].
    #[inline]
    pub fn get_mut(&mut self, handle: Handle<T>) -> &mut T {
        let index = handle.index();
        &mut self.chunks[index / self.chunk_capacity][index % self.chunk_capacity]
    }

    /// Total number of allocations.
    pub fn len(&self) -> usize {
        match self.chunks.last() {
            Some(last) => (self.chunks.len() - 1) * self.chunk_capacity + last.len(),
            None => 0,
        }
    }

    /// True before the first allocation.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Number of backing chunks currently owned.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_get() {
        let mut arena = Arena::new();
        let a = arena.alloc(42u64);
        let b = arena.alloc(7u64);

        assert_eq!(*arena.get(a), 42);
        assert_eq!(*arena.get(b), 7);
        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_lazy_chunk_creation() {
        let arena: Arena<u64> = Arena::new();
        assert_eq!(arena.chunk_count(), 0);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_growth_adds_chunks() {
        let mut arena = Arena::with_chunk_capacity(4);
        let handles: Vec<_> = (0..10u32).map(|i| arena.alloc(i)).collect();

        assert_eq!(arena.chunk_count(), 3);
        assert_eq!(arena.len(), 10);
        for (i, handle) in handles.iter().enumerate() {
            assert_eq!(*arena.get(*handle), i as u32);
        }
    }

    #[test]
    fn test_stability_under_growth() {
        let mut arena = Arena::with_chunk_capacity(2);
        let first = arena.alloc(String::from("first"));
        let before = arena.get(first).as_ptr();

        for i in 0..100 {
            arena.alloc(format!("filler {i}"));
        }

        // The first allocation was neither moved nor rewritten.
        assert_eq!(arena.get(first).as_ptr(), before);
        assert_eq!(arena.get(first), "first");
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::with_chunk_capacity(2);
        let h = arena.alloc(1u32);
        *arena.get_mut(h) += 10;
        assert_eq!(*arena.get(h), 11);
    }

    #[test]
    fn test_handle_is_copy() {
        let mut arena = Arena::new();
        let h = arena.alloc(5u8);
        let h2 = h;
        let h3 = h;
        assert_eq!(*arena.get(h2), *arena.get(h3));
    }
}
