//! Arena allocation for a compilation session.
//!
//! Every syntax tree node is carved from one bump arena. Nodes are never
//! freed individually; the whole tree goes away when the arena is dropped.

use bumpalo::Bump;

/// Initial arena size used when the caller does not pick one (4 MiB).
pub const DEFAULT_ARENA_CAPACITY: usize = 4 * 1024 * 1024;

/// The compiler arena wraps a bump allocator for one parse session.
///
/// References handed out by the arena stay valid for the arena's lifetime,
/// and already-issued allocations never move.
pub struct CompilerArena {
    bump: Bump,
}

impl CompilerArena {
    /// Create a new arena with [`DEFAULT_ARENA_CAPACITY`] bytes reserved up front.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ARENA_CAPACITY)
    }

    /// Create a new arena with the specified initial capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Get a reference to the underlying bump allocator.
    #[inline]
    pub fn bump(&self) -> &Bump {
        &self.bump
    }

    /// Allocate a value in the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Copy a string slice into the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Returns the total bytes allocated in this arena.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Release every allocation while keeping the memory for the next session.
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for CompilerArena {
    fn default() -> Self {
        Self::new()
    }
}
