//! Copy-on-write shared storage.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A value shared between owners until one of them writes to it.
///
/// Cloning a `CowContainer` is O(1): both clones alias the same storage.
/// [`read`](Self::read) never copies. [`write`](Self::write) duplicates the
/// storage first if any other container still points at it, so each owner
/// observes value semantics.
///
/// Reference counting is atomic, so the shared-to-exclusive transition is
/// safe even when clones live on other threads.
///
/// ```
/// use digitop_set::CowContainer;
///
/// let a = CowContainer::new(vec![1, 2, 3]);
/// let mut b = a.clone();
/// assert!(CowContainer::ptr_eq(&a, &b));
///
/// b.write().push(4);
/// assert_eq!(a.read(), &vec![1, 2, 3]);
/// assert_eq!(b.read(), &vec![1, 2, 3, 4]);
/// assert!(!b.is_shared());
/// ```
pub struct CowContainer<T> {
    storage: Arc<T>,
}

impl<T> CowContainer<T> {
    /// Take ownership of `value`.
    pub fn new(value: T) -> Self {
        Self {
            storage: Arc::new(value),
        }
    }

    /// Take ownership of heap-allocated storage.
    pub fn from_box(value: Box<T>) -> Self {
        Self {
            storage: Arc::from(value),
        }
    }

    /// Share storage already held elsewhere.
    pub fn from_shared(storage: Arc<T>) -> Self {
        Self { storage }
    }

    /// Read-only access. Never copies.
    pub fn read(&self) -> &T {
        &self.storage
    }

    /// Whether another container aliases this storage.
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.storage) > 1 || Arc::weak_count(&self.storage) > 0
    }

    /// Number of containers aliasing this storage.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.storage)
    }

    /// Whether `a` and `b` alias the same storage.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.storage, &b.storage)
    }

    /// The underlying shared handle.
    pub fn shared(&self) -> &Arc<T> {
        &self.storage
    }
}

impl<T: Clone> CowContainer<T> {
    /// Exclusive access, duplicating the storage first if it is shared.
    pub fn write(&mut self) -> &mut T {
        if self.is_shared() {
            log::trace!(
                "duplicating shared storage ({} owners)",
                Arc::strong_count(&self.storage)
            );
        }
        Arc::make_mut(&mut self.storage)
    }

    /// Unwrap the value, cloning it only if still shared.
    pub fn into_inner(self) -> T {
        Arc::try_unwrap(self.storage).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<T> Clone for CowContainer<T> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<T> Deref for CowContainer<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.storage
    }
}

impl<T: Default> Default for CowContainer<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq> PartialEq for CowContainer<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || *self.storage == *other.storage
    }
}

impl<T: fmt::Debug> fmt::Debug for CowContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CowContainer")
            .field("owners", &Arc::strong_count(&self.storage))
            .field("value", &*self.storage)
            .finish()
    }
}

impl<T> From<T> for CowContainer<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
