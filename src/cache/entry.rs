//! Cache Entry Module
//!
//! Defines the structure for individual sized cache entries.

// == Sized Entry ==
/// A stored value together with the byte size recorded when it was inserted.
#[derive(Debug, Clone)]
pub(crate) struct SizedEntry<V> {
    /// The stored value
    pub(crate) value: V,
    /// Size reported by the sizer at insertion time
    pub(crate) size: usize,
}

impl<V> SizedEntry<V> {
    // == Constructor ==
    /// Creates a new entry with its recorded size.
    pub(crate) fn new(value: V, size: usize) -> Self {
        Self { value, size }
    }

    // == Drift Check ==
    /// Returns true if `current` differs from the size recorded at insertion.
    pub(crate) fn has_drifted(&self, current: usize) -> bool {
        self.size != current
    }
}
