//! Sizer Module
//!
//! Strategies for computing the byte cost of a cached value.

// == Sizer Trait ==
/// Computes how many bytes a value costs against the cache budget.
///
/// The result must be stable: the cache sizes a value once on insertion and
/// again when it is evicted or replaced, and treats any difference as an
/// accounting error.
pub trait Sizer<V>: Send + Sync {
    fn size_of(&self, value: &V) -> usize;
}

impl<V, F> Sizer<V> for F
where
    F: Fn(&V) -> usize + Send + Sync,
{
    #[inline]
    fn size_of(&self, value: &V) -> usize {
        self(value)
    }
}

// == Byte Length Sizer ==
/// Sizes a value by the length of its byte representation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteLenSizer;

impl<V: AsRef<[u8]>> Sizer<V> for ByteLenSizer {
    #[inline]
    fn size_of(&self, value: &V) -> usize {
        value.as_ref().len()
    }
}
