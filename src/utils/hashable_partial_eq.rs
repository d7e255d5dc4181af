use crate::utils::AsBytes;
use std::hash::{Hash, Hasher};

/// A structure that implements `Eq` and `Hash` for a value that only implements
/// `PartialEq`, by comparing and hashing its raw byte representation.
///
/// This is meant to be used as a hash-map key for floating-point values. The
/// wrapped value must not contain any `NaN`, otherwise `Eq` is not actually an
/// equivalence relation.
#[derive(Copy, Clone, Debug)]
pub struct HashablePartialEq<T>(T);

impl<T> HashablePartialEq<T> {
    /// Creates a new `HashablePartialEq`.
    pub fn new(value: T) -> Self {
        HashablePartialEq(value)
    }
}

impl<T: AsBytes> PartialEq for HashablePartialEq<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes() == other.0.as_bytes()
    }
}

impl<T: AsBytes> Eq for HashablePartialEq<T> {}

impl<T: AsBytes> Hash for HashablePartialEq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.as_bytes().hash(state)
    }
}
