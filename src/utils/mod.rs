//! Various unsorted geometrical and logical operators.

pub use self::as_bytes::AsBytes;
pub use self::center::center;
pub use self::hashable_partial_eq::HashablePartialEq;

mod as_bytes;
mod center;
#[cfg(feature = "enhanced-determinism")]
pub(crate) mod fx_hasher;
mod hashable_partial_eq;
pub mod hashmap;
