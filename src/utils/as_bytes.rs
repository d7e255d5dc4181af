use std::mem;
use std::slice;

use na::{Point3, RealField, Vector3};

/// Trait that transforms a value into a slice of u8.
pub trait AsBytes {
    /// Converts `self` to a slice of bytes.
    fn as_bytes(&self) -> &[u8];
}

macro_rules! generic_as_bytes_impl(
    ($t: ident, $dimension: expr) => (
        impl<N: RealField> AsBytes for $t<N> {
            #[inline(always)]
            fn as_bytes(&self) -> &[u8] {
                unsafe {
                    slice::from_raw_parts(
                        self as *const $t<N> as *const u8,
                        mem::size_of::<N>() * $dimension,
                    )
                }
            }
        }
    )
);

generic_as_bytes_impl!(Vector3, 3);
generic_as_bytes_impl!(Point3, 3);
