//! FxHasher taken from rustc_hash, except that it does not depend on the pointer size.

const K: u32 = 0x9e3779b9;

/// This is the same as FxHasher, but with the guarantee that the internal hash is
/// an u32 instead of something that depends on the platform.
#[derive(Default)]
pub struct FxHasher32 {
    hash: u32,
}

impl FxHasher32 {
    #[inline]
    fn add_to_hash(&mut self, i: u32) {
        self.hash = self.hash.rotate_left(5).wrapping_mul(K) ^ i;
    }
}

impl std::hash::Hasher for FxHasher32 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(4);
        for chunk in &mut chunks {
            self.add_to_hash(u32::from_ne_bytes(chunk.try_into().unwrap()));
        }
        for byte in chunks.remainder() {
            self.add_to_hash(*byte as u32);
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.add_to_hash(i as u32);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.add_to_hash(i as u32);
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.add_to_hash(i);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.add_to_hash(i as u32);
        self.add_to_hash((i >> 32) as u32);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash as u64
    }
}
