//! Block cipher modes of operation

pub mod ecb;

pub use ecb::Ecb;

/// Which single-block operation a mode applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// A mode that transforms whole runs of blocks.
///
/// Both methods panic if the input is empty or not a multiple of
/// [`block_size`](BlockMode::block_size). Callers pad beforehand.
pub trait BlockMode {
    /// Block size of the underlying cipher.
    fn block_size(&self) -> usize;

    /// Transforms `src` into the first `src.len()` bytes of `dst`.
    ///
    /// # Panics
    ///
    /// If `src` is not a positive multiple of the block size, or if `dst`
    /// is shorter than `src`.
    fn crypt_blocks(&self, dst: &mut [u8], src: &[u8]);

    /// Transforms `buf` in place.
    ///
    /// # Panics
    ///
    /// If `buf` is not a positive multiple of the block size.
    fn crypt_blocks_in_place(&self, buf: &mut [u8]);
}

/// Asserts the bulk transform preconditions and returns the block count.
pub(crate) fn check_lengths(block_size: usize, dst_len: usize, src_len: usize) -> usize {
    assert!(
        src_len != 0 && src_len % block_size == 0,
        "ecb: input not full blocks ({} bytes, block size {})",
        src_len,
        block_size
    );
    assert!(
        dst_len >= src_len,
        "ecb: output smaller than input ({} < {})",
        dst_len,
        src_len
    );
    src_len / block_size
}
