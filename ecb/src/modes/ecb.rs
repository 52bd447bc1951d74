//! ECB (Electronic Code Book) mode implementation
//!
//! Every block is transformed on its own with no feedback between blocks,
//! so identical plaintext blocks under one key give identical ciphertext
//! blocks. That is the whole point of this mode and also why it leaks
//! patterns; use it only where the format demands it.

use std::fmt;

use log::trace;

use crate::BlockCipher;

use super::{check_lengths, BlockMode, Direction};

/// ECB encrypter or decrypter borrowing a single-block cipher.
pub struct Ecb<'a, C: ?Sized> {
    cipher: &'a C,
    direction: Direction,
}

impl<'a, C: BlockCipher + ?Sized> Ecb<'a, C> {
    /// Wraps `cipher` for the given direction.
    ///
    /// # Panics
    ///
    /// If the cipher reports a block size of zero.
    pub fn new(cipher: &'a C, direction: Direction) -> Self {
        assert!(cipher.block_size() > 0, "ecb: cipher block size must be > 0");
        Self { cipher, direction }
    }

    /// ECB encrypter over `cipher`.
    pub fn encrypter(cipher: &'a C) -> Self {
        Self::new(cipher, Direction::Encrypt)
    }

    /// ECB decrypter over `cipher`.
    pub fn decrypter(cipher: &'a C) -> Self {
        Self::new(cipher, Direction::Decrypt)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    fn crypt_block(&self, dst: &mut [u8], src: &[u8]) {
        match self.direction {
            Direction::Encrypt => self.cipher.encrypt_block(dst, src),
            Direction::Decrypt => self.cipher.decrypt_block(dst, src),
        }
    }

    #[inline]
    fn crypt_block_in_place(&self, block: &mut [u8]) {
        match self.direction {
            Direction::Encrypt => self.cipher.encrypt_block_in_place(block),
            Direction::Decrypt => self.cipher.decrypt_block_in_place(block),
        }
    }
}

#[cfg(feature = "parallel")]
impl<'a, C: BlockCipher + Sync + ?Sized> Ecb<'a, C> {
    /// Same contract as [`BlockMode::crypt_blocks`], with the blocks spread
    /// over the rayon thread pool.
    ///
    /// Output is identical to the sequential transform.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`BlockMode::crypt_blocks`].
    pub fn par_crypt_blocks(&self, dst: &mut [u8], src: &[u8]) {
        use rayon::prelude::*;

        let block_size = self.cipher.block_size();
        let blocks = check_lengths(block_size, dst.len(), src.len());
        trace!("ecb {:?}: {} blocks in parallel", self.direction, blocks);

        dst[..src.len()]
            .par_chunks_mut(block_size)
            .zip(src.par_chunks(block_size))
            .for_each(|(out, block)| self.crypt_block(out, block));
    }
}

impl<'a, C: BlockCipher + ?Sized> BlockMode for Ecb<'a, C> {
    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    fn crypt_blocks(&self, dst: &mut [u8], src: &[u8]) {
        let block_size = self.cipher.block_size();
        let blocks = check_lengths(block_size, dst.len(), src.len());
        trace!("ecb {:?}: {} blocks", self.direction, blocks);

        for (out, block) in dst.chunks_exact_mut(block_size).zip(src.chunks_exact(block_size)) {
            self.crypt_block(out, block);
        }
    }

    fn crypt_blocks_in_place(&self, buf: &mut [u8]) {
        let block_size = self.cipher.block_size();
        let blocks = check_lengths(block_size, buf.len(), buf.len());
        trace!("ecb {:?}: {} blocks in place", self.direction, blocks);

        for block in buf.chunks_exact_mut(block_size) {
            self.crypt_block_in_place(block);
        }
    }
}

impl<'a, C: ?Sized> Clone for Ecb<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C: ?Sized> Copy for Ecb<'a, C> {}

impl<'a, C: BlockCipher + ?Sized> fmt::Debug for Ecb<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ecb")
            .field("direction", &self.direction)
            .field("block_size", &self.cipher.block_size())
            .finish()
    }
}
