//! Generic single-block cipher trait

/// A cipher that transforms exactly one block at a time.
///
/// Implementations are supplied by the caller (AES, Blowfish, ...). Every
/// buffer handed to the block methods is exactly [`block_size`] bytes long.
///
/// [`block_size`]: BlockCipher::block_size
pub trait BlockCipher {
    /// Returns the block size in bytes. Must be constant and non-zero.
    fn block_size(&self) -> usize;

    /// Encrypts the block in `src` into `dst`.
    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]);

    /// Decrypts the block in `src` into `dst`.
    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]);

    /// Encrypts `block` in place.
    ///
    /// The default copies the block aside first; ciphers that can work in
    /// place should override it.
    fn encrypt_block_in_place(&self, block: &mut [u8]) {
        let src = block.to_vec();
        self.encrypt_block(block, &src);
    }

    /// Decrypts `block` in place.
    fn decrypt_block_in_place(&self, block: &mut [u8]) {
        let src = block.to_vec();
        self.decrypt_block(block, &src);
    }
}

impl<T: BlockCipher + ?Sized> BlockCipher for &T {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        (**self).encrypt_block(dst, src)
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        (**self).decrypt_block(dst, src)
    }

    fn encrypt_block_in_place(&self, block: &mut [u8]) {
        (**self).encrypt_block_in_place(block)
    }

    fn decrypt_block_in_place(&self, block: &mut [u8]) {
        (**self).decrypt_block_in_place(block)
    }
}

impl<T: BlockCipher + ?Sized> BlockCipher for Box<T> {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        (**self).encrypt_block(dst, src)
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        (**self).decrypt_block(dst, src)
    }

    fn encrypt_block_in_place(&self, block: &mut [u8]) {
        (**self).encrypt_block_in_place(block)
    }

    fn decrypt_block_in_place(&self, block: &mut [u8]) {
        (**self).decrypt_block_in_place(block)
    }
}
