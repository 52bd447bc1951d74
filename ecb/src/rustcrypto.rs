//! Adapter for RustCrypto block ciphers
//!
//! Any type implementing the `cipher` crate's `BlockEncrypt` and
//! `BlockDecrypt` (for example `aes::Aes256` or `blowfish::Blowfish`) can be
//! driven by the modes in this crate once wrapped in [`RustCrypto`].

use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, InvalidLength, KeyInit};

use crate::BlockCipher;

/// Wraps a RustCrypto block cipher as a [`BlockCipher`].
#[derive(Debug, Clone)]
pub struct RustCrypto<C>(C);

impl<C> RustCrypto<C> {
    pub fn new(cipher: C) -> Self {
        Self(cipher)
    }

    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C: KeyInit> RustCrypto<C> {
    /// Keys the cipher from `key`, failing if the cipher rejects its length.
    pub fn new_from_slice(key: &[u8]) -> Result<Self, InvalidLength> {
        C::new_from_slice(key).map(Self)
    }
}

impl<C: BlockEncrypt + BlockDecrypt> BlockCipher for RustCrypto<C> {
    fn block_size(&self) -> usize {
        C::block_size()
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        self.0
            .encrypt_block_b2b(GenericArray::from_slice(src), GenericArray::from_mut_slice(dst));
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        self.0
            .decrypt_block_b2b(GenericArray::from_slice(src), GenericArray::from_mut_slice(dst));
    }

    fn encrypt_block_in_place(&self, block: &mut [u8]) {
        self.0.encrypt_block(GenericArray::from_mut_slice(block));
    }

    fn decrypt_block_in_place(&self, block: &mut [u8]) {
        self.0.decrypt_block(GenericArray::from_mut_slice(block));
    }
}
