//! PKCS#5 / PKCS#7 padding

use log::debug;

use crate::error::{PaddingError, Result};

/// Block size PKCS#5 is defined for.
pub const PKCS5_BLOCK_SIZE: usize = 8;

/// Largest block size a single padding byte can describe.
pub const MAX_BLOCK_SIZE: usize = 255;

/// Which padding standard a [`Padder`] follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingScheme {
    /// PKCS#5: block size fixed at 8 bytes.
    Pkcs5,
    /// PKCS#7: block size chosen at construction, 1 to 255 bytes.
    Pkcs7,
}

/// Pads and unpads byte buffers to a block size.
///
/// A padder is a plain value: it holds no state between calls and can be
/// shared or copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padder {
    block_size: u8,
    scheme: PaddingScheme,
}

impl Padder {
    /// PKCS#5 padder (8-byte blocks).
    pub const fn pkcs5() -> Self {
        Self {
            block_size: PKCS5_BLOCK_SIZE as u8,
            scheme: PaddingScheme::Pkcs5,
        }
    }

    /// PKCS#7 padder for `block_size` byte blocks.
    ///
    /// Fails with [`PaddingError::InvalidBlockSize`] unless `block_size` is
    /// in `1..=255`.
    pub fn pkcs7(block_size: usize) -> Result<Self> {
        if block_size == 0 || block_size > MAX_BLOCK_SIZE {
            return Err(PaddingError::InvalidBlockSize(block_size));
        }

        Ok(Self {
            block_size: block_size as u8,
            scheme: PaddingScheme::Pkcs7,
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size as usize
    }

    pub fn scheme(&self) -> PaddingScheme {
        self.scheme
    }

    /// Number of bytes [`pad`](Self::pad) appends to a `len` byte input.
    /// Always in `1..=block_size`.
    pub fn padding_len(&self, len: usize) -> usize {
        let block_size = self.block_size();
        block_size - len % block_size
    }

    /// Returns a copy of `data` with padding appended.
    pub fn pad(&self, data: &[u8]) -> Vec<u8> {
        let mut padded = Vec::with_capacity(data.len() + self.padding_len(data.len()));
        padded.extend_from_slice(data);
        self.pad_in_place(&mut padded);
        padded
    }

    /// Appends padding to `buf`.
    pub fn pad_in_place(&self, buf: &mut Vec<u8>) {
        let n = self.padding_len(buf.len());
        // n <= 255
        buf.resize(buf.len() + n, n as u8);
    }

    /// Returns a copy of `data` with its padding removed.
    pub fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.unpad_slice(data).map(<[u8]>::to_vec)
    }

    /// Borrows the unpadded prefix of `data`.
    pub fn unpad_slice<'a>(&self, data: &'a [u8]) -> Result<&'a [u8]> {
        let n = self.check_padding(data)?;
        Ok(&data[..data.len() - n])
    }

    /// Strips the padding from the end of `buf`. On error `buf` is untouched.
    pub fn unpad_in_place(&self, buf: &mut Vec<u8>) -> Result<()> {
        let n = self.check_padding(buf)?;
        buf.truncate(buf.len() - n);
        Ok(())
    }

    /// Validates the trailing padding and returns its length.
    fn check_padding(&self, data: &[u8]) -> Result<usize> {
        let last = match data.last() {
            Some(&last) => last,
            None => return Err(rejected(PaddingError::EmptyInput)),
        };

        let n = last as usize;
        if n == 0 || n > self.block_size() {
            return Err(rejected(PaddingError::InvalidPaddingLength {
                value: last,
                block_size: self.block_size(),
            }));
        }

        if n > data.len() {
            return Err(rejected(PaddingError::PaddingLongerThanInput {
                value: last,
                len: data.len(),
            }));
        }

        if data[data.len() - n..].iter().any(|&b| b != last) {
            return Err(rejected(PaddingError::CorruptPadding));
        }

        Ok(n)
    }
}

fn rejected(err: PaddingError) -> PaddingError {
    debug!("unpad rejected: {}", err);
    err
}
