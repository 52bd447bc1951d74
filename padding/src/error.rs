//! Error types for padding operations

use thiserror::Error;

/// Why a buffer could not be unpadded, or a padder could not be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaddingError {
    #[error("Invalid padding: input is empty")]
    EmptyInput,

    #[error("Invalid padding length {value} (must be 1..={block_size})")]
    InvalidPaddingLength { value: u8, block_size: usize },

    #[error("Invalid padding length {value} for {len} byte input")]
    PaddingLongerThanInput { value: u8, len: usize },

    #[error("Invalid padding: fill bytes do not match padding length")]
    CorruptPadding,

    #[error("Invalid block size {0} (must be 1..=255)")]
    InvalidBlockSize(usize),
}

pub type Result<T> = std::result::Result<T, PaddingError>;
