//! Error types for the command-line tool

use std::io;

use padding::PaddingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid hexadecimal input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid key length for {cipher}: {len} bytes")]
    KeyLength { cipher: &'static str, len: usize },

    #[error("Ciphertext length {len} is not a positive multiple of the block size {block_size}")]
    Misaligned { len: usize, block_size: usize },

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Padding(#[from] PaddingError),
}

pub type Result<T> = std::result::Result<T, ToolError>;
