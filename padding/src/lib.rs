//! # Padding
//!
//! PKCS#5 and PKCS#7 padding for block cipher plaintexts.
//!
//! Both schemes append `n` bytes of value `n`, where `n` brings the length up
//! to the next multiple of the block size. An input that is already aligned
//! gets a whole extra block, so unpadding is never ambiguous. PKCS#5 fixes
//! the block size at 8; PKCS#7 allows anything from 1 to 255.
//!
//! ## Usage
//!
//! ```rust
//! use padding::Padder;
//!
//! let padder = Padder::pkcs7(16)?;
//! let padded = padder.pad(&[0x0A, 0x0B, 0x0C, 0x0D]);
//! assert_eq!(padded.len(), 16);
//! assert_eq!(padded[4..], [0x0C; 12]);
//!
//! let plain = padder.unpad(&padded)?;
//! assert_eq!(plain, [0x0A, 0x0B, 0x0C, 0x0D]);
//! # Ok::<(), padding::PaddingError>(())
//! ```
//!
//! Unpadding malformed input returns a [`PaddingError`]; it never panics,
//! since the input usually comes from decrypting untrusted ciphertext.

pub mod error;
pub mod pkcs;

pub use error::{PaddingError, Result};
pub use pkcs::{Padder, PaddingScheme, MAX_BLOCK_SIZE, PKCS5_BLOCK_SIZE};
