//! # ECB
//!
//! Electronic Code Book mode for any single-block cipher.
//!
//! Most cryptographic libraries leave ECB out on purpose: every block is
//! encrypted independently, so repeated plaintext blocks are visible in the
//! ciphertext. Some formats and legacy protocols still require it, and this
//! crate provides the mechanical transform for them. It does not pad, it
//! does not authenticate, and it does not pick keys.
//!
//! ## Usage
//!
//! ```rust
//! use aes::Aes256;
//! use ecb::{BlockMode, Ecb, RustCrypto};
//!
//! let cipher = RustCrypto::<Aes256>::new_from_slice(b"AES256Key-32Characters1234567890").unwrap();
//! let plaintext = b"exampleplaintext";
//!
//! let mut ciphertext = vec![0u8; plaintext.len()];
//! Ecb::encrypter(&cipher).crypt_blocks(&mut ciphertext, plaintext);
//! assert_eq!(hex::encode_upper(&ciphertext), "717FADE7B97198A8C2F67766FBAC7B07");
//!
//! let mut decrypted = vec![0u8; ciphertext.len()];
//! Ecb::decrypter(&cipher).crypt_blocks(&mut decrypted, &ciphertext);
//! assert_eq!(&decrypted, plaintext);
//! ```
//!
//! ## Preconditions
//!
//! The bulk transform panics when the input is empty, not a multiple of the
//! block size, or longer than the output. Those are integration bugs; pad
//! the plaintext first (see the `padding` crate).
//!
//! ## Features
//!
//! - `rustcrypto` (default): [`RustCrypto`] adapter for `cipher` 0.4 block ciphers
//! - `parallel` (default): [`Ecb::par_crypt_blocks`] on the rayon thread pool

pub mod cipher;
pub mod modes;
#[cfg(feature = "rustcrypto")]
pub mod rustcrypto;

pub use crate::cipher::BlockCipher;
pub use modes::{BlockMode, Direction, Ecb};
#[cfg(feature = "rustcrypto")]
pub use rustcrypto::RustCrypto;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
