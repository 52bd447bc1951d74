//! Cipher selection plus the pad / ECB / unpad pipeline

use aes::{Aes128, Aes192, Aes256};
use blowfish::Blowfish;
use clap::ValueEnum;
use ecb::{BlockCipher, BlockMode, Ecb, RustCrypto};
use log::{debug, info};
use padding::Padder;

use crate::error::{Result, ToolError};

/// Inputs at least this long are split across the rayon pool.
const PARALLEL_THRESHOLD: usize = 64 * 1024;

pub type DynCipher = Box<dyn BlockCipher + Send + Sync>;

/// Supported block ciphers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CipherKind {
    /// AES-128/192/256, chosen from the key length. PKCS#7 padding.
    Aes,
    /// Blowfish with a 4 to 56 byte key. PKCS#5 padding.
    Blowfish,
}

impl CipherKind {
    pub fn name(self) -> &'static str {
        match self {
            CipherKind::Aes => "AES",
            CipherKind::Blowfish => "Blowfish",
        }
    }

    /// Key used when none is given on the command line.
    pub fn default_key(self) -> &'static str {
        match self {
            CipherKind::Aes => "secretkey16bytes",
            CipherKind::Blowfish => "a_very_secret_key",
        }
    }

    /// Keys the cipher.
    pub fn build(self, key: &[u8]) -> Result<DynCipher> {
        let key_error = || ToolError::KeyLength {
            cipher: self.name(),
            len: key.len(),
        };

        let cipher: DynCipher = match self {
            CipherKind::Aes => match key.len() {
                16 => Box::new(RustCrypto::<Aes128>::new_from_slice(key).map_err(|_| key_error())?),
                24 => Box::new(RustCrypto::<Aes192>::new_from_slice(key).map_err(|_| key_error())?),
                32 => Box::new(RustCrypto::<Aes256>::new_from_slice(key).map_err(|_| key_error())?),
                _ => return Err(key_error()),
            },
            CipherKind::Blowfish => {
                Box::new(RustCrypto::<Blowfish>::new_from_slice(key).map_err(|_| key_error())?)
            }
        };

        debug!("{} keyed with {} bytes", self.name(), key.len());
        Ok(cipher)
    }

    /// Padding paired with this cipher.
    pub fn padder(self, block_size: usize) -> Result<Padder> {
        Ok(match self {
            CipherKind::Aes => Padder::pkcs7(block_size)?,
            CipherKind::Blowfish => Padder::pkcs5(),
        })
    }
}

fn crypt(mode: &Ecb<'_, dyn BlockCipher + Send + Sync>, dst: &mut [u8], src: &[u8]) {
    if src.len() >= PARALLEL_THRESHOLD {
        mode.par_crypt_blocks(dst, src);
    } else {
        mode.crypt_blocks(dst, src);
    }
}

/// Pads `plaintext` and encrypts it in ECB mode.
pub fn encrypt(kind: CipherKind, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = kind.build(key)?;
    let mode = Ecb::encrypter(cipher.as_ref());
    let padder = kind.padder(mode.block_size())?;

    let padded = padder.pad(plaintext);
    let mut ciphertext = vec![0u8; padded.len()];
    crypt(&mode, &mut ciphertext, &padded);

    info!(
        "encrypted {} bytes into {} bytes with {}-ECB",
        plaintext.len(),
        ciphertext.len(),
        kind.name()
    );
    Ok(ciphertext)
}

/// Decrypts `ciphertext` in ECB mode and strips the padding.
pub fn decrypt(kind: CipherKind, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = kind.build(key)?;
    let mode = Ecb::decrypter(cipher.as_ref());
    let block_size = mode.block_size();

    // ciphertext comes from outside; check before the transform asserts
    if ciphertext.is_empty() || ciphertext.len() % block_size != 0 {
        return Err(ToolError::Misaligned {
            len: ciphertext.len(),
            block_size,
        });
    }

    let padder = kind.padder(block_size)?;
    let mut plaintext = vec![0u8; ciphertext.len()];
    crypt(&mode, &mut plaintext, ciphertext);
    padder.unpad_in_place(&mut plaintext)?;

    info!(
        "decrypted {} bytes into {} bytes with {}-ECB",
        ciphertext.len(),
        plaintext.len(),
        kind.name()
    );
    Ok(plaintext)
}
