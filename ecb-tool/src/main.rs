//! ECB command-line tool
//!
//! Encrypts and decrypts files with AES or Blowfish in ECB mode. AES pads
//! with PKCS#7, Blowfish with PKCS#5. Ciphertext files are hex, plaintext
//! files are raw bytes.
//!
//! Without `--mode` the tool encrypts a fixed sample text and decrypts it
//! again, printing both steps.

mod codec;
mod error;
mod pipeline;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use crate::error::{Result, ToolError};
use crate::pipeline::CipherKind;

const EXAMPLE_PLAINTEXT: &str = "Some plain text";

/// Command-line arguments for the ECB tool.
#[derive(Parser, Debug)]
#[command(version, about = "Block cipher encryption in ECB mode with PKCS padding")]
struct Cli {
    /// Block cipher to use.
    #[arg(short, long, value_enum, help = "Block cipher (aes/blowfish)")]
    cipher: CipherKind,

    /// Key for the cipher, taken byte for byte from the argument.
    #[arg(short, long, help = "Key for the cipher")]
    key: Option<String>,

    /// Mode of operation (encrypt or decrypt).
    #[arg(
        short,
        long,
        requires_all = ["file", "output"],
        help = "Mode of operation (encrypt/decrypt); runs the built-in example if omitted"
    )]
    mode: Option<OperationMode>,

    /// Path to the input file.
    #[arg(short, long, help = "Path to the input file")]
    file: Option<String>,

    /// Path to the output file.
    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OperationMode {
    /// Encrypt mode.
    Encrypt,
    /// Decrypt mode.
    Decrypt,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let key = cli
        .key
        .as_deref()
        .unwrap_or_else(|| cli.cipher.default_key())
        .as_bytes();

    let mode = match cli.mode {
        Some(mode) => mode,
        None => return example(cli.cipher, key),
    };
    let file = cli.file.as_deref().ok_or(ToolError::MissingArgument("--file"))?;
    let output = cli.output.as_deref().ok_or(ToolError::MissingArgument("--output"))?;

    match mode {
        OperationMode::Encrypt => {
            info!("encrypting {} with {}", file, cli.cipher.name());
            let plaintext = codec::read_file(file)?;
            let ciphertext = pipeline::encrypt(cli.cipher, key, &plaintext)?;
            codec::write_hex_to_file(output, &ciphertext)?;
        }
        OperationMode::Decrypt => {
            info!("decrypting {} with {}", file, cli.cipher.name());
            let ciphertext = codec::read_hex_from_file(file)?;
            let plaintext = pipeline::decrypt(cli.cipher, key, &ciphertext)?;
            codec::write_file(output, &plaintext)?;
        }
    }

    println!("Operation completed successfully! Output saved to: {}", output);
    Ok(())
}

/// Encrypts the sample text and decrypts it back.
fn example(kind: CipherKind, key: &[u8]) -> Result<()> {
    let padding = match kind {
        CipherKind::Aes => "PKCS7",
        CipherKind::Blowfish => "PKCS5",
    };
    println!("{} encryption with ECB and {} padding", kind.name(), padding);

    let ciphertext = pipeline::encrypt(kind, key, EXAMPLE_PLAINTEXT.as_bytes())?;
    println!("Ciphertext: {}", hex::encode(&ciphertext));

    let recovered = pipeline::decrypt(kind, key, &ciphertext)?;
    println!("Recovered plaintext: {}", String::from_utf8_lossy(&recovered));
    Ok(())
}
