//! Hex file input and output

use std::fs;

use crate::error::{Result, ToolError};

/// Reads a file of hexadecimal digits. Whitespace and line breaks are ignored.
pub fn read_hex_from_file(path: &str) -> Result<Vec<u8>> {
    let content = fs::read_to_string(path).map_err(|source| ToolError::Read {
        path: path.to_string(),
        source,
    })?;
    parse_hex(&content)
}

pub fn parse_hex(content: &str) -> Result<Vec<u8>> {
    let hex_string: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(hex_string)?)
}

/// Writes bytes as lowercase hex pairs separated by single spaces.
pub fn write_hex_to_file(path: &str, data: &[u8]) -> Result<()> {
    fs::write(path, format_hex(data)).map_err(|source| ToolError::Write {
        path: path.to_string(),
        source,
    })
}

pub fn format_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn read_file(path: &str) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| ToolError::Read {
        path: path.to_string(),
        source,
    })
}

pub fn write_file(path: &str, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|source| ToolError::Write {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[0x0a, 0xff, 0x00]), "0a ff 00");
        assert_eq!(format_hex(&[]), "");
    }

    #[test]
    fn test_parse_hex_ignores_whitespace() {
        let bytes = parse_hex("0A 0b\n0c\t0D\r\n").unwrap();
        assert_eq!(bytes, [0x0a, 0x0b, 0x0c, 0x0d]);
    }

    #[test]
    fn test_parse_hex_rejects_odd_length() {
        assert!(matches!(parse_hex("abc"), Err(ToolError::Hex(_))));
    }

    #[test]
    fn test_parse_hex_rejects_non_hex() {
        assert!(matches!(parse_hex("zz"), Err(ToolError::Hex(_))));
    }

    #[test]
    fn test_hex_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.hex");
        let path = path.to_str().unwrap();

        write_hex_to_file(path, &[1, 2, 254, 255]).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "01 02 fe ff");
        assert_eq!(read_hex_from_file(path).unwrap(), [1, 2, 254, 255]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.hex");
        let result = read_hex_from_file(path.to_str().unwrap());
        assert!(matches!(result, Err(ToolError::Read { .. })));
    }
}
