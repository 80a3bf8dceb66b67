use std::path::{Path, PathBuf};

use crate::error::{EnkError, Result};

/// Magic bytes identifying an ENK container: `0x7F` followed by `"EN"`.
pub const SIGNATURE: &[u8; 3] = b"\x7fEN";

/// Fixed size of the ENK container header in bytes.
///   signature[3] + compressed_size:u32 + uncompressed_size:u32
///   = 3 + 4 + 4 = 11
pub const HEADER_SIZE: usize = 11;

/// Conventional filename extension for ENK containers (dot included).
pub const EXTENSION: &str = ".enk";

/// Suffix appended to the input's stem when deriving an output filename.
pub const COMPRESSED_SUFFIX: &str = "_compressed";

// ── Header ─────────────────────────────────────────────────────────────────

/// Decoded representation of the 11-byte ENK container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Byte length of the compressed payload section.
    pub compressed_size: u32,
    /// Byte length of the original payload before compression.
    pub uncompressed_size: u32,
}

impl ContainerHeader {
    /// Serialize to exactly `HEADER_SIZE` bytes, little-endian.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[..3].copy_from_slice(SIGNATURE);
        buf[3..7].copy_from_slice(&self.compressed_size.to_le_bytes());
        buf[7..11].copy_from_slice(&self.uncompressed_size.to_le_bytes());
        buf
    }

    /// Deserialize from `HEADER_SIZE` bytes, checking the signature.
    pub fn from_bytes(buf: &[u8; HEADER_SIZE]) -> Result<Self> {
        if &buf[..3] != SIGNATURE {
            return Err(EnkError::BadSignature);
        }
        Ok(Self {
            compressed_size: u32::from_le_bytes([buf[3], buf[4], buf[5], buf[6]]),
            uncompressed_size: u32::from_le_bytes([buf[7], buf[8], buf[9], buf[10]]),
        })
    }

    /// Total container length implied by this header.
    pub fn container_len(&self) -> usize {
        HEADER_SIZE + self.compressed_size as usize
    }
}

// ── Filename convention ────────────────────────────────────────────────────

/// Derive the conventional container path for `input`:
/// `dir/name.ext` → `dir/name_compressed.enk`.
pub fn compressed_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or_else(|| input.as_os_str())
        .to_os_string();
    let mut name = stem;
    name.push(COMPRESSED_SUFFIX);
    name.push(EXTENSION);
    input.with_file_name(name)
}
