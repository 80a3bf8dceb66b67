//! The container codec: framing and unframing of single compressed payloads.
//!
//! # Layout (little-endian)
//! ```text
//! [SIGNATURE: 3 bytes — 0x7F 'E' 'N']
//! [compressed_size:   u32 LE]
//! [uncompressed_size: u32 LE]
//! [compressed_payload: compressed_size bytes]
//! ```
//!
//! Both operations are pure transformations over byte slices. Reading the
//! source file and writing the container file belong to the caller, which
//! keeps independent encode/decode calls embarrassingly parallel.

use crate::codec::Codec;
use crate::error::{EnkError, Result};
use crate::format::{ContainerHeader, HEADER_SIZE};

/// Compress `raw` with `codec` and frame it as an ENK container.
///
/// Fails with [`EnkError::SizeOverflow`] if either the raw or the compressed
/// length does not fit the format's u32 size fields (~4 GiB).
pub fn encode(codec: &dyn Codec, raw: &[u8]) -> Result<Vec<u8>> {
    let compressed = codec.compress(raw)?;

    let uncompressed_size =
        u32::try_from(raw.len()).map_err(|_| EnkError::SizeOverflow(raw.len()))?;
    let compressed_size =
        u32::try_from(compressed.len()).map_err(|_| EnkError::SizeOverflow(compressed.len()))?;

    let header = ContainerHeader {
        compressed_size,
        uncompressed_size,
    };

    let mut out = Vec::with_capacity(HEADER_SIZE + compressed.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(&compressed);
    Ok(out)
}

/// Unframe `container` and decompress its payload back to the original bytes.
///
/// Validation order, each check independent and fail-fast:
/// 1. `container.len() >= 11`, else [`EnkError::TruncatedHeader`].
/// 2. Signature match, else [`EnkError::BadSignature`].
/// 3. Remaining bytes cover the declared `compressed_size`, else
///    [`EnkError::TruncatedPayload`].
///
/// After decompression the result length is checked against the stored
/// `uncompressed_size`; a disagreement is [`EnkError::SizeMismatch`], so a
/// corrupted payload can never yield a silently wrong result. Bytes past the
/// declared payload are ignored.
///
/// The payload is opaque binary end-to-end; no text decoding is applied.
pub fn decode(codec: &dyn Codec, container: &[u8]) -> Result<Vec<u8>> {
    if container.len() < HEADER_SIZE {
        return Err(EnkError::TruncatedHeader {
            len: container.len(),
        });
    }

    let mut header_buf = [0u8; HEADER_SIZE];
    header_buf.copy_from_slice(&container[..HEADER_SIZE]);
    let header = ContainerHeader::from_bytes(&header_buf)?;

    let payload = &container[HEADER_SIZE..];
    let declared = header.compressed_size as usize;
    if payload.len() < declared {
        return Err(EnkError::TruncatedPayload {
            declared: header.compressed_size,
            available: payload.len(),
        });
    }

    let raw = codec.decompress(&payload[..declared])?;

    if raw.len() != header.uncompressed_size as usize {
        return Err(EnkError::SizeMismatch {
            expected: header.uncompressed_size,
            actual: raw.len(),
        });
    }

    Ok(raw)
}
