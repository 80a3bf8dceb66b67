//! Error types for the ENK container format.

use thiserror::Error;

/// ENK error kinds.
///
/// Every failure is returned to the caller as a typed, recoverable value;
/// the codec never partially writes into caller-owned buffers and never
/// retries internally.
#[derive(Debug, Error)]
pub enum EnkError {
    /// Input does not start with the ENK signature bytes.
    #[error("input does not start with the ENK signature bytes")]
    BadSignature,
    /// Input is shorter than the 11-byte container header.
    #[error("container truncated: {len} bytes is shorter than the 11-byte header")]
    TruncatedHeader { len: usize },
    /// Input ends before the declared compressed payload does.
    #[error("container truncated: header declares {declared} payload bytes but only {available} remain")]
    TruncatedPayload { declared: u32, available: usize },
    /// Decompressed length disagrees with the stored uncompressed size.
    #[error("decompressed to {actual} bytes but header says {expected}")]
    SizeMismatch { expected: u32, actual: usize },
    /// Underlying compression algorithm rejected the stream.
    #[error("decompression failed: {0}")]
    DecompressionFailed(String),
    /// Payload length exceeds the capacity of the u32 size fields.
    #[error("payload of {0} bytes exceeds the 32-bit size field")]
    SizeOverflow(usize),
    /// I/O operation failed inside a codec.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EnkError>;
