use crate::error::Result;

/// Core compression abstraction.
///
/// Each `Codec` implementation is a stateless `{compress, decompress}` pair
/// owned by the container codec for the duration of a single call:
/// - `compress` must be deterministic for identical input and must accept any
///   byte sequence, including empty or incompressible data (worst case the
///   output is the input plus stream overhead).
/// - `decompress` must be the exact inverse of `compress` for every stream
///   `compress` can produce, and must reject malformed or truncated streams
///   with [`EnkError::DecompressionFailed`].
///
/// The container stores no codec identifier, so decoding must be given the
/// same codec that produced the container. Substituting a different algorithm
/// changes only the payload bytes, never the framing.
///
/// [`EnkError::DecompressionFailed`]: crate::error::EnkError::DecompressionFailed
pub trait Codec: Send + Sync {
    /// Human-readable codec name for CLI display.
    fn name(&self) -> &'static str;

    /// Transform raw bytes into a self-delimiting compressed stream.
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>>;

    /// Recover the original bytes from a stream produced by [`compress`].
    ///
    /// [`compress`]: Codec::compress
    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>>;
}
