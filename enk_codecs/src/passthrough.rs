use enk_core::codec::Codec;
use enk_core::error::Result;

/// No-op codec: stores the payload verbatim, with no compression.
///
/// Useful for:
/// - Verifying the container framing independently of any codec.
/// - Data that is already compressed (e.g., JPEG, MP4) where further
///   compression would expand the payload.
pub struct PassThroughCodec;

impl Codec for PassThroughCodec {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        Ok(raw.to_vec())
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        Ok(compressed.to_vec())
    }
}
