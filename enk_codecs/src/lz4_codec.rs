use lz4_flex::{compress_prepend_size, decompress_size_prepended};

use enk_core::codec::Codec;
use enk_core::error::{EnkError, Result};

/// LZ4 codec.
///
/// Fastest decompression of the bundled codecs. The lz4_flex frame prepends
/// the raw length, so the stream is self-delimiting like the zlib default.
///
/// Best for: hot data where decode speed matters more than ratio.
pub struct Lz4Codec;

impl Codec for Lz4Codec {
    fn name(&self) -> &'static str {
        "lz4"
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        Ok(compress_prepend_size(raw))
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        decompress_size_prepended(compressed)
            .map_err(|e| EnkError::DecompressionFailed(e.to_string()))
    }
}
