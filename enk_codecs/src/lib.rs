mod lz4_codec;
mod passthrough;
mod zlib_codec;
mod zstd_codec;

pub use lz4_codec::Lz4Codec;
pub use passthrough::PassThroughCodec;
pub use zlib_codec::ZlibCodec;
pub use zstd_codec::ZstdCodec;

use enk_core::Codec;

/// Resolve a codec from its CLI name, with default settings.
///
/// The ENK container stores no codec identifier, so the caller must supply
/// the same codec for decode that was used for encode. "zlib" is the default
/// and matches containers produced by other ENK tools.
pub fn codec_by_name(name: &str) -> anyhow::Result<Box<dyn Codec>> {
    match name {
        "zlib" | "deflate" | "z" => Ok(Box::new(ZlibCodec::default())),
        "passthrough" | "pass" | "none" => Ok(Box::new(PassThroughCodec)),
        "zstd" => Ok(Box::new(ZstdCodec::default())),
        "lz4" | "l" => Ok(Box::new(Lz4Codec)),
        other => anyhow::bail!(
            "unknown codec '{}'. Valid options: zlib, passthrough, zstd, lz4",
            other
        ),
    }
}
