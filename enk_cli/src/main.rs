use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use enk_codecs::{Lz4Codec, PassThroughCodec, ZlibCodec, ZstdCodec};
use enk_core::format::compressed_output_path;
use enk_core::{decode, encode, Codec, HEADER_SIZE};

mod archive;
mod imaging;

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "enk",
    about = "Compress single files into ENK containers, resize images, and zip folders",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into an ENK container
    Compress {
        /// Source file to compress
        input: PathBuf,
        /// Destination container (default: <stem>_compressed.enk next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Codec to use: zlib | passthrough | zstd | lz4
        #[arg(short, long, default_value = "zlib")]
        codec: String,
        /// Zlib compression level (0–9, only used with --codec zlib)
        #[arg(long, default_value_t = 6)]
        zlib_level: u32,
        /// Zstd compression level (1–22, only used with --codec zstd)
        #[arg(long, default_value_t = 3)]
        zstd_level: i32,
    },
    /// Decompress an ENK container back to the original file
    Decompress {
        /// Source ENK container
        input: PathBuf,
        /// Destination file, with the original extension
        #[arg(short, long)]
        output: PathBuf,
        /// Codec the container was compressed with
        #[arg(short, long, default_value = "zlib")]
        codec: String,
    },
    /// Resize and/or re-encode an image (JPEG quality, ratio, or exact size)
    Image {
        /// Source image
        input: PathBuf,
        /// Resize ratio between 0 and 1; 0.5 halves width and height
        #[arg(short, long, default_value_t = 1.0)]
        ratio: f32,
        /// JPEG quality from 0 (worst) to 95 (best)
        #[arg(short, long, default_value_t = 90, value_parser = clap::value_parser!(u8).range(0..=95))]
        quality: u8,
        /// New width; must be set together with --height
        #[arg(long)]
        width: Option<u32>,
        /// New height; must be set together with --width
        #[arg(long)]
        height: Option<u32>,
        /// Convert the output to JPEG
        #[arg(short = 'j', long)]
        to_jpg: bool,
    },
    /// Recursively zip a folder into a standard ZIP archive
    Archive {
        /// Source directory
        folder: PathBuf,
        /// Destination .zip file
        output: PathBuf,
    },
    /// Extract a ZIP archive into a directory
    Extract {
        /// Source .zip file
        archive: PathBuf,
        /// Destination directory
        output: PathBuf,
    },
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn codec_from_name(name: &str, zlib_level: u32, zstd_level: i32) -> anyhow::Result<Box<dyn Codec>> {
    match name {
        "zlib" | "deflate" | "z" => Ok(Box::new(ZlibCodec::new(zlib_level))),
        "passthrough" | "pass" | "none" => Ok(Box::new(PassThroughCodec)),
        "zstd" => Ok(Box::new(ZstdCodec::new(zstd_level))),
        "lz4" | "l" => Ok(Box::new(Lz4Codec)),
        other => anyhow::bail!(
            "unknown codec '{}'. Valid options: zlib, passthrough, zstd, lz4",
            other
        ),
    }
}

pub(crate) fn human_bytes(n: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", n)
    } else {
        format!("{:.2} {}", v, UNITS[unit])
    }
}

// ── Subcommand implementations ─────────────────────────────────────────────

fn run_compress(
    input: PathBuf,
    output: Option<PathBuf>,
    codec_name: &str,
    zlib_level: u32,
    zstd_level: i32,
) -> anyhow::Result<()> {
    let codec = codec_from_name(codec_name, zlib_level, zstd_level)?;
    let output = output.unwrap_or_else(|| compressed_output_path(&input));

    let raw = fs::read(&input).with_context(|| format!("reading input file {input:?}"))?;

    let t0 = Instant::now();
    let container = encode(codec.as_ref(), &raw)
        .with_context(|| format!("encoding {input:?} with codec '{}'", codec.name()))?;
    let elapsed = t0.elapsed();

    fs::write(&output, &container)
        .with_context(|| format!("writing output file {output:?}"))?;

    let ratio = raw.len() as f64 / container.len() as f64;
    eprintln!("  codec       : {}", codec.name());
    eprintln!("  raw size    : {}", human_bytes(raw.len() as u64));
    eprintln!(
        "  compressed  : {} ({} payload + {} header)",
        human_bytes(container.len() as u64),
        human_bytes((container.len() - HEADER_SIZE) as u64),
        HEADER_SIZE
    );
    eprintln!("  ratio       : {:.2}x", ratio);
    eprintln!("  elapsed     : {:.3}s", elapsed.as_secs_f64());
    eprintln!("  written to  : {:?}", output);
    Ok(())
}

fn run_decompress(input: PathBuf, output: PathBuf, codec_name: &str) -> anyhow::Result<()> {
    let codec = codec_from_name(codec_name, 6, 3)?;

    let container = fs::read(&input).with_context(|| format!("reading container {input:?}"))?;

    let t0 = Instant::now();
    let raw = decode(codec.as_ref(), &container)
        .with_context(|| format!("decoding {input:?} with codec '{}'", codec.name()))?;
    let elapsed = t0.elapsed();

    // Only write after a fully successful decode; a failed decode must not
    // leave a truncated output file behind.
    fs::write(&output, &raw).with_context(|| format!("writing output file {output:?}"))?;

    eprintln!("  codec       : {}", codec.name());
    eprintln!("  container   : {}", human_bytes(container.len() as u64));
    eprintln!("  raw size    : {}", human_bytes(raw.len() as u64));
    eprintln!("  elapsed     : {:.3}s", elapsed.as_secs_f64());
    eprintln!("  written to  : {:?}", output);
    Ok(())
}

fn run_image(
    input: PathBuf,
    ratio: f32,
    quality: u8,
    width: Option<u32>,
    height: Option<u32>,
    to_jpg: bool,
) -> anyhow::Result<()> {
    if width.is_some() != height.is_some() {
        anyhow::bail!("--width and --height must be set together");
    }
    let opts = imaging::ImageOptions {
        ratio,
        quality,
        width,
        height,
        to_jpg,
    };
    let output = imaging::recompress(&input, &opts)?;
    eprintln!("  written to  : {:?}", output);
    Ok(())
}

fn run_archive(folder: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    if !folder.is_dir() {
        anyhow::bail!("{:?} is not a directory", folder);
    }
    let t0 = Instant::now();
    let count = archive::archive_folder(&folder, &output)?;
    let size = fs::metadata(&output)?.len();
    eprintln!("  files       : {}", count);
    eprintln!("  archive     : {}", human_bytes(size));
    eprintln!("  elapsed     : {:.3}s", t0.elapsed().as_secs_f64());
    eprintln!("  written to  : {:?}", output);
    Ok(())
}

fn run_extract(archive_path: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    let t0 = Instant::now();
    let count = archive::extract_archive(&archive_path, &output)?;
    eprintln!("  entries     : {}", count);
    eprintln!("  elapsed     : {:.3}s", t0.elapsed().as_secs_f64());
    eprintln!("  extracted to: {:?}", output);
    Ok(())
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Compress {
            input,
            output,
            codec,
            zlib_level,
            zstd_level,
        } => run_compress(input, output, &codec, zlib_level, zstd_level),
        Commands::Decompress {
            input,
            output,
            codec,
        } => run_decompress(input, output, &codec),
        Commands::Image {
            input,
            ratio,
            quality,
            width,
            height,
            to_jpg,
        } => run_image(input, ratio, quality, width, height, to_jpg),
        Commands::Archive { folder, output } => run_archive(folder, output),
        Commands::Extract { archive, output } => run_extract(archive, output),
    }
}
