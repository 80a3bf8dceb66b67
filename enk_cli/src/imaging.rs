//! Image resize / re-encode subsystem.
//!
//! Not the ENK container format: images go through the `image` crate and come
//! back out as ordinary image files, optionally converted to JPEG at a chosen
//! quality. The ENK framing would only add overhead on already-compressed
//! image data.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;

pub struct ImageOptions {
    /// Uniform resize ratio; applied when < 1.0.
    pub ratio: f32,
    /// JPEG quality, 0 (worst) to 95 (best).
    pub quality: u8,
    /// Absolute target width; only used together with `height`.
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Re-encode as JPEG regardless of the input format.
    pub to_jpg: bool,
}

/// Resize and/or re-encode the image at `input`, writing the result next to
/// it as `name_compressed.jpg` (or `name_compressed.<ext>` when keeping the
/// original format). Returns the output path.
pub fn recompress(input: &Path, opts: &ImageOptions) -> anyhow::Result<PathBuf> {
    let mut img = image::open(input).with_context(|| format!("opening image {input:?}"))?;
    let input_size = fs::metadata(input)?.len();
    let (w, h) = img.dimensions();
    eprintln!("  dimensions  : {}x{}", w, h);

    if opts.ratio < 1.0 {
        let nw = ((w as f32 * opts.ratio) as u32).max(1);
        let nh = ((h as f32 * opts.ratio) as u32).max(1);
        img = img.resize_exact(nw, nh, FilterType::Lanczos3);
        eprintln!("  resized to  : {}x{}", nw, nh);
    } else if let (Some(nw), Some(nh)) = (opts.width, opts.height) {
        img = img.resize_exact(nw, nh, FilterType::Lanczos3);
        eprintln!("  resized to  : {}x{}", nw, nh);
    }

    let stem = input
        .file_stem()
        .context("input path has no file name")?
        .to_string_lossy()
        .into_owned();

    let output = if opts.to_jpg {
        input.with_file_name(format!("{stem}_compressed.jpg"))
    } else {
        let ext = input
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        input.with_file_name(format!("{stem}_compressed{ext}"))
    };

    if opts.to_jpg {
        // JPEG has no alpha channel; flatten to RGB first.
        let rgb = img.to_rgb8();
        let file =
            File::create(&output).with_context(|| format!("creating output file {output:?}"))?;
        let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), opts.quality);
        encoder
            .encode_image(&rgb)
            .with_context(|| format!("encoding JPEG {output:?}"))?;
    } else {
        img.save(&output)
            .with_context(|| format!("saving image {output:?}"))?;
    }

    let output_size = fs::metadata(&output)?.len();
    let diff = output_size as f64 - input_size as f64;
    eprintln!("  input size  : {}", crate::human_bytes(input_size));
    eprintln!("  output size : {}", crate::human_bytes(output_size));
    eprintln!("  change      : {:+.2}%", diff / input_size as f64 * 100.0);

    Ok(output)
}
