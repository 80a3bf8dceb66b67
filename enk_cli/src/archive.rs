//! Folder archive subsystem: standard ZIP, not the ENK container format.
//!
//! Directories get a ZIP archive so the result opens anywhere; the ENK
//! container is deliberately single-payload and has no entry index.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Recursively zip every file under `source` into `output`, with entry names
/// relative to `source`. Returns the number of files archived.
pub fn archive_folder(source: &Path, output: &Path) -> anyhow::Result<u64> {
    let file =
        File::create(output).with_context(|| format!("creating archive {output:?}"))?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0u64;
    add_dir(&mut zip, source, source, options, &mut count)?;
    zip.finish()?;
    Ok(count)
}

fn add_dir(
    zip: &mut ZipWriter<File>,
    root: &Path,
    dir: &Path,
    options: FileOptions,
    count: &mut u64,
) -> anyhow::Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("reading directory {dir:?}"))? {
        let path = entry?.path();
        if path.is_dir() {
            add_dir(zip, root, &path, options, count)?;
        } else {
            let rel = path.strip_prefix(root)?;
            zip.start_file(rel.to_string_lossy(), options)?;
            zip.write_all(&fs::read(&path)?)?;
            *count += 1;
        }
    }
    Ok(())
}

/// Extract a ZIP archive into `output`. Returns the number of entries.
pub fn extract_archive(source: &Path, output: &Path) -> anyhow::Result<u64> {
    let file = File::open(source).with_context(|| format!("opening archive {source:?}"))?;
    let mut archive = ZipArchive::new(file)?;
    let count = archive.len() as u64;
    archive
        .extract(output)
        .with_context(|| format!("extracting into {output:?}"))?;
    Ok(count)
}
