// In: src/bridge/file_api.rs

//! File-level entry points: read an input file, run the stateless API on it,
//! and write the result next to its siblings in an output directory. These are
//! the calls an upload/download service makes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bridge::format::{max_artifact_size, CompressionReport};
use crate::bridge::stateless_api;
use crate::codec_pipeline::CompressedArtifact;
use crate::config::HuffpackConfig;
use crate::error::HuffpackError;

/// The outcome of `compress_file`.
#[derive(Debug, Clone, PartialEq)]
pub struct FileCompression {
    pub output_path: PathBuf,
    pub report: CompressionReport,
}

/// Compresses `input` into `<output_dir>/<stem>.<compressed_extension>`.
///
/// The report's `original_size` is the size of the file as read, before any
/// whitespace trimming. Fails with `InvalidPath` if the output would replace
/// `input` itself.
pub fn compress_file(
    input: &Path,
    output_dir: &Path,
    config: &HuffpackConfig,
) -> Result<FileCompression, HuffpackError> {
    let stem = file_stem(input)?;
    let data = read_bounded(input, config.max_input_bytes)?;

    let payload = if config.trim_trailing_whitespace {
        trim_trailing_whitespace(&data)
    } else {
        &data[..]
    };

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(format!("{}.{}", stem, config.compressed_extension));
    if output_path.exists() && fs::canonicalize(&output_path)? == fs::canonicalize(input)? {
        return Err(HuffpackError::InvalidPath(format!(
            "Compressing {} would overwrite its own input",
            input.display()
        )));
    }

    let bytes = stateless_api::compress_bytes(payload)?;
    let report = CompressionReport::new(data.len(), bytes.len());
    fs::write(&output_path, &bytes)?;

    log::info!(
        "{} -> {} ({:.2}% saved)",
        input.display(),
        output_path.display(),
        report.compression_ratio
    );

    Ok(FileCompression {
        output_path,
        report,
    })
}

/// Decompresses `input` (which must carry the configured compressed extension)
/// into `<output_dir>/<stem><decompressed_suffix>`. Returns the written path.
pub fn decompress_file(
    input: &Path,
    output_dir: &Path,
    config: &HuffpackConfig,
) -> Result<PathBuf, HuffpackError> {
    let has_extension = input
        .extension()
        .is_some_and(|ext| ext == config.compressed_extension.as_str());
    if !has_extension {
        return Err(HuffpackError::InvalidPath(format!(
            "{} does not have the .{} extension",
            input.display(),
            config.compressed_extension
        )));
    }
    let stem = file_stem(input)?;
    let bytes = read_bounded(input, max_artifact_size(config.max_input_bytes))?;

    // Refuse to materialize more than we would have accepted as input.
    let info = CompressedArtifact::peek_info(&bytes)?;
    if info.original_len > config.max_input_bytes as u64 {
        return Err(HuffpackError::InputTooLarge {
            size: usize::try_from(info.original_len).unwrap_or(usize::MAX),
            limit: config.max_input_bytes,
        });
    }

    let output = stateless_api::decompress_bytes(&bytes)?;

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(format!("{}{}", stem, config.decompressed_suffix));
    fs::write(&output_path, &output)?;

    log::info!("{} -> {}", input.display(), output_path.display());
    Ok(output_path)
}

//==================================================================================
// Private Helpers
//==================================================================================

fn file_stem(path: &Path) -> Result<String, HuffpackError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| HuffpackError::InvalidPath(format!("{} has no usable file name", path.display())))
}

fn read_bounded(path: &Path, limit: usize) -> Result<Vec<u8>, HuffpackError> {
    let size = fs::metadata(path)?.len();
    if size > limit as u64 {
        return Err(HuffpackError::InputTooLarge {
            size: usize::try_from(size).unwrap_or(usize::MAX),
            limit,
        });
    }
    Ok(fs::read(path)?)
}

fn trim_trailing_whitespace(data: &[u8]) -> &[u8] {
    let end = data
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    &data[..end]
}
