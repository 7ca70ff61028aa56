//! Compression utilities with algorithm auto-detection.

use std::io::{Read, Write};

use crate::{Result, VelellaError};

/// Supported compression algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Gzip,
    Zstd,
}

/// Default gzip compression level.
pub const DEFAULT_GZIP_LEVEL: u32 = 6;

/// Compress data using gzip at the given level (0–9).
pub fn gzip_compress(data: &[u8], level: u32) -> Result<Vec<u8>> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(data)
        .map_err(|e| VelellaError::Compression(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| VelellaError::Compression(e.to_string()))
}

/// Decompress gzip data.
pub fn gzip_decompress(data: &[u8]) -> Result<Vec<u8>> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| VelellaError::Compression(e.to_string()))?;
    Ok(decompressed)
}

/// Compress data using zstd at the given level (1–22).
pub fn zstd_compress(data: &[u8], level: i32) -> Result<Vec<u8>> {
    zstd::encode_all(data, level).map_err(|e| VelellaError::Compression(e.to_string()))
}

/// Decompress zstd data.
pub fn zstd_decompress(data: &[u8]) -> Result<Vec<u8>> {
    zstd::decode_all(data).map_err(|e| VelellaError::Compression(e.to_string()))
}

/// Detect the compression algorithm from the magic bytes of `data`.
///
/// Returns `None` if the data does not match a known format.
pub fn detect_algorithm(data: &[u8]) -> Option<Algorithm> {
    if data.len() >= 4 && data[..4] == [0x28, 0xB5, 0x2F, 0xFD] {
        Some(Algorithm::Zstd)
    } else if data.len() >= 2 && data[..2] == [0x1F, 0x8B] {
        Some(Algorithm::Gzip)
    } else {
        None
    }
}

/// Decompress data by auto-detecting the algorithm from magic bytes.
///
/// Returns an error if the format is unrecognised.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    match detect_algorithm(data) {
        Some(Algorithm::Gzip) => gzip_decompress(data),
        Some(Algorithm::Zstd) => zstd_decompress(data),
        None => Err(VelellaError::Compression(
            "unknown compression format".into(),
        )),
    }
}

/// Compressed-to-original size ratio, rounded to 3 decimal places.
///
/// An empty original reports 0.0 rather than dividing by zero.
pub fn compression_ratio(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let ratio = compressed as f64 / original as f64;
    (ratio * 1000.0).round() / 1000.0
}
