//! Store-level compression engine.
//!
//! The compressed artifact is a derived, recomputable projection of the raw
//! record, never the system of record. Replacing or deleting a record drops
//! its artifact; recompressing overwrites it.

use log::debug;

use velella_core::compress::{self, Algorithm};
use velella_core::{Result, Sequence};

use crate::store::RecordStore;

/// Characters of reconstructed content shown in a decompression preview.
const DECOMPRESS_PREVIEW_CHARS: usize = 100;

/// Codec selection for [`compress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressionOptions {
    pub algorithm: Algorithm,
    /// Codec-specific level: 0–9 for gzip, 1–22 for zstd.
    pub level: u32,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Gzip,
            level: compress::DEFAULT_GZIP_LEVEL,
        }
    }
}

/// Byte sizes of a freshly written artifact.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressionReport {
    pub original_size: usize,
    pub compressed_size: usize,
    /// `compressed_size / original_size`, rounded to 3 decimals.
    pub ratio: f64,
}

/// The outcome of reconstructing a record from its artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecompressionReport {
    /// First 100 characters of the reconstruction, `...`-suffixed if longer.
    pub preview: String,
    pub length: usize,
    /// Whether the reconstruction is byte-identical to the current raw.
    /// `false` when no current raw exists to verify against.
    pub lossless_verified: bool,
}

/// Compress the record for `id` and persist the artifact under the same id.
///
/// Compressing twice recomputes and replaces the artifact.
pub fn compress(
    store: &dyn RecordStore,
    id: &str,
    options: &CompressionOptions,
) -> Result<CompressionReport> {
    let record = store.read(id)?;
    let raw = record.seq.as_bytes();
    let artifact = match options.algorithm {
        Algorithm::Gzip => compress::gzip_compress(raw, options.level)?,
        Algorithm::Zstd => compress::zstd_compress(raw, options.level as i32)?,
    };
    store.put_artifact(id, &artifact)?;
    let report = CompressionReport {
        original_size: raw.len(),
        compressed_size: artifact.len(),
        ratio: compress::compression_ratio(raw.len(), artifact.len()),
    };
    debug!(
        "compressed {id}: {} -> {} bytes (ratio {})",
        report.original_size, report.compressed_size, report.ratio
    );
    Ok(report)
}

/// Reconstruct the sequence from the artifact stored for `id`.
///
/// Succeeds whenever an artifact exists, even if the raw record has gone
/// away out-of-band; verification then simply cannot be performed.
pub fn decompress(store: &dyn RecordStore, id: &str) -> Result<DecompressionReport> {
    let artifact = store.artifact(id)?;
    let restored = compress::decompress(&artifact)?;

    let lossless_verified = match store.read(id) {
        Ok(record) => record.seq.as_bytes() == restored.as_slice(),
        Err(_) => false,
    };

    let length = restored.len();
    let end = length.min(DECOMPRESS_PREVIEW_CHARS);
    let head = String::from_utf8_lossy(&restored[..end]);
    let preview = if length > DECOMPRESS_PREVIEW_CHARS {
        format!("{head}...")
    } else {
        head.into_owned()
    };

    debug!("decompressed {id}: {length} bytes, verified={lossless_verified}");
    Ok(DecompressionReport {
        preview,
        length,
        lossless_verified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use velella_core::VelellaError;

    #[test]
    fn compress_then_decompress_is_lossless() {
        let store = MemoryStore::new();
        let record = store.create("attcgATCGattcgATCG").unwrap();

        let report = compress(&store, &record.id, &CompressionOptions::default()).unwrap();
        assert_eq!(report.original_size, 18);
        assert!(report.compressed_size > 0);
        assert_eq!(
            report.ratio,
            compress::compression_ratio(report.original_size, report.compressed_size)
        );

        let restored = decompress(&store, &record.id).unwrap();
        assert!(restored.lossless_verified);
        assert_eq!(restored.length, 18);
        assert_eq!(restored.preview, "ATTCGATCGATTCGATCG");
    }

    #[test]
    fn zstd_artifacts_round_trip_too() {
        let store = MemoryStore::new();
        let record = store.create(&"ACGT".repeat(50)).unwrap();

        let options = CompressionOptions {
            algorithm: Algorithm::Zstd,
            level: 3,
        };
        compress(&store, &record.id, &options).unwrap();

        let restored = decompress(&store, &record.id).unwrap();
        assert!(restored.lossless_verified);
        assert_eq!(restored.length, 200);
    }

    #[test]
    fn preview_truncates_at_one_hundred_characters() {
        let store = MemoryStore::new();
        let record = store.create(&"ACGT".repeat(50)).unwrap();
        compress(&store, &record.id, &CompressionOptions::default()).unwrap();

        let restored = decompress(&store, &record.id).unwrap();
        assert_eq!(restored.length, 200);
        assert_eq!(restored.preview.len(), 103);
        assert!(restored.preview.ends_with("..."));
        assert!(restored.preview.starts_with("ACGTACGT"));
    }

    #[test]
    fn compress_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            compress(&store, "deadbeef", &CompressionOptions::default()),
            Err(VelellaError::NotFound(_))
        ));
    }

    #[test]
    fn decompress_without_artifact_fails() {
        let store = MemoryStore::new();
        let record = store.create("ACGT").unwrap();
        assert!(matches!(
            decompress(&store, &record.id),
            Err(VelellaError::ArtifactNotFound(_))
        ));
    }

    #[test]
    fn recompression_replaces_the_artifact() {
        let store = MemoryStore::new();
        let record = store.create(&"ACGT".repeat(20)).unwrap();

        compress(&store, &record.id, &CompressionOptions::default()).unwrap();
        let gzip_artifact = store.artifact(&record.id).unwrap();

        let options = CompressionOptions {
            algorithm: Algorithm::Zstd,
            level: 3,
        };
        compress(&store, &record.id, &options).unwrap();
        let zstd_artifact = store.artifact(&record.id).unwrap();

        assert_ne!(gzip_artifact, zstd_artifact);
        assert!(decompress(&store, &record.id).unwrap().lossless_verified);
    }

    #[test]
    fn replace_invalidates_the_artifact() {
        let store = MemoryStore::new();
        let record = store.create("ACGTACGT").unwrap();
        compress(&store, &record.id, &CompressionOptions::default()).unwrap();

        store.replace(&record.id, "TTTTTTTT").unwrap();
        assert!(matches!(
            decompress(&store, &record.id),
            Err(VelellaError::ArtifactNotFound(_))
        ));
    }

    #[test]
    fn decompress_without_current_raw_is_unverified() {
        use crate::dir::DirStore;

        let dir = tempfile::TempDir::new().unwrap();
        let store = DirStore::open(dir.path()).unwrap();
        let record = store.create("GATTACAGATTACA").unwrap();
        compress(&store, &record.id, &CompressionOptions::default()).unwrap();

        // Remove the raw content file out-of-band; the artifact survives.
        std::fs::remove_file(dir.path().join(format!("{}.seq", record.id))).unwrap();

        let restored = decompress(&store, &record.id).unwrap();
        assert!(!restored.lossless_verified);
        assert_eq!(restored.length, 14);
        assert_eq!(restored.preview, "GATTACAGATTACA");
    }

    #[test]
    fn empty_record_compresses_with_zero_ratio() {
        let store = MemoryStore::new();
        let record = store.create("").unwrap();

        let report = compress(&store, &record.id, &CompressionOptions::default()).unwrap();
        assert_eq!(report.original_size, 0);
        assert!(report.compressed_size > 0);
        assert_eq!(report.ratio, 0.0);

        let restored = decompress(&store, &record.id).unwrap();
        assert!(restored.lossless_verified);
        assert_eq!(restored.length, 0);
        assert_eq!(restored.preview, "");
    }
}
