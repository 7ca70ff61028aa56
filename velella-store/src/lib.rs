//! Sequence record storage and id-resolving engines for Velella.
//!
//! This crate owns sequence identity and the relationship between a raw
//! record and its optional compressed artifact:
//!
//! - [`RecordStore`] — the keyed storage contract (create, read, replace,
//!   delete, list, plus artifact plumbing)
//! - [`MemoryStore`] / [`DirStore`] — bundled implementations
//! - [`compressor`] — compress/decompress with lossless verification
//! - [`analyzer`] — GC content, per-base frequency, and motif search
//!   resolved through the store
//!
//! # Example
//!
//! ```
//! use velella_store::{analyzer, compressor, CompressionOptions, MemoryStore, RecordStore};
//!
//! # fn main() -> velella_core::Result<()> {
//! let store = MemoryStore::new();
//! let record = store.create("attcgATCG")?;
//! assert_eq!(record.length(), 9);
//!
//! let gc = analyzer::gc_content(&store, &record.id)?;
//! assert!((gc.gc_percent - 44.444).abs() < 1e-9);
//!
//! compressor::compress(&store, &record.id, &CompressionOptions::default())?;
//! let restored = compressor::decompress(&store, &record.id)?;
//! assert!(restored.lossless_verified);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod compressor;
pub mod dir;
pub mod memory;
pub mod record;
pub mod store;

pub use compressor::{CompressionOptions, CompressionReport, DecompressionReport};
pub use dir::DirStore;
pub use memory::MemoryStore;
pub use record::{RecordSummary, SequenceRecord};
pub use store::RecordStore;
