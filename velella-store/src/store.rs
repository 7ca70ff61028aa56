//! The record store contract and id minting.

use rand::Rng;

use velella_core::Result;

use crate::record::{RecordSummary, SequenceRecord};

/// Keyed storage for sequence records and their compressed artifacts.
///
/// Implementations guarantee read-your-writes consistency and that each
/// individual operation is atomic from the caller's perspective; a single
/// store-wide mutual-exclusion scope is sufficient, and is what both bundled
/// implementations use. No record with invalid content can ever exist in a
/// store: all content enters through [`DnaSequence`] validation.
///
/// [`DnaSequence`]: velella_seq::DnaSequence
pub trait RecordStore: Send + Sync {
    /// Validate `raw`, mint a fresh unique id, and persist the canonical
    /// uppercase content with no artifact.
    fn create(&self, raw: &str) -> Result<SequenceRecord>;

    /// Fetch the record for `id`.
    fn read(&self, id: &str) -> Result<SequenceRecord>;

    /// Overwrite the content for `id` (the id is unchanged) and drop any
    /// compressed artifact. Returns the new length.
    fn replace(&self, id: &str, raw: &str) -> Result<usize>;

    /// Remove the record and any artifact for `id`.
    fn delete(&self, id: &str) -> Result<()>;

    /// Summaries of all records, most recently modified first.
    ///
    /// An unreadable entry degrades to a summary with absent content fields
    /// instead of failing the whole listing.
    fn list(&self) -> Result<Vec<RecordSummary>>;

    /// Attach (or overwrite) the compressed artifact for `id`.
    fn put_artifact(&self, id: &str, artifact: &[u8]) -> Result<()>;

    /// Fetch the compressed artifact for `id`.
    fn artifact(&self, id: &str) -> Result<Vec<u8>>;

    /// Whether an artifact currently exists for `id`.
    fn has_artifact(&self, id: &str) -> bool;
}

/// Mint a random 8-hex-character id, retrying while `taken` reports a
/// collision. Ids are never reused for the lifetime of a store.
pub(crate) fn mint_id(taken: impl Fn(&str) -> bool) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let id = format!("{:08x}", rng.gen::<u32>());
        if !taken(&id) {
            return id;
        }
    }
}
