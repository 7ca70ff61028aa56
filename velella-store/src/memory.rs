//! In-memory record store.
//!
//! The injectable fake for unit tests, and a perfectly serviceable backing
//! for small deployments. Listing order is tracked with a monotonically
//! increasing revision stamped on every create/replace.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use log::debug;

use velella_core::{Result, Sequence, Summarizable, VelellaError};
use velella_seq::DnaSequence;

use crate::record::{RecordSummary, SequenceRecord, LIST_PREVIEW_BASES};
use crate::store::{mint_id, RecordStore};

#[derive(Debug)]
struct Entry {
    seq: DnaSequence,
    artifact: Option<Vec<u8>>,
    revision: u64,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<String, Entry>,
    next_revision: u64,
}

impl Inner {
    fn bump(&mut self) -> u64 {
        self.next_revision += 1;
        self.next_revision
    }
}

/// Thread-safe in-memory implementation of [`RecordStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("store mutex poisoned")
    }
}

impl RecordStore for MemoryStore {
    fn create(&self, raw: &str) -> Result<SequenceRecord> {
        let seq = DnaSequence::new(raw)?;
        let mut inner = self.guard();
        let id = mint_id(|candidate| inner.records.contains_key(candidate));
        let revision = inner.bump();
        inner.records.insert(
            id.clone(),
            Entry {
                seq: seq.clone(),
                artifact: None,
                revision,
            },
        );
        let record = SequenceRecord::new(id, seq);
        debug!("created {}", record.summary());
        Ok(record)
    }

    fn read(&self, id: &str) -> Result<SequenceRecord> {
        let inner = self.guard();
        let entry = inner
            .records
            .get(id)
            .ok_or_else(|| VelellaError::NotFound(id.into()))?;
        Ok(SequenceRecord::new(id, entry.seq.clone()))
    }

    fn replace(&self, id: &str, raw: &str) -> Result<usize> {
        let seq = DnaSequence::new(raw)?;
        let mut inner = self.guard();
        let revision = inner.bump();
        let entry = inner
            .records
            .get_mut(id)
            .ok_or_else(|| VelellaError::NotFound(id.into()))?;
        let length = seq.len();
        entry.seq = seq;
        // Stale artifacts are removed, not kept around.
        entry.artifact = None;
        entry.revision = revision;
        debug!("replaced {id} ({length} bp)");
        Ok(length)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut inner = self.guard();
        if inner.records.remove(id).is_none() {
            return Err(VelellaError::NotFound(id.into()));
        }
        debug!("deleted {id}");
        Ok(())
    }

    fn list(&self) -> Result<Vec<RecordSummary>> {
        let inner = self.guard();
        let mut entries: Vec<(&String, &Entry)> = inner.records.iter().collect();
        entries.sort_by(|a, b| b.1.revision.cmp(&a.1.revision));
        Ok(entries
            .into_iter()
            .map(|(id, entry)| RecordSummary {
                id: id.clone(),
                preview: Some(entry.seq.preview(LIST_PREVIEW_BASES)),
                length: Some(entry.seq.len()),
                has_artifact: entry.artifact.is_some(),
            })
            .collect())
    }

    fn put_artifact(&self, id: &str, artifact: &[u8]) -> Result<()> {
        let mut inner = self.guard();
        let entry = inner
            .records
            .get_mut(id)
            .ok_or_else(|| VelellaError::NotFound(id.into()))?;
        entry.artifact = Some(artifact.to_vec());
        Ok(())
    }

    fn artifact(&self, id: &str) -> Result<Vec<u8>> {
        let inner = self.guard();
        inner
            .records
            .get(id)
            .and_then(|entry| entry.artifact.clone())
            .ok_or_else(|| VelellaError::ArtifactNotFound(id.into()))
    }

    fn has_artifact(&self, id: &str) -> bool {
        let inner = self.guard();
        inner
            .records
            .get(id)
            .is_some_and(|entry| entry.artifact.is_some())
    }
}
