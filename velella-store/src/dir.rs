//! Directory-backed record store.
//!
//! The flat keyed layout: one `<id>.seq` file per record plus an optional
//! `<id>.seq.gz` artifact, in a caller-supplied root directory. A single
//! store-wide mutex serializes all operations, which gives read-your-writes
//! consistency and per-operation atomicity. Stored bytes are re-validated on
//! read, so a tampered file can never surface as an invalid record.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::SystemTime;

use log::{debug, warn};

use velella_core::{Result, Sequence, Summarizable, VelellaError};
use velella_seq::DnaSequence;

use crate::record::{RecordSummary, SequenceRecord, LIST_PREVIEW_BASES};
use crate::store::{mint_id, RecordStore};

/// Extension of canonical sequence content files.
const SEQ_EXT: &str = "seq";

/// Suffix appended to a content filename for its compressed artifact.
const ARTIFACT_SUFFIX: &str = ".gz";

/// Filesystem implementation of [`RecordStore`].
#[derive(Debug)]
pub struct DirStore {
    root: PathBuf,
    lock: Mutex<()>,
}

impl DirStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            lock: Mutex::new(()),
        })
    }

    /// The root directory this store persists into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().expect("store mutex poisoned")
    }

    fn seq_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.{SEQ_EXT}"))
    }

    fn artifact_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.{SEQ_EXT}{ARTIFACT_SUFFIX}"))
    }

    fn read_record(&self, id: &str) -> Result<SequenceRecord> {
        let path = self.seq_path(id);
        if !path.exists() {
            return Err(VelellaError::NotFound(id.into()));
        }
        let bytes = fs::read(&path)?;
        let seq = DnaSequence::new(&bytes)?;
        Ok(SequenceRecord::new(id, seq))
    }
}

impl RecordStore for DirStore {
    fn create(&self, raw: &str) -> Result<SequenceRecord> {
        let seq = DnaSequence::new(raw)?;
        let _guard = self.guard();
        let id = mint_id(|candidate| self.seq_path(candidate).exists());
        fs::write(self.seq_path(&id), seq.as_bytes())?;
        let record = SequenceRecord::new(id, seq);
        debug!("created {}", record.summary());
        Ok(record)
    }

    fn read(&self, id: &str) -> Result<SequenceRecord> {
        let _guard = self.guard();
        self.read_record(id)
    }

    fn replace(&self, id: &str, raw: &str) -> Result<usize> {
        let seq = DnaSequence::new(raw)?;
        let _guard = self.guard();
        let path = self.seq_path(id);
        if !path.exists() {
            return Err(VelellaError::NotFound(id.into()));
        }
        fs::write(&path, seq.as_bytes())?;
        // Stale artifacts are removed, not kept around.
        let artifact = self.artifact_path(id);
        if artifact.exists() {
            fs::remove_file(&artifact)?;
        }
        debug!("replaced {id} ({} bp)", seq.len());
        Ok(seq.len())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.guard();
        let path = self.seq_path(id);
        if !path.exists() {
            return Err(VelellaError::NotFound(id.into()));
        }
        fs::remove_file(&path)?;
        let artifact = self.artifact_path(id);
        if artifact.exists() {
            fs::remove_file(&artifact)?;
        }
        debug!("deleted {id}");
        Ok(())
    }

    fn list(&self) -> Result<Vec<RecordSummary>> {
        let _guard = self.guard();
        let mut entries: Vec<(String, SystemTime)> = Vec::new();
        for dirent in fs::read_dir(&self.root)? {
            let dirent = dirent?;
            let path = dirent.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SEQ_EXT) {
                continue;
            }
            let id = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            let modified = dirent
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            entries.push((id, modified));
        }
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        let mut summaries = Vec::with_capacity(entries.len());
        for (id, _) in entries {
            let has_artifact = self.artifact_path(&id).exists();
            match self.read_record(&id) {
                Ok(record) => summaries.push(RecordSummary {
                    id,
                    preview: Some(record.seq.preview(LIST_PREVIEW_BASES)),
                    length: Some(record.length()),
                    has_artifact,
                }),
                Err(err) => {
                    warn!("listing degraded for record {id}: {err}");
                    summaries.push(RecordSummary::degraded(id, has_artifact));
                }
            }
        }
        Ok(summaries)
    }

    fn put_artifact(&self, id: &str, artifact: &[u8]) -> Result<()> {
        let _guard = self.guard();
        if !self.seq_path(id).exists() {
            return Err(VelellaError::NotFound(id.into()));
        }
        fs::write(self.artifact_path(id), artifact)?;
        Ok(())
    }

    fn artifact(&self, id: &str) -> Result<Vec<u8>> {
        let _guard = self.guard();
        let path = self.artifact_path(id);
        if !path.exists() {
            return Err(VelellaError::ArtifactNotFound(id.into()));
        }
        Ok(fs::read(&path)?)
    }

    fn has_artifact(&self, id: &str) -> bool {
        self.artifact_path(id).exists()
    }
}
