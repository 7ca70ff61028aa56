//! Sequence records and listing summaries.

use velella_core::{Sequence, Summarizable};
use velella_seq::DnaSequence;

/// Number of bases shown in a listing preview.
pub const LIST_PREVIEW_BASES: usize = 20;

/// A stored sequence record: an opaque id plus its validated content.
///
/// Length is always derived from the content, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceRecord {
    pub id: String,
    pub seq: DnaSequence,
}

impl SequenceRecord {
    /// Create a record view from an id and validated content.
    pub fn new(id: impl Into<String>, seq: DnaSequence) -> Self {
        Self { id: id.into(), seq }
    }

    /// Length in bases.
    pub fn length(&self) -> usize {
        self.seq.len()
    }
}

impl Summarizable for SequenceRecord {
    fn summary(&self) -> String {
        format!("{}: {}", self.id, self.seq.summary())
    }
}

/// One entry of a store listing.
///
/// `preview` and `length` are `None` when the underlying entry could not be
/// read; the listing itself still succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordSummary {
    pub id: String,
    pub preview: Option<String>,
    pub length: Option<usize>,
    pub has_artifact: bool,
}

impl RecordSummary {
    /// Summary of a readable record.
    pub fn of(record: &SequenceRecord, has_artifact: bool) -> Self {
        Self {
            id: record.id.clone(),
            preview: Some(record.seq.preview(LIST_PREVIEW_BASES)),
            length: Some(record.length()),
            has_artifact,
        }
    }

    /// Degraded summary for an entry whose content could not be read.
    pub fn degraded(id: impl Into<String>, has_artifact: bool) -> Self {
        Self {
            id: id.into(),
            preview: None,
            length: None,
            has_artifact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_derived_from_content() {
        let record = SequenceRecord::new("ab12cd34", DnaSequence::new("ACGTACGT").unwrap());
        assert_eq!(record.length(), 8);
    }

    #[test]
    fn summary_leads_with_id() {
        let record = SequenceRecord::new("ab12cd34", DnaSequence::new("ACGT").unwrap());
        assert_eq!(record.summary(), "ab12cd34: DNA sequence (4 bp): ACGT");
    }

    #[test]
    fn listing_preview_is_twenty_bases() {
        let record =
            SequenceRecord::new("ab12cd34", DnaSequence::new("ACGT".repeat(10)).unwrap());
        let summary = RecordSummary::of(&record, false);
        assert_eq!(summary.preview.as_deref(), Some("ACGTACGTACGTACGTACGT..."));
        assert_eq!(summary.length, Some(40));
        assert!(!summary.has_artifact);
    }

    #[test]
    fn degraded_summary_has_no_content_fields() {
        let summary = RecordSummary::degraded("deadbeef", true);
        assert_eq!(summary.preview, None);
        assert_eq!(summary.length, None);
        assert!(summary.has_artifact);
    }
}
