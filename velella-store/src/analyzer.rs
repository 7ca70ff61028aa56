//! Store-level analysis engine.
//!
//! Each function resolves an id to its current record, rejects empty
//! content, and delegates to the pure analyses in `velella_seq`. This is the
//! one place zero-length content is explicitly rejected; the store itself
//! accepts empty records.

use velella_core::{Result, Sequence, VelellaError};
use velella_seq::motif::{find_motifs, MotifQuery, MotifReport};
use velella_seq::{frequency_report, gc_report, DnaSequence, FrequencyReport, GcReport};

use crate::store::RecordStore;

fn load_non_empty(store: &dyn RecordStore, id: &str) -> Result<DnaSequence> {
    let record = store.read(id)?;
    if record.seq.is_empty() {
        return Err(VelellaError::EmptySequence(id.into()));
    }
    Ok(record.seq)
}

/// GC content of the record for `id`.
pub fn gc_content(store: &dyn RecordStore, id: &str) -> Result<GcReport> {
    Ok(gc_report(&load_non_empty(store, id)?))
}

/// Per-base frequency of the record for `id`.
pub fn nucleotide_frequency(store: &dyn RecordStore, id: &str) -> Result<FrequencyReport> {
    Ok(frequency_report(&load_non_empty(store, id)?))
}

/// Motif occurrences in the record for `id`.
pub fn motif_search(
    store: &dyn RecordStore,
    id: &str,
    query: &MotifQuery,
) -> Result<MotifReport> {
    find_motifs(&load_non_empty(store, id)?, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn seeded(raw: &str) -> (MemoryStore, String) {
        let store = MemoryStore::new();
        let id = store.create(raw).unwrap().id;
        (store, id)
    }

    #[test]
    fn gc_content_through_the_store() {
        let (store, id) = seeded("attcgATCG");
        let report = gc_content(&store, &id).unwrap();
        assert_eq!(report.length, 9);
        assert_eq!(report.g_count, 2);
        assert_eq!(report.c_count, 2);
        assert!((report.gc_percent - 44.444).abs() < 1e-9);
    }

    #[test]
    fn frequency_through_the_store() {
        let (store, id) = seeded("attcgATCG");
        let report = nucleotide_frequency(&store, &id).unwrap();
        assert_eq!(report.counts.a, 2);
        assert_eq!(report.counts.t, 3);
        assert_eq!(report.counts.c, 2);
        assert_eq!(report.counts.g, 2);
        assert_eq!(report.counts.total(), 9);
    }

    #[test]
    fn motif_search_through_the_store() {
        let (store, id) = seeded("AAA");
        let report = motif_search(&store, &id, &MotifQuery::literal("AA")).unwrap();
        assert_eq!(report.total_matches, 2);
        assert_eq!(report.matches[0].start, 1);
        assert_eq!(report.matches[1].start, 2);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            gc_content(&store, "deadbeef"),
            Err(VelellaError::NotFound(_))
        ));
        assert!(matches!(
            nucleotide_frequency(&store, "deadbeef"),
            Err(VelellaError::NotFound(_))
        ));
        assert!(matches!(
            motif_search(&store, "deadbeef", &MotifQuery::literal("AA")),
            Err(VelellaError::NotFound(_))
        ));
    }

    #[test]
    fn empty_records_are_rejected_by_every_analysis() {
        let (store, id) = seeded("");
        assert!(matches!(
            gc_content(&store, &id),
            Err(VelellaError::EmptySequence(_))
        ));
        assert!(matches!(
            nucleotide_frequency(&store, &id),
            Err(VelellaError::EmptySequence(_))
        ));
        assert!(matches!(
            motif_search(&store, &id, &MotifQuery::literal("AA")),
            Err(VelellaError::EmptySequence(_))
        ));
    }

    #[test]
    fn invalid_regex_surfaces_as_invalid_pattern() {
        let (store, id) = seeded("ACGT");
        assert!(matches!(
            motif_search(&store, &id, &MotifQuery::regex("A[(")),
            Err(VelellaError::InvalidPattern(_))
        ));
    }

    #[test]
    fn analysis_sees_replaced_content() {
        let (store, id) = seeded("AAAA");
        assert_eq!(gc_content(&store, &id).unwrap().gc_percent, 0.0);

        store.replace(&id, "GGGG").unwrap();
        assert_eq!(gc_content(&store, &id).unwrap().gc_percent, 100.0);
    }
}
