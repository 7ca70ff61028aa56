//! Validated DNA sequence types and pure analyses for the Velella store.
//!
//! Provides the strongly-typed sequence layer the record store builds on,
//! plus the read-only analyses that operate over it:
//!
//! - **Alphabet** — [`DnaAlphabet`], the canonical four-base alphabet
//! - **Sequences** — [`DnaSequence`], uppercased and validated at construction
//! - **GC content** — [`gc_report`]
//! - **Per-base frequency** — [`frequency_report`]
//! - **Motif search** — [`find_motifs`], literal (overlapping) or regex mode
//!
//! # Example
//!
//! ```
//! use velella_core::Sequence;
//! use velella_seq::{gc_report, DnaSequence};
//!
//! // Lowercased input is normalized to uppercase
//! let dna = DnaSequence::new("attcgATCG").unwrap();
//! assert_eq!(dna.as_bytes(), b"ATTCGATCG");
//!
//! let gc = gc_report(&dna);
//! assert_eq!(gc.g_count, 2);
//! assert_eq!(gc.c_count, 2);
//! assert!((gc.gc_percent - 44.444).abs() < 1e-9);
//! ```

pub mod alphabet;
pub mod analysis;
pub mod motif;
pub mod seq;
pub mod types;

// Re-export alphabet types
pub use alphabet::{Alphabet, DnaAlphabet};

// Re-export the generic sequence type and its DNA alias
pub use seq::ValidatedSeq;
pub use types::DnaSequence;

// Re-export analysis reports
pub use analysis::{frequency_report, gc_report, BaseCounts, BasePercentages, FrequencyReport, GcReport};

// Re-export motif search types
pub use motif::{find_motifs, MotifHit, MotifQuery, MotifReport};
