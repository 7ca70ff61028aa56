//! Motif search over validated sequences.
//!
//! The pattern is uppercased before matching, so search is case-insensitive
//! against the canonical uppercase sequence. Literal mode reports
//! *overlapping* occurrences (the scan resumes one base past each match
//! start), while regex mode uses the `regex` crate's leftmost-first,
//! non-overlapping iteration. The two modes deliberately differ in overlap
//! behavior.

use regex::Regex;

use velella_core::{Result, Sequence, VelellaError};

use crate::types::DnaSequence;

/// A motif search request: a literal subsequence or a regular expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotifQuery {
    pub pattern: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_regex: bool,
}

impl MotifQuery {
    /// A literal-subsequence query.
    pub fn literal(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            use_regex: false,
        }
    }

    /// A regular-expression query.
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            use_regex: true,
        }
    }
}

/// A single motif occurrence. Positions are 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotifHit {
    pub start: usize,
    pub end: usize,
    /// The matched text; differs from the pattern in regex mode.
    #[cfg_attr(feature = "serde", serde(rename = "match"))]
    pub matched: String,
}

/// The result of a motif search. Zero matches is a valid outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotifReport {
    /// The pattern as submitted, before uppercasing.
    pub pattern: String,
    pub use_regex: bool,
    pub total_matches: usize,
    pub matches: Vec<MotifHit>,
}

/// Search `seq` for the motif described by `query`.
pub fn find_motifs(seq: &DnaSequence, query: &MotifQuery) -> Result<MotifReport> {
    let pattern = query.pattern.to_ascii_uppercase();
    let matches = if query.use_regex {
        regex_matches(seq, &pattern)?
    } else {
        literal_matches(seq, &pattern)?
    };
    Ok(MotifReport {
        pattern: query.pattern.clone(),
        use_regex: query.use_regex,
        total_matches: matches.len(),
        matches,
    })
}

fn literal_matches(seq: &DnaSequence, pattern: &str) -> Result<Vec<MotifHit>> {
    if pattern.is_empty() {
        return Err(VelellaError::InvalidPattern(
            "literal pattern must not be empty".into(),
        ));
    }
    let text = seq.as_bytes();
    let needle = pattern.as_bytes();
    let mut hits = Vec::new();
    if needle.len() > text.len() {
        return Ok(hits);
    }
    // Every window is checked, so occurrences may overlap.
    for (i, window) in text.windows(needle.len()).enumerate() {
        if window == needle {
            hits.push(MotifHit {
                start: i + 1,
                end: i + needle.len(),
                matched: pattern.to_string(),
            });
        }
    }
    Ok(hits)
}

fn regex_matches(seq: &DnaSequence, pattern: &str) -> Result<Vec<MotifHit>> {
    let re = Regex::new(pattern).map_err(|e| VelellaError::InvalidPattern(e.to_string()))?;
    let text = std::str::from_utf8(seq.as_bytes()).unwrap_or("");
    Ok(re
        .find_iter(text)
        .map(|m| MotifHit {
            start: m.start() + 1,
            end: m.end(),
            matched: m.as_str().to_string(),
        })
        .collect())
}
