//! GC content and per-base frequency reports.
//!
//! Both analyses are a single linear pass over the sequence. Percentages are
//! rounded to 3 decimal places; counts are exact and always sum to the
//! sequence length (the alphabet guarantees every byte is one of the four
//! bases).

use crate::types::DnaSequence;

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// GC content of a sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GcReport {
    pub length: usize,
    pub g_count: u64,
    pub c_count: u64,
    /// `100 * (g_count + c_count) / length`, rounded to 3 decimals.
    pub gc_percent: f64,
}

/// Exact per-base counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub struct BaseCounts {
    pub a: u64,
    pub t: u64,
    pub c: u64,
    pub g: u64,
}

impl BaseCounts {
    /// Sum of all four counts.
    pub fn total(&self) -> u64 {
        self.a + self.t + self.c + self.g
    }
}

/// Per-base percentages of total length, each rounded to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub struct BasePercentages {
    pub a: f64,
    pub t: f64,
    pub c: f64,
    pub g: f64,
}

/// Per-base frequency of a sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyReport {
    pub length: usize,
    pub counts: BaseCounts,
    pub percentages: BasePercentages,
}

/// Count `G` and `C` bases over the full sequence.
pub fn gc_report(seq: &DnaSequence) -> GcReport {
    let mut g = 0u64;
    let mut c = 0u64;
    for &b in seq.iter() {
        match b {
            b'G' => g += 1,
            b'C' => c += 1,
            _ => {}
        }
    }
    let length = seq.len();
    let gc_percent = if length == 0 {
        0.0
    } else {
        round3(100.0 * (g + c) as f64 / length as f64)
    };
    GcReport {
        length,
        g_count: g,
        c_count: c,
        gc_percent,
    }
}

/// Count each of the four bases and derive their percentages.
pub fn frequency_report(seq: &DnaSequence) -> FrequencyReport {
    let mut counts = BaseCounts::default();
    for &b in seq.iter() {
        match b {
            b'A' => counts.a += 1,
            b'T' => counts.t += 1,
            b'C' => counts.c += 1,
            b'G' => counts.g += 1,
            _ => {}
        }
    }
    let length = seq.len();
    let pct = |n: u64| {
        if length == 0 {
            0.0
        } else {
            round3(100.0 * n as f64 / length as f64)
        }
    };
    FrequencyReport {
        length,
        counts,
        percentages: BasePercentages {
            a: pct(counts.a),
            t: pct(counts.t),
            c: pct(counts.c),
            g: pct(counts.g),
        },
    }
}
