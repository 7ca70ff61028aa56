//! Core trait definitions for the Velella workspace.
//!
//! These traits define the contracts that domain types implement across crates.

/// A biological sequence.
pub trait Sequence {
    /// The raw byte representation of the sequence.
    fn as_bytes(&self) -> &[u8];

    /// Length in residues/bases.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A type that can be compressed and decompressed.
pub trait Compressible: Sized {
    /// Compress to bytes.
    fn compress(&self) -> crate::Result<Vec<u8>>;

    /// Decompress from bytes.
    fn decompress(data: &[u8]) -> crate::Result<Self>;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
