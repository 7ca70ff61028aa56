//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction uppercases and validates every
//! byte. The inner data is always uppercase, so `Deref<Target=[u8]>` and
//! `as_bytes()` are zero-cost and safe to pass to downstream `&[u8]` APIs.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use velella_core::{compress, Compressible, Sequence, Summarizable, VelellaError};

use crate::alphabet::Alphabet;

/// A validated biological sequence parameterized by its alphabet.
///
/// The inner bytes are always uppercase.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the alphabet.
    /// Returns `InvalidAlphabet` for the first byte not in the alphabet after
    /// uppercasing. The empty sequence is valid.
    pub fn new(bytes: impl AsRef<[u8]>) -> velella_core::Result<Self> {
        let data: Vec<u8> = bytes.as_ref().iter().map(|b| b.to_ascii_uppercase()).collect();
        for (i, &b) in data.iter().enumerate() {
            if !A::is_valid(b) {
                return Err(VelellaError::InvalidAlphabet {
                    alphabet: A::NAME,
                    base: b as char,
                    position: i,
                });
            }
        }
        Ok(Self {
            data,
            _alphabet: PhantomData,
        })
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// # Safety (logical)
    ///
    /// Caller must guarantee all bytes are valid uppercase members of `A`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        Self {
            data,
            _alphabet: PhantomData,
        }
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The first `max` bases as a string, `...`-suffixed when truncated.
    pub fn preview(&self, max: usize) -> String {
        let end = self.data.len().min(max);
        let head = std::str::from_utf8(&self.data[..end]).unwrap_or("???");
        if self.data.len() > max {
            format!("{head}...")
        } else {
            head.to_string()
        }
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        format!("{} sequence ({} bp): {}", A::NAME, self.data.len(), self.preview(20))
    }
}

impl<A: Alphabet> Compressible for ValidatedSeq<A> {
    fn compress(&self) -> velella_core::Result<Vec<u8>> {
        compress::gzip_compress(&self.data, compress::DEFAULT_GZIP_LEVEL)
    }

    fn decompress(data: &[u8]) -> velella_core::Result<Self> {
        let raw = compress::decompress(data)?;
        Self::new(raw)
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "{}(\"{}\")", A::NAME, s)
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}
