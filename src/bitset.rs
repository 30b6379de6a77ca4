//! Fixed-length bit set.
//!
//! [`BitSet`] packs `len` bits into 64-bit words. Bit `n` lives in word
//! `n / 64` at position `n % 64`. Bits past `len` in the last word are always
//! zero, so word-level operations (`count_ones`, `Display`, equality) never
//! observe them.
//!
//! # Examples
//!
//! ```rust
//! use corral::bitset::BitSet;
//!
//! let mut bits = BitSet::with_len(10);
//! bits.set(3).unwrap();
//! bits.set(7).unwrap();
//!
//! assert_eq!(bits.get(3), Ok(true));
//! assert_eq!(bits.set_bits().collect::<Vec<_>>(), vec![3, 7]);
//! assert!(bits.get(10).is_err());
//! ```

use std::fmt;

use crate::CollectionError;

/// Number of bits in a set built with [`BitSet::new`].
pub const DEFAULT_NUM_BITS: usize = 64;

const WORD_BITS: usize = 64;

/// Size of a [`BitSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BitSetConfig {
    /// Number of addressable bits.
    pub num_bits: usize,
}

impl Default for BitSetConfig {
    fn default() -> Self {
        Self {
            num_bits: DEFAULT_NUM_BITS,
        }
    }
}

/// A fixed number of bits, all initially clear.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `get`/`set`    | O(1)       |
/// | `flip`         | O(n / 64)  |
/// | `count_ones`   | O(n / 64)  |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    words: Vec<u64>,
    len: usize,
}

impl BitSet {
    /// Creates a set of [`DEFAULT_NUM_BITS`] clear bits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BitSetConfig::default())
    }

    /// Creates a set sized by a configuration record.
    #[must_use]
    pub fn with_config(config: BitSetConfig) -> Self {
        Self::with_len(config.num_bits)
    }

    /// Creates a set of `len` clear bits.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Builds a set from bytes; bit `n` is bit `n % 8` of byte `n / 8`.
    ///
    /// The resulting set is `8 * bytes.len()` bits long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::bitset::BitSet;
    ///
    /// let bits = BitSet::from_bytes(&[0b0000_0101, 0b1000_0000]);
    /// assert_eq!(bits.set_bits().collect::<Vec<_>>(), vec![0, 2, 15]);
    /// assert_eq!(bits.to_bytes(), vec![0b0000_0101, 0b1000_0000]);
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let words = bytes
            .chunks(WORD_BITS / 8)
            .map(|chunk| {
                let mut padded = [0u8; WORD_BITS / 8];
                padded[..chunk.len()].copy_from_slice(chunk);
                u64::from_le_bytes(padded)
            })
            .collect();
        Self {
            words,
            len: bytes.len() * 8,
        }
    }

    /// Returns the bytes of the set, `len().div_ceil(8)` of them.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self
            .words
            .iter()
            .flat_map(|word| word.to_le_bytes())
            .collect();
        bytes.truncate(self.len.div_ceil(8));
        bytes
    }

    /// Returns the number of addressable bits.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set has no addressable bits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether `bit` is set.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `bit >= len()`.
    pub fn get(&self, bit: usize) -> Result<bool, CollectionError> {
        let (word, mask) = self.locate(bit)?;
        Ok(self.words[word] & mask != 0)
    }

    /// Sets `bit`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `bit >= len()`.
    pub fn set(&mut self, bit: usize) -> Result<(), CollectionError> {
        let (word, mask) = self.locate(bit)?;
        self.words[word] |= mask;
        Ok(())
    }

    /// Clears `bit`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `bit >= len()`.
    pub fn clear(&mut self, bit: usize) -> Result<(), CollectionError> {
        let (word, mask) = self.locate(bit)?;
        self.words[word] &= !mask;
        Ok(())
    }

    /// Inverts `bit`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `bit >= len()`.
    pub fn flip_bit(&mut self, bit: usize) -> Result<(), CollectionError> {
        let (word, mask) = self.locate(bit)?;
        self.words[word] ^= mask;
        Ok(())
    }

    /// Inverts every bit.
    pub fn flip(&mut self) {
        for word in &mut self.words {
            *word = !*word;
        }
        self.clear_tail();
    }

    /// Inverts the bits in `start..end`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `end > len()` or
    /// `start > end`.
    pub fn flip_range(&mut self, start: usize, end: usize) -> Result<(), CollectionError> {
        if end > self.len || start > end {
            return Err(CollectionError::IndexOutOfBounds {
                index: if end > self.len { end } else { start },
                length: self.len,
            });
        }
        for bit in start..end {
            self.words[bit / WORD_BITS] ^= 1 << (bit % WORD_BITS);
        }
        Ok(())
    }

    /// Returns the number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Iterates the indices of the set bits in ascending order.
    #[must_use]
    pub fn set_bits(&self) -> SetBits<'_> {
        SetBits {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    fn locate(&self, bit: usize) -> Result<(usize, u64), CollectionError> {
        if bit >= self.len {
            return Err(CollectionError::IndexOutOfBounds {
                index: bit,
                length: self.len,
            });
        }
        Ok((bit / WORD_BITS, 1 << (bit % WORD_BITS)))
    }

    fn clear_tail(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0
            && let Some(last) = self.words.last_mut()
        {
            *last &= (1 << used) - 1;
        }
    }
}

impl Default for BitSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper-case hexadecimal, most significant word first, 16 digits per word.
impl fmt::Display for BitSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words.iter().rev() {
            write!(formatter, "{word:016X}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BitSet")
            .field("len", &self.len)
            .field("set_bits", &self.set_bits().collect::<Vec<_>>())
            .finish()
    }
}

/// Iterator over the indices of set bits in a [`BitSet`].
#[derive(Clone)]
pub struct SetBits<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl Iterator for SetBits<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.index += 1;
            self.current = *self.words.get(self.index)?;
        }
        let offset = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.index * WORD_BITS + offset)
    }
}
