use core::fmt;

/// Errors reported while constructing or growing packed bit sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitfieldError {
    /// A bitlist's logical length would exceed its declared capacity limit.
    LengthExceedsLimit {
        /// Logical bit length that was requested.
        length: usize,
        /// Declared capacity limit of the bitlist.
        limit: usize,
    },
}

impl fmt::Display for BitfieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitfieldError::LengthExceedsLimit { length, limit } => {
                write!(
                    f,
                    "bitlist length {} exceeds declared limit {}",
                    length, limit
                )
            }
        }
    }
}

impl std::error::Error for BitfieldError {}

fn packed_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Fixed-length packed boolean sequence.
///
/// The bit length is part of the value; bit `i` lives at byte `i / 8`,
/// position `i % 8`, least-significant bit first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitvector {
    length: usize,
    data: Vec<u8>,
}

impl Bitvector {
    /// Creates an all-false bitvector of the given bit length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            data: vec![0u8; packed_len(length)],
        }
    }

    /// Builds a bitvector from a slice of booleans.
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut bv = Self::new(bits.len());
        for (index, &bit) in bits.iter().enumerate() {
            bv.set(index, bit);
        }
        bv
    }

    /// Logical bit length.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the bitvector holds zero bits.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.length, "bit index {index} out of range");
        self.data[index / 8] & (1 << (index % 8)) != 0
    }

    /// Sets the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, bit: bool) {
        assert!(index < self.length, "bit index {index} out of range");
        if bit {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }
}

/// Variable-length packed boolean sequence bounded by a declared limit.
///
/// The logical length is a first-class field distinct from the backing
/// buffer size, and the declared limit travels with the value so the
/// merkleization layer can derive its chunk capacity without ambient
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitlist {
    length: usize,
    limit: usize,
    data: Vec<u8>,
}

impl Bitlist {
    /// Creates an empty bitlist with the given capacity limit.
    pub fn empty(limit: usize) -> Self {
        Self {
            length: 0,
            limit,
            data: Vec::new(),
        }
    }

    /// Builds a bitlist from a slice of booleans.
    ///
    /// Fails when the slice is longer than the declared limit; truncating
    /// here would silently corrupt the commitment downstream.
    pub fn from_bits(bits: &[bool], limit: usize) -> Result<Self, BitfieldError> {
        if bits.len() > limit {
            return Err(BitfieldError::LengthExceedsLimit {
                length: bits.len(),
                limit,
            });
        }
        let mut bl = Self {
            length: bits.len(),
            limit,
            data: vec![0u8; packed_len(bits.len())],
        };
        for (index, &bit) in bits.iter().enumerate() {
            if bit {
                bl.data[index / 8] |= 1 << (index % 8);
            }
        }
        Ok(bl)
    }

    /// Appends a bit, failing when the list is already at its limit.
    pub fn push(&mut self, bit: bool) -> Result<(), BitfieldError> {
        if self.length == self.limit {
            return Err(BitfieldError::LengthExceedsLimit {
                length: self.length + 1,
                limit: self.limit,
            });
        }
        if self.data.len() < packed_len(self.length + 1) {
            self.data.push(0);
        }
        if bit {
            self.data[self.length / 8] |= 1 << (self.length % 8);
        }
        self.length += 1;
        Ok(())
    }

    /// Logical bit length.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the bitlist holds zero bits.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Declared capacity limit in bits.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.length, "bit index {index} out of range");
        self.data[index / 8] & (1 << (index % 8)) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitvector_set_get() {
        let mut bv = Bitvector::new(11);
        assert_eq!(bv.len(), 11);
        assert!(!bv.get(10));
        bv.set(10, true);
        assert!(bv.get(10));
        bv.set(10, false);
        assert!(!bv.get(10));
    }

    #[test]
    fn bitvector_from_bits_packs_lsb_first() {
        let bv = Bitvector::from_bits(&[true, false, true]);
        assert!(bv.get(0));
        assert!(!bv.get(1));
        assert!(bv.get(2));
    }

    #[test]
    fn bitlist_respects_limit() {
        let err = Bitlist::from_bits(&[true; 5], 4).unwrap_err();
        assert_eq!(
            err,
            BitfieldError::LengthExceedsLimit {
                length: 5,
                limit: 4
            }
        );
        assert_eq!(err.to_string(), "bitlist length 5 exceeds declared limit 4");
    }

    #[test]
    fn bitlist_push_to_limit() {
        let mut bl = Bitlist::empty(2);
        bl.push(true).unwrap();
        bl.push(false).unwrap();
        assert_eq!(bl.len(), 2);
        assert!(bl.get(0));
        assert!(!bl.get(1));
        assert!(bl.push(true).is_err());
    }

    #[test]
    fn bitlist_length_is_logical_not_buffer() {
        let bl = Bitlist::from_bits(&[true, true, true], 262_144).unwrap();
        assert_eq!(bl.len(), 3);
        assert_eq!(bl.limit(), 262_144);
    }
}
