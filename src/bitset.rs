use crate::error::QueryError;

/// Fixed-size bit vector recording which positions within a field's
/// range are accepted. The largest field (minute) needs 60 bits, so a
/// single word holds any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BitSet {
    bits: u64,
    len: u32,
}

impl BitSet {
    /// An all-zero set of `len` bits. `len` must be 1..=64.
    pub(crate) fn new(len: u32) -> Self {
        debug_assert!(len >= 1 && len <= 64);
        Self { bits: 0, len }
    }

    /// An all-one set of `len` bits.
    pub(crate) fn full(len: u32) -> Self {
        let mut set = Self::new(len);
        set.set_all();
        set
    }

    pub(crate) fn set(&mut self, i: u32) {
        debug_assert!(i < self.len);
        self.bits |= 1 << i;
    }

    pub(crate) fn set_all(&mut self) {
        self.bits = if self.len == 64 {
            u64::MAX
        } else {
            (1 << self.len) - 1
        };
    }

    pub(crate) fn test(&self, i: u32) -> bool {
        i < self.len && self.bits & (1 << i) != 0
    }

    pub(crate) fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub(crate) fn is_full(&self) -> bool {
        self.count() == self.len
    }

    /// Bitwise AND of two same-size sets.
    pub(crate) fn intersection(&self, other: &BitSet) -> BitSet {
        debug_assert_eq!(self.len, other.len);
        BitSet {
            bits: self.bits & other.bits,
            len: self.len,
        }
    }

    /// Position of the lowest set bit.
    pub(crate) fn lowest_set(&self) -> Result<u32, QueryError> {
        if self.bits == 0 {
            return Err(QueryError::Empty);
        }
        Ok(self.bits.trailing_zeros())
    }

    /// Set bit positions in ascending order.
    pub(crate) fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len).filter(|&i| self.test(i))
    }
}
