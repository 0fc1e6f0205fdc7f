//! Word-packed GF(2) row vectors
//!
//! Coefficient matrix rows are stored 64 bits to the word so that the
//! elimination's row-XOR step runs word-parallel instead of cell by cell.

const WORD_BITS: usize = 64;

/// A fixed-length vector of bits over GF(2)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitRow {
    words: Vec<u64>,
    len: usize,
}

impl BitRow {
    /// All-zero row of the given bit length
    pub fn zeros(len: usize) -> Self {
        BitRow {
            words: vec![0u64; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        self.words[index / WORD_BITS] >> (index % WORD_BITS) & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.len);
        let mask = 1u64 << (index % WORD_BITS);
        if value {
            self.words[index / WORD_BITS] |= mask;
        } else {
            self.words[index / WORD_BITS] &= !mask;
        }
    }

    /// GF(2) row addition: self ^= other, word-parallel
    #[inline]
    pub fn xor_assign(&mut self, other: &BitRow) {
        debug_assert_eq!(self.len, other.len);
        for (word, &other_word) in self.words.iter_mut().zip(&other.words) {
            *word ^= other_word;
        }
    }

    /// Indices of set bits, ascending
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_index, &word)| {
            let base = word_index * WORD_BITS;
            std::iter::successors(
                (word != 0).then_some(word),
                |&remaining| {
                    let next = remaining & (remaining - 1);
                    (next != 0).then_some(next)
                },
            )
            .map(move |remaining| base + remaining.trailing_zeros() as usize)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut row = BitRow::zeros(100);
        assert!(!row.get(63));

        row.set(0, true);
        row.set(63, true);
        row.set(64, true);
        row.set(99, true);

        assert!(row.get(0));
        assert!(row.get(63));
        assert!(row.get(64));
        assert!(row.get(99));
        assert!(!row.get(1));

        row.set(63, false);
        assert!(!row.get(63));
    }

    #[test]
    fn test_xor_assign() {
        let mut a = BitRow::zeros(70);
        let mut b = BitRow::zeros(70);
        a.set(3, true);
        a.set(65, true);
        b.set(3, true);
        b.set(66, true);

        a.xor_assign(&b);

        assert!(!a.get(3));
        assert!(a.get(65));
        assert!(a.get(66));
    }

    #[test]
    fn test_ones_iterates_set_bits_in_order() {
        let mut row = BitRow::zeros(130);
        for index in [0, 5, 63, 64, 127, 129] {
            row.set(index, true);
        }
        let ones: Vec<usize> = row.ones().collect();
        assert_eq!(ones, vec![0, 5, 63, 64, 127, 129]);
    }

    #[test]
    fn test_empty_row() {
        let row = BitRow::zeros(0);
        assert!(row.is_empty());
        assert_eq!(row.ones().count(), 0);
    }
}
