//! Row bitmask encoding for constant-time range uniformity tests.
//!
//! Bit `k` of a row mask is the grid value at column `k` (column 0 is the
//! least significant bit of the first word). Masks are stored as 64-bit
//! words so grids of any side length are supported.

use crate::grid::BinaryGrid;

const WORD_BITS: usize = u64::BITS as usize;

/// Bitmask of one grid row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowMask {
    words: Vec<u64>,
    width: usize,
}

impl RowMask {
    /// Encode a row of `0`/`1` values.
    pub fn from_bits(bits: &[u8]) -> Self {
        let mut words = vec![0u64; bits.len().div_ceil(WORD_BITS).max(1)];
        for (k, &bit) in bits.iter().enumerate() {
            if bit != 0 {
                words[k / WORD_BITS] |= 1 << (k % WORD_BITS);
            }
        }
        Self {
            words,
            width: bits.len(),
        }
    }

    /// Number of meaningful bits.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn bit(&self, k: usize) -> bool {
        k < self.width && (self.words[k / WORD_BITS] >> (k % WORD_BITS)) & 1 == 1
    }

    /// `true` iff bits `lo..=hi` are all set.
    #[inline]
    pub fn all_set(&self, lo: usize, hi: usize) -> bool {
        self.range_matches(lo, hi, |w| w)
    }

    /// `true` iff bits `lo..=hi` are all clear.
    ///
    /// The complement is masked to the requested range before the
    /// comparison, so bits beyond `hi` (and beyond the row width) never
    /// take part.
    #[inline]
    pub fn all_clear(&self, lo: usize, hi: usize) -> bool {
        self.range_matches(lo, hi, |w| !w)
    }

    fn range_matches(&self, lo: usize, hi: usize, view: impl Fn(u64) -> u64) -> bool {
        if lo > hi || hi >= self.width {
            return false;
        }
        let first = lo / WORD_BITS;
        let last = hi / WORD_BITS;
        (first..=last).all(|w| {
            let from = if w == first { lo % WORD_BITS } else { 0 };
            let to = if w == last { hi % WORD_BITS } else { WORD_BITS - 1 };
            let mask = range_mask(from, to);
            view(self.words[w]) & mask == mask
        })
    }
}

/// Bits `lo..=hi` of a single word set, `hi < 64`.
#[inline]
fn range_mask(lo: usize, hi: usize) -> u64 {
    let upto_hi = if hi == WORD_BITS - 1 {
        u64::MAX
    } else {
        (1u64 << (hi + 1)) - 1
    };
    upto_hi & !((1u64 << lo) - 1)
}

/// Encode every row of `grid`.
pub fn encode_rows(grid: &BinaryGrid) -> Vec<RowMask> {
    grid.rows().map(RowMask::from_bits).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_zero_is_least_significant() {
        let mask = RowMask::from_bits(&[1, 0, 0, 1]);
        assert!(mask.bit(0));
        assert!(!mask.bit(1));
        assert!(mask.bit(3));
        assert!(!mask.bit(4));
        assert_eq!(mask.width(), 4);
    }

    #[test]
    fn range_tests_on_single_word() {
        let mask = RowMask::from_bits(&[0, 1, 1, 1, 0, 0]);
        assert!(mask.all_set(1, 3));
        assert!(mask.all_set(2, 2));
        assert!(!mask.all_set(0, 3));
        assert!(!mask.all_set(1, 4));
        assert!(mask.all_clear(4, 5));
        assert!(!mask.all_clear(3, 5));
        assert!(mask.all_clear(0, 0));
    }

    #[test]
    fn complement_never_sees_bits_past_the_width() {
        let mask = RowMask::from_bits(&[0, 0, 0]);
        assert!(mask.all_clear(0, 2));
        assert!(!mask.all_clear(0, 3));
        assert!(!mask.all_set(0, 3));
    }

    #[test]
    fn range_tests_span_word_boundaries() {
        let mut bits = vec![0u8; 150];
        for b in bits.iter_mut().take(140).skip(60) {
            *b = 1;
        }
        let mask = RowMask::from_bits(&bits);
        assert!(mask.all_set(60, 139));
        assert!(mask.all_set(63, 64));
        assert!(mask.all_set(64, 127));
        assert!(!mask.all_set(59, 100));
        assert!(!mask.all_set(100, 140));
        assert!(mask.all_clear(0, 59));
        assert!(mask.all_clear(140, 149));
        assert!(!mask.all_clear(0, 60));
    }

    #[test]
    fn full_word_mask() {
        let mask = RowMask::from_bits(&[1u8; 64]);
        assert!(mask.all_set(0, 63));
        assert_eq!(range_mask(0, 63), u64::MAX);
        assert_eq!(range_mask(1, 3), 0b1110);
    }

    #[test]
    fn encodes_every_row() {
        let grid = BinaryGrid::parse("10\n01").unwrap();
        let masks = encode_rows(&grid);
        assert_eq!(masks.len(), 2);
        assert!(masks[0].bit(0) && !masks[0].bit(1));
        assert!(!masks[1].bit(0) && masks[1].bit(1));
    }
}
