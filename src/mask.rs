/// Packed bit set with one bit per cell, indexed in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilledMask {
    words: Box<[u64]>,
}

impl FilledMask {
    const BITS: usize = u64::BITS as usize;

    /// An all-clear mask able to hold `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(Self::BITS)].into(),
        }
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.words[idx / Self::BITS] & (1 << (idx % Self::BITS)) != 0
    }

    pub fn insert(&mut self, idx: usize) {
        self.words[idx / Self::BITS] |= 1 << (idx % Self::BITS);
    }

    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Whether every bit set in `other` is also set in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(&a, &b)| a & b == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_across_words() {
        let mut mask = FilledMask::new(130);
        assert_eq!(mask.words.len(), 3);
        for idx in [0, 63, 64, 129] {
            assert!(!mask.contains(idx));
            mask.insert(idx);
            assert!(mask.contains(idx));
        }
        mask.insert(64);
        assert_eq!(mask.count(), 4);
        assert!(!mask.contains(1));
    }

    #[test]
    fn superset() {
        let mut need = FilledMask::new(9);
        need.insert(1);
        need.insert(8);

        let mut filled = FilledMask::new(9);
        filled.insert(1);
        assert!(!filled.is_superset(&need));
        filled.insert(4);
        filled.insert(8);
        assert!(filled.is_superset(&need));
        assert!(filled.is_superset(&FilledMask::new(9)));
    }

    #[test]
    fn empty_board() {
        let mask = FilledMask::new(0);
        assert_eq!(mask.count(), 0);
        assert!(mask.is_superset(&FilledMask::new(0)));
    }
}
