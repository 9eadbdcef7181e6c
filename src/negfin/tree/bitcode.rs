/// Fixed-width bitmap with one flag per item rank.
///
/// A BMC-tree node's code holds the ranks of its strict ancestors, so
/// "does item `r` occur on the path to this node" is a single bit test.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitCode(Box<[u64]>);

impl BitCode {
    /// Empty code able to hold ranks `0..num_bits`.
    pub fn zeros(num_bits: usize) -> Self {
        Self(vec![0u64; num_bits.div_ceil(64)].into_boxed_slice())
    }

    /// Copy of `self` with `bit` also set.
    #[inline]
    pub fn with(&self, bit: usize) -> Self {
        let mut code = self.clone();
        code.set(bit);
        code
    }

    #[inline]
    pub fn set(&mut self, bit: usize) {
        self.0[bit >> 6] |= 1u64 << (bit & 63);
    }

    #[inline]
    pub fn test(&self, bit: usize) -> bool {
        self.0
            .get(bit >> 6)
            .is_some_and(|word| word & (1u64 << (bit & 63)) != 0)
    }

    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|word| word.count_ones()).sum()
    }

    /// Set ranks in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().enumerate().flat_map(|(idx, &word)| {
            (0..64)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| idx * 64 + bit)
        })
    }
}
