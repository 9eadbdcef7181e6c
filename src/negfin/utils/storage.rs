use super::sink::{percentage, ItemsetSink};
use crate::error::Error;

/// Flat storage of mined itemsets and their supports. Each itemset is kept
/// sorted by identifier; itemsets stay in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequentItemsets {
    items: Vec<u64>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<u64>,
    num_transactions: u64,
}

impl FrequentItemsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_itemset_with_support(&mut self, itemset: &[u64], support: u64) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(itemset);
        self.items[start..].sort_unstable();
        self.offsets.push((start, itemset.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[u64] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> u64 {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn num_transactions(&self) -> u64 {
        self.num_transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u64], u64)> {
        (0..self.len()).map(move |idx| (self.get_itemset(idx), self.support(idx)))
    }

    /// Itemsets with exactly `size` items.
    pub fn iter_level(&self, size: usize) -> impl Iterator<Item = (&[u64], u64)> {
        self.iter().filter(move |(itemset, _)| itemset.len() == size)
    }

    /// Support of `itemset` (in any order) if it was mined.
    pub fn support_of(&self, itemset: &[u64]) -> Option<u64> {
        let mut query = itemset.to_vec();
        query.sort_unstable();
        self.iter()
            .find(|(stored, _)| *stored == query.as_slice())
            .map(|(_, support)| support)
    }

    /// Relative support as a whole percentage.
    pub fn percentage(&self, idx: usize) -> u64 {
        percentage(self.support(idx), self.num_transactions)
    }
}

impl ItemsetSink for FrequentItemsets {
    fn begin(&mut self, num_transactions: u64) -> Result<(), Error> {
        self.num_transactions = num_transactions;
        Ok(())
    }

    fn accept(&mut self, itemset: &[u64], support: u64) -> Result<(), Error> {
        self.add_itemset_with_support(itemset, support);
        Ok(())
    }
}
