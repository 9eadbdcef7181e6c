use std::collections::HashMap;

use super::{config::MinSupport, dataset::TransactionSource};
use crate::error::{Error, OverflowError};

/// A frequent item. Its rank is its position in [`ItemTable::items`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub support: u64,
}

/// Frequent items of a database, ranked by descending support with ties
/// broken by ascending identifier.
#[derive(Debug, Clone)]
pub struct ItemTable {
    items: Vec<Item>,
    ranks: HashMap<u64, usize>,
    num_transactions: u64,
    min_support: u64,
}

impl ItemTable {
    /// First database pass: count every item and keep those meeting the
    /// resolved threshold.
    pub fn scan<S>(source: &S, min_support: MinSupport) -> Result<Self, Error>
    where
        S: TransactionSource + ?Sized,
    {
        let min_support = min_support.validate()?;
        let mut item_counts: HashMap<u64, u64> = HashMap::new();
        let mut num_transactions: u64 = 0;
        source.for_each_transaction(&mut |transaction| {
            num_transactions = num_transactions
                .checked_add(1)
                .ok_or(OverflowError::count("transaction count"))?;
            for &item in transaction {
                let count = item_counts.entry(item).or_insert(0);
                *count = count
                    .checked_add(1)
                    .ok_or(OverflowError::count("item support"))?;
            }
            Ok(())
        })?;

        let min_support = min_support.resolve(num_transactions)?;
        tracing::debug!(
            num_transactions,
            distinct_items = item_counts.len(),
            min_support,
            "scanned transactions"
        );
        Ok(Self::from_counts(item_counts, num_transactions, min_support))
    }

    pub(crate) fn from_counts(
        item_counts: HashMap<u64, u64>,
        num_transactions: u64,
        min_support: u64,
    ) -> Self {
        let mut items: Vec<Item> = item_counts
            .into_iter()
            .filter(|&(_, support)| support >= min_support)
            .map(|(id, support)| Item { id, support })
            .collect();
        items.sort_unstable_by(|a, b| b.support.cmp(&a.support).then(a.id.cmp(&b.id)));
        let ranks = items
            .iter()
            .enumerate()
            .map(|(rank, item)| (item.id, rank))
            .collect();
        Self {
            items,
            ranks,
            num_transactions,
            min_support,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, rank: usize) -> Item {
        self.items[rank]
    }

    pub fn rank_of(&self, id: u64) -> Option<usize> {
        self.ranks.get(&id).copied()
    }

    /// Number of frequent items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn num_transactions(&self) -> u64 {
        self.num_transactions
    }

    /// Absolute minimum support.
    pub fn min_support(&self) -> u64 {
        self.min_support
    }

    /// Frequent items of `transaction` as ranks in ascending order.
    pub(crate) fn ranked(&self, transaction: &[u64], ranked: &mut Vec<usize>) {
        ranked.clear();
        ranked.extend(transaction.iter().filter_map(|&id| self.rank_of(id)));
        ranked.sort_unstable();
    }
}
