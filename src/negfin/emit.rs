use super::{config::MiningOptions, scan::ItemTable, utils::ItemsetSink};
use crate::error::{Error, OverflowError};

/// Translates ranked itemsets back to item identifiers and expands tied
/// items into every combination they form with the base itemset.
pub struct Emitter<'a, K> {
    items: &'a ItemTable,
    sink: K,
    options: MiningOptions,
    ids: Vec<u64>,
    emitted: u64,
}

impl<'a, K: ItemsetSink> Emitter<'a, K> {
    pub fn new(items: &'a ItemTable, options: MiningOptions, sink: K) -> Self {
        Self {
            items,
            sink,
            options,
            ids: Vec::new(),
            emitted: 0,
        }
    }

    /// Number of itemsets handed to the sink so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Emit `itemset` and, for every non-empty subset of `ties`, the itemset
    /// extended by that subset. Subsets are enumerated by counting a mask
    /// from 1 to `2^k - 1`; bit `j` selects `ties[j]`.
    pub fn emit(&mut self, itemset: &[usize], ties: &[usize], support: u64) -> Result<(), Error> {
        self.ids.clear();
        self.ids
            .extend(itemset.iter().map(|&rank| self.items.item(rank).id));
        self.accept(support)?;

        let room = self
            .options
            .max_len
            .map_or(ties.len(), |max_len| max_len.saturating_sub(itemset.len()));
        if ties.is_empty() || room == 0 {
            return Ok(());
        }
        let combinations = u32::try_from(ties.len())
            .ok()
            .and_then(|k| 1u64.checked_shl(k))
            .ok_or(OverflowError::count("tied item combinations"))?;
        let base = itemset.len();
        for mask in 1..combinations {
            if mask.count_ones() as usize > room {
                continue;
            }
            self.ids.truncate(base);
            for (j, &rank) in ties.iter().enumerate() {
                if mask & (1u64 << j) != 0 {
                    self.ids.push(self.items.item(rank).id);
                }
            }
            self.accept(support)?;
        }
        Ok(())
    }

    fn accept(&mut self, support: u64) -> Result<(), Error> {
        self.sink.accept(&self.ids, support)?;
        self.emitted = self
            .emitted
            .checked_add(1)
            .ok_or(OverflowError::count("itemset counter"))?;
        Ok(())
    }
}
