pub mod config;
pub mod dataset;
pub mod emit;
pub mod mining;
pub mod scan;
pub mod tree;
pub mod utils;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

pub use config::{MinSupport, MiningOptions};
pub use dataset::{TransactionFile, TransactionSource, Transactions};
pub use mining::MiningContext;
pub use scan::{Item, ItemTable};
pub use tree::{build_bmc_tree, BitCode, BmcTree, NodesetIndex};
pub use utils::{percentage, FrequentItemsets, ItemsetSink, ItemsetWriter};

use crate::error::Error;

/// Summary of one mining run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningStats {
    pub num_transactions: u64,
    /// Resolved absolute minimum support.
    pub min_support: u64,
    pub frequent_items: usize,
    /// BMC-tree nodes, root excluded.
    pub tree_nodes: usize,
    pub itemsets: u64,
    pub elapsed: Duration,
}

/// Mine every frequent itemset of `source` into `sink`: one pass to rank
/// the frequent items, one pass to build the BMC-tree, then the search.
pub fn run<S, K>(
    source: &S,
    min_support: MinSupport,
    options: MiningOptions,
    mut sink: K,
) -> Result<MiningStats, Error>
where
    S: TransactionSource + ?Sized,
    K: ItemsetSink,
{
    let start = Instant::now();
    let options = options.validate()?;
    let items = ItemTable::scan(source, min_support)?;
    sink.begin(items.num_transactions())?;

    let (tree, index) = build_bmc_tree(source, &items)?;
    let mut context = MiningContext::new(&tree, &index, &items, options, sink);
    let itemsets = context.mine()?;
    context.into_sink().finish()?;

    let stats = MiningStats {
        num_transactions: items.num_transactions(),
        min_support: items.min_support(),
        frequent_items: items.len(),
        tree_nodes: tree.len(),
        itemsets,
        elapsed: start.elapsed(),
    };
    tracing::info!(
        transactions = stats.num_transactions,
        min_support = stats.min_support,
        frequent_items = stats.frequent_items,
        tree_nodes = stats.tree_nodes,
        itemsets = stats.itemsets,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "negFIN finished"
    );
    Ok(stats)
}

/// Collect every frequent itemset of `source` in memory.
pub fn mine<S>(source: &S, min_support: MinSupport) -> Result<FrequentItemsets, Error>
where
    S: TransactionSource + ?Sized,
{
    mine_with_options(source, min_support, MiningOptions::default())
}

pub fn mine_with_options<S>(
    source: &S,
    min_support: MinSupport,
    options: MiningOptions,
) -> Result<FrequentItemsets, Error>
where
    S: TransactionSource + ?Sized,
{
    let mut found = FrequentItemsets::new();
    run(source, min_support, options, &mut found)?;
    Ok(found)
}
