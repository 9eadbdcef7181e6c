use super::{bmc::BmcTree, nodeset::NodesetIndex};
use crate::{
    error::Error,
    negfin::{dataset::TransactionSource, scan::ItemTable},
};

/// Second database pass: insert the frequent items of every transaction,
/// ordered by rank, then index the finished tree.
pub fn build_bmc_tree<S>(source: &S, items: &ItemTable) -> Result<(BmcTree, NodesetIndex), Error>
where
    S: TransactionSource + ?Sized,
{
    let mut tree = BmcTree::new();
    let mut ranked = Vec::new();
    source.for_each_transaction(&mut |transaction| {
        items.ranked(transaction, &mut ranked);
        tree.insert_transaction(&ranked)?;
        Ok(())
    })?;
    let index = tree.index(items.len());
    tracing::debug!(
        nodes = tree.len(),
        frequent_items = items.len(),
        "built BMC-tree"
    );
    Ok((tree, index))
}
