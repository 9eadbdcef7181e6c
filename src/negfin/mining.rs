//! Depth-first search over the set-enumeration tree.
//!
//! Every enumeration node carries the support of its itemset and a node-set
//! of BMC-tree nodes. For an itemset `{a, x}` found at depth 2 the node-set
//! holds the nodes of `a` whose path lacks `x`; deeper node-sets are derived
//! from those. A candidate's support is always the parent's support minus the
//! weight of its node-set, so no positive intersection is ever materialised.

use std::borrow::Cow;

use super::{
    config::MiningOptions,
    emit::Emitter,
    scan::ItemTable,
    tree::{BmcTree, NodeId, NodesetIndex},
    utils::ItemsetSink,
};
use crate::error::{Error, OverflowError};

#[derive(Debug, Clone)]
pub struct EnumerationNode<'t> {
    pub label: usize,
    pub count: u64,
    pub nodeset: Cow<'t, [NodeId]>,
}

impl EnumerationNode<'_> {
    fn release(&mut self) {
        self.nodeset = Cow::Borrowed(&[]);
    }
}

/// State of one mining run: the current itemset path, the items tied with
/// it, and the emitter that receives every discovered itemset.
pub struct MiningContext<'a, K> {
    tree: &'a BmcTree,
    index: &'a NodesetIndex,
    items: &'a ItemTable,
    min_support: u64,
    options: MiningOptions,
    itemset: Vec<usize>,
    ties: Vec<usize>,
    emitter: Emitter<'a, K>,
}

impl<'a, K: ItemsetSink> MiningContext<'a, K> {
    pub fn new(
        tree: &'a BmcTree,
        index: &'a NodesetIndex,
        items: &'a ItemTable,
        options: MiningOptions,
        sink: K,
    ) -> Self {
        Self {
            tree,
            index,
            items,
            min_support: items.min_support(),
            options,
            itemset: Vec::with_capacity(items.len()),
            ties: Vec::with_capacity(items.len()),
            emitter: Emitter::new(items, options, sink),
        }
    }

    /// Enumerate every frequent itemset, least frequent item first. Returns
    /// the number of itemsets emitted.
    pub fn mine(&mut self) -> Result<u64, Error> {
        let (index, items) = (self.index, self.items);
        let mut roots: Vec<EnumerationNode<'a>> = (0..items.len())
            .rev()
            .map(|rank| EnumerationNode {
                label: rank,
                count: items.item(rank).support,
                nodeset: Cow::Borrowed(index.lookup(rank)),
            })
            .collect();
        self.expand_all(&mut roots, 1)?;
        tracing::debug!(itemsets = self.emitter.emitted(), "mined itemsets");
        Ok(self.emitter.emitted())
    }

    /// Expand each node in turn against the nodes after it, dropping its
    /// node-set once its subtree is done.
    fn expand_all(&mut self, nodes: &mut [EnumerationNode<'a>], depth: usize) -> Result<(), Error> {
        let mut rest = nodes;
        while let Some((node, siblings)) = std::mem::take(&mut rest).split_first_mut() {
            self.expand(node, siblings, depth)?;
            node.release();
            rest = siblings;
        }
        Ok(())
    }

    fn expand(
        &mut self,
        node: &EnumerationNode<'a>,
        siblings: &[EnumerationNode<'a>],
        depth: usize,
    ) -> Result<(), Error> {
        let inherited_ties = self.ties.len();
        let mut children = Vec::new();
        if self.options.allows(depth + 1) {
            for sibling in siblings {
                let (nodeset, negative) = if depth == 1 {
                    // occurrences of `node` without `sibling` on their path
                    self.select(&node.nodeset, sibling.label, false)?
                } else {
                    self.select(&sibling.nodeset, node.label, true)?
                };
                let support = node
                    .count
                    .checked_sub(negative)
                    .ok_or(OverflowError::count("candidate support"))?;
                if support < self.min_support {
                    continue;
                }
                if support == node.count {
                    self.ties.push(sibling.label);
                } else {
                    children.push(EnumerationNode {
                        label: sibling.label,
                        count: support,
                        nodeset: Cow::Owned(nodeset),
                    });
                }
            }
        }

        self.itemset.push(node.label);
        self.emitter.emit(&self.itemset, &self.ties, node.count)?;
        self.expand_all(&mut children, depth + 1)?;
        self.itemset.pop();
        self.ties.truncate(inherited_ties);
        Ok(())
    }

    /// Nodes of `nodes` whose ancestor code has `rank` set (or unset when
    /// `present` is false), with their total count.
    fn select(
        &self,
        nodes: &[NodeId],
        rank: usize,
        present: bool,
    ) -> Result<(Vec<NodeId>, u64), Error> {
        let mut selected = Vec::new();
        let mut weight: u64 = 0;
        for &id in nodes {
            let bmc_node = self.tree.node(id);
            if bmc_node.code.test(rank) == present {
                selected.push(id);
                weight = weight
                    .checked_add(bmc_node.count)
                    .ok_or(OverflowError::count("node-set weight"))?;
            }
        }
        Ok((selected, weight))
    }

    pub fn into_sink(self) -> K {
        self.emitter.into_sink()
    }
}
