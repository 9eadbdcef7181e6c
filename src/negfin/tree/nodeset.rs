use super::bmc::{BmcTree, NodeId};

/// For every item rank, the BMC-tree nodes labelled with that rank in
/// pre-order. Read-only once the tree has been indexed.
#[derive(Debug, Clone, Default)]
pub struct NodesetIndex {
    nodesets: Vec<Vec<NodeId>>,
}

impl NodesetIndex {
    pub(crate) fn new(num_items: usize) -> Self {
        Self {
            nodesets: vec![Vec::new(); num_items],
        }
    }

    pub(crate) fn push(&mut self, rank: usize, node: NodeId) {
        self.nodesets[rank].push(node);
    }

    pub fn lookup(&self, rank: usize) -> &[NodeId] {
        &self.nodesets[rank]
    }

    pub fn len(&self) -> usize {
        self.nodesets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodesets.is_empty()
    }

    /// Sum of the node counts of `rank`, i.e. the item's support.
    pub fn support(&self, tree: &BmcTree, rank: usize) -> u64 {
        self.lookup(rank)
            .iter()
            .map(|&node| tree.node(node).count)
            .sum()
    }
}
