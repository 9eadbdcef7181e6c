use super::{bitcode::BitCode, nodeset::NodesetIndex};
use crate::error::OverflowError;

/// Index of a node in [`BmcTree::nodes`].
pub type NodeId = u32;

#[derive(Debug, Clone)]
pub struct BmcNode {
    /// `None` only for the root.
    pub rank: Option<usize>,
    pub count: u64,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    /// Ranks of the strict ancestors, assigned by [`BmcTree::index`].
    pub code: BitCode,
}

impl BmcNode {
    pub fn new_root() -> Self {
        Self {
            rank: None,
            count: 0,
            parent: None,
            first_child: None,
            next_sibling: None,
            code: BitCode::default(),
        }
    }

    pub fn new_item(rank: usize, parent: NodeId) -> Self {
        Self {
            rank: Some(rank),
            count: 1,
            parent: Some(parent),
            first_child: None,
            next_sibling: None,
            code: BitCode::default(),
        }
    }
}

/// Prefix tree of the rank-sorted transactions, stored as an arena.
#[derive(Debug, Clone)]
pub struct BmcTree {
    pub nodes: Vec<BmcNode>,
    pub root_index: NodeId,
}

impl Default for BmcTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BmcTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![BmcNode::new_root()],
            root_index: 0,
        }
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &BmcNode {
        &self.nodes[id as usize]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut BmcNode {
        &mut self.nodes[id as usize]
    }

    /// Number of nodes, excluding the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Child of `parent` labelled `rank`, and the last child visited.
    fn find_child(&self, parent: NodeId, rank: usize) -> (Option<NodeId>, Option<NodeId>) {
        let mut last = None;
        let mut child = self.node(parent).first_child;
        while let Some(id) = child {
            if self.node(id).rank == Some(rank) {
                return (Some(id), last);
            }
            last = Some(id);
            child = self.node(id).next_sibling;
        }
        (None, last)
    }

    /// Insert one transaction given as ascending ranks. Shared prefixes have
    /// their counts incremented; the unmatched suffix becomes a new branch
    /// appended after the existing siblings.
    pub fn insert_transaction(&mut self, ranks: &[usize]) -> Result<(), OverflowError> {
        let mut current = self.root_index;
        let mut ranks = ranks.iter().copied();
        while let Some(rank) = ranks.next() {
            match self.find_child(current, rank) {
                (Some(child), _) => {
                    let node = self.node_mut(child);
                    node.count = node
                        .count
                        .checked_add(1)
                        .ok_or(OverflowError::count("BMC-tree node count"))?;
                    current = child;
                }
                (None, last_sibling) => {
                    current = self.push_child(current, last_sibling, rank)?;
                    for rank in ranks.by_ref() {
                        current = self.push_child(current, None, rank)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn push_child(
        &mut self,
        parent: NodeId,
        last_sibling: Option<NodeId>,
        rank: usize,
    ) -> Result<NodeId, OverflowError> {
        let id = NodeId::try_from(self.nodes.len())
            .map_err(|_| OverflowError::count("BMC-tree node index"))?;
        self.nodes.push(BmcNode::new_item(rank, parent));
        match last_sibling {
            Some(sibling) => self.node_mut(sibling).next_sibling = Some(id),
            None => self.node_mut(parent).first_child = Some(id),
        }
        Ok(id)
    }

    /// Assign every node's ancestor code and collect the nodes of each rank.
    /// Nodes are visited in pre-order, first child before next sibling, with
    /// an iterative walk so deep trees do not exhaust the call stack.
    pub fn index(&mut self, num_items: usize) -> NodesetIndex {
        let mut index = NodesetIndex::new(num_items);
        self.node_mut(self.root_index).code = BitCode::zeros(num_items);
        let mut next = self.node(self.root_index).first_child;
        while let Some(id) = next {
            let node = self.node(id);
            let parent = self.node(node.parent.unwrap_or(self.root_index));
            let code = match parent.rank {
                Some(parent_rank) => parent.code.with(parent_rank),
                None => parent.code.clone(),
            };
            let rank = node.rank.unwrap_or_default();
            self.node_mut(id).code = code;
            index.push(rank, id);
            next = self.preorder_successor(id);
        }
        index
    }

    fn preorder_successor(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        if node.first_child.is_some() {
            return node.first_child;
        }
        let mut current = Some(id);
        while let Some(cur) = current {
            let node = self.node(cur);
            if node.next_sibling.is_some() {
                return node.next_sibling;
            }
            current = node.parent.filter(|&parent| parent != self.root_index);
        }
        None
    }

    /// Ranks on the path from the root to `id`, root first, `id` included.
    pub fn path(&self, id: NodeId) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            let node = self.node(cur);
            if let Some(rank) = node.rank {
                path.push(rank);
            }
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Children of `id` in sibling order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.node(id).first_child, move |&child| {
            self.node(child).next_sibling
        })
    }
}
