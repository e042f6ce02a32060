use std::collections::BTreeMap;

use crate::coords::Coordinates;
use crate::error::{Error, Result};
use crate::groups::CommutativeMonoid;

/// Index of a node in the tree's arena.
pub type NodeId = usize;

#[derive(Clone, Debug)]
struct Node<E> {
    /// Smallest key among the leaves below.
    start: i64,
    /// Largest key among the leaves below.
    end: i64,
    value: E,
    children: Option<(NodeId, NodeId)>,
    parent: Option<NodeId>,
}

/// Segment tree over a fixed, possibly very sparse set of integer keys.
///
/// Every node covers a run of consecutive positions in the sorted key list,
/// so gaps between keys cost nothing. Leaves start out at `group.id()` and
/// `update` folds new values into them with the group operation.
#[derive(Clone, Debug)]
pub struct SparseSegmentTree<G: CommutativeMonoid> {
    group: G,
    nodes: Vec<Node<G::Elem>>,
    root: NodeId,
    leaves: BTreeMap<i64, NodeId>,
}

impl<G: CommutativeMonoid> SparseSegmentTree<G> {
    /// Duplicates in `keys` are fine.
    ///
    /// O(n log n)
    pub fn new<Iter: IntoIterator<Item = i64>>(group: G, keys: Iter) -> Result<Self> {
        Self::from_coordinates(group, &Coordinates::new(keys))
    }

    /// O(n)
    pub fn from_coordinates(group: G, coords: &Coordinates) -> Result<Self> {
        if coords.is_empty() {
            return Err(Error::EmptyCoordinates);
        }

        let mut nodes = Vec::with_capacity(2 * coords.len() - 1);
        let mut leaves = BTreeMap::new();
        let root = Self::build(&group, &mut nodes, &mut leaves, coords.as_slice(), None);

        let tree = Self {
            group,
            nodes,
            root,
            leaves,
        };
        log::debug!(
            "built sparse segment tree: {} keys in [{}, {}], {} nodes, height {}",
            tree.len(),
            tree.first_key(),
            tree.last_key(),
            tree.node_count(),
            tree.height(),
        );
        Ok(tree)
    }

    fn build(
        group: &G,
        nodes: &mut Vec<Node<G::Elem>>,
        leaves: &mut BTreeMap<i64, NodeId>,
        keys: &[i64],
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = nodes.len();
        nodes.push(Node {
            start: keys[0],
            end: keys[keys.len() - 1],
            value: group.id(),
            children: None,
            parent,
        });

        if keys.len() == 1 {
            leaves.insert(keys[0], id);
            return id;
        }

        // left half takes the middle element
        let mid = (keys.len() + 1) / 2;
        let l = Self::build(group, nodes, leaves, &keys[..mid], Some(id));
        let r = Self::build(group, nodes, leaves, &keys[mid..], Some(id));
        nodes[id].children = Some((l, r));
        nodes[id].value = group.add(nodes[l].value.clone(), nodes[r].value.clone());
        id
    }

    /// Number of keys (leaves).
    #[inline]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Always `2 * len() - 1`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// `ceil(log2(len()))`
    #[inline]
    pub fn height(&self) -> usize {
        (std::mem::size_of::<usize>() * 8) - (self.len() - 1).leading_zeros() as usize
    }

    #[inline]
    pub fn first_key(&self) -> i64 {
        self.nodes[self.root].start
    }

    #[inline]
    pub fn last_key(&self) -> i64 {
        self.nodes[self.root].end
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = i64> + '_ {
        self.leaves.keys().copied()
    }

    #[inline]
    pub fn monoid(&self) -> &G {
        &self.group
    }

    /// O(log n)
    pub fn get(&self, key: i64) -> Result<&G::Elem> {
        let leaf = self.leaf(key)?;
        Ok(&self.nodes[leaf].value)
    }

    fn leaf(&self, key: i64) -> Result<NodeId> {
        self.leaves
            .get(&key)
            .copied()
            .ok_or(Error::KeyNotFound { key })
    }

    /// Folds `x` into the leaf at `key`: `leaf = leaf + x`. With [`NumMax`]
    /// this never lowers a stored value.
    ///
    /// O(log n)
    ///
    /// [`NumMax`]: crate::groups::NumMax
    pub fn update(&mut self, key: i64, x: G::Elem) -> Result<()> {
        let mut i = self.leaf(key)?;
        self.nodes[i].value = self.group.add(self.nodes[i].value.clone(), x);
        log::trace!("update key={} leaf={}", key, i);

        while let Some(parent) = self.nodes[i].parent {
            if let Some((l, r)) = self.nodes[parent].children {
                self.nodes[parent].value = self
                    .group
                    .add(self.nodes[l].value.clone(), self.nodes[r].value.clone());
            }
            i = parent;
        }
        Ok(())
    }

    /// Combines the values of every key in `[low, high]`. Empty or inverted
    /// ranges give `group.id()`.
    ///
    /// O(log n)
    pub fn query_range(&self, low: i64, high: i64) -> G::Elem {
        if low > high {
            return self.group.id();
        }
        self.query(self.root, low, high)
    }

    fn query(&self, i: NodeId, low: i64, high: i64) -> G::Elem {
        let node = &self.nodes[i];
        if high < node.start || node.end < low {
            return self.group.id();
        }
        if low <= node.start && node.end <= high {
            return node.value.clone();
        }

        match node.children {
            Some((l, r)) => self
                .group
                .add(self.query(l, low, high), self.query(r, low, high)),
            None => self.group.id(),
        }
    }

    /// Combines every key strictly below `key`, which need not be one of the
    /// tree's keys. Because keys are sparse this is not `query_range(.., key - 1)`
    /// on a dense index.
    ///
    /// O(log n)
    pub fn value_before(&self, key: i64) -> G::Elem {
        match self.leaves.range(..key).next_back() {
            Some((&prev, _)) => self.query_range(self.first_key(), prev),
            None => self.group.id(),
        }
    }
}
