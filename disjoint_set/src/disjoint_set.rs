//! `DisjointSet` partitions a fixed set of nodes into components and tracks merges.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::{Error, UnionListener};

#[cfg(test)]
#[path = "tests/test_disjoint_set.rs"]
mod test_disjoint_set;

/// `DisjointSet` partitions the nodes `0..size` into non-overlapping components.
///
/// The node set is fixed at construction; components are merged with [`union`](Self::union) and
/// queried with [`connected`](Self::connected). Internally each component is a tree of parent
/// pointers whose root identifies the component. `find` compresses every path it walks and
/// `union` attaches the lower-ranked root beneath the higher-ranked one, which together keep
/// both operations amortised near-constant.
///
/// Beyond the classic structure, a `DisjointSet` keeps a human-readable log of union and
/// connectivity operations, a counter of find steps, and a list of [`UnionListener`]
/// capabilities that are notified synchronously on every merge. The full state except the
/// listener list can be captured with [`snapshot`](Self::snapshot) and later rebuilt with
/// [`restore`](Self::restore).
///
/// ## Example ##
/// ```
/// use disjoint_set::DisjointSet;
///
/// let mut sets = DisjointSet::new(10)?;
///
/// sets.union(1, 2)?;
/// sets.union(2, 3)?;
/// assert!(sets.connected(1, 3)?);
/// assert!(!sets.connected(0, 3)?);
/// assert_eq!(sets.component_count(), 8);
/// # Ok::<(), disjoint_set::Error>(())
/// ```
pub struct DisjointSet {
    pub(crate) parent: Vec<usize>,
    pub(crate) rank: Vec<u32>,
    pub(crate) operation_log: Vec<String>,
    pub(crate) operation_count: u64,
    pub(crate) listeners: Vec<Box<dyn UnionListener>>,
}

impl DisjointSet {
    /// Constructs a structure of `size` singleton nodes.
    ///
    /// Fails with [`Error::InvalidSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(DisjointSet {
            parent: (0..size).collect(),
            rank: vec![0; size],
            operation_log: Vec::new(),
            operation_count: 0,
            listeners: Vec::new(),
        })
    }

    /// Returns the number of nodes.
    pub fn size(&self) -> usize {
        self.parent.len()
    }

    fn check_node(&self, node: usize) -> Result<(), Error> {
        if node < self.parent.len() {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                node,
                size: self.parent.len(),
            })
        }
    }

    // Resolves the root and compresses the walked path. The counter advances once per node
    // visited on the way to the root, root included, matching the recursive formulation where
    // every nested call counts as one operation. The per-step count is observable through
    // `operation_count` and is part of the reported statistics, so it must not be collapsed
    // into one increment per call.
    fn find_root(&mut self, node: usize) -> usize {
        let mut root = node;
        let mut steps = 1u64;
        while self.parent[root] != root {
            root = self.parent[root];
            steps += 1;
        }
        self.operation_count += steps;

        let mut walk = node;
        while self.parent[walk] != walk {
            let next = self.parent[walk];
            self.parent[walk] = root;
            walk = next;
        }
        root
    }

    /// Returns the representative of `node`'s component, compressing the walked path.
    ///
    /// Two nodes are in the same component iff they have the same representative. A repeated
    /// `find` on the same node returns the same root in a single step.
    pub fn find(&mut self, node: usize) -> Result<usize, Error> {
        self.check_node(node)?;
        Ok(self.find_root(node))
    }

    /// Merges the components containing `p` and `q`.
    ///
    /// When both nodes already share a component this is a no-op: no rank change, no log entry,
    /// no listener notification. On an actual merge the lower-ranked root is attached beneath
    /// the higher-ranked one; on a rank tie the first argument's root wins and its rank grows
    /// by one. Listeners observe `(new_root, absorbed_root)` after the structure has been
    /// updated and before the log entry is appended.
    pub fn union(&mut self, p: usize, q: usize) -> Result<(), Error> {
        self.check_node(p)?;
        self.check_node(q)?;
        let root_p = self.find_root(p);
        let root_q = self.find_root(q);
        if root_p == root_q {
            return Ok(());
        }
        let (new_root, absorbed_root) = match self.rank[root_p].cmp(&self.rank[root_q]) {
            Ordering::Greater => {
                self.parent[root_q] = root_p;
                (root_p, root_q)
            }
            Ordering::Less => {
                self.parent[root_p] = root_q;
                (root_q, root_p)
            }
            Ordering::Equal => {
                self.parent[root_q] = root_p;
                self.rank[root_p] += 1;
                (root_p, root_q)
            }
        };
        debug!("union({p}, {q}): merged component of {absorbed_root} into {new_root}");
        self.notify_union(new_root, absorbed_root);
        self.log_operation("Union", p, q);
        Ok(())
    }

    /// Returns `true` iff `p` and `q` are in the same component.
    ///
    /// Always appends a log entry, whether or not the nodes are connected. The only structural
    /// effect is the path compression performed by the two root resolutions.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool, Error> {
        self.check_node(p)?;
        self.check_node(q)?;
        let result = self.find_root(p) == self.find_root(q);
        self.log_operation("Find", p, q);
        Ok(result)
    }

    /// Returns the number of components, i.e. the number of roots.
    ///
    /// Runs in O(size) and has no side effects on the log or counter.
    pub fn component_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(node, &parent)| node == parent)
            .count()
    }

    /// Returns the number of find steps performed so far.
    pub fn operation_count(&self) -> u64 {
        self.operation_count
    }

    /// Returns the log of union and connectivity operations, oldest first.
    pub fn operation_log(&self) -> &[String] {
        &self.operation_log
    }

    /// Registers a listener to be notified on every merge.
    ///
    /// There is no way to remove a listener and no de-duplication.
    pub fn add_union_listener(&mut self, listener: impl UnionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn root_of(&self, mut node: usize) -> usize {
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    /// Returns an iterator that yields every node together with its current representative.
    ///
    /// Unlike [`find`](Self::find) this neither compresses paths nor advances the operation
    /// counter.
    pub fn components(&self) -> impl '_ + Iterator<Item = (usize, usize)> {
        (0..self.size()).map(|node| (node, self.root_of(node)))
    }

    fn notify_union(&mut self, new_root: usize, absorbed_root: usize) {
        for listener in &mut self.listeners {
            listener.on_union(new_root, absorbed_root);
        }
    }

    fn log_operation(&mut self, operation: &str, p: usize, q: usize) {
        self.operation_log
            .push(format!("{operation} operation on nodes {p} and {q}"));
    }
}

impl fmt::Debug for DisjointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // prints non-trivial components, always listing the root first
        let mut sets = BTreeMap::<usize, Vec<usize>>::new();
        for (node, root) in self.components() {
            if node != root {
                sets.entry(root).or_insert_with(|| vec![root]).push(node);
            }
        }
        f.debug_set().entries(sets.values()).finish()
    }
}
