//! Direct-indexed (26-slot) child storage.

use core::iter::Enumerate;
use core::slice;

use super::node::{ArrayNode, NodeId};
use super::{validate, Trie, TrieTopology};
use crate::alphabet::{InvalidSymbol, Symbol};
use crate::metrics;

/// A trie whose nodes hold a fixed 26-slot child table.
///
/// Lookup is a single index per symbol. Every node pays for the full table
/// regardless of how many children it has.
#[derive(Debug, Clone)]
pub struct ArrayTrie {
    /// Arena of nodes; slot 0 is the root.
    nodes: Vec<ArrayNode>,
}

impl ArrayTrie {
    /// Creates a trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![ArrayNode::new()],
        }
    }

    /// Creates a trie with arena room for `capacity` nodes (root included).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(ArrayNode::new());
        Self { nodes }
    }

    /// Fixed footprint of a single node in the cost model.
    pub const fn node_footprint() -> usize {
        core::mem::size_of::<ArrayNode>()
    }

    /// Borrows a node, or `None` if `id` is not in this trie's arena.
    pub fn node(&self, id: NodeId) -> Option<&ArrayNode> {
        self.nodes.get(id.index())
    }

    fn alloc_node(&mut self) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(ArrayNode::new());
        #[cfg(feature = "tracing")]
        tracing::trace!(node = id.index(), "allocated array node");
        id
    }
}

impl Default for ArrayTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Occupied slots of an [`ArrayNode`], in alphabet order.
pub struct ArrayChildren<'a> {
    slots: Enumerate<slice::Iter<'a, Option<NodeId>>>,
}

impl Iterator for ArrayChildren<'_> {
    type Item = (Symbol, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(|(index, slot)| {
            let child = (*slot)?;
            Symbol::from_index(index).map(|symbol| (symbol, child))
        })
    }
}

impl TrieTopology for ArrayTrie {
    type Children<'a> = ArrayChildren<'a>;

    fn is_terminal(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(ArrayNode::is_terminal)
    }

    fn children(&self, node: NodeId) -> Self::Children<'_> {
        let slots: &[Option<NodeId>] = self.node(node).map_or(&[][..], |n| &n.children[..]);
        ArrayChildren {
            slots: slots.iter().enumerate(),
        }
    }

    fn child(&self, node: NodeId, symbol: Symbol) -> Option<NodeId> {
        self.node(node)?.child(symbol)
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.node(node).map_or(0, ArrayNode::out_degree)
    }
}

impl Trie for ArrayTrie {
    fn insert(&mut self, word: &str) -> Result<bool, InvalidSymbol> {
        let symbols = validate(word)?;

        let mut curr = NodeId::ROOT;
        for symbol in symbols {
            curr = match self.nodes[curr.index()].child(symbol) {
                Some(next) => next,
                None => {
                    let next = self.alloc_node();
                    self.nodes[curr.index()].set_child(symbol, next);
                    next
                }
            };
        }
        Ok(self.nodes[curr.index()].mark_terminal())
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(ArrayNode::new());
    }

    fn estimated_memory_usage(&self) -> usize {
        metrics::reachable_nodes(self) * Self::node_footprint()
    }
}
