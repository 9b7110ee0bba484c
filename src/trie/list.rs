//! Ordered association-list child storage.

use core::slice;

use super::node::{Link, ListNode, NodeId};
use super::{validate, Trie, TrieTopology};
use crate::alphabet::{InvalidSymbol, Symbol};
use crate::metrics;

/// A trie whose nodes keep their edges in an ordered association list.
///
/// A node only pays for the links it actually has, at the price of a linear
/// scan per symbol on lookup. Links appear in the order their symbol was first
/// inserted at that position, so traversal order is deterministic.
#[derive(Debug, Clone)]
pub struct ListTrie {
    /// Arena of nodes; slot 0 is the root.
    nodes: Vec<ListNode>,
}

impl ListTrie {
    /// Creates a trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![ListNode::new()],
        }
    }

    /// Creates a trie with arena room for `capacity` nodes (root included).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(ListNode::new());
        Self { nodes }
    }

    /// Cost-model size of one trie node, links excluded.
    pub const fn node_footprint() -> usize {
        core::mem::size_of::<ListNode>()
    }

    /// Cost-model size of one link record.
    pub const fn link_footprint() -> usize {
        core::mem::size_of::<Link>()
    }

    /// Borrows a node, or `None` if `id` is not in this trie's arena.
    pub fn node(&self, id: NodeId) -> Option<&ListNode> {
        self.nodes.get(id.index())
    }

    fn alloc_node(&mut self) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(ListNode::new());
        #[cfg(feature = "tracing")]
        tracing::trace!(node = id.index(), "allocated list node");
        id
    }
}

impl Default for ListTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Links of a [`ListNode`], in first-seen order.
pub struct ListChildren<'a> {
    links: slice::Iter<'a, Link>,
}

impl Iterator for ListChildren<'_> {
    type Item = (Symbol, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.links.next().map(|link| (link.symbol, link.child))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.links.size_hint()
    }
}

impl ExactSizeIterator for ListChildren<'_> {}

impl TrieTopology for ListTrie {
    type Children<'a> = ListChildren<'a>;

    fn is_terminal(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(ListNode::is_terminal)
    }

    fn children(&self, node: NodeId) -> Self::Children<'_> {
        ListChildren {
            links: self.node(node).map_or(&[][..], ListNode::links).iter(),
        }
    }

    fn child(&self, node: NodeId, symbol: Symbol) -> Option<NodeId> {
        self.node(node)?.child(symbol)
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.node(node).map_or(0, ListNode::out_degree)
    }
}

impl Trie for ListTrie {
    fn insert(&mut self, word: &str) -> Result<bool, InvalidSymbol> {
        let symbols = validate(word)?;

        let mut curr = NodeId::ROOT;
        for symbol in symbols {
            curr = match self.nodes[curr.index()].child(symbol) {
                Some(next) => next,
                None => {
                    let next = self.alloc_node();
                    self.nodes[curr.index()].push_link(symbol, next);
                    next
                }
            };
        }
        Ok(self.nodes[curr.index()].mark_terminal())
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(ListNode::new());
    }

    /// Nodes and links are costed separately: every reachable node pays
    /// [`ListTrie::node_footprint`], every link record (one per non-root node)
    /// pays [`ListTrie::link_footprint`].
    fn estimated_memory_usage(&self) -> usize {
        let links = metrics::total_nodes(self);
        (links + 1) * Self::node_footprint() + links * Self::link_footprint()
    }
}
