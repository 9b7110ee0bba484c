//! Arena node layouts and handles.

use crate::alphabet::{Symbol, ALPHABET_SIZE};

/// Handle to a node inside a trie's arena.
///
/// Ids are only minted by the trie that owns the arena and stay valid for the
/// trie's lifetime: nodes are never removed individually, only all at once by
/// `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node. Slot 0 of every arena.
    pub const ROOT: Self = Self(0);

    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in its arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns true if this is the root handle.
    #[inline]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

/// A node with one direct-indexed slot per alphabet symbol.
#[derive(Debug, Clone)]
pub struct ArrayNode {
    /// `children[s.index()]` is the child reached through symbol `s`.
    pub(crate) children: [Option<NodeId>; ALPHABET_SIZE],
    pub(crate) terminal: bool,
}

impl ArrayNode {
    /// Creates a node with every slot empty.
    pub const fn new() -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            terminal: false,
        }
    }

    /// Child linked under `symbol`, if any.
    #[inline]
    pub fn child(&self, symbol: Symbol) -> Option<NodeId> {
        self.children[symbol.index()]
    }

    /// Links `child` under `symbol`. The slot must be empty.
    #[inline]
    pub(crate) fn set_child(&mut self, symbol: Symbol, child: NodeId) {
        debug_assert!(self.children[symbol.index()].is_none(), "slot {symbol} already linked");
        self.children[symbol.index()] = Some(child);
    }

    /// Number of occupied slots.
    pub fn out_degree(&self) -> usize {
        self.children.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether a word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Sets the terminal flag. Returns true if it was previously unset.
    #[inline]
    pub(crate) fn mark_terminal(&mut self) -> bool {
        !core::mem::replace(&mut self.terminal, true)
    }
}

impl Default for ArrayNode {
    fn default() -> Self {
        Self::new()
    }
}

/// One `(symbol, child)` record of a [`ListNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Edge label.
    pub symbol: Symbol,
    /// Node the edge leads to.
    pub child: NodeId,
}

/// A node holding its outgoing edges as an ordered list of [`Link`]s.
///
/// Links are kept in the order their symbols were first seen at this
/// position; lookups scan the list.
#[derive(Debug, Clone, Default)]
pub struct ListNode {
    pub(crate) links: Vec<Link>,
    pub(crate) terminal: bool,
}

impl ListNode {
    /// Creates a node with no links.
    pub const fn new() -> Self {
        Self {
            links: Vec::new(),
            terminal: false,
        }
    }

    /// Finds the child for `symbol` by linear scan.
    pub fn child(&self, symbol: Symbol) -> Option<NodeId> {
        self.links
            .iter()
            .find(|link| link.symbol == symbol)
            .map(|link| link.child)
    }

    /// Appends a link. `symbol` must not already be linked from this node.
    pub(crate) fn push_link(&mut self, symbol: Symbol, child: NodeId) {
        debug_assert!(self.child(symbol).is_none(), "symbol {symbol} already linked");
        self.links.push(Link { symbol, child });
    }

    /// The links in first-seen order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Number of links.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.links.len()
    }

    /// Whether a word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Sets the terminal flag. Returns true if it was previously unset.
    #[inline]
    pub(crate) fn mark_terminal(&mut self) -> bool {
        !core::mem::replace(&mut self.terminal, true)
    }
}
