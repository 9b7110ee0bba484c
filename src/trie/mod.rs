//! Prefix trees over the lowercase alphabet.
//!
//! Two storage strategies share one contract:
//! - [`ArrayTrie`]: every node carries a direct-indexed table of 26 child slots.
//! - [`ListTrie`]: every node carries an ordered list of `(symbol, child)` links.
//!
//! Both keep their nodes in an arena (`Vec`) addressed by [`NodeId`], with the
//! root at slot 0. [`TrieTopology`] exposes the read-only shape of a trie, which
//! is all the traversal metrics in [`crate::metrics`] and the [`Words`] iterator
//! need. [`Trie`] adds insertion, membership and memory accounting on top.

pub mod array;
pub mod iter;
pub mod list;
pub mod node;

pub use array::ArrayTrie;
pub use iter::Words;
pub use list::ListTrie;
pub use node::{ArrayNode, Link, ListNode, NodeId};

use crate::alphabet::{self, InvalidSymbol, Symbol};
use crate::stats::TrieStats;

/// Read-only view of a trie's shape.
///
/// Implementors only describe nodes; every traversal lives elsewhere and is
/// written once against this trait.
///
/// A `NodeId` that is not in the trie's arena (for instance one taken from a
/// larger trie) reads as a non-terminal node without children.
pub trait TrieTopology {
    /// Iterator over a node's outgoing edges.
    type Children<'a>: Iterator<Item = (Symbol, NodeId)>
    where
        Self: 'a;

    /// Handle of the root node.
    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Whether a word ends at `node`.
    fn is_terminal(&self, node: NodeId) -> bool;

    /// Outgoing edges of `node`, in the representation's natural order.
    fn children(&self, node: NodeId) -> Self::Children<'_>;

    /// Child of `node` reached through `symbol`.
    fn child(&self, node: NodeId, symbol: Symbol) -> Option<NodeId>;

    /// Number of outgoing edges of `node`.
    fn out_degree(&self, node: NodeId) -> usize {
        self.children(node).count()
    }
}

/// Insert / membership capability shared by both trie representations.
pub trait Trie: TrieTopology {
    /// Inserts `word`, creating one node per previously unseen prefix.
    ///
    /// Returns `Ok(true)` if the word was not stored before. Re-inserting a
    /// word leaves the tree unchanged and returns `Ok(false)`.
    ///
    /// # Errors
    /// Returns [`InvalidSymbol`] if `word` contains a character outside
    /// `a..=z`. The word is validated before any node is created, so a
    /// rejected insertion leaves the trie untouched.
    fn insert(&mut self, word: &str) -> Result<bool, InvalidSymbol>;

    /// Removes every word, keeping only an empty root.
    fn clear(&mut self);

    /// Cost-model estimate of the bytes the nodes occupy.
    ///
    /// Computed by a traversal of the reachable nodes, never from cached
    /// counters.
    fn estimated_memory_usage(&self) -> usize;

    /// Membership test that surfaces invalid input.
    ///
    /// # Errors
    /// Returns [`InvalidSymbol`] for the first character outside `a..=z`.
    /// The whole word is validated before the walk, so the outcome does not
    /// depend on what the trie holds.
    fn try_contains(&self, word: &str) -> Result<bool, InvalidSymbol> {
        let symbols = alphabet::parse_word(word)?;
        let mut curr = self.root();
        for symbol in symbols {
            match self.child(curr, symbol) {
                Some(next) => curr = next,
                None => return Ok(false),
            }
        }
        Ok(self.is_terminal(curr))
    }

    /// Returns true if `word` was inserted. Never fails: a word containing a
    /// symbol outside the alphabet cannot be stored, so it is not a member.
    fn contains(&self, word: &str) -> bool {
        self.try_contains(word).unwrap_or(false)
    }

    /// Returns true if no word, the empty word included, is stored.
    fn is_empty(&self) -> bool {
        let root = self.root();
        !self.is_terminal(root) && self.out_degree(root) == 0
    }

    /// Inserts every word in order, stopping at the first invalid one.
    ///
    /// Words before the failing one stay inserted. Returns how many words
    /// were newly added.
    ///
    /// # Errors
    /// Propagates the first [`InvalidSymbol`].
    fn insert_all<I, S>(&mut self, words: I) -> Result<usize, InvalidSymbol>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        let mut added = 0;
        for word in words {
            if self.insert(word.as_ref())? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Iterates stored words depth-first, each word before its extensions.
    fn words(&self) -> Words<'_, Self>
    where
        Self: Sized,
    {
        Words::new(self)
    }

    /// Snapshot of every metric, each gathered by its own traversal.
    fn stats(&self) -> TrieStats
    where
        Self: Sized,
    {
        TrieStats::collect(self)
    }
}

/// Validates `word` ahead of an insertion.
pub(crate) fn validate(word: &str) -> Result<Vec<Symbol>, InvalidSymbol> {
    let parsed = alphabet::parse_word(word);
    #[cfg(feature = "tracing")]
    if let Err(err) = &parsed {
        tracing::trace!(word, %err, "rejected word");
    }
    parsed
}
