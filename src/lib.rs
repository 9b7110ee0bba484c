//! # `lextrie` - Prefix Trees with Structural Analytics
//!
//! Indexes lowercase words (`a..=z`) in a trie and reports how the resulting
//! tree is shaped. Two child-storage strategies implement the same contract
//! so their cost can be compared on identical input.
//!
//! ## Representations
//!
//! 1. **[`ArrayTrie`]**: each node carries a direct-indexed table of 26 child
//!    slots. Lookup is one index per symbol; every node pays for the full table.
//! 2. **[`ListTrie`]**: each node carries an ordered list of `(symbol, child)`
//!    links. Memory scales with actual branching; lookup scans the list.
//!
//! Both own their nodes in an arena addressed by [`NodeId`]. There is no
//! shared or global state: a trie is a plain value and every operation is a
//! method on it.
//!
//! ## Metrics
//!
//! [`TrieMetrics`] is implemented for every [`TrieTopology`]. Each metric is a
//! fresh depth-first traversal, so results always reflect the current tree:
//!
//! - **total nodes**: every node except the root
//! - **word count**: terminal nodes
//! - **internal nodes**: non-root nodes with at least one child
//! - **branching nodes**: non-root nodes with more than one child
//! - **real branching**: branching nodes where at least two paths lead to
//!   words, together with the average fan-out at those nodes
//!
//! ## Example
//!
//! ```rust
//! use lextrie::{ArrayTrie, ListTrie, Trie, TrieMetrics};
//!
//! let mut array = ArrayTrie::new();
//! let mut list = ListTrie::new();
//! for word in ["cat", "car", "dog"] {
//!     array.insert(word).unwrap();
//!     list.insert(word).unwrap();
//! }
//!
//! assert!(array.contains("car"));
//! assert!(!list.contains("ca"));
//! assert_eq!(array.total_nodes(), 7);
//! assert_eq!(list.branching_node_count(), 1);
//! assert_eq!(list.average_real_branching_fanout(), 2.0);
//! assert!(list.estimated_memory_usage() < array.estimated_memory_usage());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for node allocation, rejected words and
//!   collected stats.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod alphabet;
pub mod metrics;
pub mod stats;
pub mod trie;

pub use alphabet::{InvalidSymbol, Symbol, ALPHABET_SIZE};
pub use metrics::{RealBranching, TrieMetrics};
pub use stats::{Comparison, TrieStats};
pub use trie::{ArrayNode, ArrayTrie, Link, ListNode, ListTrie, NodeId, Trie, TrieTopology, Words};

// Compile-time assertions for the node layouts the memory model relies on
const _: () = {
    use core::mem;

    // Symbols are a single byte.
    assert!(mem::size_of::<Symbol>() == 1);

    // `NodeId` is a transparent index.
    assert!(mem::size_of::<NodeId>() == mem::size_of::<usize>());

    // The direct table dominates an array node.
    assert!(mem::size_of::<ArrayNode>() >= ALPHABET_SIZE * mem::size_of::<Option<NodeId>>());
    assert!(mem::size_of::<ArrayNode>() < (ALPHABET_SIZE + 1) * mem::size_of::<Option<NodeId>>());

    // A link is a symbol plus a handle, nothing more.
    assert!(mem::size_of::<Link>() <= 2 * mem::size_of::<usize>());

    // A list node without links must stay far smaller than an array node.
    assert!(mem::size_of::<ListNode>() * 4 < mem::size_of::<ArrayNode>());
};
