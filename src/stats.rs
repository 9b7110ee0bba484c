//! Metric snapshots and side-by-side comparison of both representations.

use serde::{Deserialize, Serialize};

use crate::alphabet::InvalidSymbol;
use crate::metrics::{self, RealBranching};
use crate::trie::{ArrayTrie, ListTrie, Trie};

/// Every structural metric of one trie, plus its memory estimate.
///
/// The average real-branching fan-out is not stored; it is derived from
/// [`TrieStats::real_branching`] so a deserialized snapshot cannot contradict
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Nodes below the root.
    pub total_nodes: usize,
    /// Terminal nodes.
    pub word_count: usize,
    /// Non-root nodes with at least one child.
    pub internal_nodes: usize,
    /// Non-root nodes with more than one child.
    pub branching_nodes: usize,
    /// Real branching tally.
    pub real_branching: RealBranching,
    /// Cost-model memory estimate in bytes.
    pub estimated_memory_bytes: usize,
}

impl TrieStats {
    /// Gathers every metric, each with its own traversal.
    pub fn collect<T: Trie>(trie: &T) -> Self {
        let real_branching = metrics::real_branching(trie);
        let stats = Self {
            total_nodes: metrics::total_nodes(trie),
            word_count: metrics::word_count(trie),
            internal_nodes: metrics::internal_node_count(trie),
            branching_nodes: metrics::branching_node_count(trie),
            real_branching,
            estimated_memory_bytes: trie.estimated_memory_usage(),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            total_nodes = stats.total_nodes,
            words = stats.word_count,
            internal = stats.internal_nodes,
            branching = stats.branching_nodes,
            real_branching = stats.real_branching.branches,
            bytes = stats.estimated_memory_bytes,
            "collected trie stats"
        );
        stats
    }

    /// Number of real branching nodes.
    pub fn real_branching_nodes(&self) -> usize {
        self.real_branching.branches
    }

    /// Mean fan-out at real branching nodes, `0.0` if there are none.
    pub fn average_real_branching_fanout(&self) -> f64 {
        self.real_branching.average_fanout()
    }

    /// True if both snapshots describe the same tree shape.
    ///
    /// Memory is left out: it differs by representation.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.total_nodes == other.total_nodes
            && self.word_count == other.word_count
            && self.internal_nodes == other.internal_nodes
            && self.branching_nodes == other.branching_nodes
            && self.real_branching == other.real_branching
    }
}

/// The same word set indexed by both representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Stats of the [`ArrayTrie`].
    pub array: TrieStats,
    /// Stats of the [`ListTrie`].
    pub list: TrieStats,
}

impl Comparison {
    /// Snapshots two already-built tries.
    pub fn of(array: &ArrayTrie, list: &ListTrie) -> Self {
        Self {
            array: array.stats(),
            list: list.stats(),
        }
    }

    /// Builds an [`ArrayTrie`] and a [`ListTrie`] from `words` and compares them.
    ///
    /// # Errors
    /// Returns the first [`InvalidSymbol`] met in `words`.
    pub fn from_words<I, S>(words: I) -> Result<Self, InvalidSymbol>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut array = ArrayTrie::new();
        let mut list = ListTrie::new();
        for word in words {
            let word = word.as_ref();
            array.insert(word)?;
            list.insert(word)?;
        }
        Ok(Self::of(&array, &list))
    }

    /// True if both representations report the same structural metrics.
    pub fn structurally_equal(&self) -> bool {
        self.array.same_shape(&self.list)
    }

    /// List memory estimate divided by array memory estimate.
    #[allow(clippy::cast_precision_loss)]
    pub fn memory_ratio(&self) -> f64 {
        if self.array.estimated_memory_bytes == 0 {
            return 0.0;
        }
        self.list.estimated_memory_bytes as f64 / self.array.estimated_memory_bytes as f64
    }
}
