//! Structural metrics over any [`TrieTopology`].
//!
//! Every metric is a fresh depth-first walk of the whole tree; nothing is
//! cached or maintained incrementally, so each call costs O(nodes) and always
//! reflects the current shape. The root is never counted as a node: walks
//! start from the root's children and recurse generically from there.
//!
//! Walks use an explicit stack, so tree depth is bounded by heap, not by the
//! call stack.

use serde::{Deserialize, Serialize};

use crate::trie::{NodeId, TrieTopology};

/// Visits every node below the root, in depth-first pre-order.
fn for_each_descendant<T, F>(trie: &T, mut visit: F)
where
    T: TrieTopology + ?Sized,
    F: FnMut(NodeId),
{
    let mut stack: Vec<NodeId> = trie.children(trie.root()).map(|(_, child)| child).collect();
    stack.reverse();
    while let Some(node) = stack.pop() {
        visit(node);
        let mark = stack.len();
        stack.extend(trie.children(node).map(|(_, child)| child));
        stack[mark..].reverse();
    }
}

/// Sums `weight` over every non-root node.
fn sum_descendants<T, F>(trie: &T, mut weight: F) -> usize
where
    T: TrieTopology + ?Sized,
    F: FnMut(NodeId) -> usize,
{
    let mut total = 0;
    for_each_descendant(trie, |node| total += weight(node));
    total
}

/// Number of nodes below the root.
pub fn total_nodes<T: TrieTopology + ?Sized>(trie: &T) -> usize {
    sum_descendants(trie, |_| 1)
}

/// Number of nodes reachable from the root, the root included.
pub fn reachable_nodes<T: TrieTopology + ?Sized>(trie: &T) -> usize {
    total_nodes(trie) + 1
}

/// Number of terminal nodes. A terminal root (the empty word) counts.
pub fn word_count<T: TrieTopology + ?Sized>(trie: &T) -> usize {
    usize::from(trie.is_terminal(trie.root()))
        + sum_descendants(trie, |node| usize::from(trie.is_terminal(node)))
}

/// Number of non-root nodes with at least one child.
pub fn internal_node_count<T: TrieTopology + ?Sized>(trie: &T) -> usize {
    sum_descendants(trie, |node| usize::from(trie.out_degree(node) > 0))
}

/// Number of non-root nodes with more than one child.
pub fn branching_node_count<T: TrieTopology + ?Sized>(trie: &T) -> usize {
    sum_descendants(trie, |node| usize::from(trie.out_degree(node) > 1))
}

/// True if `node` is terminal or has a terminal node anywhere below it.
pub fn has_any_word<T: TrieTopology + ?Sized>(trie: &T, node: NodeId) -> bool {
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        if trie.is_terminal(node) {
            return true;
        }
        stack.extend(trie.children(node).map(|(_, child)| child));
    }
    false
}

/// Whether a non-root `node` is a real branching point.
///
/// The node needs more than one child, and a running tally over its children
/// must reach 2. Each child adds one for being terminal and one more if
/// [`has_any_word`] holds for it, so a single terminal child reaches the
/// threshold on its own.
pub fn is_real_branch<T: TrieTopology + ?Sized>(trie: &T, node: NodeId) -> bool {
    if trie.out_degree(node) <= 1 {
        return false;
    }
    let mut word_paths = 0usize;
    for (_, child) in trie.children(node) {
        if trie.is_terminal(child) {
            word_paths += 1;
        }
        if has_any_word(trie, child) {
            word_paths += 1;
        }
        if word_paths >= 2 {
            return true;
        }
    }
    false
}

/// Tally of real branching points and their combined fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealBranching {
    /// Number of real branching nodes.
    pub branches: usize,
    /// Sum of the full out-degree of every real branching node.
    pub fanout_sum: usize,
}

impl RealBranching {
    /// Mean fan-out at real branching points, `0.0` when there are none.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fanout(&self) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            self.fanout_sum as f64 / self.branches as f64
        }
    }
}

/// Walks the tree classifying every non-root node with [`is_real_branch`].
pub fn real_branching<T: TrieTopology + ?Sized>(trie: &T) -> RealBranching {
    let mut tally = RealBranching::default();
    for_each_descendant(trie, |node| {
        if is_real_branch(trie, node) {
            tally.branches += 1;
            tally.fanout_sum += trie.out_degree(node);
        }
    });
    tally
}

/// Method-call access to the metrics for every [`TrieTopology`].
pub trait TrieMetrics: TrieTopology {
    /// See [`total_nodes`].
    fn total_nodes(&self) -> usize {
        total_nodes(self)
    }

    /// See [`word_count`].
    fn word_count(&self) -> usize {
        word_count(self)
    }

    /// See [`internal_node_count`].
    fn internal_node_count(&self) -> usize {
        internal_node_count(self)
    }

    /// See [`branching_node_count`].
    fn branching_node_count(&self) -> usize {
        branching_node_count(self)
    }

    /// See [`real_branching`].
    fn real_branching(&self) -> RealBranching {
        real_branching(self)
    }

    /// Number of real branching nodes.
    fn real_branching_node_count(&self) -> usize {
        real_branching(self).branches
    }

    /// Mean out-degree over real branching nodes, `0.0` if there are none.
    fn average_real_branching_fanout(&self) -> f64 {
        real_branching(self).average_fanout()
    }
}

impl<T: TrieTopology + ?Sized> TrieMetrics for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::{ArrayTrie, ListTrie, Trie};

    fn array(words: &[&str]) -> ArrayTrie {
        let mut trie = ArrayTrie::new();
        trie.insert_all(words).unwrap();
        trie
    }

    fn list(words: &[&str]) -> ListTrie {
        let mut trie = ListTrie::new();
        trie.insert_all(words).unwrap();
        trie
    }

    #[test]
    fn test_empty_trie_metrics() {
        let trie = ArrayTrie::new();
        assert_eq!(trie.total_nodes(), 0);
        assert_eq!(trie.word_count(), 0);
        assert_eq!(trie.internal_node_count(), 0);
        assert_eq!(trie.branching_node_count(), 0);
        assert_eq!(trie.real_branching(), RealBranching::default());
        assert_eq!(trie.average_real_branching_fanout(), 0.0);
        assert_eq!(reachable_nodes(&trie), 1);
    }

    #[test]
    fn test_root_fanout_is_not_a_branch() {
        // root has three children but is never classified
        let trie = list(&["a", "b", "c"]);
        assert_eq!(trie.total_nodes(), 3);
        assert_eq!(trie.internal_node_count(), 0);
        assert_eq!(trie.branching_node_count(), 0);
        assert_eq!(trie.real_branching_node_count(), 0);
        assert_eq!(trie.average_real_branching_fanout(), 0.0);
    }

    #[test]
    fn test_internal_nodes_ignore_terminal_flag() {
        let trie = array(&["ab", "abcd"]);
        // a, b, c have children; d is a leaf
        assert_eq!(trie.internal_node_count(), 3);
        assert_eq!(trie.word_count(), 2);
    }

    #[test]
    fn test_has_any_word() {
        let trie = array(&["abc"]);
        let a = trie.child(trie.root(), crate::alphabet::Symbol::from_char('a').unwrap()).unwrap();
        assert!(has_any_word(&trie, a));
        assert!(!has_any_word(&ArrayTrie::new(), NodeId::ROOT));
    }

    #[test]
    fn test_single_terminal_child_makes_real_branch() {
        // Node "a" has children "b" (terminal leaf) and "c" (prefix of "cd").
        let trie = list(&["ab", "acd"]);
        let a = trie.children(trie.root()).next().unwrap().1;
        assert!(is_real_branch(&trie, a));
        assert_eq!(trie.real_branching(), RealBranching { branches: 1, fanout_sum: 2 });
    }

    #[test]
    fn test_nested_real_branches_average() {
        // "t" -> {"o", "e"}; "to" -> {"p", "n"}
        let trie = array(&["top", "ton", "tea", "teal"]);
        assert_eq!(trie.branching_node_count(), 2);
        let tally = trie.real_branching();
        assert_eq!(tally.branches, 2);
        assert_eq!(tally.fanout_sum, 4);
        assert_eq!(tally.average_fanout(), 2.0);
    }

    #[test]
    fn test_mixed_fanout_average() {
        // "a" branches 3 ways, "ab" branches 2 ways
        let trie = list(&["abx", "aby", "ac", "ad"]);
        assert_eq!(trie.real_branching(), RealBranching { branches: 2, fanout_sum: 5 });
        assert_eq!(trie.average_real_branching_fanout(), 2.5);
    }

    #[test]
    fn test_recount_after_mutation() {
        let mut trie = array(&["cat"]);
        assert_eq!(trie.branching_node_count(), 0);
        trie.insert("car").unwrap();
        assert_eq!(trie.branching_node_count(), 1);
        assert_eq!(trie.total_nodes(), 4);
        trie.insert("ca").unwrap();
        assert_eq!(trie.word_count(), 3);
        assert_eq!(trie.total_nodes(), 4);
    }
}
