//! Word enumeration.

use super::TrieTopology;

/// Iterator over the words stored in a trie.
///
/// Walks depth-first and yields a word as soon as its terminal node is
/// reached, so a word always comes before its extensions. Order among
/// siblings follows the representation's child order.
pub struct Words<'a, T: TrieTopology + 'a> {
    trie: &'a T,
    // One child iterator per level of the current path; depth = key_buf.len() + 1
    stack: Vec<T::Children<'a>>,
    key_buf: String,
    // The empty word lives on the root and is yielded first.
    pending_root: bool,
}

impl<'a, T: TrieTopology + 'a> Words<'a, T> {
    /// Starts a walk at the root of `trie`.
    pub fn new(trie: &'a T) -> Self {
        let root = trie.root();
        Self {
            trie,
            stack: vec![trie.children(root)],
            key_buf: String::new(),
            pending_root: trie.is_terminal(root),
        }
    }
}

impl<'a, T: TrieTopology + 'a> Iterator for Words<'a, T> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if core::mem::take(&mut self.pending_root) {
            return Some(String::new());
        }

        loop {
            let top = self.stack.last_mut()?;
            if let Some((symbol, child)) = top.next() {
                self.key_buf.push(symbol.to_char());
                self.stack.push(self.trie.children(child));
                if self.trie.is_terminal(child) {
                    return Some(self.key_buf.clone());
                }
            } else {
                // Done with this node
                self.stack.pop();
                self.key_buf.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::trie::{ArrayTrie, ListTrie, Trie};

    #[test]
    fn test_words_array_lexicographic() {
        let mut trie = ArrayTrie::new();
        trie.insert_all(["banana", "apple", "app", "b"]).unwrap();
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words, ["app", "apple", "b", "banana"]);
    }

    #[test]
    fn test_words_list_first_seen_order() {
        let mut trie = ListTrie::new();
        trie.insert_all(["dog", "cat", "car", "do"]).unwrap();
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words, ["do", "dog", "cat", "car"]);
    }

    #[test]
    fn test_words_empty_word_first() {
        let mut trie = ListTrie::new();
        assert_eq!(trie.words().count(), 0);

        trie.insert_all(["x", ""]).unwrap();
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words, ["", "x"]);
    }
}
