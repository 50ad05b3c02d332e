//! Koa Trie implementation.
//!
//! This module provides the trie itself: insertion, exact-membership
//! lookup, prefix completion, and full listing of stored strings. The trie
//! owns its root node and walks child links downward; nodes never call
//! back into the trie.

use std::borrow::Cow;

use crate::config::KoaTrieConfig;
use crate::node::TrieNode;

/// A multi-way prefix tree that stores strings.
///
/// Each string is stored as a sequence of characters along a path from the
/// root node to a terminal node that marks the end of the string. Shared
/// prefixes share nodes, so lookup and completion cost depends only on the
/// query length and the size of the matched subtree, never on the total
/// number of stored strings.
///
/// Key properties:
/// * Idempotent insertion; `len` counts distinct strings only
/// * `contains` is true only for exact, fully-consumed matches
/// * Completion and listing output is lexicographically sorted
/// * No deletion of individual keys; the structure only grows
///
/// The trie performs no internal synchronization. Mutation requires
/// `&mut self`, so concurrent use across threads is governed by the usual
/// borrowing rules (wrap in a lock for shared mutation).
#[derive(Debug, Clone)]
pub struct KoaTrie {
    /// The sentinel root node of the trie.
    root: TrieNode,

    /// Number of distinct strings stored in the trie.
    len: usize,

    /// Configuration options.
    config: KoaTrieConfig,
}

impl KoaTrie {
    /// Creates a new empty `KoaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(KoaTrieConfig::default())
    }

    /// Creates a new empty `KoaTrie` with the specified configuration.
    pub fn with_config(config: KoaTrieConfig) -> Self {
        Self {
            root: TrieNode::sentinel(),
            len: 0,
            config,
        }
    }

    /// Inserts a string into the trie.
    ///
    /// Walks from the root one character at a time, creating nodes for
    /// characters that have no path yet, then marks the final node
    /// terminal. Inserting a string that is already present changes
    /// nothing. The empty string is valid input and marks the root itself.
    ///
    /// # Arguments
    ///
    /// * `key` - The string to insert.
    ///
    /// # Returns
    ///
    /// `true` if the string was newly inserted, `false` if it was already
    /// present.
    pub fn insert<K>(&mut self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let key = self.normalize_key(key.as_ref());

        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_insert_with(|| TrieNode::new(c));
        }

        let is_new = !node.is_terminal();
        if is_new {
            node.terminal = true;
            self.len += 1;
            tracing::trace!(key = %key, len = self.len, "inserted string");
        }

        is_new
    }

    /// Checks whether the trie contains the given string.
    ///
    /// Returns `true` only if the node reached after consuming the entire
    /// input is terminal. A missing edge anywhere along the walk means the
    /// string is absent, even when a shorter stored string is an ancestor
    /// of the failed match.
    ///
    /// # Arguments
    ///
    /// * `key` - The string to look up.
    ///
    /// # Returns
    ///
    /// `true` if the exact string was previously inserted.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let key = self.normalize_key(key.as_ref());

        let mut node = &self.root;
        for c in key.chars() {
            match node.get_child(c) {
                Ok(child) => node = child,
                Err(_) => return false,
            }
        }

        node.is_terminal()
    }

    /// Returns all stored strings that start with the given prefix.
    ///
    /// An empty prefix returns every stored string, the same as
    /// [`strings`](Self::strings). If some prefix character has no
    /// corresponding child, the result is empty. Output is
    /// lexicographically sorted.
    ///
    /// Cost is bounded by the size of the matched subtree, independent of
    /// the total number of stored strings.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to complete.
    ///
    /// # Returns
    ///
    /// Every stored string beginning with `prefix`, in sorted order.
    pub fn complete<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize_key(prefix.as_ref());
        if prefix.is_empty() {
            return self.strings();
        }

        let (node, matched) = self.find_node(&prefix);
        if matched < prefix.chars().count() {
            // Some prefix character had no child; nothing starts with it.
            return Vec::new();
        }

        let mut completions = Vec::new();
        Self::traverse(node, prefix.into_owned(), &mut |s| completions.push(s));
        completions
    }

    /// Returns all strings stored in the trie, lexicographically sorted.
    pub fn strings(&self) -> Vec<String> {
        let mut all_strings = Vec::new();
        Self::traverse(&self.root, String::new(), &mut |s| all_strings.push(s));
        all_strings
    }

    /// Returns the number of distinct strings stored in the trie.
    ///
    /// Maintained on insertion, so this is O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the trie contains no strings.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every string from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::sentinel();
        self.len = 0;
        tracing::debug!("cleared trie");
    }

    /// Lowercases the key when the trie is configured case-insensitively.
    fn normalize_key<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if self.config.get_case_sensitive() {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        }
    }

    /// Returns the deepest node reachable by consuming `key` character by
    /// character, together with how many characters were matched.
    ///
    /// Stops at the first missing child or after consuming all of `key`.
    /// The walk is iterative; no nodes are created.
    fn find_node(&self, key: &str) -> (&TrieNode, usize) {
        let mut node = &self.root;
        let mut matched = 0;

        for c in key.chars() {
            match node.get_child(c) {
                Ok(child) => {
                    node = child;
                    matched += 1;
                }
                Err(_) => break,
            }
        }

        (node, matched)
    }

    /// Depth-first traversal from `node`, invoking `visit` with the full
    /// string for every terminal node encountered.
    ///
    /// `prefix` is the path from the root to `node`. The traversal uses an
    /// explicit work-list instead of call-stack recursion, so stack depth
    /// is independent of the length of stored strings. A terminal node is
    /// visited before its descendants and children are expanded in
    /// ascending symbol order, which yields sorted output overall.
    fn traverse<F>(node: &TrieNode, prefix: String, visit: &mut F)
    where
        F: FnMut(String),
    {
        let mut work = vec![(node, prefix)];

        while let Some((node, prefix)) = work.pop() {
            if node.is_terminal() {
                visit(prefix.clone());
            }

            // Reversed push order so the stack pops children in ascending
            // symbol order.
            for child in node.children.values().rev() {
                let mut path = prefix.clone();
                // Only the root sentinel lacks a symbol, and it is never a child.
                if let Some(c) = child.symbol {
                    path.push(c);
                }
                work.push((child, path));
            }
        }
    }
}

impl Default for KoaTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FromIterator<S> for KoaTrie
where
    S: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut trie = KoaTrie::new();
        trie.extend(iter);
        trie
    }
}

impl<S> Extend<S> for KoaTrie
where
    S: AsRef<str>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = S>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}
