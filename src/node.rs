//! Node implementation for the Koa Trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node
//! represents one character on a path from the root, owns its children
//! outright, and knows nothing about the tree as a whole.

use std::collections::BTreeMap;

use crate::error::{KoaTrieError, KoaTrieResult};

/// A node in the Koa Trie.
///
/// Each node holds the symbol it represents, a terminal flag marking the
/// end of a stored string, and an ordered map of child nodes. The root node
/// holds no symbol at all; its sentinel `None` can never collide with a
/// real input character.
///
/// Children are kept in a `BTreeMap` so that iteration, and therefore all
/// traversal output, is deterministic and lexicographically sorted.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// The character this node represents, or `None` for the root sentinel.
    pub(crate) symbol: Option<char>,

    /// Whether this node represents the end of a stored string.
    pub(crate) terminal: bool,

    /// Map of characters to owned child nodes.
    pub(crate) children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates a new node for the given character.
    pub fn new(symbol: char) -> Self {
        Self {
            symbol: Some(symbol),
            terminal: false,
            children: BTreeMap::new(),
        }
    }

    /// Creates the sentinel root node, which carries no symbol.
    pub fn sentinel() -> Self {
        Self {
            symbol: None,
            terminal: false,
            children: BTreeMap::new(),
        }
    }

    /// Returns `true` if a child exists for the given symbol.
    pub fn has_child(&self, symbol: char) -> bool {
        self.children.contains_key(&symbol)
    }

    /// Returns the child node for the given symbol.
    ///
    /// # Errors
    ///
    /// Returns [`KoaTrieError::ChildNotFound`] when no child exists for
    /// `symbol`. The trie consumes this signal internally; it never
    /// escapes a public operation.
    pub fn get_child(&self, symbol: char) -> KoaTrieResult<&TrieNode> {
        self.children
            .get(&symbol)
            .ok_or(KoaTrieError::ChildNotFound { symbol })
    }

    /// Inserts or replaces the child mapping for the given symbol.
    ///
    /// Idempotent for identical insertions. The trie only calls this after
    /// `has_child` reports `false`, so replacement never happens during
    /// normal construction.
    pub fn add_child(&mut self, symbol: char, node: TrieNode) {
        self.children.insert(symbol, node);
    }

    /// Returns whether this node marks the end of a stored string.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}
