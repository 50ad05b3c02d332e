//! Koa Trie: a multi-way prefix tree for strings.
//!
//! This crate provides a trie that stores strings as paths of characters,
//! with fast insertion, exact-membership lookup, and prefix completion.
//! The cost of a lookup or completion depends only on the length of the
//! query and the size of the matched subtree, never on the total number of
//! strings stored, which makes the structure a good fit for spell checking
//! and autocompletion workloads.
//!
//! # Features
//!
//! - Idempotent insertion with a distinct-string count
//! - Exact membership checks in O(key length)
//! - Prefix completion bounded by the matched subtree
//! - Deterministic, lexicographically sorted traversal output
//! - Iterative traversal with stack depth independent of key length
//!
//! # Example
//!
//! ```
//! use koa_trie::KoaTrie;
//!
//! let mut trie = KoaTrie::new();
//! trie.insert("ABC");
//! trie.insert("ABD");
//! trie.insert("A");
//! trie.insert("XYZ");
//!
//! assert_eq!(trie.len(), 4);
//! assert!(trie.contains("A"));
//! assert!(!trie.contains("AB"));
//! assert_eq!(trie.complete("AB"), vec!["ABC".to_string(), "ABD".to_string()]);
//! assert_eq!(trie.complete("Z"), Vec::<String>::new());
//! ```
//!
//! # Performance Characteristics
//!
//! - `insert`: O(m) where m is the length of the inserted string
//! - `contains`: O(m)
//! - `complete`: O(c) where c is the number of characters in the matched
//!   subtree, independent of the total number of stored strings
//! - `strings`: O(c) over the whole tree

mod config;
mod error;
mod node;
mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Re-exports
pub use config::KoaTrieConfig;
pub use error::{KoaTrieError, KoaTrieResult};
pub use node::TrieNode;
pub use trie::KoaTrie;

/// Version information for the Koa Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
