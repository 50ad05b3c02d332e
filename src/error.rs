// Copyright (c) 2025 Koa Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Koa Trie.
//!
//! The taxonomy is deliberately narrow. `ChildNotFound` is a node-level
//! signal consumed entirely within the trie's own walk logic (it means
//! "no such path, stop or create") and never escapes a public trie
//! operation, all of which are total over any input string.

/// Errors that can occur in Koa Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KoaTrieError {
    /// A node has no child for the requested symbol.
    #[error("no child node for symbol {symbol:?}")]
    ChildNotFound {
        /// The symbol that had no corresponding child.
        symbol: char,
    },
}

/// Result type for Koa Trie operations.
pub type KoaTrieResult<T> = Result<T, KoaTrieError>;
