// Copyright (c) 2025 Koa Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Koa Trie.

/// Configuration options for the Koa Trie.
///
/// The defaults treat every character as an opaque symbol: keys are stored
/// exactly as given, with no case folding or normalization of any kind.
#[derive(Debug, Clone)]
pub struct KoaTrieConfig {
    /// Whether keys are compared case-sensitively.
    ///
    /// When disabled, keys are lowercased before insertion and lookup, so
    /// `"Apple"` and `"apple"` denote the same stored string.
    case_sensitive: bool,
}

impl KoaTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - case_sensitive: true
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
        }
    }

    /// Set whether keys are compared case-sensitively.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Get whether keys are compared case-sensitively.
    pub fn get_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl Default for KoaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
