//! Test modules for the Koa Trie.
//!
//! This module contains the crate-internal testing infrastructure:
//! - Behavioral unit tests for every public operation
//! - Property-based tests using proptest
//! - Shared test strategies and fixtures
//!
//! Integration tests that exercise the crate strictly through its public
//! API live in the top-level `tests/` directory.

pub mod property_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{corpus_strategy, key_strategy, unicode_key_strategy};
