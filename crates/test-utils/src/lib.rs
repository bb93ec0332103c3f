//! Shared test fixtures for GraphQL introspection results.
//!
//! Use these for tests that do not need a custom schema. For tests where
//! the schema structure is the point of the test case, prefer inline
//! fixtures to keep the test self-documenting.

// Test utilities are less strict than production code
#![allow(clippy::doc_markdown)]

pub mod fixtures;
