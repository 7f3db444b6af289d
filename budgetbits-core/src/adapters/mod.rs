//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Local JSON files for the DocumentStore port
//! - An in-memory map for unit tests

pub mod json_file;

#[cfg(test)]
pub mod memory;
