//! # Concord
//!
//! A keyword concordance indexing library for Rust.
//!
//! Concord indexes a small text document for a vocabulary of keywords,
//! recording the character offset of every occurrence, and serves
//! search, add, and remove operations over a fixed-capacity hash table.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Boyer-Moore substring search (bad-character rule)
//! - Configurable collision resolution: separate chaining or linear
//!   probing with tombstones
//! - Pluggable key comparison for the probing table
//! - Flat text dump persistence

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod index;
pub mod matcher;
pub mod session;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
