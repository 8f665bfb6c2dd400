//! # Stash Domain
//!
//! Shared domain types for the stash cache workspace.
//!
//! This crate contains:
//! - The error taxonomy and `Result` alias used across all crates
//! - The persisted record type (`Record`)
//!
//! ## Architecture
//! - No dependencies on other stash crates
//! - Only external dependencies allowed
//! - Pure data types, no I/O

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
