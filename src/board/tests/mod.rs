//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece generation and the legality filter
//! - `perft.rs` - Move tree node counts against known values
//! - `edge_cases.rs` - Checkmate, stalemate, promotion and move application
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Alpha-beta and root move selection
//! - `proptest.rs` - Property-based tests

mod search;
