//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger summary as a fixed-width
//! table for terminal display.

pub mod summary;

pub use summary::{format_summary, separator};
