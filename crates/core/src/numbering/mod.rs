//! Sequential document number assignment.
//!
//! Numbers are human-readable strings like `RE-2026-02`: a prefix
//! (usually carrying a year context), a dash, and a zero-padded suffix.

pub mod sequence;

pub use sequence::{next_number, yearly_prefix};
