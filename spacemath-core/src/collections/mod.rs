//! Utilities over sorted sequences.

pub mod search;
