//! Building producers from scratch
//!
//! This module provides the constructors for the built-in producers: counting
//! ranges, hand-authored value successions (with or without a fault-handling
//! scope), and closures.

mod from_fn;
mod range;
mod values;

// Re-export building blocks
pub use from_fn::{from_fn, FromFn};
pub use range::{range, Range};
pub use values::{handled, values, Handled, Values};
