//! Combining producers together
//!
//! This module provides functions for chaining producers and transforming the
//! values they yield.

mod chain;
mod map;

// Re-export composition operations
pub use chain::{chain, Chain};
pub use map::{map_value, MapValue};
