//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Fault, Producer, Production};

// Most common constructors
pub use crate::build::{from_fn, handled, range, values};

// Composition
pub use crate::compose::{chain, map_value};

// Consumption
pub use crate::drive::{collect_values, drain};
pub use crate::iter::ProducerIter;
