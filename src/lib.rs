//! # Lazyseq: Caller-Driven Lazy Sequences
//!
//! Build finite sequences that produce one element per request, suspend between
//! requests, and can be terminated early or handed a fault mid-series.
//!
//! ## Core Pieces
//!
//! - **[`Production<T>`]**: the outcome of one request, `Value(v)` or `Done`
//! - **[`Producer`]**: the trait for anything that yields a lazy sequence, with
//!   three operations: `advance()`, `terminate()`, and `inject_fault()`
//!
//! ## Key Features
//!
//! - **Deterministic**: every operation is one synchronous step over an explicit
//!   cursor; `Done` is terminal and idempotent
//! - **Cancellable**: `terminate()` retires a producer irreversibly, no matter
//!   how many elements remained
//! - **Fault injection**: `inject_fault()` delivers a caller-supplied token at
//!   the producer's suspension point; the producer's own body decides whether
//!   it is absorbed or escapes
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! // A bounded counting range, driven to exhaustion.
//! let mut total = 0;
//! let count = drain(range(10, 20), |n| total += n);
//! assert_eq!(count, 11);
//! assert_eq!(total, 165);
//! ```
//!
//! ## Common Functions
//!
//! **Building Producers:**
//! - [`range(start, end)`](build::range) - Inclusive counting range
//! - [`values(items)`](build::values) - Hand-authored succession of values
//! - [`handled(items, on_fault)`](build::handled) - Succession with a fault-handling scope
//! - [`from_fn(f)`](build::from_fn) - Producer from a closure
//!
//! **Composition:**
//! - [`chain(a, b)`](compose::chain) - Drain `a`, then `b`
//! - [`map_value(f, p)`](compose::map_value) - Transform each produced value
//!
//! **Consumption:**
//! - [`drain(producer, sink)`](drain) - Drive to `Done`, one sink call per value
//! - [`collect_values(producer)`](collect_values) - Drive to `Done`, collecting into a `Vec`
//! - [`Producer::into_iter`] - Drive with a plain `for` loop

pub mod build;
pub mod compose;
mod drive;
mod fault;
mod iter;
pub mod prelude;
mod producer;
mod production;

pub use drive::{collect_values, drain};
pub use fault::Fault;
pub use iter::ProducerIter;
pub use producer::Producer;
pub use production::Production;
