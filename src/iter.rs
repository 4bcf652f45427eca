//! Iterator adapter for producers.
//!
//! This module lets any [`Producer`] drive a `for` loop: the adapter calls
//! [`advance`](Producer::advance) per iteration and stops at the first `Done`.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let collected: Vec<i64> = range(100, 103).into_iter().collect();
//! assert_eq!(collected, vec![100, 101, 102, 103]);
//! ```
//!
//! Driving by `&mut` keeps the wrapper available afterwards:
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut iter = range(1, 3).into_iter();
//! let first_two: Vec<i64> = (&mut iter).take(2).collect();
//! assert_eq!(first_two, vec![1, 2]);
//! assert!(!iter.is_finished());
//! ```

use crate::{Producer, Production};

/// Iterator adapter for a [`Producer`].
///
/// Repeatedly calls `advance()` on the wrapped producer and yields values until
/// the producer answers `Done`. Terminal-state idempotence makes the iterator
/// naturally fused.
pub struct ProducerIter<P> {
    producer: P,
    finished: bool,
}

impl<P> ProducerIter<P>
where
    P: Producer,
{
    /// Create a new iterator from a producer.
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            finished: false,
        }
    }

    /// Check if the underlying producer has been observed to be `Done`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consume the adapter and hand the producer back.
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P> Iterator for ProducerIter<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.producer.advance() {
            Production::Value(v) => Some(v),
            Production::Done => {
                self.finished = true;
                None
            }
        }
    }
}
