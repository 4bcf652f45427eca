//! Functions for driving producers to exhaustion.
//!
//! This module provides the canonical consuming loop: call
//! [`advance`](crate::Producer::advance) until `Done`, handing each value to a
//! sink as it arrives.

use crate::{producer::Producer, production::Production};

/// Drive a producer to exhaustion, passing each value to `sink` in order.
///
/// Returns the number of values produced. The loop stops at the first `Done`
/// and never calls `sink` again afterwards.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut printed = Vec::new();
/// let count = drain(range(10, 12), |n| printed.push(n));
/// assert_eq!(count, 3);
/// assert_eq!(printed, vec![10, 11, 12]);
/// ```
pub fn drain<P, S>(mut producer: P, mut sink: S) -> usize
where
    P: Producer,
    S: FnMut(P::Item),
{
    let mut produced = 0;
    loop {
        match producer.advance() {
            Production::Value(v) => {
                sink(v);
                produced += 1;
            }
            Production::Done => return produced,
        }
    }
}

/// Drive a producer to exhaustion, collecting every value into a `Vec`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(collect_values(range(1, 4)), vec![1, 2, 3, 4]);
/// assert_eq!(collect_values(range(4, 1)), Vec::<i64>::new());
/// ```
pub fn collect_values<P>(producer: P) -> Vec<P::Item>
where
    P: Producer,
{
    let mut collected = Vec::new();
    drain(producer, |v| collected.push(v));
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{range, values};
    use crate::fault::Fault;
    use crate::Producer;

    #[test]
    fn test_drain_round_trip_over_range() {
        let mut seen = Vec::new();
        let count = drain(range(10, 20), |n| seen.push(n));

        assert_eq!(count, 11);
        assert_eq!(seen, (10..=20).collect::<Vec<i64>>());
    }

    #[test]
    fn test_drain_empty_producer_never_calls_sink() {
        let count = drain(range(1, 0), |_| panic!("sink must not run"));
        assert_eq!(count, 0);
    }

    #[test]
    fn test_drain_partially_consumed_producer() {
        let mut producer = values(vec![1, 2, 3]);
        assert_eq!(producer.advance(), crate::Production::Value(1));

        // Draining picks up wherever the cursor currently stands.
        assert_eq!(collect_values(producer), vec![2, 3]);
    }

    #[test]
    fn test_drain_terminated_producer_produces_nothing() {
        let mut producer: crate::build::Values<i64, Fault> = values(vec![1, 2, 3]);
        producer.terminate();

        assert_eq!(drain(producer, |_| panic!("sink must not run")), 0);
    }

    #[test]
    fn test_collect_values_preserves_order() {
        assert_eq!(
            collect_values(values(vec!["x", "y", "z"])),
            vec!["x", "y", "z"]
        );
    }
}
