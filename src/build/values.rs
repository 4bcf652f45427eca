//! Producers over hand-authored value successions.
//!
//! [`values`] plays the role of a generator body that is a plain run of yields;
//! [`handled`] is the same body wrapped, whole, in a single fault-handling scope.

use std::marker::PhantomData;

use crate::{fault::Fault, Producer, Production};

/// A producer over a fixed, hand-authored succession of values.
///
/// The cursor is a program-counter-like position among the pending values. No
/// handling scope covers the body: an injected fault escapes to the caller and
/// retires the producer.
#[derive(Debug)]
pub struct Values<T, F = Fault> {
    pending: std::vec::IntoIter<T>,
    retired: bool,
    _fault: PhantomData<fn(F)>,
}

/// Create a producer yielding each element of `items` in order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut letters = values(vec!['a', 'b']);
/// assert_eq!(letters.advance(), Production::Value('a'));
/// assert_eq!(letters.advance(), Production::Value('b'));
/// assert_eq!(letters.advance(), Production::Done);
/// ```
pub fn values<T>(items: Vec<T>) -> Values<T> {
    Values::new(items)
}

impl<T, F> Values<T, F> {
    /// Create a value succession with an explicit fault token type.
    pub fn new(items: Vec<T>) -> Self {
        Values {
            pending: items.into_iter(),
            retired: false,
            _fault: PhantomData,
        }
    }
}

impl<T, F> Producer for Values<T, F> {
    type Item = T;
    type Fault = F;

    fn advance(&mut self) -> Production<Self::Item> {
        if self.retired {
            return Production::Done;
        }
        match self.pending.next() {
            Some(v) => Production::Value(v),
            None => {
                self.retired = true;
                Production::Done
            }
        }
    }

    fn terminate(&mut self) -> Production<Self::Item> {
        self.retired = true;
        Production::Done
    }

    fn inject_fault(&mut self, fault: Self::Fault) -> Result<Production<Self::Item>, Self::Fault> {
        self.retired = true;
        Err(fault)
    }
}

/// A [`Values`]-like succession whose whole body sits inside one handling scope.
///
/// An injected fault is absorbed: the handler observes the token, and because
/// the scope wraps the entire body, the body then falls through with no further
/// yields. The `inject_fault` call therefore returns `Ok(Done)` and the
/// producer is exhausted. This fixes one deterministic resumption point; a body
/// with yields placed after its handling scope would resume differently.
#[derive(Debug)]
pub struct Handled<T, F, H> {
    pending: std::vec::IntoIter<T>,
    retired: bool,
    on_fault: H,
    _fault: PhantomData<fn(F)>,
}

/// Create a producer over `items` whose body is covered by a handling scope.
///
/// `on_fault` runs synchronously when a fault is injected while the producer is
/// live; it is the observable side effect of handling (recording, reporting).
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seen = Vec::new();
/// let mut numbers = handled(vec![1, 2, 3], |fault: &str| seen.push(fault));
///
/// assert_eq!(numbers.advance(), Production::Value(1));
/// // The fault is absorbed by the body's own scope, never reaching us.
/// assert_eq!(numbers.inject_fault("some error..."), Ok(Production::Done));
/// assert_eq!(numbers.advance(), Production::Done);
/// drop(numbers);
/// assert_eq!(seen, vec!["some error..."]);
/// ```
pub fn handled<T, F, H>(items: Vec<T>, on_fault: H) -> Handled<T, F, H>
where
    H: FnMut(F),
{
    Handled {
        pending: items.into_iter(),
        retired: false,
        on_fault,
        _fault: PhantomData,
    }
}

impl<T, F, H> Producer for Handled<T, F, H>
where
    H: FnMut(F),
{
    type Item = T;
    type Fault = F;

    fn advance(&mut self) -> Production<Self::Item> {
        if self.retired {
            return Production::Done;
        }
        match self.pending.next() {
            Some(v) => Production::Value(v),
            None => {
                self.retired = true;
                Production::Done
            }
        }
    }

    fn terminate(&mut self) -> Production<Self::Item> {
        self.retired = true;
        Production::Done
    }

    fn inject_fault(&mut self, fault: Self::Fault) -> Result<Production<Self::Item>, Self::Fault> {
        if self.retired {
            // No live suspension point left for the scope to cover.
            return Err(fault);
        }
        (self.on_fault)(fault);
        self.retired = true;
        Ok(Production::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_yields_in_order_then_done() {
        let mut letters = values(vec!["a", "b", "c"]);

        assert_eq!(letters.advance(), Production::Value("a"));
        assert_eq!(letters.advance(), Production::Value("b"));
        assert_eq!(letters.advance(), Production::Value("c"));
        assert_eq!(letters.advance(), Production::Done);
        assert_eq!(letters.advance(), Production::Done);
    }

    #[test]
    fn test_values_terminate_mid_series() {
        let mut numbers = values(vec![1, 2, 3]);

        assert_eq!(numbers.advance(), Production::Value(1));
        assert_eq!(numbers.terminate(), Production::Done);
        assert_eq!(numbers.advance(), Production::Done);
    }

    #[test]
    fn test_values_fault_escapes() {
        let mut numbers = values(vec![1, 2, 3]);

        assert_eq!(numbers.advance(), Production::Value(1));
        assert_eq!(
            numbers.inject_fault(Fault::new("some error...")),
            Err(Fault::new("some error..."))
        );
        assert_eq!(numbers.advance(), Production::Done);
    }

    #[test]
    fn test_empty_values_is_immediately_done() {
        let mut empty = values(Vec::<i32>::new());
        assert_eq!(empty.advance(), Production::Done);
    }

    #[test]
    fn test_handled_fault_runs_handler_and_falls_through() {
        let mut seen = Vec::new();
        {
            let mut numbers = handled(vec![1, 2, 3], |fault: Fault| seen.push(fault));

            assert_eq!(numbers.advance(), Production::Value(1));
            assert_eq!(
                numbers.inject_fault(Fault::new("some error...")),
                Ok(Production::Done)
            );
            // The body fell through its scope: nothing left to yield.
            assert_eq!(numbers.advance(), Production::Done);
            assert_eq!(numbers.advance(), Production::Done);
        }
        assert_eq!(seen, vec![Fault::new("some error...")]);
    }

    #[test]
    fn test_handled_without_faults_behaves_like_values() {
        let mut numbers = handled(vec![1, 2], |_: Fault| unreachable!("no fault injected"));

        assert_eq!(numbers.advance(), Production::Value(1));
        assert_eq!(numbers.advance(), Production::Value(2));
        assert_eq!(numbers.advance(), Production::Done);
    }

    #[test]
    fn test_handled_fault_after_exhaustion_escapes() {
        let mut observed = 0;
        {
            let mut numbers = handled(vec![1], |_: Fault| observed += 1);

            assert_eq!(numbers.advance(), Production::Value(1));
            assert_eq!(numbers.advance(), Production::Done);
            assert_eq!(
                numbers.inject_fault(Fault::new("late")),
                Err(Fault::new("late"))
            );
        }
        assert_eq!(observed, 0);
    }

    #[test]
    fn test_handled_terminate_skips_the_handler() {
        let mut observed = 0;
        {
            let mut numbers = handled(vec![1, 2], |_: Fault| observed += 1);

            assert_eq!(numbers.terminate(), Production::Done);
            assert_eq!(
                numbers.inject_fault(Fault::new("after stop")),
                Err(Fault::new("after stop"))
            );
        }
        assert_eq!(observed, 0);
    }
}
