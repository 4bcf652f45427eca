use std::marker::PhantomData;

use crate::{fault::Fault, Producer, Production};

/// A bounded, inclusive counting range producing `start, start + 1, ..., end`.
///
/// The cursor is the pair `(current, last)`; it only moves forward, one step per
/// [`advance`](Producer::advance). An empty range (`start > end`) is exhausted
/// from the first call. There is no handling scope anywhere in the body, so an
/// injected fault always escapes to the caller and retires the range.
///
/// The fault token type defaults to [`Fault`]; use [`Range::new`] to pick
/// another one.
#[derive(Debug, Clone)]
pub struct Range<F = Fault> {
    current: i64,
    last: i64,
    retired: bool,
    _fault: PhantomData<fn(F)>,
}

/// Create a producer counting from `start` to `end` inclusive.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut numbers = range(10, 12);
/// assert_eq!(numbers.advance(), Production::Value(10));
/// assert_eq!(numbers.advance(), Production::Value(11));
/// assert_eq!(numbers.advance(), Production::Value(12));
/// assert_eq!(numbers.advance(), Production::Done);
/// ```
pub fn range(start: i64, end: i64) -> Range {
    Range::new(start, end)
}

impl<F> Range<F> {
    /// Create a counting range with an explicit fault token type.
    ///
    /// ```rust
    /// use lazyseq::{build::Range, Producer, Production};
    ///
    /// let mut numbers = Range::<&str>::new(1, 3);
    /// assert_eq!(numbers.advance(), Production::Value(1));
    /// assert_eq!(numbers.inject_fault("boom"), Err("boom"));
    /// assert_eq!(numbers.advance(), Production::Done);
    /// ```
    pub fn new(start: i64, end: i64) -> Self {
        Range {
            current: start,
            last: end,
            retired: false,
            _fault: PhantomData,
        }
    }
}

impl<F> Producer for Range<F> {
    type Item = i64;
    type Fault = F;

    fn advance(&mut self) -> Production<Self::Item> {
        if self.retired || self.current > self.last {
            self.retired = true;
            return Production::Done;
        }
        let next = self.current;
        if next == self.last {
            // The cursor never steps past `last`; it would wrap at i64::MAX.
            self.retired = true;
        } else {
            self.current += 1;
        }
        Production::Value(next)
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
