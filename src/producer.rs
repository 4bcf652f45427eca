//! Core trait for lazy sequence producers.
//!
//! This module defines the [`Producer`] trait, the fundamental building block of
//! this library. A [`Producer`] encapsulates a cursor into a logical series and
//! yields one element per request, suspending all internal progress between calls.
//!
//! # The Producer Trait
//!
//! A [`Producer`] represents a finite series that:
//! - Yields elements of type `Item`, one per [`advance`](Producer::advance) call
//! - Can be cancelled at any point with [`terminate`](Producer::terminate)
//! - Can have a token of type `Fault` delivered at its current suspension
//!   point with [`inject_fault`](Producer::inject_fault)
//!
//! Once a producer answers [`Production::Done`] it stays `Done` forever; there is
//! no reset other than constructing a fresh producer.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut numbers = range(1, 3);
//! assert_eq!(numbers.advance(), Production::Value(1));
//! assert_eq!(numbers.advance(), Production::Value(2));
//! assert_eq!(numbers.advance(), Production::Value(3));
//! assert_eq!(numbers.advance(), Production::Done);
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{
    compose::{chain, map_value, Chain, MapValue},
    iter::ProducerIter,
    production::Production,
};

/// A lazy, finite source of values driven one step at a time by its caller.
///
/// Each call to `advance()` either yields the next element or signals that the
/// series is over. `Fault` is the token type the producer accepts through
/// [`inject_fault`](Producer::inject_fault); producers without a handling scope
/// accept any token type and simply hand it back.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut letters = values(vec!["a", "b"]);
/// assert_eq!(letters.advance(), Production::Value("a"));
/// assert_eq!(letters.terminate(), Production::Done);
/// assert_eq!(letters.advance(), Production::Done); // irreversible
/// ```
pub trait Producer {
    /// Type of the elements this producer yields.
    type Item;

    /// Type of the fault tokens this producer accepts.
    type Fault;

    /// Produce the next element, or `Done` once the series is over.
    ///
    /// Idempotent after exhaustion: every call on a finished producer returns
    /// `Done` and leaves state unchanged.
    fn advance(&mut self) -> Production<Self::Item>;

    /// Unconditionally end the series, discarding any remaining elements.
    ///
    /// Always returns `Done`. Irreversible and idempotent: the producer stays
    /// `Done` no matter what is called afterwards.
    fn terminate(&mut self) -> Production<Self::Item>;

    /// Deliver `fault` at the producer's current suspension point.
    ///
    /// If the producer's body has a handling scope covering that point, the
    /// handler runs synchronously and `Ok` carries whatever the body produces
    /// after handling (`Value` or `Done`). Otherwise the fault comes back
    /// unmodified as `Err` and the producer is permanently `Done`, exactly as
    /// if [`terminate`](Producer::terminate) had been called.
    ///
    /// A producer that is already `Done` has no live suspension point, so the
    /// fault is always reported back as `Err`.
    fn inject_fault(&mut self, fault: Self::Fault) -> Result<Production<Self::Item>, Self::Fault>;

    fn boxed(self) -> Box<dyn Producer<Item = Self::Item, Fault = Self::Fault>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Run this producer to exhaustion, then continue with another.
    fn chain<R>(self, other: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Producer<Item = Self::Item, Fault = Self::Fault>,
    {
        chain(self, other)
    }

    /// Transform each produced value.
    fn map_value<T2, G>(self, f: G) -> MapValue<Self, G>
    where
        Self: Sized,
        G: FnMut(Self::Item) -> T2,
    {
        map_value(f, self)
    }

    /// Adapt this producer into an [`Iterator`] over its values.
    fn into_iter(self) -> ProducerIter<Self>
    where
        Self: Sized,
    {
        ProducerIter::new(self)
    }
}

impl<P> Producer for Rc<RefCell<P>>
where
    P: Producer,
{
    type Item = P::Item;
    type Fault = P::Fault;

    fn advance(&mut self) -> Production<Self::Item> {
        self.as_ref().borrow_mut().advance()
    }

    fn terminate(&mut self) -> Production<Self::Item> {
        self.as_ref().borrow_mut().terminate()
    }

    fn inject_fault(&mut self, fault: Self::Fault) -> Result<Production<Self::Item>, Self::Fault> {
        self.as_ref().borrow_mut().inject_fault(fault)
    }
}

impl<P> Producer for Option<P>
where
    P: Producer,
{
    type Item = P::Item;
    type Fault = P::Fault;

    fn advance(&mut self) -> Production<Self::Item> {
        match self {
            Some(p) => p.advance(),
            None => Production::Done,
        }
    }

    fn terminate(&mut self) -> Production<Self::Item> {
        match self {
            Some(p) => p.terminate(),
            None => Production::Done,
        }
    }

    fn inject_fault(&mut self, fault: Self::Fault) -> Result<Production<Self::Item>, Self::Fault> {
        match self {
            Some(p) => p.inject_fault(fault),
            None => Err(fault),
        }
    }
}

impl<L, R> Producer for either::Either<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item, Fault = L::Fault>,
{
    type Item = L::Item;
    type Fault = L::Fault;

    fn advance(&mut self) -> Production<Self::Item> {
        match self {
            either::Either::Left(l) => l.advance(),
            either::Either::Right(r) => r.advance(),
        }
    }

    fn terminate(&mut self) -> Production<Self::Item> {
        match self {
            either::Either::Left(l) => l.terminate(),
            either::Either::Right(r) => r.terminate(),
        }
    }

    fn inject_fault(&mut self, fault: Self::Fault) -> Result<Production<Self::Item>, Self::Fault> {
        match self {
            either::Either::Left(l) => l.inject_fault(fault),
            either::Either::Right(r) => r.inject_fault(fault),
        }
    }
}

impl<T, F> Producer for Box<dyn Producer<Item = T, Fault = F>> {
    type Item = T;
    type Fault = F;

    fn advance(&mut self) -> Production<Self::Item> {
        (**self).advance()
    }

    fn terminate(&mut self) -> Production<Self::Item> {
        (**self).terminate()
    }

    fn inject_fault(&mut self, fault: Self::Fault) -> Result<Production<Self::Item>, Self::Fault> {
        (**self).inject_fault(fault)
    }
}

impl<T, F> Producer for &'_ mut dyn Producer<Item = T, Fault = F> {
    type Item = T;
    type Fault = F;

    fn advance(&mut self) -> Production<Self::Item> {
        (*self).advance()
    }

    fn terminate(&mut self) -> Production<Self::Item> {
        (*self).terminate()
    }

    fn inject_fault(&mut self, fault: Self::Fault) -> Result<Production<Self::Item>, Self::Fault> {
        (*self).inject_fault(fault)
    }
}
