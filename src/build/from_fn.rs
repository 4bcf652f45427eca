use std::marker::PhantomData;

use crate::{fault::Fault, Producer, Production};

/// A producer stepped by a closure, fused after its first `Done`.
///
/// The closure is the logical body; the fuse guarantees the terminal-state
/// idempotence every producer promises, even if the closure would have
/// produced again.
#[derive(Debug, Clone)]
pub struct FromFn<G, F = Fault> {
    f: G,
    retired: bool,
    _fault: PhantomData<fn(F)>,
}

/// Create a producer from a closure returning one [`Production`] per call.
///
/// No handling scope covers the closure: injected faults escape and retire the
/// producer.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut remaining = 2;
/// let mut countdown = from_fn(move || {
///     if remaining == 0 {
///         Production::Done
///     } else {
///         remaining -= 1;
///         Production::Value(remaining)
///     }
/// });
///
/// assert_eq!(countdown.advance(), Production::Value(1));
/// assert_eq!(countdown.advance(), Production::Value(0));
/// assert_eq!(countdown.advance(), Production::Done);
/// ```
pub fn from_fn<T, G>(f: G) -> FromFn<G>
where
    G: FnMut() -> Production<T>,
{
    FromFn {
        f,
        retired: false,
        _fault: PhantomData,
    }
}

impl<T, G, F> Producer for FromFn<G, F>
where
    G: FnMut() -> Production<T>,
{
    type Item = T;
    type Fault = F;

    fn advance(&mut self) -> Production<Self::Item> {
        if self.retired {
            return Production::Done;
        }
        match (self.f)() {
            Production::Value(v) => Production::Value(v),
            Production::Done => {
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
