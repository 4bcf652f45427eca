use crate::{Producer, Production};

/// Run the first producer to exhaustion, then continue with the second.
///
/// Both producers must yield the same item type and accept the same fault
/// token type.
pub fn chain<L, R>(l: L, r: R) -> Chain<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item, Fault = L::Fault>,
{
    Chain(Some(l), r)
}

/// Chains two producers sequentially.
///
/// Created via [`chain`] or [`Producer::chain`]. The first producer is dropped
/// from memory once it is exhausted.
pub struct Chain<L, R>(Option<L>, R);

impl<L, R> Producer for Chain<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item, Fault = L::Fault>,
{
    type Item = L::Item;
    type Fault = L::Fault;

    fn advance(&mut self) -> Production<Self::Item> {
        match self.0 {
            Some(ref mut l) => match l.advance() {
                Production::Value(v) => Production::Value(v),
                Production::Done => {
                    self.0 = None; // we drop the first half when it's done
                    self.1.advance()
                }
            },
            None => self.1.advance(),
        }
    }

    fn terminate(&mut self) -> Production<Self::Item> {
        self.0 = None;
        self.1.terminate()
    }

    fn inject_fault(&mut self, fault: Self::Fault) -> Result<Production<Self::Item>, Self::Fault> {
        match self.0 {
            Some(ref mut l) => match l.inject_fault(fault) {
                Ok(Production::Value(v)) => Ok(Production::Value(v)),
                Ok(Production::Done) => {
                    // The first half handled the fault by falling through;
                    // production resumes in the second half.
                    self.0 = None;
                    Ok(self.1.advance())
                }
                Err(fault) => {
                    self.0 = None;
                    self.1.terminate();
                    Err(fault)
                }
            },
            None => self.1.inject_fault(fault),
        }
    }
}
