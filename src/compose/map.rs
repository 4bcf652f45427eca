//! Transforming the values a producer yields.

use crate::{Producer, Production};

/// Transforms each value produced by the wrapped producer.
///
/// Termination and fault delivery pass through to the inner producer untouched.
pub struct MapValue<P, G> {
    f: G,
    producer: P,
}

/// Create a producer that transforms each value of the wrapped producer.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let mut labels = map_value(|n: i64| format!("#{n}"), range(1, 2));
///
/// assert_eq!(labels.advance(), Production::Value("#1".to_string()));
/// assert_eq!(labels.advance(), Production::Value("#2".to_string()));
/// assert_eq!(labels.advance(), Production::Done);
/// ```
pub fn map_value<T2, P, G>(f: G, producer: P) -> MapValue<P, G>
where
    P: Producer,
    G: FnMut(P::Item) -> T2,
{
    MapValue { f, producer }
}

impl<T2, P, G> Producer for MapValue<P, G>
where
    P: Producer,
    G: FnMut(P::Item) -> T2,
{
    type Item = T2;
    type Fault = P::Fault;

    fn advance(&mut self) -> Production<Self::Item> {
        match self.producer.advance() {
            Production::Value(v) => Production::Value((self.f)(v)),
            Production::Done => Production::Done,
        }
    }

    fn terminate(&mut self) -> Production<Self::Item> {
        match self.producer.terminate() {
            Production::Value(v) => Production::Value((self.f)(v)),
            Production::Done => Production::Done,
        }
    }

    fn inject_fault(&mut self, fault: Self::Fault) -> Result<Production<Self::Item>, Self::Fault> {
        match self.producer.inject_fault(fault) {
            Ok(Production::Value(v)) => Ok(Production::Value((self.f)(v))),
            Ok(Production::Done) => Ok(Production::Done),
            Err(fault) => Err(fault),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{handled, range};
    use crate::fault::Fault;

    #[test]
    fn test_map_value_basic() {
        let mut doubled = map_value(|n| n * 2, range(1, 3));

        assert_eq!(doubled.advance(), Production::Value(2));
        assert_eq!(doubled.advance(), Production::Value(4));
        assert_eq!(doubled.advance(), Production::Value(6));
        assert_eq!(doubled.advance(), Production::Done);
    }

    #[test]
    fn test_map_value_type_conversion() {
        let mut labels = map_value(|n: i64| n.to_string(), range(7, 8));

        assert_eq!(labels.advance(), Production::Value("7".to_string()));
        assert_eq!(labels.advance(), Production::Value("8".to_string()));
        assert_eq!(labels.advance(), Production::Done);
    }

    #[test]
    fn test_map_value_passes_terminate_through() {
        let mut doubled = map_value(|n| n * 2, range(1, 10));

        assert_eq!(doubled.advance(), Production::Value(2));
        assert_eq!(doubled.terminate(), Production::Done);
        assert_eq!(doubled.advance(), Production::Done);
    }

    #[test]
    fn test_map_value_passes_faults_through() {
        let mut doubled = map_value(|n: i64| n * 2, range(1, 10));

        assert_eq!(
            doubled.inject_fault(Fault::new("boom")),
            Err(Fault::new("boom"))
        );
        assert_eq!(doubled.advance(), Production::Done);
    }

    #[test]
    fn test_map_value_over_handled_producer() {
        let mut seen = Vec::new();
        {
            let inner = handled(vec![1, 2], |fault: Fault| seen.push(fault));
            let mut mapped = map_value(|n: i32| n + 100, inner);

            assert_eq!(mapped.advance(), Production::Value(101));
            assert_eq!(
                mapped.inject_fault(Fault::new("absorbed")),
                Ok(Production::Done)
            );
            assert_eq!(mapped.advance(), Production::Done);
        }
        assert_eq!(seen, vec![Fault::new("absorbed")]);
    }
}
