/// Result of a single production request, either the next element or the end of the series.
///
/// `Production` is the return type of every producer operation, similar to how `Option`
/// represents optional values and `Result` represents fallible operations. `Done` is a
/// normal terminal signal, not a failure: a producer that has run out of elements, was
/// terminated early, or lost an unhandled fault all answer `Done` from then on.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Production;
///
/// let next: Production<i32> = Production::Value(42);
/// let finished: Production<i32> = Production::Done;
///
/// // Using combinators
/// let doubled = next.map(|x| x * 2);
/// assert_eq!(doubled, Production::Value(84));
/// assert_eq!(finished.map(|x| x * 2), Production::Done);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Production<T> {
    /// The next element of the series; more may follow.
    Value(T),
    /// The series is exhausted or was terminated.
    Done,
}

impl<T> Production<T> {
    /// Returns `true` if the production is a `Value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Production;
    ///
    /// let x: Production<i32> = Production::Value(42);
    /// assert!(x.is_value());
    ///
    /// let y: Production<i32> = Production::Done;
    /// assert!(!y.is_value());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Production::Value(_))
    }

    /// Returns `true` if the production is `Done`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Production;
    ///
    /// let x: Production<i32> = Production::Done;
    /// assert!(x.is_done());
    ///
    /// let y: Production<i32> = Production::Value(42);
    /// assert!(!y.is_done());
    /// ```
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Production::Done)
    }

    /// Converts from `Production<T>` to `Option<T>`.
    ///
    /// Consumes `self`, mapping `Value(v)` to `Some(v)` and `Done` to `None`.
    /// This is the shape a driving loop usually wants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Production;
    ///
    /// let x: Production<i32> = Production::Value(42);
    /// assert_eq!(x.value(), Some(42));
    ///
    /// let y: Production<i32> = Production::Done;
    /// assert_eq!(y.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Production::Value(v) => Some(v),
            Production::Done => None,
        }
    }

    /// Maps a `Production<T>` to `Production<U>` by applying a function to a produced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Production;
    ///
    /// let x: Production<i32> = Production::Value(21);
    /// assert_eq!(x.map(|v| v * 2), Production::Value(42));
    ///
    /// let y: Production<i32> = Production::Done;
    /// assert_eq!(y.map(|v| v * 2), Production::Done);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Production<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Production::Value(v) => Production::Value(f(v)),
            Production::Done => Production::Done,
        }
    }

    /// Returns the produced value or a default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Production;
    ///
    /// let x: Production<i32> = Production::Value(42);
    /// assert_eq!(x.value_or(0), 42);
    ///
    /// let y: Production<i32> = Production::Done;
    /// assert_eq!(y.value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Production::Value(v) => v,
            Production::Done => default,
        }
    }

    /// Returns the produced value or computes it from a closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Production;
    ///
    /// let x: Production<i32> = Production::Value(42);
    /// assert_eq!(x.value_or_else(|| 0), 42);
    ///
    /// let y: Production<i32> = Production::Done;
    /// assert_eq!(y.value_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Production::Value(v) => v,
            Production::Done => f(),
        }
    }

    /// Converts from `&Production<T>` to `Production<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Production;
    ///
    /// let x: Production<String> = Production::Value("next".to_string());
    /// assert_eq!(x.as_ref(), Production::Value(&"next".to_string()));
    ///
    /// let y: Production<String> = Production::Done;
    /// assert_eq!(y.as_ref(), Production::Done);
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Production<&T> {
        match self {
            Production::Value(v) => Production::Value(v),
            Production::Done => Production::Done,
        }
    }

    /// Converts from `&mut Production<T>` to `Production<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Production;
    ///
    /// let mut x: Production<i32> = Production::Value(42);
    /// if let Production::Value(v) = x.as_mut() {
    ///     *v = 100;
    /// }
    /// assert_eq!(x, Production::Value(100));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Production<&mut T> {
        match self {
            Production::Value(v) => Production::Value(v),
            Production::Done => Production::Done,
        }
    }

    /// Returns `true` if the production is a `Value` containing the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Production;
    ///
    /// let x: Production<i32> = Production::Value(42);
    /// assert!(x.contains(&42));
    /// assert!(!x.contains(&100));
    ///
    /// let y: Production<i32> = Production::Done;
    /// assert!(!y.contains(&42));
    /// ```
    #[inline]
    pub fn contains<U>(&self, v: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Production::Value(inner) if v == inner)
    }

    /// Returns the contained `Value`, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the production is `Done` with a custom panic message provided by `msg`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Production;
    ///
    /// let x: Production<i32> = Production::Value(42);
    /// assert_eq!(x.expect_value("series ended early"), 42);
    /// ```
    ///
    /// ```should_panic
    /// use lazyseq::Production;
    ///
    /// let x: Production<i32> = Production::Done;
    /// x.expect_value("series ended early"); // panics with "series ended early"
    /// ```
    #[inline]
    pub fn expect_value(self, msg: &str) -> T {
        match self {
            Production::Value(v) => v,
            Production::Done => panic!("{}", msg),
        }
    }

    /// Returns the contained `Value`, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the production is `Done`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Production;
    ///
    /// let x: Production<i32> = Production::Value(42);
    /// assert_eq!(x.unwrap_value(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use lazyseq::Production;
    ///
    /// let x: Production<i32> = Production::Done;
    /// x.unwrap_value(); // panics
    /// ```
    #[inline]
    pub fn unwrap_value(self) -> T {
        match self {
            Production::Value(v) => v,
            Production::Done => panic!("called `Production::unwrap_value()` on a `Done` value"),
        }
    }
}

impl<T> From<Option<T>> for Production<T> {
    /// `Some(v)` becomes `Value(v)`, `None` becomes `Done`.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Production::Value(v),
            None => Production::Done,
        }
    }
}

impl<T> From<Production<T>> for Option<T> {
    fn from(production: Production<T>) -> Self {
        production.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_value_and_is_done() {
        let v: Production<i32> = Production::Value(42);
        let d: Production<i32> = Production::Done;

        assert!(v.is_value());
        assert!(!v.is_done());
        assert!(d.is_done());
        assert!(!d.is_value());
    }

    #[test]
    fn test_value() {
        let v: Production<i32> = Production::Value(42);
        let d: Production<i32> = Production::Done;

        assert_eq!(v.value(), Some(42));
        assert_eq!(d.value(), None);
    }

    #[test]
    fn test_map() {
        let v: Production<i32> = Production::Value(21);
        let d: Production<i32> = Production::Done;

        assert_eq!(v.map(|x| x * 2), Production::Value(42));
        assert_eq!(d.map(|x| x * 2), Production::Done);
    }

    #[test]
    fn test_value_or_and_value_or_else() {
        let v: Production<i32> = Production::Value(42);
        let d: Production<i32> = Production::Done;

        assert_eq!(v.value_or(0), 42);
        assert_eq!(d.value_or(0), 0);
        assert_eq!(v.value_or_else(|| 7), 42);
        assert_eq!(d.value_or_else(|| 7), 7);
    }

    #[test]
    fn test_as_ref() {
        let v: Production<String> = Production::Value("next".to_string());
        let d: Production<String> = Production::Done;

        assert_eq!(v.as_ref(), Production::Value(&"next".to_string()));
        assert_eq!(d.as_ref(), Production::Done);
    }

    #[test]
    fn test_as_mut() {
        let mut v: Production<i32> = Production::Value(42);
        if let Production::Value(inner) = v.as_mut() {
            *inner = 100;
        }
        assert_eq!(v, Production::Value(100));
    }

    #[test]
    fn test_contains() {
        let v: Production<i32> = Production::Value(42);
        let d: Production<i32> = Production::Done;

        assert!(v.contains(&42));
        assert!(!v.contains(&100));
        assert!(!d.contains(&42));
    }

    #[test]
    fn test_expect_value() {
        let v: Production<i32> = Production::Value(42);
        assert_eq!(v.expect_value("should be a value"), 42);
    }

    #[test]
    #[should_panic(expected = "should be a value")]
    fn test_expect_value_panics() {
        let d: Production<i32> = Production::Done;
        d.expect_value("should be a value");
    }

    #[test]
    fn test_unwrap_value() {
        let v: Production<i32> = Production::Value(42);
        assert_eq!(v.unwrap_value(), 42);
    }

    #[test]
    #[should_panic(expected = "called `Production::unwrap_value()` on a `Done` value")]
    fn test_unwrap_value_panics() {
        let d: Production<i32> = Production::Done;
        d.unwrap_value();
    }

    #[test]
    fn test_option_round_trip() {
        let v: Production<i32> = Some(5).into();
        assert_eq!(v, Production::Value(5));

        let d: Production<i32> = None.into();
        assert_eq!(d, Production::Done);

        let opt: Option<i32> = Production::Value(5).into();
        assert_eq!(opt, Some(5));
    }
}
