/// A value that may or may not be present.
///
/// `Maybe` is the result type of every [`Seq`](crate::Seq) advance: `Just(v)` carries
/// the next element and `Nothing` signals exhaustion. It carries the same algebra as
/// [`Option`] and converts to and from it losslessly.
///
/// # Examples
///
/// ```rust
/// use lazyseq::{Maybe, just, nothing};
///
/// let present = just(21).map(|x| x * 2);
/// assert_eq!(present, Maybe::Just(42));
///
/// let absent: Maybe<i32> = nothing();
/// assert_eq!(absent.map(|x| x * 2).unwrap_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maybe<T> {
    /// No value.
    #[default]
    Nothing,
    /// Some value of type `T`.
    Just(T),
}

/// Wrap a value in [`Maybe::Just`].
#[inline]
pub const fn just<T>(value: T) -> Maybe<T> {
    Maybe::Just(value)
}

/// The absent [`Maybe`].
#[inline]
pub const fn nothing<T>() -> Maybe<T> {
    Maybe::Nothing
}

impl<T> Maybe<T> {
    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert!(Maybe::Just(1).is_just());
    /// assert!(!Maybe::<i32>::Nothing.is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Returns `true` if a value is present and it satisfies `predicate`.
    #[inline]
    pub fn is_just_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Maybe::Just(t) => predicate(t),
            Maybe::Nothing => false,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// let text: Maybe<String> = Maybe::Just("hello".to_string());
    /// assert_eq!(text.as_ref().map(|s| s.len()), Maybe::Just(5));
    /// assert!(text.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(t) => Maybe::Just(t),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// let mut x = Maybe::Just(2);
    /// if let Maybe::Just(v) = x.as_mut() {
    ///     *v = 42;
    /// }
    /// assert_eq!(x, Maybe::Just(42));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Just(t) => Maybe::Just(t),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the contained value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Nothing`. Check with [`is_just`](Maybe::is_just) first,
    /// or use one of the total alternatives such as [`unwrap_or`](Maybe::unwrap_or).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert_eq!(Maybe::Just("air").unwrap(), "air");
    /// ```
    ///
    /// ```should_panic
    /// use lazyseq::Maybe;
    ///
    /// let x: Maybe<&str> = Maybe::Nothing;
    /// x.unwrap(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Just(t) => t,
            Maybe::Nothing => panic!("called `Maybe::unwrap()` on a `Nothing` value"),
        }
    }

    /// Returns the contained value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the value is `Nothing`.
    ///
    /// ```should_panic
    /// use lazyseq::Maybe;
    ///
    /// let x: Maybe<&str> = Maybe::Nothing;
    /// x.expect("fruits are healthy"); // panics with `fruits are healthy`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Maybe::Just(t) => t,
            Maybe::Nothing => panic!("{message}"),
        }
    }

    /// Returns the contained value or `default`.
    ///
    /// `default` is evaluated eagerly; prefer [`unwrap_or_else`](Maybe::unwrap_or_else)
    /// when it is expensive to build.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Just(t) => t,
            Maybe::Nothing => default,
        }
    }

    /// Returns the contained value or computes one from `f`.
    ///
    /// `f` runs only when the value is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// let k = 10;
    /// assert_eq!(Maybe::Just(4).unwrap_or_else(|| 2 * k), 4);
    /// assert_eq!(Maybe::Nothing.unwrap_or_else(|| 2 * k), 20);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Just(t) => t,
            Maybe::Nothing => f(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Maybe::Just(t) => t,
            Maybe::Nothing => T::default(),
        }
    }

    /// Maps a `Maybe<T>` to `Maybe<U>` by applying `f` to a contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// let x: Maybe<i32> = Maybe::Just(4);
    /// assert_eq!(x.map(|v| v * 2), Maybe::Just(8));
    ///
    /// let y: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(y.map(|v| v * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(t) => Maybe::Just(f(t)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Calls `f` with a reference to the contained value, if any, and returns `self`.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Just(ref t) = self {
            f(t);
        }
        self
    }

    /// Applies `f` to a contained value or returns `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert_eq!(Maybe::Just("foo").map_or(42, |v| v.len()), 3);
    /// assert_eq!(Maybe::<&str>::Nothing.map_or(42, |v| v.len()), 42);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(t) => f(t),
            Maybe::Nothing => default,
        }
    }

    /// Applies `f` to a contained value or computes a default from `default`.
    ///
    /// `default` runs only when the value is `Nothing`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(t) => f(t),
            Maybe::Nothing => default(),
        }
    }

    /// Transforms `Just(v)` into `Ok(v)` and `Nothing` into `Err(err)`.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Maybe::Just(t) => Ok(t),
            Maybe::Nothing => Err(err),
        }
    }

    /// Transforms `Just(v)` into `Ok(v)` and `Nothing` into `Err(err())`.
    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Just(t) => Ok(t),
            Maybe::Nothing => Err(err()),
        }
    }

    /// Returns `Nothing` if `self` is `Nothing`, otherwise returns `other`.
    ///
    /// `other` is evaluated eagerly; use [`and_then`](Maybe::and_then) to compute it
    /// from the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert_eq!(Maybe::Just(2).and(Maybe::Just("foo")), Maybe::Just("foo"));
    /// assert_eq!(Maybe::<i32>::Nothing.and(Maybe::Just("foo")), Maybe::Nothing);
    /// assert_eq!(Maybe::Just(2).and(Maybe::<&str>::Nothing), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Just(_) => other,
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `Nothing` if `self` is `Nothing`, otherwise calls `f` with the
    /// contained value and returns the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// fn checked_half(x: u32) -> Maybe<u32> {
    ///     if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing }
    /// }
    ///
    /// assert_eq!(Maybe::Just(8).and_then(checked_half), Maybe::Just(4));
    /// assert_eq!(Maybe::Just(7).and_then(checked_half), Maybe::Nothing);
    /// assert_eq!(Maybe::Nothing.and_then(checked_half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Just(t) => f(t),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `Nothing` if `self` is `Nothing` or if `predicate` rejects the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// let is_even = |n: &i32| n % 2 == 0;
    /// assert_eq!(Maybe::Just(4).filter(is_even), Maybe::Just(4));
    /// assert_eq!(Maybe::Just(3).filter(is_even), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Just(t) if predicate(&t) => Maybe::Just(t),
            _ => Maybe::Nothing,
        }
    }

    /// Returns `self` if it holds a value, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert_eq!(Maybe::Just(2).or(Maybe::Just(100)), Maybe::Just(2));
    /// assert_eq!(Maybe::Nothing.or(Maybe::Just(100)), Maybe::Just(100));
    /// ```
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Just(t) => Maybe::Just(t),
            Maybe::Nothing => other,
        }
    }

    /// Returns `self` if it holds a value, otherwise calls `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Just(t) => Maybe::Just(t),
            Maybe::Nothing => f(),
        }
    }

    /// Returns `Just` if exactly one of `self` and `other` is `Just`.
    ///
    /// Two present values are ambiguous and collapse to `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert_eq!(Maybe::Just(2).xor(Maybe::Nothing), Maybe::Just(2));
    /// assert_eq!(Maybe::Nothing.xor(Maybe::Just(2)), Maybe::Just(2));
    /// assert_eq!(Maybe::Just(2).xor(Maybe::Just(2)), Maybe::Nothing);
    /// assert_eq!(Maybe::<i32>::Nothing.xor(Maybe::Nothing), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn xor(self, other: Maybe<T>) -> Maybe<T> {
        match (self, other) {
            (Maybe::Just(t), Maybe::Nothing) | (Maybe::Nothing, Maybe::Just(t)) => Maybe::Just(t),
            _ => Maybe::Nothing,
        }
    }

    /// Stores `value` in `self`, dropping any previous value, and returns a
    /// mutable reference to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// let mut slot = Maybe::Nothing;
    /// let val = slot.insert(1);
    /// assert_eq!(*val, 1);
    /// *val = 3;
    /// assert_eq!(slot, Maybe::Just(3));
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Maybe::Just(value);
        match self {
            Maybe::Just(t) => t,
            Maybe::Nothing => unreachable!("slot was just filled"),
        }
    }

    /// Stores `value` only if `self` is `Nothing`, then returns a mutable
    /// reference to the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// let mut x = Maybe::Nothing;
    /// *x.get_or_insert(5) += 2;
    /// assert_eq!(*x.get_or_insert(100), 7);
    /// ```
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Stores the result of `f` only if `self` is `Nothing`, then returns a
    /// mutable reference to the contained value.
    ///
    /// `f` is not called when a value is already present.
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Maybe::Nothing = self {
            *self = Maybe::Just(f());
        }
        match self {
            Maybe::Just(t) => t,
            Maybe::Nothing => unreachable!("slot was just filled"),
        }
    }

    /// Moves the value out of `self`, leaving `Nothing` in its place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// let mut x = Maybe::Just(2);
    /// assert_eq!(x.take(), Maybe::Just(2));
    /// assert_eq!(x, Maybe::Nothing);
    /// assert_eq!(x.take(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Maybe<T> {
        std::mem::take(self)
    }

    /// Stores `value` in `self` and returns whatever was held before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// let mut x = Maybe::Just(2);
    /// assert_eq!(x.replace(5), Maybe::Just(2));
    /// assert_eq!(x, Maybe::Just(5));
    ///
    /// let mut y = Maybe::Nothing;
    /// assert_eq!(y.replace(3), Maybe::Nothing);
    /// assert_eq!(y, Maybe::Just(3));
    /// ```
    #[inline]
    pub fn replace(&mut self, value: T) -> Maybe<T> {
        std::mem::replace(self, Maybe::Just(value))
    }

    /// Returns `true` if `self` holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert!(Maybe::Just(2).contains(&2));
    /// assert!(!Maybe::Just(3).contains(&2));
    /// assert!(!Maybe::<i32>::Nothing.contains(&2));
    /// ```
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Maybe::Just(t) => t == value,
            Maybe::Nothing => false,
        }
    }

    /// Pairs `self` with `other` when both hold a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).zip(Maybe::Just("hi")), Maybe::Just((1, "hi")));
    /// assert_eq!(Maybe::Just(1).zip(Maybe::<u8>::Nothing), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Just(t), Maybe::Just(u)) => Maybe::Just((t, u)),
            _ => Maybe::Nothing,
        }
    }

    /// Combines `self` and `other` with `f` when both hold a value.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Maybe<U>, f: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Maybe::Just(t), Maybe::Just(u)) => Maybe::Just(f(t, u)),
            _ => Maybe::Nothing,
        }
    }

    /// Turns `self` into a sequence that yields the contained value at most once.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// assert_eq!(Maybe::Just(3).iter().collect_vec(), vec![3]);
    /// assert_eq!(Maybe::<i32>::Nothing.iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(self) -> crate::build::Once<T> {
        crate::build::Once::from_maybe(self)
    }
}

impl<T, U> Maybe<(T, U)> {
    /// Splits a `Maybe` of a pair into a pair of `Maybe`s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert_eq!(Maybe::Just((1, "hi")).unzip(), (Maybe::Just(1), Maybe::Just("hi")));
    /// assert_eq!(Maybe::<(i32, &str)>::Nothing.unzip(), (Maybe::Nothing, Maybe::Nothing));
    /// ```
    #[inline]
    pub fn unzip(self) -> (Maybe<T>, Maybe<U>) {
        match self {
            Maybe::Just((t, u)) => (Maybe::Just(t), Maybe::Just(u)),
            Maybe::Nothing => (Maybe::Nothing, Maybe::Nothing),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert_eq!(Maybe::Just(Maybe::Just(6)).flatten(), Maybe::Just(6));
    /// assert_eq!(Maybe::Just(Maybe::<u32>::Nothing).flatten(), Maybe::Nothing);
    /// assert_eq!(Maybe::<Maybe<u32>>::Nothing.flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Just(inner) => inner,
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(t) => Maybe::Just(t),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Just(t) => Some(t),
            Maybe::Nothing => None,
        }
    }
}
