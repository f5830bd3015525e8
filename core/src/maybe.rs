use std::fmt::{Debug, Display, Formatter};
use std::iter::FusedIterator;
use std::ops::Deref;

use crate::error::Error;

/// Presence or absence of a single value of type `T`.
///
/// A `Maybe` is immutable after construction. Two `Maybe`s are equal when both are [`Nothing`](Maybe::NOTHING),
/// or when both are `Just` and their values are equal. Absence is a stateless constant, see [`Maybe::NOTHING`].
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
  /// The empty instance for `T`.
  pub const NOTHING: Self = Self(None);

  #[inline]
  pub const fn nothing() -> Self { Self::NOTHING }

  /// Wraps a plain `value`, which is always present.
  ///
  /// `value` is not inspected: `Maybe::just(None::<U>)` or a null pointer is a `Just` holding the sentinel. Inputs that
  /// may carry an absence sentinel go through [`Sentinel::to_maybe`](crate::convert::Sentinel::to_maybe) or
  /// [`Maybe::from_nullable`] instead, which produce `Nothing` for the sentinel.
  #[inline]
  pub const fn just(value: T) -> Self { Self(Some(value)) }

  /// Returns `Nothing` of the same type as `self`.
  #[inline]
  pub const fn nothing_of(&self) -> Self { Self::NOTHING }


  #[inline]
  pub const fn is_something(&self) -> bool { self.0.is_some() }
  #[inline]
  pub const fn is_nothing(&self) -> bool { self.0.is_none() }


  /// Gets a reference to the contained value, or fails with [`Error::EmptyValueAccess`] when `self` is `Nothing`.
  #[inline]
  pub fn get(&self) -> Result<&T, Error> {
    self.0.as_ref().ok_or_else(Error::empty_value_access::<T>)
  }
  /// Gets the contained value, or fails with [`Error::EmptyValueAccess`] when `self` is `Nothing`.
  #[inline]
  pub fn into_value(self) -> Result<T, Error> {
    self.0.ok_or_else(Error::empty_value_access::<T>)
  }

  /// Gets the contained value.
  ///
  /// # Panics
  ///
  /// Panics with `message` when `self` is `Nothing`.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self.0 {
      Some(value) => value,
      None => panic!("{}: {}", message, Error::empty_value_access::<T>()),
    }
  }
  /// Gets the contained value.
  ///
  /// # Panics
  ///
  /// Panics when `self` is `Nothing`.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self.0 {
      Some(value) => value,
      None => panic!("{}", Error::empty_value_access::<T>()),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T { self.0.unwrap_or(default) }
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T { self.0.unwrap_or_else(f) }
  /// Returns the contained value or `T::default()`.
  #[inline]
  pub fn value_or_default(self) -> T where T: Default { self.0.unwrap_or_default() }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> { Maybe(self.0.map(f)) }
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match self.0 {
      Some(value) => f(value),
      None => Maybe::NOTHING,
    }
  }
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self { Self(self.0.filter(predicate)) }
  #[inline]
  pub fn or(self, other: Self) -> Self {
    if self.is_something() { self } else { other }
  }
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    if self.is_something() { self } else { f() }
  }

  /// Applies `on_just` to the contained value, or calls `on_nothing`. Exactly one of them is called.
  #[inline]
  pub fn match_with<U>(self, on_just: impl FnOnce(T) -> U, on_nothing: impl FnOnce() -> U) -> U {
    match self.0 {
      Some(value) => on_just(value),
      None => on_nothing(),
    }
  }
  /// Calls `f` with a reference to the contained value, if any.
  #[inline]
  pub fn do_when_something(&self, f: impl FnOnce(&T)) {
    if let Some(value) = &self.0 {
      f(value);
    }
  }


  #[inline]
  pub const fn as_ref(&self) -> Maybe<&T> {
    match &self.0 {
      Some(value) => Maybe::just(value),
      None => Maybe::NOTHING,
    }
  }
  #[inline]
  pub fn as_deref(&self) -> Maybe<&T::Target> where T: Deref {
    Maybe(self.0.as_deref())
  }


  /// Iterates over the contained value: one element when `Just`, none when `Nothing`.
  ///
  /// Every call starts a fresh traversal.
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> { Iter(self.0.iter()) }

  #[inline]
  pub(crate) fn into_option(self) -> Option<T> { self.0 }
}

impl<T> Maybe<&T> {
  #[inline]
  pub fn cloned(self) -> Maybe<T> where T: Clone { Maybe(self.0.cloned()) }
  #[inline]
  pub fn copied(self) -> Maybe<T> where T: Copy { Maybe(self.0.copied()) }
}

impl<T> Default for Maybe<T> {
  #[inline]
  fn default() -> Self { Self::NOTHING }
}

impl<T: Debug> Debug for Maybe<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match &self.0 {
      Some(value) => f.debug_tuple("Just").field(value).finish(),
      None => f.write_str("Nothing"),
    }
  }
}
impl<T: Display> Display for Maybe<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match &self.0 {
      Some(value) => value.fmt(f),
      None => f.write_str("Nothing"),
    }
  }
}


/// Iterator over a borrowed [`Maybe`], created by [`Maybe::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T>(std::option::Iter<'a, T>);
impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> { self.0.next() }
  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}
impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning iterator over a [`Maybe`].
#[derive(Clone, Debug)]
pub struct IntoIter<T>(std::option::IntoIter<T>);
impl<T> Iterator for IntoIter<T> {
  type Item = T;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> { self.0.next() }
  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { IntoIter(self.0.into_iter()) }
}
impl<'a, T> IntoIterator for &'a Maybe<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}


#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn nothing_is_the_default_and_equal_to_itself() {
    assert_eq!(Maybe::<u8>::NOTHING, Maybe::default());
    assert_eq!(Maybe::<u8>::nothing(), Maybe::NOTHING);
    assert!(Maybe::<String>::NOTHING.is_nothing());
    assert!(!Maybe::<String>::NOTHING.is_something());
  }

  #[test]
  fn zero_and_empty_values_are_present() {
    assert!(Maybe::just(0).is_something());
    assert!(Maybe::just(false).is_something());
    assert!(Maybe::just(String::new()).is_something());
    assert_ne!(Maybe::just(0), Maybe::NOTHING);
  }

  #[test]
  fn get_on_nothing_fails_with_empty_value_access() {
    let error = Maybe::<i32>::NOTHING.get().unwrap_err();
    assert!(error.is_empty_value_access());
    assert_eq!(Maybe::<i32>::NOTHING.into_value(), Err(Error::EmptyValueAccess { type_name: "i32" }));
  }

  #[test]
  fn get_on_just_returns_the_value() {
    assert_eq!(Maybe::just(7).get(), Ok(&7));
    assert_eq!(Maybe::just("seven".to_string()).into_value().unwrap(), "seven");
  }

  #[test]
  #[should_panic(expected = "Cannot get the value of Nothing<u64>")]
  fn unwrap_on_nothing_panics() {
    Maybe::<u64>::NOTHING.unwrap();
  }

  #[test]
  fn equality_and_hash_follow_the_value() {
    let mut set = HashSet::new();
    set.insert(Maybe::just("a".to_string()));
    set.insert(Maybe::just("a".to_string()));
    set.insert(Maybe::NOTHING);
    set.insert(Maybe::NOTHING);
    assert_eq!(set.len(), 2);
    assert!(Maybe::NOTHING < Maybe::just(i32::MIN));
  }

  #[test]
  fn combinators_short_circuit_on_nothing() {
    let mut called = false;
    let mapped = Maybe::<i32>::NOTHING.map(|v| {
      called = true;
      v + 1
    });
    assert_eq!(mapped, Maybe::NOTHING);
    assert!(!called);

    assert_eq!(Maybe::just(2).and_then(|v| Maybe::just(v * 3)), Maybe::just(6));
    assert_eq!(Maybe::just(2).and_then(|_| Maybe::<i32>::NOTHING), Maybe::NOTHING);
    assert_eq!(Maybe::just(2).filter(|v| *v > 5), Maybe::NOTHING);
    assert_eq!(Maybe::NOTHING.or(Maybe::just(1)), Maybe::just(1));
    assert_eq!(Maybe::just(3).or_else(|| unreachable!()), Maybe::just(3));
    assert_eq!(Maybe::<u8>::NOTHING.value_or_default(), 0);
    assert_eq!(Maybe::just(4).match_with(|v| v * 2, || 0), 8);
    assert_eq!(Maybe::<i32>::NOTHING.match_with(|v| v * 2, || -1), -1);
  }

  #[test]
  fn iteration_is_restartable() {
    let just = Maybe::just(5);
    assert_eq!(just.iter().collect::<Vec<_>>(), vec![&5]);
    assert_eq!(just.iter().collect::<Vec<_>>(), vec![&5]);
    assert_eq!(just.into_iter().count(), 1);

    let nothing = Maybe::<i32>::NOTHING;
    assert_eq!(nothing.iter().count(), 0);
    assert_eq!(nothing.iter().count(), 0);
  }

  #[test]
  fn formatting() {
    assert_eq!(format!("{:?}", Maybe::just(1)), "Just(1)");
    assert_eq!(format!("{:?}", Maybe::<i32>::NOTHING), "Nothing");
    assert_eq!(Maybe::just(1).to_string(), "1");
    assert_eq!(Maybe::<i32>::NOTHING.to_string(), "Nothing");
  }

  #[cfg(feature = "serde")]
  #[test]
  fn serializes_as_option() {
    assert_eq!(serde_json::to_string(&Maybe::just(1)).unwrap(), "1");
    assert_eq!(serde_json::to_string(&Maybe::<i32>::NOTHING).unwrap(), "null");
    assert_eq!(serde_json::from_str::<Maybe<i32>>("null").unwrap(), Maybe::NOTHING);
    assert_eq!(serde_json::from_str::<Maybe<i32>>("2").unwrap(), Maybe::just(2));
  }
}
