use crate::error::{Error, Side};
use crate::maybe::Maybe;

/// A value that is either `L` or `R`, never both and never neither.
///
/// Construct with [`Either::new_left`] and [`Either::new_right`]; there are no implicit conversions from bare values,
/// as they would be ambiguous when `L` and `R` are the same type. Eliminate with one of the `match_*` methods, which
/// require a handler for both sides.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
  Left(L),
  Right(R),
}

impl<L, R> Either<L, R> {
  #[inline]
  pub const fn new_left(left: L) -> Self { Self::Left(left) }
  #[inline]
  pub const fn new_right(right: R) -> Self { Self::Right(right) }


  #[inline]
  pub const fn is_left(&self) -> bool { matches!(self, Self::Left(_)) }
  #[inline]
  pub const fn is_right(&self) -> bool { matches!(self, Self::Right(_)) }


  /// Applies `on_left` or `on_right` to the value, depending on the side.
  #[inline]
  pub fn match_value<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
    match self {
      Self::Left(left) => on_left(left),
      Self::Right(right) => on_right(right),
    }
  }
  /// Calls `on_left` or `on_right` with a reference to the value, depending on the side.
  #[inline]
  pub fn match_action(&self, on_left: impl FnOnce(&L), on_right: impl FnOnce(&R)) {
    match self {
      Self::Left(left) => on_left(left),
      Self::Right(right) => on_right(right),
    }
  }
  /// Calls `on_left` or `on_right` depending on the side, ignoring the value.
  #[inline]
  pub fn select<T>(&self, on_left: impl FnOnce() -> T, on_right: impl FnOnce() -> T) -> T {
    match self {
      Self::Left(_) => on_left(),
      Self::Right(_) => on_right(),
    }
  }

  /// Like [`match_value`](Self::match_value), for handlers that may be missing, for example when they are looked up at
  /// runtime. Fails with an invariant violation if either handler is missing, before any handler is called.
  pub fn try_match_value<T, FL, FR>(self, on_left: Option<FL>, on_right: Option<FR>) -> Result<T, Error> where
    FL: FnOnce(L) -> T,
    FR: FnOnce(R) -> T,
  {
    let on_left = on_left.ok_or_else(|| Error::missing_handler(Side::Left))?;
    let on_right = on_right.ok_or_else(|| Error::missing_handler(Side::Right))?;
    Ok(self.match_value(on_left, on_right))
  }
  /// Like [`match_action`](Self::match_action), for handlers that may be missing. Fails with an invariant violation if
  /// either handler is missing, before any handler is called.
  pub fn try_match_action<FL, FR>(&self, on_left: Option<FL>, on_right: Option<FR>) -> Result<(), Error> where
    FL: FnOnce(&L),
    FR: FnOnce(&R),
  {
    let on_left = on_left.ok_or_else(|| Error::missing_handler(Side::Left))?;
    let on_right = on_right.ok_or_else(|| Error::missing_handler(Side::Right))?;
    self.match_action(on_left, on_right);
    Ok(())
  }


  #[inline]
  pub fn left_or_default(self) -> L where L: Default { self.left_or_else(L::default) }
  #[inline]
  pub fn right_or_default(self) -> R where R: Default { self.right_or_else(R::default) }
  #[inline]
  pub fn left_or(self, default: L) -> L { self.left_or_else(|| default) }
  #[inline]
  pub fn right_or(self, default: R) -> R { self.right_or_else(|| default) }
  #[inline]
  pub fn left_or_else(self, f: impl FnOnce() -> L) -> L {
    match self {
      Self::Left(left) => left,
      Self::Right(_) => f(),
    }
  }
  #[inline]
  pub fn right_or_else(self, f: impl FnOnce() -> R) -> R {
    match self {
      Self::Left(_) => f(),
      Self::Right(right) => right,
    }
  }


  #[inline]
  pub fn left(self) -> Maybe<L> {
    match self {
      Self::Left(left) => Maybe::just(left),
      Self::Right(_) => Maybe::NOTHING,
    }
  }
  #[inline]
  pub fn right(self) -> Maybe<R> {
    match self {
      Self::Left(_) => Maybe::NOTHING,
      Self::Right(right) => Maybe::just(right),
    }
  }


  #[inline]
  pub const fn as_ref(&self) -> Either<&L, &R> {
    match self {
      Self::Left(left) => Either::Left(left),
      Self::Right(right) => Either::Right(right),
    }
  }
  #[inline]
  pub fn flip(self) -> Either<R, L> {
    match self {
      Self::Left(left) => Either::Right(left),
      Self::Right(right) => Either::Left(right),
    }
  }
  #[inline]
  pub fn map_left<U>(self, f: impl FnOnce(L) -> U) -> Either<U, R> {
    match self {
      Self::Left(left) => Either::Left(f(left)),
      Self::Right(right) => Either::Right(right),
    }
  }
  #[inline]
  pub fn map_right<U>(self, f: impl FnOnce(R) -> U) -> Either<L, U> {
    match self {
      Self::Left(left) => Either::Left(left),
      Self::Right(right) => Either::Right(f(right)),
    }
  }
}

/// Wraps a bare value into one side of an [`Either`], naming the side explicitly.
pub trait ToEither: Sized {
  #[inline]
  fn to_either_left<R>(self) -> Either<Self, R> { Either::Left(self) }
  #[inline]
  fn to_either_right<L>(self) -> Either<L, Self> { Either::Right(self) }
}
impl<T> ToEither for T {}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use crate::error::InvariantViolation;

  use super::*;

  fn left() -> Either<i32, String> { Either::new_left(5) }
  fn right() -> Either<i32, String> { Either::new_right("Five".to_string()) }

  #[test]
  fn match_value() {
    assert_eq!(left().match_value(|l| l, |_| 0), 5);
    assert_eq!(right().match_value(|_| 0, |r| r.len()), 4);
    assert!(left().select(|| true, || false));
    assert!(!right().select(|| true, || false));
  }

  #[test]
  fn match_action_runs_exactly_one_side() {
    let seen_left = Cell::new(0);
    let seen_right = Cell::new("");
    left().match_action(|l| seen_left.set(*l), |_| seen_right.set("right"));
    assert_eq!((seen_left.get(), seen_right.get()), (5, ""));
    right().match_action(|_| seen_left.set(-1), |_| seen_right.set("right"));
    assert_eq!((seen_left.get(), seen_right.get()), (5, "right"));
  }

  #[test]
  fn missing_handler_fails_before_any_branch_runs() {
    let calls = Cell::new(0);
    let count = |_: String| {
      calls.set(calls.get() + 1);
      0
    };
    let error = right().try_match_value(None::<fn(i32) -> i32>, Some(count)).unwrap_err();
    assert_eq!(error, Error::InvariantViolation(InvariantViolation::MissingHandler { side: Side::Left }));
    assert_eq!(calls.get(), 0);

    let error = left().try_match_value(Some(|l: i32| l), None::<fn(String) -> i32>).unwrap_err();
    assert_eq!(error, Error::InvariantViolation(InvariantViolation::MissingHandler { side: Side::Right }));

    let error = left().try_match_action(Some(|_: &i32| calls.set(100)), None::<fn(&String)>).unwrap_err();
    assert!(error.is_invariant_violation());
    assert_eq!(calls.get(), 0);

    assert_eq!(left().try_match_value(Some(|l: i32| l), Some(|_: String| 0)), Ok(5));
  }

  #[test]
  fn or_default() {
    assert_eq!(left().left_or_default(), 5);
    assert_eq!(left().right_or_default(), "");
    assert_eq!(right().left_or_default(), 0);
    assert_eq!(right().right_or_default(), "Five");
    assert_eq!(right().left_or(29), 29);
    assert_eq!(left().right_or("Twenty nine".to_string()), "Twenty nine");

    let same: Either<&str, &str> = Either::new_right("x");
    assert_eq!(same.right_or_default(), "x");
    assert_eq!(same.left_or_default(), "");
  }

  #[test]
  fn sides_as_maybe() {
    assert_eq!(left().left(), Maybe::just(5));
    assert_eq!(left().right(), Maybe::NOTHING);
    assert_eq!(right().flip().left(), Maybe::just("Five".to_string()));
    assert_eq!(left().map_left(|l| l * 2).as_ref().left(), Maybe::just(&10));
  }

  #[test]
  fn extension_constructors() {
    let left = 29.to_either_left::<String>();
    let right = "Twenty nine".to_either_right::<i32>();
    assert!(left.is_left());
    assert!(right.is_right());
    assert_eq!(right.right_or_default(), "Twenty nine");
    assert_eq!(right.left_or_default(), 0);
  }

  #[cfg(feature = "serde")]
  #[test]
  fn serializes_externally_tagged() {
    assert_eq!(serde_json::to_string(&left()).unwrap(), r#"{"Left":5}"#);
    assert_eq!(serde_json::from_str::<Either<i32, String>>(r#"{"Right":"Five"}"#).unwrap(), right());
  }
}
