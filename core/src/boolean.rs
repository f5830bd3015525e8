//! Combining a `bool` condition with a value into a `Maybe`, and running actions gated on a `Maybe<bool>`.
//!
//! `Maybe<bool>` also gets Kleene three-valued `!`, `&`, and `|`, where `Nothing` is the unknown value. These operators
//! are an addition on top of the gated actions, not part of them: `run_when_true` still treats `Nothing` as not true.

use std::ops::{BitAnd, BitOr, Not};

use crate::convert::Sentinel;
use crate::maybe::Maybe;

pub trait BoolThenMaybe {
  /// Returns `Just(f())` if `self` is true, otherwise `Nothing`. `f` is only called when `self` is true.
  ///
  /// The produced value is wrapped as is, like [`Maybe::just`]; use [`then_maybe_object`](Self::then_maybe_object)
  /// when `f` may produce the absence sentinel.
  fn then_maybe<T>(self, f: impl FnOnce() -> T) -> Maybe<T>;
  /// Returns `Just(value)` if `self` is true, otherwise `Nothing`. `value` is wrapped as is.
  fn then_maybe_value<T>(self, value: T) -> Maybe<T>;
  /// Returns `f()` converted with [`Sentinel::to_maybe`] if `self` is true, otherwise `Nothing`. A produced sentinel
  /// becomes `Nothing`. `f` is only called when `self` is true.
  fn then_maybe_object<S: Sentinel>(self, f: impl FnOnce() -> S) -> Maybe<S::Present>;
}
impl BoolThenMaybe for bool {
  #[inline]
  fn then_maybe<T>(self, f: impl FnOnce() -> T) -> Maybe<T> {
    if self { Maybe::just(f()) } else { Maybe::NOTHING }
  }
  #[inline]
  fn then_maybe_value<T>(self, value: T) -> Maybe<T> {
    if self { Maybe::just(value) } else { Maybe::NOTHING }
  }
  #[inline]
  fn then_maybe_object<S: Sentinel>(self, f: impl FnOnce() -> S) -> Maybe<S::Present> {
    if self { f().to_maybe() } else { Maybe::NOTHING }
  }
}

impl Maybe<bool> {
  /// Returns true only for `Just(true)`; `Nothing` is not true.
  #[inline]
  pub fn is_true(&self) -> bool {
    *self == Maybe::just(true)
  }

  /// Calls `f` if `self` is `Just(true)`.
  #[inline]
  pub fn run_when_true(&self, f: impl FnOnce()) {
    if self.is_true() {
      f();
    }
  }
  /// Calls `f` if `self` is `Just(true)`, otherwise calls `otherwise`.
  #[inline]
  pub fn run_when_true_else(&self, f: impl FnOnce(), otherwise: impl FnOnce()) {
    if self.is_true() {
      f();
    } else {
      otherwise();
    }
  }
}

/// Kleene negation: `Nothing` stays unknown.
impl Not for Maybe<bool> {
  type Output = Self;
  #[inline]
  fn not(self) -> Self { self.map(|value| !value) }
}
/// Kleene conjunction: false if either side is `Just(false)`, unknown if either side is `Nothing`.
impl BitAnd for Maybe<bool> {
  type Output = Self;
  #[inline]
  fn bitand(self, rhs: Self) -> Self {
    match (self.into_nullable(), rhs.into_nullable()) {
      (Some(false), _) | (_, Some(false)) => Maybe::just(false),
      (Some(true), Some(true)) => Maybe::just(true),
      _ => Maybe::NOTHING,
    }
  }
}
/// Kleene disjunction: true if either side is `Just(true)`, unknown if either side is `Nothing`.
impl BitOr for Maybe<bool> {
  type Output = Self;
  #[inline]
  fn bitor(self, rhs: Self) -> Self {
    match (self.into_nullable(), rhs.into_nullable()) {
      (Some(true), _) | (_, Some(true)) => Maybe::just(true),
      (Some(false), Some(false)) => Maybe::just(false),
      _ => Maybe::NOTHING,
    }
  }
}
