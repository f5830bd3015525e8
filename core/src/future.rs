//! Composing [`Maybe`] with futures.
//!
//! Each operation awaits the single future it was given (and at most one fallback future); none of them spawn, cancel,
//! or retry work. Panics and errors inside the awaited futures propagate unchanged.

use std::future::Future;

use futures::FutureExt;

use crate::convert::Sentinel;
use crate::error::Error;
use crate::maybe::Maybe;

impl<T> Maybe<T> {
  /// Awaits `f` applied to the contained value and wraps its output as `Just`. When `self` is `Nothing`, completes
  /// immediately with `Nothing` and `f` is never called.
  #[inline]
  pub async fn map_async<U, Fut: Future<Output=U>>(self, f: impl FnOnce(T) -> Fut) -> Maybe<U> {
    match self.into_nullable() {
      Some(value) => Maybe::just(f(value).await),
      None => Maybe::NOTHING,
    }
  }

  /// Awaits `f` applied to the contained value. When `self` is `Nothing`, completes immediately with `Nothing` and `f`
  /// is never called.
  #[inline]
  pub async fn and_then_async<U, Fut: Future<Output=Maybe<U>>>(self, f: impl FnOnce(T) -> Fut) -> Maybe<U> {
    match self.into_nullable() {
      Some(value) => f(value).await,
      None => Maybe::NOTHING,
    }
  }
}


/// Extension trait for a [`Maybe`] of a future.
pub trait MaybeOfFutureExt {
  type Output;

  /// Flips `Maybe<impl Future<Output=T>>` into `impl Future<Output=Maybe<T>>`.
  fn flip(self) -> impl Future<Output=Maybe<Self::Output>>;
  fn map_future<U>(self, f: impl FnOnce(Self::Output) -> U) -> Maybe<impl Future<Output=U>>;
}

impl<F: Future> MaybeOfFutureExt for Maybe<F> {
  type Output = F::Output;

  #[inline]
  fn flip(self) -> impl Future<Output=Maybe<Self::Output>> {
    self.map_async(|fut| fut)
  }

  #[inline]
  fn map_future<U>(self, f: impl FnOnce(Self::Output) -> U) -> Maybe<impl Future<Output=U>> {
    self.map(|fut| fut.map(f))
  }
}


/// Extension trait for a future that produces a [`Maybe`].
///
/// Fallbacks are only evaluated when the produced `Maybe` is `Nothing`.
pub trait FutureOfMaybeExt<T>: Future<Output=Maybe<T>> + Sized {
  /// Awaits the `Maybe`, returning its value or `fallback`.
  #[inline]
  fn value_or(self, fallback: T) -> impl Future<Output=T> {
    self.map(move |maybe| maybe.unwrap_or(fallback))
  }

  /// Awaits the `Maybe`, returning its value or the result of calling `fallback`.
  #[inline]
  fn value_or_else(self, fallback: impl FnOnce() -> T) -> impl Future<Output=T> {
    self.map(move |maybe| maybe.unwrap_or_else(fallback))
  }

  /// Awaits the `Maybe`, returning its value or awaiting the future returned by `fallback`.
  #[inline]
  fn value_or_else_async<Fut: Future<Output=T>>(self, fallback: impl FnOnce() -> Fut) -> impl Future<Output=T> {
    async move {
      match self.await.into_nullable() {
        Some(value) => value,
        None => fallback().await,
      }
    }
  }
}
impl<T, F: Future<Output=Maybe<T>>> FutureOfMaybeExt<T> for F {}


/// Extension trait converting the output of a future into a [`Maybe`].
pub trait FutureToMaybeExt: Future + Sized {
  /// Awaits a plain value, which is always `Just`.
  #[inline]
  fn to_maybe_value_async(self) -> impl Future<Output=Maybe<Self::Output>> {
    self.map(Maybe::just)
  }

  /// Awaits a value that may be the absence sentinel, such as an `Option`, converting the sentinel into `Nothing`.
  #[inline]
  fn to_maybe_async(self) -> impl Future<Output=Maybe<<Self::Output as Sentinel>::Present>> where
    Self::Output: Sentinel
  {
    self.map(Sentinel::to_maybe)
  }

  /// Awaits a value that may be the absence sentinel, failing with an invariant violation on the sentinel.
  #[inline]
  fn to_just_async(self) -> impl Future<Output=Result<Maybe<<Self::Output as Sentinel>::Present>, Error>> where
    Self::Output: Sentinel
  {
    self.map(Sentinel::to_just)
  }
}
impl<F: Future> FutureToMaybeExt for F {}
