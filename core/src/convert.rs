//! Conversions between [`Maybe`] and raw values, nullable values, references, and other types.
//!
//! Rust source values come in three shapes:
//!
//! - plain values, which have no absence sentinel and are always present: [`ToMaybe::to_maybe_value`];
//! - nullable values, `Option<T>`, where `None` is the sentinel: [`Maybe::from_nullable`];
//! - references that may point to nothing, such as raw pointers or `Option<&T>`: [`Maybe::from_object`].
//!
//! The [`Sentinel`] capability unifies the last two, and [`Sentinel::to_maybe`] is the sentinel-aware generic
//! conversion. Strict `just_*` constructors fail with [`InvariantViolation`](crate::error::InvariantViolation) instead
//! of returning `Nothing`.

use std::any::Any;
use std::ptr::NonNull;

use crate::error::Error;
use crate::maybe::Maybe;

/// A value that may be the absence sentinel of its type.
pub trait Sentinel: Sized {
  /// Type of the value when it is not the sentinel.
  type Present;

  /// Returns `None` if `self` is the sentinel, otherwise the present value.
  fn into_present(self) -> Option<Self::Present>;

  /// Converts into `Nothing` if `self` is the sentinel, otherwise into `Just` the present value.
  #[inline]
  fn to_maybe(self) -> Maybe<Self::Present> {
    self.into_present().into()
  }
  /// Converts into `Just` the present value, or fails with an invariant violation if `self` is the sentinel.
  #[inline]
  fn to_just(self) -> Result<Maybe<Self::Present>, Error> {
    self.into_present().map(Maybe::just).ok_or_else(Error::absent_just::<Self::Present>)
  }
}

impl<T> Sentinel for Option<T> {
  type Present = T;
  #[inline]
  fn into_present(self) -> Option<T> { self }
}
impl<'a, T> Sentinel for &'a Option<T> {
  type Present = &'a T;
  #[inline]
  fn into_present(self) -> Option<&'a T> { self.as_ref() }
}
impl<T: ?Sized> Sentinel for *const T {
  type Present = NonNull<T>;
  #[inline]
  fn into_present(self) -> Option<NonNull<T>> { NonNull::new(self.cast_mut()) }
}
impl<T: ?Sized> Sentinel for *mut T {
  type Present = NonNull<T>;
  #[inline]
  fn into_present(self) -> Option<NonNull<T>> { NonNull::new(self) }
}


/// Conversions from plain values, which are never the absence sentinel.
pub trait ToMaybe: Sized {
  /// Wraps `self` as `Just`.
  ///
  /// `self` is not inspected, so `None` or a null pointer becomes a `Just` holding the sentinel. Use
  /// [`Sentinel::to_maybe`] for values that may be the sentinel.
  #[inline]
  fn to_maybe_value(self) -> Maybe<Self> { Maybe::just(self) }

  /// Converts `self` into `U`, returning `Nothing` if the conversion fails.
  #[inline]
  fn maybe_cast<U: TryFrom<Self>>(self) -> Maybe<U> {
    U::try_from(self).ok().into()
  }
}
impl<T> ToMaybe for T {}


impl<T> Maybe<T> {
  /// Converts a nullable value: `None` becomes `Nothing`.
  #[inline]
  pub fn from_nullable(value: Option<T>) -> Self { value.into() }
  /// Converts a nullable value, failing with an invariant violation on `None`.
  #[inline]
  pub fn just_nullable(value: Option<T>) -> Result<Self, Error> { value.to_just() }

  /// Converts a reference-shaped value: the sentinel becomes `Nothing`.
  #[inline]
  pub fn from_object<S: Sentinel<Present=T>>(value: S) -> Self { value.to_maybe() }
  /// Converts a reference-shaped value, failing with an invariant violation on the sentinel.
  #[inline]
  pub fn just_object<S: Sentinel<Present=T>>(value: S) -> Result<Self, Error> { value.to_just() }

  /// Converts back into a nullable value: `Nothing` becomes `None`.
  #[inline]
  pub fn into_nullable(self) -> Option<T> { self.into_option() }

  /// Converts the contained value into `U`, returning `Nothing` if `self` is `Nothing` or the conversion fails.
  #[inline]
  pub fn cast<U: TryFrom<T>>(self) -> Maybe<U> {
    self.and_then(|value| value.maybe_cast())
  }
}

impl Maybe<Box<dyn Any>> {
  /// Downcasts the contained value to `U`, returning `Nothing` if it is of another type.
  #[inline]
  pub fn downcast<U: Any>(self) -> Maybe<Box<U>> {
    self.and_then(|value| value.downcast::<U>().ok().into())
  }
}
impl Maybe<Box<dyn Any + Send>> {
  /// Downcasts the contained value to `U`, returning `Nothing` if it is of another type.
  #[inline]
  pub fn downcast<U: Any>(self) -> Maybe<Box<U>> {
    self.and_then(|value| value.downcast::<U>().ok().into())
  }
}
impl<'a> Maybe<&'a dyn Any> {
  /// Downcasts the referenced value to `U`, returning `Nothing` if it is of another type.
  #[inline]
  pub fn downcast_ref<U: Any>(self) -> Maybe<&'a U> {
    self.and_then(|value| value.downcast_ref::<U>().into())
  }
}

impl<T> From<Option<T>> for Maybe<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    match value {
      Some(value) => Maybe::just(value),
      None => Maybe::NOTHING,
    }
  }
}
impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(value: Maybe<T>) -> Self { value.into_option() }
}
