use std::fmt::{Display, Formatter};

/// Side of an [`Either`](crate::either::Either).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Side {
  Left,
  Right,
}
impl Display for Side {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Side::Left => f.write_str("left"),
      Side::Right => f.write_str("right"),
    }
  }
}

/// A caller programming error: something that was asserted to be present was absent.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum InvariantViolation {
  #[error("Cannot create a Just<{type_name}> from an absent value")]
  AbsentJust { type_name: &'static str },
  #[error("Handler for the {side} side of Either is missing")]
  MissingHandler { side: Side },
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
  #[error("Cannot get the value of Nothing<{type_name}>")]
  EmptyValueAccess { type_name: &'static str },
  #[error(transparent)]
  InvariantViolation(#[from] InvariantViolation),
}
impl Error {
  #[inline]
  pub fn is_empty_value_access(&self) -> bool {
    matches!(self, Error::EmptyValueAccess { .. })
  }
  #[inline]
  pub fn is_invariant_violation(&self) -> bool {
    matches!(self, Error::InvariantViolation(_))
  }

  pub(crate) fn empty_value_access<T>() -> Self {
    let type_name = std::any::type_name::<T>();
    #[cfg(feature = "tracing")]
    tracing::debug!(type_name, "attempted to get the value of Nothing");
    Error::EmptyValueAccess { type_name }
  }
  pub(crate) fn absent_just<T>() -> Self {
    let type_name = std::any::type_name::<T>();
    #[cfg(feature = "tracing")]
    tracing::debug!(type_name, "attempted to create Just from an absent value");
    InvariantViolation::AbsentJust { type_name }.into()
  }
  pub(crate) fn missing_handler(side: Side) -> Self {
    #[cfg(feature = "tracing")]
    tracing::debug!(%side, "Either handler is missing");
    InvariantViolation::MissingHandler { side }.into()
  }
}
