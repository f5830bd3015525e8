//! A disciplined optional value, [`Maybe`], and a two-variant sum type, [`Either`].
//!
//! Absence only enters through [`Maybe`]; conversions from nullable sources fold their absence sentinel into
//! [`Maybe::NOTHING`] so that a `Just` never wraps "no value".

pub mod error;
pub mod maybe;
pub mod convert;
pub mod lookup;
pub mod boolean;
#[cfg(feature = "async")]
pub mod future;
pub mod either;

pub use either::Either;
pub use error::Error;
pub use maybe::Maybe;

/// Extension traits, for glob importing.
pub mod prelude {
  pub use crate::boolean::BoolThenMaybe;
  pub use crate::convert::{Sentinel, ToMaybe};
  pub use crate::either::{Either, ToEither};
  #[cfg(feature = "async")]
  pub use crate::future::{FutureOfMaybeExt, FutureToMaybeExt, MaybeOfFutureExt};
  pub use crate::lookup::{MaybeLookup, TryGet};
  pub use crate::maybe::Maybe;
}
