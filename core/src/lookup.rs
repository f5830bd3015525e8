use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::convert::Sentinel;
use crate::maybe::Maybe;

/// Associative collection that can try to get the value for a key.
pub trait TryGet<Q: ?Sized> {
  type Value;

  fn try_get(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, Q, S> TryGet<Q> for HashMap<K, V, S> where
  K: Borrow<Q> + Hash + Eq,
  Q: Hash + Eq + ?Sized,
  S: BuildHasher,
{
  type Value = V;
  #[inline]
  fn try_get(&self, key: &Q) -> Option<&V> { self.get(key) }
}
impl<K, V, Q> TryGet<Q> for BTreeMap<K, V> where
  K: Borrow<Q> + Ord,
  Q: Ord + ?Sized,
{
  type Value = V;
  #[inline]
  fn try_get(&self, key: &Q) -> Option<&V> { self.get(key) }
}
impl<V> TryGet<usize> for [V] {
  type Value = V;
  #[inline]
  fn try_get(&self, index: &usize) -> Option<&V> { self.get(*index) }
}
impl<V> TryGet<usize> for Vec<V> {
  type Value = V;
  #[inline]
  fn try_get(&self, index: &usize) -> Option<&V> { self.get(*index) }
}
impl<V> TryGet<usize> for VecDeque<V> {
  type Value = V;
  #[inline]
  fn try_get(&self, index: &usize) -> Option<&V> { self.get(*index) }
}

#[cfg(feature = "hashbrown")]
impl<K, V, Q, S> TryGet<Q> for hashbrown::HashMap<K, V, S> where
  K: Borrow<Q> + Hash + Eq,
  Q: Hash + Eq + ?Sized,
  S: BuildHasher,
{
  type Value = V;
  #[inline]
  fn try_get(&self, key: &Q) -> Option<&V> { self.get(key) }
}
#[cfg(feature = "hashlink")]
impl<K, V, Q, S> TryGet<Q> for hashlink::LinkedHashMap<K, V, S> where
  K: Borrow<Q> + Hash + Eq,
  Q: Hash + Eq + ?Sized,
  S: BuildHasher,
{
  type Value = V;
  #[inline]
  fn try_get(&self, key: &Q) -> Option<&V> { self.get(key) }
}


/// Safe lookups that return [`Maybe`] instead of panicking or requiring out-parameters.
///
/// A missing key and a key mapped to the absence sentinel are both `Nothing`; callers cannot tell them apart.
pub trait MaybeLookup<Q: ?Sized>: TryGet<Q> {
  /// Looks up a reference to the value for `key`.
  #[inline]
  fn lookup(&self, key: &Q) -> Maybe<&Self::Value> {
    self.try_get(key).into()
  }

  /// Looks up a clone of the value for `key`.
  #[inline]
  fn lookup_value(&self, key: &Q) -> Maybe<Self::Value> where
    Self::Value: Clone
  {
    self.lookup(key).cloned()
  }

  /// Looks up the value for `key` in a collection of nullable values. A key mapped to the sentinel is `Nothing`.
  #[inline]
  fn lookup_nullable<'a>(&'a self, key: &Q) -> Maybe<<&'a Self::Value as Sentinel>::Present> where
    Self::Value: 'a,
    &'a Self::Value: Sentinel,
  {
    self.lookup(key).and_then(Sentinel::to_maybe)
  }
}
impl<C: TryGet<Q> + ?Sized, Q: ?Sized> MaybeLookup<Q> for C {}
