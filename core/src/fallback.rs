use std::fmt::{self, Debug, Formatter};

/// Value used when an [`Option`](crate::option::Option) is absent: either given eagerly, or produced on demand by a
/// supplier.
///
/// A plain value converts into [`Fallback::Value`] through [`From`], so call sites can pass it directly:
///
/// ```
/// use nullsafe_core::fallback::Fallback;
/// use nullsafe_core::option::Option;
///
/// assert_eq!(Option::<i32>::empty().get_or_else(2), 2);
/// assert_eq!(Option::<i32>::empty().get_or_else(Fallback::supplier(|| 2)), 2);
/// ```
pub enum Fallback<'a, U> {
  Value(U),
  Supplier(Box<dyn FnOnce() -> U + 'a>),
}

impl<'a, U> Fallback<'a, U> {
  #[inline]
  pub fn value(value: U) -> Self { Self::Value(value) }

  #[inline]
  pub fn supplier(supplier: impl FnOnce() -> U + 'a) -> Self { Self::Supplier(Box::new(supplier)) }

  #[inline]
  pub fn is_supplier(&self) -> bool { matches!(self, Self::Supplier(_)) }

  /// Returns the eager value, or runs the supplier. The supplier runs at most once since `self` is consumed.
  pub fn resolve(self) -> U {
    match self {
      Self::Value(value) => value,
      Self::Supplier(supplier) => {
        #[cfg(feature = "tracing")]
        tracing::trace!("resolving fallback from supplier");
        supplier()
      }
    }
  }
}

impl<U> From<U> for Fallback<'_, U> {
  #[inline]
  fn from(value: U) -> Self { Self::Value(value) }
}

impl<U: Debug> Debug for Fallback<'_, U> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
      Self::Supplier(_) => f.write_str("Supplier(..)"),
    }
  }
}
