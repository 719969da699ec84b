use thiserror::Error;

use crate::fallback::Fallback;
use crate::truthy::Truthy;

type StdOption<T> = std::option::Option<T>;

/// Immutable container that is either [`Present`](Option::Present) with exactly one value, or
/// [`Absent`](Option::Absent).
///
/// Combinators consume `self` and return a new instance; use [`as_ref`](Option::as_ref) to apply them while keeping
/// the original around.
#[derive(Clone, Copy, Debug)]
pub enum Option<T> {
  Present(T),
  Absent,
}

impl<T> Default for Option<T> {
  #[inline]
  fn default() -> Self { Self::Absent }
}

/// Returned by [`Option::try_get`] (and panicked with by [`Option::get`]) when no value is present.
#[derive(Default, Clone, Copy, Eq, PartialEq, Debug, Error)]
#[error("called get() on an absent value")]
pub struct EmptyValueError;

impl<T> Option<T> {
  /// Creates an option from `candidate`, which is either a bare value or a `std` option. Only the absence sentinel
  /// `None` gives [`Absent`](Option::Absent); `0`, `""` and `false` are all present values.
  ///
  /// ```
  /// use nullsafe_core::option::Option;
  ///
  /// assert_eq!(Option::of(0).get(), 0);
  /// assert_eq!(Option::<i32>::of(Some(0)).get(), 0);
  /// assert!(Option::<i32>::of(None).is_empty());
  /// ```
  ///
  /// When the candidate is itself a `std` option, the type parameter must be given as above, since `Some(x)` could
  /// also be the value of an `Option<Option<_>>`. With `T` set to a `std` option, `None` is that value and is present.
  #[inline]
  pub fn of(candidate: impl Into<StdOption<T>>) -> Self { Self::of_nullable(candidate.into()) }

  /// Creates an option from a candidate that may be the absence sentinel: `Some(value)` is present, `None` is absent.
  #[inline]
  pub fn of_nullable(candidate: StdOption<T>) -> Self {
    match candidate {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }

  /// Creates an option that is present only if `candidate` is truthy, discarding falsy values such as `0`, `""`,
  /// `false`, and `NaN`.
  ///
  /// Unlike [`of`](Self::of), legitimate falsy values are lost here. Prefer `of` unless the coercive behaviour is
  /// actually wanted.
  #[inline]
  pub fn of_truthy(candidate: T) -> Self where T: Truthy {
    if candidate.is_truthy() {
      Self::Present(candidate)
    } else {
      Self::Absent
    }
  }

  #[inline]
  pub const fn empty() -> Self { Self::Absent }

  #[inline]
  pub const fn is_empty(&self) -> bool { matches!(self, Self::Absent) }

  #[inline]
  pub const fn is_present(&self) -> bool { !self.is_empty() }

  #[inline]
  pub const fn as_ref(&self) -> Option<&T> {
    match self {
      Self::Present(value) => Option::Present(value),
      Self::Absent => Option::Absent,
    }
  }

  /// Applies `f` to the present value. `f` is not called when absent.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
    match self {
      Self::Present(value) => Option::Present(f(value)),
      Self::Absent => Option::Absent,
    }
  }

  /// Returns the option produced by `f` from the present value. `f` is not called when absent.
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
    match self {
      Self::Present(value) => f(value),
      Self::Absent => Option::Absent,
    }
  }

  /// Returns the present value, or resolves `fallback`. A [`Fallback::Supplier`] is only called when absent.
  #[inline]
  pub fn get_or_else<'a>(self, fallback: impl Into<Fallback<'a, T>>) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => fallback.into().resolve(),
    }
  }

  /// Returns `self` if present, or resolves `fallback` into an alternative option. A [`Fallback::Supplier`] is only
  /// called when absent.
  #[inline]
  pub fn or_else<'a>(self, fallback: impl Into<Fallback<'a, Option<T>>>) -> Option<T> {
    match self {
      Self::Present(_) => self,
      Self::Absent => fallback.into().resolve(),
    }
  }

  pub fn try_get(self) -> Result<T, EmptyValueError> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => {
        #[cfg(feature = "tracing")]
        tracing::debug!("attempted to get the value of an absent option");
        Err(EmptyValueError)
      }
    }
  }

  /// Returns the present value.
  ///
  /// # Panics
  ///
  /// Panics with [`EmptyValueError`] if absent. Use [`try_get`](Self::try_get) to handle absence without panicking.
  #[inline]
  #[track_caller]
  pub fn get(self) -> T {
    match self.try_get() {
      Ok(value) => value,
      Err(cause) => panic!("{}", cause),
    }
  }

  /// Returns the present value as `Some`, or the absence sentinel `None`.
  #[inline]
  pub fn or_null(self) -> StdOption<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }

  /// Calls `consumer` once with the present value. `consumer` is not called when absent.
  #[inline]
  pub fn for_each(self, consumer: impl FnOnce(T)) {
    if let Self::Present(value) = self {
      consumer(value);
    }
  }
}

impl<T> From<StdOption<T>> for Option<T> {
  #[inline]
  fn from(candidate: StdOption<T>) -> Self { Self::of_nullable(candidate) }
}

impl<T> From<Option<T>> for StdOption<T> {
  #[inline]
  fn from(option: Option<T>) -> Self { option.or_null() }
}
