/// Loose truthiness, used by [`Option::of_truthy`](crate::option::Option::of_truthy) to decide presence.
///
/// Zero numbers, `NaN`, `false`, empty strings, and `None` are falsy; everything else is truthy.
pub trait Truthy {
  fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
  #[inline]
  fn is_truthy(&self) -> bool { *self }
}

macro_rules! impl_truthy_int {
  ($($t:ty),*) => {$(
    impl Truthy for $t {
      #[inline]
      fn is_truthy(&self) -> bool { *self != 0 }
    }
  )*};
}
impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
  ($($t:ty),*) => {$(
    impl Truthy for $t {
      #[inline]
      fn is_truthy(&self) -> bool { *self != 0.0 && !self.is_nan() }
    }
  )*};
}
impl_truthy_float!(f32, f64);

impl Truthy for char {
  #[inline]
  fn is_truthy(&self) -> bool { true }
}

impl Truthy for str {
  #[inline]
  fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl Truthy for String {
  #[inline]
  fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<T: Truthy + ?Sized> Truthy for &T {
  #[inline]
  fn is_truthy(&self) -> bool { (**self).is_truthy() }
}

impl<T: Truthy> Truthy for Option<T> {
  #[inline]
  fn is_truthy(&self) -> bool { self.as_ref().is_some_and(|value| value.is_truthy()) }
}
