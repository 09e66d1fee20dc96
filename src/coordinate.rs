//! The numeric type every primitive in this crate is generic over.

use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A totally ordered numeric type supporting the arithmetic the predicate
/// kernel and the quadtree need: `+ - * /`, comparison with zero, `min`/`max`,
/// and doubling/halving (used by the quadtree to grow its root and split its
/// regions).
///
/// Integer types are first-class citizens here, matching the primary use case
/// (`C = i32`). Floating-point coordinate types can also implement this trait,
/// but `f32`/`f64` aren't `Ord`; wrap them (e.g. in a `NotNan`-style newtype)
/// if you need floats.
pub trait Coordinate:
  Copy
  + Ord
  + Debug
  + Zero
  + One
  + FromPrimitive
  + ToPrimitive
  + Add<Output = Self>
  + Sub<Output = Self>
  + Mul<Output = Self>
  + Div<Output = Self>
  + Neg<Output = Self>
{
  /// `self + self`. Equivalent to a left shift by one bit for integer types.
  fn doubled(self) -> Self {
    self + self
  }

  /// `self / 2`, truncating. Exact whenever `self` is a power of two, which
  /// is the only case the quadtree ever calls this on.
  fn halved(self) -> Self {
    self / (Self::one() + Self::one())
  }
}

impl<T> Coordinate for T where
  T: Copy
    + Ord
    + Debug
    + Zero
    + One
    + FromPrimitive
    + ToPrimitive
    + Add<Output = T>
    + Sub<Output = T>
    + Mul<Output = T>
    + Div<Output = T>
    + Neg<Output = T>
{
}

/// Coordinate types that support square roots, required only by `distance`
/// and `Vec2::normalize`/`perpendicular_axis`. Implemented for every
/// `Coordinate` by round-tripping through `f64`, so integer coordinate types
/// get a (truncating) square root for free.
pub trait Sqrt: Coordinate {
  fn sqrt(self) -> Self;
}

impl<T: Coordinate> Sqrt for T {
  fn sqrt(self) -> Self {
    let as_f64 = self.to_f64().unwrap_or(0.0);
    T::from_f64(as_f64.sqrt()).unwrap_or_else(T::zero)
  }
}
