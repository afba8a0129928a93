use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Sub};

/// Scalar type in which rectangles are expressed.
///
/// Grids work in whole cells (`usize`), plates in millimetres (`f32`).
/// Both share the same predicates, so every geometric primitive is generic over this trait.
pub trait Coord:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    const ZERO: Self;
}

impl Coord for usize {
    const ZERO: Self = 0;
}

impl Coord for f32 {
    const ZERO: Self = 0.0;
}
