/// Trait for types that can detect collisions between `Self` and `T`.
///
/// Collisions are strict: two shapes that only share a boundary do not collide.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for bounded regions that can tell whether `T` lies entirely within them.
pub trait Contains<T> {
    fn contains(&self, other: &T) -> bool;
}
