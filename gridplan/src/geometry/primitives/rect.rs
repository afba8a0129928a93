use crate::geometry::Coord;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Footprint;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, anchored at its minimum corner `(x, y)`.
/// Covers the half-open region `[x, x + width) × [y, y + depth)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub depth: T,
}

impl<T: Coord> Rect<T> {
    pub fn new(x: T, y: T, width: T, depth: T) -> Self {
        Rect { x, y, width, depth }
    }

    pub fn x_max(&self) -> T {
        self.x + self.width
    }

    pub fn y_max(&self) -> T {
        self.y + self.depth
    }

    pub fn footprint(&self) -> Footprint<T> {
        Footprint::new(self.width, self.depth)
    }

    /// The three corners other than the origin: right of, below, and diagonally across from it.
    pub fn far_corners(&self) -> [(T, T); 3] {
        [
            (self.x_max(), self.y),
            (self.x, self.y_max()),
            (self.x_max(), self.y_max()),
        ]
    }

    pub fn overlaps(&self, other: &Rect<T>) -> bool {
        self.collides_with(other)
    }
}

impl<T: Coord> CollidesWith<Rect<T>> for Rect<T> {
    #[inline(always)]
    fn collides_with(&self, other: &Rect<T>) -> bool {
        self.x < other.x_max()
            && other.x < self.x_max()
            && self.y < other.y_max()
            && other.y < self.y_max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Rect::new(0, 0, 2, 2), Rect::new(2, 0, 2, 2), false; "shared vertical edge")]
    #[test_case(Rect::new(0, 0, 2, 2), Rect::new(0, 2, 2, 2), false; "shared horizontal edge")]
    #[test_case(Rect::new(0, 0, 2, 2), Rect::new(2, 2, 1, 1), false; "shared corner")]
    #[test_case(Rect::new(0, 0, 2, 2), Rect::new(1, 1, 2, 2), true; "partial overlap")]
    #[test_case(Rect::new(0, 0, 4, 4), Rect::new(1, 1, 1, 1), true; "enclosed")]
    #[test_case(Rect::new(0, 0, 1, 5), Rect::new(3, 0, 1, 5), false; "disjoint")]
    fn overlap_is_symmetric(a: Rect<usize>, b: Rect<usize>, expected: bool) {
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
    }

    #[test]
    fn float_rects_touching_do_not_overlap() {
        let a = Rect::new(0.0f32, 0.0, 84.0, 84.0);
        let b = Rect::new(84.0f32, 0.0, 84.0, 84.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Rect::new(83.5, 10.0, 1.0, 1.0)));
    }

    #[test]
    fn far_corners() {
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(r.far_corners(), [(4, 2), (1, 6), (4, 6)]);
    }
}
