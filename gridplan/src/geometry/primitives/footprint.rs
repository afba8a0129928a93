use crate::geometry::Coord;
use crate::geometry::geo_traits::Contains;
use crate::geometry::primitives::Rect;
use serde::{Deserialize, Serialize};

/// Extents of a rectangle without a position: `width` along x, `depth` along y.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Footprint<T> {
    pub width: T,
    pub depth: T,
}

impl<T: Coord> Footprint<T> {
    pub fn new(width: T, depth: T) -> Self {
        Footprint { width, depth }
    }

    /// The same footprint turned by a quarter.
    pub fn rotated(&self) -> Self {
        Footprint {
            width: self.depth,
            depth: self.width,
        }
    }

    pub fn area(&self) -> T {
        self.width * self.depth
    }

    pub fn is_square(&self) -> bool {
        self.width == self.depth
    }

    /// Places the footprint with its minimum corner at `(x, y)`.
    pub fn at(&self, x: T, y: T) -> Rect<T> {
        Rect {
            x,
            y,
            width: self.width,
            depth: self.depth,
        }
    }

    /// Whether `other` fits inside `self` without being moved or turned.
    pub fn fits(&self, other: &Footprint<T>) -> bool {
        other.width <= self.width && other.depth <= self.depth
    }
}

impl<T: Coord> Contains<Rect<T>> for Footprint<T> {
    #[inline(always)]
    fn contains(&self, rect: &Rect<T>) -> bool {
        //compared without forming x + width, which can overflow for cell coordinates
        rect.x >= T::ZERO
            && rect.y >= T::ZERO
            && rect.width <= self.width
            && rect.depth <= self.depth
            && rect.x <= self.width - rect.width
            && rect.y <= self.depth - rect.depth
    }
}
