/// Iterates over integer offsets `(dx, dy)` in square rings of growing Chebyshev distance.
///
/// Ring `d` holds every offset with `max(|dx|, |dy|) == d`, visited with `dx` ascending and,
/// within a column, `dy` ascending. Ring 0 is the single offset `(0, 0)`.
/// e.g. max_distance 1 -> (0,0), (-1,-1), (-1,0), (-1,1), (0,-1), (0,1), (1,-1), (1,0), (1,1)
#[derive(Debug, Clone)]
pub struct RingIterator {
    max_distance: isize,
    distance: isize,
    dx: isize,
    dy: isize,
}

impl RingIterator {
    pub fn new(max_distance: usize) -> Self {
        Self {
            max_distance: max_distance as isize,
            distance: 0,
            dx: 0,
            dy: 0,
        }
    }
}

impl Iterator for RingIterator {
    type Item = (isize, isize);

    fn next(&mut self) -> Option<Self::Item> {
        let d = self.distance;
        if d > self.max_distance {
            return None;
        }
        if self.dx > d {
            //current ring exhausted, move on to the next one
            self.distance += 1;
            self.dx = -self.distance;
            self.dy = -self.distance;
            return self.next();
        }
        let offset = (self.dx, self.dy);

        //interior columns only touch the ring at their top and bottom cell
        if self.dy >= d {
            self.dx += 1;
            self.dy = -d;
        } else if self.dx.abs() < d {
            self.dy = d;
        } else {
            self.dy += 1;
        }

        Some(offset)
    }
}
