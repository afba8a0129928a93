use crate::entities::Bin;
use crate::geometry::geo_traits::Contains;
use crate::geometry::primitives::{Footprint, Rect};
use crate::placement::Rejection;
use serde::Serialize;

/// Bounded lattice of `cols × rows` cells on which [`Bin`]s are arranged.
///
/// Every bin lies within `[0, cols) × [0, rows)` and no two bins overlap.
/// All mutating operations (see [`placement`](crate::placement)) either fully apply or leave the grid untouched.
/// Not deserializable: grids are only built through validated placements, see [`import_grid`](crate::io::import_grid).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
    pub(crate) bins: Vec<Bin>,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Grid {
            cols,
            rows,
            bins: vec![],
        }
    }

    /// Largest grid that fits inside a drawer of the given physical size.
    pub fn from_drawer(drawer_width: f32, drawer_depth: f32, grid_unit: f32) -> Self {
        let cells = |length: f32| match length > 0.0 && grid_unit > 0.0 {
            true => (length / grid_unit).floor() as usize,
            false => 0,
        };
        Grid::new(cells(drawer_width), cells(drawer_depth))
    }

    pub fn bounds(&self) -> Footprint<usize> {
        Footprint::new(self.cols, self.rows)
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn bin(&self, id: &str) -> Option<&Bin> {
        self.bins.iter().find(|b| b.id == id)
    }

    pub(crate) fn bin_index(&self, id: &str) -> Result<usize, Rejection> {
        self.bins
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| Rejection::UnknownBin(id.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn into_bins(self) -> Vec<Bin> {
        self.bins
    }

    /// Checks whether a rectangle of `footprint` could sit at `(x, y)`.
    /// The bin with id `exclude_id` is ignored, which allows checking a bin against all *other* bins.
    pub fn check_placement(
        &self,
        x: usize,
        y: usize,
        footprint: Footprint<usize>,
        exclude_id: Option<&str>,
    ) -> Result<(), Rejection> {
        let candidate = footprint.at(x, y);
        if !self.bounds().contains(&candidate) {
            return Err(Rejection::OutOfBounds {
                x,
                y,
                width: footprint.width,
                depth: footprint.depth,
            });
        }
        match self
            .bins
            .iter()
            .filter(|b| Some(b.id.as_str()) != exclude_id)
            .find(|b| b.rect().overlaps(&candidate))
        {
            Some(other) => Err(Rejection::Overlap {
                other: other.id.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn can_place(
        &self,
        x: usize,
        y: usize,
        footprint: Footprint<usize>,
        exclude_id: Option<&str>,
    ) -> bool {
        self.check_placement(x, y, footprint, exclude_id).is_ok()
    }

    /// First collision-free origin for `footprint`, scanning rows top to bottom and cells left to right.
    pub fn find_free_position(&self, footprint: Footprint<usize>) -> Option<(usize, usize)> {
        if footprint.width > self.cols || footprint.depth > self.rows {
            return None;
        }
        (0..=self.rows - footprint.depth)
            .flat_map(|y| (0..=self.cols - footprint.width).map(move |x| (x, y)))
            .find(|&(x, y)| self.is_free(&footprint.at(x, y)))
    }

    pub fn can_fit_anywhere(&self, footprint: Footprint<usize>) -> bool {
        self.find_free_position(footprint).is_some()
    }

    /// Number of cells not covered by any bin.
    pub fn free_cells(&self) -> usize {
        let used: usize = self.bins.iter().map(|b| b.footprint().area()).sum();
        self.cols.saturating_mul(self.rows).saturating_sub(used)
    }

    fn is_free(&self, rect: &Rect<usize>) -> bool {
        self.bins.iter().all(|b| !b.rect().overlaps(rect))
    }
}
