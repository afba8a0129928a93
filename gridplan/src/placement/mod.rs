//! Interactive editing of bins on a [`Grid`].
//!
//! Every operation validates against the current grid and either applies fully or returns a
//! [`Rejection`] without touching the grid.

mod rejection;
mod ring_iterator;

#[doc(inline)]
pub use rejection::Rejection;
#[doc(inline)]
pub use ring_iterator::RingIterator;

use crate::entities::{Bin, Grid};
use crate::geometry::geo_enums::Direction;
use crate::util::assertions;
use log::debug;

impl Grid {
    /// Adds a new bin at the position it carries.
    pub fn place_bin(&mut self, bin: Bin) -> Result<(), Rejection> {
        if self.bin(&bin.id).is_some() {
            return Err(Rejection::DuplicateId(bin.id));
        }
        self.check_placement(bin.x, bin.y, bin.footprint(), None)?;
        debug!("[PLACE] bin {} placed at ({}, {})", bin.id, bin.x, bin.y);
        self.bins.push(bin);

        debug_assert!(assertions::grid_is_valid(self));
        Ok(())
    }

    pub fn remove_bin(&mut self, id: &str) -> Option<Bin> {
        let index = self.bin_index(id).ok()?;
        Some(self.bins.remove(index))
    }

    /// Moves a bin to `(x, y)`, keeping its orientation.
    /// Clamping a requested position into the grid is left to the caller, see [`Grid::nudge_bin`].
    pub fn move_bin(&mut self, id: &str, x: usize, y: usize) -> Result<(), Rejection> {
        let index = self.bin_index(id)?;
        let footprint = self.bins[index].footprint();
        self.check_placement(x, y, footprint, Some(id))?;

        let bin = &mut self.bins[index];
        (bin.x, bin.y) = (x, y);

        debug_assert!(assertions::grid_is_valid(self));
        Ok(())
    }

    /// Moves a bin a single cell in `direction`, clamped to the grid.
    /// A step against the border is a successful no-op.
    pub fn nudge_bin(&mut self, id: &str, direction: Direction) -> Result<(), Rejection> {
        let bin = &self.bins[self.bin_index(id)?];
        let max_x = self.cols.saturating_sub(bin.width);
        let max_y = self.rows.saturating_sub(bin.depth);
        let (x, y) = match direction {
            Direction::Up => (bin.x, bin.y.saturating_sub(1)),
            Direction::Down => (bin.x, (bin.y + 1).min(max_y)),
            Direction::Left => (bin.x.saturating_sub(1), bin.y),
            Direction::Right => ((bin.x + 1).min(max_x), bin.y),
        };
        match (x, y) == (bin.x, bin.y) {
            true => Ok(()),
            false => self.move_bin(id, x, y),
        }
    }

    /// Turns a bin a quarter and moves it to the nearest position where the turned footprint fits.
    ///
    /// Candidates are visited in rings of growing distance around the current origin (see [`RingIterator`]),
    /// up to the larger of the bin's two extents, and restricted to positions that keep the bin inside the grid.
    /// Returns the new origin.
    pub fn rotate_bin(&mut self, id: &str) -> Result<(usize, usize), Rejection> {
        let index = self.bin_index(id)?;
        let bin = &self.bins[index];
        let rotated = bin.footprint().rotated();
        let reach = bin.width.max(bin.depth);

        if rotated.width > self.cols || rotated.depth > self.rows {
            return Err(Rejection::NoValidRotation);
        }
        let x_range = bin.x.saturating_sub(reach)..=(bin.x + reach).min(self.cols - rotated.width);
        let y_range = bin.y.saturating_sub(reach)..=(bin.y + reach).min(self.rows - rotated.depth);

        let (x, y) = RingIterator::new(reach)
            .filter_map(|(dx, dy)| {
                let x = bin.x.checked_add_signed(dx)?;
                let y = bin.y.checked_add_signed(dy)?;
                (x_range.contains(&x) && y_range.contains(&y)).then_some((x, y))
            })
            .find(|&(x, y)| self.can_place(x, y, rotated, Some(id)))
            .ok_or(Rejection::NoValidRotation)?;

        debug!(
            "[PLACE] bin {} rotated to {}×{} at ({x}, {y}), was at ({}, {})",
            id, rotated.width, rotated.depth, bin.x, bin.y
        );

        let bin = &mut self.bins[index];
        bin.width = rotated.width;
        bin.depth = rotated.depth;
        bin.rotation = bin.rotation.toggled();
        (bin.x, bin.y) = (x, y);

        debug_assert!(assertions::grid_is_valid(self));
        Ok((x, y))
    }

    /// Prepares a copy of an existing bin under `new_id`, positioned at the first free spot.
    /// The copy is not added to the grid, confirm it with [`Grid::place_bin`].
    pub fn duplicate_bin(&self, id: &str, new_id: impl Into<String>) -> Result<Bin, Rejection> {
        let source = &self.bins[self.bin_index(id)?];
        let new_id = new_id.into();
        if self.bin(&new_id).is_some() {
            return Err(Rejection::DuplicateId(new_id));
        }
        let (x, y) = self
            .find_free_position(source.footprint())
            .ok_or(Rejection::Unfittable)?;

        Ok(Bin {
            id: new_id,
            label: Some(next_copy_label(&source.display_label())),
            x,
            y,
            ..source.clone()
        })
    }
}

/// `"Drawer"` becomes `"Drawer (2)"`, `"Drawer (2)"` becomes `"Drawer (3)"`.
pub fn next_copy_label(label: &str) -> String {
    let numbered = label.strip_suffix(')').and_then(|rest| {
        let open = rest.rfind('(')?;
        let base = rest[..open].trim_end();
        let n = rest[open + 1..].parse::<u64>().ok()?;
        (!base.is_empty()).then(|| format!("{base} ({})", n + 1))
    });
    numbered.unwrap_or_else(|| format!("{label} (2)"))
}
