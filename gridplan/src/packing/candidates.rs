use crate::entities::PlateItem;
use crate::geometry::geo_traits::Contains;
use crate::geometry::primitives::Footprint;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::iter;

/// Bottom-left placement of `footprint` among the `placed` items, within `bounds`.
///
/// Candidate origins are `(0, 0)` and the three non-origin corners of every placed item.
/// They are tried lowest row first, leftmost within a row. Returns the first one at which the
/// footprint stays within bounds and overlaps nothing.
pub fn bottom_left_position(
    placed: &[PlateItem],
    footprint: Footprint<f32>,
    bounds: Footprint<f32>,
) -> Option<(f32, f32)> {
    iter::once((0.0, 0.0))
        .chain(placed.iter().flat_map(|pi| pi.rect().far_corners()))
        .unique_by(|&(x, y)| (OrderedFloat(x), OrderedFloat(y)))
        .sorted_by_key(|&(x, y)| (OrderedFloat(y), OrderedFloat(x)))
        .find(|&(x, y)| {
            let candidate = footprint.at(x, y);
            bounds.contains(&candidate) && placed.iter().all(|pi| !pi.rect().overlaps(&candidate))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_enums::Rotation;
    use crate::packing::PackItem;

    #[test]
    fn empty_plate_starts_at_origin() {
        let bed = Footprint::new(100.0, 100.0);
        assert_eq!(
            bottom_left_position(&[], Footprint::new(10.0, 10.0), bed),
            Some((0.0, 0.0))
        );
        assert_eq!(bottom_left_position(&[], Footprint::new(110.0, 10.0), bed), None);
    }

    #[test]
    fn lowest_row_wins_over_leftmost() {
        let bed = Footprint::new(100.0, 100.0);
        let placed = vec![
            PackItem::new("a", 40.0, 60.0).placed_at(0.0, 0.0, Rotation::Deg0),
            PackItem::new("b", 40.0, 20.0).placed_at(40.0, 0.0, Rotation::Deg0),
        ];
        //(80, 0) sits on the top row, even though (0, 60) and (40, 20) are further left
        assert_eq!(
            bottom_left_position(&placed, Footprint::new(20.0, 20.0), bed),
            Some((80.0, 0.0))
        );
        //too wide for (80, 0), next row is y = 20
        assert_eq!(
            bottom_left_position(&placed, Footprint::new(30.0, 20.0), bed),
            Some((40.0, 20.0))
        );
    }
}
