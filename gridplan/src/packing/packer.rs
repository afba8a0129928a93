use crate::entities::{Bin, Plate, PlateKind, PlateWarning};
use crate::geometry::geo_enums::Rotation;
use crate::geometry::primitives::Footprint;
use crate::packing::{PackItem, bottom_left_position};
use crate::util::{PlanConfig, assertions};
use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use slotmap::{SlotMap, new_key_type};
use std::cmp::Reverse;

new_key_type! {
    /// Unique key for each [`Plate`] opened during a packing run
    pub struct PlateKey;
}

/// Packs `items` onto as few plates of size `bed` as the first-fit-decreasing heuristic manages.
///
/// Items are handled largest area first (ties keep input order). Each item goes to the first plate,
/// in creation order, that has a bottom-left position for it; first unturned on every plate, then turned
/// a quarter on every plate. Items that fit nowhere open a new plate.
/// An item exceeding the bed in both orientations gets a dedicated plate flagged with [`PlateWarning::Oversized`]
/// instead of failing the whole run.
///
/// Every item ends up on exactly one plate. The result only depends on the input order and sizes.
pub fn pack(items: &[PackItem], bed: Footprint<f32>) -> Vec<Plate> {
    let mut plates: SlotMap<PlateKey, Plate> = SlotMap::with_key();

    for item in placement_order(items) {
        let placement = search_plates(&plates, item.footprint, bed)
            .map(|(pk, x, y)| (pk, x, y, Rotation::Deg0))
            .or_else(|| match item.footprint.is_square() {
                true => None,
                false => search_plates(&plates, item.footprint.rotated(), bed)
                    .map(|(pk, x, y)| (pk, x, y, Rotation::Deg90)),
            });

        match placement {
            Some((pk, x, y, rotation)) => {
                let plate = &mut plates[pk];
                debug!(
                    "[PACK] item {} placed at ({x}, {y}) [{rotation}] on {}",
                    item.source_id, plate.id
                );
                plate.items.push(item.placed_at(x, y, rotation));
            }
            None => {
                let plate = open_plate(item, bed, plates.len() + 1);
                debug!("[PACK] item {} opened {}", item.source_id, plate.id);
                plates.insert(plate);
            }
        }
    }

    let plates = plates.into_iter().map(|(_, p)| p).collect_vec();

    debug_assert!(plates.iter().all(assertions::plate_is_valid));
    debug_assert!(assertions::packing_is_complete(items, &plates));

    info!(
        "[PACK] packed {} items onto {} plates ({} oversized)",
        items.len(),
        plates.len(),
        plates.iter().filter(|p| p.warning.is_some()).count()
    );
    plates
}

/// Packs the bins of a grid, converted to mm with `config`.
pub fn pack_bins(bins: &[Bin], bed: Footprint<f32>, config: &PlanConfig) -> Vec<Plate> {
    let items = bins
        .iter()
        .map(|b| PackItem::from_bin(b, config))
        .collect_vec();
    pack(&items, bed)
}

/// Largest area first, equal areas in input order.
pub fn placement_order(items: &[PackItem]) -> impl Iterator<Item = &PackItem> {
    items
        .iter()
        .sorted_by_key(|item| Reverse(OrderedFloat(item.footprint.area())))
}

/// First plate (in creation order) with a bottom-left position for `footprint`.
fn search_plates(
    plates: &SlotMap<PlateKey, Plate>,
    footprint: Footprint<f32>,
    bed: Footprint<f32>,
) -> Option<(PlateKey, f32, f32)> {
    plates
        .iter()
        .filter(|(_, plate)| !plate.is_auxiliary())
        .find_map(|(pk, plate)| {
            bottom_left_position(&plate.items, footprint, bed).map(|(x, y)| (pk, x, y))
        })
}

/// Opens plate number `n` with `item` at its origin.
fn open_plate(item: &PackItem, bed: Footprint<f32>, n: usize) -> Plate {
    let rotation = match (
        bed.fits(&item.footprint),
        bed.fits(&item.footprint.rotated()),
    ) {
        (true, _) => Some(Rotation::Deg0),
        (false, true) => Some(Rotation::Deg90),
        (false, false) => None,
    };

    match rotation {
        Some(rotation) => {
            let mut plate = Plate::new(
                format!("bins-{n}"),
                format!("Bin Plate {n}"),
                PlateKind::Bins,
                bed,
            );
            plate.items.push(item.placed_at(0.0, 0.0, rotation));
            plate
        }
        None => {
            warn!(
                "[PACK] item {} ({}×{}) does not fit a {}×{} bed in either orientation",
                item.source_id, item.footprint.width, item.footprint.depth, bed.width, bed.depth
            );
            let mut plate = Plate::new(
                format!("bins-oversized-{n}"),
                format!("Bin Plate {n} (OVERSIZED)"),
                PlateKind::Bins,
                item.footprint,
            );
            let mut placed = item.placed_at(0.0, 0.0, Rotation::Deg0);
            placed.label = format!("{} (too large for printer bed!)", placed.label);
            plate.items.push(placed);
            plate.warning = Some(PlateWarning::Oversized);
            plate
        }
    }
}
