use crate::entities::{Grid, Plate};
use crate::geometry::geo_traits::Contains;
use crate::packing::PackItem;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

pub fn grid_is_valid(grid: &Grid) -> bool {
    let bounds = grid.bounds();
    if let Some(bin) = grid.bins().iter().find(|b| !bounds.contains(&b.rect())) {
        error!("bin {} at {:?} exceeds the {}×{} grid", bin.id, bin.rect(), grid.cols, grid.rows);
        return false;
    }
    if !grid.bins().iter().map(|b| &b.id).all_unique() {
        error!("grid contains duplicate bin ids");
        return false;
    }
    for (a, b) in grid.bins().iter().tuple_combinations() {
        if a.rect().overlaps(&b.rect()) {
            error!("bins {} and {} overlap", a.id, b.id);
            return false;
        }
    }
    true
}

pub fn plate_is_valid(plate: &Plate) -> bool {
    let bounds = plate.bounds();
    if let Some(item) = plate.items.iter().find(|i| !bounds.contains(&i.rect())) {
        error!("item {:?} exceeds plate {}", item.rect(), plate.id);
        return false;
    }
    for (a, b) in plate.items.iter().tuple_combinations() {
        if a.rect().overlaps(&b.rect()) {
            error!("items {} and {} overlap on plate {}", a.label, b.label, plate.id);
            return false;
        }
    }
    true
}

/// Every item is on exactly one plate and nothing else is.
pub fn packing_is_complete(items: &[PackItem], plates: &[Plate]) -> bool {
    let input_ids = items.iter().map(|i| i.source_id.as_str()).sorted().collect_vec();
    let packed_ids = plates
        .iter()
        .flat_map(|p| p.items.iter())
        .filter_map(|i| i.source_id.as_deref())
        .sorted()
        .collect_vec();
    if input_ids != packed_ids {
        error!(
            "packed items do not match the input: {} in, {} out",
            input_ids.len(),
            packed_ids.len()
        );
        return false;
    }
    true
}
