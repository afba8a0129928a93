//! Carrying production state over when plates are regenerated.

mod fingerprint;
mod progress;

#[doc(inline)]
pub use fingerprint::EMPTY_FINGERPRINT;
#[doc(inline)]
pub use fingerprint::fingerprint;
#[doc(inline)]
pub use progress::Progress;
#[doc(inline)]
pub use progress::failed_items;
#[doc(inline)]
pub use progress::has_failed_items;

use crate::entities::{Bin, Plate, PlateKind};
use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use std::collections::{HashMap, VecDeque};

/// Plates sharing this key are interchangeable as far as reconciliation is concerned.
pub type StructuralKey = (PlateKind, OrderedFloat<f32>, OrderedFloat<f32>);

pub fn structural_key(plate: &Plate) -> StructuralKey {
    (plate.kind, OrderedFloat(plate.width), OrderedFloat(plate.depth))
}

/// Whether plates have to be generated again: there are none stored, or the bins changed since.
pub fn needs_regeneration(
    stored_fingerprint: Option<&str>,
    stored_plates: Option<&[Plate]>,
    bins: &[Bin],
) -> bool {
    match (stored_fingerprint, stored_plates) {
        (Some(stored), Some(_)) => stored != fingerprint(bins),
        _ => true,
    }
}

/// Transfers status from `old` plates onto freshly generated `new` ones.
///
/// Old plates are grouped by [`structural_key`], leaving out auxiliary (reprint and oversized) plates.
/// Each new plate takes over the status and item failure flags of the first unclaimed old plate with
/// the same key, and keeps its defaults when there is none.
/// Two plates with equal kind and dimensions are indistinguishable here; this is a best-effort match, not a diff.
pub fn reconcile(old: &[Plate], mut new: Vec<Plate>) -> Vec<Plate> {
    let mut unclaimed: HashMap<StructuralKey, VecDeque<&Plate>> = old
        .iter()
        .filter(|p| !p.is_auxiliary())
        .into_group_map_by(|p| structural_key(p))
        .into_iter()
        .map(|(key, plates)| (key, VecDeque::from(plates)))
        .collect();

    let mut n_inherited = 0;
    for plate in new.iter_mut() {
        let matched = unclaimed
            .get_mut(&structural_key(plate))
            .and_then(|candidates| candidates.pop_front());
        if let Some(old_plate) = matched {
            debug!(
                "[RECONCILE] {} inherits status {:?} from {}",
                plate.id, old_plate.status, old_plate.id
            );
            inherit(plate, old_plate);
            n_inherited += 1;
        }
    }

    info!(
        "[RECONCILE] {n_inherited}/{} plates inherited their status from {} previous plates",
        new.len(),
        old.len()
    );
    new
}

/// Copies status onto `plate`, matching items by source id, or by position for items without one.
fn inherit(plate: &mut Plate, old: &Plate) {
    plate.status = old.status;
    for (i, item) in plate.items.iter_mut().enumerate() {
        let counterpart = match &item.source_id {
            Some(id) => old
                .items
                .iter()
                .find(|o| o.source_id.as_ref() == Some(id)),
            None => old.items.get(i).filter(|o| o.source_id.is_none()),
        };
        if let Some(counterpart) = counterpart {
            item.failed = counterpart.failed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{PlateStatus, PlateWarning};
    use crate::geometry::geo_enums::Rotation;
    use crate::geometry::primitives::Footprint;
    use crate::packing::PackItem;

    fn plate(id: &str, kind: PlateKind, size: f32, status: PlateStatus) -> Plate {
        let mut p = Plate::new(id.into(), id.into(), kind, Footprint::new(size, size));
        p.status = status;
        p
    }

    #[test]
    fn matching_key_preserves_status() {
        let old = vec![plate("bins-1", PlateKind::Bins, 220.0, PlateStatus::Complete)];
        let new = vec![plate("bins-1", PlateKind::Bins, 220.0, PlateStatus::NotStarted)];
        let merged = reconcile(&old, new);
        assert_eq!(merged[0].status, PlateStatus::Complete);
    }

    #[test]
    fn different_key_keeps_default() {
        let old = vec![
            plate("bins-1", PlateKind::Bins, 220.0, PlateStatus::Complete),
            plate("baseplate-0-0", PlateKind::Baseplate, 210.0, PlateStatus::Failed),
        ];
        let new = vec![
            plate("bins-1", PlateKind::Bins, 250.0, PlateStatus::NotStarted),
            plate("baseplate-0-0", PlateKind::Baseplate, 220.0, PlateStatus::NotStarted),
        ];
        let merged = reconcile(&old, new);
        assert!(merged.iter().all(|p| p.status == PlateStatus::NotStarted));
    }

    #[test]
    fn matches_are_first_come_first_served() {
        let old = vec![
            plate("bins-1", PlateKind::Bins, 220.0, PlateStatus::Complete),
            plate("bins-2", PlateKind::Bins, 220.0, PlateStatus::InProgress),
        ];
        let new = vec![
            plate("bins-1", PlateKind::Bins, 220.0, PlateStatus::NotStarted),
            plate("bins-2", PlateKind::Bins, 220.0, PlateStatus::NotStarted),
            plate("bins-3", PlateKind::Bins, 220.0, PlateStatus::NotStarted),
        ];
        let statuses = reconcile(&old, new).iter().map(|p| p.status).collect_vec();
        assert_eq!(
            statuses,
            vec![
                PlateStatus::Complete,
                PlateStatus::InProgress,
                PlateStatus::NotStarted
            ]
        );
    }

    #[test]
    fn auxiliary_plates_are_never_matched() {
        let mut oversized = plate(
            "bins-oversized-1",
            PlateKind::Bins,
            220.0,
            PlateStatus::Complete,
        );
        oversized.warning = Some(PlateWarning::Oversized);
        let old = vec![
            plate("reprint-1", PlateKind::Reprint, 220.0, PlateStatus::Complete),
            oversized,
        ];
        let new = vec![
            plate("reprint-1", PlateKind::Reprint, 220.0, PlateStatus::NotStarted),
            plate("bins-1", PlateKind::Bins, 220.0, PlateStatus::NotStarted),
        ];
        let merged = reconcile(&old, new);
        assert!(merged.iter().all(|p| p.status == PlateStatus::NotStarted));
    }

    #[test]
    fn failure_flags_follow_source_ids() {
        let item =
            |id: &str, x: f32| PackItem::new(id, 42.0, 42.0).placed_at(x, 0.0, Rotation::Deg0);
        let mut old = plate("bins-1", PlateKind::Bins, 220.0, PlateStatus::Failed);
        old.items = vec![item("a", 0.0), item("b", 42.0)];
        old.items[1].failed = true;

        let mut new = plate("bins-1", PlateKind::Bins, 220.0, PlateStatus::NotStarted);
        new.items = vec![item("b", 0.0), item("c", 42.0)];

        let merged = reconcile(&[old], vec![new]);
        assert_eq!(merged[0].status, PlateStatus::Failed);
        assert!(merged[0].items[0].failed);
        assert!(!merged[0].items[1].failed);
    }

    #[test]
    fn regeneration_needed_without_stored_plates_or_on_change() {
        let bins = vec![Bin::new("a", 1, 1, 3)];
        let fp = fingerprint(&bins);
        let stored: &[Plate] = &[];
        assert!(needs_regeneration(None, None, &bins));
        assert!(needs_regeneration(Some(fp.as_str()), None, &bins));
        assert!(!needs_regeneration(Some(fp.as_str()), Some(stored), &bins));

        let moved = vec![Bin::new("a", 1, 1, 3).at(1, 0)];
        assert!(needs_regeneration(Some(fp.as_str()), Some(stored), &moved));
    }
}
