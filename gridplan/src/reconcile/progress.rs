use crate::entities::{Plate, PlateItem, PlateStatus};
use serde::{Deserialize, Serialize};

/// Production progress over a set of plates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
    /// Share of completed plates, rounded to a whole percent
    pub percentage: u32,
}

impl Progress {
    pub fn of(plates: &[Plate]) -> Self {
        let total = plates.len();
        let count = |status| plates.iter().filter(|p| p.status == status).count();
        let completed = count(PlateStatus::Complete);
        let percentage = match total {
            0 => 0,
            _ => (completed as f64 / total as f64 * 100.0).round() as u32,
        };
        Progress {
            total,
            completed,
            failed: count(PlateStatus::Failed),
            percentage,
        }
    }
}

/// Every item marked as failed, together with the plate it is on.
pub fn failed_items(plates: &[Plate]) -> impl Iterator<Item = (&Plate, &PlateItem)> {
    plates
        .iter()
        .flat_map(|p| p.failed_items().map(move |i| (p, i)))
}

pub fn has_failed_items(plates: &[Plate]) -> bool {
    failed_items(plates).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PlateKind;
    use crate::geometry::geo_enums::Rotation;
    use crate::geometry::primitives::Footprint;
    use crate::packing::PackItem;

    fn plate(id: &str, status: PlateStatus) -> Plate {
        let mut p = Plate::new(
            id.into(),
            id.into(),
            PlateKind::Bins,
            Footprint::new(220.0, 220.0),
        );
        p.status = status;
        let item = PackItem::new(format!("{id}-item"), 42.0, 42.0);
        p.items.push(item.placed_at(0.0, 0.0, Rotation::Deg0));
        p
    }

    #[test]
    fn empty_progress() {
        assert_eq!(Progress::of(&[]), Progress::default());
    }

    #[test]
    fn progress_counts_statuses() {
        let plates = vec![
            plate("a", PlateStatus::Complete),
            plate("b", PlateStatus::Complete),
            plate("c", PlateStatus::Failed),
            plate("d", PlateStatus::InProgress),
            plate("e", PlateStatus::NotStarted),
            plate("f", PlateStatus::NotStarted),
        ];
        let progress = Progress::of(&plates);
        assert_eq!(
            progress,
            Progress {
                total: 6,
                completed: 2,
                failed: 1,
                percentage: 33
            }
        );
    }

    #[test]
    fn failed_items_are_listed_with_their_plate() {
        let mut plates = vec![plate("a", PlateStatus::Complete), plate("b", PlateStatus::Complete)];
        assert!(!has_failed_items(&plates));
        plates[1].items[0].failed = true;
        let failed: Vec<_> = failed_items(&plates)
            .map(|(p, i)| (p.id.as_str(), i.source_id.as_deref()))
            .collect();
        assert_eq!(failed, vec![("b", Some("b-item"))]);
        assert!(has_failed_items(&plates));
    }
}
