//! The full production plan of a project: baseplate sections followed by packed bin plates.

use crate::entities::{Bin, Plate, PlateKind, PlateStatus, Project};
use crate::geometry::primitives::Footprint;
use crate::packing::{PackItem, pack, pack_bins};
use crate::partition::generate_baseplates;
use crate::reconcile::{Progress, fingerprint, needs_regeneration, reconcile};
use crate::util::PlanConfig;
use itertools::Itertools;
use jiff::Timestamp;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("no plate with id {0}")]
    UnknownPlate(String),
    #[error("plate {plate_id} has no item at index {index}")]
    UnknownItem { plate_id: String, index: usize },
}

/// Plates generated for a project, stamped with the fingerprint of the bins they were generated from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrintQueue {
    pub project_id: String,
    pub generated_at: Timestamp,
    pub bins_fingerprint: String,
    pub plates: Vec<Plate>,
}

impl PrintQueue {
    /// Generates all plates for `project`.
    /// When a `previous` queue is given, statuses are carried over from it (see [`reconcile`]).
    pub fn generate(project: &Project, previous: Option<&PrintQueue>, config: &PlanConfig) -> Self {
        let baseplates = generate_baseplates(project, config);
        let bin_plates = pack_bins(&project.bins, project.bed(), config);
        let plates = baseplates.into_iter().chain(bin_plates).collect_vec();

        let plates = match previous {
            Some(previous) => reconcile(&previous.plates, plates),
            None => plates,
        };

        info!(
            "[QUEUE] generated {} plates for project {} ({} bins)",
            plates.len(),
            project.id,
            project.bins.len()
        );

        PrintQueue {
            project_id: project.id.clone(),
            generated_at: Timestamp::now(),
            bins_fingerprint: fingerprint(&project.bins),
            plates,
        }
    }

    /// Whether the bins changed since this queue was generated.
    pub fn is_stale(&self, bins: &[Bin]) -> bool {
        needs_regeneration(
            Some(self.bins_fingerprint.as_str()),
            Some(self.plates.as_slice()),
            bins,
        )
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.plates)
    }

    pub fn plate(&self, id: &str) -> Option<&Plate> {
        self.plates.iter().find(|p| p.id == id)
    }

    fn plate_mut(&mut self, id: &str) -> Result<&mut Plate, QueueError> {
        self.plates
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| QueueError::UnknownPlate(id.to_string()))
    }

    pub fn set_plate_status(
        &mut self,
        plate_id: &str,
        status: PlateStatus,
    ) -> Result<(), QueueError> {
        self.plate_mut(plate_id)?.status = status;
        Ok(())
    }

    pub fn set_item_failed(
        &mut self,
        plate_id: &str,
        index: usize,
        failed: bool,
    ) -> Result<(), QueueError> {
        let item = self
            .plate_mut(plate_id)?
            .items
            .get_mut(index)
            .ok_or_else(|| QueueError::UnknownItem {
                plate_id: plate_id.to_string(),
                index,
            })?;
        item.failed = failed;
        Ok(())
    }

    /// Packs every failed bin onto new [`PlateKind::Reprint`] plates and clears the failure flags.
    /// Failed baseplate sections are not repacked, they are reprinted as a whole plate.
    /// Returns the number of plates added.
    pub fn repack_failed(&mut self, bed: Footprint<f32>) -> usize {
        let items = self
            .plates
            .iter()
            .flat_map(|p| p.failed_items())
            .filter_map(|item| {
                let source_id = item.source_id.clone()?;
                Some(PackItem {
                    source_id,
                    footprint: item.footprint(),
                    label: item.label.clone(),
                    height: item.height,
                })
            })
            .collect_vec();
        if items.is_empty() {
            return 0;
        }

        let n_existing = self
            .plates
            .iter()
            .filter(|p| p.kind == PlateKind::Reprint)
            .count();
        let reprints = pack(&items, bed)
            .into_iter()
            .enumerate()
            .map(|(i, mut plate)| {
                let n = n_existing + i + 1;
                plate.id = format!("reprint-{n}");
                plate.name = format!("Reprint Plate {n}");
                plate.kind = PlateKind::Reprint;
                plate
            })
            .collect_vec();

        self.plates
            .iter_mut()
            .flat_map(|p| p.items.iter_mut())
            .filter(|i| i.failed && i.source_id.is_some())
            .for_each(|i| i.failed = false);

        info!(
            "[QUEUE] repacked {} failed bins onto {} reprint plates",
            items.len(),
            reprints.len()
        );
        let n_added = reprints.len();
        self.plates.extend(reprints);
        n_added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: "desk".into(),
            name: "Desk drawer".into(),
            drawer_width: 300.0,
            drawer_depth: 200.0,
            bed_width: 220.0,
            bed_depth: 220.0,
            baseplate_magnets: false,
            bins: vec![
                Bin::new("a", 2, 2, 3),
                Bin::new("b", 2, 1, 3).at(2, 0),
                Bin::new("c", 1, 1, 6).at(2, 1),
            ],
        }
    }

    #[test]
    fn baseplates_come_before_bins() {
        let queue = PrintQueue::generate(&project(), None, &PlanConfig::default());
        let kinds = queue.plates.iter().map(|p| p.kind).collect_vec();
        assert_eq!(
            kinds,
            vec![PlateKind::Baseplate, PlateKind::Baseplate, PlateKind::Bins]
        );
        assert_eq!(queue.bins_fingerprint, fingerprint(&project().bins));
        assert!(!queue.is_stale(&project().bins));
    }

    #[test]
    fn regenerating_keeps_statuses() {
        let config = PlanConfig::default();
        let mut queue = PrintQueue::generate(&project(), None, &config);
        queue.set_plate_status("bins-1", PlateStatus::Complete).unwrap();
        queue.set_plate_status("baseplate-0-0", PlateStatus::InProgress).unwrap();

        let mut edited = project();
        edited.bins[2].x = 3;
        assert!(queue.is_stale(&edited.bins));

        let regenerated = PrintQueue::generate(&edited, Some(&queue), &config);
        assert!(!regenerated.is_stale(&edited.bins));
        assert_eq!(regenerated.plate("bins-1").unwrap().status, PlateStatus::Complete);
        assert_eq!(
            regenerated.plate("baseplate-0-0").unwrap().status,
            PlateStatus::InProgress
        );
    }

    #[test]
    fn unknown_targets_are_reported() {
        let mut queue = PrintQueue::generate(&project(), None, &PlanConfig::default());
        assert_eq!(
            queue.set_plate_status("nope", PlateStatus::Complete),
            Err(QueueError::UnknownPlate("nope".into()))
        );
        assert_eq!(
            queue.set_item_failed("bins-1", 10, true),
            Err(QueueError::UnknownItem {
                plate_id: "bins-1".into(),
                index: 10
            })
        );
    }

    #[test]
    fn failed_bins_are_repacked() {
        let mut queue = PrintQueue::generate(&project(), None, &PlanConfig::default());
        let bed = project().bed();
        assert_eq!(queue.repack_failed(bed), 0);

        queue.set_item_failed("bins-1", 0, true).unwrap();
        queue.set_item_failed("bins-1", 2, true).unwrap();
        queue.set_item_failed("baseplate-0-0", 0, true).unwrap();

        assert_eq!(queue.repack_failed(bed), 1);
        let reprint = queue.plates.last().unwrap();
        assert_eq!(reprint.id, "reprint-1");
        assert_eq!(reprint.kind, PlateKind::Reprint);
        assert_eq!(reprint.items.len(), 2);

        //bin failures are cleared, the baseplate one stays for the operator
        let still_failed = queue
            .plates
            .iter()
            .flat_map(|p| p.failed_items())
            .count();
        assert_eq!(still_failed, 1);

        queue.set_item_failed("bins-1", 1, true).unwrap();
        queue.repack_failed(bed);
        assert_eq!(queue.plates.last().unwrap().id, "reprint-2");
    }
}
