//! Splitting a drawer-sized baseplate into bed-sized, grid-aligned sections.

use crate::entities::{BaseplateSpec, Plate, PlateItem, PlateKind, Project};
use crate::geometry::geo_enums::Rotation;
use crate::geometry::primitives::Footprint;
use crate::util::{FPA, PlanConfig};
use log::{debug, info, warn};

/// Splits `area` into a row-major grid of sections no larger than `bed`.
///
/// Sections along the far edges take whatever remains of `area`. Both extents of every section are
/// snapped down to a multiple of `unit`; sections that snap to zero cells in either direction cannot be
/// fabricated and are dropped. Each surviving section becomes a [`PlateKind::Baseplate`] plate holding a
/// single item spanning the whole plate.
pub fn partition(area: Footprint<f32>, bed: Footprint<f32>, unit: f32) -> Vec<Plate> {
    let bed_holds_a_unit = bed.width > 0.0
        && bed.depth > 0.0
        && unit > 0.0
        && FPA(bed.width / unit).tolerant_floor() >= 1.0
        && FPA(bed.depth / unit).tolerant_floor() >= 1.0;
    if !bed_holds_a_unit {
        warn!(
            "[PARTITION] cannot partition with a {}×{} bed and a unit of {unit}",
            bed.width, bed.depth
        );
        return vec![];
    }
    let (cols, rows) = grid_dims(area, bed);

    let mut plates = vec![];
    for row in 0..rows {
        for col in 0..cols {
            let raw_width = bed.width.min(area.width - col as f32 * bed.width);
            let raw_depth = bed.depth.min(area.depth - row as f32 * bed.depth);

            let grid_width = FPA(raw_width / unit).tolerant_floor() as usize;
            let grid_depth = FPA(raw_depth / unit).tolerant_floor() as usize;
            if grid_width == 0 || grid_depth == 0 {
                debug!(
                    "[PARTITION] section ({row}, {col}) of {raw_width}×{raw_depth} is smaller than a single unit, dropped"
                );
                continue;
            }
            let section = Footprint::new(grid_width as f32 * unit, grid_depth as f32 * unit);

            let mut plate = Plate::new(
                format!("baseplate-{row}-{col}"),
                format!("Baseplate {}", plates.len() + 1),
                PlateKind::Baseplate,
                section,
            );
            plate.items.push(PlateItem {
                source_id: None,
                x: 0.0,
                y: 0.0,
                width: section.width,
                depth: section.depth,
                rotation: Rotation::Deg0,
                label: format!(
                    "{grid_width}×{grid_depth} units ({}×{}mm)",
                    section.width, section.depth
                ),
                height: 0.0,
                failed: false,
                baseplate: Some(BaseplateSpec {
                    grid_width,
                    grid_depth,
                    magnets: false,
                }),
            });
            plates.push(plate);
        }
    }

    info!(
        "[PARTITION] {}×{} area split into {} sections ({cols}×{rows} grid)",
        area.width,
        area.depth,
        plates.len()
    );
    plates
}

/// Number of sections before snapping, i.e. an upper bound on what [`partition`] returns.
pub fn section_count(area: Footprint<f32>, bed: Footprint<f32>) -> usize {
    let (cols, rows) = grid_dims(area, bed);
    cols * rows
}

/// Baseplate sections covering the drawer of `project`.
pub fn generate_baseplates(project: &Project, config: &PlanConfig) -> Vec<Plate> {
    let mut plates = partition(project.drawer(), project.bed(), config.grid_unit);
    plates
        .iter_mut()
        .flat_map(|p| p.items.iter_mut())
        .filter_map(|item| item.baseplate.as_mut())
        .for_each(|spec| spec.magnets = project.baseplate_magnets);
    plates
}

fn grid_dims(area: Footprint<f32>, bed: Footprint<f32>) -> (usize, usize) {
    if !(bed.width > 0.0 && bed.depth > 0.0) {
        return (0, 0);
    }
    let n = |length: f32, bed_length: f32| (length / bed_length).ceil().max(0.0) as usize;
    (n(area.width, bed.width), n(area.depth, bed.depth))
}
