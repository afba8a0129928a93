use crate::entities::{Bin, PlateItem};
use crate::geometry::geo_enums::Rotation;
use crate::geometry::primitives::Footprint;
use crate::util::PlanConfig;

/// A rectangle waiting to be packed, in mm.
#[derive(Clone, Debug, PartialEq)]
pub struct PackItem {
    pub source_id: String,
    pub footprint: Footprint<f32>,
    pub label: String,
    pub height: f32,
}

impl PackItem {
    pub fn new(source_id: impl Into<String>, width: f32, depth: f32) -> Self {
        let source_id = source_id.into();
        PackItem {
            label: source_id.clone(),
            source_id,
            footprint: Footprint::new(width, depth),
            height: 0.0,
        }
    }

    /// Converts a bin from grid units to its physical size.
    pub fn from_bin(bin: &Bin, config: &PlanConfig) -> Self {
        PackItem {
            source_id: bin.id.clone(),
            footprint: Footprint::new(
                bin.width as f32 * config.grid_unit,
                bin.depth as f32 * config.grid_unit,
            ),
            label: bin.display_label(),
            height: bin.height as f32 * config.height_unit,
        }
    }

    pub fn footprint_in(&self, rotation: Rotation) -> Footprint<f32> {
        match rotation {
            Rotation::Deg0 => self.footprint,
            Rotation::Deg90 => self.footprint.rotated(),
        }
    }

    pub fn placed_at(&self, x: f32, y: f32, rotation: Rotation) -> PlateItem {
        let footprint = self.footprint_in(rotation);
        PlateItem {
            source_id: Some(self.source_id.clone()),
            x,
            y,
            width: footprint.width,
            depth: footprint.depth,
            rotation,
            label: self.label.clone(),
            height: self.height,
            failed: false,
            baseplate: None,
        }
    }
}
