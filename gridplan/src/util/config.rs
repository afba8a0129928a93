use serde::{Deserialize, Serialize};

/// Physical scale of the placement lattice.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlanConfig {
    /// Side of one square grid cell, in mm
    pub grid_unit: f32,
    /// Height of one bin height unit, in mm
    pub height_unit: f32,
}

impl PlanConfig {
    pub const GRIDFINITY: PlanConfig = PlanConfig {
        grid_unit: 42.0,
        height_unit: 7.0,
    };
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self::GRIDFINITY
    }
}
