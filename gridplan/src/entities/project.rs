use crate::entities::Bin;
use crate::geometry::primitives::Footprint;
use serde::{Deserialize, Serialize};

/// A drawer layout as stored by the caller: drawer and printer bed dimensions (in mm) plus the placed bins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub drawer_width: f32,
    pub drawer_depth: f32,
    pub bed_width: f32,
    pub bed_depth: f32,
    /// Whether baseplates get magnet pockets
    #[serde(default)]
    pub baseplate_magnets: bool,
    #[serde(default)]
    pub bins: Vec<Bin>,
}

impl Project {
    pub fn drawer(&self) -> Footprint<f32> {
        Footprint::new(self.drawer_width, self.drawer_depth)
    }

    pub fn bed(&self) -> Footprint<f32> {
        Footprint::new(self.bed_width, self.bed_depth)
    }
}
