use crate::geometry::geo_enums::Rotation;
use crate::geometry::primitives::{Footprint, Rect};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What a [`Plate`] was generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateKind {
    /// A section of a partitioned baseplate
    Baseplate,
    /// A packed collection of bins
    Bins,
    /// Bins that failed on an earlier plate, packed again
    Reprint,
}

impl Display for PlateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlateKind::Baseplate => write!(f, "baseplate"),
            PlateKind::Bins => write!(f, "bins"),
            PlateKind::Reprint => write!(f, "reprint"),
        }
    }
}

/// Production status of a plate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlateStatus {
    #[default]
    NotStarted,
    InProgress,
    Complete,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateWarning {
    /// The single item on this plate exceeds the fabrication bed in both orientations
    Oversized,
}

impl Display for PlateWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlateWarning::Oversized => write!(f, "this bin exceeds the printer bed dimensions"),
        }
    }
}

/// Grid dimensions of a baseplate section, kept for labelling downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseplateSpec {
    pub grid_width: usize,
    pub grid_depth: usize,
    pub magnets: bool,
}

/// An item positioned on a [`Plate`], in mm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlateItem {
    /// Id of the bin this item was generated from, `None` for baseplate sections
    pub source_id: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub depth: f32,
    pub rotation: Rotation,
    pub label: String,
    /// Physical height, zero for baseplate sections
    pub height: f32,
    /// Marked by the operator when this item did not come out right
    #[serde(default)]
    pub failed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseplate: Option<BaseplateSpec>,
}

impl PlateItem {
    pub fn rect(&self) -> Rect<f32> {
        Rect::new(self.x, self.y, self.width, self.depth)
    }

    pub fn footprint(&self) -> Footprint<f32> {
        Footprint::new(self.width, self.depth)
    }
}

/// A bounded production unit: one fabrication job holding zero or more items.
///
/// Geometry is fixed once generated, only `status` and the `failed` flags of its items change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    pub id: String,
    pub name: String,
    pub kind: PlateKind,
    pub width: f32,
    pub depth: f32,
    #[serde(default)]
    pub status: PlateStatus,
    pub items: Vec<PlateItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<PlateWarning>,
}

impl Plate {
    pub fn new(id: String, name: String, kind: PlateKind, bounds: Footprint<f32>) -> Self {
        Plate {
            id,
            name,
            kind,
            width: bounds.width,
            depth: bounds.depth,
            status: PlateStatus::NotStarted,
            items: vec![],
            warning: None,
        }
    }

    pub fn bounds(&self) -> Footprint<f32> {
        Footprint::new(self.width, self.depth)
    }

    /// Auxiliary plates are not regenerated from the layout and never inherit a status.
    pub fn is_auxiliary(&self) -> bool {
        self.kind == PlateKind::Reprint || self.warning.is_some()
    }

    pub fn item_area(&self) -> f32 {
        self.items.iter().map(|i| i.width * i.depth).sum()
    }

    /// Fraction of the plate covered by items
    pub fn density(&self) -> f32 {
        self.item_area() / self.bounds().area()
    }

    pub fn failed_items(&self) -> impl Iterator<Item = &PlateItem> {
        self.items.iter().filter(|i| i.failed)
    }
}
