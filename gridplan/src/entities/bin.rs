use crate::geometry::geo_enums::Rotation;
use crate::geometry::primitives::{Footprint, Rect};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinStyle {
    #[default]
    Hollow,
    Solid,
}

impl Display for BinStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinStyle::Hollow => write!(f, "Hollow"),
            BinStyle::Solid => write!(f, "Solid"),
        }
    }
}

/// A storage bin positioned on a [`Grid`](crate::entities::Grid).
/// All lengths are expressed in grid cells, except `height` which is in height units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Caller-assigned identifier, unique within a grid
    pub id: String,
    pub style: BinStyle,
    /// Extent along x in the current orientation
    pub width: usize,
    /// Extent along y in the current orientation
    pub depth: usize,
    pub height: usize,
    pub x: usize,
    pub y: usize,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Bin {
    pub fn new(id: impl Into<String>, width: usize, depth: usize, height: usize) -> Self {
        Bin {
            id: id.into(),
            style: BinStyle::default(),
            width,
            depth,
            height,
            x: 0,
            y: 0,
            rotation: Rotation::Deg0,
            label: None,
        }
    }

    pub fn at(mut self, x: usize, y: usize) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_style(mut self, style: BinStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn footprint(&self) -> Footprint<usize> {
        Footprint::new(self.width, self.depth)
    }

    pub fn rect(&self) -> Rect<usize> {
        self.footprint().at(self.x, self.y)
    }

    /// The label shown to the user, falling back to a description of the bin.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{} Bin", self.style),
        }
    }
}
