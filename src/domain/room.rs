// Rooms and their per-direction walls. `RoomConfig` is what the author
// writes; `ResolvedRoom`/`ResolvedWall` are what the layout orchestrator
// produces. A room is always an axis-aligned box: position, width, height.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::domain::direction::{CardinalDirection, WallType};
use crate::domain::enclosure::{EnclosureConfig, ResolvedEnclosure};
use crate::domain::extension::{ExtensionConfig, ResolvedExtension};
use crate::domain::opening::{OpeningConfig, ResolvedOpening};
use crate::geometry::{Point, Rect};

/// A wall as authored in the config: present only for the directions the
/// author overrides, defaulting to `interior` type with no openings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WallConfig {
    #[serde(rename = "type", default)]
    pub wall_type: Option<WallType>,
    #[serde(default)]
    pub thickness: Option<Dimension>,
    #[serde(default)]
    pub openings: Vec<OpeningConfig>,
}

/// A room as authored in the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    pub id: String,
    pub label: String,
    pub position: [Dimension; 2],
    pub width: Dimension,
    pub height: Dimension,
    #[serde(default)]
    pub walls: HashMap<CardinalDirection, WallConfig>,
    #[serde(default)]
    pub extensions: Vec<ExtensionConfig>,
    #[serde(default)]
    pub enclosures: Vec<EnclosureConfig>,
}

/// A fully resolved wall on one side of a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedWall {
    /// `"{roomId}.{direction}"`.
    pub id: String,
    pub direction: CardinalDirection,
    pub wall_type: WallType,
    pub thickness: f64,
    pub line_weight: f64,
    /// The wall's material rectangle, outside the room bounds.
    pub rect: Rect,
    /// Coordinate of the outer face, along the perpendicular axis.
    pub outer_edge: f64,
    /// Coordinate of the inner face, along the perpendicular axis.
    pub inner_edge: f64,
    /// How far along `rect`'s long axis the room interior begins.
    pub interior_start_offset: f64,
    pub openings: Vec<ResolvedOpening>,
    /// Slice-after-opening (and, for parent walls, after-extension-gap)
    /// rectangles, populated by the segment slicer.
    pub segments: Vec<Rect>,
}

impl ResolvedWall {
    /// The interior length this wall bounds: `bounds.width` for north/south,
    /// `bounds.height` for east/west.
    pub fn interior_length(&self, bounds: &Rect) -> f64 {
        if self.direction.is_horizontal() {
            bounds.width
        } else {
            bounds.height
        }
    }
}

/// A fully resolved room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedRoom {
    pub id: String,
    pub label: String,
    /// Interior clear space, sheetrock-to-sheetrock.
    pub bounds: Rect,
    pub label_position: Point,
    /// Always four entries, in `CardinalDirection::ORDER`.
    pub walls: Vec<ResolvedWall>,
    pub extensions: Vec<ResolvedExtension>,
    pub enclosures: Vec<ResolvedEnclosure>,
}

impl ResolvedRoom {
    pub fn wall(&self, direction: CardinalDirection) -> Option<&ResolvedWall> {
        self.walls.iter().find(|w| w.direction == direction)
    }
}
