// Extensions — outward projections off a parent room's wall, creating a gap
// in that wall.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::domain::direction::CardinalDirection;
use crate::domain::room::WallConfig;
use crate::geometry::Rect;

/// An extension as authored in the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionConfig {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "parentWall")]
    pub parent_wall: CardinalDirection,
    /// Along the parent wall.
    pub width: Dimension,
    /// Outward from the parent wall.
    pub depth: Dimension,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub offset: Option<Dimension>,
    #[serde(default)]
    pub walls: HashMap<CardinalDirection, WallConfig>,
}

/// The span of a parent wall to remove because an extension attaches there.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WallGap {
    pub gap_start: f64,
    pub gap_end: f64,
}

/// A fully resolved extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedExtension {
    pub id: String,
    pub label: String,
    pub parent_room_id: String,
    pub parent_wall: CardinalDirection,
    /// Bounds outside the parent room.
    pub bounds: Rect,
}
