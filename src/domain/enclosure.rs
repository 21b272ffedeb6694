// Enclosures — inset sub-rooms sharing one of the parent room's walls.

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::domain::direction::CardinalDirection;
use crate::geometry::Rect;

/// An enclosure as authored in the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnclosureConfig {
    pub id: String,
    pub label: String,
    pub facing: CardinalDirection,
    /// From the start of the facing wall.
    pub offset: Dimension,
    pub width: Dimension,
    pub depth: Dimension,
}

/// A fully resolved enclosure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedEnclosure {
    pub id: String,
    pub label: String,
    pub parent_room_id: String,
    /// Bounds inside the parent room.
    pub bounds: Rect,
    /// The parent-room wall that doubles as one enclosure wall.
    pub facing: CardinalDirection,
}
