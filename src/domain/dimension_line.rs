// Auto-generated dimension lines.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionOrientation {
    Horizontal,
    Vertical,
}

/// A resolved chain dimension covering one edge of a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedDimension {
    pub from: Point,
    pub to: Point,
    /// Signed; sign indicates which side of the plan the leader line sits.
    pub offset: f64,
    pub label: String,
    pub orientation: DimensionOrientation,
}
