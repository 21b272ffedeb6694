// Opening types — doors and windows placed along a wall. Positions are
// absolute along-wall lengths, authored in the same symbolic-dimension
// grammar as everything else. Style/swing are closed enumerations — an
// unrecognized value fails config deserialization rather than flowing
// into geometry code as an unmatched string.

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::domain::direction::CardinalDirection;
use crate::geometry::{LineSegment, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningType {
    Door,
    Window,
}

/// Door leaf style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorStyle {
    Standard,
    Pocket,
    Bifold,
    Sliding,
}

impl Default for DoorStyle {
    fn default() -> Self {
        DoorStyle::Standard
    }
}

/// Door swing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorSwing {
    InwardRight,
    InwardLeft,
    OutwardRight,
    OutwardLeft,
}

/// An opening as authored in the config: either an absolute `position`
/// along the wall, or an anchor (`from`) plus `offset`, resolved via
/// `resolve_from_offset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningConfig {
    #[serde(rename = "type")]
    pub opening_type: OpeningType,
    #[serde(default)]
    pub position: Option<Dimension>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub offset: Option<Dimension>,
    pub width: Dimension,
    #[serde(default)]
    pub style: Option<DoorStyle>,
    #[serde(default)]
    pub swing: Option<DoorSwing>,
}

/// A fully resolved opening, placed on a specific wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedOpening {
    pub opening_type: OpeningType,
    /// Center point, on the wall's centerline.
    pub position: Point,
    pub width: f64,
    pub wall_direction: CardinalDirection,
    pub wall_thickness: f64,
    pub style: Option<DoorStyle>,
    pub swing: Option<DoorSwing>,
    /// Span endpoints along the wall's long axis, on the outer face.
    pub gap_start: Point,
    pub gap_end: Point,
    /// Segment through the wall thickness at the opening's mid-span.
    pub centerline: LineSegment,
}

impl ResolvedOpening {
    /// Whether this opening's along-axis span overlaps `other`'s by more
    /// than `tolerance`. `axis_is_x` selects whether the wall's long axis
    /// is x (horizontal wall) or y (vertical wall).
    pub fn spans_overlap(&self, other: &ResolvedOpening, axis_is_x: bool, tolerance: f64) -> bool {
        let (a_start, a_end) = self.span_on_axis(axis_is_x);
        let (b_start, b_end) = other.span_on_axis(axis_is_x);
        a_start < b_end - tolerance && b_start < a_end - tolerance
    }

    fn span_on_axis(&self, axis_is_x: bool) -> (f64, f64) {
        if axis_is_x {
            let a = self.gap_start.x.min(self.gap_end.x);
            let b = self.gap_start.x.max(self.gap_end.x);
            (a, b)
        } else {
            let a = self.gap_start.y.min(self.gap_end.y);
            let b = self.gap_start.y.max(self.gap_end.y);
            (a, b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening(gap_start_x: f64, gap_end_x: f64) -> ResolvedOpening {
        ResolvedOpening {
            opening_type: OpeningType::Window,
            position: Point::new((gap_start_x + gap_end_x) / 2.0, 0.0),
            width: gap_end_x - gap_start_x,
            wall_direction: CardinalDirection::South,
            wall_thickness: 0.5,
            style: None,
            swing: None,
            gap_start: Point::new(gap_start_x, 0.0),
            gap_end: Point::new(gap_end_x, 0.0),
            centerline: LineSegment::new(Point::new(0.0, 0.0), Point::new(0.0, 0.5)),
        }
    }

    #[test]
    fn overlapping_openings_on_x_axis_detected() {
        let a = opening(0.5, 3.5);
        let b = opening(3.0, 5.0);
        assert!(a.spans_overlap(&b, true, 0.001));
    }

    #[test]
    fn adjoining_openings_do_not_overlap() {
        let a = opening(0.5, 3.5);
        let b = opening(3.5, 5.0);
        assert!(!a.spans_overlap(&b, true, 0.001));
    }
}
