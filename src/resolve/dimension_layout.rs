// Auto-generated chain dimensions, neighbor-aware side selection.

use std::collections::HashSet;

use crate::dimension::format_dimension;
use crate::domain::dimension_line::{DimensionOrientation, ResolvedDimension};
use crate::domain::room::ResolvedRoom;
use crate::geometry::{Point, Rect};
use crate::units::UnitSystem;

/// Maximum gap between two rooms' bounds for them to still count as
/// neighbors for side-selection purposes.
const MAX_GAP: f64 = 1.0;

fn offset(units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Imperial => 2.0,
        UnitSystem::Metric => 0.6,
    }
}

/// Generate one width and one height dimension per room, flipping sides
/// away from an adjacent neighbor and deduping shared edges.
pub fn generate_dimensions(rooms: &[ResolvedRoom], units: UnitSystem) -> Vec<ResolvedDimension> {
    let mut dimensions = Vec::new();
    let mut seen: HashSet<(i64, i64, i64, u8)> = HashSet::new();
    let off = offset(units);

    for room in rooms {
        let bounds = room.bounds;

        let south_blocked = has_neighbor_to_south(rooms, room.id.as_str(), &bounds);
        let (edge_y, dim_offset) =
            if south_blocked { (bounds.max_y(), off) } else { (bounds.min_y(), -off) };
        push_dimension(
            &mut dimensions,
            &mut seen,
            DimensionOrientation::Horizontal,
            Point::new(bounds.min_x(), edge_y),
            Point::new(bounds.max_x(), edge_y),
            dim_offset,
            format_dimension(bounds.width, units),
            units,
        );

        let west_blocked = has_neighbor_to_west(rooms, room.id.as_str(), &bounds);
        let (edge_x, dim_offset) =
            if west_blocked { (bounds.max_x(), off) } else { (bounds.min_x(), -off) };
        push_dimension(
            &mut dimensions,
            &mut seen,
            DimensionOrientation::Vertical,
            Point::new(edge_x, bounds.min_y()),
            Point::new(edge_x, bounds.max_y()),
            dim_offset,
            format_dimension(bounds.height, units),
            units,
        );
    }

    dimensions
}

fn has_neighbor_to_south(rooms: &[ResolvedRoom], this_id: &str, bounds: &Rect) -> bool {
    rooms.iter().filter(|r| r.id != this_id).any(|other| {
        let gap = bounds.min_y() - other.bounds.max_y();
        gap >= -0.01 && gap <= MAX_GAP && x_overlaps(bounds, &other.bounds)
    })
}

fn has_neighbor_to_west(rooms: &[ResolvedRoom], this_id: &str, bounds: &Rect) -> bool {
    rooms.iter().filter(|r| r.id != this_id).any(|other| {
        let gap = bounds.min_x() - other.bounds.max_x();
        gap >= -0.01 && gap <= MAX_GAP && y_overlaps(bounds, &other.bounds)
    })
}

fn x_overlaps(a: &Rect, b: &Rect) -> bool {
    a.min_x() < b.max_x() + 0.01 && b.min_x() < a.max_x() + 0.01
}

fn y_overlaps(a: &Rect, b: &Rect) -> bool {
    a.min_y() < b.max_y() + 0.01 && b.min_y() < a.max_y() + 0.01
}

#[allow(clippy::too_many_arguments)]
fn push_dimension(
    dimensions: &mut Vec<ResolvedDimension>,
    seen: &mut HashSet<(i64, i64, i64, u8)>,
    orientation: DimensionOrientation,
    from: Point,
    to: Point,
    offset: f64,
    label: String,
    units: UnitSystem,
) {
    let perpendicular = match orientation {
        DimensionOrientation::Horizontal => from.y,
        DimensionOrientation::Vertical => from.x,
    };
    let start = match orientation {
        DimensionOrientation::Horizontal => from.x,
        DimensionOrientation::Vertical => from.y,
    };
    let end = match orientation {
        DimensionOrientation::Horizontal => to.x,
        DimensionOrientation::Vertical => to.y,
    };

    let key = (
        round_to_mm(start, units),
        round_to_mm(end, units),
        round_to_mm(perpendicular, units),
        orientation as u8,
    );
    if !seen.insert(key) {
        return;
    }

    dimensions.push(ResolvedDimension { from, to, offset, label, orientation });
}

/// Round a canonical-unit coordinate to the nearest millimeter, for the
/// dimension dedup key.
fn round_to_mm(value: f64, units: UnitSystem) -> i64 {
    let millimeters = match units {
        UnitSystem::Imperial => value * 304.8,
        UnitSystem::Metric => value * 1000.0,
    };
    millimeters.round() as i64
}
