// Shared `"{roomId}.{direction}"` wall-reference resolution used by the
// electrical and plumbing resolvers.

use crate::domain::direction::CardinalDirection;
use crate::domain::wallgraph::{split_wall_ref, PlanWall, WallGraph};
use crate::error::FloorScriptError;
use crate::geometry::Point;

/// Look up a wall by its `"{roomId}.{dir}"` reference, translating lookup
/// failures into the taxonomy's dedicated variants.
pub fn find_wall_by_id<'a>(graph: &'a WallGraph, reference: &str) -> Result<&'a PlanWall, FloorScriptError> {
    let (room_id, direction_str) = split_wall_ref(reference).ok_or_else(|| FloorScriptError::MalformedWallRef {
        reference: reference.to_string(),
    })?;

    let direction = CardinalDirection::from_str(direction_str).ok_or_else(|| FloorScriptError::InvalidWallDirection {
        reference: reference.to_string(),
        direction: direction_str.to_string(),
    })?;

    if !graph.by_room.contains_key(room_id) {
        return Err(FloorScriptError::UnknownRoom { room_id: room_id.to_string() });
    }

    graph.find_by_room(room_id, direction).ok_or_else(|| FloorScriptError::WallNotOnRoom {
        room_id: room_id.to_string(),
        direction: direction_str.to_string(),
    })
}

/// Position on the wall's centerline at `along_wall` distance from the
/// wall's interior start: `rect.origin + interiorStartOffset + alongWall`
/// along the long axis, `thickness/2` along the perpendicular.
pub fn position_on_centerline(wall: &PlanWall, along_wall: f64) -> Point {
    let along = along_axis_origin(wall) + wall.interior_start_offset + along_wall;
    let perp = perpendicular_origin(wall) + wall.composition.total_thickness / 2.0;
    to_point(wall.direction, along, perp)
}

/// A point `offset` into the room from this wall's inner face.
pub fn position_from_inner_face(wall: &PlanWall, along_wall: f64, offset: f64) -> Point {
    let along = along_axis_origin(wall) + along_wall;
    let perp = match wall.direction {
        CardinalDirection::South => wall.inner_edge + offset,
        CardinalDirection::North => wall.inner_edge - offset,
        CardinalDirection::West => wall.inner_edge + offset,
        CardinalDirection::East => wall.inner_edge - offset,
    };
    to_point(wall.direction, along, perp)
}

fn along_axis_origin(wall: &PlanWall) -> f64 {
    if wall.direction.is_horizontal() {
        wall.rect.x
    } else {
        wall.rect.y
    }
}

fn perpendicular_origin(wall: &PlanWall) -> f64 {
    wall.outer_edge
}

fn to_point(direction: CardinalDirection, along: f64, perp: f64) -> Point {
    if direction.is_horizontal() {
        Point::new(along, perp)
    } else {
        Point::new(perp, along)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::direction::WallType;
    use crate::domain::wallgraph::{PlanWall, WallComposition, WallSource};
    use crate::geometry::Rect;

    fn south_wall() -> PlanWall {
        PlanWall {
            room_id: "kitchen".into(),
            direction: CardinalDirection::South,
            room_id_b: None,
            direction_in_b: None,
            composition: WallComposition {
                stud: "2x4",
                stud_width_ft: 0.2917,
                finish_a: 0.0417,
                finish_b: 0.0417,
                total_thickness: 0.375,
            },
            source: WallSource::Room,
            sub_space_id: None,
            shared: false,
            wall_type: WallType::Interior,
            line_weight: 0.5,
            rect: Rect::new(-0.375, -0.375, 12.75, 0.375),
            outer_edge: -0.375,
            inner_edge: 0.0,
            interior_start_offset: 0.375,
            openings: Vec::new(),
            segments: Vec::new(),
        }
    }

    #[test]
    fn centerline_position_sits_at_wall_midline() {
        let wall = south_wall();
        let point = position_on_centerline(&wall, 3.0);
        assert!((point.x - 3.0).abs() < 1e-9);
        assert!((point.y - (wall.outer_edge + wall.composition.total_thickness / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn malformed_reference_is_rejected() {
        let graph = WallGraph::new();
        let err = find_wall_by_id(&graph, "noDirection").unwrap_err();
        assert!(matches!(err, FloorScriptError::MalformedWallRef { .. }));
    }
}
