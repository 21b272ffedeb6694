// Opening placement on a single wall.

use std::collections::HashMap;

use crate::dimension::parse_dimension;
use crate::domain::direction::CardinalDirection;
use crate::domain::opening::{OpeningConfig, ResolvedOpening};
use crate::domain::room::ResolvedWall;
use crate::error::FloorScriptError;
use crate::geometry::{LineSegment, Point};
use crate::units::UnitSystem;

/// Map a symbolic anchor (`"center"`, `"start"`, `"end"`, or another
/// element's id) plus an offset to an along-wall start position. `anchors`
/// maps an id to that element's along-wall *center* position, for
/// anchoring one opening off another.
pub fn resolve_from_offset(
    from: &str,
    offset: f64,
    wall_length: f64,
    element_width: f64,
    anchors: &HashMap<String, f64>,
) -> Result<f64, FloorScriptError> {
    match from {
        "start" => Ok(offset),
        "end" => Ok(wall_length - element_width - offset),
        "center" => Ok((wall_length - element_width) / 2.0 + offset),
        other => {
            let anchor_center = anchors.get(other).copied().ok_or_else(|| FloorScriptError::Schema {
                issues: vec![crate::error::SchemaIssue::new(
                    "openings[].from",
                    format!("unknown anchor {other:?}"),
                )],
            })?;
            Ok(anchor_center - element_width / 2.0 + offset)
        }
    }
}

/// Resolve one opening against an already-geometry-resolved wall.
pub fn resolve_opening(
    config: &OpeningConfig,
    wall: &ResolvedWall,
    interior_length: f64,
    units: UnitSystem,
    anchors: &HashMap<String, f64>,
) -> Result<ResolvedOpening, FloorScriptError> {
    let width = parse_dimension(&config.width, units)?;

    let position = match (&config.position, &config.from) {
        (Some(position), _) => parse_dimension(position, units)?,
        (None, Some(from)) => {
            let offset = match &config.offset {
                Some(offset) => parse_dimension(offset, units)?,
                None => 0.0,
            };
            resolve_from_offset(from, offset, interior_length, width, anchors)?
        }
        (None, None) => {
            return Err(FloorScriptError::Schema {
                issues: vec![crate::error::SchemaIssue::new(
                    "openings[]",
                    "must specify either `position` or `from`",
                )],
            })
        }
    };

    // Horizontal walls keep openings anchored to the room interior, not the
    // corner-extended rect.
    let effective_position =
        if wall.direction.is_horizontal() { wall.interior_start_offset + position } else { position };

    let axis_origin = if wall.direction.is_horizontal() { wall.rect.x } else { wall.rect.y };
    let gap_start_along = axis_origin + effective_position;
    let gap_end_along = gap_start_along + width;
    let mid_along = gap_start_along + width / 2.0;
    let center_perp = (wall.outer_edge + wall.inner_edge) / 2.0;

    let to_point = |along: f64, perp: f64| -> Point {
        if wall.direction.is_horizontal() {
            Point::new(along, perp)
        } else {
            Point::new(perp, along)
        }
    };

    Ok(ResolvedOpening {
        opening_type: config.opening_type,
        position: to_point(mid_along, center_perp),
        width,
        wall_direction: wall.direction,
        wall_thickness: wall.thickness,
        style: config.style,
        swing: config.swing,
        gap_start: to_point(gap_start_along, wall.outer_edge),
        gap_end: to_point(gap_end_along, wall.outer_edge),
        centerline: LineSegment::new(to_point(mid_along, wall.outer_edge), to_point(mid_along, wall.inner_edge)),
    })
}

/// Resolve every opening on a wall, in config order.
pub fn resolve_wall_openings(
    configs: &[OpeningConfig],
    wall: &ResolvedWall,
    interior_length: f64,
    units: UnitSystem,
) -> Result<Vec<ResolvedOpening>, FloorScriptError> {
    let anchors = HashMap::new();
    configs.iter().map(|config| resolve_opening(config, wall, interior_length, units, &anchors)).collect()
}
