// Extension resolution: a sub-room projecting outward from one of a
// parent room's walls.

use std::collections::HashMap;

use crate::dimension::parse_dimension;
use crate::domain::direction::CardinalDirection;
use crate::domain::extension::{ExtensionConfig, ResolvedExtension, WallGap};
use crate::domain::wallgraph::WallSource;
use crate::error::FloorScriptError;
use crate::geometry::Rect;
use crate::resolve::opening_resolver::resolve_from_offset;
use crate::resolve::wall_geometry::resolve_walls;
use crate::resolve::wall_graph::WallGroup;
use crate::units::UnitSystem;

/// The extension's own exterior wall thickness (6.5 in = 0.5417 ft
/// imperial, comparable metric), used for the far wall's corner extension
/// regardless of the interior-composition thickness elsewhere.
fn extension_exterior_thickness(units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Imperial => 6.5 / 12.0,
        UnitSystem::Metric => 0.15,
    }
}

pub struct ResolvedExtensionBundle {
    pub extension: ResolvedExtension,
    pub wall_group: WallGroup,
    pub gap: WallGap,
}

/// Resolve one extension against its parent room's bounds.
pub fn resolve_extension(
    parent_room_id: &str,
    parent_bounds: &Rect,
    config: &ExtensionConfig,
    units: UnitSystem,
) -> Result<ResolvedExtensionBundle, FloorScriptError> {
    let width = parse_dimension(&config.width, units)?;
    let depth = parse_dimension(&config.depth, units)?;

    let parent_wall_length = if config.parent_wall.is_horizontal() { parent_bounds.width } else { parent_bounds.height };

    let offset = match &config.offset {
        Some(offset) => parse_dimension(offset, units)?,
        None => 0.0,
    };
    let from = config.from.as_deref().unwrap_or("start");
    let pos_along_wall = resolve_from_offset(from, offset, parent_wall_length, width, &HashMap::new())?;

    if pos_along_wall < -0.001 || pos_along_wall + width > parent_wall_length + 0.001 {
        return Err(FloorScriptError::ExtensionOutOfBounds {
            room_id: parent_room_id.to_string(),
            sub_space_id: config.id.clone(),
            message: format!(
                "posAlongWall {pos_along_wall:.4} + width {width:.4} exceeds parent wall length {parent_wall_length:.4}"
            ),
        });
    }

    let bounds = match config.parent_wall {
        CardinalDirection::North => {
            Rect::new(parent_bounds.x + pos_along_wall, parent_bounds.y + parent_bounds.height, width, depth)
        }
        CardinalDirection::South => {
            Rect::new(parent_bounds.x + pos_along_wall, parent_bounds.y - depth, width, depth)
        }
        CardinalDirection::East => {
            Rect::new(parent_bounds.x + parent_bounds.width, parent_bounds.y + pos_along_wall, depth, width)
        }
        CardinalDirection::West => {
            Rect::new(parent_bounds.x - depth, parent_bounds.y + pos_along_wall, depth, width)
        }
    };

    let axis_origin = if config.parent_wall.is_horizontal() { parent_bounds.x } else { parent_bounds.y };
    let gap = WallGap {
        gap_start: axis_origin + pos_along_wall,
        gap_end: axis_origin + pos_along_wall + width,
    };

    // Reuse the room wall-geometry algorithm for the extension's own box,
    // using its exterior thickness on every side, then keep only the three
    // directions that are actually closed — the direction opposite the
    // parent wall is the open side connecting back into the parent room.
    let exterior = extension_exterior_thickness(units);
    let mut walls_config = HashMap::new();
    for direction in CardinalDirection::ORDER {
        walls_config.insert(
            direction,
            crate::domain::room::WallConfig {
                wall_type: Some(crate::domain::direction::WallType::Exterior),
                thickness: Some(crate::dimension::Dimension::Numeric(exterior)),
                openings: Vec::new(),
            },
        );
    }
    let open_direction = config.parent_wall.opposite();
    let all_walls = resolve_walls(&config.id, &bounds, &walls_config, units)?;
    let mut closed_walls: Vec<_> = all_walls.into_iter().filter(|(w, _)| w.direction != open_direction).collect();

    for direction in CardinalDirection::ORDER {
        if direction == open_direction {
            continue;
        }
        if let Some(wall_config) = config.walls.get(&direction) {
            if let Some((wall, _)) = closed_walls.iter_mut().find(|(w, _)| w.direction == direction) {
                let interior_length = wall.interior_length(&bounds);
                wall.openings = crate::resolve::opening_resolver::resolve_wall_openings(
                    &wall_config.openings,
                    wall,
                    interior_length,
                    units,
                )?;
            }
        }
    }

    let label = config.label.clone().unwrap_or_else(|| config.id.clone());

    Ok(ResolvedExtensionBundle {
        extension: ResolvedExtension {
            id: config.id.clone(),
            label,
            parent_room_id: parent_room_id.to_string(),
            parent_wall: config.parent_wall,
            bounds,
        },
        wall_group: WallGroup {
            room_id: parent_room_id.to_string(),
            source: WallSource::Extension,
            sub_space_id: Some(config.id.clone()),
            walls: closed_walls,
            coincident_direction: None,
        },
        gap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;

    #[test]
    fn south_extension_sits_below_parent() {
        let parent_bounds = Rect::new(0.0, 0.0, 12.0, 10.0);
        let config = ExtensionConfig {
            id: "bump".into(),
            label: None,
            parent_wall: CardinalDirection::South,
            width: Dimension::Numeric(4.0),
            depth: Dimension::Numeric(2.0),
            from: Some("start".into()),
            offset: Some(Dimension::Numeric(2.0)),
            walls: HashMap::new(),
        };
        let bundle = resolve_extension("r1", &parent_bounds, &config, UnitSystem::Imperial).unwrap();
        assert_eq!(bundle.extension.bounds, Rect::new(2.0, -2.0, 4.0, 2.0));
        assert!((bundle.gap.gap_start - 2.0).abs() < 1e-9);
        assert!((bundle.gap.gap_end - 6.0).abs() < 1e-9);
        // North wall (facing the parent room) is the open side.
        assert!(bundle.wall_group.walls.iter().all(|(w, _)| w.direction != CardinalDirection::North));
        assert_eq!(bundle.wall_group.walls.len(), 3);
    }

    #[test]
    fn out_of_bounds_extension_is_rejected() {
        let parent_bounds = Rect::new(0.0, 0.0, 12.0, 10.0);
        let config = ExtensionConfig {
            id: "bump".into(),
            label: None,
            parent_wall: CardinalDirection::South,
            width: Dimension::Numeric(10.0),
            depth: Dimension::Numeric(2.0),
            from: Some("start".into()),
            offset: Some(Dimension::Numeric(5.0)),
            walls: HashMap::new(),
        };
        let err = resolve_extension("r1", &parent_bounds, &config, UnitSystem::Imperial).unwrap_err();
        assert!(matches!(err, FloorScriptError::ExtensionOutOfBounds { .. }));
    }
}
