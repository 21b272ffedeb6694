// Enclosure resolution: an inset sub-room sharing one of the parent room's
// walls.

use std::collections::HashMap;

use crate::dimension::parse_dimension;
use crate::domain::direction::CardinalDirection;
use crate::domain::enclosure::{EnclosureConfig, ResolvedEnclosure};
use crate::domain::wallgraph::WallSource;
use crate::error::FloorScriptError;
use crate::geometry::Rect;
use crate::resolve::wall_geometry::resolve_walls;
use crate::resolve::wall_graph::WallGroup;
use crate::units::UnitSystem;

pub struct ResolvedEnclosureBundle {
    pub enclosure: ResolvedEnclosure,
    pub wall_group: WallGroup,
}

/// Resolve one enclosure against its parent room's bounds.
pub fn resolve_enclosure(
    parent_room_id: &str,
    parent_bounds: &Rect,
    config: &EnclosureConfig,
    units: UnitSystem,
) -> Result<ResolvedEnclosureBundle, FloorScriptError> {
    let width = parse_dimension(&config.width, units)?;
    let depth = parse_dimension(&config.depth, units)?;
    let offset = parse_dimension(&config.offset, units)?;

    let facing_wall_length = if config.facing.is_horizontal() { parent_bounds.width } else { parent_bounds.height };
    if offset < -0.001 || offset + width > facing_wall_length + 0.001 {
        return Err(FloorScriptError::ExtensionOutOfBounds {
            room_id: parent_room_id.to_string(),
            sub_space_id: config.id.clone(),
            message: format!(
                "offset {offset:.4} + width {width:.4} exceeds facing wall length {facing_wall_length:.4}"
            ),
        });
    }

    let bounds = match config.facing {
        CardinalDirection::South => Rect::new(parent_bounds.x + offset, parent_bounds.y, width, depth),
        CardinalDirection::North => {
            Rect::new(parent_bounds.x + offset, parent_bounds.y + parent_bounds.height - depth, width, depth)
        }
        CardinalDirection::West => Rect::new(parent_bounds.x, parent_bounds.y + offset, depth, width),
        CardinalDirection::East => {
            Rect::new(parent_bounds.x + parent_bounds.width - depth, parent_bounds.y + offset, depth, width)
        }
    };

    let walls_config = HashMap::new();
    let walls = resolve_walls(&config.id, &bounds, &walls_config, units)?;

    Ok(ResolvedEnclosureBundle {
        enclosure: ResolvedEnclosure {
            id: config.id.clone(),
            label: config.label.clone(),
            parent_room_id: parent_room_id.to_string(),
            bounds,
            facing: config.facing,
        },
        wall_group: WallGroup {
            room_id: parent_room_id.to_string(),
            source: WallSource::Enclosure,
            sub_space_id: Some(config.id.clone()),
            walls,
            coincident_direction: Some(config.facing),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;

    #[test]
    fn south_facing_enclosure_sits_at_parent_south_edge() {
        let parent_bounds = Rect::new(0.0, 0.0, 12.0, 10.0);
        let config = EnclosureConfig {
            id: "closet".into(),
            label: "Closet".into(),
            facing: CardinalDirection::South,
            offset: Dimension::Numeric(1.0),
            width: Dimension::Numeric(3.0),
            depth: Dimension::Numeric(2.0),
        };
        let bundle = resolve_enclosure("r1", &parent_bounds, &config, UnitSystem::Imperial).unwrap();
        assert_eq!(bundle.enclosure.bounds, Rect::new(1.0, 0.0, 3.0, 2.0));
        assert_eq!(bundle.wall_group.walls.len(), 4);
    }

    #[test]
    fn enclosure_past_facing_wall_is_rejected() {
        let parent_bounds = Rect::new(0.0, 0.0, 12.0, 10.0);
        let config = EnclosureConfig {
            id: "closet".into(),
            label: "Closet".into(),
            facing: CardinalDirection::South,
            offset: Dimension::Numeric(10.0),
            width: Dimension::Numeric(5.0),
            depth: Dimension::Numeric(2.0),
        };
        let err = resolve_enclosure("r1", &parent_bounds, &config, UnitSystem::Imperial).unwrap_err();
        assert!(matches!(err, FloorScriptError::ExtensionOutOfBounds { .. }));
    }
}
