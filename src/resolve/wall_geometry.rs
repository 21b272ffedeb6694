// Per-room wall geometry. Thickness for all four directions is computed
// before any wall rect is emitted, since horizontal walls extend over the
// corners by the perpendicular walls' thickness.

use std::collections::HashMap;

use crate::domain::direction::CardinalDirection;
use crate::domain::room::{ResolvedWall, WallConfig};
use crate::domain::wallgraph::WallComposition;
use crate::error::FloorScriptError;
use crate::geometry::Rect;
use crate::resolve::wall_graph::resolve_wall_composition;
use crate::units::UnitSystem;

/// Resolve the four walls of a rectangular bounds (a room, or an
/// extension's own box), keyed by `"{id_prefix}.{dir}"`.
///
/// Geometry table for `bounds = {x, y, w, h}` and per-direction thickness
/// `t`, with `wT`/`eT` the west/east thicknesses:
///
/// | south | `{x-wT, y-t, w+wT+eT, t}` |
/// | north | `{x-wT, y+h, w+wT+eT, t}` |
/// | west  | `{x-t, y, t, h}`          |
/// | east  | `{x+w, y, t, h}`          |
pub fn resolve_walls(
    id_prefix: &str,
    bounds: &Rect,
    walls_config: &HashMap<CardinalDirection, WallConfig>,
    units: UnitSystem,
) -> Result<Vec<(ResolvedWall, WallComposition)>, FloorScriptError> {
    let mut thickness = HashMap::new();
    let mut wall_type = HashMap::new();
    let mut composition = HashMap::new();
    for direction in CardinalDirection::ORDER {
        let (wt, comp) = resolve_wall_composition(walls_config.get(&direction), units)?;
        thickness.insert(direction, comp.total_thickness);
        wall_type.insert(direction, wt);
        composition.insert(direction, comp);
    }

    let west_t = thickness[&CardinalDirection::West];
    let east_t = thickness[&CardinalDirection::East];

    let mut resolved = Vec::with_capacity(4);
    for direction in CardinalDirection::ORDER {
        let t = thickness[&direction];
        let (rect, outer_edge, inner_edge, interior_start_offset) = match direction {
            CardinalDirection::South => (
                Rect::new(bounds.x - west_t, bounds.y - t, bounds.width + west_t + east_t, t),
                bounds.y - t,
                bounds.y,
                west_t,
            ),
            CardinalDirection::North => (
                Rect::new(bounds.x - west_t, bounds.y + bounds.height, bounds.width + west_t + east_t, t),
                bounds.y + bounds.height + t,
                bounds.y + bounds.height,
                west_t,
            ),
            CardinalDirection::West => {
                (Rect::new(bounds.x - t, bounds.y, t, bounds.height), bounds.x - t, bounds.x, 0.0)
            }
            CardinalDirection::East => (
                Rect::new(bounds.x + bounds.width, bounds.y, t, bounds.height),
                bounds.x + bounds.width + t,
                bounds.x + bounds.width,
                0.0,
            ),
        };

        resolved.push((
            ResolvedWall {
                id: format!("{id_prefix}.{}", direction.as_str()),
                direction,
                wall_type: wall_type[&direction],
                thickness: t,
                line_weight: wall_type[&direction].line_weight(),
                rect,
                outer_edge,
                inner_edge,
                interior_start_offset,
                openings: Vec::new(),
                segments: Vec::new(),
            },
            composition[&direction],
        ));
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn south_and_north_extend_over_corners() {
        let bounds = Rect::new(0.0, 0.0, 15.0, 12.0);
        let config = HashMap::new();
        let walls = resolve_walls("r1", &bounds, &config, UnitSystem::Imperial).unwrap();
        let south = &walls.iter().find(|(w, _)| w.direction == CardinalDirection::South).unwrap().0;
        let west_t = walls.iter().find(|(w, _)| w.direction == CardinalDirection::West).unwrap().0.thickness;
        let east_t = walls.iter().find(|(w, _)| w.direction == CardinalDirection::East).unwrap().0.thickness;
        assert!((south.rect.width - (15.0 + west_t + east_t)).abs() < 1e-9);
        assert_eq!(south.interior_start_offset, west_t);
    }

    #[test]
    fn vertical_walls_butt_in_with_zero_offset() {
        let bounds = Rect::new(0.0, 0.0, 15.0, 12.0);
        let config = HashMap::new();
        let walls = resolve_walls("r1", &bounds, &config, UnitSystem::Imperial).unwrap();
        let west = &walls.iter().find(|(w, _)| w.direction == CardinalDirection::West).unwrap().0;
        assert_eq!(west.interior_start_offset, 0.0);
        assert_eq!(west.rect.height, 12.0);
    }

    #[test]
    fn wall_rect_lies_outside_room_bounds() {
        let bounds = Rect::new(0.0, 0.0, 15.0, 12.0);
        let config = HashMap::new();
        let walls = resolve_walls("r1", &bounds, &config, UnitSystem::Imperial).unwrap();
        let interior = Rect::new(bounds.x + 0.01, bounds.y + 0.01, bounds.width - 0.02, bounds.height - 0.02);
        for (wall, _) in &walls {
            assert!(!wall.rect.overlaps(&interior, 0.0));
        }
    }
}
