// Wall composition and the plan-level graph builder: free functions
// grouped under one module, validate inputs before assembling output,
// no shared mutable state.

use crate::dimension::parse_dimension;
use crate::domain::direction::{CardinalDirection, WallType};
use crate::domain::opening::ResolvedOpening;
use crate::domain::room::{ResolvedWall, WallConfig};
use crate::domain::wallgraph::{PlanWall, WallComposition, WallGraph, WallSource};
use crate::error::FloorScriptError;
use crate::geometry::{Rect, NEIGHBOR_EPSILON};
use crate::units::UnitSystem;

/// Resolve a wall's type and composition from its (possibly absent) config
/// override.
pub fn resolve_wall_composition(
    config: Option<&WallConfig>,
    units: UnitSystem,
) -> Result<(WallType, WallComposition), FloorScriptError> {
    let wall_type = config.and_then(|c| c.wall_type).unwrap_or_default();

    if let Some(thickness_dim) = config.and_then(|c| c.thickness.as_ref()) {
        let total = parse_dimension(thickness_dim, units)?;
        return Ok((
            wall_type,
            WallComposition {
                stud: "custom",
                stud_width_ft: total,
                finish_a: 0.0,
                finish_b: 0.0,
                total_thickness: total,
            },
        ));
    }

    let composition = match (units, wall_type) {
        (UnitSystem::Imperial, WallType::Exterior) => WallComposition {
            stud: "2x6",
            stud_width_ft: 5.5 / 12.0,
            finish_a: 0.5 / 12.0,
            finish_b: 0.5 / 12.0,
            total_thickness: 6.5 / 12.0,
        },
        (UnitSystem::Imperial, WallType::Interior | WallType::LoadBearing) => WallComposition {
            stud: "2x4",
            stud_width_ft: 3.5 / 12.0,
            finish_a: 0.5 / 12.0,
            finish_b: 0.5 / 12.0,
            total_thickness: 4.5 / 12.0,
        },
        (UnitSystem::Metric, WallType::Exterior) => WallComposition {
            stud: "140mm",
            stud_width_ft: 0.12,
            finish_a: 0.015,
            finish_b: 0.015,
            total_thickness: 0.15,
        },
        (UnitSystem::Metric, WallType::Interior | WallType::LoadBearing) => WallComposition {
            stud: "90mm",
            stud_width_ft: 0.07,
            finish_a: 0.015,
            finish_b: 0.015,
            total_thickness: 0.10,
        },
    };

    Ok((wall_type, composition))
}

/// One room's (or sub-space's) resolved walls, ready to be merged into the
/// plan-level graph.
pub struct WallGroup {
    pub room_id: String,
    pub source: WallSource,
    pub sub_space_id: Option<String>,
    pub walls: Vec<(ResolvedWall, WallComposition)>,
    /// For an enclosure, the direction (shared with the parent room's own
    /// direction labels) whose wall sits on the parent's facing wall and
    /// should be marked coincident with it. `None` for rooms and
    /// extensions, which never alias a parent wall this way.
    pub coincident_direction: Option<CardinalDirection>,
}

struct Candidate<'a> {
    group_index: usize,
    room_id: &'a str,
    wall: &'a ResolvedWall,
    composition: &'a WallComposition,
    overlap: f64,
}

/// Build the plan-level wall graph, merging any two room walls that share a
/// physical edge into one PlanWall.
pub fn build_wall_graph(groups: Vec<WallGroup>) -> Result<WallGraph, FloorScriptError> {
    let mut graph = WallGraph::new();

    // Only room-sourced groups participate in shared-wall merging; a room's
    // own four walls are the only ones that can coincide with another
    // room's.
    let room_group_indices: Vec<usize> =
        groups.iter().enumerate().filter(|(_, g)| g.source == WallSource::Room).map(|(i, _)| i).collect();

    let mut merged: std::collections::HashSet<(usize, CardinalDirection)> = std::collections::HashSet::new();

    for &a_idx in &room_group_indices {
        let wall_count = groups[a_idx].walls.len();
        for wall_idx in 0..wall_count {
            let wall_a_ref = &groups[a_idx].walls[wall_idx].0;
            let direction_a = wall_a_ref.direction;
            if merged.contains(&(a_idx, direction_a)) {
                continue;
            }

            let mut best: Option<Candidate> = None;
            for &b_idx in &room_group_indices {
                if b_idx == a_idx {
                    continue;
                }
                for (wall_b, composition_b) in &groups[b_idx].walls {
                    if wall_b.direction != direction_a.opposite() {
                        continue;
                    }
                    if merged.contains(&(b_idx, wall_b.direction)) {
                        continue;
                    }
                    if !edges_coincide(direction_a, wall_a_ref, wall_b) {
                        continue;
                    }
                    let overlap = overlap_amount(direction_a, &wall_a_ref.rect, &wall_b.rect);
                    let candidate = Candidate {
                        group_index: b_idx,
                        room_id: &groups[b_idx].room_id,
                        wall: wall_b,
                        composition: composition_b,
                        overlap,
                    };
                    best = Some(match best {
                        None => candidate,
                        Some(current) => pick_better(current, candidate),
                    });
                }
            }

            let (wall_a, composition_a) = &groups[a_idx].walls[wall_idx];

            if let Some(candidate) = best {
                if (composition_a.total_thickness - candidate.composition.total_thickness).abs() > 0.001 {
                    return Err(FloorScriptError::IncompatibleSharedWall {
                        room_a: groups[a_idx].room_id.clone(),
                        room_b: candidate.room_id.to_string(),
                        direction: direction_a.as_str().to_string(),
                        message: format!(
                            "totalThickness {:.4} vs {:.4}",
                            composition_a.total_thickness, candidate.composition.total_thickness
                        ),
                    });
                }
                merged.insert((a_idx, direction_a));
                merged.insert((candidate.group_index, candidate.wall.direction));

                let mut openings: Vec<ResolvedOpening> = wall_a.openings.clone();
                openings.extend(candidate.wall.openings.clone());

                graph.push(PlanWall {
                    room_id: groups[a_idx].room_id.clone(),
                    direction: direction_a,
                    room_id_b: Some(candidate.room_id.to_string()),
                    direction_in_b: Some(candidate.wall.direction),
                    composition: *composition_a,
                    source: WallSource::Room,
                    sub_space_id: None,
                    shared: true,
                    wall_type: wall_a.wall_type,
                    line_weight: wall_a.line_weight,
                    rect: wall_a.rect,
                    outer_edge: wall_a.outer_edge,
                    inner_edge: wall_a.inner_edge,
                    interior_start_offset: wall_a.interior_start_offset,
                    openings,
                    segments: Vec::new(),
                });
            } else {
                graph.push(PlanWall {
                    room_id: groups[a_idx].room_id.clone(),
                    direction: direction_a,
                    room_id_b: None,
                    direction_in_b: None,
                    composition: *composition_a,
                    source: WallSource::Room,
                    sub_space_id: None,
                    shared: false,
                    wall_type: wall_a.wall_type,
                    line_weight: wall_a.line_weight,
                    rect: wall_a.rect,
                    outer_edge: wall_a.outer_edge,
                    inner_edge: wall_a.inner_edge,
                    interior_start_offset: wall_a.interior_start_offset,
                    openings: wall_a.openings.clone(),
                    segments: Vec::new(),
                });
            }
        }

        // Construction order is owner-room's walls first, then its own
        // sub-spaces, before moving to the next room — so a room's
        // extensions/enclosures are pushed here, right after its four
        // walls, rather than batched after every room's walls.
        let room_id = groups[a_idx].room_id.clone();
        for group in groups.iter().filter(|g| g.source != WallSource::Room && g.room_id == room_id) {
            for (wall, composition) in &group.walls {
                let coincides_with_parent = group.coincident_direction == Some(wall.direction);
                graph.push(PlanWall {
                    room_id: group.room_id.clone(),
                    direction: wall.direction,
                    room_id_b: coincides_with_parent.then(|| group.room_id.clone()),
                    direction_in_b: coincides_with_parent.then_some(wall.direction),
                    composition: *composition,
                    source: group.source,
                    sub_space_id: group.sub_space_id.clone(),
                    shared: coincides_with_parent,
                    wall_type: wall.wall_type,
                    line_weight: wall.line_weight,
                    rect: wall.rect,
                    outer_edge: wall.outer_edge,
                    inner_edge: wall.inner_edge,
                    interior_start_offset: wall.interior_start_offset,
                    openings: wall.openings.clone(),
                    segments: Vec::new(),
                });
            }
        }
    }

    Ok(graph)
}

/// Tie-break rule: maximum overlap; ties broken by lexicographically
/// smallest room id, then by direction order (N, S, E, W).
fn pick_better<'a>(current: Candidate<'a>, challenger: Candidate<'a>) -> Candidate<'a> {
    if challenger.overlap > current.overlap + NEIGHBOR_EPSILON {
        return challenger;
    }
    if current.overlap > challenger.overlap + NEIGHBOR_EPSILON {
        return current;
    }
    match challenger.room_id.cmp(current.room_id) {
        std::cmp::Ordering::Less => challenger,
        std::cmp::Ordering::Greater => current,
        std::cmp::Ordering::Equal => {
            if challenger.wall.direction.order_index() < current.wall.direction.order_index() {
                challenger
            } else {
                current
            }
        }
    }
}

/// Two opposing walls coincide when their inner faces sit on the same
/// line — the room-to-room boundary both sides extrude outward from —
/// and their long-axis spans overlap. The outer faces sit one
/// thickness apart and are not the line to compare.
fn edges_coincide(direction: CardinalDirection, wall_a: &ResolvedWall, wall_b: &ResolvedWall) -> bool {
    let rect_a = &wall_a.rect;
    let rect_b = &wall_b.rect;
    if direction.is_horizontal() {
        let y_coincides = (wall_a.inner_edge - wall_b.inner_edge).abs() < NEIGHBOR_EPSILON;
        let x_overlaps = rect_a.min_x() < rect_b.max_x() + NEIGHBOR_EPSILON
            && rect_b.min_x() < rect_a.max_x() + NEIGHBOR_EPSILON;
        y_coincides && x_overlaps
    } else {
        let x_coincides = (wall_a.inner_edge - wall_b.inner_edge).abs() < NEIGHBOR_EPSILON;
        let y_overlaps = rect_a.min_y() < rect_b.max_y() + NEIGHBOR_EPSILON
            && rect_b.min_y() < rect_a.max_y() + NEIGHBOR_EPSILON;
        x_coincides && y_overlaps
    }
}

fn overlap_amount(direction: CardinalDirection, rect_a: &Rect, rect_b: &Rect) -> f64 {
    if direction.is_horizontal() {
        let lo = rect_a.min_x().max(rect_b.min_x());
        let hi = rect_a.max_x().min(rect_b.max_x());
        (hi - lo).max(0.0)
    } else {
        let lo = rect_a.min_y().max(rect_b.min_y());
        let hi = rect_a.max_y().min(rect_b.max_y());
        (hi - lo).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::room::WallConfig;

    #[test]
    fn default_exterior_composition_matches_spec() {
        let (wall_type, composition) =
            resolve_wall_composition(None, UnitSystem::Imperial).unwrap();
        assert_eq!(wall_type, WallType::Interior);
        assert!((composition.total_thickness - 0.375).abs() < 1e-6);

        let config = WallConfig { wall_type: Some(WallType::Exterior), thickness: None, openings: Vec::new() };
        let (wall_type, composition) =
            resolve_wall_composition(Some(&config), UnitSystem::Imperial).unwrap();
        assert_eq!(wall_type, WallType::Exterior);
        assert!((composition.total_thickness - 0.5417).abs() < 1e-3);
    }

    #[test]
    fn explicit_thickness_overrides_defaults_and_zeroes_finish() {
        let config = WallConfig {
            wall_type: Some(WallType::Interior),
            thickness: Some(crate::dimension::Dimension::Numeric(1.0)),
            openings: Vec::new(),
        };
        let (_, composition) = resolve_wall_composition(Some(&config), UnitSystem::Imperial).unwrap();
        assert_eq!(composition.total_thickness, 1.0);
        assert_eq!(composition.finish_a, 0.0);
        assert_eq!(composition.finish_b, 0.0);
    }

    #[test]
    fn shared_wall_merges_into_one_plan_wall() {
        use crate::domain::direction::CardinalDirection;

        let kitchen_east = ResolvedWall {
            id: "kitchen.east".into(),
            direction: CardinalDirection::East,
            wall_type: WallType::Exterior,
            thickness: 0.5417,
            line_weight: 0.7,
            rect: Rect::new(12.0, 0.0, 0.5417, 10.0),
            outer_edge: 12.5417,
            inner_edge: 12.0,
            interior_start_offset: 0.0,
            openings: Vec::new(),
            segments: Vec::new(),
        };
        let living_west = ResolvedWall {
            id: "living.west".into(),
            direction: CardinalDirection::West,
            wall_type: WallType::Exterior,
            thickness: 0.5417,
            line_weight: 0.7,
            rect: Rect::new(11.4583, 0.0, 0.5417, 12.0),
            outer_edge: 11.4583,
            inner_edge: 12.0,
            interior_start_offset: 0.0,
            openings: Vec::new(),
            segments: Vec::new(),
        };
        let composition = WallComposition {
            stud: "2x6",
            stud_width_ft: 0.4583,
            finish_a: 0.0417,
            finish_b: 0.0417,
            total_thickness: 0.5417,
        };

        let groups = vec![
            WallGroup {
                room_id: "kitchen".into(),
                source: WallSource::Room,
                sub_space_id: None,
                walls: vec![(kitchen_east, composition)],
                coincident_direction: None,
            },
            WallGroup {
                room_id: "living".into(),
                source: WallSource::Room,
                sub_space_id: None,
                walls: vec![(living_west, composition)],
                coincident_direction: None,
            },
        ];

        let graph = build_wall_graph(groups).unwrap();
        assert_eq!(graph.walls.len(), 1);
        let merged = &graph.walls[0];
        assert!(merged.shared);
        assert_eq!(merged.room_id, "kitchen");
        assert_eq!(merged.room_id_b.as_deref(), Some("living"));
        assert_eq!(merged.direction_in_b, Some(CardinalDirection::West));

        assert!(graph.by_room.get("living").and_then(|m| m.get(&CardinalDirection::West)).is_some());
    }

    #[test]
    fn enclosure_facing_wall_is_marked_coincident_with_parent() {
        use crate::domain::direction::CardinalDirection;

        let parent_south = ResolvedWall {
            id: "r1.south".into(),
            direction: CardinalDirection::South,
            wall_type: WallType::Exterior,
            thickness: 0.5417,
            line_weight: 0.7,
            rect: Rect::new(0.0, -0.5417, 12.0, 0.5417),
            outer_edge: -0.5417,
            inner_edge: 0.0,
            interior_start_offset: 0.0,
            openings: Vec::new(),
            segments: Vec::new(),
        };
        let closet_south = ResolvedWall {
            id: "closet.south".into(),
            direction: CardinalDirection::South,
            wall_type: WallType::Exterior,
            thickness: 0.5417,
            line_weight: 0.7,
            rect: Rect::new(1.0, -0.5417, 3.0, 0.5417),
            outer_edge: -0.5417,
            inner_edge: 0.0,
            interior_start_offset: 0.0,
            openings: Vec::new(),
            segments: Vec::new(),
        };
        let closet_east = ResolvedWall {
            id: "closet.east".into(),
            direction: CardinalDirection::East,
            wall_type: WallType::Exterior,
            thickness: 0.5417,
            line_weight: 0.7,
            rect: Rect::new(4.0, 0.0, 0.5417, 2.0),
            outer_edge: 4.5417,
            inner_edge: 4.0,
            interior_start_offset: 0.0,
            openings: Vec::new(),
            segments: Vec::new(),
        };
        let composition = WallComposition {
            stud: "2x6",
            stud_width_ft: 0.4583,
            finish_a: 0.0417,
            finish_b: 0.0417,
            total_thickness: 0.5417,
        };

        let groups = vec![
            WallGroup {
                room_id: "r1".into(),
                source: WallSource::Room,
                sub_space_id: None,
                walls: vec![(parent_south, composition)],
                coincident_direction: None,
            },
            WallGroup {
                room_id: "r1".into(),
                source: WallSource::Enclosure,
                sub_space_id: Some("closet".into()),
                walls: vec![(closet_south, composition), (closet_east, composition)],
                coincident_direction: Some(CardinalDirection::South),
            },
        ];

        let graph = build_wall_graph(groups).unwrap();
        assert_eq!(graph.walls.len(), 3);

        let facing = graph.walls.iter().find(|w| w.sub_space_id.as_deref() == Some("closet") && w.direction == CardinalDirection::South).unwrap();
        assert!(facing.shared);
        assert_eq!(facing.room_id_b.as_deref(), Some("r1"));
        assert_eq!(facing.direction_in_b, Some(CardinalDirection::South));

        let other = graph.walls.iter().find(|w| w.sub_space_id.as_deref() == Some("closet") && w.direction == CardinalDirection::East).unwrap();
        assert!(!other.shared);
        assert!(other.room_id_b.is_none());
    }
}
