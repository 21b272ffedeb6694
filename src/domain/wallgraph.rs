// The plan-level wall graph: one PlanWall per physical wall, shared walls
// between adjacent rooms merged into a single entry. The `byRoom`/
// `bySubSpace` indices must alias the same PlanWall the `walls` arena
// holds rather than cloning it — here that's an arena (`Vec<PlanWall>`)
// addressed by stable integer handles.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::direction::{CardinalDirection, WallType};
use crate::domain::opening::ResolvedOpening;
use crate::geometry::Rect;

/// Stud + finish composition of a wall. `stud` is the nominal lumber label (`"2x6"`, `"2x4"`, or `"custom"` when
/// an explicit `thickness` override bypasses the stud/finish math);
/// `stud_width_ft` is its actual dimensional width in canonical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallComposition {
    pub stud: &'static str,
    pub stud_width_ft: f64,
    pub finish_a: f64,
    pub finish_b: f64,
    pub total_thickness: f64,
}

/// Where a PlanWall originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSource {
    Room,
    Extension,
    Enclosure,
}

/// A graph-merged wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanWall {
    pub room_id: String,
    pub direction: CardinalDirection,
    pub room_id_b: Option<String>,
    pub direction_in_b: Option<CardinalDirection>,
    pub composition: WallComposition,
    pub source: WallSource,
    pub sub_space_id: Option<String>,
    pub shared: bool,
    pub wall_type: WallType,
    pub line_weight: f64,
    pub rect: Rect,
    pub outer_edge: f64,
    pub inner_edge: f64,
    pub interior_start_offset: f64,
    pub openings: Vec<ResolvedOpening>,
    pub segments: Vec<Rect>,
}

impl PlanWall {
    /// `"{roomId}.{dir}"`, the id this wall is addressed by in wall
    /// references.
    pub fn id(&self) -> String {
        format!("{}.{}", self.room_id, self.direction.as_str())
    }

}

/// The plan-level graph: an arena of PlanWalls plus lookup indices that
/// alias entries in it by `(roomId, dir)` and `(subSpaceId, dir)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WallGraph {
    pub walls: Vec<PlanWall>,
    pub by_room: HashMap<String, HashMap<CardinalDirection, usize>>,
    pub by_sub_space: HashMap<String, HashMap<CardinalDirection, usize>>,
}

impl WallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a wall into the arena and index it; returns its handle.
    ///
    /// Only room-sourced walls are indexed by `(roomId, direction)` — an
    /// extension or enclosure's own direction labels are relative to its
    /// own box, not the parent room's, and would otherwise collide with
    /// (and silently shadow) the parent room's real wall in `byRoom`. A
    /// merged shared wall carries a second room/direction pair
    /// (`roomIdB`/`directionInB`), which is indexed alongside the
    /// primary one so both rooms resolve wall references to the same
    /// arena entry.
    pub fn push(&mut self, wall: PlanWall) -> usize {
        let index = self.walls.len();
        if wall.source == WallSource::Room {
            self.by_room
                .entry(wall.room_id.clone())
                .or_default()
                .insert(wall.direction, index);
            if let (Some(room_id_b), Some(direction_in_b)) = (wall.room_id_b.clone(), wall.direction_in_b) {
                self.by_room
                    .entry(room_id_b)
                    .or_default()
                    .insert(direction_in_b, index);
            }
        }
        if let Some(sub_space_id) = wall.sub_space_id.clone() {
            self.by_sub_space
                .entry(sub_space_id)
                .or_default()
                .insert(wall.direction, index);
        }
        self.walls.push(wall);
        index
    }

    pub fn find_by_room(&self, room_id: &str, direction: CardinalDirection) -> Option<&PlanWall> {
        self.by_room
            .get(room_id)
            .and_then(|by_dir| by_dir.get(&direction))
            .map(|&index| &self.walls[index])
    }

    /// Look up a wall by the `"{roomId}.{dir}"` reference grammar.
    /// The room id is the substring before the *last* dot.
    pub fn find_by_ref(&self, reference: &str) -> Option<&PlanWall> {
        let (room_id, direction) = split_wall_ref(reference)?;
        let direction = CardinalDirection::from_str(direction)?;
        self.find_by_room(room_id, direction)
    }
}

/// Split `"{roomId}.{dir}"` on the *last* dot, so hierarchical room ids
/// with dots in the middle stay unambiguous.
pub fn split_wall_ref(reference: &str) -> Option<(&str, &str)> {
    let idx = reference.rfind('.')?;
    if idx == 0 || idx == reference.len() - 1 {
        return None;
    }
    Some((&reference[..idx], &reference[idx + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn wall(room_id: &str, direction: CardinalDirection) -> PlanWall {
        PlanWall {
            room_id: room_id.to_string(),
            direction,
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
            rect: Rect::new(0.0, 0.0, 10.0, 0.375),
            outer_edge: -0.375,
            inner_edge: 0.0,
            interior_start_offset: 0.0,
            openings: Vec::new(),
            segments: Vec::new(),
        }
    }

    #[test]
    fn split_ref_uses_last_dot() {
        assert_eq!(split_wall_ref("r1.south"), Some(("r1", "south")));
        assert_eq!(split_wall_ref("a.b.south"), Some(("a.b", "south")));
        assert_eq!(split_wall_ref("noDirection"), None);
    }

    #[test]
    fn indices_alias_the_same_arena_entry() {
        let mut graph = WallGraph::new();
        let index = graph.push(wall("kitchen", CardinalDirection::South));
        assert_eq!(index, 0);
        let found = graph.find_by_room("kitchen", CardinalDirection::South).unwrap();
        assert_eq!(found.room_id, "kitchen");
        assert!(graph.find_by_ref("kitchen.south").is_some());
    }

    #[test]
    fn a_shared_wall_is_indexed_under_both_rooms() {
        let mut shared = wall("kitchen", CardinalDirection::East);
        shared.room_id_b = Some("living".to_string());
        shared.direction_in_b = Some(CardinalDirection::West);
        shared.shared = true;

        let mut graph = WallGraph::new();
        let index = graph.push(shared);

        assert_eq!(graph.find_by_room("kitchen", CardinalDirection::East).map(|_| index), Some(index));
        let from_living = graph.find_by_room("living", CardinalDirection::West).unwrap();
        assert_eq!(from_living.room_id, "kitchen");
        assert!(graph.find_by_ref("living.west").is_some());
    }
}
