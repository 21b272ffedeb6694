// Lint-style plan validation: a pure function over a resolved plan
// producing `{errors, warnings}`. Rules run in a fixed order so
// `ValidationResult` ordering is stable and reproducible.

use tracing::warn;

use crate::domain::plan::{ResolvedPlan, ValidationIssue, ValidationResult};
use crate::domain::wallgraph::{PlanWall, WallGraph};
use crate::geometry::{LineSegment, Span};

pub fn validate(plan: &ResolvedPlan) -> ValidationResult {
    let mut result = ValidationResult::default();

    overlapping_openings(plan, &mut result);
    opening_exceeds_wall(plan, &mut result);
    sealed_room(plan, &mut result);
    fixture_out_of_bounds(plan, &mut result);
    run_through_wall(plan, &mut result);
    opening_in_extension_gap(plan, &mut result);
    sealed_enclosure(plan, &mut result);
    sealed_extension(plan, &mut result);

    if !result.is_clean() {
        warn!(
            plan = %plan.id,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "plan validation found issues"
        );
    }

    result
}

fn overlapping_openings(plan: &ResolvedPlan, result: &mut ValidationResult) {
    for wall in &plan.wall_graph.walls {
        let axis_is_x = wall.direction.is_horizontal();
        for i in 0..wall.openings.len() {
            for j in (i + 1)..wall.openings.len() {
                if wall.openings[i].spans_overlap(&wall.openings[j], axis_is_x, 0.001) {
                    result.errors.push(ValidationIssue::error(
                        "overlapping-openings",
                        format!("wall {} has overlapping openings", wall.id()),
                    ));
                }
            }
        }
    }
}

fn opening_exceeds_wall(plan: &ResolvedPlan, result: &mut ValidationResult) {
    for wall in &plan.wall_graph.walls {
        let wall_length = if wall.direction.is_horizontal() { wall.rect.width } else { wall.rect.height };
        for opening in &wall.openings {
            if opening.width > wall_length + 0.001 {
                result.errors.push(ValidationIssue::error(
                    "opening-exceeds-wall",
                    format!("opening on {} (width {:.4}) exceeds wall length {:.4}", wall.id(), opening.width, wall_length),
                ));
            }
        }
    }
}

fn sealed_room(plan: &ResolvedPlan, result: &mut ValidationResult) {
    for room in &plan.rooms {
        let opening_count: usize = room.walls.iter().map(|w| w.openings.len()).sum();
        if opening_count == 0 {
            result.warnings.push(ValidationIssue::warning("sealed-room", format!("room {:?} has no openings", room.id)));
        }
    }
}

fn fixture_out_of_bounds(plan: &ResolvedPlan, result: &mut ValidationResult) {
    let Some(plumbing) = &plan.plumbing else { return };
    for fixture in &plumbing.fixtures {
        let inside_any = plan.rooms.iter().any(|room| room.bounds.contains(&fixture.position, 0.01));
        if !inside_any {
            result.warnings.push(ValidationIssue::warning(
                "fixture-out-of-bounds",
                format!("fixture {:?} lies outside every room bound", fixture.id),
            ));
        }
    }
}

fn run_through_wall(plan: &ResolvedPlan, result: &mut ValidationResult) {
    let Some(plumbing) = &plan.plumbing else { return };
    for run in plumbing.supply_runs.iter().chain(plumbing.drain_runs.iter()) {
        for pair in run.path.windows(2) {
            let segment = LineSegment::new(pair[0], pair[1]);
            for wall in &plan.wall_graph.walls {
                if !segment.intersects_rect(&wall.rect) {
                    continue;
                }
                if segment_overlaps_any_opening(&segment, wall) {
                    continue;
                }
                result.warnings.push(ValidationIssue::warning(
                    "run-through-wall",
                    format!("a plumbing run crosses wall {} outside any opening", wall.id()),
                ));
            }
        }
    }
}

fn segment_overlaps_any_opening(segment: &LineSegment, wall: &PlanWall) -> bool {
    let axis_is_x = wall.direction.is_horizontal();
    let (seg_start, seg_end) = if axis_is_x {
        (segment.start.x.min(segment.end.x), segment.start.x.max(segment.end.x))
    } else {
        (segment.start.y.min(segment.end.y), segment.start.y.max(segment.end.y))
    };
    wall.openings.iter().any(|opening| {
        let (gap_start, gap_end) = if axis_is_x {
            (opening.gap_start.x.min(opening.gap_end.x), opening.gap_start.x.max(opening.gap_end.x))
        } else {
            (opening.gap_start.y.min(opening.gap_end.y), opening.gap_start.y.max(opening.gap_end.y))
        };
        seg_start < gap_end - 0.001 && gap_start < seg_end - 0.001
    })
}

fn opening_in_extension_gap(plan: &ResolvedPlan, result: &mut ValidationResult) {
    for room in &plan.rooms {
        for extension in &room.extensions {
            let Some(parent_wall) = room.wall(extension.parent_wall) else { continue };
            let gap = extension_gap_span(extension, &room.bounds);
            let axis_is_x = extension.parent_wall.is_horizontal();
            for opening in &parent_wall.openings {
                let (gap_start, gap_end) = if axis_is_x {
                    (opening.gap_start.x.min(opening.gap_end.x), opening.gap_start.x.max(opening.gap_end.x))
                } else {
                    (opening.gap_start.y.min(opening.gap_end.y), opening.gap_start.y.max(opening.gap_end.y))
                };
                if gap_start < gap.end - 0.001 && gap.start < gap_end - 0.001 {
                    result.warnings.push(ValidationIssue::warning(
                        "opening-in-extension-gap",
                        format!("opening on {} falls inside extension {:?}'s gap", parent_wall.id(), extension.id),
                    ));
                }
            }
        }
    }
}

fn extension_gap_span(extension: &crate::domain::extension::ResolvedExtension, _parent_bounds: &crate::geometry::Rect) -> Span {
    if extension.parent_wall.is_horizontal() {
        Span::new(extension.bounds.min_x(), extension.bounds.max_x())
    } else {
        Span::new(extension.bounds.min_y(), extension.bounds.max_y())
    }
}

fn sealed_enclosure(plan: &ResolvedPlan, result: &mut ValidationResult) {
    for room in &plan.rooms {
        for enclosure in &room.enclosures {
            if sub_space_opening_count(&plan.wall_graph, &enclosure.id) == 0 {
                result.warnings.push(ValidationIssue::warning(
                    "sealed-enclosure",
                    format!("enclosure {:?} has no openings", enclosure.id),
                ));
            }
        }
    }
}

fn sealed_extension(plan: &ResolvedPlan, result: &mut ValidationResult) {
    for room in &plan.rooms {
        for extension in &room.extensions {
            if sub_space_opening_count(&plan.wall_graph, &extension.id) == 0 {
                result.warnings.push(ValidationIssue::warning(
                    "sealed-extension",
                    format!("extension {:?} has no openings", extension.id),
                ));
            }
        }
    }
}

fn sub_space_opening_count(graph: &WallGraph, sub_space_id: &str) -> usize {
    graph
        .by_sub_space
        .get(sub_space_id)
        .map(|by_dir| by_dir.values().map(|&index| graph.walls[index].openings.len()).sum())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dimension_line::ResolvedDimension;
    use crate::domain::room::ResolvedRoom;
    use crate::geometry::{Point, Rect};
    use crate::units::UnitSystem;

    fn empty_plan(rooms: Vec<ResolvedRoom>) -> ResolvedPlan {
        ResolvedPlan {
            project_title: "T".into(),
            units: UnitSystem::Imperial,
            id: "main".into(),
            title: "P".into(),
            rooms,
            wall_graph: WallGraph::new(),
            dimensions: Vec::<ResolvedDimension>::new(),
            bounds: Rect::new(0.0, 0.0, 1.0, 1.0),
            electrical: None,
            plumbing: None,
        }
    }

    #[test]
    fn sealed_room_with_no_openings_warns() {
        let room = ResolvedRoom {
            id: "r1".into(),
            label: "R".into(),
            bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
            label_position: Point::new(5.0, 5.0),
            walls: Vec::new(),
            extensions: Vec::new(),
            enclosures: Vec::new(),
        };
        let plan = empty_plan(vec![room]);
        let result = validate(&plan);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, "sealed-room");
    }

    #[test]
    fn clean_plan_has_no_issues() {
        let plan = empty_plan(Vec::new());
        assert!(validate(&plan).is_clean());
    }
}
