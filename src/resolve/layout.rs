// Layout orchestrator: the only place that runs the full pipeline end to
// end. Every other `resolve::*` module is a pure function over
// already-resolved inputs; this one owns the construction order.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::PlanConfig;
use crate::dimension::parse_dimension;
use crate::domain::direction::CardinalDirection;
use crate::domain::plan::ResolvedPlan;
use crate::domain::room::{ResolvedRoom, RoomConfig};
use crate::domain::wallgraph::WallSource;
use crate::error::FloorScriptError;
use crate::geometry::{Rect, Span};
use crate::resolve::dimension_layout::generate_dimensions;
use crate::resolve::electrical_resolver::resolve_electrical;
use crate::resolve::enclosure_resolver::resolve_enclosure;
use crate::resolve::extension_resolver::resolve_extension;
use crate::resolve::opening_resolver::resolve_wall_openings;
use crate::resolve::plumbing_resolver::resolve_plumbing;
use crate::resolve::wall_geometry::resolve_walls;
use crate::resolve::wall_graph::{build_wall_graph, WallGroup};
use crate::units::UnitSystem;

/// Resolve one plan end to end, running all ten pipeline steps in order.
pub fn resolve_plan(
    project_title: &str,
    plan_config: &PlanConfig,
    units: UnitSystem,
) -> Result<ResolvedPlan, FloorScriptError> {
    let mut groups: Vec<WallGroup> = Vec::new();
    let mut rooms: Vec<ResolvedRoom> = Vec::with_capacity(plan_config.rooms.len());
    // Extension gap spans keyed by the parent wall they attach to, so the
    // segment slicer can subtract them alongside opening gaps (step 7).
    let mut extension_gaps: HashMap<(String, CardinalDirection), Vec<Span>> = HashMap::new();

    for room_config in &plan_config.rooms {
        let (room, room_groups, room_extension_gaps) = resolve_room(room_config, units)?;
        rooms.push(room);
        groups.extend(room_groups);
        for ((room_id, direction), mut spans) in room_extension_gaps {
            extension_gaps.entry((room_id, direction)).or_default().append(&mut spans);
        }
    }

    debug!(plan = %plan_config.id, rooms = rooms.len(), "rooms resolved, building wall graph");

    // Step 6: merge per-room, extension, and enclosure walls into the
    // plan-level graph.
    let mut graph = build_wall_graph(groups)?;

    debug!(plan = %plan_config.id, walls = graph.walls.len(), "wall graph assembled");

    // Step 7: slice segments using each wall's own opening gaps plus any
    // parent-wall extension gaps.
    for wall in &mut graph.walls {
        let mut gaps: Vec<Span> = wall
            .openings
            .iter()
            .map(|opening| opening_span(wall.direction, opening))
            .collect();
        if let Some(extra) = extension_gaps.get(&(wall.room_id.clone(), wall.direction)) {
            gaps.extend(extra.iter().copied());
        }
        wall.segments = crate::resolve::segment_slicer::slice_segments(&wall.rect, wall.direction, &gaps);
    }

    // Re-point each ResolvedRoom's walls at the merged, segment-sliced
    // PlanWall data so openings/segments reflect any shared-wall merge.
    for room in &mut rooms {
        for wall in &mut room.walls {
            if let Some(plan_wall) = graph.find_by_room(&room.id, wall.direction) {
                wall.openings = plan_wall.openings.clone();
                wall.segments = plan_wall.segments.clone();
            }
        }
    }

    // Step 8: electrical/plumbing reference walls by id, so they resolve
    // against the final graph.
    let electrical = plan_config
        .electrical
        .as_ref()
        .map(|config| resolve_electrical(config, &graph, units))
        .transpose()?;
    let plumbing =
        plan_config.plumbing.as_ref().map(|config| resolve_plumbing(config, &graph, units)).transpose()?;

    // Step 9.
    let dimensions = generate_dimensions(&rooms, units);

    // Step 10: axis-aligned union of every room/extension/enclosure bound.
    let bounds = plan_bounds(&rooms);

    Ok(ResolvedPlan {
        project_title: project_title.to_string(),
        units,
        id: plan_config.id.clone(),
        title: plan_config.title.clone(),
        rooms,
        wall_graph: graph,
        dimensions,
        bounds,
        electrical,
        plumbing,
    })
}

type RoomResolution = (ResolvedRoom, Vec<WallGroup>, HashMap<(String, CardinalDirection), Vec<Span>>);

fn resolve_room(room_config: &RoomConfig, units: UnitSystem) -> Result<RoomResolution, FloorScriptError> {
    let [x, y] = &room_config.position;
    let bounds = Rect::new(
        parse_dimension(x, units)?,
        parse_dimension(y, units)?,
        parse_dimension(&room_config.width, units)?,
        parse_dimension(&room_config.height, units)?,
    );

    check_unique_sub_space_ids(room_config)?;

    // Step 2: per-room walls.
    let mut walls = resolve_walls(&room_config.id, &bounds, &room_config.walls, units)?;

    let mut groups = Vec::new();
    let mut extension_gaps: HashMap<(String, CardinalDirection), Vec<Span>> = HashMap::new();

    // Step 3: extensions.
    let mut resolved_extensions = Vec::with_capacity(room_config.extensions.len());
    for extension_config in &room_config.extensions {
        let bundle = resolve_extension(&room_config.id, &bounds, extension_config, units)?;
        extension_gaps
            .entry((room_config.id.clone(), extension_config.parent_wall))
            .or_default()
            .push(Span::new(bundle.gap.gap_start, bundle.gap.gap_end));
        resolved_extensions.push(bundle.extension);
        groups.push(bundle.wall_group);
    }

    // Step 4: enclosures.
    let mut resolved_enclosures = Vec::with_capacity(room_config.enclosures.len());
    for enclosure_config in &room_config.enclosures {
        let bundle = resolve_enclosure(&room_config.id, &bounds, enclosure_config, units)?;
        resolved_enclosures.push(bundle.enclosure);
        groups.push(bundle.wall_group);
    }

    // Step 5: openings on each per-room wall.
    for (wall, _) in &mut walls {
        if let Some(wall_config) = room_config.walls.get(&wall.direction) {
            let interior_length = wall.interior_length(&bounds);
            wall.openings = resolve_wall_openings(&wall_config.openings, wall, interior_length, units)?;
        }
    }

    let room = ResolvedRoom {
        id: room_config.id.clone(),
        label: room_config.label.clone(),
        bounds,
        label_position: bounds.center(),
        walls: walls.iter().map(|(w, _)| w.clone()).collect(),
        extensions: resolved_extensions,
        enclosures: resolved_enclosures,
    };

    groups.push(WallGroup {
        room_id: room_config.id.clone(),
        source: WallSource::Room,
        sub_space_id: None,
        walls,
        coincident_direction: None,
    });

    Ok((room, groups, extension_gaps))
}

fn check_unique_sub_space_ids(room_config: &RoomConfig) -> Result<(), FloorScriptError> {
    let mut seen = HashSet::new();
    for id in room_config.extensions.iter().map(|e| &e.id).chain(room_config.enclosures.iter().map(|e| &e.id)) {
        if !seen.insert(id) {
            return Err(FloorScriptError::DuplicateExtensionId {
                room_id: room_config.id.clone(),
                sub_space_id: id.clone(),
            });
        }
    }
    Ok(())
}

fn opening_span(direction: CardinalDirection, opening: &crate::domain::opening::ResolvedOpening) -> Span {
    if direction.is_horizontal() {
        Span::new(opening.gap_start.x.min(opening.gap_end.x), opening.gap_start.x.max(opening.gap_end.x))
    } else {
        Span::new(opening.gap_start.y.min(opening.gap_end.y), opening.gap_start.y.max(opening.gap_end.y))
    }
}

fn plan_bounds(rooms: &[ResolvedRoom]) -> Rect {
    let mut bounds: Option<Rect> = None;
    let mut accumulate = |rect: Rect| {
        bounds = Some(match bounds {
            Some(existing) => existing.union(&rect),
            None => rect,
        });
    };

    for room in rooms {
        accumulate(room.bounds);
        for extension in &room.extensions {
            accumulate(extension.bounds);
        }
        for enclosure in &room.enclosures {
            accumulate(enclosure.bounds);
        }
    }

    bounds.unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0))
}
