// Plumbing resolver: fixtures, supply/drain runs, valves, and the water
// heater, resolved against the wall graph.
//
// REDESIGN: spec.md's described legacy behavior for a bare `position` with
// no `wall` is to silently treat it as `{x: parsed, y: 0}`. This resolver
// rejects it instead with `AmbiguousFixturePosition` — see DESIGN.md for
// the rationale.

use std::collections::HashMap;

use crate::dimension::parse_dimension;
use crate::domain::electrical::{PointElementConfig, ResolvedPointElement};
use crate::domain::plumbing::{
    PipeRunConfig, PlumbingConfig, PlumbingFixtureConfig, PlumbingPosition, ResolvedPipeRun,
    ResolvedPlumbing, ResolvedPlumbingFixture,
};
use crate::domain::wallgraph::WallGraph;
use crate::error::FloorScriptError;
use crate::geometry::Point;
use crate::resolve::wall_ref::{find_wall_by_id, position_from_inner_face};
use crate::units::UnitSystem;

pub fn resolve_plumbing(
    config: &PlumbingConfig,
    graph: &WallGraph,
    units: UnitSystem,
) -> Result<ResolvedPlumbing, FloorScriptError> {
    let mut fixtures = Vec::with_capacity(config.fixtures.len());
    let mut fixture_positions: HashMap<String, Point> = HashMap::new();
    for fixture in &config.fixtures {
        let resolved = resolve_fixture(fixture, graph, units)?;
        fixture_positions.insert(fixture.id.clone(), resolved.position);
        fixtures.push(resolved);
    }

    let supply_runs = config
        .supply_runs
        .iter()
        .map(|run| resolve_pipe_run(run, graph, &fixture_positions, units))
        .collect::<Result<Vec<_>, _>>()?;
    let drain_runs = config
        .drain_runs
        .iter()
        .map(|run| resolve_pipe_run(run, graph, &fixture_positions, units))
        .collect::<Result<Vec<_>, _>>()?;

    let valves = config
        .valves
        .iter()
        .map(|valve| resolve_point_element(valve, units))
        .collect::<Result<Vec<_>, _>>()?;
    let water_heater = config.water_heater.as_ref().map(|wh| resolve_point_element(wh, units)).transpose()?;

    Ok(ResolvedPlumbing { fixtures, supply_runs, drain_runs, valves, water_heater })
}

fn resolve_fixture(
    config: &PlumbingFixtureConfig,
    graph: &WallGraph,
    units: UnitSystem,
) -> Result<ResolvedPlumbingFixture, FloorScriptError> {
    let position = match (&config.wall, &config.position) {
        (Some(wall_ref), Some(PlumbingPosition::Bare(along_wall))) => {
            let wall = find_wall_by_id(graph, wall_ref)?;
            let along = parse_dimension(along_wall, units)?;
            let offset = parse_offset(&config.offset, units)?;
            position_from_inner_face(wall, along, offset)
        }
        (Some(wall_ref), None) => {
            let wall = find_wall_by_id(graph, wall_ref)?;
            let offset = parse_offset(&config.offset, units)?;
            position_from_inner_face(wall, 0.0, offset)
        }
        (None, Some(PlumbingPosition::Point([x, y]))) => {
            Point::new(parse_dimension(x, units)?, parse_dimension(y, units)?)
        }
        (None, Some(PlumbingPosition::Bare(_))) => {
            return Err(FloorScriptError::AmbiguousFixturePosition { fixture_id: config.id.clone() })
        }
        (Some(_), Some(PlumbingPosition::Point(_))) | (None, None) => {
            return Err(FloorScriptError::Schema {
                issues: vec![crate::error::SchemaIssue::new(
                    format!("plumbing.fixtures[{}]", config.id),
                    "must specify either an absolute `position` or a `wall` (with optional `offset`)",
                )],
            })
        }
    };

    Ok(ResolvedPlumbingFixture { id: config.id.clone(), fixture_type: config.fixture_type.clone(), position })
}

fn parse_offset(offset: &Option<crate::dimension::Dimension>, units: UnitSystem) -> Result<f64, FloorScriptError> {
    match offset {
        Some(dimension) => parse_dimension(dimension, units),
        None => Ok(0.0),
    }
}

fn resolve_pipe_run(
    config: &PipeRunConfig,
    graph: &WallGraph,
    fixture_positions: &HashMap<String, Point>,
    units: UnitSystem,
) -> Result<ResolvedPipeRun, FloorScriptError> {
    let path = if let Some(path) = &config.path {
        path.iter()
            .map(|[x, y]| Ok(Point::new(parse_dimension(x, units)?, parse_dimension(y, units)?)))
            .collect::<Result<Vec<_>, FloorScriptError>>()?
    } else {
        let from = config.from.as_deref().ok_or_else(|| FloorScriptError::Schema {
            issues: vec![crate::error::SchemaIssue::new("plumbing runs", "must specify either `path` or `from`/`to`")],
        })?;
        let to = config.to.as_deref().ok_or_else(|| FloorScriptError::Schema {
            issues: vec![crate::error::SchemaIssue::new("plumbing runs", "must specify either `path` or `from`/`to`")],
        })?;
        vec![
            resolve_endpoint(from, graph, fixture_positions)?,
            resolve_endpoint(to, graph, fixture_positions)?,
        ]
    };

    Ok(ResolvedPipeRun { style: config.style.unwrap_or_default(), path })
}

/// Resolve a run endpoint that may be a fixture id or a wall reference. Wall
/// references resolve to the wall's interior-start point with zero offset,
/// the same as a wall-relative position with an explicit offset of 0.
fn resolve_endpoint(
    reference: &str,
    graph: &WallGraph,
    fixture_positions: &HashMap<String, Point>,
) -> Result<Point, FloorScriptError> {
    if let Some(position) = fixture_positions.get(reference) {
        return Ok(*position);
    }
    if reference.contains('.') {
        let wall = find_wall_by_id(graph, reference)?;
        return Ok(position_from_inner_face(wall, 0.0, 0.0));
    }
    Err(FloorScriptError::UnknownFixture { fixture_id: reference.to_string() })
}

fn resolve_point_element(
    config: &PointElementConfig,
    units: UnitSystem,
) -> Result<ResolvedPointElement, FloorScriptError> {
    let [x, y] = &config.position;
    Ok(ResolvedPointElement {
        element_type: config.element_type.clone(),
        position: Point::new(parse_dimension(x, units)?, parse_dimension(y, units)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;

    #[test]
    fn bare_position_with_no_wall_is_rejected() {
        let graph = WallGraph::new();
        let config = PlumbingFixtureConfig {
            id: "sink".into(),
            fixture_type: "sink".into(),
            wall: None,
            offset: None,
            position: Some(PlumbingPosition::Bare(Dimension::Numeric(3.0))),
        };
        let err = resolve_fixture(&config, &graph, UnitSystem::Imperial).unwrap_err();
        assert!(matches!(err, FloorScriptError::AmbiguousFixturePosition { .. }));
    }

    #[test]
    fn absolute_position_resolves_without_a_wall() {
        let graph = WallGraph::new();
        let config = PlumbingFixtureConfig {
            id: "sink".into(),
            fixture_type: "sink".into(),
            wall: None,
            offset: None,
            position: Some(PlumbingPosition::Point([Dimension::Numeric(2.0), Dimension::Numeric(3.0)])),
        };
        let resolved = resolve_fixture(&config, &graph, UnitSystem::Imperial).unwrap();
        assert_eq!(resolved.position, Point::new(2.0, 3.0));
    }
}
