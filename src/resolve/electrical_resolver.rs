// Electrical resolver: panel, outlets, switches, fixtures, smoke
// detectors, and circuit runs, resolved against the wall graph.

use crate::dimension::parse_dimension;
use crate::domain::electrical::{
    ElectricalConfig, PointElementConfig, ResolvedElectrical, ResolvedPanel, ResolvedPointElement,
    ResolvedRun, ResolvedWallElement, RunConfig, WallElementConfig,
};
use crate::domain::wallgraph::WallGraph;
use crate::error::FloorScriptError;
use crate::geometry::Point;
use crate::resolve::wall_ref::{find_wall_by_id, position_on_centerline};
use crate::units::UnitSystem;

pub fn resolve_electrical(
    config: &ElectricalConfig,
    graph: &WallGraph,
    units: UnitSystem,
) -> Result<ResolvedElectrical, FloorScriptError> {
    let panel = config
        .panel
        .as_ref()
        .map(|panel| -> Result<ResolvedPanel, FloorScriptError> {
            Ok(ResolvedPanel { position: resolve_point(&panel.position, units)?, amps: panel.amps, label: panel.label.clone() })
        })
        .transpose()?;

    let outlets = config
        .outlets
        .iter()
        .map(|outlet| resolve_wall_element(outlet, graph, units))
        .collect::<Result<Vec<_>, _>>()?;
    let switches = config
        .switches
        .iter()
        .map(|switch| resolve_wall_element(switch, graph, units))
        .collect::<Result<Vec<_>, _>>()?;

    let fixtures = config
        .fixtures
        .iter()
        .map(|fixture| resolve_point_element(fixture, units))
        .collect::<Result<Vec<_>, _>>()?;
    let smoke_detectors = config
        .smoke_detectors
        .iter()
        .map(|detector| resolve_point_element(detector, units))
        .collect::<Result<Vec<_>, _>>()?;

    let runs = config.runs.iter().map(|run| resolve_run(run, units)).collect::<Result<Vec<_>, _>>()?;

    Ok(ResolvedElectrical { panel, outlets, switches, fixtures, smoke_detectors, runs })
}

fn resolve_wall_element(
    config: &WallElementConfig,
    graph: &WallGraph,
    units: UnitSystem,
) -> Result<ResolvedWallElement, FloorScriptError> {
    let along_wall = parse_dimension(config.position.along_wall(), units)?;
    let wall = find_wall_by_id(graph, &config.wall)?;
    let position = position_on_centerline(wall, along_wall);
    Ok(ResolvedWallElement {
        element_type: config.element_type.clone(),
        position,
        wall_ref: config.wall.clone(),
        circuit: config.circuit,
    })
}

fn resolve_point_element(
    config: &PointElementConfig,
    units: UnitSystem,
) -> Result<ResolvedPointElement, FloorScriptError> {
    Ok(ResolvedPointElement { element_type: config.element_type.clone(), position: resolve_point(&config.position, units)? })
}

fn resolve_run(config: &RunConfig, units: UnitSystem) -> Result<ResolvedRun, FloorScriptError> {
    let path = config.path.iter().map(|point| resolve_point(point, units)).collect::<Result<Vec<_>, _>>()?;
    Ok(ResolvedRun { circuit: config.circuit, style: config.style.unwrap_or_default(), path })
}

fn resolve_point(
    raw: &[crate::dimension::Dimension; 2],
    units: UnitSystem,
) -> Result<Point, FloorScriptError> {
    Ok(Point::new(parse_dimension(&raw[0], units)?, parse_dimension(&raw[1], units)?))
}
