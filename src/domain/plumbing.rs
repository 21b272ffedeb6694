// Plumbing resolver data model — analogous to electrical.rs, but fixtures
// may be wall-relative (wall + offset from the inner face) instead of
// absolute, and runs connect fixture ids or wall references instead of
// carrying a circuit.

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::domain::electrical::{PointElementConfig, ResolvedPointElement, RunStyle};
use crate::geometry::Point;

/// A plumbing fixture's authored position: an absolute point, or a single
/// bare dimension with no accompanying `wall` — the latter is rejected by
/// the resolver; see `FloorScriptError::AmbiguousFixturePosition`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlumbingPosition {
    Point([Dimension; 2]),
    Bare(Dimension),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlumbingFixtureConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub fixture_type: String,
    #[serde(default)]
    pub wall: Option<String>,
    #[serde(default)]
    pub offset: Option<Dimension>,
    #[serde(default)]
    pub position: Option<PlumbingPosition>,
}

/// A supply or drain run: an explicit polyline, or endpoints that may be
/// fixture ids or wall references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeRunConfig {
    #[serde(default)]
    pub path: Option<Vec<[Dimension; 2]>>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub style: Option<RunStyle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlumbingConfig {
    #[serde(default)]
    pub fixtures: Vec<PlumbingFixtureConfig>,
    #[serde(default, rename = "supplyRuns")]
    pub supply_runs: Vec<PipeRunConfig>,
    #[serde(default, rename = "drainRuns")]
    pub drain_runs: Vec<PipeRunConfig>,
    #[serde(default)]
    pub valves: Vec<PointElementConfig>,
    #[serde(default, rename = "waterHeater")]
    pub water_heater: Option<PointElementConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPlumbingFixture {
    pub id: String,
    pub fixture_type: String,
    pub position: Point,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPipeRun {
    pub style: RunStyle,
    pub path: Vec<Point>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedPlumbing {
    pub fixtures: Vec<ResolvedPlumbingFixture>,
    pub supply_runs: Vec<ResolvedPipeRun>,
    pub drain_runs: Vec<ResolvedPipeRun>,
    pub valves: Vec<ResolvedPointElement>,
    pub water_heater: Option<ResolvedPointElement>,
}
