// Electrical resolver data model. Wall-mounted elements (outlets,
// switches) are placed by wall reference plus an along-wall position;
// fixtures, smoke detectors, and the panel carry absolute plan positions;
// runs are circuit polylines.

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::geometry::Point;

/// An along-wall position: either a single dimension, or a 2-tuple whose
/// first element is the along-wall component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlongWallPosition {
    Single(Dimension),
    Pair([Dimension; 2]),
}

impl AlongWallPosition {
    pub fn along_wall(&self) -> &Dimension {
        match self {
            AlongWallPosition::Single(d) => d,
            AlongWallPosition::Pair([d, _]) => d,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStyle {
    Solid,
    Dashed,
}

impl Default for RunStyle {
    fn default() -> Self {
        RunStyle::Solid
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    pub position: [Dimension; 2],
    pub amps: f64,
    #[serde(default)]
    pub label: Option<String>,
}

/// A wall-mounted element (outlet or switch) as authored in the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallElementConfig {
    #[serde(rename = "type")]
    pub element_type: String,
    pub position: AlongWallPosition,
    pub wall: String,
    pub circuit: u32,
}

/// A fixture or smoke detector: an absolute plan position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointElementConfig {
    #[serde(rename = "type")]
    pub element_type: String,
    pub position: [Dimension; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub circuit: u32,
    pub path: Vec<[Dimension; 2]>,
    #[serde(default)]
    pub style: Option<RunStyle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElectricalConfig {
    #[serde(default)]
    pub panel: Option<PanelConfig>,
    #[serde(default)]
    pub outlets: Vec<WallElementConfig>,
    #[serde(default)]
    pub switches: Vec<WallElementConfig>,
    #[serde(default)]
    pub fixtures: Vec<PointElementConfig>,
    #[serde(default, rename = "smokeDetectors")]
    pub smoke_detectors: Vec<PointElementConfig>,
    #[serde(default)]
    pub runs: Vec<RunConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPanel {
    pub position: Point,
    pub amps: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedWallElement {
    pub element_type: String,
    pub position: Point,
    pub wall_ref: String,
    pub circuit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPointElement {
    pub element_type: String,
    pub position: Point,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedRun {
    pub circuit: u32,
    pub style: RunStyle,
    pub path: Vec<Point>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedElectrical {
    pub panel: Option<ResolvedPanel>,
    pub outlets: Vec<ResolvedWallElement>,
    pub switches: Vec<ResolvedWallElement>,
    pub fixtures: Vec<ResolvedPointElement>,
    pub smoke_detectors: Vec<ResolvedPointElement>,
    pub runs: Vec<ResolvedRun>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn along_wall_position_pair_takes_first_element() {
        let pos = AlongWallPosition::Pair([Dimension::Numeric(3.0), Dimension::Numeric(0.0)]);
        assert_eq!(pos.along_wall(), &Dimension::Numeric(3.0));
    }

    #[test]
    fn run_style_defaults_to_solid() {
        assert_eq!(RunStyle::default(), RunStyle::Solid);
    }
}
