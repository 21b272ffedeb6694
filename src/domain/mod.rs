// Domain module — the data model shared by every resolver stage.

pub mod dimension_line;
pub mod direction;
pub mod electrical;
pub mod enclosure;
pub mod extension;
pub mod opening;
pub mod plan;
pub mod plumbing;
pub mod room;
pub mod wallgraph;

pub use dimension_line::{DimensionOrientation, ResolvedDimension};
pub use direction::{CardinalDirection, WallType};
pub use electrical::{
    AlongWallPosition, ElectricalConfig, PanelConfig, PointElementConfig, ResolvedElectrical,
    ResolvedPanel, ResolvedPointElement, ResolvedRun, ResolvedWallElement, RunConfig, RunStyle,
    WallElementConfig,
};
pub use enclosure::{EnclosureConfig, ResolvedEnclosure};
pub use extension::{ExtensionConfig, ResolvedExtension, WallGap};
pub use opening::{DoorStyle, DoorSwing, OpeningConfig, OpeningType, ResolvedOpening};
pub use plan::{ResolvedPlan, Severity, ValidationIssue, ValidationResult};
pub use plumbing::{
    PipeRunConfig, PlumbingConfig, PlumbingFixtureConfig, PlumbingPosition, ResolvedPipeRun,
    ResolvedPlumbing, ResolvedPlumbingFixture,
};
pub use room::{ResolvedRoom, ResolvedWall, RoomConfig, WallConfig};
pub use wallgraph::{PlanWall, WallComposition, WallGraph, WallSource};
