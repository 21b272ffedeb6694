// The resolver pipeline: dimension-already-parsed geometry in,
// `ResolvedPlan` + `ValidationResult` out. `resolve` is the crate's single
// public entry point; everything else here is implementation detail reused
// across the pipeline's stages.

pub mod dimension_layout;
pub mod electrical_resolver;
pub mod enclosure_resolver;
pub mod extension_resolver;
pub mod layout;
pub mod opening_resolver;
pub mod plumbing_resolver;
pub mod segment_slicer;
pub mod validator;
pub mod wall_geometry;
pub mod wall_graph;
pub mod wall_ref;

use tracing::debug;

use crate::config::Config;
use crate::domain::plan::{ResolvedPlan, ValidationResult};
use crate::error::FloorScriptError;

/// Resolve every plan in a config document, running the validator over
/// each. The resolver never stops at the first plan's errors — each plan
/// fails independently.
pub fn resolve(config: &Config) -> Result<Vec<(ResolvedPlan, ValidationResult)>, FloorScriptError> {
    config
        .plans
        .iter()
        .map(|plan_config| {
            debug!(plan = %plan_config.id, "resolving plan");
            let resolved = layout::resolve_plan(&config.project.title, plan_config, config.units)?;
            let result = validator::validate(&resolved);
            Ok((resolved, result))
        })
        .collect()
}
