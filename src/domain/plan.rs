// The fully resolved plan and the validator's output.

use serde::{Deserialize, Serialize};

use crate::domain::dimension_line::ResolvedDimension;
use crate::domain::electrical::ResolvedElectrical;
use crate::domain::plumbing::ResolvedPlumbing;
use crate::domain::room::ResolvedRoom;
use crate::domain::wallgraph::WallGraph;
use crate::geometry::Rect;
use crate::units::UnitSystem;

/// The fully resolved output of one plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPlan {
    pub project_title: String,
    pub units: UnitSystem,
    pub id: String,
    pub title: String,
    pub rooms: Vec<ResolvedRoom>,
    pub wall_graph: WallGraph,
    pub dimensions: Vec<ResolvedDimension>,
    /// Axis-aligned union of all room bounds, extension bounds, and
    /// enclosure bounds.
    pub bounds: Rect,
    pub electrical: Option<ResolvedElectrical>,
    pub plumbing: Option<ResolvedPlumbing>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One lint finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self { code, severity: Severity::Error, message: message.into() }
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self { code, severity: Severity::Warning, message: message.into() }
    }
}

/// The validator's output: issues split by severity, each list stable
/// within itself and ordered by the order rules ran in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
