// The resolver's closed error taxonomy. Every variant is fatal at the
// point it's raised — none are recovered locally, they all abort the
// resolve. Warnings produced by the validator are a separate concern; they
// travel in `ValidationResult` and are never raised as errors.

use thiserror::Error;

use crate::units::UnitSystem;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FloorScriptError {
    #[error("could not parse config as JSON or YAML: {yaml_diagnostic}")]
    Parse { yaml_diagnostic: String },

    #[error("Invalid FloorScript config:\n{}", format_schema_issues(.issues))]
    Schema { issues: Vec<SchemaIssue> },

    #[error("invalid dimension {input:?} for {units:?} units")]
    InvalidDimension { input: String, units: UnitSystem },

    #[error("malformed wall reference {reference:?}, expected \"roomId.direction\"")]
    MalformedWallRef { reference: String },

    #[error("invalid wall direction {direction:?} in reference {reference:?}")]
    InvalidWallDirection { reference: String, direction: String },

    #[error("unknown room {room_id:?}")]
    UnknownRoom { room_id: String },

    #[error("room {room_id:?} has no wall facing {direction:?}")]
    WallNotOnRoom { room_id: String, direction: String },

    #[error("unknown fixture {fixture_id:?}")]
    UnknownFixture { fixture_id: String },

    #[error("duplicate sub-space id {sub_space_id:?} in room {room_id:?}")]
    DuplicateExtensionId { room_id: String, sub_space_id: String },

    #[error("sub-space {sub_space_id:?} in room {room_id:?} is out of bounds: {message}")]
    ExtensionOutOfBounds { room_id: String, sub_space_id: String, message: String },

    #[error(
        "incompatible shared wall between {room_a:?} and {room_b:?} on {direction:?}: {message}"
    )]
    IncompatibleSharedWall {
        room_a: String,
        room_b: String,
        direction: String,
        message: String,
    },

    #[error(
        "plumbing fixture {fixture_id:?} gives a bare position with no `wall`; this crate \
         rejects the legacy zero-y convention instead of guessing"
    )]
    AmbiguousFixturePosition { fixture_id: String },
}

/// A single structural/schema-level complaint about the raw config, keyed
/// by a JSON-pointer-ish path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    pub path: String,
    pub message: String,
}

impl SchemaIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

fn format_schema_issues(issues: &[SchemaIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}: {}", issue.path, issue.message))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type FloorScriptResult<T> = Result<T, FloorScriptError>;
