pub mod config;
pub mod dimension;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod resolve;
pub mod units;

pub use config::{load_str, Config};
pub use domain::plan::{ResolvedPlan, ValidationResult};
pub use error::{FloorScriptError, FloorScriptResult};
pub use resolve::resolve;
pub use units::UnitSystem;
