// Unit system — determines the canonical unit and which dimension grammar
// a config's symbolic dimensions are parsed with.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Imperial,
    Metric,
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::Imperial
    }
}
