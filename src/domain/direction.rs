// Cardinal direction and wall-type enumerations shared by every resolver
// stage. Kept as closed, exhaustively-matched sum types — unknown values
// are a schema error, never something geometry code has to account for.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    /// Fixed emission order used everywhere a room's four walls are listed.
    pub const ORDER: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub fn opposite(self) -> CardinalDirection {
        match self {
            CardinalDirection::North => CardinalDirection::South,
            CardinalDirection::South => CardinalDirection::North,
            CardinalDirection::East => CardinalDirection::West,
            CardinalDirection::West => CardinalDirection::East,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, CardinalDirection::North | CardinalDirection::South)
    }

    /// Index used for the "N, S, E, W" tie-break order.
    pub fn order_index(self) -> usize {
        Self::ORDER.iter().position(|d| *d == self).unwrap()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardinalDirection::North => "north",
            CardinalDirection::South => "south",
            CardinalDirection::East => "east",
            CardinalDirection::West => "west",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" => Some(CardinalDirection::North),
            "south" => Some(CardinalDirection::South),
            "east" => Some(CardinalDirection::East),
            "west" => Some(CardinalDirection::West),
            _ => None,
        }
    }
}

/// Wall type — drives default composition thickness and line weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallType {
    Exterior,
    Interior,
    LoadBearing,
}

impl Default for WallType {
    fn default() -> Self {
        WallType::Interior
    }
}

impl WallType {
    /// Line weight used by downstream rendering.
    pub fn line_weight(self) -> f64 {
        match self {
            WallType::Exterior => 0.7,
            WallType::Interior | WallType::LoadBearing => 0.5,
        }
    }
}
