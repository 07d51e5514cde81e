use serde::{Deserialize, Serialize};

/// Compass direction a factory emits along, chosen once per effect.
///
/// Angles follow the N/NE/E/SE/S/SW/W/NW convention in y-down screen space:
/// arc center 0 means particles arrive from the top edge moving straight
/// down, 90 means they arrive from the left moving right, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpawnDirection {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl SpawnDirection {
    pub const ALL: [SpawnDirection; 8] = [
        SpawnDirection::Top,
        SpawnDirection::Bottom,
        SpawnDirection::Left,
        SpawnDirection::Right,
        SpawnDirection::TopLeft,
        SpawnDirection::TopRight,
        SpawnDirection::BottomLeft,
        SpawnDirection::BottomRight,
    ];

    /// Center of the initial-velocity arc, in degrees.
    pub fn arc_center_degrees(self) -> u32 {
        match self {
            SpawnDirection::Top => 0,
            SpawnDirection::Bottom => 180,
            SpawnDirection::Left => 90,
            SpawnDirection::Right => 270,
            SpawnDirection::TopLeft => 45,
            SpawnDirection::TopRight => 315,
            SpawnDirection::BottomLeft => 135,
            SpawnDirection::BottomRight => 225,
        }
    }

    /// Width of the initial-velocity arc, in degrees.
    ///
    /// Edge directions emit in a narrow forward cone; corner directions
    /// drift across a wide one. Visual tuning, not physics; keep as is.
    pub fn arc_spread_degrees(self) -> u32 {
        match self {
            SpawnDirection::Top
            | SpawnDirection::Bottom
            | SpawnDirection::Left
            | SpawnDirection::Right => 35,
            SpawnDirection::TopLeft
            | SpawnDirection::TopRight
            | SpawnDirection::BottomLeft
            | SpawnDirection::BottomRight => 90,
        }
    }

    /// Whether particles travel mainly along the x axis (Left/Right
    /// emitters). Decides which velocity component a wander flip negates.
    pub fn is_horizontal(self) -> bool {
        matches!(self, SpawnDirection::Left | SpawnDirection::Right)
    }

    /// Edge directions spawn flush along one side of the anchor; corner
    /// directions spawn at one of its corners.
    pub fn is_edge(self) -> bool {
        matches!(
            self,
            SpawnDirection::Top
                | SpawnDirection::Bottom
                | SpawnDirection::Left
                | SpawnDirection::Right
        )
    }

    pub fn is_corner(self) -> bool {
        !self.is_edge()
    }
}
