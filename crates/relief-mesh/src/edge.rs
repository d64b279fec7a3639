use serde::{Deserialize, Serialize};

/// Side of a tile, in the tile's raster orientation (row 0 is `Top`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top = 0,
    Bottom = 1,
    Right = 2,
    Left = 3,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Right, Edge::Left];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Right => "right",
            Edge::Left => "left",
        }
    }
}
