use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of tiles in a block (fixed 2x2 neighborhood).
pub const BLOCK_LEN: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
}

impl Tile {
    #[inline]
    pub const fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Number of tiles per axis at this tile's zoom.
    #[inline]
    pub fn grid_len(&self) -> u64 {
        1u64 << self.zoom
    }

    /// Tile one level up; `None` at zoom 0.
    #[inline]
    pub fn parent(self) -> Option<Tile> {
        if self.zoom == 0 {
            return None;
        }
        Some(Tile::new(self.x >> 1, self.y >> 1, self.zoom - 1))
    }

    /// The four tiles one level down, ordered NW, NE, SE, SW.
    #[inline]
    pub fn children(self) -> [Tile; BLOCK_LEN] {
        let (x, y, z) = (self.x * 2, self.y * 2, self.zoom + 1);
        [
            Tile::new(x, y, z),
            Tile::new(x + 1, y, z),
            Tile::new(x + 1, y + 1, z),
            Tile::new(x, y + 1, z),
        ]
    }

    /// Children of this tile's parent, including the tile itself.
    #[inline]
    pub fn siblings(self) -> Option<[Tile; BLOCK_LEN]> {
        self.parent().map(Tile::children)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Four tiles forming a 2x2 square: 0 = origin (north-west), 1 = east,
/// 2 = south-east, 3 = south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBlock {
    tiles: [Tile; BLOCK_LEN],
    target_index: usize,
}

impl TileBlock {
    /// Block of `target` and its three siblings.
    pub fn around(target: Tile) -> Option<TileBlock> {
        let tiles = target.siblings()?;
        let target_index = tiles.iter().position(|t| *t == target)?;
        Some(TileBlock {
            tiles,
            target_index,
        })
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile; BLOCK_LEN] {
        &self.tiles
    }

    #[inline]
    pub fn origin(&self) -> Tile {
        self.tiles[0]
    }

    /// The tile that contains the requested point.
    #[inline]
    pub fn target(&self) -> Tile {
        self.tiles[self.target_index]
    }

    #[inline]
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

impl<'a> IntoIterator for &'a TileBlock {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
