//! A per-tick snapshot of the playing field.
//!
//! The map is a torus: stepping past the last row or column reenters at the
//! first, so every coordinate lookup wraps and there is no such thing as an
//! out-of-range tile.

use crate::models::tile::{Heading, Tile};

/// Problems turning a server snapshot into a usable world, or querying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The tile list does not cover the map exactly once.
    TileCountMismatch { expected: usize, actual: usize },
    /// The map has a zero dimension, so no position exists on it.
    ZeroDimension,
    /// Our own head is nowhere on the map.
    AgentNotFound(u64),
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldError::TileCountMismatch { expected, actual } => {
                write!(f, "map should have {expected} tiles but has {actual}")
            }
            WorldError::ZeroDimension => write!(f, "map has a zero dimension"),
            WorldError::AgentNotFound(id) => write!(f, "snake head {id} not found on the map"),
        }
    }
}

impl std::error::Error for WorldError {}

type Result<T> = std::result::Result<T, WorldError>;

/// A position on the map, always in canonical (wrapped) form.
///
/// Positions are only handed out by [`World`], which wraps coordinates
/// before constructing one, so equality and hashing never disagree about
/// two names for the same tile.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    #[must_use]
    pub fn x(self) -> usize {
        self.x
    }

    #[must_use]
    pub fn y(self) -> usize {
        self.y
    }
}

/// The tile grid received from the server, rebuilt fresh every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl World {
    /// Build a world from raw snapshot data, row-major with
    /// `index = x + y * width`.
    ///
    /// # Errors
    ///
    /// Fails if either dimension is zero or the tile list does not have
    /// exactly `width * height` entries.
    pub fn new(width: u32, height: u32, tiles: Vec<Tile>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(WorldError::ZeroDimension);
        }
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(WorldError::TileCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bring any pair of coordinates into canonical form.
    #[must_use]
    pub fn wrap(&self, x: i64, y: i64) -> Position {
        Position {
            x: modulo(x, self.width),
            y: modulo(y, self.height),
        }
    }

    /// The tile at the given coordinates. Wraps around, so this is total
    /// over all integers.
    #[must_use]
    pub fn tile_at(&self, x: i64, y: i64) -> Tile {
        self.tile(self.wrap(x, y))
    }

    /// The tile at an already-canonical position.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Tile {
        self.tiles[pos.x + pos.y * self.width as usize]
    }

    /// The position one step in the given direction, wrapped.
    #[must_use]
    pub fn position_in_direction(&self, pos: Position, heading: Heading) -> Position {
        let x = pos.x as i64;
        let y = pos.y as i64;
        let (x, y) = match heading {
            Heading::North => (x, y + 1),
            Heading::South => (x, y - 1),
            Heading::East => (x + 1, y),
            Heading::West => (x - 1, y),
        };
        self.wrap(x, y)
    }

    /// The tile one step in the given direction.
    #[must_use]
    pub fn tile_in_direction(&self, pos: Position, heading: Heading) -> Tile {
        self.tile(self.position_in_direction(pos, heading))
    }

    /// Find the first tile matching the predicate, scanning row-major with
    /// `x` varying fastest. The scan order is fixed so lookups are
    /// reproducible.
    pub fn find_first(&self, pred: impl Fn(Tile) -> bool) -> Option<Position> {
        self.tiles.iter().position(|&tile| pred(tile)).map(|index| {
            let width = self.width as usize;
            Position {
                x: index % width,
                y: index / width,
            }
        })
    }

    /// Find our own head and the direction it is facing.
    ///
    /// # Errors
    ///
    /// Fails with [`WorldError::AgentNotFound`] when no head with our id is
    /// on the map; the caller must abort the tick rather than guess.
    pub fn locate_self(&self, my_id: u64) -> Result<(Position, Heading)> {
        for (index, tile) in self.tiles.iter().enumerate() {
            if let Tile::SnakeHead { id, dir } = *tile {
                if id == my_id {
                    let width = self.width as usize;
                    return Ok((
                        Position {
                            x: index % width,
                            y: index / width,
                        },
                        dir,
                    ));
                }
            }
        }
        Err(WorldError::AgentNotFound(my_id))
    }
}

/// Euclidean remainder, cast back to an index. `rem_euclid` of a positive
/// modulus is never negative, so the cast cannot lose anything.
fn modulo(value: i64, modulus: u32) -> usize {
    usize::try_from(value.rem_euclid(i64::from(modulus))).unwrap_or_default()
}
