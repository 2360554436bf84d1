//! Tiles, headings, and the moves a snake can answer a tick with.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The direction a snake is facing. North is towards increasing `y`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Get the heading after turning right.
    #[must_use]
    pub fn right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Get the heading after turning left.
    #[must_use]
    pub fn left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }
}

/// What a tile is filled with. Only one thing occupies a tile at a time.
///
/// The shape mirrors the wire format exactly: `index = 0` on a
/// [`Tile::SnakeBody`] is the tip of the tail.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Tile {
    SnakeBody { id: u64, index: usize },
    SnakeHead { id: u64, dir: Heading },
    Doodah,
    Wall,
    Blank,
}

impl Tile {
    /// Whether a snake can move onto this tile without dying.
    ///
    /// A tail segment counts as safe: it vacates its tile on the same tick
    /// the head would arrive.
    #[must_use]
    pub fn is_safe(self) -> bool {
        match self {
            Tile::Blank | Tile::Doodah | Tile::SnakeBody { index: 0, .. } => true,
            Tile::SnakeBody { .. } | Tile::SnakeHead { .. } | Tile::Wall => false,
        }
    }

    /// Whether this tile is worth moving towards.
    #[must_use]
    pub fn is_goal(self) -> bool {
        matches!(self, Tile::Doodah)
    }
}

/// An answer to one tick: turn, or keep going.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Move {
    Forward,
    Left,
    Right,
}

impl Move {
    pub const VARIANTS: [Move; 3] = [Move::Forward, Move::Left, Move::Right];

    /// The heading a snake ends up with after making this move.
    #[must_use]
    pub fn apply(self, heading: Heading) -> Heading {
        match self {
            Move::Forward => heading,
            Move::Left => heading.left(),
            Move::Right => heading.right(),
        }
    }

    /// The literal the server expects on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Forward => "Forward",
            Move::Left => "Left",
            Move::Right => "Right",
        }
    }

    #[must_use]
    pub fn random<R: Rng>(rng: &mut R) -> Move {
        Move::VARIANTS[rng.gen_range(0..Move::VARIANTS.len())]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Move {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "Forward" => Ok(Move::Forward),
            "Left" => Ok(Move::Left),
            "Right" => Ok(Move::Right),
            other => Err(format!("not a move: {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_left_then_right_is_identity() {
        for heading in [Heading::North, Heading::East, Heading::South, Heading::West] {
            assert_eq!(heading.left().right(), heading);
            assert_eq!(heading.right().left(), heading);
        }
    }

    #[test]
    fn four_right_turns_are_identity() {
        for heading in [Heading::North, Heading::East, Heading::South, Heading::West] {
            assert_eq!(heading.right().right().right().right(), heading);
            assert_eq!(heading.left().left().left().left(), heading);
        }
    }

    #[test]
    fn safety_covers_every_variant() {
        assert!(Tile::Blank.is_safe());
        assert!(Tile::Doodah.is_safe());
        assert!(Tile::SnakeBody { id: 3, index: 0 }.is_safe());
        assert!(!Tile::SnakeBody { id: 3, index: 1 }.is_safe());
        assert!(!Tile::SnakeBody { id: 3, index: 7 }.is_safe());
        assert!(!Tile::SnakeHead {
            id: 3,
            dir: Heading::North
        }
        .is_safe());
        assert!(!Tile::Wall.is_safe());
    }

    #[test]
    fn only_doodahs_are_goals() {
        assert!(Tile::Doodah.is_goal());
        assert!(!Tile::Blank.is_goal());
        assert!(!Tile::Wall.is_goal());
        assert!(!Tile::SnakeBody { id: 0, index: 0 }.is_goal());
    }

    #[test]
    fn moves_round_trip_through_their_literals() {
        for step in Move::VARIANTS {
            assert_eq!(step.as_str().parse::<Move>(), Ok(step));
        }
        assert!("North".parse::<Move>().is_err());
        assert!("forward".parse::<Move>().is_err());
    }
}
