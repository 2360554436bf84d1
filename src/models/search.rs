//! Breadth-first search for the nearest doodah.
//!
//! The search runs over `(position, heading)` states, not positions alone:
//! which of the three moves is safe depends on the direction of travel, and
//! on a torus a position-only visited set would let the frontier loop
//! around the map forever. The state space is bounded by
//! `width * height * 4`, so the search always terminates.

use std::collections::{HashSet, VecDeque};

use crate::models::tile::{Heading, Move};
use crate::models::world::{Position, World};

/// The safe immediate steps from a state, as `(position, heading, move)`
/// triples, in the fixed order forward, left, right.
#[must_use]
pub fn safe_steps(world: &World, pos: Position, heading: Heading) -> Vec<(Position, Heading, Move)> {
    let mut steps = Vec::with_capacity(3);
    for choice in Move::VARIANTS {
        let dir = choice.apply(heading);
        let next = world.position_in_direction(pos, dir);
        if world.tile(next).is_safe() {
            steps.push((next, dir, choice));
        }
    }
    steps
}

/// Find the first move of a shortest safe path to the nearest doodah.
///
/// Each branch of the search carries the top-level move that started it, so
/// the moment a doodah is dequeued we know which of forward/left/right to
/// answer with. Returns `None` when every doodah is unreachable or there is
/// none; that is an ordinary outcome, not an error.
#[must_use]
pub fn first_move_toward_doodah(world: &World, start: Position, heading: Heading) -> Option<Move> {
    let mut seen: HashSet<(Position, Heading)> = HashSet::new();
    let mut frontier: VecDeque<(Position, Heading, Move)> = VecDeque::new();

    seen.insert((start, heading));
    for (pos, dir, choice) in safe_steps(world, start, heading) {
        seen.insert((pos, dir));
        frontier.push_back((pos, dir, choice));
    }

    while let Some((pos, dir, choice)) = frontier.pop_front() {
        if world.tile(pos).is_goal() {
            return Some(choice);
        }
        for (next, next_dir, _) in safe_steps(world, pos, dir) {
            if seen.insert((next, next_dir)) {
                frontier.push_back((next, next_dir, choice));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tile::Tile;
    use crate::models::world::World;

    /// Parse a little map picture: `.` blank, `#` wall, `*` doodah,
    /// `^>v<` our head facing North/East/South/West. Row 0 of the picture
    /// is the top of the map, which is the highest `y`.
    fn world_from_picture(picture: &[&str]) -> (World, Position, Heading) {
        let height = picture.len();
        let width = picture[0].len();
        let mut tiles = vec![Tile::Blank; width * height];
        let mut start = None;
        for (row, line) in picture.iter().enumerate() {
            let y = height - 1 - row;
            for (x, c) in line.chars().enumerate() {
                let tile = match c {
                    '.' => Tile::Blank,
                    '#' => Tile::Wall,
                    '*' => Tile::Doodah,
                    't' => Tile::SnakeBody { id: 2, index: 0 },
                    'B' => Tile::SnakeBody { id: 2, index: 1 },
                    '^' | '>' | 'v' | '<' => {
                        let dir = match c {
                            '^' => Heading::North,
                            '>' => Heading::East,
                            'v' => Heading::South,
                            _ => Heading::West,
                        };
                        start = Some((x, y, dir));
                        Tile::SnakeHead { id: 1, dir }
                    }
                    other => panic!("bad picture tile {other:?}"),
                };
                tiles[x + y * width] = tile;
            }
        }
        let world = World::new(
            u32::try_from(width).unwrap(),
            u32::try_from(height).unwrap(),
            tiles,
        )
        .unwrap();
        let (x, y, dir) = start.expect("picture has no head");
        let pos = world.wrap(i64::try_from(x).unwrap(), i64::try_from(y).unwrap());
        (world, pos, dir)
    }

    #[test]
    fn follows_a_corridor_to_the_doodah() {
        let (world, pos, dir) = world_from_picture(&[
            "##*##", //
            "##.##", //
            "##^##", //
            "##.##", //
            "#####",
        ]);
        assert_eq!(first_move_toward_doodah(&world, pos, dir), Some(Move::Forward));
    }

    #[test]
    fn turns_when_forward_is_blocked() {
        let (world, pos, dir) = world_from_picture(&[
            "#*#", //
            "#>#", //
            "###",
        ]);
        assert_eq!(first_move_toward_doodah(&world, pos, dir), Some(Move::Left));

        let (world, pos, dir) = world_from_picture(&[
            "###", //
            "#>#", //
            "#*#",
        ]);
        assert_eq!(first_move_toward_doodah(&world, pos, dir), Some(Move::Right));
    }

    #[test]
    fn follows_the_route_around_an_inner_wall() {
        let (world, pos, dir) = world_from_picture(&[
            "#####", //
            "#...#", //
            "#.#.#", //
            "#^#*#", //
            "#####",
        ]);
        // the route loops up and over the inner wall, starting forward
        assert_eq!(first_move_toward_doodah(&world, pos, dir), Some(Move::Forward));
    }

    #[test]
    fn reaches_a_doodah_across_the_seam() {
        let (world, pos, dir) = world_from_picture(&[
            "#####", //
            "#####", //
            "*###>", //
            "#####",
        ]);
        // facing East at the east edge; one forward step wraps onto the doodah
        assert_eq!(first_move_toward_doodah(&world, pos, dir), Some(Move::Forward));
    }

    #[test]
    fn no_path_when_the_doodah_is_walled_off() {
        let (world, pos, dir) = world_from_picture(&[
            "#####", //
            "#*#.#", //
            "###.#", //
            "#.#^#", //
            "#####",
        ]);
        assert_eq!(first_move_toward_doodah(&world, pos, dir), None);
    }

    #[test]
    fn no_path_when_there_is_no_doodah() {
        let (world, pos, dir) = world_from_picture(&[
            "....", //
            ".^..", //
            "....",
        ]);
        assert_eq!(first_move_toward_doodah(&world, pos, dir), None);
    }

    #[test]
    fn gives_up_immediately_with_no_safe_first_step() {
        let (world, pos, dir) = world_from_picture(&[
            "###", //
            "#^#", //
            "#.#",
        ]);
        // forward, left and right all hit walls; the blank behind the head
        // is not reachable by any move
        assert_eq!(first_move_toward_doodah(&world, pos, dir), None);
    }

    #[test]
    fn terminates_on_a_large_open_torus() {
        // 50x50 of blanks, no doodah: the search must visit every state at
        // most once and come back empty instead of looping on the torus
        let tiles = vec![Tile::Blank; 50 * 50];
        let world = World::new(50, 50, tiles).unwrap();
        let start = world.wrap(25, 25);
        assert_eq!(first_move_toward_doodah(&world, start, Heading::East), None);
    }

    #[test]
    fn tails_are_traversable_but_bodies_are_not() {
        let (world, pos, dir) = world_from_picture(&[
            "#####", //
            "#*t<#", //
            "#####",
        ]);
        assert_eq!(first_move_toward_doodah(&world, pos, dir), Some(Move::Forward));

        let (world, pos, dir) = world_from_picture(&[
            "#####", //
            "#*B<#", //
            "#####",
        ]);
        assert_eq!(first_move_toward_doodah(&world, pos, dir), None);
    }
}
