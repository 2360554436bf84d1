use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bots::snake_bot::SnakeBot;
use crate::models::search::{first_move_toward_doodah, safe_steps};
use crate::models::tile::Move;
use crate::models::world::{World, WorldError};

/// The default bot: breadth-first search toward the nearest doodah, with a
/// random safe move when nothing is reachable and a forced `Forward` when
/// nothing is safe at all (the protocol has no way to pass a tick).
///
/// The random fallback is deliberate: always taking, say, the first safe
/// option walks the snake into the same corner every game.
#[derive(Debug)]
pub struct SeekerBot {
    rng: StdRng,
}

impl SeekerBot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A bot with a fixed seed, so a run can be replayed move for move.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeekerBot {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeBot for SeekerBot {
    fn choose_move(&mut self, my_id: u64, world: &World) -> Result<Move, WorldError> {
        // first we need to find ourselves
        let (pos, heading) = world.locate_self(my_id)?;

        // then we search for the doodah
        if let Some(step) = first_move_toward_doodah(world, pos, heading) {
            debug!("doodah in reach, moving {}", step);
            return Ok(step);
        }

        // no path; take a random safe step if there is one
        let options = safe_steps(world, pos, heading);
        if options.is_empty() {
            warn!("nowhere safe to go, moving forward anyway");
            return Ok(Move::Forward);
        }
        let (_, _, step) = options[self.rng.gen_range(0..options.len())];
        debug!("no path to a doodah, moving {} at random", step);
        Ok(step)
    }
}
