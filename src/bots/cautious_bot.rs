use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::bots::snake_bot::SnakeBot;
use crate::models::search::safe_steps;
use crate::models::tile::Move;
use crate::models::world::{World, WorldError};

/// Picks a random move among those that are safe this tick, with no
/// lookahead. Goes forward into whatever is there when boxed in.
#[derive(Debug)]
pub struct CautiousBot {
    rng: StdRng,
}

impl CautiousBot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for CautiousBot {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeBot for CautiousBot {
    fn choose_move(&mut self, my_id: u64, world: &World) -> Result<Move, WorldError> {
        let (pos, heading) = world.locate_self(my_id)?;
        let options = safe_steps(world, pos, heading);
        Ok(options
            .choose(&mut self.rng)
            .map_or(Move::Forward, |&(_, _, step)| step))
    }
}
