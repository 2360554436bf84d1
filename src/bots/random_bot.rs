use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bots::snake_bot::SnakeBot;
use crate::models::tile::Move;
use crate::models::world::{World, WorldError};

/// Picks any of the three moves with no regard for survival. Mostly useful
/// as a sparring partner and as a protocol smoke test.
#[derive(Debug)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeBot for RandomBot {
    fn choose_move(&mut self, _my_id: u64, _world: &World) -> Result<Move, WorldError> {
        Ok(Move::random(&mut self.rng))
    }
}
