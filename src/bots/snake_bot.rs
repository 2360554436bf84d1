use crate::models::tile::Move;
use crate::models::world::{World, WorldError};

use super::cautious_bot::CautiousBot;
use super::random_bot::RandomBot;
use super::seeker_bot::SeekerBot;

/// A source of moves for the session loop.
///
/// Anything that can answer a world snapshot with one of the three moves
/// can drive a game: the bots in this crate, or a frontend feeding through
/// user input.
pub trait SnakeBot {
    /// Pick the move for this tick from a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Fails when the bot cannot find its own head on the map; the tick
    /// must then be abandoned rather than answered with a guess.
    fn choose_move(&mut self, my_id: u64, world: &World) -> Result<Move, WorldError>;
}

/// The bots a session can be started with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum BotKind {
    /// Search out the nearest doodah, dodge everything else
    Seeker,
    /// Move at random, but never onto an unsafe tile
    Cautious,
    /// Move at random, full stop
    Random,
}

// this solution doesn't scale well but the number of bot types will be small so it works
impl BotKind {
    #[must_use]
    pub fn make_bot(self) -> Box<dyn SnakeBot> {
        match self {
            BotKind::Seeker => Box::new(SeekerBot::new()),
            BotKind::Cautious => Box::new(CautiousBot::new()),
            BotKind::Random => Box::new(RandomBot::new()),
        }
    }
}

impl std::fmt::Display for BotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotKind::Seeker => write!(f, "seeker"),
            BotKind::Cautious => write!(f, "cautious"),
            BotKind::Random => write!(f, "random"),
        }
    }
}
