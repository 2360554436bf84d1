//! The wire shapes of the line protocol.
//!
//! Every line from the server is one JSON object keyed on its `state`
//! field; every line to the server is either the plain-text client name
//! (once, on connect) or one of the three move literals.

use serde::{Deserialize, Serialize};

use crate::models::tile::Tile;
use crate::models::world::{World, WorldError};

/// The map as it appears inside a tick frame, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<Tile>,
}

impl MapData {
    /// Validate the snapshot into a [`World`].
    ///
    /// # Errors
    ///
    /// Fails when the tile list does not cover `width * height` exactly.
    pub fn into_world(self) -> Result<World, WorldError> {
        World::new(self.width, self.height, self.tiles)
    }
}

/// One line from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ServerFrame {
    /// The game is on; here is our assigned snake id.
    Start { id: u64 },
    /// A snapshot of the field; answer with exactly one move.
    Playing { map: MapData },
    /// We died. The connection is done for.
    Dead,
    /// The game ended. The connection is done for.
    Done,
    /// The server rejected something we sent.
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        msg: Option<String>,
    },
}
