//! The connection side of the bot: one session speaks the line protocol,
//! the supervisor keeps starting sessions until it is told to stop.

pub mod protocol;
pub mod session;
pub mod supervisor;

use crate::models::world::WorldError;

/// Everything that can end a connection attempt early.
#[derive(Debug)]
pub enum ClientError {
    /// Connecting, reading or writing failed (a hung read that blows the
    /// read deadline lands here too). The supervisor will retry.
    Connection(std::io::Error),
    /// The peer sent something the protocol does not allow.
    Protocol(String),
    /// A playing snapshot arrived without our head on it.
    AgentNotFound(u64),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Connection(err) => write!(f, "connection failed: {err}"),
            ClientError::Protocol(what) => write!(f, "protocol violation: {what}"),
            ClientError::AgentNotFound(id) => {
                write!(f, "snake head {id} missing from a playing snapshot")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Connection(err) => Some(err),
            ClientError::Protocol(_) | ClientError::AgentNotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Connection(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Protocol(err.to_string())
    }
}

impl From<WorldError> for ClientError {
    fn from(err: WorldError) -> Self {
        match err {
            WorldError::AgentNotFound(id) => ClientError::AgentNotFound(id),
            other => ClientError::Protocol(other.to_string()),
        }
    }
}

type Result<T> = std::result::Result<T, ClientError>;
