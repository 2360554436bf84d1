//! One connection to the game server, from handshake to terminal state.

use std::time::Duration;

use log::{debug, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::bots::snake_bot::SnakeBot;
use crate::client::protocol::ServerFrame;
use crate::client::{ClientError, Result};
use crate::config::Config;

/// How a connection attempt came to its regular end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Dead,
    Done,
    /// The server declared an error state; it will not talk to us further.
    ServerError(String),
}

impl std::fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEnd::Dead => write!(f, "we died"),
            SessionEnd::Done => write!(f, "game over"),
            SessionEnd::ServerError(msg) => write!(f, "server error: {msg}"),
        }
    }
}

/// The two halves of the stream plus the read deadline. One line in, one
/// line out; a write is always flushed before the next read starts, so at
/// most one move is ever in flight.
struct Link {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    limit: Option<Duration>,
}

impl Link {
    async fn send_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn next_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line);
        let count = match self.limit {
            Some(limit) => timeout(limit, read).await.map_err(|_| {
                std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    format!("no line from the server within {limit:?}"),
                )
            })??,
            None => read.await?,
        };
        if count == 0 {
            return Err(ClientError::Connection(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "server closed the connection",
            )));
        }
        Ok(line)
    }

    async fn next_frame(&mut self) -> Result<ServerFrame> {
        let line = self.next_line().await?;
        Ok(serde_json::from_str(line.trim_end())?)
    }
}

/// Run one full session: connect, introduce ourselves, then answer every
/// snapshot with a move until the server calls the game.
///
/// # Errors
///
/// Any I/O failure, malformed or unexpected frame, or snapshot without our
/// head ends the attempt; the caller decides whether to reconnect.
pub async fn run(config: &Config, bot: &mut dyn SnakeBot) -> Result<SessionEnd> {
    let stream = TcpStream::connect((config.host.as_str(), config.port)).await?;
    stream.set_nodelay(true)?;
    let (read_half, write_half) = stream.into_split();
    let mut link = Link {
        reader: BufReader::new(read_half),
        writer: write_half,
        limit: config.read_limit(),
    };

    link.send_line(&config.name).await?;
    info!(
        "connected to {}:{} as {:?}, waiting for the game to start",
        config.host, config.port, config.name
    );

    let my_id = match link.next_frame().await? {
        ServerFrame::Start { id } => id,
        other => {
            return Err(ClientError::Protocol(format!(
                "expected a start frame, got {other:?}"
            )))
        }
    };
    info!("game started, we are snake {}", my_id);

    let mut ticks: u64 = 0;
    loop {
        match link.next_frame().await? {
            ServerFrame::Playing { map } => {
                let world = map.into_world()?;
                let step = bot.choose_move(my_id, &world)?;
                debug!("tick {}: moving {}", ticks, step);
                link.send_line(step.as_str()).await?;
                ticks += 1;
            }
            ServerFrame::Dead => {
                info!("died after {} ticks", ticks);
                return Ok(SessionEnd::Dead);
            }
            ServerFrame::Done => {
                info!("game over after {} ticks", ticks);
                return Ok(SessionEnd::Done);
            }
            ServerFrame::Error { msg } => {
                let msg = msg.unwrap_or_else(|| "no message given".to_string());
                return Ok(SessionEnd::ServerError(msg));
            }
            ServerFrame::Start { .. } => {
                return Err(ClientError::Protocol(
                    "start frame in the middle of a game".to_string(),
                ))
            }
        }
    }
}
