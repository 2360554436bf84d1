//! Keeps the bot playing: one session after another, with a pause between
//! attempts, until interrupted or out of attempts.

use log::{error, info, warn};
use tokio::time::sleep;

use crate::bots::snake_bot::SnakeBot;
use crate::client::session::{self, SessionEnd};
use crate::config::Config;

/// What the supervisor has been through so far.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RetryStats {
    /// Connection attempts made, successful games included.
    pub attempts: u64,
    /// The failure that ended the most recent attempt, if it was one.
    pub last_failure: Option<String>,
}

/// Run sessions until Ctrl-C (or until the configured attempt cap runs
/// out). A lost connection or a bad frame never ends the process; it is
/// logged, counted, and retried after the configured delay.
pub async fn run(config: &Config, bot: &mut dyn SnakeBot) -> RetryStats {
    let mut stats = RetryStats::default();
    loop {
        stats.attempts += 1;
        let outcome = tokio::select! {
            outcome = session::run(config, bot) => outcome,
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted mid-session, shutting down");
                return stats;
            }
        };
        match outcome {
            Ok(SessionEnd::ServerError(msg)) => {
                warn!("attempt {}: server reported: {}", stats.attempts, msg);
                stats.last_failure = Some(msg);
            }
            Ok(end) => {
                info!("attempt {}: {}", stats.attempts, end);
                stats.last_failure = None;
            }
            Err(err) => {
                error!("attempt {}: {}", stats.attempts, err);
                stats.last_failure = Some(err.to_string());
            }
        }

        if let Some(cap) = config.attempt_cap() {
            if stats.attempts >= cap {
                warn!("out of attempts after {}, stopping", stats.attempts);
                return stats;
            }
        }

        info!("reconnecting in {:?}", config.retry_delay());
        tokio::select! {
            () = sleep(config.retry_delay()) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, shutting down");
                return stats;
            }
        }
    }
}
