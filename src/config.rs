use std::time::Duration;

use clap::Parser;

use crate::bots::snake_bot::BotKind;

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "snakepilot", about = "Autonomous client for a toroidal snake game")]
pub struct Config {
    /// Game host to connect to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Game port
    #[arg(long, default_value_t = 3001)]
    pub port: u16,

    /// Name announced to the server on connect
    #[arg(long, default_value = "snakepilot")]
    pub name: String,

    /// Which bot picks the moves
    #[arg(long, value_enum, default_value_t = BotKind::Seeker)]
    pub bot: BotKind,

    /// Seconds to wait between reconnect attempts
    #[arg(long = "retry-delay", default_value_t = 5)]
    pub retry_delay_secs: u64,

    /// Give up after this many connection attempts (0 = retry forever)
    #[arg(long, default_value_t = 0)]
    pub max_attempts: u64,

    /// Seconds to wait for a line from the server before giving the
    /// connection up as hung (0 = wait forever)
    #[arg(long = "read-timeout", default_value_t = 30)]
    pub read_timeout_secs: u64,
}

impl Config {
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    /// The read deadline, or `None` when disabled.
    #[must_use]
    pub fn read_limit(&self) -> Option<Duration> {
        (self.read_timeout_secs > 0).then(|| Duration::from_secs(self.read_timeout_secs))
    }

    /// The attempt cap, or `None` when retrying forever.
    #[must_use]
    pub fn attempt_cap(&self) -> Option<u64> {
        (self.max_attempts > 0).then_some(self.max_attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_game_server() {
        let config = Config::parse_from(["snakepilot"]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3001);
        assert_eq!(config.bot, BotKind::Seeker);
        assert_eq!(config.retry_delay(), Duration::from_secs(5));
        assert_eq!(config.read_limit(), Some(Duration::from_secs(30)));
        assert_eq!(config.attempt_cap(), None);
    }

    #[test]
    fn zero_disables_the_optional_limits() {
        let config =
            Config::parse_from(["snakepilot", "--read-timeout", "0", "--max-attempts", "3"]);
        assert_eq!(config.read_limit(), None);
        assert_eq!(config.attempt_cap(), Some(3));
    }

    #[test]
    fn picks_a_bot_by_name() {
        let config = Config::parse_from(["snakepilot", "--bot", "cautious"]);
        assert_eq!(config.bot, BotKind::Cautious);
    }
}
