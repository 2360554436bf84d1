use clap::Parser;
use log::{debug, info};
use snakepilot::client::supervisor;
use snakepilot::config::Config;

#[tokio::main]
async fn main() {
    std::env::set_var("RUST_LOG", "snakepilot=debug");
    env_logger::init();
    debug!("Debug on");

    let config = Config::parse();
    let mut bot = config.bot.make_bot();
    info!(
        "starting the {} bot against {}:{}",
        config.bot, config.host, config.port
    );
    let stats = supervisor::run(&config, bot.as_mut()).await;
    info!("stopped after {} connection attempts", stats.attempts);
}
