use clap::Parser;
use std::path::PathBuf;

/// Startup settings for the league server.
/// Every flag can also be given through the environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Poker league server", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
    pub bind: String,
    /// JSON file holding the league
    #[arg(long, env = "DATABASE_FILE", default_value = "game.db.json")]
    pub database: PathBuf,
    /// Page served at /game/
    #[arg(long, env = "GAME_TEMPLATE", default_value = "html/game.html")]
    pub template: PathBuf,
    /// HTTP worker threads
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    /// Seconds to let in-flight requests finish on shutdown
    #[arg(long, env = "SHUTDOWN_GRACE", default_value_t = crate::SHUTDOWN_GRACE)]
    pub grace: u64,
    /// Keep the league in memory instead of on disk
    #[arg(long, env = "EPHEMERAL", default_value_t = false)]
    pub ephemeral: bool,
}
