//! Poker league server.
//!
//! A player ledger persisted as a single JSON document, a blind alert
//! scheduler, and the game sessions that tie the two together. The
//! `server` feature adds the actix-web router, configuration, and the
//! terminal front-end.
//!
//! ## Modules
//!
//! - [`league`] — Player records and the league table
//! - [`store`] — Persistent and in-memory ledger backends
//! - [`blinds`] — Blind schedule, timer task, and alert sinks
//! - [`game`] — Game orchestration and per-connection sessions
//! - [`hosting`] — HTTP and WebSocket routes
//! - [`cli`] — Terminal front-end

pub mod blinds;
#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "server")]
pub mod config;
pub mod game;
#[cfg(feature = "server")]
pub mod hosting;
pub mod league;
pub mod store;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Blind amounts in chips.
pub type Chips = u32;
/// Recorded wins for a single player.
pub type Wins = u32;

// ============================================================================
// BLIND SCHEDULE
// Alerts step through BLINDS every (BLIND_BASE_MINUTES + players) minutes.
// ============================================================================
/// Ascending blind amounts, one alert per entry.
pub const BLINDS: [Chips; 11] = [100, 200, 300, 400, 500, 600, 800, 1000, 2000, 4000, 8000];
/// Minutes added to the player count to get the blind interval.
pub const BLIND_BASE_MINUTES: u64 = 5;
/// Largest table a game can be started for.
pub const MAX_PLAYERS: usize = 100;

// ============================================================================
// PROMPTS
// Shared between the terminal front-end and the WebSocket protocol.
// ============================================================================
/// Printed before reading the player count.
pub const PLAYER_PROMPT: &str = "Please enter the number of players: ";
/// Sent back when the player count is not a number, or is above MAX_PLAYERS.
pub const INVALID_COUNT: &str =
    "Bad value received for number of players, please try again with a number";

// ============================================================================
// SERVER DEFAULTS
// ============================================================================
/// Seconds in-flight requests get to finish after a shutdown signal.
pub const SHUTDOWN_GRACE: u64 = 5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
