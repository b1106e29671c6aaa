//! Terminal Game Binary
//!
//! Plays one game at the terminal against the same league file
//! the server uses.

use clap::Parser;
use poker_league::*;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Play a poker game at the terminal", long_about = None)]
struct Args {
    /// JSON file holding the league
    #[arg(long, env = "DATABASE_FILE", default_value = "cli.db.json")]
    database: std::path::PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let store = Arc::new(store::FileStore::open(&args.database)?);
    let game = Arc::new(game::Game::new(store));
    println!("It's poker time");
    println!("Type {{Name}} wins to record a win");
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();
    tokio::task::block_in_place(|| cli::Cli::new(game, stdin, stdout).play())?;
    Ok(())
}
