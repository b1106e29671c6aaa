//! League Server Binary
//!
//! Serves scores, the league table, and the WebSocket game.
//! Stops accepting on Ctrl+C and drains in-flight requests first.

use clap::Parser;
use poker_league::*;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    hosting::Server::run(config::Config::parse())
        .await
        .inspect_err(|e| log::error!("league server failed: {:#}", e))
}
