use crate::blinds::Blinds;
use crate::blinds::Schedule;
use crate::blinds::Sink;
use crate::blinds::TooManyPlayers;
use crate::store::Store;
use crate::store::StoreError;
use std::sync::Arc;

/// Shared game logic: blind timing on the way in, the ledger on the way out.
/// One instance serves every session; it holds no per-game state.
#[derive(Clone)]
pub struct Game {
    store: Arc<dyn Store>,
}

impl Game {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Starts announcing blinds to `sink` for a table of `players`.
    /// Returns as soon as the timer is running.
    pub fn start<S>(&self, players: usize, sink: S) -> Result<Blinds, TooManyPlayers>
    where
        S: Sink + 'static,
    {
        let schedule = Schedule::try_from(players)?;
        log::info!(
            "starting game for {} players, blinds every {} minutes",
            players,
            schedule.interval().as_secs() / 60
        );
        Ok(Blinds::spawn(schedule, sink))
    }

    pub fn win(&self, winner: &str) -> Result<(), StoreError> {
        self.store
            .record(winner)
            .inspect(|_| log::info!("{} wins", winner))
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }
}
