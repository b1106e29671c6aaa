use super::*;
use crate::Wins;
use crate::league::League;
use crate::league::Player;
use std::io::BufReader;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Ledger persisted as one JSON document on a [`Medium`].
///
/// The medium is owned for the store's whole lifetime. Every win rewrites
/// the full document from offset zero and truncates the rest, so a reader
/// only ever sees the last complete league.
pub struct FileStore<M: Medium> {
    shelf: Mutex<Shelf<M>>,
}

/// The medium and its decoded league, locked together so that
/// mutate-serialize-write is one critical section.
struct Shelf<M> {
    medium: M,
    league: League,
}

impl FileStore<std::fs::File> {
    /// Opens `path` read-write, creating it if absent, and loads the league.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| StoreError::Open(path.to_path_buf(), e))
            .inspect(|_| log::info!("opened player store {}", path.display()))
            .and_then(Self::new)
    }
}

impl<M: Medium> FileStore<M> {
    /// Loads the league from `medium`, writing `[]` first if it is empty.
    pub fn new(mut medium: M) -> Result<Self, StoreError> {
        let init = |e: std::io::Error| StoreError::Init(e.to_string());
        if medium.size().map_err(init)? == 0 {
            medium.rewrite(b"[]").map_err(init)?;
            medium.seek(SeekFrom::Start(0)).map_err(init)?;
        }
        let league = serde_json::from_reader::<_, League>(BufReader::new(&mut medium))
            .map_err(|e| StoreError::Init(e.to_string()))?;
        log::debug!("loaded {} players", league.len());
        Ok(Self {
            shelf: Mutex::new(Shelf { medium, league }),
        })
    }

    /// Gives the medium back, e.g. to inspect what was written.
    pub fn into_inner(self) -> M {
        self.shelf
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .medium
    }

    fn shelf(&self) -> std::sync::MutexGuard<'_, Shelf<M>> {
        self.shelf.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M: Medium> Store for FileStore<M> {
    fn score(&self, name: &str) -> Wins {
        self.shelf().league.score(name)
    }

    fn record(&self, name: &str) -> Result<(), StoreError> {
        let mut shelf = self.shelf();
        let mut league = shelf.league.clone();
        league.record(name);
        let bytes = serde_json::to_vec(&league)
            .map_err(|e| StoreError::Write(std::io::Error::other(e)))?;
        shelf
            .medium
            .rewrite(&bytes)
            .map_err(StoreError::Write)
            .inspect_err(|e| log::error!("win for {} not recorded: {}", name, e))?;
        shelf.league = league;
        log::debug!("recorded win for {}", name);
        Ok(())
    }

    fn league(&self) -> Vec<Player> {
        self.shelf().league.snapshot()
    }
}
