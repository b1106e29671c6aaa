use super::*;
use crate::Wins;
use crate::league::League;
use crate::league::Player;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Ledger that lives only as long as the process.
/// Used for ephemeral servers and wherever a file would get in the way.
#[derive(Default)]
pub struct MemoryStore {
    league: Mutex<League>,
}

impl Store for MemoryStore {
    fn score(&self, name: &str) -> Wins {
        self.league
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .score(name)
    }

    fn record(&self, name: &str) -> Result<(), StoreError> {
        self.league
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(name);
        Ok(())
    }

    fn league(&self) -> Vec<Player> {
        self.league
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn records_and_scores() {
        let store = MemoryStore::default();
        store.record("Pepper").unwrap();
        store.record("Pepper").unwrap();
        store.record("Floyd").unwrap();
        assert_eq!(store.score("Pepper"), 2);
        assert_eq!(
            store.league(),
            vec![Player::new("Pepper", 2), Player::new("Floyd", 1)]
        );
    }

    #[test]
    fn concurrent_wins_are_not_lost() {
        let store = Arc::new(MemoryStore::default());
        std::thread::scope(|scope| {
            for _ in 0..1000 {
                let store = store.clone();
                scope.spawn(move || store.record("X").unwrap());
            }
        });
        assert_eq!(store.score("X"), 1000);
    }
}
