use super::*;
use crate::Wins;
use crate::league::Player;

/// Shared ledger backend used by the router and by game sessions.
///
/// Implementations serialize their own writers: concurrent `record` calls
/// for the same name never lose an update.
pub trait Store: Send + Sync {
    /// Wins for `name`, 0 when unknown.
    fn score(&self, name: &str) -> Wins;
    /// Adds one win for `name`, persisting before returning.
    fn record(&self, name: &str) -> Result<(), StoreError>;
    /// Players ordered by wins, most first.
    fn league(&self) -> Vec<Player>;
}
