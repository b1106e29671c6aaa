use super::*;
use crate::Wins;

/// Every player that has ever won, in insertion order.
///
/// Names are unique and compared exactly (case-sensitive). Lookups are a
/// linear scan; leagues are small enough that an index buys nothing.
/// Serializes as a bare JSON array of [`Player`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct League(Vec<Player>);

impl From<Vec<Player>> for League {
    fn from(players: Vec<Player>) -> Self {
        Self(players)
    }
}

impl League {
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.0.iter().find(|p| p.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.0.iter_mut().find(|p| p.name == name)
    }

    /// Increments the winner, adding them with a single win if unseen.
    pub fn record(&mut self, name: &str) {
        match self.find_mut(name) {
            Some(player) => player.wins += 1,
            None => self.0.push(Player::new(name, 1)),
        }
    }

    /// Wins for `name`, or 0 when the name is unknown.
    /// An unknown player and a player with zero wins look the same here.
    pub fn score(&self, name: &str) -> Wins {
        self.find(name).map(|p| p.wins).unwrap_or(0)
    }

    /// Players ordered by wins, most first.
    /// Ties keep their insertion order.
    pub fn snapshot(&self) -> Vec<Player> {
        let mut players = self.0.clone();
        players.sort_by(|a, b| b.wins.cmp(&a.wins));
        players
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
