use crate::Wins;

/// A named entry in the league and the number of games it has won.
/// Serialized with the capitalised keys of the persisted file format.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    pub name: String,
    pub wins: Wins,
}

impl Player {
    pub fn new(name: &str, wins: Wins) -> Self {
        Self {
            name: name.to_string(),
            wins,
        }
    }
}
