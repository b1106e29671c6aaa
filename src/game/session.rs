use super::*;
use crate::blinds::Blinds;
use crate::blinds::Sink;
use crate::blinds::TooManyPlayers;
use crate::store::StoreError;
use std::sync::Arc;

/// Errors from driving a [`Session`] out of order.
#[derive(Debug)]
pub enum SessionError {
    AlreadyStarted,
    AlreadyWon(String),
    TooManyPlayers(usize),
    Store(StoreError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyStarted => write!(f, "game already started"),
            Self::AlreadyWon(w) => write!(f, "game already won by {}", w),
            Self::TooManyPlayers(n) => write!(f, "{}", TooManyPlayers(*n)),
            Self::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<TooManyPlayers> for SessionError {
    fn from(e: TooManyPlayers) -> Self {
        Self::TooManyPlayers(e.0)
    }
}

impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Where a single game is in its lifecycle.
#[derive(Debug)]
pub enum Phase {
    Idle,
    Started { players: usize, blinds: Blinds },
    Won { winner: String },
}

/// One game from player count to winner.
///
/// Idle → Started → Won. A win straight from Idle is allowed and records
/// the winner without any blinds having been announced. Leaving Started,
/// by winning or by dropping the session, cancels the blind timer.
pub struct Session {
    game: Arc<Game>,
    phase: Phase,
}

impl Session {
    pub fn new(game: Arc<Game>) -> Self {
        Self {
            game,
            phase: Phase::Idle,
        }
    }

    pub fn start<S>(&mut self, players: usize, sink: S) -> Result<(), SessionError>
    where
        S: Sink + 'static,
    {
        match self.phase {
            Phase::Idle => {
                let blinds = self.game.start(players, sink)?;
                self.phase = Phase::Started { players, blinds };
                Ok(())
            }
            Phase::Started { .. } => Err(SessionError::AlreadyStarted),
            Phase::Won { ref winner } => Err(SessionError::AlreadyWon(winner.clone())),
        }
    }

    pub fn win(&mut self, winner: &str) -> Result<(), SessionError> {
        match self.phase {
            Phase::Won { ref winner } => Err(SessionError::AlreadyWon(winner.clone())),
            Phase::Idle => {
                log::warn!("{} won a game that never started", winner);
                self.finish(winner)
            }
            Phase::Started { .. } => self.finish(winner),
        }
    }

    /// Blinds stop only once the win is on record; a failed write
    /// leaves the game running.
    fn finish(&mut self, winner: &str) -> Result<(), SessionError> {
        self.game.win(winner)?;
        if let Phase::Started { ref blinds, .. } = self.phase {
            blinds.cancel();
        }
        self.phase = Phase::Won {
            winner: winner.to_string(),
        };
        Ok(())
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_started(&self) -> bool {
        matches!(self.phase, Phase::Started { .. })
    }

    pub fn is_won(&self) -> bool {
        matches!(self.phase, Phase::Won { .. })
    }
}
