use crate::INVALID_COUNT;
use crate::PLAYER_PROMPT;
use crate::game::Game;
use crate::game::Session;
use crate::game::SessionError;
use std::io::BufRead;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Errors surfaced to whoever is at the terminal.
#[derive(Debug)]
pub enum CliError {
    /// The player count was not a number, or too many to seat; no game was started.
    InvalidInput(String),
    Io(std::io::Error),
    Session(SessionError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(s) => write!(f, "expected a number of players, got {:?}", s),
            Self::Io(e) => write!(f, "terminal i/o failed: {}", e),
            Self::Session(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

/// Plays a single game at a terminal.
///
/// Blind alerts share the output with the prompts, so the writer sits
/// behind a mutex that the timer task also holds a handle to.
pub struct Cli<R, W> {
    game: Arc<Game>,
    input: R,
    output: Arc<Mutex<W>>,
}

impl<R, W> Cli<R, W>
where
    R: BufRead,
    W: Write + Send + 'static,
{
    pub fn new(game: Arc<Game>, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output: Arc::new(Mutex::new(output)),
        }
    }

    /// Asks for the player count, runs blinds until a `"{name} wins"` line
    /// arrives, and records that winner.
    pub fn play(&mut self) -> Result<(), CliError> {
        self.print(PLAYER_PROMPT)?;
        let count = self.line()?;
        let mut session = Session::new(self.game.clone());
        match count
            .trim()
            .parse::<usize>()
            .map(|players| session.start(players, self.output.clone()))
        {
            Ok(Ok(())) => {}
            Ok(Err(SessionError::TooManyPlayers(_))) | Err(_) => {
                self.print(INVALID_COUNT)?;
                return Err(CliError::InvalidInput(count));
            }
            Ok(Err(e)) => return Err(e.into()),
        }
        let winner = self.line()?;
        session.win(extract_winner(&winner))?;
        Ok(())
    }

    pub fn output(&self) -> Arc<Mutex<W>> {
        self.output.clone()
    }

    fn print(&self, text: &str) -> std::io::Result<()> {
        let mut out = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        write!(out, "{}", text)?;
        out.flush()
    }

    fn line(&mut self) -> std::io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// `"Chris wins"` names Chris. Lines without the suffix are taken whole.
fn extract_winner(line: &str) -> &str {
    let line = line.trim();
    line.strip_suffix(" wins").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::store::Store;
    use std::io::Cursor;

    fn cli(input: &str) -> (Cli<Cursor<Vec<u8>>, Vec<u8>>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let game = Arc::new(Game::new(store.clone()));
        let input = Cursor::new(input.as_bytes().to_vec());
        (Cli::new(game, input, Vec::new()), store)
    }

    fn printed(cli: &Cli<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(cli.output().lock().unwrap().clone()).unwrap()
    }

    #[tokio::test]
    async fn records_winner() {
        let (mut cli, store) = cli("5\nChris wins\n");
        cli.play().unwrap();
        assert_eq!(store.score("Chris"), 1);
        assert!(printed(&cli).starts_with(PLAYER_PROMPT));
    }

    #[tokio::test]
    async fn records_other_winner() {
        let (mut cli, store) = cli("7\nCleo wins\n");
        cli.play().unwrap();
        assert_eq!(store.score("Cleo"), 1);
        assert_eq!(store.score("Chris"), 0);
    }

    #[tokio::test]
    async fn rejects_non_numeric_count() {
        let (mut cli, store) = cli("pies\n");
        assert!(matches!(cli.play(), Err(CliError::InvalidInput(s)) if s == "pies"));
        assert_eq!(printed(&cli), format!("{}{}", PLAYER_PROMPT, INVALID_COUNT));
        assert!(store.league().is_empty());
    }

    #[tokio::test]
    async fn rejects_oversized_count() {
        for count in [usize::MAX.to_string(), (1usize << 58).to_string()] {
            let (mut cli, store) = cli(&format!("{}\nChris wins\n", count));
            assert!(matches!(cli.play(), Err(CliError::InvalidInput(s)) if s == count));
            assert_eq!(printed(&cli), format!("{}{}", PLAYER_PROMPT, INVALID_COUNT));
            assert!(store.league().is_empty());
        }
    }

    #[tokio::test]
    async fn closed_input_records_nothing() {
        let (mut cli, store) = cli("5\n");
        assert!(matches!(cli.play(), Err(CliError::Io(_))));
        assert!(store.league().is_empty());
    }

    #[test]
    fn winner_extraction() {
        assert_eq!(extract_winner("Chris wins"), "Chris");
        assert_eq!(extract_winner("  Cleo wins \n"), "Cleo");
        assert_eq!(extract_winner("Ruth"), "Ruth");
    }
}
