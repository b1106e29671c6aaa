use crate::INVALID_COUNT;
use crate::blinds::Sink;
use crate::game::Game;
use crate::game::Session;
use crate::game::SessionError;
use futures::Stream;
use futures::StreamExt;
use futures::future;
use std::sync::Arc;

/// Blind announcements go out as text frames on the live socket.
#[async_trait::async_trait]
impl Sink for actix_ws::Session {
    async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        self.text(line.to_string())
            .await
            .map_err(|_| anyhow::anyhow!("websocket closed"))
    }
}

/// Text frames from the client, ending at the first close or read error.
/// Other frame types are skipped.
pub fn inbox(stream: actix_ws::MessageStream) -> impl Stream<Item = String> + Unpin {
    Box::pin(
        stream
            .take_while(|msg| {
                future::ready(match msg {
                    Ok(actix_ws::Message::Close(reason)) => {
                        log::debug!("client closed socket: {:?}", reason);
                        false
                    }
                    Err(e) => {
                        log::error!("websocket read failed: {}", e);
                        false
                    }
                    _ => true,
                })
            })
            .filter_map(|msg| {
                future::ready(match msg {
                    Ok(actix_ws::Message::Text(text)) => Some(text.to_string()),
                    _ => None,
                })
            }),
    )
}

/// Plays one game over a message exchange.
///
/// The first frame holding a seatable player count starts the game; anything
/// before it, including counts above `MAX_PLAYERS`, is answered with a retry
/// prompt. The frame after that names the
/// winner. Returns the session in whatever phase it reached, so a caller that
/// drops it also stops any blinds still pending.
pub async fn converse<I, S>(game: Arc<Game>, mut inbox: I, mut outbox: S) -> Session
where
    I: Stream<Item = String> + Unpin,
    S: Sink + Clone + 'static,
{
    let mut session = Session::new(game);
    while let Some(frame) = inbox.next().await {
        match frame
            .trim()
            .parse::<usize>()
            .map(|players| session.start(players, outbox.clone()))
        {
            Ok(Ok(())) => break,
            Ok(Err(SessionError::TooManyPlayers(_))) | Err(_) => {
                log::warn!("bad player count {:?}", frame);
                if outbox.send(INVALID_COUNT).await.is_err() {
                    return session;
                }
            }
            Ok(Err(e)) => {
                log::error!("could not start game: {}", e);
                return session;
            }
        }
    }
    if !session.is_started() {
        log::info!("connection closed before the game started");
        return session;
    }
    match inbox.next().await {
        Some(winner) => {
            let _ = session
                .win(winner.trim())
                .inspect_err(|e| log::error!("could not record winner: {}", e));
        }
        None => log::info!("connection closed before a winner was named"),
    }
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use crate::store::MemoryStore;
    use crate::store::Store;
    use futures::stream;
    use tokio::sync::mpsc::unbounded_channel;

    fn game() -> (Arc<Game>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (Arc::new(Game::new(store.clone())), store)
    }

    fn frames(frames: &[&str]) -> impl Stream<Item = String> + Unpin + use<> {
        stream::iter(frames.iter().map(|f| f.to_string()).collect::<Vec<_>>())
    }

    #[tokio::test(start_paused = true)]
    async fn count_then_winner() {
        let (game, store) = game();
        let (tx, mut rx) = unbounded_channel::<String>();
        let session = converse(game, frames(&["3", "Ruth"]), tx).await;
        assert!(session.is_won());
        assert_eq!(store.score("Ruth"), 1);
        drop(session);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn bad_count_is_retried() {
        let (game, store) = game();
        let (tx, mut rx) = unbounded_channel::<String>();
        let session = converse(game, frames(&["lots", " 7 ", "Cleo\n"]), tx).await;
        assert_eq!(rx.recv().await.unwrap(), INVALID_COUNT);
        assert!(matches!(session.phase(), Phase::Won { winner } if winner == "Cleo"));
        assert_eq!(store.score("Cleo"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn closed_before_winner_keeps_started() {
        let (game, store) = game();
        let (tx, mut rx) = unbounded_channel::<String>();
        let session = converse(game, frames(&["5"]), tx).await;
        assert!(session.is_started());
        assert_eq!(rx.recv().await.unwrap(), "Blind is now 100");
        drop(session);
        assert!(rx.recv().await.is_none());
        assert!(store.league().is_empty());
    }

    #[tokio::test]
    async fn closed_before_count_stays_idle() {
        let (game, store) = game();
        let (tx, _rx) = unbounded_channel::<String>();
        let session = converse(game, frames(&[]), tx).await;
        assert!(matches!(session.phase(), Phase::Idle));
        assert!(store.league().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn oversized_count_is_retried() {
        let (game, store) = game();
        let (tx, mut rx) = unbounded_channel::<String>();
        let session = converse(
            game,
            frames(&["288230376151711744", usize::MAX.to_string().as_str(), "Ruth"]),
            tx,
        )
        .await;
        assert!(matches!(session.phase(), Phase::Idle));
        assert_eq!(rx.recv().await.unwrap(), INVALID_COUNT);
        assert_eq!(rx.recv().await.unwrap(), INVALID_COUNT);
        assert_eq!(rx.recv().await.unwrap(), INVALID_COUNT);
        assert_eq!(store.score("Ruth"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn oversized_count_then_real_game() {
        let (game, store) = game();
        let (tx, mut rx) = unbounded_channel::<String>();
        let session = converse(game, frames(&["288230376151711744", "4", "Ruth"]), tx).await;
        assert!(session.is_won());
        assert_eq!(rx.recv().await.unwrap(), INVALID_COUNT);
        assert_eq!(store.score("Ruth"), 1);
    }
}
