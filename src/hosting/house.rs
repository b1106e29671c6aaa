use super::*;
use crate::game::Game;
use crate::store::Store;
use std::sync::Arc;

/// Everything the routes share: the ledger, the game built on it,
/// and the page served to browsers.
pub struct House {
    store: Arc<dyn Store>,
    game: Arc<Game>,
    page: Page,
}

impl House {
    pub fn new(store: Arc<dyn Store>, page: Page) -> Self {
        Self {
            game: Arc::new(Game::new(store.clone())),
            store,
            page,
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    pub fn game(&self) -> Arc<Game> {
        self.game.clone()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Spawns a game conversation over an upgraded socket.
    /// The socket is closed once the game ends or the client goes away.
    pub fn bridge(&self, session: actix_ws::Session, stream: actix_ws::MessageStream) {
        let game = self.game();
        log::info!("client connected to game socket");
        actix_web::rt::spawn(async move {
            let played = converse(game, inbox(stream), session.clone()).await;
            log::info!("game socket finished, won: {}", played.is_won());
            drop(played);
            let _ = session
                .close(None)
                .await
                .inspect_err(|_| log::debug!("game socket already closed"));
        });
    }
}
