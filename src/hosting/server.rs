use super::*;
use crate::config::Config;
use crate::store::FileStore;
use crate::store::MemoryStore;
use crate::store::Store;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

pub struct Server;

impl Server {
    /// Loads the ledger and the game page, then serves until shutdown.
    /// Either load failing stops startup before anything is bound.
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let store: Arc<dyn Store> = match config.ephemeral {
            true => Arc::new(MemoryStore::default()),
            false => Arc::new(FileStore::open(&config.database)?),
        };
        let page = Page::load(&config.template)?;
        let house = web::Data::new(House::new(store, page));
        log::info!("starting league server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(house.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .shutdown_timeout(config.grace)
        .bind(&config.bind)?
        .run()
        .await?;
        log::info!("league server stopped");
        Ok(())
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/players/{name}")
            .route(web::get().to(handlers::score))
            .route(web::post().to(handlers::win)),
    )
    .route("/league/", web::get().to(handlers::league))
    .route("/game/", web::get().to(handlers::game))
    .route("/ws/", web::get().to(handlers::enter));
}
