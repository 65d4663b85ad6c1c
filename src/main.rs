mod api;
mod blockchain;
mod config;
mod error;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::info;

use api::AppState;
use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Config { host, port } = Config::from_env();

    let state = web::Data::new(AppState::default());
    info!(
        "⛓️ Starting proof chain API at http://{host}:{port} (genesis hash {})",
        state.engine.last_block().compute_hash()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
