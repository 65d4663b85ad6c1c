mod chain;
mod health;
mod mining;
pub mod models;

use actix_web::web::ServiceConfig;

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(health::health_check)
        .service(mining::mine_block)
        .service(chain::get_chain)
        .service(chain::validate_chain);
}
