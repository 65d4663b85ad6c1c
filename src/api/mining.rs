use actix_web::{HttpResponse, Responder, get, web};
use log::{error, info};

use super::models::{AppState, ErrorResponse, MineResponse};

/// Mine a new block on top of the current head.
///
/// The proof search is CPU-bound, so it runs on the blocking pool; the
/// engine serializes concurrent miners itself.
#[get("/mine")]
pub async fn mine_block(state: web::Data<AppState>) -> impl Responder {
    let mining_state = state.clone();
    match web::block(move || mining_state.engine.mine()).await {
        Ok(block) => {
            info!("GET /mine - block #{} proof={}", block.index, block.proof);
            HttpResponse::Ok().json(MineResponse::from(block))
        }
        Err(e) => {
            error!("GET /mine - mining task failed: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "mining task failed".to_string(),
            })
        }
    }
}
