use actix_web::{HttpResponse, Responder, get, web};
use log::{debug, warn};

use super::models::{AppState, ChainResponse, ValidateResponse};
use crate::error::ChainError;

/// Get the full blockchain.
#[get("/get-chain")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.engine.get_chain();
    debug!("GET /get-chain - length={}", snapshot.length);
    HttpResponse::Ok().json(ChainResponse::from(snapshot))
}

/// Validate the whole chain.
#[get("/is-valid")]
pub async fn validate_chain(state: web::Data<AppState>) -> Result<HttpResponse, ChainError> {
    let valid = state.engine.validate()?;
    if !valid {
        warn!("GET /is-valid - chain failed validation");
    }
    Ok(HttpResponse::Ok().json(ValidateResponse::new(valid)))
}
