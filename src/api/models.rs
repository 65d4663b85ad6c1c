use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

use crate::blockchain::{Block, ChainEngine, ChainSnapshot};
use crate::error::ChainError;

pub const MINED_MESSAGE: &str = "Congratulations, you have mined a block";
pub const VALID_MESSAGE: &str = "The blockchain is valid, nothing is suspicious!";
pub const INVALID_MESSAGE: &str = "Something is wrong, the chain is not valid!";

/// Shared application state: the one engine owning the chain.
#[derive(Debug, Default)]
pub struct AppState {
    pub engine: ChainEngine,
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    pub index: u64,
    pub timestamp: String,
    pub proof: u64,
    pub previous_hash: String,
}

impl From<Block> for MineResponse {
    fn from(block: Block) -> Self {
        Self {
            message: MINED_MESSAGE,
            index: block.index,
            timestamp: block.timestamp,
            proof: block.proof,
            previous_hash: block.previous_hash,
        }
    }
}

#[derive(Serialize)]
pub struct ChainResponse {
    pub length: usize,
    pub chain: Vec<Block>,
}

impl From<ChainSnapshot> for ChainResponse {
    fn from(snapshot: ChainSnapshot) -> Self {
        Self {
            length: snapshot.length,
            chain: snapshot.chain,
        }
    }
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub message: &'static str,
}

impl ValidateResponse {
    pub fn new(valid: bool) -> Self {
        let message = if valid { VALID_MESSAGE } else { INVALID_MESSAGE };
        Self { valid, message }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for ChainError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
