use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use log::{debug, info};
use serde::Serialize;

use super::{Block, Blockchain, model, pow};
use crate::error::ChainError;

/// Consistent copy of the chain taken under a single read lock.
#[derive(Debug, Clone, Serialize)]
pub struct ChainSnapshot {
    pub length: usize,
    pub chain: Vec<Block>,
}

/// Owned handle over the chain, shared by request handlers.
///
/// `mining` serializes whole mine operations so two blocks can never be
/// appended on top of the same predecessor. The chain itself sits behind
/// an `RwLock` that is only held for the snapshot and the final push, so
/// readers are not blocked while a proof is being searched.
#[derive(Debug, Default)]
pub struct ChainEngine {
    chain: RwLock<Blockchain>,
    mining: Mutex<()>,
}

impl ChainEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic cannot leave the chain half-written (the only mutation is a
    // single push), so poisoned locks are recovered.
    fn read(&self) -> RwLockReadGuard<'_, Blockchain> {
        self.chain.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Blockchain> {
        self.chain.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up the last block, search a proof for it and append the new
    /// block linking to it. Blocks until the search succeeds.
    pub fn mine(&self) -> Block {
        let _gate = self.mining.lock().unwrap_or_else(PoisonError::into_inner);

        let (previous_proof, previous_hash) = {
            let bc = self.read();
            let last = bc.last_block();
            (last.proof, last.compute_hash())
        };

        let t0 = Instant::now();
        let proof = pow::proof_of_work(previous_proof);
        debug!(
            "MINER - proof {} found in {} ms",
            proof,
            t0.elapsed().as_millis()
        );

        let block = {
            let mut bc = self.write();
            bc.create_block(proof, previous_hash).clone()
        };
        info!(
            "MINER - sealed block #{} (proof={}, previous_hash={})",
            block.index, block.proof, block.previous_hash
        );
        block
    }

    pub fn last_block(&self) -> Block {
        self.read().last_block().clone()
    }

    pub fn get_chain(&self) -> ChainSnapshot {
        let bc = self.read();
        ChainSnapshot {
            length: bc.len(),
            chain: bc.chain.clone(),
        }
    }

    /// Validate a snapshot of the current chain; the lock is released
    /// before hashes are recomputed.
    pub fn validate(&self) -> Result<bool, ChainError> {
        let snapshot = self.read().chain.clone();
        model::is_chain_valid(&snapshot)
    }

    #[cfg(test)]
    pub(crate) fn with_chain_mut<R>(&self, f: impl FnOnce(&mut Blockchain) -> R) -> R {
        f(&mut *self.write())
    }
}
