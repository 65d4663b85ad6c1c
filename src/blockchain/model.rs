use log::debug;

use super::{Block, pow};
use crate::error::ChainError;

/// Simple in-memory blockchain. Never empty: the genesis block is
/// synthesized at construction.
#[derive(Debug, Clone)]
pub struct Blockchain {
    pub chain: Vec<Block>,
}

impl Blockchain {
    /// Initialize a new blockchain with a genesis block.
    pub fn new() -> Self {
        Self {
            chain: vec![Block::genesis()],
        }
    }

    /// Append a block with the given proof and link. The proof is not
    /// checked here; see [`validate_chain`].
    pub fn create_block(&mut self, proof: u64, previous_hash: String) -> &Block {
        let index = self.chain.len() as u64 + 1;
        self.chain.push(Block::new(index, proof, previous_hash));
        self.last_block()
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        // `chain` is non-empty from construction on and nothing removes blocks.
        &self.chain[self.chain.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk the chain from the second block, recomputing each predecessor's
/// hash and re-checking each proof. The genesis block is trusted.
/// Stops at the first failure.
pub fn validate_chain(chain: &[Block]) -> Result<(), ChainError> {
    if chain.is_empty() {
        return Err(ChainError::EmptyChain);
    }

    for pair in chain.windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);

        if current.previous_hash != prev.compute_hash() {
            return Err(ChainError::BrokenLink {
                index: current.index,
            });
        }

        if !pow::is_valid_proof(current.proof, prev.proof) {
            return Err(ChainError::InvalidProof {
                index: current.index,
            });
        }
    }

    Ok(())
}

/// Boolean form of [`validate_chain`]. An empty chain is still an error.
pub fn is_chain_valid(chain: &[Block]) -> Result<bool, ChainError> {
    match validate_chain(chain) {
        Ok(()) => Ok(true),
        Err(ChainError::EmptyChain) => Err(ChainError::EmptyChain),
        Err(e) => {
            debug!("VALIDATE - {e}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::pow::proof_of_work;

    fn mine_into(bc: &mut Blockchain) {
        let prev = bc.last_block().clone();
        let proof = proof_of_work(prev.proof);
        bc.create_block(proof, prev.compute_hash());
    }

    fn mined_chain(extra_blocks: usize) -> Blockchain {
        let mut bc = Blockchain::new();
        for _ in 0..extra_blocks {
            mine_into(&mut bc);
        }
        bc
    }

    #[test]
    fn starts_with_genesis() {
        let bc = Blockchain::new();
        assert_eq!(bc.len(), 1);
        let g = bc.last_block();
        assert_eq!((g.index, g.proof, g.previous_hash.as_str()), (1, 1, "0"));
    }

    #[test]
    fn create_block_appends_without_checking_proof() {
        let mut bc = Blockchain::new();
        let b = bc.create_block(42, "whatever".into()).clone();
        assert_eq!(b.index, 2);
        assert_eq!(b.proof, 42);
        assert_eq!(b.previous_hash, "whatever");
        assert_eq!(bc.len(), 2);
        assert_eq!(bc.last_block(), &b);
    }

    #[test]
    fn genesis_only_is_valid() {
        assert_eq!(is_chain_valid(&Blockchain::new().chain), Ok(true));
    }

    #[test]
    fn empty_chain_is_an_error() {
        assert_eq!(validate_chain(&[]), Err(ChainError::EmptyChain));
        assert_eq!(is_chain_valid(&[]), Err(ChainError::EmptyChain));
    }

    #[test]
    fn mined_chain_is_valid() {
        let bc = mined_chain(3);
        assert_eq!(bc.len(), 4);
        let indexes: Vec<u64> = bc.chain.iter().map(|b| b.index).collect();
        assert_eq!(indexes, vec![1, 2, 3, 4]);
        assert_eq!(bc.chain[1].proof, 533);
        assert_eq!(bc.chain[2].proof, 45293);
        assert_eq!(validate_chain(&bc.chain), Ok(()));
    }

    #[test]
    fn tampered_proof_is_detected() {
        let mut bc = mined_chain(2);
        bc.chain[2].proof = 7;
        assert_eq!(
            validate_chain(&bc.chain),
            Err(ChainError::InvalidProof { index: 3 })
        );
        assert_eq!(is_chain_valid(&bc.chain), Ok(false));
    }

    #[test]
    fn tampered_link_is_detected() {
        let mut bc = mined_chain(2);
        bc.chain[1].previous_hash = "deadbeef".into();
        assert_eq!(
            validate_chain(&bc.chain),
            Err(ChainError::BrokenLink { index: 2 })
        );
        assert_eq!(is_chain_valid(&bc.chain), Ok(false));
    }

    #[test]
    fn tampering_a_middle_block_breaks_its_successor() {
        let mut bc = mined_chain(2);
        bc.chain[1].timestamp.push(' ');
        assert_eq!(
            validate_chain(&bc.chain),
            Err(ChainError::BrokenLink { index: 3 })
        );
    }

    #[test]
    fn tampered_last_block_proof_is_detected() {
        let mut bc = mined_chain(1);
        bc.chain[1].proof = 1_000_003;
        assert_eq!(is_chain_valid(&bc.chain), Ok(false));
    }

    #[test]
    fn unmined_block_is_rejected() {
        let mut bc = Blockchain::new();
        let link = bc.last_block().compute_hash();
        bc.create_block(2, link);
        assert_eq!(
            validate_chain(&bc.chain),
            Err(ChainError::InvalidProof { index: 2 })
        );
    }
}
