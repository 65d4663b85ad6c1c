use std::fmt;

/// Errors raised by the chain engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Validation was asked to check a sequence with no genesis block.
    EmptyChain,
    /// `previous_hash` of the block at `index` does not match its predecessor.
    BrokenLink { index: u64 },
    /// The proof of the block at `index` does not solve the puzzle.
    InvalidProof { index: u64 },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::EmptyChain => write!(f, "chain is empty (missing genesis block)"),
            ChainError::BrokenLink { index } => {
                write!(f, "block #{index} does not link to its predecessor")
            }
            ChainError::InvalidProof { index } => {
                write!(f, "block #{index} carries an invalid proof of work")
            }
        }
    }
}

impl std::error::Error for ChainError {}
