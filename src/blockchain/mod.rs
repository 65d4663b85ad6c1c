pub mod block;
pub mod engine;
pub mod model;
pub mod pow;

pub use block::Block;
pub use engine::{ChainEngine, ChainSnapshot};
pub use model::Blockchain;

/// Proof-of-Work difficulty (number of leading `'0'` hex characters).
pub const DIFFICULTY: usize = 4;

/// Proof assigned to the genesis block.
pub const GENESIS_PROOF: u64 = 1;

/// `previous_hash` sentinel of the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Textual form of block timestamps (local time, microseconds).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
