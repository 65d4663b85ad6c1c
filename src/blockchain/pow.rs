use log::debug;
use sha2::{Digest, Sha256};

use super::DIFFICULTY;

/// Decimal rendering of `new_proof^2 - previous_proof^2`.
///
/// Squares are taken in `u128`, so the difference is exact for every
/// `u64` proof; a negative result gets a leading `-`.
pub fn puzzle_input(new_proof: u64, previous_proof: u64) -> String {
    let new_sq = u128::from(new_proof) * u128::from(new_proof);
    let prev_sq = u128::from(previous_proof) * u128::from(previous_proof);
    if new_sq >= prev_sq {
        (new_sq - prev_sq).to_string()
    } else {
        format!("-{}", prev_sq - new_sq)
    }
}

/// SHA-256 of the puzzle input, as lowercase hex.
pub fn puzzle_digest(new_proof: u64, previous_proof: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(puzzle_input(new_proof, previous_proof).as_bytes());
    hex::encode(hasher.finalize())
}

/// True if `digest` starts with `DIFFICULTY` ASCII `'0'` characters.
pub fn meets_difficulty(digest: &str) -> bool {
    digest.len() >= DIFFICULTY && digest.bytes().take(DIFFICULTY).all(|c| c == b'0')
}

/// Check a proof against the one of the block before it.
pub fn is_valid_proof(new_proof: u64, previous_proof: u64) -> bool {
    meets_difficulty(&puzzle_digest(new_proof, previous_proof))
}

/// Linear search from 1 for the first proof that solves the puzzle
/// seeded by `previous_proof`. Runs until a solution is found.
pub fn proof_of_work(previous_proof: u64) -> u64 {
    // Exhausting the u64 range is not reachable at difficulty 4.
    let proof = (1..=u64::MAX)
        .find(|&candidate| is_valid_proof(candidate, previous_proof))
        .unwrap_or(u64::MAX);
    debug!("POW - previous_proof={previous_proof} solved with proof={proof} after {proof} attempts");
    proof
}
