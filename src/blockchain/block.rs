use std::collections::BTreeMap;
use std::io;

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, Serializer};
use sha2::{Digest, Sha256};

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF, TIMESTAMP_FORMAT};

/// A single block in the chain. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64, // 1-based position in the chain
    pub timestamp: String,
    pub proof: u64,
    pub previous_hash: String,
}

/// JSON formatter using `", "` and `": "` as separators.
struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

impl Block {
    /// Create the genesis block (first block in the chain).
    pub fn genesis() -> Self {
        Self::new(1, GENESIS_PROOF, GENESIS_PREVIOUS_HASH.to_string())
    }

    /// Create a block stamped with the current local time.
    pub fn new(index: u64, proof: u64, previous_hash: String) -> Self {
        Self::new_with_timestamp(index, proof, previous_hash, now_timestamp())
    }

    pub fn new_with_timestamp(
        index: u64,
        proof: u64,
        previous_hash: String,
        timestamp: String,
    ) -> Self {
        Self {
            index,
            timestamp,
            proof,
            previous_hash,
        }
    }

    /// Canonical byte encoding: a JSON object whose keys are sorted
    /// lexicographically, independent of struct field order.
    pub fn canonical_json(&self) -> Vec<u8> {
        let mut fields: BTreeMap<&str, serde_json::Value> = BTreeMap::new();
        fields.insert("index", self.index.into());
        fields.insert("timestamp", self.timestamp.as_str().into());
        fields.insert("proof", self.proof.into());
        fields.insert("previous_hash", self.previous_hash.as_str().into());

        let mut buf = Vec::with_capacity(128);
        let mut ser = Serializer::with_formatter(&mut buf, CanonicalFormatter);
        // Strings and integers written into memory cannot fail.
        fields
            .serialize(&mut ser)
            .expect("serialize canonical block");
        buf
    }

    /// SHA-256 of the canonical encoding, as lowercase hex.
    pub fn compute_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_json());
        hex::encode(hasher.finalize())
    }
}

fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
