use serde::{Deserialize, Serialize};

use crate::errors::WireResult;
use crate::fields::Fr;
use crate::serialize::{BufferReader, Decode, Encode};

/// Snapshot of one append-only merkle tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendOnlyTreeSnapshot {
    pub root: Fr,
    pub next_available_leaf_index: u32,
}

impl AppendOnlyTreeSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Encode for AppendOnlyTreeSnapshot {
    fn write(&self, buf: &mut Vec<u8>) {
        self.root.write(buf);
        self.next_available_leaf_index.write(buf);
    }
}

impl Decode for AppendOnlyTreeSnapshot {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            root: reader.read_object()?,
            next_available_leaf_index: reader.read_object()?,
        })
    }
}

/// The state trees a transaction's execution started from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialStateReference {
    pub note_hash_tree: AppendOnlyTreeSnapshot,
    pub nullifier_tree: AppendOnlyTreeSnapshot,
    pub public_data_tree: AppendOnlyTreeSnapshot,
}

impl PartialStateReference {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Encode for PartialStateReference {
    fn write(&self, buf: &mut Vec<u8>) {
        self.note_hash_tree.write(buf);
        self.nullifier_tree.write(buf);
        self.public_data_tree.write(buf);
    }
}

impl Decode for PartialStateReference {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            note_hash_tree: reader.read_object()?,
            nullifier_tree: reader.read_object()?,
            public_data_tree: reader.read_object()?,
        })
    }
}
