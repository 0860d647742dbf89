use serde::{Deserialize, Serialize};

use crate::constants::{
    MAX_NOTE_HASHES_PER_TX, MAX_NULLIFIERS_PER_TX, MAX_PUBLIC_CALL_STACK_LENGTH_PER_TX,
};
use crate::errors::WireResult;
use crate::fields::Fr;
use crate::hash::DIGEST_LENGTH;
use crate::kernel::call_request::CallRequest;
use crate::kernel::gas::Gas;
use crate::serialize::{BufferReader, Decode, Encode};

/// Side effects accumulated across private and public execution, as output
/// by the final (private) kernel stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedAccumulatedData {
    pub note_hashes: [Fr; MAX_NOTE_HASHES_PER_TX],
    pub nullifiers: [Fr; MAX_NULLIFIERS_PER_TX],
    pub encrypted_logs_hash: [u8; DIGEST_LENGTH],
    pub unencrypted_logs_hash: [u8; DIGEST_LENGTH],
    pub encrypted_log_preimages_length: u64,
    pub unencrypted_log_preimages_length: u64,
    pub gas_used: Gas,
}

impl CombinedAccumulatedData {
    pub fn empty() -> Self {
        Self {
            note_hashes: [Fr::ZERO; MAX_NOTE_HASHES_PER_TX],
            nullifiers: [Fr::ZERO; MAX_NULLIFIERS_PER_TX],
            encrypted_logs_hash: [0; DIGEST_LENGTH],
            unencrypted_logs_hash: [0; DIGEST_LENGTH],
            encrypted_log_preimages_length: 0,
            unencrypted_log_preimages_length: 0,
            gas_used: Gas::empty(),
        }
    }
}

impl Encode for CombinedAccumulatedData {
    fn write(&self, buf: &mut Vec<u8>) {
        for note_hash in &self.note_hashes {
            note_hash.write(buf);
        }
        for nullifier in &self.nullifiers {
            nullifier.write(buf);
        }
        self.encrypted_logs_hash.write(buf);
        self.unencrypted_logs_hash.write(buf);
        self.encrypted_log_preimages_length.write(buf);
        self.unencrypted_log_preimages_length.write(buf);
        self.gas_used.write(buf);
    }
}

impl Decode for CombinedAccumulatedData {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            note_hashes: reader.read_object_array()?,
            nullifiers: reader.read_object_array()?,
            encrypted_logs_hash: reader.read_object()?,
            unencrypted_logs_hash: reader.read_object()?,
            encrypted_log_preimages_length: reader.read_object()?,
            unencrypted_log_preimages_length: reader.read_object()?,
            gas_used: reader.read_object()?,
        })
    }
}

/// Side effects of one public-execution phase, kept separately for the
/// non-revertible and revertible portions of a tx.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAccumulatedData {
    pub note_hashes: [Fr; MAX_NOTE_HASHES_PER_TX],
    pub nullifiers: [Fr; MAX_NULLIFIERS_PER_TX],
    pub encrypted_logs_hash: [u8; DIGEST_LENGTH],
    pub unencrypted_logs_hash: [u8; DIGEST_LENGTH],
    pub public_call_stack: [CallRequest; MAX_PUBLIC_CALL_STACK_LENGTH_PER_TX],
    pub gas_used: Gas,
}

impl PublicAccumulatedData {
    pub fn empty() -> Self {
        Self {
            note_hashes: [Fr::ZERO; MAX_NOTE_HASHES_PER_TX],
            nullifiers: [Fr::ZERO; MAX_NULLIFIERS_PER_TX],
            encrypted_logs_hash: [0; DIGEST_LENGTH],
            unencrypted_logs_hash: [0; DIGEST_LENGTH],
            public_call_stack: [CallRequest::empty(); MAX_PUBLIC_CALL_STACK_LENGTH_PER_TX],
            gas_used: Gas::empty(),
        }
    }
}

impl Encode for PublicAccumulatedData {
    fn write(&self, buf: &mut Vec<u8>) {
        for note_hash in &self.note_hashes {
            note_hash.write(buf);
        }
        for nullifier in &self.nullifiers {
            nullifier.write(buf);
        }
        self.encrypted_logs_hash.write(buf);
        self.unencrypted_logs_hash.write(buf);
        for request in &self.public_call_stack {
            request.write(buf);
        }
        self.gas_used.write(buf);
    }
}

impl Decode for PublicAccumulatedData {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            note_hashes: reader.read_object_array()?,
            nullifiers: reader.read_object_array()?,
            encrypted_logs_hash: reader.read_object()?,
            unencrypted_logs_hash: reader.read_object()?,
            public_call_stack: reader.read_object_array()?,
            gas_used: reader.read_object()?,
        })
    }
}
