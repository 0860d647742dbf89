//! Log containers for transaction side effects and their commitment hashes.
//!
//! Logs form a two-level hierarchy: a transaction holds one
//! [`FunctionLogs`] per function invocation, each holding the raw
//! [`Log`] payloads that invocation emitted. The transaction-level
//! container computes the padded commitment hash bound into the block
//! header; the same computation runs inside the kernel circuits and both
//! must agree bit-for-bit.

use std::fmt;
use std::marker::PhantomData;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ENCRYPTED_LOGS_PER_TX, MAX_UNENCRYPTED_LOGS_PER_TX};
use crate::errors::{WireError, WireResult};
use crate::hash::{sha256_trunc, DIGEST_LENGTH};
use crate::serialize::{write_length_prefixed, BufferReader, Decode, Encode};

mod sealed {
    pub trait Sealed {}
}

/// Capability bundle for one log kind: the per-tx protocol maximum and a
/// name for diagnostics. Sealed; the only kinds are [`Encrypted`] and
/// [`Unencrypted`].
pub trait LogKind: sealed::Sealed + Clone + Copy + fmt::Debug + PartialEq + Eq + 'static {
    const MAX_LOGS_PER_TX: usize;
    const KIND_NAME: &'static str;
}

/// Marker for logs carrying ciphertext only the recipient can open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encrypted;

/// Marker for publicly readable logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unencrypted;

impl sealed::Sealed for Encrypted {}
impl sealed::Sealed for Unencrypted {}

impl LogKind for Encrypted {
    const MAX_LOGS_PER_TX: usize = MAX_ENCRYPTED_LOGS_PER_TX;
    const KIND_NAME: &'static str = "encrypted";
}

impl LogKind for Unencrypted {
    const MAX_LOGS_PER_TX: usize = MAX_UNENCRYPTED_LOGS_PER_TX;
    const KIND_NAME: &'static str = "unencrypted";
}

/// Opaque log payload emitted by a single contract call. Immutable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Log<K: LogKind> {
    data: Vec<u8>,
    #[serde(skip)]
    _kind: PhantomData<K>,
}

impl<K: LogKind> Log<K> {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            _kind: PhantomData,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Content hash of this log, as computed by the app circuit.
    pub fn hash(&self) -> [u8; DIGEST_LENGTH] {
        sha256_trunc(&self.data)
    }

    /// Serialized size: 4-byte length prefix plus the payload.
    pub fn serialized_length(&self) -> usize {
        4 + self.data.len()
    }

    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let len = 8 + (rng.next_u32() as usize % 57);
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        Self::new(data)
    }
}

impl<K: LogKind> Encode for Log<K> {
    fn write(&self, buf: &mut Vec<u8>) {
        write_length_prefixed(buf, &self.data);
    }
}

impl<K: LogKind> Decode for Log<K> {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self::new(reader.read_length_prefixed()?.to_vec()))
    }
}

/// Ordered logs emitted by one function invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct FunctionLogs<K: LogKind> {
    logs: Vec<Log<K>>,
}

impl<K: LogKind> FunctionLogs<K> {
    pub fn new(logs: Vec<Log<K>>) -> Self {
        Self { logs }
    }

    pub fn empty() -> Self {
        Self { logs: Vec::new() }
    }

    pub fn logs(&self) -> &[Log<K>] {
        &self.logs
    }

    pub fn log_count(&self) -> usize {
        self.logs.len()
    }

    /// Serialized size: 4-byte total-length prefix plus each log's encoding.
    pub fn serialized_length(&self) -> usize {
        4 + self
            .logs
            .iter()
            .map(Log::serialized_length)
            .sum::<usize>()
    }

    /// Decodes from `reader`. With `is_length_prefixed` the payload extent
    /// comes from an explicit 4-byte prefix; without it the rest of the
    /// buffer is consumed (used when the extent is known from the
    /// surrounding context).
    pub fn from_buffer(
        reader: &mut BufferReader<'_>,
        is_length_prefixed: bool,
    ) -> WireResult<Self> {
        let limit = if is_length_prefixed {
            Some(reader.read_u32()? as usize)
        } else {
            None
        };
        let blocks = reader.read_buffer_array(limit)?;
        let logs = blocks
            .into_iter()
            .map(|block| Log::new(block.to_vec()))
            .collect();
        Ok(Self { logs })
    }

    pub fn random(num_logs: usize) -> Self {
        Self {
            logs: (0..num_logs).map(|_| Log::random()).collect(),
        }
    }
}

impl<K: LogKind> Encode for FunctionLogs<K> {
    fn write(&self, buf: &mut Vec<u8>) {
        let mut payload = Vec::new();
        for log in &self.logs {
            log.write(&mut payload);
        }
        write_length_prefixed(buf, &payload);
    }
}

impl<K: LogKind> Decode for FunctionLogs<K> {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Self::from_buffer(reader, true)
    }
}

/// All logs of one kind emitted in one transaction.
///
/// Append-only: the public-call orchestrator adds function logs emitted
/// during public execution, nothing is ever removed. The total log count
/// can never exceed [`LogKind::MAX_LOGS_PER_TX`]; every constructor and
/// append enforces this eagerly so an over-capacity (unprovable) container
/// is never observable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TxLogs<K: LogKind> {
    function_logs: Vec<FunctionLogs<K>>,
}

pub type EncryptedFunctionLogs = FunctionLogs<Encrypted>;
pub type UnencryptedFunctionLogs = FunctionLogs<Unencrypted>;
pub type EncryptedTxLogs = TxLogs<Encrypted>;
pub type UnencryptedTxLogs = TxLogs<Unencrypted>;

impl<K: LogKind> TxLogs<K> {
    pub fn new(function_logs: Vec<FunctionLogs<K>>) -> WireResult<Self> {
        check_capacity::<K>(function_logs.iter().map(FunctionLogs::log_count).sum())?;
        Ok(Self { function_logs })
    }

    pub fn empty() -> Self {
        Self {
            function_logs: Vec::new(),
        }
    }

    pub fn function_logs(&self) -> &[FunctionLogs<K>] {
        &self.function_logs
    }

    /// The ordered flattening of all function lists' logs.
    pub fn unroll_logs(&self) -> Vec<&Log<K>> {
        self.function_logs
            .iter()
            .flat_map(|function| function.logs().iter())
            .collect()
    }

    pub fn total_log_count(&self) -> usize {
        self.function_logs
            .iter()
            .map(FunctionLogs::log_count)
            .sum()
    }

    /// Serialized size: 4-byte total-length prefix plus each function
    /// list's encoding.
    pub fn serialized_length(&self) -> usize {
        4 + self
            .function_logs
            .iter()
            .map(FunctionLogs::serialized_length)
            .sum::<usize>()
    }

    /// Appends function logs emitted after construction.
    ///
    /// The capacity check runs before any mutation: a rejected append
    /// leaves the container exactly as it was.
    pub fn add_function_logs(
        &mut self,
        function_logs: Vec<FunctionLogs<K>>,
    ) -> WireResult<()> {
        let added: usize = function_logs.iter().map(FunctionLogs::log_count).sum();
        check_capacity::<K>(self.total_log_count() + added)?;
        self.function_logs.extend(function_logs);
        Ok(())
    }

    /// Commitment hash over the unrolled logs, as computed in the kernel
    /// circuits.
    ///
    /// Empty logs commit to 32 zero bytes. Otherwise the per-log hashes are
    /// concatenated in unrolled order, zero-padded to the kind's protocol
    /// maximum block count, and passed through the truncating hash.
    pub fn hash(&self) -> [u8; DIGEST_LENGTH] {
        let unrolled = self.unroll_logs();
        if unrolled.is_empty() {
            return [0u8; DIGEST_LENGTH];
        }
        let mut flattened = Vec::with_capacity(K::MAX_LOGS_PER_TX * DIGEST_LENGTH);
        for log in unrolled {
            flattened.extend_from_slice(&log.hash());
        }
        flattened.resize(K::MAX_LOGS_PER_TX * DIGEST_LENGTH, 0);
        sha256_trunc(&flattened)
    }

    /// Decodes from `reader`; see [`FunctionLogs::from_buffer`] for the two
    /// length modes.
    pub fn from_buffer(
        reader: &mut BufferReader<'_>,
        is_length_prefixed: bool,
    ) -> WireResult<Self> {
        let limit = if is_length_prefixed {
            Some(reader.read_u32()? as usize)
        } else {
            None
        };
        let blocks = reader.read_buffer_array(limit)?;
        let function_logs = blocks
            .into_iter()
            .map(|block| {
                let mut inner = BufferReader::new(block);
                FunctionLogs::from_buffer(&mut inner, false)
            })
            .collect::<WireResult<Vec<_>>>()?;
        Self::new(function_logs)
    }

    /// Builds `num_calls` function lists with `num_logs_per_call` random
    /// logs each, rejecting combinations that exceed the kind's maximum.
    pub fn random(num_calls: usize, num_logs_per_call: usize) -> WireResult<Self> {
        check_capacity::<K>(num_calls.saturating_mul(num_logs_per_call))?;
        Ok(Self {
            function_logs: (0..num_calls)
                .map(|_| FunctionLogs::random(num_logs_per_call))
                .collect(),
        })
    }
}

fn check_capacity<K: LogKind>(count: usize) -> WireResult<()> {
    if count > K::MAX_LOGS_PER_TX {
        return Err(WireError::CapacityExceeded {
            kind: K::KIND_NAME,
            requested: count,
            maximum: K::MAX_LOGS_PER_TX,
        });
    }
    Ok(())
}

impl<K: LogKind> Encode for TxLogs<K> {
    fn write(&self, buf: &mut Vec<u8>) {
        let mut payload = Vec::new();
        for function in &self.function_logs {
            function.write(&mut payload);
        }
        write_length_prefixed(buf, &payload);
    }
}

impl<K: LogKind> Decode for TxLogs<K> {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Self::from_buffer(reader, true)
    }
}
