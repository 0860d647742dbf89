#![deny(unsafe_code)]

//! Canonical wire formats and commitment hashes for transaction side effects
//! and kernel circuit outputs in the veil rollup.
//!
//! Everything in this crate is mirrored inside the proving circuits: the
//! sequencer, rollup builder and clients must produce byte-identical
//! encodings and hash commitments to the in-circuit computation, otherwise
//! the chain's content commitment diverges and proofs stop verifying. The
//! types exposed here enforce the following guarantees:
//!
//! * Variable-length data is framed with 4-byte big-endian length prefixes
//!   and decoded with explicit bounds checks; a declared length that exceeds
//!   the remaining buffer is always an error, never a silent truncation.
//! * Fixed objects serialize their fields in declared order. The order is a
//!   wire contract shared with the circuits and must never be changed
//!   unilaterally.
//! * Log commitments pad per-log hashes with zero blocks up to the per-kind
//!   protocol maximum before the truncating hash is applied. The maxima live
//!   in [`constants`] and the padding layout is protected by a compile-time
//!   assertion there.
//! * Capacity limits are enforced eagerly at construction and append time,
//!   so an over-capacity (unprovable) structure can never be built.
//!
//! Downstream components should treat these definitions as the source of
//! truth when exchanging transaction effects. Concurrency, transport and
//! proof generation live elsewhere; every operation here is a pure,
//! deterministic transformation over in-memory buffers.

pub mod constants;
pub mod errors;
pub mod fields;
pub mod hash;
pub mod kernel;
pub mod logs;
pub mod serialize;

pub use errors::{WireError, WireResult};
pub use fields::Fr;
pub use hash::{sha256_trunc, DIGEST_LENGTH};
pub use kernel::{KernelCircuitPublicInputs, PublicKernelCircuitPublicInputs, RevertCode};
pub use logs::{
    Encrypted, EncryptedFunctionLogs, EncryptedTxLogs, FunctionLogs, Log, LogKind, TxLogs,
    Unencrypted, UnencryptedFunctionLogs, UnencryptedTxLogs,
};
pub use serialize::{BufferReader, Decode, Encode};
