//! Protocol maxima shared with the circuits.
//!
//! These constants are part of the wire contract: changing one without a
//! coordinated circuit update is protocol-breaking. They are defined here,
//! once, and referenced everywhere else so no value can drift ad hoc.

/// Maximum encrypted logs emitted across all function calls of one tx.
pub const MAX_ENCRYPTED_LOGS_PER_TX: usize = 8;

/// Maximum unencrypted logs emitted across all function calls of one tx.
pub const MAX_UNENCRYPTED_LOGS_PER_TX: usize = 8;

/// Maximum note hashes accumulated per tx.
pub const MAX_NOTE_HASHES_PER_TX: usize = 8;

/// Maximum nullifiers accumulated per tx.
pub const MAX_NULLIFIERS_PER_TX: usize = 8;

/// Fixed slot count of the public call stacks in kernel outputs.
pub const MAX_PUBLIC_CALL_STACK_LENGTH_PER_TX: usize = 8;

// The log commitment pads every kind to one shared maximum; if these ever
// diverge the padded layout silently mismatches the circuit for one kind.
const _: () = assert!(MAX_ENCRYPTED_LOGS_PER_TX == MAX_UNENCRYPTED_LOGS_PER_TX);
